//! Simple command that prints one or '-n count' UUID strings of version '-v 4|7'

use std::{env, io, io::Write, process::ExitCode};

#[derive(Debug, Eq, PartialEq)]
struct Options {
    version: u8,
    count: usize,
    uppercase: bool,
}

fn main() -> io::Result<ExitCode> {
    env_logger::init();

    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {message}");
                eprintln!(
                    "Usage: {} [-v 4|7] [-n count] [-u]",
                    program.as_deref().unwrap_or("uuid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count {
        let generated = match opts.version {
            4 => uuid47::uuid4(),
            _ => uuid47::uuid7(),
        };
        let uuid = match generated {
            Ok(uuid) => uuid,
            Err(err) => {
                buf.flush()?;
                eprintln!("Error: {err}");
                return Ok(ExitCode::FAILURE);
            }
        };
        if opts.uppercase {
            writeln!(buf, "{}", uuid.encode().to_uppercase())?;
        } else {
            writeln!(buf, "{uuid}")?;
        }
    }
    buf.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut version = None;
    let mut count = None;
    let mut uppercase = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-u" => uppercase = true,
            "-v" => {
                if version.is_some() {
                    return Err("option 'v' given more than once".to_owned());
                }
                let Some(v_arg) = args.next() else {
                    return Err("argument to option 'v' missing".to_owned());
                };
                match v_arg.as_str() {
                    "4" => version.replace(4),
                    "7" => version.replace(7),
                    _ => return Err(format!("unsupported UUID version: '{v_arg}'")),
                };
            }
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                match n_arg.parse::<usize>() {
                    Ok(c) if c > 0 => count.replace(c),
                    _ => return Err(format!("invalid argument to option 'n': '{n_arg}'")),
                };
            }
            _ => return Err(format!("unrecognized argument '{arg}'")),
        }
    }
    Ok(Options {
        version: version.unwrap_or(4),
        count: count.unwrap_or(1),
        uppercase,
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_args, Options};

    fn parse(args: &[&str]) -> Result<Options, String> {
        parse_args(args.iter().map(|e| e.to_string()))
    }

    /// Applies defaults and parses all options
    #[test]
    fn applies_defaults_and_parses_all_options() {
        assert_eq!(
            parse(&[]),
            Ok(Options {
                version: 4,
                count: 1,
                uppercase: false
            })
        );
        assert_eq!(
            parse(&["-v", "7", "-n", "3", "-u"]),
            Ok(Options {
                version: 7,
                count: 3,
                uppercase: true
            })
        );
    }

    /// Rejects invalid options
    #[test]
    fn rejects_invalid_options() {
        for args in [
            &["-v", "5"][..],
            &["-v"],
            &["-v", "4", "-v", "7"],
            &["-n", "0"],
            &["-n", "-1"],
            &["-n"],
            &["-x"],
        ] {
            assert!(parse(args).is_err(), "{args:?}");
        }
    }
}
