//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

use crate::dir::DemoDirectory;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(DemoDirectory),
}

/// Parse command-line arguments, `args[0]` being the program name.
///
/// `--version` and `--help` print to stderr and exit.
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("sdk-demo");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of the demo datadir
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--datadir" {
            if let Some(a) = iter.next() {
                res.push(Arg::DatadirPath(DemoDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else {
            return Err(format!("unknown argument {}", arg).into());
        }
    }

    Ok(res)
}

/// Datadir given on the command line, or the default one.
pub fn datadir(args: &[Arg]) -> Result<DemoDirectory, Box<dyn Error>> {
    match args {
        [] => DemoDirectory::new_default(),
        [Arg::DatadirPath(datadir_path)] => Ok(datadir_path.clone()),
        _ => Err("Unknown args combination".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "0.1.0";

    fn args(line: &str) -> Vec<String> {
        line.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(parse_args(args("app --meth"), VERSION).is_err());
        assert!(parse_args(args("app --datadir"), VERSION).is_err());
        assert_eq!(
            Some(vec![]),
            parse_args(vec!["app".to_string()], VERSION).ok()
        );
        assert_eq!(
            Some(vec![Arg::DatadirPath(DemoDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(args("app --datadir hello"), VERSION).ok()
        );
    }

    #[test]
    fn test_datadir() {
        let custom = DemoDirectory::new(PathBuf::from("hello"));
        assert_eq!(
            datadir(&[Arg::DatadirPath(custom.clone())]).unwrap(),
            custom
        );
        assert!(datadir(&[
            Arg::DatadirPath(custom.clone()),
            Arg::DatadirPath(custom)
        ])
        .is_err());
    }
}
