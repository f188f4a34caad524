//! Suggest street-name etymologies from the command line
//!
//! Usage: suggest_etymology [--markdown | --compact] <street name>...
//!
//! Prints one suggestion per argument (pretty JSON envelope by default).
//! Invalid names print the error envelope to stderr.

use street_etymology::etymology::{suggest_etymology, JsonFormatter, MarkdownFormatter};

const USAGE: &str = "Usage: suggest_etymology [--markdown | --compact] <street name>...";

#[derive(Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    CompactJson,
    Markdown,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Suggest { format: OutputFormat, names: Vec<String> },
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Command> {
    let mut format = OutputFormat::Json;
    let mut names = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--markdown" => format = OutputFormat::Markdown,
            "--compact" => format = OutputFormat::CompactJson,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with("--") => {
                anyhow::bail!("Unknown option: {}\n{}", flag, USAGE);
            }
            _ => names.push(arg),
        }
    }

    if names.is_empty() {
        anyhow::bail!("{}", USAGE);
    }

    Ok(Command::Suggest { format, names })
}

fn main() -> anyhow::Result<()> {
    let (format, names) = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Suggest { format, names } => (format, names),
    };

    let mut failures = 0;
    for name in &names {
        match suggest_etymology(name) {
            Ok(suggestion) => {
                let output = match format {
                    OutputFormat::Json => JsonFormatter::format(&suggestion)?,
                    OutputFormat::CompactJson => JsonFormatter::format_compact(&suggestion)?,
                    OutputFormat::Markdown => MarkdownFormatter::format(&suggestion),
                };
                println!("{}", output);
            }
            Err(err) => {
                eprintln!("{}", err.to_envelope());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} street names could not be processed", failures, names.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_names_and_format() {
        let command = parse_args(args(&["--markdown", "Church Lane", "Brighton"])).unwrap();
        assert_eq!(
            command,
            Command::Suggest {
                format: OutputFormat::Markdown,
                names: args(&["Church Lane", "Brighton"]),
            }
        );
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = parse_args(args(&["--json", "Baker Street"])).unwrap_err();
        assert!(err.to_string().contains("Unknown option: --json"));
    }

    #[test]
    fn test_no_names_rejected() {
        assert!(parse_args(args(&["--compact"])).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(args(&["-h", "--json"])).unwrap(), Command::Help);
    }
}
