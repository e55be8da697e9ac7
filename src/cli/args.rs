//! Command-line argument parsing for the Marklee CLI.

use crate::domain::pagination::DEFAULT_MAX_VISIBLE_PAGES;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the server (default)
    Serve,
    /// Print the page window for a pagination state
    Pages {
        current: u32,
        total: u32,
        max_visible: u32,
    },
    /// Print the route guard decision for a path and optional claim
    Guard { path: String, claim: Option<String> },
    /// Arguments could not be parsed
    Invalid(String),
}

/// Usage text printed by `--help` and on invalid arguments.
pub const USAGE: &str = "\
Usage:
  marklee [serve]                       Start the server
  marklee pages <current> <total> [max] Print the visible page window
  marklee guard <path> [claim-json]     Print the route guard decision
  marklee --version                     Print the version
  marklee --help                        Print this help";

fn parse_number(name: &str, value: Option<&String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing <{}>", name))?;
    value
        .parse()
        .map_err(|_| format!("<{}> must be a non-negative integer, got '{}'", name, value))
}

/// Parse command-line arguments and return the command to run.
///
/// # Examples
///
/// ```
/// use marklee::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["marklee".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        return CliCommand::Version;
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return CliCommand::Help;
    }

    match args.first().map(String::as_str) {
        None | Some("serve") => CliCommand::Serve,
        Some("pages") => {
            let parsed = parse_number("current", args.get(1)).and_then(|current| {
                let total = parse_number("total", args.get(2))?;
                let max_visible = match args.get(3) {
                    Some(_) => parse_number("max", args.get(3))?,
                    None => DEFAULT_MAX_VISIBLE_PAGES,
                };
                Ok(CliCommand::Pages {
                    current,
                    total,
                    max_visible,
                })
            });
            parsed.unwrap_or_else(CliCommand::Invalid)
        }
        Some("guard") => match args.get(1) {
            Some(path) => CliCommand::Guard {
                path: path.clone(),
                claim: args.get(2).cloned(),
            },
            None => CliCommand::Invalid("missing <path>".to_string()),
        },
        Some(other) => CliCommand::Invalid(format!("unknown command '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["marklee".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
        assert_eq!(parse(&["serve", "--version"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args_serves() {
        assert_eq!(parse(&[]), CliCommand::Serve);
        assert_eq!(parse(&["serve"]), CliCommand::Serve);
    }

    #[test]
    fn test_parse_pages() {
        assert_eq!(
            parse(&["pages", "5", "10"]),
            CliCommand::Pages {
                current: 5,
                total: 10,
                max_visible: 5
            }
        );
        assert_eq!(
            parse(&["pages", "5", "10", "3"]),
            CliCommand::Pages {
                current: 5,
                total: 10,
                max_visible: 3
            }
        );
    }

    #[test]
    fn test_parse_pages_invalid() {
        assert!(matches!(parse(&["pages", "5"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["pages", "x", "10"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["pages", "1", "2", "-3"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_guard() {
        assert_eq!(
            parse(&["guard", "/dashboard", r#"{"role":"user"}"#]),
            CliCommand::Guard {
                path: "/dashboard".to_string(),
                claim: Some(r#"{"role":"user"}"#.to_string())
            }
        );
        assert_eq!(
            parse(&["guard", "/"]),
            CliCommand::Guard {
                path: "/".to_string(),
                claim: None
            }
        );
        assert!(matches!(parse(&["guard"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(parse(&["frobnicate"]), CliCommand::Invalid(_)));
    }
}
