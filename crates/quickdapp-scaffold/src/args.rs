//! Command-line argument parsing
//!
//! The surface is deliberately small: one positional and three flags.
//! Parsing never fails. Unknown flags are ignored, and an invalid
//! `--pm` value is carried verbatim so the registry can reject it with
//! a proper error at the point of use.

/// Arguments parsed from the raw token list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// First positional token (project name or `.`/`./` for the current directory)
    pub project_name: Option<String>,
    /// Value given to `--pm`, unvalidated
    pub package_manager: Option<String>,
    /// `--help` / `-h`
    pub help: bool,
    /// `--version` / `-v`
    pub version: bool,
}

impl ParsedArgs {
    /// Parse the raw argument list (without the program name)
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut iter = args.into_iter().map(Into::into);

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => parsed.help = true,
                "--version" | "-v" => parsed.version = true,
                "--pm" => parsed.package_manager = iter.next(),
                _ if arg.starts_with('-') => {
                    // Unknown flag, ignore
                }
                _ => {
                    if parsed.project_name.is_none() {
                        parsed.project_name = Some(arg);
                    }
                }
            }
        }

        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_project_name() {
        let parsed = ParsedArgs::parse(["my-app"]);
        assert_eq!(parsed.project_name.as_deref(), Some("my-app"));
        assert!(parsed.package_manager.is_none());
        assert!(!parsed.help);
        assert!(!parsed.version);
    }

    #[test]
    fn test_sentinel_with_pm() {
        let parsed = ParsedArgs::parse([".", "--pm", "yarn"]);
        assert_eq!(parsed.project_name.as_deref(), Some("."));
        assert_eq!(parsed.package_manager.as_deref(), Some("yarn"));
    }

    #[test]
    fn test_help_flags() {
        assert!(ParsedArgs::parse(["--help"]).help);
        assert!(ParsedArgs::parse(["-h"]).help);
    }

    #[test]
    fn test_version_flags() {
        assert!(ParsedArgs::parse(["--version"]).version);
        assert!(ParsedArgs::parse(["-v"]).version);
    }

    #[test]
    fn test_trailing_pm_has_no_value() {
        let parsed = ParsedArgs::parse(["--pm"]);
        assert!(parsed.package_manager.is_none());
        assert!(parsed.project_name.is_none());
    }

    #[test]
    fn test_pm_value_is_not_validated_here() {
        let parsed = ParsedArgs::parse(["my-app", "--pm", "bogus"]);
        assert_eq!(parsed.package_manager.as_deref(), Some("bogus"));
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        let parsed = ParsedArgs::parse(["--frobnicate", "my-app", "--dry-run"]);
        assert_eq!(parsed.project_name.as_deref(), Some("my-app"));
        assert!(!parsed.help);
        assert!(!parsed.version);
    }

    #[test]
    fn test_only_first_positional_is_captured() {
        let parsed = ParsedArgs::parse(["first", "second"]);
        assert_eq!(parsed.project_name.as_deref(), Some("first"));
    }

    #[test]
    fn test_empty_args() {
        let parsed = ParsedArgs::parse(Vec::<String>::new());
        assert_eq!(parsed, ParsedArgs::default());
    }
}
