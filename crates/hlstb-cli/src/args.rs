use clap::Parser;
use std::ffi::OsString;

/// The testbench takes no options. Whatever is passed is collected and ignored,
/// including `--help` and `--version`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "hlstb",
    about = "Runs hls_main on its fixed test vector and exits with the verdict",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<OsString>,
}

impl Cli {
    /// Never fails: a parse error degrades to an empty argument list.
    pub fn parse_lenient() -> Self {
        Self::try_parse_from_lenient(std::env::args_os())
    }

    pub fn try_parse_from_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "unparseable arguments ignored");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from_lenient(["hlstb"]);
        assert!(cli.ignored.is_empty());
    }

    #[test]
    fn test_positionals_are_collected() {
        let cli = Cli::try_parse_from_lenient(["hlstb", "alpha", "beta"]);
        assert_eq!(cli.ignored, vec![OsString::from("alpha"), OsString::from("beta")]);
    }

    #[test]
    fn test_flags_are_collected_not_interpreted() {
        let cli = Cli::try_parse_from_lenient(["hlstb", "vector", "--help", "-V", "x"]);
        let expected: Vec<OsString> = ["vector", "--help", "-V", "x"]
            .into_iter()
            .map(OsString::from)
            .collect();
        assert_eq!(cli.ignored, expected);
    }
}
