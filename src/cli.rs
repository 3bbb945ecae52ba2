use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "stylus-playground", about = "Rust vs Stylus interactive example playground", version)]
#[command(group(ArgGroup::new("mode").args(["list", "show", "explain", "run", "file"]).multiple(false)))]
pub struct Cli {
    /// Example selected when the interactive playground opens.
    #[arg(long, value_name = "NAME")]
    pub example: Option<String>,

    /// List the built-in examples.
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Print the list as JSON (with --list).
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Print the source of an example.
    #[arg(long, value_name = "NAME")]
    pub show: Option<String>,

    /// Print the explanation of an example.
    #[arg(long, value_name = "NAME")]
    pub explain: Option<String>,

    /// Compile and run an example without the TUI.
    #[arg(long, value_name = "NAME")]
    pub run: Option<String>,

    /// Compile and run a source file without the TUI.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Compiler executable (overrides PLAYGROUND_COMPILER).
    #[arg(long, value_name = "PROGRAM")]
    pub compiler: Option<String>,

    /// Run time limit in seconds for the compiled program (overrides PLAYGROUND_RUN_TIMEOUT).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_are_exclusive() {
        assert!(Cli::try_parse_from(["stylus-playground", "--list", "--run", "Functions"]).is_err());
        assert!(Cli::try_parse_from(["stylus-playground", "--json"]).is_err());
    }

    #[test]
    fn test_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "stylus-playground",
            "--run",
            "Hello world!",
            "--compiler",
            "rustc-1.80",
            "--timeout",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.run.as_deref(), Some("Hello world!"));
        assert_eq!(cli.compiler.as_deref(), Some("rustc-1.80"));
        assert_eq!(cli.timeout, Some(3));
        assert!(cli.example.is_none());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["stylus-playground", "--run", "Functions", "--timeout", "0"]).is_err());
        let cli = Cli::try_parse_from(["stylus-playground", "--timeout", "1"]).unwrap();
        assert_eq!(cli.timeout, Some(1));
    }
}
