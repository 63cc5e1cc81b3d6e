use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Normalize, sort and inspect steno strokes", long_about = None)]
pub struct Cli {
    /// Layout file (TOML); the English layout is used when omitted
    #[arg(short = 'l', long = "layout", env = "STENO_LAYOUT", global = true)]
    pub layout: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canonical form of multi-stroke steno
    Normalize {
        #[arg(required = true)]
        steno: Vec<String>,
    },

    /// Print the sort key of multi-stroke steno as hex bytes
    SortKey {
        #[arg(required = true)]
        steno: Vec<String>,
    },

    /// Sort steno entries, one per line, in stroke order
    Sort {
        /// Input file (stdin when omitted)
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Skip lines that are not valid steno instead of failing
        #[arg(long = "skip-invalid")]
        skip_invalid: bool,
    },

    /// Write a CSV description of single strokes
    Inspect {
        #[arg(required = true)]
        strokes: Vec<String>,

        /// Output file (stdout when omitted)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Print the active layout
    Layout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sort_flags() {
        let cli = Cli::try_parse_from(["steno", "sort", "--skip-invalid", "-i", "dict.txt"]).unwrap();
        match cli.command {
            Command::Sort {
                input,
                skip_invalid,
            } => {
                assert_eq!(input, Some(PathBuf::from("dict.txt")));
                assert!(skip_invalid);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_layout_flag_is_global() {
        let cli = Cli::try_parse_from(["steno", "normalize", "ST", "--layout", "my.toml"]).unwrap();
        assert_eq!(cli.layout, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_normalize_requires_steno() {
        assert!(Cli::try_parse_from(["steno", "normalize"]).is_err());
    }
}
