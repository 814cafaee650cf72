//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use bookbot::catalog::GUTENDEX_API_URL;
use bookbot::fetch::DEFAULT_BOOKS_DIR;

/// Analyze text files from a local path or Project Gutenberg.
///
/// BookBot counts words and character frequencies in a plain-text book,
/// sourced either from a local file or from an interactive Project Gutenberg
/// search-and-download session.
#[derive(Parser, Debug)]
#[command(name = "bookbot")]
#[command(author, version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "search"])))]
pub struct Args {
    /// Path to the book file to analyze
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Search and download a book from Project Gutenberg
    #[arg(long)]
    pub search: bool,

    /// Directory downloaded books are saved into
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BOOKS_DIR)]
    pub books_dir: PathBuf,

    /// Catalog search endpoint
    #[arg(long, value_name = "URL", default_value = GUTENDEX_API_URL)]
    pub api_url: String,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_file_mode_parses() {
        let args = Args::try_parse_from(["bookbot", "--file", "books/dracula-345.txt"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("books/dracula-345.txt")));
        assert!(!args.search);
    }

    #[test]
    fn test_cli_search_mode_parses() {
        let args = Args::try_parse_from(["bookbot", "--search"]).unwrap();
        assert!(args.search);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_cli_requires_an_input_mode() {
        let result = Args::try_parse_from(["bookbot"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_cli_file_and_search_are_mutually_exclusive() {
        let result = Args::try_parse_from(["bookbot", "--file", "x.txt", "--search"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_cli_books_dir_defaults_to_books() {
        let args = Args::try_parse_from(["bookbot", "--search"]).unwrap();
        assert_eq!(args.books_dir, PathBuf::from("books"));
    }

    #[test]
    fn test_cli_books_dir_override() {
        let args =
            Args::try_parse_from(["bookbot", "--search", "--books-dir", "/tmp/library"]).unwrap();
        assert_eq!(args.books_dir, PathBuf::from("/tmp/library"));
    }

    #[test]
    fn test_cli_api_url_defaults_to_gutendex() {
        let args = Args::try_parse_from(["bookbot", "--search"]).unwrap();
        assert_eq!(args.api_url, GUTENDEX_API_URL);
    }

    #[test]
    fn test_cli_api_url_override() {
        let args = Args::try_parse_from([
            "bookbot",
            "--search",
            "--api-url",
            "http://localhost:8080/books",
        ])
        .unwrap();
        assert_eq!(args.api_url, "http://localhost:8080/books");
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["bookbot", "--search", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["bookbot", "--search", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["bookbot", "--search", "-q"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Args::try_parse_from(["bookbot", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["bookbot", "--search", "--invalid-flag"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
