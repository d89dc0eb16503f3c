//! Command-line arguments.

use clap::{ArgGroup, Parser};

/// Fetch a page over raw HTTP/HTTPS sockets and print its outline.
#[derive(Debug, Parser)]
#[command(name = "rawfetch", version)]
#[command(group(ArgGroup::new("action").required(true).args(["url", "search"])))]
pub struct Args {
    /// Make an HTTP request to the specified URL and print the response
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Search the reference page for a term and print the top matches
    #[arg(short = 's', long)]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_url_flag() {
        let args = Args::try_parse_from(["rawfetch", "-u", "http://x.com"]).unwrap();
        assert_eq!(args.url.as_deref(), Some("http://x.com"));
        assert!(args.search.is_none());
    }

    #[test]
    fn test_search_flag() {
        let args = Args::try_parse_from(["rawfetch", "--search", "socket"]).unwrap();
        assert_eq!(args.search.as_deref(), Some("socket"));
    }

    #[test]
    fn test_no_arguments_is_an_error() {
        let err = Args::try_parse_from(["rawfetch"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_url_and_search_conflict() {
        let err = Args::try_parse_from(["rawfetch", "-u", "http://x.com", "-s", "a"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_help() {
        let err = Args::try_parse_from(["rawfetch", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
