//! CLI argument definitions using clap

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

const DECODE_COMMAND: &str = "decode";

/// Morse code decoder backed by a binary dash/dot lookup tree
#[derive(Parser, Debug)]
#[command(name = "morsetree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Definition file (default: configured default file, then built-in table)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath, env = "MORSETREE_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a message of space separated codes
    Decode {
        /// Message tokens, joined with single spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Show the lookup tree
    Tree,

    /// Validate a definition file
    Check,

    /// Print the built-in standard definitions
    Table {
        /// Write to file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Interactive decode loop (default)
    Repl,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show config file locations
    Path,
}

/// Parse process arguments, keeping every token after `decode` as message text.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(escape_decode_message(args))
}

/// Insert `--` right after a `decode` subcommand.
///
/// `--` (the code for `m m`) would otherwise be eaten by clap as the end of
/// options. Global options therefore have to precede `decode`.
pub fn escape_decode_message<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut i = 1;
    while i < args.len() {
        let Some(arg) = args[i].to_str() else {
            break;
        };
        if arg == "--" {
            break;
        }
        if arg == "--file" || arg == "-f" || is_short_cluster_ending_in_file(arg) {
            i += 2;
            continue;
        }
        if arg.starts_with('-') && arg.len() > 1 {
            i += 1;
            continue;
        }
        if arg == DECODE_COMMAND {
            args.insert(i + 1, OsString::from("--"));
        }
        break;
    }
    args
}

/// `-df` takes its value from the next argument, `-dfx.morse` does not.
fn is_short_cluster_ending_in_file(arg: &str) -> bool {
    arg.len() > 2 && !arg.starts_with("--") && arg.starts_with('-') && arg.ends_with('f')
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    fn decoded_tokens(args: &[&str]) -> Vec<String> {
        match parse_args(args).unwrap().command {
            Some(Commands::Decode { message }) => message,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_dash_leading_tokens_when_parsing_decode_then_kept_as_message() {
        let cli = Cli::try_parse_from(["morsetree", "decode", "-", "...", "-.-."]).unwrap();
        match cli.command {
            Some(Commands::Decode { message }) => assert_eq!(message, vec!["-", "...", "-.-."]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts() {
        let cli = Cli::try_parse_from(["morsetree", "-dd", "tree"]).unwrap();
        assert_eq!(cli.debug, 2);
        assert!(matches!(cli.command, Some(Commands::Tree)));
    }

    #[rstest]
    #[case::leading_double_dash(&["morsetree", "decode", "--", "---"], &["--", "---"])]
    #[case::only_double_dash(&["morsetree", "decode", "--", "--"], &["--", "--"])]
    #[case::file_before_decode(&["morsetree", "-f", "x.morse", "decode", "--"], &["--"])]
    #[case::clustered_file_flag(&["morsetree", "-df", "x.morse", "decode", "--", "."], &["--", "."])]
    #[case::attached_file_value(&["morsetree", "--file=decode", "decode", "--"], &["--"])]
    fn given_double_dash_token_when_parsing_decode_then_kept_as_message(
        #[case] args: &[&str],
        #[case] expected: &[&str],
    ) {
        assert_eq!(decoded_tokens(args), expected);
    }

    #[test]
    fn given_file_named_decode_when_escaping_then_only_subcommand_is_escaped() {
        let escaped = escape_decode_message(["morsetree", "-f", "decode", "tree"]);
        assert_eq!(escaped, vec!["morsetree", "-f", "decode", "tree"]);
    }

    #[test]
    fn given_other_subcommand_when_escaping_then_args_unchanged() {
        let escaped = escape_decode_message(["morsetree", "-d", "table", "-o", "--"]);
        assert_eq!(escaped, vec!["morsetree", "-d", "table", "-o", "--"]);
    }

    #[test]
    fn given_double_dash_message_when_decoding_then_each_token_is_m() {
        let tokens = decoded_tokens(&["morsetree", "decode", "--", "--"]);
        let tree = crate::application::standard_tree().unwrap();
        assert_eq!(
            crate::application::decode_message(&tree, &tokens.join(" ")).unwrap(),
            "mm"
        );
    }
}
