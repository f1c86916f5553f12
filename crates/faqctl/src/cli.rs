//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// DigiSkills.PK FAQ assistant
#[derive(Parser, Debug)]
#[command(name = "faqctl")]
#[command(about = "DigiSkills.PK FAQ assistant - ask about courses and registration", long_about = None)]
#[command(version = env!("FAQCTL_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Config file (overrides $FAQCTL_CONFIG and the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Knowledge base file, .toml or .json (overrides config)
    #[arg(long, global = true)]
    pub kb: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand (if not provided, starts the chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive chat session
    Chat {
        /// Write the session transcript as JSON to this file on exit
        #[arg(long)]
        transcript: Option<PathBuf>,
    },

    /// Answer a single question
    Ask {
        /// The question (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Output JSON with the matched rule
        #[arg(long)]
        json: bool,
    },

    /// List categories and questions in match order
    List {
        /// Only this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show popular questions, or answer popular question N
    Popular {
        /// 1-based question number
        number: Option<usize>,
    },

    /// About DigiSkills.PK
    About,

    /// Validate the knowledge base and print a summary
    Check,
}

impl Cli {
    /// Command to run, defaulting to chat
    pub fn command_or_chat(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Chat { transcript: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_chat() {
        let cli = Cli::try_parse_from(["faqctl"]).unwrap();
        assert_eq!(cli.command_or_chat(), Commands::Chat { transcript: None });
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from(["faqctl", "ask", "ok", "bye", "--json"]).unwrap();
        match cli.command_or_chat() {
            Commands::Ask { question, json } => {
                assert_eq!(question.join(" "), "ok bye");
                assert!(json);
            }
            other => panic!("Expected Ask, got {:?}", other),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["faqctl", "ask"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["faqctl", "-vv", "list", "--kb", "kb.json", "--no-color"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.kb, Some(PathBuf::from("kb.json")));
        assert!(cli.no_color);
    }

    #[test]
    fn test_popular_number() {
        let cli = Cli::try_parse_from(["faqctl", "popular", "2"]).unwrap();
        assert_eq!(cli.command_or_chat(), Commands::Popular { number: Some(2) });
    }
}
