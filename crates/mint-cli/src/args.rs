//! CLI arguments for the mint binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use mint_completion::MatcherStrategy;

#[derive(Parser, Debug)]
#[command(name = "mint", version, about = "Grammar-aware code completion for mint")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest completions at a caret position in a source file.
    Suggest {
        /// Source file to complete in.
        file: PathBuf,

        /// 1-based line of the caret.
        #[arg(short, long)]
        line: u32,

        /// 0-based column of the caret.
        #[arg(short, long)]
        column: u32,

        /// Candidate matching strategy.
        #[arg(long, value_enum, default_value = "prefix")]
        matcher: Matcher,

        /// Emit a JSON array instead of one suggestion per line.
        #[arg(long)]
        json: bool,
    },
    /// Parse a source file and report its diagnostics.
    Parse {
        /// Source file to parse.
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Matcher {
    Prefix,
    Fuzzy,
}

impl From<Matcher> for MatcherStrategy {
    fn from(matcher: Matcher) -> MatcherStrategy {
        match matcher {
            Matcher::Prefix => MatcherStrategy::Prefix,
            Matcher::Fuzzy => MatcherStrategy::Fuzzy,
        }
    }
}
