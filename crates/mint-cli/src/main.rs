//! The `mint` binary: completion suggestions and parse diagnostics from a
//! terminal. Syntax errors are data here, not failures - `parse` prints them
//! and still exits 0.

mod args;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mint_binder::BinderState;
use mint_common::{CaretPosition, LineMap};
use mint_completion::{Completions, compute_token_position};
use mint_parser::{Grammar, parse_source};

use args::{CliArgs, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    match args.command {
        Command::Suggest {
            file,
            line,
            column,
            matcher,
            json,
        } => suggest(&file, CaretPosition::new(line, column), matcher, json),
        Command::Parse { file } => parse(&file),
    }
}

fn suggest(file: &Path, caret: CaretPosition, matcher: args::Matcher, json: bool) -> Result<()> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let parse = parse_source(&source);
    debug!(errors = parse.error_count(), "parsed");
    let suggestions =
        match compute_token_position(&parse.arena, &parse.tokens, &source, caret) {
            Some(position) => {
                let binder = BinderState::bind_source_file(&parse, &source);
                let grammar = Grammar::mint();
                Completions::with_matcher(&parse, &binder, &grammar, matcher.into())
                    .suggestions_at(&position)
            }
            None => Vec::new(),
        };

    if json {
        println!("{}", serde_json::to_string(&suggestions)?);
    } else {
        for suggestion in suggestions {
            println!("{suggestion}");
        }
    }
    Ok(())
}

fn parse(file: &Path) -> Result<()> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let parse = parse_source(&source);
    let line_map = LineMap::build(&source);
    for diagnostic in &parse.diagnostics {
        let at = line_map.offset_to_caret(diagnostic.span.start);
        let label = if diagnostic.is_error() {
            "error".red().bold()
        } else {
            "warning".yellow().bold()
        };
        println!(
            "{}:{}:{}: {label}: {}",
            file.display(),
            at.line,
            at.column,
            diagnostic.message
        );
    }
    println!(
        "{} nodes, {} diagnostics",
        parse.arena.len(),
        parse.diagnostics.len()
    );
    Ok(())
}
