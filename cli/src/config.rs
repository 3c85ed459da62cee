use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use graph_dls_core::SearchRequest;

use crate::Args;

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Fully resolved run settings: flags first, interactive prompts for the rest.
#[derive(Debug, Clone)]
pub struct Settings {
    pub request: SearchRequest,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub color: bool,
    pub render: bool,
}

impl Settings {
    /// Merge command-line flags with answers read from `input`.
    ///
    /// Prompts are written to `prompt` only for values missing from `args`.
    /// `color_capable` reports whether stdout can show ANSI colors.
    pub fn resolve<R: BufRead, W: Write>(
        args: &Args,
        input: &mut R,
        prompt: &mut W,
        color_capable: bool,
    ) -> Result<Self> {
        let start = match &args.start {
            Some(s) => normalize_node(s),
            None => normalize_node(&ask(input, prompt, "Enter the start node: ")?),
        };
        let goal = match &args.goal {
            Some(s) => normalize_node(s),
            None => normalize_node(&ask(input, prompt, "Enter the goal node: ")?),
        };
        let limit = match args.limit {
            Some(l) => l,
            None => parse_limit(&ask(input, prompt, "Enter the depth limit: ")?)?,
        };

        Ok(Self {
            request: SearchRequest::new(start, goal, limit),
            output: args.output.clone(),
            format: args.format,
            color: color_capable && !args.no_color,
            render: !args.no_render,
        })
    }
}

/// Trim surrounding whitespace and upper-case a node name.
pub fn normalize_node(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Parse a depth limit. Any integer is accepted, including negatives.
pub fn parse_limit(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .with_context(|| format!("depth limit must be an integer, got '{}'", trimmed))
}

/// Write a prompt and read one line. End of input is an error.
fn ask<R: BufRead, W: Write>(input: &mut R, prompt: &mut W, message: &str) -> Result<String> {
    write!(prompt, "{}", message)?;
    prompt.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read from stdin")?;
    if read == 0 {
        bail!("unexpected end of input while waiting for: {}", message.trim_end());
    }
    Ok(line)
}
