//! CLI commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inthash::{equal, matches_generation, parse, parse_canonical, IntHash};
use tracing::debug;

use crate::config::Config;
use crate::output::{render, Comparison, OutputFormat, Report};

/// Marker for an absent identifier in `compare`.
const ABSENT: &str = "-";

/// inthash - parse, render and compare generation/hash identifiers.
#[derive(Debug, Parser)]
#[command(name = "inthash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json). Defaults to INTHASH_OUTPUT, then text.
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse an identifier and show all of its representations.
    Parse {
        /// Canonical text such as `5$abc`, or a JSON value with --json.
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Treat the input as a JSON value (number, string or null).
        #[arg(long)]
        json: bool,
    },

    /// Build an identifier from its parts.
    Render {
        /// Generation counter.
        #[arg(long, allow_negative_numbers = true)]
        generation: i64,

        /// Content hash. Empty by default.
        #[arg(long, default_value = "")]
        hash: String,
    },

    /// Decode a JSON value, optionally on top of an existing identifier.
    ///
    /// A JSON number only replaces the generation of the existing identifier;
    /// a JSON string replaces it entirely; null leaves it as it is.
    Decode {
        /// Raw JSON, e.g. `7` or `"7$abc"`.
        #[arg(allow_hyphen_values = true)]
        json: String,

        /// Existing identifier in canonical text form.
        #[arg(long)]
        into: Option<String>,
    },

    /// Compare two identifiers given in canonical text form (`-` for absent).
    Compare {
        #[arg(allow_hyphen_values = true)]
        left: String,

        #[arg(allow_hyphen_values = true)]
        right: String,
    },
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: &Config) -> Result<()> {
        let format = self.output.unwrap_or(config.output);

        let rendered = match self.command {
            Commands::Parse { input, json } => {
                let value = if json {
                    let raw: serde_json::Value =
                        serde_json::from_str(&input).context("input is not valid JSON")?;
                    parse(&raw)
                } else {
                    parse(input.as_str())
                }
                .with_context(|| format!("failed to parse {input:?}"))?;

                debug!(generation = value.generation(), hash = %value.hash(), "parsed identifier");
                render(&Report::new(&value)?, format)?
            }
            Commands::Render { generation, hash } => {
                let value = IntHash::new(generation, hash);
                render(&Report::new(&value)?, format)?
            }
            Commands::Decode { json, into } => {
                let mut value = match into.as_deref() {
                    Some(existing) => parse_canonical(existing)
                        .with_context(|| format!("invalid --into identifier {existing:?}"))?,
                    None => IntHash::default(),
                };
                debug!(before = %value, "decoding into identifier");

                value
                    .merge_json(json.as_bytes())
                    .with_context(|| format!("failed to decode {json}"))?;

                debug!(after = %value, "decoded identifier");
                render(&Report::new(&value)?, format)?
            }
            Commands::Compare { left, right } => {
                let a = parse_side(&left)?;
                let b = parse_side(&right)?;
                let comparison = Comparison {
                    left: a.as_ref().map(ToString::to_string),
                    right: b.as_ref().map(ToString::to_string),
                    equal: equal(a.as_ref(), b.as_ref()),
                    matches_generation: matches_generation(a.as_ref(), b.as_ref()),
                };
                render(&comparison, format)?
            }
        };

        println!("{rendered}");
        Ok(())
    }
}

fn parse_side(text: &str) -> Result<Option<IntHash>> {
    if text == ABSENT {
        return Ok(None);
    }
    parse_canonical(text)
        .map(Some)
        .with_context(|| format!("failed to parse {text:?}"))
}
