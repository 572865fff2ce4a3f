//! Output formatting for CLI commands.

use clap::ValueEnum;
use inthash::IntHash;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Text,
    /// JSON format.
    Json,
}

/// One line of the text output.
#[derive(Debug, Tabled)]
pub struct Row {
    pub field: &'static str,
    pub value: String,
}

impl Row {
    fn new(field: &'static str, value: impl ToString) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Something that can be printed as a field/value table.
pub trait Rows {
    fn rows(&self) -> Vec<Row>;
}

/// Every representation of a single identifier.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generation: i64,
    pub hash: String,
    pub zero: bool,
    pub canonical: String,
    pub json: serde_json::Value,
    pub query: String,
}

impl Report {
    pub fn new(value: &IntHash) -> serde_json::Result<Self> {
        Ok(Self {
            generation: value.generation(),
            hash: value.hash().to_string(),
            zero: value.is_zero(),
            canonical: value.to_string(),
            json: serde_json::to_value(value)?,
            query: value.to_query_param(),
        })
    }
}

impl Rows for Report {
    fn rows(&self) -> Vec<Row> {
        vec![
            Row::new("generation", self.generation),
            Row::new("hash", &self.hash),
            Row::new("zero", self.zero),
            Row::new("canonical", &self.canonical),
            Row::new("json", &self.json),
            Row::new("query", &self.query),
        ]
    }
}

/// Result of comparing two possibly absent identifiers.
#[derive(Debug, Serialize)]
pub struct Comparison {
    pub left: Option<String>,
    pub right: Option<String>,
    pub equal: bool,
    pub matches_generation: bool,
}

impl Rows for Comparison {
    fn rows(&self) -> Vec<Row> {
        let show = |side: &Option<String>| side.clone().unwrap_or_else(|| "<absent>".to_string());
        vec![
            Row::new("left", show(&self.left)),
            Row::new("right", show(&self.right)),
            Row::new("equal", self.equal),
            Row::new("matches_generation", self.matches_generation),
        ]
    }
}

/// Renders data in the specified format.
pub fn render<T: Serialize + Rows>(data: &T, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut table = Table::new(data.rows());
            table.with(Style::blank());
            Ok(table.to_string())
        }
        OutputFormat::Json => serde_json::to_string_pretty(data),
    }
}
