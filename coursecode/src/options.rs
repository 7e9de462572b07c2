use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Options {
    /// Course identifiers to parse (e.g. "CS111 2018 Fall")
    #[clap(required = true)]
    pub inputs: Vec<String>,
    /// Format to output data
    #[clap(long, value_enum, default_value_t = DataFormat::Json)]
    pub format: DataFormat,
    /// Pretty-print JSON output
    #[clap(long)]
    pub pretty: bool,
    /// Exit with an error if any input fails to parse
    #[clap(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum DataFormat {
    Json,
    Text,
}
