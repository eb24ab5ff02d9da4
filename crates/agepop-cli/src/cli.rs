//! CLI argument definitions.

use std::path::PathBuf;

use agepop_ingest::TableEncoding;
use agepop_model::{Metric, Scale};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "agepop",
    version,
    about = "Regional age-population explorer",
    long_about = "Explore resident population exports by administrative area.\n\n\
                  Prints per-age distributions, age-bucket shares, and the region\n\
                  with the most similar age profile."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML configuration file (column names, buckets, defaults).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List addressable regions with their total population.
    Regions(InputArgs),

    /// Print the per-age male/female distribution of a region.
    Distribution(DistributionArgs),

    /// Print the population share of each age bucket.
    Buckets(RegionArgs),

    /// Find the region with the most similar age profile.
    Similar(SimilarArgs),

    /// Distribution, buckets and closest region in one report.
    Report(ReportArgs),
}

/// Input file options shared by every command.
#[derive(Args)]
pub struct InputArgs {
    /// Population CSV export, or `-` for stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Text encoding of the input (default from config, else auto).
    #[arg(long = "encoding", value_enum)]
    pub encoding: Option<EncodingArg>,

    /// Output style.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Args)]
pub struct RegionArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Canonical region name, e.g. 종로구.
    #[arg(value_name = "REGION")]
    pub region: String,
}

#[derive(Args)]
pub struct DistributionArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Region to show; the first row of the file (usually the city total)
    /// when omitted.
    #[arg(value_name = "REGION")]
    pub region: Option<String>,

    /// Absolute counts or percent of total population.
    #[arg(long = "scale", value_enum)]
    pub scale: Option<ScaleArg>,
}

#[derive(Args)]
pub struct SimilarArgs {
    #[command(flatten)]
    pub region: RegionArgs,

    /// Similarity metric.
    #[arg(long = "metric", value_enum)]
    pub metric: Option<MetricArg>,

    /// Treat the input as a combined-total export (`_계_` columns).
    #[arg(long = "combined")]
    pub combined: bool,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub region: RegionArgs,

    /// Similarity metric.
    #[arg(long = "metric", value_enum)]
    pub metric: Option<MetricArg>,

    /// Absolute counts or percent of total population.
    #[arg(long = "scale", value_enum)]
    pub scale: Option<ScaleArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    Auto,
    Cp949,
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
}

impl From<EncodingArg> for TableEncoding {
    fn from(value: EncodingArg) -> Self {
        match value {
            EncodingArg::Auto => TableEncoding::Auto,
            EncodingArg::Cp949 => TableEncoding::Cp949,
            EncodingArg::Utf8 => TableEncoding::Utf8,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Cosine,
    Hybrid,
}

impl From<MetricArg> for Metric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Cosine => Metric::Cosine,
            MetricArg::Hybrid => Metric::Hybrid,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ScaleArg {
    Count,
    Percent,
}

impl From<ScaleArg> for Scale {
    fn from(value: ScaleArg) -> Self {
        match value {
            ScaleArg::Count => Scale::Count,
            ScaleArg::Percent => Scale::Percent,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
