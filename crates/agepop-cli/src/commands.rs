use std::io;

use anyhow::{Context, Result, anyhow};
use tracing::info_span;

use agepop_core::{age_distribution, analyze_region, bucket_shares, find_most_similar};
use agepop_ingest::{
    Table, TableEncoding, extract_regions, extract_totals, read_table, read_table_from_reader,
};
use agepop_model::{RegionNotFound, RegionSet, Scale, SimilarityResult};

use crate::cli::{
    Command, DistributionArgs, InputArgs, OutputArg, RegionArgs, ReportArgs, SimilarArgs,
};
use crate::config::AppConfig;
use crate::render::{
    buckets_table, distribution_table, region_rows, regions_table, report_text, similarity_line,
    to_json,
};

/// Path argument that selects stdin.
const STDIN_PATH: &str = "-";

/// Runs `command` and returns the text to print on stdout.
pub fn run(command: &Command, config: &AppConfig) -> Result<String> {
    match command {
        Command::Regions(args) => run_regions(args, config),
        Command::Distribution(args) => run_distribution(args, config),
        Command::Buckets(args) => run_buckets(args, config),
        Command::Similar(args) => run_similar(args, config),
        Command::Report(args) => run_report(args, config),
    }
}

pub fn run_regions(args: &InputArgs, config: &AppConfig) -> Result<String> {
    let set = load_regions(args, config)?;
    let rows = region_rows(&set);
    match args.output {
        OutputArg::Table => Ok(regions_table(&rows).to_string()),
        OutputArg::Json => Ok(to_json(&rows)?),
    }
}

pub fn run_distribution(args: &DistributionArgs, config: &AppConfig) -> Result<String> {
    let set = load_regions(&args.input, config)?;
    let record = match &args.region {
        Some(name) => set.get(name)?,
        None => set
            .summary
            .as_ref()
            .ok_or_else(|| anyhow!("{} has no data rows", args.input.file.display()))?,
    };
    let scale = args.scale.map_or(config.analysis.scale, Scale::from);
    let distribution = age_distribution(record, scale);
    match args.input.output {
        OutputArg::Table => Ok(format!(
            "Region: {} (population {})\n{}",
            distribution.region,
            distribution.total_population,
            distribution_table(&distribution)
        )),
        OutputArg::Json => Ok(to_json(&distribution)?),
    }
}

pub fn run_buckets(args: &RegionArgs, config: &AppConfig) -> Result<String> {
    let set = load_regions(&args.input, config)?;
    let record = set.get(&args.region)?;
    let options = config.analysis_options(None, None);
    let shares = bucket_shares(&record.ages, &record.combined(), &options.buckets)
        .with_context(|| format!("bucket ages of {}", record.name()))?;
    match args.input.output {
        OutputArg::Table => Ok(buckets_table(&shares).to_string()),
        OutputArg::Json => Ok(to_json(&shares)?),
    }
}

pub fn run_similar(args: &SimilarArgs, config: &AppConfig) -> Result<String> {
    let input = &args.region.input;
    let name = args.region.region.trim();
    let metric = args.metric.map_or(config.analysis.metric, Into::into);

    let result = if args.combined {
        let table = load_table(input, config)?;
        let (_, records) = extract_totals(&table, &config.columns)?;
        let query = records
            .iter()
            .find(|record| record.region.name == name)
            .ok_or_else(|| RegionNotFound {
                name: name.to_string(),
            })?;
        find_most_similar(&query.total, name, &records, &metric)
    } else {
        let set = load_regions(input, config)?;
        let record = set.get(name)?;
        find_most_similar(&record.combined(), record.name(), &set.records, &metric)
    };

    render_similarity(result.as_ref(), input.output)
}

pub fn run_report(args: &ReportArgs, config: &AppConfig) -> Result<String> {
    let input = &args.region.input;
    let set = load_regions(input, config)?;
    let metric = args.metric.map(Into::into);
    let options = config.analysis_options(metric, args.scale.map(Into::into));
    let report = analyze_region(&set, &args.region.region, &options)?;
    match input.output {
        OutputArg::Table => Ok(report_text(&report)),
        OutputArg::Json => Ok(to_json(&report)?),
    }
}

fn render_similarity(result: Option<&SimilarityResult>, output: OutputArg) -> Result<String> {
    match output {
        OutputArg::Table => Ok(similarity_line(result)),
        OutputArg::Json => Ok(to_json(&result)?),
    }
}

/// Reads the input table from a path, or from stdin for `-`.
pub fn load_table(input: &InputArgs, config: &AppConfig) -> Result<Table> {
    let encoding = input
        .encoding
        .map_or(config.input.encoding, TableEncoding::from);
    let span = info_span!("load", file = %input.file.display(), %encoding);
    let _guard = span.enter();

    if input.file.as_os_str() == STDIN_PATH {
        read_table_from_reader(io::stdin().lock(), encoding, "<stdin>").context("read stdin")
    } else {
        read_table(&input.file, encoding)
            .with_context(|| format!("read {}", input.file.display()))
    }
}

fn load_regions(input: &InputArgs, config: &AppConfig) -> Result<RegionSet> {
    let table = load_table(input, config)?;
    extract_regions(&table, &config.columns)
        .with_context(|| format!("extract regions from {}", input.file.display()))
}
