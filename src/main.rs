use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use mcdm_ranker::adapters::{
    ConsoleTableRenderer, CsvAlternativeSource, CsvRankingExporter, IdentityColumns,
    JsonRankingExporter,
};
use mcdm_ranker::application::{RankingPipeline, RunRankingCommand, RunRankingHandler};
use mcdm_ranker::config::{AppConfig, OutputFormat};
use mcdm_ranker::domain::analysis::{ConsistencyPolicy, ScoringMethod};
use mcdm_ranker::error::AppError;
use mcdm_ranker::ports::RankingExporter;
use mcdm_ranker::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "mcdm-ranker",
    about = "Rank decision alternatives with AHP weights and SAW, WP and TOPSIS",
    version
)]
struct Cli {
    /// YAML configuration file (environment variables still override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the alternatives of a CSV table
    Rank(RankArgs),
    /// Print the AHP weights and consistency report
    Weights,
    /// Print the effective configuration as YAML
    Config,
}

#[derive(Args, Debug)]
struct RankArgs {
    /// Input CSV table
    #[arg(long, short)]
    input: PathBuf,
    /// Where to write the full ranking
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Output file format (csv or json)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
    /// Number of rows printed to the console
    #[arg(long)]
    top: Option<usize>,
    /// Method that orders the table (saw, wp or topsis)
    #[arg(long)]
    sort_by: Option<ScoringMethod>,
    /// Stop when the comparison matrix is inconsistent
    #[arg(long)]
    abort_on_inconsistency: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Command::Rank(args) = &cli.command {
        apply_overrides(&mut config, args);
    }
    config.validate()?;

    match cli.command {
        Command::Rank(args) => {
            telemetry::init(&config.logging)?;
            run_rank(&config, &args)
        }
        Command::Weights => {
            telemetry::init(&config.logging)?;
            run_weights(&config)
        }
        Command::Config => run_config(&config),
    }
}

fn apply_overrides(config: &mut AppConfig, args: &RankArgs) {
    if let Some(format) = args.format {
        config.table.output_format = format;
    }
    if let Some(top) = args.top {
        config.table.display_limit = top;
    }
    if let Some(method) = args.sort_by {
        config.ranking.sort_by = method;
    }
    if args.abort_on_inconsistency {
        config.ranking.consistency_policy = ConsistencyPolicy::Abort;
    }
}

fn run_rank(config: &AppConfig, args: &RankArgs) -> Result<(), AppError> {
    let criteria = config.ranking.criteria_set()?;
    let comparison = config.ranking.comparison_matrix()?;
    let columns = IdentityColumns::from_config(&config.table);
    let delimiter = config.table.delimiter_byte();

    let source = Arc::new(
        CsvAlternativeSource::new(&args.input, columns.clone()).with_delimiter(delimiter),
    );

    let mut exporters: Vec<Arc<dyn RankingExporter>> = vec![Arc::new(
        ConsoleTableRenderer::new(columns.clone()).with_limit(config.table.display_limit),
    )];
    if let Some(path) = &args.output {
        exporters.push(file_exporter(
            path,
            config.table.output_format,
            columns,
            delimiter,
        ));
    }

    let handler = RunRankingHandler::new(
        source,
        exporters,
        RankingPipeline::from_config(&config.ranking),
    );
    let result = handler.handle(RunRankingCommand {
        criteria,
        comparison,
    })?;

    info!(
        run_id = %result.report.run_id,
        alternatives = result.report.table.len(),
        "Run finished"
    );
    Ok(())
}

fn file_exporter(
    path: &Path,
    format: OutputFormat,
    columns: IdentityColumns,
    delimiter: u8,
) -> Arc<dyn RankingExporter> {
    match format {
        OutputFormat::Csv => Arc::new(CsvRankingExporter::new(path, columns).with_delimiter(delimiter)),
        OutputFormat::Json => Arc::new(JsonRankingExporter::new(path)),
    }
}

fn run_weights(config: &AppConfig) -> Result<(), AppError> {
    let criteria = config.ranking.criteria_set()?;
    let comparison = config.ranking.comparison_matrix()?;
    let derived = RankingPipeline::from_config(&config.ranking).weights(&comparison)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    ConsoleTableRenderer::default().render_weights(&criteria, &derived, &mut handle)?;
    handle.flush()?;
    Ok(())
}

fn run_config(config: &AppConfig) -> Result<(), AppError> {
    print!("{}", config.to_yaml()?);
    Ok(())
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "csv" => Ok(OutputFormat::Csv),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unknown output format '{other}', expected csv or json")),
    }
}
