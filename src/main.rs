mod cli;

use agrisk::error::AgriskError;
use agrisk::report::{self, OutputFormat, TablesFormat};
use agrisk::scoring::{AttributionWeights, RiskScorer};
use agrisk::types::config::AgriskConfig;
use agrisk::types::scoring::AssessmentInput;
use agrisk::{batch, config, RiskTables};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Report => OutputFormat::Report,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

/// Tables and weights from the layered config, builtin when nothing is configured.
fn resolve(
    root: &Path,
    explicit: Option<&Path>,
) -> Result<(RiskTables, AttributionWeights), AgriskError> {
    match config::load_config(root, explicit)? {
        Some(cfg) => Ok((
            RiskTables::from_config(&cfg)?,
            AttributionWeights::from_config(&cfg),
        )),
        None => Ok((RiskTables::builtin(), AttributionWeights::default())),
    }
}

fn run() -> Result<i32, AgriskError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let explicit = cli.config.as_deref();

    match cli.command {
        cli::Commands::Assess(cmd) => {
            let (tables, weights) = resolve(Path::new("."), explicit)?;
            let scorer = RiskScorer::new(&tables, weights);
            let input = AssessmentInput {
                location: cmd.location,
                crop: cmd.crop,
                scenario: cmd.scenario,
            };
            let assessment = scorer.report(&input);
            println!("{}", report::render(&assessment, output_format(&cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let inputs = batch::read_inputs(&cmd.input)?;
            let (tables, weights) = resolve(Path::new("."), explicit)?;
            let scorer = RiskScorer::new(&tables, weights);
            let reports = inputs
                .iter()
                .map(|input| scorer.report(input))
                .collect::<Vec<_>>();
            println!(
                "{}",
                report::render_batch(&reports, output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Tables(cmd) => {
            let (tables, _) = resolve(Path::new("."), explicit)?;
            let format = match cmd.format {
                cli::TableFormat::Json => TablesFormat::Json,
                cli::TableFormat::Md => TablesFormat::Md,
            };
            println!("{}", report::render_tables(&tables, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            if !cmd.path.exists() {
                return Err(AgriskError::PathNotFound(cmd.path.display().to_string()));
            }
            if !cmd.path.join(config::DEFAULT_CONFIG_FILE).exists() {
                eprintln!(
                    "warning: no {} found in {}",
                    config::DEFAULT_CONFIG_FILE,
                    cmd.path.display()
                );
                return Ok(exit_code::WARNINGS);
            }
            match config::load_config(&cmd.path, explicit)? {
                Some(cfg) => {
                    let tables = RiskTables::from_config(&cfg)?;
                    report_validated(&cfg, &tables);
                    Ok(exit_code::SUCCESS)
                }
                None => Err(AgriskError::ConfigParse(format!(
                    "no configuration loaded from {}",
                    cmd.path.display()
                ))),
            }
        }
    }
}

fn report_validated(cfg: &AgriskConfig, tables: &RiskTables) {
    let [location, crop, scenario] = cfg.attribution();
    println!("config ok");
    println!(
        "- locations: {}\n- crops: {}\n- scenarios: {}\n- attribution: location {:.2}, crop {:.2}, scenario {:.2}",
        tables.location.entries().count(),
        tables.crop.entries().count(),
        tables.scenario.entries().count(),
        location,
        crop,
        scenario
    );
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
