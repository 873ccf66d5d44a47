use clap::{Args, Parser, Subcommand, ValueEnum};
use personality_insights::assessment::{AssessmentReport, QuestionBank, ScoringEngine, TestAttempt};
use personality_insights::config::AppConfig;
use personality_insights::error::AppError;
use personality_insights::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "personality-insights",
    about = "Score 16PF-style assessment attempts and print the resulting report",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one attempt against a question bank
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Test attempt export (JSON)
    #[arg(long)]
    attempt: PathBuf,
    /// Question bank export (.json or .csv)
    #[arg(long)]
    questions: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Substitute a clearly tagged synthetic profile when the attempt has no
    /// usable responses
    #[arg(long)]
    synthetic_fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Report(args) => run_report(args),
    }
}

fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if args.synthetic_fallback {
        config = config.with_synthetic_fallback(true)?;
    }
    telemetry::init(&config.telemetry)?;

    let output = build_report_output(&args, &config)?;
    println!("{output}");
    Ok(())
}

fn build_report_output(args: &ReportArgs, config: &AppConfig) -> Result<String, AppError> {
    let bank = QuestionBank::from_path(&args.questions)?;
    let attempt = TestAttempt::from_path(&args.attempt)?;

    let engine = ScoringEngine::new(config.scoring);
    let report = engine.score(&attempt, bank.questions());
    info!(
        environment = ?config.environment,
        questions = bank.len(),
        "report generated"
    );

    render(&report, args.format)
}

fn render(report: &AssessmentReport, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(report.summary_lines().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
