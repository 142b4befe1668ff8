use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use hdobconv::config::{ConverterConfig, ReportInterval, TimeOfDay, parse_storm_date};
use hdobconv::filter::TimeWindow;
use hdobconv::mission::infer_mission;
use hdobconv::output::{OutputFormat, create_formatter};
use hdobconv::source::InputSource;
use hdobconv::{Converter, Outcome};

const EXIT_FAILURE: u8 = 1;
const EXIT_NO_SAMPLES: u8 = 2;
const EXIT_NO_OUTPUT: u8 = 3;
const EXIT_BAD_START: u8 = 4;
const EXIT_BAD_END: u8 = 5;

#[derive(Parser, Debug)]
#[command(name = "hdobconv")]
#[command(about = "Convert IWG1 aircraft telemetry to HDOB messages", long_about = None)]
struct Args {
    #[command(flatten)]
    source: SourceArgs,

    /// Mission identifier line prefix (inferred from the source name if omitted)
    #[arg(long)]
    mission: Option<String>,

    /// YYYYMMDD date for the mission line (default: UTC date of the first sample)
    #[arg(long)]
    storm_date: Option<String>,

    /// HDOB time resolution in seconds: 10, 30, 60 or 120
    #[arg(short, long)]
    interval: Option<ReportInterval>,

    /// Report lines per HDOB message
    #[arg(long)]
    lines_per_message: Option<usize>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// UTC start time of day (HH:MM, HHMM, HH:MM:SS or HHMMSS)
    #[arg(long)]
    start: Option<String>,

    /// UTC end time of day (HH:MM, HHMM, HH:MM:SS or HHMMSS)
    #[arg(long)]
    end: Option<String>,

    /// Parser worker threads (1 = sequential)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Output format: hdob, json
    #[arg(short = 'f', long, value_enum, default_value = "hdob")]
    format: OutputFormat,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URL fetch timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Path to a local IWG1 file
    #[arg(long)]
    path: Option<PathBuf>,

    /// URL of an IWG1 file
    #[arg(long)]
    url: Option<String>,
}

impl SourceArgs {
    fn input_source(&self) -> Option<InputSource> {
        match (&self.path, &self.url) {
            (Some(path), _) => Some(InputSource::Path(path.clone())),
            (None, Some(url)) => Some(InputSource::Url(url.clone())),
            (None, None) => None,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn build_config(args: &Args) -> anyhow::Result<ConverterConfig> {
    let mut config = match &args.config {
        Some(path) => ConverterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConverterConfig::default(),
    };

    if let Some(interval) = args.interval {
        config.report.interval = interval;
    }
    if let Some(lines) = args.lines_per_message {
        config.report.lines_per_message = lines;
    }
    if let Some(workers) = args.workers {
        config.parse.workers = workers;
    }
    if let Some(timeout) = args.timeout {
        config.fetch.timeout_secs = timeout;
    }

    config.validate()?;
    Ok(config)
}

fn parse_bound(value: Option<&str>, which: &str) -> Result<Option<TimeOfDay>, String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<TimeOfDay>())
        .transpose()
        .map_err(|e| format!("Invalid --{} value: {}", which, e))
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let config = build_config(args)?;

    let source = args
        .source
        .input_source()
        .context("Provide --path or --url")?;
    let text = source
        .read_text(&config.fetch)
        .context("Failed to retrieve IWG1 input")?;

    // Input that yields no samples is reported before any bad time bound.
    let converter = Converter::new(&config, TimeWindow::default());
    let (samples, candidates) = converter.parse_text(&text);
    if samples.is_empty() {
        eprintln!("No IWG1 rows parsed.");
        return Ok(ExitCode::from(EXIT_NO_SAMPLES));
    }

    let start = match parse_bound(args.start.as_deref(), "start") {
        Ok(start) => start,
        Err(msg) => {
            eprintln!("{}", msg);
            return Ok(ExitCode::from(EXIT_BAD_START));
        }
    };
    let end = match parse_bound(args.end.as_deref(), "end") {
        Ok(end) => end,
        Err(msg) => {
            eprintln!("{}", msg);
            return Ok(ExitCode::from(EXIT_BAD_END));
        }
    };

    let storm_date = args.storm_date.as_deref().map(parse_storm_date).transpose()?;

    let mission = args
        .mission
        .clone()
        .unwrap_or_else(|| infer_mission(&source.label()));
    log::info!("Mission: {}", mission);

    let converter = converter.with_window(TimeWindow::new(start, end));
    let (outcome, mut summary) = converter.convert_samples(samples, &mission, storm_date);
    summary.candidates = candidates;
    log::info!("{:?}", summary);

    let report = match outcome {
        Outcome::Report(report) => report,
        Outcome::NoSamplesParsed => {
            eprintln!("No IWG1 rows parsed.");
            return Ok(ExitCode::from(EXIT_NO_SAMPLES));
        }
        Outcome::NoSamplesInWindow => {
            eprintln!("No rows after filtering -- no HDOB will be produced.");
            return Ok(ExitCode::from(EXIT_NO_OUTPUT));
        }
        Outcome::NoBins => {
            eprintln!("No HDOB output generated.");
            return Ok(ExitCode::from(EXIT_NO_OUTPUT));
        }
    };

    let output = create_formatter(args.format).format(&report);

    match &args.out {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} ({} lines)", path.display(), output.lines().count());
        }
        None => print!("{}", output),
    }

    Ok(ExitCode::SUCCESS)
}
