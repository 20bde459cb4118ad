use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use vitals::{explain_source, summarize_source};
use vitals_eval::ExplainError;
use vitals_fuzzy::catalog;
use vitals_record::{Record, RiskSummary};
use vitals_viz::{render_report, RenderConfig};

#[derive(Debug, Parser)]
#[command(
    name = "vitals",
    version,
    about = "Explain health-risk predictions through fuzzy membership charts",
    long_about = "vitals re-derives how strongly each physiological reading of a stored\n\
        prediction belongs to its linguistic categories (e.g. BMI \"Normal\").\n\
        The risk score itself comes from the prediction service and is shown verbatim.\n\n\
        EXAMPLES:\n\
        \n  vitals explain record.json            Draw membership bars for one record\n\
        \n  vitals explain --json < record.json   Emit chart-ready JSON\n\
        \n  vitals summary history.json           Aggregate a prediction history\n\
        \n  vitals catalog                        Show the fuzzy set definitions"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Explain one prediction record
    Explain(ExplainArgs),
    /// Summarize a JSON array of prediction records
    Summary(SummaryArgs),
    /// Print the linguistic variable catalog
    Catalog(CatalogArgs),
}

#[derive(Debug, Args)]
struct ExplainArgs {
    /// Record JSON file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Emit chart-ready JSON instead of text bars
    #[arg(long)]
    json: bool,

    /// Width of a full-membership bar (overrides VITALS_BAR_WIDTH)
    #[arg(long, value_name = "N", value_parser = parse_bar_width)]
    bar_width: Option<usize>,

    /// Do not print the risk verdict
    #[arg(long)]
    no_risk: bool,

    /// Print the intensity tier after each bar
    #[arg(long)]
    tiers: bool,
}

#[derive(Debug, Args)]
struct SummaryArgs {
    /// History JSON file (reads stdin when omitted)
    input: Option<PathBuf>,

    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct CatalogArgs {
    #[arg(long)]
    json: bool,
}

fn parse_bar_width(raw: &str) -> Result<usize, String> {
    let width: usize = raw.parse().map_err(|e| format!("{e}"))?;
    if width > RenderConfig::MAX_BAR_WIDTH {
        return Err(format!("must be at most {}", RenderConfig::MAX_BAR_WIDTH));
    }
    Ok(width)
}

fn init_logger(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    let _ = builder.try_init();
}

fn read_input(input: &Option<PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn render_config(args: &ExplainArgs) -> RenderConfig {
    let mut config = RenderConfig::default().with_env_overrides();
    if let Some(width) = args.bar_width {
        config.bar_width = width;
    }
    config.show_risk = !args.no_risk;
    config.show_tiers = args.tiers;
    config
}

fn run_explain(args: &ExplainArgs) -> i32 {
    let source = match read_input(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let report = match explain_source(&source) {
        Ok(report) => report,
        Err(e @ ExplainError::MissingRecord) => {
            eprintln!("error: {e}");
            return 1;
        }
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    for key in &report.out_of_domain {
        eprintln!("warning: {key} reading is outside the accepted range");
    }

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return 2;
            }
        }
    } else {
        let config = render_config(args);
        println!("{}", render_report(&report.variables, Some(&report.risk), &config));
    }
    0
}

fn history_table(records: &[Record]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<19}  {:>5}  {:>5}  {:>5}  {:>5}  {:>6}  {}",
        "timestamp", "bmi", "hr", "sleep", "exer", "score", "level"
    )];
    for r in records {
        let ts = r
            .timestamp
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:<19}  {:>5}  {:>5}  {:>5}  {:>5}  {:>6}  {}",
            ts, r.bmi, r.heart_rate, r.sleep_hours, r.exercise_level, r.risk_score, r.risk_level
        ));
    }
    lines
}

#[derive(serde::Serialize)]
struct SummaryReport<'a> {
    summary: &'a RiskSummary,
    history: &'a [Record],
}

fn run_summary(args: &SummaryArgs) -> i32 {
    let source = match read_input(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let (summary, records) = match summarize_source(&source) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    if args.json {
        let report = SummaryReport {
            summary: &summary,
            history: &records,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return 2;
            }
        }
    } else {
        print!("{summary}");
        println!();
        for line in history_table(&records) {
            println!("{line}");
        }
    }
    0
}

fn catalog_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for var in catalog() {
        lines.push(format!(
            "{} ({}) [{}, {}]",
            var.display_name, var.key, var.domain_min, var.domain_max
        ));
        for set in &var.sets {
            lines.push(format!("  {:<12} {}", set.label, set.shape));
        }
    }
    lines
}

fn run_catalog(args: &CatalogArgs) -> i32 {
    if args.json {
        match serde_json::to_string_pretty(catalog()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return 2;
            }
        }
    } else {
        for line in catalog_lines() {
            println!("{line}");
        }
    }
    0
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    log::debug!("{:?}", cli.command);

    match &cli.command {
        Command::Explain(args) => run_explain(args),
        Command::Summary(args) => run_summary(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

fn main() {
    std::process::exit(run_cli());
}
