mod backend;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use disaster_core::Catalog;
use disaster_core::constants::DEFAULT_API_BASE;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use backend::ReqwestApi;
use common::scenario::{ScenarioCtx, get_scenario, has_backend_run, list_scenarios};
use common::{parse_seeds, read_catalog, sample_catalog, split_csv};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Pure client logic against an in-memory backend (fast, offline)
    Logic,
    /// Smoke tests against a running backend
    Backend,
    /// Run both logic and backend tests
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "disaster-tester", version)]
#[command(about = "Scenario runner for the Disaster.io client: logic checks and backend smoke tests")]
struct Args {
    /// Test mode: logic (offline), backend (live server), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed (logic mode only)
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Backend base URL for backend mode
    #[arg(long, env = "DISASTER_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Item catalog workbook (Items.xlsx); a built-in sample is used otherwise
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = parse_seeds(&args.seeds)?;
    let catalog = Arc::new(load_catalog(&args)?);

    let mut all_results = run_logic_scenarios(&args, &scenarios, &seeds, &catalog);
    all_results.extend(run_backend_scenarios(&args, &scenarios, &seeds, &catalog).await);

    write_reports(&args, &all_results, start_time)?;

    if all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎒 Disaster.io Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for (key, _) in list_scenarios() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn load_catalog(args: &Args) -> Result<Catalog> {
    let catalog = match &args.catalog {
        Some(path) => read_catalog(path)?,
        None => sample_catalog(),
    };
    log::info!("Catalog ready with {} items", catalog.len());
    anyhow::ensure!(!catalog.is_empty(), "item catalog is empty");
    Ok(catalog)
}

fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
    catalog: &Arc<Catalog>,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(Arc::clone(catalog), args.verbose);

    for scenario_name in scenarios {
        if let Some(combined_scenario) = get_scenario(scenario_name) {
            if let Some(logic_scenario) = combined_scenario.as_logic_scenario() {
                results.extend(logic_tester.run_scenario(
                    &logic_scenario,
                    seeds,
                    args.iterations,
                ));
            } else {
                eprintln!(
                    "⚠️  Scenario {} has no logic test implementation",
                    scenario_name.yellow()
                );
            }
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }

    results
}

async fn run_backend_scenarios(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
    catalog: &Arc<Catalog>,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Backend | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Backend Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());
    let api = ReqwestApi::new(&args.api_base);
    println!("Backend: {}", api.base());

    for scenario_name in scenarios {
        if !has_backend_run(scenario_name) {
            continue;
        }
        let Some(scenario) = get_scenario(scenario_name) else {
            continue;
        };
        for &seed in seeds {
            let ctx = ScenarioCtx {
                seed,
                catalog: Arc::clone(catalog),
                verbose: args.verbose,
            };
            let label = format!("{} (backend)", scenario.name());
            let scenario_start = Instant::now();
            let outcome = scenario.run_backend(&api, &ctx).await;
            let duration = scenario_start.elapsed();
            match &outcome {
                Ok(()) => println!("✅ [seed {seed}] {label} - {duration:?}"),
                Err(e) => eprintln!("❌ [seed {seed}] {} - {duration:?}: {e:#}", label.red()),
            }
            results.push(ScenarioResult::single(
                &label,
                seed,
                duration,
                outcome.map_err(|e| format!("{e:#}")),
            ));
        }
    }

    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Disaster.io Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    if args.report != "json" {
        let duration = start_time.elapsed();
        writeln!(&mut output_target)?;
        writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "all".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 2,
            report: "json".to_string(),
            verbose: false,
            output: None,
            api_base: DEFAULT_API_BASE.to_string(),
            catalog: None,
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "disaster-tester-{name}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn cli_parses_flags() {
        let args = Args::try_parse_from([
            "disaster-tester",
            "--mode",
            "both",
            "--scenarios",
            "countdown,flow",
            "--seeds",
            "1,2",
            "--report",
            "markdown",
            "--api-base",
            "http://game.test",
        ])
        .expect("parse");
        assert_eq!(args.mode, TestMode::Both);
        assert_eq!(args.api_base, "http://game.test");
        assert_eq!(expand_scenarios(&args.scenarios), vec!["countdown", "flow"]);
        assert!(Args::try_parse_from(["disaster-tester", "--report", "csv"]).is_err());
    }

    #[test]
    fn all_expands_to_every_scenario_once() {
        let expanded = expand_scenarios("countdown, all");
        assert_eq!(expanded.len(), list_scenarios().len());
        assert_eq!(expanded[0], "countdown");
        assert!(expanded.iter().any(|s| s == "full-flow"));
    }

    #[test]
    fn logic_run_covers_every_scenario() {
        let args = base_args();
        let catalog = Arc::new(sample_catalog());
        let results =
            run_logic_scenarios(&args, &expand_scenarios(&args.scenarios), &[1, 2], &catalog);
        assert_eq!(results.len(), list_scenarios().len() * 2);
        assert!(results.iter().all(|r| r.passed), "{results:#?}");
    }

    #[test]
    fn logic_run_is_skipped_in_backend_mode() {
        let mut args = base_args();
        args.mode = TestMode::Backend;
        let catalog = Arc::new(sample_catalog());
        assert!(run_logic_scenarios(&args, &["countdown".to_string()], &[1], &catalog).is_empty());
    }

    #[test]
    fn json_report_goes_to_output_file() {
        let path = temp_path("report.json");
        let mut args = base_args();
        args.output = Some(path.clone());
        let results = vec![ScenarioResult::single(
            "Countdown Expiry",
            1,
            std::time::Duration::from_millis(3),
            Ok(()),
        )];
        write_reports(&args, &results, Instant::now()).expect("write");
        let text = std::fs::read_to_string(&path).expect("read report");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value[0]["scenario_name"], "Countdown Expiry");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn listing_writes_every_key() {
        let path = temp_path("list.txt");
        let mut args = base_args();
        args.list_scenarios = true;
        args.output = Some(path.clone());
        assert!(maybe_list_scenarios(&args).expect("list"));
        let text = std::fs::read_to_string(&path).expect("read list");
        for (key, _) in list_scenarios() {
            assert!(text.contains(key));
        }
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn sample_catalog_is_used_without_a_path() {
        let catalog = load_catalog(&base_args()).expect("catalog");
        assert!(!catalog.is_empty());
    }
}
