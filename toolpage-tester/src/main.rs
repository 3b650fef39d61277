mod browser;
mod common;
mod logic;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;
use toolpage_core::PageConfig;

use browser::{BrowserConfig, BrowserDriver, BrowserKind, new_session};
use common::scenario::{Scenario, get_scenario, list_scenarios, run_scenario, scenario_names};
use common::{
    FailureReport, PageDriver, ScenarioResult, artifacts_dir, capture_artifacts, reports, split_csv,
};
use logic::LogicDriver;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Headless page on a virtual clock (fast, no browser)
    Logic,
    /// Browser automation against the demo page
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "toolpage-tester", version)]
#[command(about = "Scenario runner for the toolpage enhancement layer - headless and in the browser")]
struct Args {
    /// Test mode: logic (fast), browser (real DOM), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the demo page (should include ?test=1 to expose the bridge)
    #[arg(long, default_value = "http://localhost:8080/?test=1")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
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
    let scenarios = resolve_scenarios(&args.scenarios)?;
    let config = PageConfig::default();

    let mut results = run_logic_scenarios(&args, &scenarios, &config).await;
    results.extend(run_browser_scenarios(&args, &scenarios, &config).await);

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
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
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🧪 Toolpage Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for name in scenario_names() {
            if !scenarios.iter().any(|s| s == name) {
                scenarios.push(name.to_string());
            }
        }
    }
    scenarios
}

fn resolve_scenarios(scenarios_arg: &str) -> Result<Vec<Scenario>> {
    let names = expand_scenarios(scenarios_arg);
    let mut scenarios = Vec::with_capacity(names.len());
    for name in names {
        let Some(scenario) = get_scenario(&name) else {
            bail!("unknown scenario `{name}` (see --list-scenarios)");
        };
        scenarios.push(scenario);
    }
    Ok(scenarios)
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

async fn run_one<D>(driver: &mut D, scenario: &Scenario, config: &PageConfig) -> (Result<()>, ScenarioResult)
where
    D: PageDriver + ?Sized,
{
    log::info!("[{}] {}: {}", driver.label(), scenario.name, scenario.description);
    let started = Instant::now();
    let outcome = run_scenario(driver, scenario, &config.confirmation_label).await;
    let result = ScenarioResult::from_outcome(
        scenario.name,
        &driver.label(),
        &outcome,
        started.elapsed(),
    );
    (outcome, result)
}

fn print_outcome(result: &ScenarioResult, verbose: bool) {
    if result.passed {
        if verbose {
            println!(
                "✅ [{}] {} - {:?}",
                result.target.green(),
                result.scenario_name,
                result.duration
            );
        }
    } else {
        eprintln!(
            "❌ [{}] {} - {:?}: {}",
            result.target.red(),
            result.scenario_name,
            result.duration,
            result.failures.join("; ")
        );
    }
}

async fn run_logic_scenarios(
    args: &Args,
    scenarios: &[Scenario],
    config: &PageConfig,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    for scenario in scenarios {
        let mut driver = LogicDriver::new(config.clone());
        let (_, result) = run_one(&mut driver, scenario, config).await;
        print_outcome(&result, args.verbose);
        results.push(result);
    }

    results
}

async fn run_browser_scenarios(
    args: &Args,
    scenarios: &[Scenario],
    config: &PageConfig,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let cfg = build_browser_config(args);
        let session = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {}: {e}", kind.label());
                continue;
            }
        };

        match BrowserDriver::new(&session, kind, &args.base_url) {
            Ok(mut driver) => {
                for scenario in scenarios {
                    let (outcome, result) = run_one(&mut driver, scenario, config).await;
                    print_outcome(&result, args.verbose);
                    if let Err(err) = outcome {
                        let dir = artifacts_dir(&args.artifacts_dir, kind.label(), scenario.name);
                        let report = FailureReport::from_error(scenario.name, kind.label(), &err);
                        if let Err(capture_err) = capture_artifacts(&session, &dir, report).await {
                            log::warn!(
                                "could not capture artifacts in {}: {capture_err:#}",
                                dir.display()
                            );
                        }
                    }
                    results.push(result);
                }
            }
            Err(e) => eprintln!("❌ Could not prepare {}: {e:#}", kind.label()),
        }
        let _ = session.quit().await;
    }

    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => {
            reports::generate_json_report(&mut output_target, results)?;
        }
        ReportFormat::Markdown => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Toolpage Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
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
            report: ReportFormat::Json,
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080/?test=1".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    #[test]
    fn all_expands_to_catalog_without_duplicates() {
        let names = expand_scenarios("copy-empty,all");
        assert_eq!(names.len(), scenario_names().len());
        assert_eq!(names[0], "copy-empty");
    }

    #[test]
    fn unknown_scenario_is_rejected() {
        let err = resolve_scenarios("theme-default,nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn browser_config_follows_flags() {
        let mut args = base_args();
        args.headless = HeadlessMode::Windowed;
        args.hub = Some("http://grid:4444".to_string());
        let cfg = build_browser_config(&args);
        assert!(!cfg.headless);
        assert_eq!(cfg.remote_hub.as_deref(), Some("http://grid:4444"));
    }

    #[tokio::test]
    async fn logic_mode_skips_browsers() {
        let args = base_args();
        let scenarios = resolve_scenarios("theme-default").unwrap();
        let config = PageConfig::default();
        assert!(
            run_browser_scenarios(&args, &scenarios, &config)
                .await
                .is_empty()
        );
        let results = run_logic_scenarios(&args, &scenarios, &config).await;
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
        assert_eq!(results[0].target, "logic");
    }

    #[test]
    fn output_target_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "toolpage-output-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let mut target = OutputTarget::new(Some(path.clone())).expect("create");
        writeln!(target, "hello").expect("write");
        target.flush_inner().expect("flush");
        assert_eq!(std::fs::read_to_string(path).expect("read"), "hello\n");
    }
}
