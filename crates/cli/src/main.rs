//! Page replacement simulator CLI.
//!
//! This binary loads an access trace and compares Optimal against a practical policy. It
//! performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON file, then command-line overrides.
//! 2. **Simulation:** Optimal plus global (default) or local second chance, optionally printing
//!    memory contents after every access.
//! 3. **Reporting:** Fault counts, relative efficiency, per-page access counts, and a
//!    single-level page-table size estimate.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagesim_core::common::{AccessTrace, PageId};
use pagesim_core::config::{MemorySize, PolicyKind, SimConfig};
use pagesim_core::policies::{
    InterruptEvent, NoopObserver, ResidentSnapshot, StepObserver, TraceRecord,
};
use pagesim_core::sim::{Simulation, load_trace};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Page replacement simulator: Optimal versus second chance",
    long_about = "Replay a page access trace under the Optimal algorithm and a second-chance \
                  policy, then report how close second chance gets to Optimal.\n\nThe trace file \
                  holds one page identifier per line (first comma-separated field). Pages whose \
                  identifier starts with 'I' are instruction pages under --local.\n\nExamples:\n  \
                  pagesim trace.csv 8MB\n  pagesim trace.csv 16KB --local --didactic\n  \
                  pagesim trace.csv 1MB --interrupt 100 --list-loads"
)]
struct Cli {
    /// Access trace file.
    trace: PathBuf,

    /// Physical memory size, e.g. 8MB, 16KB, 1GB (overrides the configuration file).
    memory: Option<MemorySize>,

    /// Print memory contents after every access.
    #[arg(long, visible_alias = "modo-didatico")]
    didactic: bool,

    /// Use local (segmented) second chance.
    #[arg(long, conflicts_with = "global")]
    local: bool,

    /// Use global second chance (default).
    #[arg(long)]
    global: bool,

    /// Clear all reference bits every N accesses (global second chance only).
    #[arg(long, value_name = "N", visible_alias = "interrupcao")]
    interrupt: Option<usize>,

    /// Page size in bytes.
    #[arg(long, value_name = "BYTES")]
    page_size: Option<u64>,

    /// Print the number of accesses per page.
    #[arg(long)]
    list_loads: bool,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Layers command-line overrides on top of the file (or default) configuration.
    fn resolve_config(&self) -> Result<SimConfig, String> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_file(path).map_err(|e| e.to_string())?,
            None => SimConfig::default(),
        };
        if let Some(memory) = self.memory {
            config.memory = memory;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(period) = self.interrupt {
            config.interrupt_period = period;
        }
        if self.local {
            config.policy = PolicyKind::SegmentedClock;
        } else if self.global {
            config.policy = PolicyKind::GlobalClock;
        }
        config.didactic |= self.didactic;
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

/// Prints each step of one policy's run.
#[derive(Debug)]
struct ConsoleTrace {
    label: &'static str,
}

impl ConsoleTrace {
    const fn for_policy(policy: PolicyKind) -> Self {
        let label = match policy {
            PolicyKind::Optimal => "OPTIMAL",
            PolicyKind::GlobalClock => "2ND CHANCE - GLOBAL",
            PolicyKind::SegmentedClock => "2ND CHANCE - LOCAL",
        };
        Self { label }
    }
}

fn page_list(pages: &[PageId]) -> String {
    let names: Vec<&str> = pages.iter().map(PageId::as_str).collect();
    format!("[{}]", names.join(", "))
}

impl StepObserver for ConsoleTrace {
    fn on_step(&mut self, record: &TraceRecord) {
        let memory = match &record.resident {
            ResidentSnapshot::Unified(pages) => format!("Memory: {}", page_list(pages)),
            ResidentSnapshot::Segmented { instruction, data } => format!(
                "Instructions: {} | Data: {}",
                page_list(instruction),
                page_list(data)
            ),
        };
        println!(
            "[{}] Access {:>4} -> {:<4} | {}",
            self.label, record.step, record.page, memory
        );
    }

    fn on_interrupt(&mut self, event: &InterruptEvent) {
        println!(
            "! OS interrupt: clearing reference bits of resident pages ({} pages with bit=1)",
            event.referenced
        );
    }
}

fn print_load_counts(trace: &AccessTrace) {
    println!("{:<8} | Loads", "Page");
    for (page, count) in trace.access_counts() {
        println!("{page:<8} | {count}");
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = cli.resolve_config()?;
    let trace = load_trace(&cli.trace).map_err(|e| e.to_string())?;
    let simulation = Simulation::from_config(&config);

    if !cli.json {
        println!("Physical memory holds {} pages.", simulation.capacity());
        println!("There are {} distinct pages in the trace.", trace.distinct_count());
    }

    let report = if config.didactic && !cli.json {
        let mut optimal = ConsoleTrace::for_policy(PolicyKind::Optimal);
        let mut practical = ConsoleTrace::for_policy(simulation.policy());
        simulation.run_observed(&trace, &mut optimal, &mut practical)
    } else {
        simulation.run_observed(&trace, &mut NoopObserver, &mut NoopObserver)
    }
    .map_err(|e| e.to_string())?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report.summary()).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    println!();
    println!("{report}");
    if cli.list_loads {
        print_load_counts(&trace);
    }
    println!(
        "Estimated single-level page table size: {} bytes",
        report.page_table_estimate_bytes()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
