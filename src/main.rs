use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use esched::ranking::rules::{EnergyAware, Fcfs, PriorityFirst, Spt};
use esched::ranking::RankingRule;
use esched::registry::Registry;
use esched::{input, report, scheduler};

#[derive(Parser)]
#[command(
    name = "esched",
    version,
    about = "Energy-aware non-preemptive CPU scheduling simulator"
)]
struct Args {
    /// Input file; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Ranking policy for the candidate order.
    #[arg(long, value_enum, default_value_t = Policy::Energy)]
    policy: Policy,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Lowest burst * power hint first (default).
    Energy,
    /// Shortest burst first.
    Spt,
    /// Earliest arrival first.
    Fcfs,
    /// Lowest priority value first.
    Priority,
}

impl Policy {
    fn rule(self) -> Box<dyn RankingRule> {
        match self {
            Policy::Energy => Box::new(EnergyAware),
            Policy::Spt => Box::new(Spt),
            Policy::Fcfs => Box::new(Fcfs),
            Policy::Priority => Box::new(PriorityFirst),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Gantt line, metrics table, and totals.
    Text,
    /// The full outcome as one JSON document.
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let rows = input::parse_processes(&text)?;
    let registry = Registry::from_rows(rows).map_err(|errors| {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        anyhow::anyhow!(joined)
    })?;

    let rule = args.policy.rule();
    let outcome = scheduler::simulate(&registry, rule.as_ref())?;

    match args.format {
        Format::Text => print!("{}", report::render_text(&outcome)),
        Format::Json => println!("{}", report::render_json(&outcome)?),
    }

    Ok(())
}
