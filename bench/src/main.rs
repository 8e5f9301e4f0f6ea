use std::io::Read;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use euler_accel_core::{analyze, EulerError, WalkKind};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod generators;
mod wire;

use config::{Config, Mode, OutputFormat, COMPLETE_MAX_VERTICES};
use generators::Family;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("euler_accel=info")),
        )
        .init();

    let config = Config::parse();

    if config.mode == Mode::Stdin {
        return run_stdin(&config);
    }

    println!("euler-accel-bench");
    println!("=================");

    for family in config.mode.families() {
        run_family(&config, family);
    }

    Ok(())
}

fn run_family(config: &Config, family: Family) {
    println!();
    println!("--- {} ---", family.label());
    println!(
        "{:>8} {:>10} {:>8} {:>12}",
        "n", "edges", "kind", "time"
    );
    println!("{:->8} {:->10} {:->8} {:->12}", "", "", "", "");

    for &n in &config.sizes {
        if family == Family::Complete && n > COMPLETE_MAX_VERTICES {
            info!(n, max = COMPLETE_MAX_VERTICES, "skipping oversized complete graph");
            continue;
        }

        let edges = family.generate(n, config.seed);
        let budget = config.budget();

        let t = Instant::now();
        let result = analyze(n, &edges, &budget);
        let elapsed_ms = t.elapsed().as_secs_f64() * 1000.0;

        let kind = match &result {
            Ok(walk) => kind_str(walk.kind),
            Err(EulerError::Cancelled { iterations }) => {
                warn!(n, iterations, "run exceeded its budget");
                "timeout"
            }
            Err(e) => {
                warn!(n, error = %e, "engine error");
                "error"
            }
        };

        println!(
            "{:>8} {:>10} {:>8} {:>10.3}ms",
            n,
            edges.len(),
            kind,
            elapsed_ms
        );
    }
}

#[derive(Debug, Serialize)]
struct StdinReport {
    time_ms: f64,
    kind: &'static str,
    walk: Vec<usize>,
}

/// Wire-format mode: one graph from stdin, timing on stdout.
fn run_stdin(config: &Config) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read graph from stdin")?;
    let graph = wire::parse(&input).context("malformed graph input")?;

    let budget = config.budget();
    let t = Instant::now();
    let walk = analyze(graph.vertex_count, &graph.edges, &budget)
        .context("euler analysis failed")?;
    let time_ms = t.elapsed().as_secs_f64() * 1000.0;

    match config.format {
        OutputFormat::Json => {
            let report = StdinReport {
                time_ms,
                kind: kind_str(walk.kind),
                walk: walk.vertices,
            };
            println!("{}", serde_json::to_string(&report)?);
        }
        OutputFormat::Text => {
            println!("Time: {} ms", time_ms);
            if config.print_walk {
                if walk.vertices.is_empty() {
                    println!("No Euler cycle or path found");
                } else {
                    let line: Vec<String> = walk.vertices.iter().map(|v| v.to_string()).collect();
                    println!("{}", line.join(" "));
                }
            }
        }
    }

    Ok(())
}

fn kind_str(kind: WalkKind) -> &'static str {
    match kind {
        WalkKind::Circuit => "circuit",
        WalkKind::Path => "path",
        WalkKind::None => "none",
    }
}
