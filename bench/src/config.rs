use std::time::Duration;

use clap::{Parser, ValueEnum};
use euler_accel_core::{Budget, DEFAULT_CHECK_INTERVAL};

use crate::generators::Family;

pub const DEFAULT_SIZES: [usize; 9] = [100, 500, 1000, 2000, 5000, 10000, 20000, 50000, 100000];

/// Complete graphs grow quadratically; larger sizes are skipped.
pub const COMPLETE_MAX_VERTICES: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Every generated family
    All,
    /// Simple ring 0 -> 1 -> ... -> 0
    Cycle,
    /// Simple chain 0 -> 1 -> ... -> n-1
    Path,
    /// Ring plus random back-and-forth pairs
    Dense,
    /// Uniform random edges
    Random,
    /// Every ordered pair of distinct vertices
    Complete,
    /// Read one graph in wire format from stdin
    Stdin,
}

impl Mode {
    /// Generated families this mode benchmarks. Empty for `Stdin`.
    pub fn families(self) -> Vec<Family> {
        match self {
            Mode::All => Family::ALL.to_vec(),
            Mode::Cycle => vec![Family::Cycle],
            Mode::Path => vec![Family::Path],
            Mode::Dense => vec![Family::Dense],
            Mode::Random => vec![Family::Random],
            Mode::Complete => vec![Family::Complete],
            Mode::Stdin => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "euler-accel-bench")]
#[command(about = "Benchmark the Eulerian circuit/path engine on generated or piped graphs")]
pub struct Config {
    /// Graph family to benchmark, or `stdin` to read one graph.
    #[arg(value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Comma-separated vertex counts for generated families.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    pub sizes: Vec<usize>,

    /// Seed for the ChaCha8 generator behind the random families.
    #[arg(long, env = "EULER_ACCEL_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Traversal iterations between deadline/cancel checks.
    #[arg(
        long,
        env = "EULER_ACCEL_CHECK_INTERVAL",
        default_value_t = DEFAULT_CHECK_INTERVAL as u64,
        value_parser = clap::value_parser!(u64).range(1..=1 << 24)
    )]
    pub check_interval: u64,

    /// Per-graph deadline in milliseconds. Unset means unlimited.
    #[arg(long, env = "EULER_ACCEL_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Abort a traversal after this many iterations. Unset means no cap.
    #[arg(long, env = "EULER_ACCEL_MAX_ITERATIONS")]
    pub max_iterations: Option<usize>,

    /// Output format for `stdin` mode.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// In `stdin` mode, also print the vertex sequence.
    #[arg(long)]
    pub print_walk: bool,
}

impl Config {
    /// Fresh budget for one graph; the deadline starts now.
    pub fn budget(&self) -> Budget {
        let mut budget = Budget::unlimited().with_check_interval(self.check_interval as usize);
        if let Some(max) = self.max_iterations {
            budget = budget.with_max_iterations(max);
        }
        match self.timeout_ms {
            Some(ms) => budget.with_timeout(Duration::from_millis(ms)),
            None => budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["euler-accel-bench"]).unwrap();
        assert_eq!(config.mode, Mode::All);
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(config.check_interval, DEFAULT_CHECK_INTERVAL as u64);
        assert!(config.timeout_ms.is_none());
        assert!(config.budget().deadline().is_none());
        assert!(config.budget().max_iterations().is_none());
    }

    #[test]
    fn test_explicit_args() {
        let config = Config::try_parse_from([
            "euler-accel-bench",
            "dense",
            "--sizes",
            "10,20",
            "--seed",
            "7",
            "--check-interval",
            "16",
            "--timeout-ms",
            "500",
            "--max-iterations",
            "1000",
        ])
        .unwrap();
        assert_eq!(config.mode, Mode::Dense);
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.seed, 7);
        let budget = config.budget();
        assert_eq!(budget.check_interval(), 16);
        assert!(budget.deadline().is_some());
        assert_eq!(budget.max_iterations(), Some(1000));
    }

    #[test]
    fn test_check_interval_bounds() {
        assert!(Config::try_parse_from(["euler-accel-bench", "--check-interval", "0"]).is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Config::try_parse_from(["euler-accel-bench", "lsystem"]).is_err());
    }

    #[test]
    fn test_mode_families() {
        assert_eq!(Mode::All.families().len(), Family::ALL.len());
        assert_eq!(Mode::Complete.families(), vec![Family::Complete]);
        assert!(Mode::Stdin.families().is_empty());
    }
}
