//! Command-line arguments and their environment fallbacks.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use link_resilience_core::DEFAULT_BAR_WIDTH;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bar chart and plain sentences.
    Text,
    /// One JSON object with `statistics` and `connectivity` keys.
    Json,
}

/// Link-failure resilience of a directed topology.
///
/// Prints the fraction of node pairs that keep at least k link-disjoint
/// paths, the graph's edge-connectivity with a witness cut, then opens an
/// interactive prompt for single pair queries.
#[derive(Parser, Debug, Clone)]
#[command(name = "link-resilience", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the edge-list graph file.
    pub graph_file: PathBuf,

    /// Do not compute the resilience distribution.
    #[arg(long, visible_alias = "ds")]
    pub disable_stats: bool,

    /// Do not compute the link-connectivity.
    #[arg(long, visible_alias = "dc")]
    pub disable_connectivity: bool,

    /// Do not open the interactive prompt.
    #[arg(long, visible_alias = "dp")]
    pub disable_prompt: bool,

    /// Worker threads for the pair loops (defaults to one per core).
    #[arg(long, env = "LINK_RESILIENCE_THREADS")]
    pub threads: Option<usize>,

    /// Width of the histogram bars, in characters.
    #[arg(long, env = "LINK_RESILIENCE_BAR_WIDTH", default_value_t = DEFAULT_BAR_WIDTH)]
    pub bar_width: usize,

    /// Report output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Refuse to analyze graphs whose in-memory size exceeds this many MB.
    #[arg(long, env = "LINK_RESILIENCE_MAX_MEMORY_MB", default_value_t = 4096)]
    pub max_memory_mb: usize,

    /// Warn before all-pairs analysis on graphs with more nodes than this.
    #[arg(long, default_value_t = 2000)]
    pub large_graph_warning: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Whether any all-pairs analysis will run.
    pub fn runs_pair_loops(&self) -> bool {
        !self.disable_stats || !self.disable_connectivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["link-resilience", "graph.txt"]).unwrap();
        assert_eq!(args.graph_file, PathBuf::from("graph.txt"));
        assert!(!args.disable_stats);
        assert!(!args.disable_connectivity);
        assert!(!args.disable_prompt);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.large_graph_warning, 2000);
        assert!(args.runs_pair_loops());
    }

    #[test]
    fn test_disable_flags_and_aliases() {
        let args = Args::try_parse_from([
            "link-resilience",
            "g.txt",
            "--ds",
            "--disable-connectivity",
            "--dp",
        ])
        .unwrap();
        assert!(args.disable_stats);
        assert!(args.disable_connectivity);
        assert!(args.disable_prompt);
        assert!(!args.runs_pair_loops());
    }

    #[test]
    fn test_json_format() {
        let args = Args::try_parse_from(["link-resilience", "g.txt", "--format", "json"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["link-resilience", "g.txt", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_graph_file_required() {
        assert!(Args::try_parse_from(["link-resilience"]).is_err());
    }
}
