//! Wiring for the `link-resilience` binary.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Args;
use crate::load::load_graph;
use crate::prompt::run_prompt;
use crate::report::{write_report, ReportOptions};

/// Install the stderr log subscriber. `RUST_LOG` wins over the flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // A subscriber may already be installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Load the graph, print the report, then hand over to the prompt.
pub fn run(args: Args) -> Result<()> {
    init_logging(args.verbose, args.quiet);

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .with_context(|| format!("failed to start {threads} worker threads"))?;
    }

    let loaded = load_graph(&args.graph_file, Some(args.max_memory_mb))
        .with_context(|| format!("cannot load graph from {}", args.graph_file.display()))?;
    let graph = loaded.graph;

    if args.runs_pair_loops() && graph.node_count() > args.large_graph_warning {
        tracing::warn!(
            nodes = graph.node_count(),
            pairs = graph.pair_count(),
            "large graph, all-pairs analysis may take a long time"
        );
    }

    let options = ReportOptions {
        statistics: !args.disable_stats,
        connectivity: !args.disable_connectivity,
        bar_width: args.bar_width,
        format: args.format,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&graph, &options, &mut out)?;

    if !args.disable_prompt {
        run_prompt(&graph, io::stdin().lock(), &mut out).context("prompt failed")?;
    }
    out.flush()?;
    Ok(())
}
