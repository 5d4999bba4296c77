//! Rendering of analysis results, as text or JSON.

use std::io::Write;

use link_resilience_core::{
    link_connectivity, statistics, Graph, LinkConnectivity, ResilienceDistribution,
};
use serde::Serialize;

use crate::config::OutputFormat;

/// What to compute and how to print it.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub statistics: bool,
    pub connectivity: bool,
    pub bar_width: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    nodes: usize,
    edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<&'a ResilienceDistribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    connectivity: Option<&'a LinkConnectivity>,
}

/// Histogram block, framed by blank lines. Empty when there is nothing to plot.
pub fn render_statistics(dist: &ResilienceDistribution, bar_width: usize) -> String {
    let chart = dist.render(bar_width);
    if chart.is_empty() {
        return chart;
    }
    format!("\n{chart}\n")
}

pub fn render_connectivity(result: &LinkConnectivity) -> String {
    match result {
        LinkConnectivity::SingleNode => "This graph has only one node.\n".to_string(),
        LinkConnectivity::NotStronglyConnected { from, to } => {
            format!("This graph is not strongly connected. {from} cannot reach {to}.\n")
        }
        LinkConnectivity::Connected {
            min_k,
            from,
            to,
            cut,
        } => {
            let mut out = format!(
                "The graph is {min_k}-edge-connected.\n\
                 example: make {from} unable to reach {to}. Break the following links\n"
            );
            for link in cut {
                out.push_str(&format!(" {} -> {}\n", link.from, link.to));
            }
            out
        }
    }
}

/// Run the requested analyses on `graph` and write the report to `out`.
///
/// Text output is written section by section so the histogram appears
/// before the (often slower) connectivity search starts.
pub fn write_report<W: Write>(
    graph: &Graph,
    options: &ReportOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    match options.format {
        OutputFormat::Text => {
            if options.statistics {
                let dist = statistics(graph);
                write!(out, "{}", render_statistics(&dist, options.bar_width))?;
                out.flush()?;
            }
            if options.connectivity {
                let result = link_connectivity(graph);
                write!(out, "{}", render_connectivity(&result))?;
            }
        }
        OutputFormat::Json => {
            let dist = options.statistics.then(|| statistics(graph));
            let result = options.connectivity.then(|| link_connectivity(graph));
            let report = JsonReport {
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                statistics: dist.as_ref(),
                connectivity: result.as_ref(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
