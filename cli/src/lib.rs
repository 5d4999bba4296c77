//! Command-line front end for `link-resilience-core`: edge-list loading,
//! text and JSON reports, and the interactive pair prompt.

pub mod app;
pub mod config;
pub mod load;
pub mod prompt;
pub mod report;

pub use app::{init_logging, run};
pub use config::{Args, OutputFormat};
pub use load::{load_graph, parse_edge_list, LoadError, LoadedGraph};
pub use report::{render_connectivity, render_statistics, write_report, ReportOptions};
