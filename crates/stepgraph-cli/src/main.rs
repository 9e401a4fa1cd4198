//! Stepgraph CLI - narrated runs of the graph algorithms.
//!
//! Every command picks a graph (a built-in sample, a random graph, or an
//! edge-list literal), runs one engine on it, and prints each step as it
//! happens followed by the result.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use commands::mst::TreeEngine;
use commands::paths::PathEngine;

/// Step-by-step minimum spanning tree and shortest path runs.
///
/// Prints every step an algorithm takes: accepted and discarded edges,
/// selected nodes, and the distance table after each relaxation.
#[derive(Parser)]
#[command(name = "stepgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress step narration and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Narrated steps and tables (default)
    #[default]
    Table,
    /// `{graph, events, result}` as JSON
    Json,
}

/// Which graph a command runs on.
#[derive(Args, Clone, Debug, Default)]
pub struct GraphArgs {
    /// Run on a random connected graph with this many nodes
    #[arg(long, conflicts_with = "edges")]
    nodes: Option<usize>,

    /// Seed for the random graph
    #[arg(long, requires = "nodes")]
    seed: Option<u64>,

    /// Run on an edge list such as "A-B:4, B-C:1" or "0->1:-2 1->2:3"
    #[arg(long)]
    edges: Option<String>,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Minimum spanning tree with Kruskal's algorithm
    Kruskal {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Minimum spanning tree with Prim's algorithm
    Prim {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node (defaults to the first node of the graph)
        #[arg(long)]
        start: Option<String>,
    },

    /// Shortest paths with Dijkstra's algorithm (non-negative weights)
    Dijkstra {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source node (defaults to the first node of the graph)
        #[arg(long)]
        source: Option<String>,
    },

    /// Shortest paths with Bellman-Ford (negative weights allowed)
    BellmanFord {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source node (defaults to the first node of the graph)
        #[arg(long)]
        source: Option<String>,
    },

    /// Print a random connected graph
    Generate {
        /// Number of nodes
        #[arg(long)]
        nodes: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Kruskal { graph } => {
            commands::mst::run(TreeEngine::Kruskal, &graph, cli.format, cli.quiet)
        }
        Commands::Prim { graph, start } => {
            commands::mst::run(TreeEngine::Prim { start }, &graph, cli.format, cli.quiet)
        }
        Commands::Dijkstra { graph, source } => commands::paths::run(
            PathEngine::Dijkstra,
            &graph,
            source,
            cli.format,
            cli.quiet,
        ),
        Commands::BellmanFord { graph, source } => commands::paths::run(
            PathEngine::BellmanFord,
            &graph,
            source,
            cli.format,
            cli.quiet,
        ),
        Commands::Generate { nodes, seed } => {
            commands::generate::run(nodes, seed, cli.format, cli.quiet)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
