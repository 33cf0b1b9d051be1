//! CLI entry point for the `graphkit` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphkit::cli::commands::{self, TraversalKind};
use graphkit::{EngineConfig, GraphError, Label};

#[derive(Parser)]
#[command(
    name = "graphkit",
    about = "graphkit CLI: inspect and edit binary graph files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG still applies)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph file
    Create {
        /// Path to the graph file to create
        file: PathBuf,
        /// Create a directed graph (overrides the config default)
        #[arg(long, conflicts_with = "undirected")]
        directed: bool,
        /// Create an undirected graph (overrides the config default)
        #[arg(long)]
        undirected: bool,
        /// Require weights on every edge
        #[arg(long)]
        weighted: bool,
    },
    /// Display information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Add a node
    Add {
        /// Path to the graph file
        file: PathBuf,
        /// Node payload
        payload: String,
        /// Explicit label (allocated when omitted)
        #[arg(long)]
        label: Option<Label>,
    },
    /// Connect two nodes
    Connect {
        /// Path to the graph file
        file: PathBuf,
        /// Start node label
        u: Label,
        /// End node label
        v: Label,
        /// Edge weight (required on weighted graphs)
        #[arg(long)]
        weight: Option<f64>,
    },
    /// Remove the edge between two nodes
    Disconnect {
        /// Path to the graph file
        file: PathBuf,
        /// Start node label
        u: Label,
        /// End node label
        v: Label,
    },
    /// Remove a node and its edges
    Remove {
        /// Path to the graph file
        file: PathBuf,
        /// Node label
        label: Label,
    },
    /// Print a depth- or breadth-first visitation order
    Traverse {
        /// Path to the graph file
        file: PathBuf,
        /// Starting node label
        start: Label,
        /// Order: dfs or bfs
        #[arg(long, default_value = "dfs")]
        order: String,
        /// Append nodes unreachable from the start
        #[arg(long)]
        all: bool,
    },
    /// Deep-copy a graph file
    Duplicate {
        /// Source graph file
        source: PathBuf,
        /// Destination graph file
        target: PathBuf,
    },
    /// Export the graph as JSON
    Export {
        /// Path to the graph file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = match EngineConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(3);
        }
    };

    let result = match cli.command {
        Commands::Create {
            file,
            directed,
            undirected,
            weighted,
        } => {
            let directed = if directed {
                true
            } else if undirected {
                false
            } else {
                config.graph.directed
            };
            let weighted = weighted || config.graph.weighted;
            commands::cmd_create(&file, directed, weighted, &config)
        }
        Commands::Info { file } => commands::cmd_info(&file, &config, json),
        Commands::Add {
            file,
            payload,
            label,
        } => commands::cmd_add(&file, &payload, label, &config, json),
        Commands::Connect { file, u, v, weight } => {
            commands::cmd_connect(&file, u, v, weight, &config, json)
        }
        Commands::Disconnect { file, u, v } => {
            commands::cmd_disconnect(&file, u, v, &config, json)
        }
        Commands::Remove { file, label } => commands::cmd_remove(&file, label, &config, json),
        Commands::Traverse {
            file,
            start,
            order,
            all,
        } => {
            let kind = match TraversalKind::from_name(&order) {
                Some(kind) => kind,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, start, kind, all, &config, json)
        }
        Commands::Duplicate { source, target } => {
            commands::cmd_duplicate(&source, &target, &config)
        }
        Commands::Export { file, pretty } => commands::cmd_export(&file, &config, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::BadMagicNumber(_)
            | GraphError::TruncatedStream
            | GraphError::Corrupt(_)
            | GraphError::Codec(_)
            | GraphError::Compression(_) => 2,
            GraphError::InvalidArgument(_) | GraphError::Config(_) => 3,
            GraphError::UnknownLabel(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
