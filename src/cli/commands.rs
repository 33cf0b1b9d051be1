//! CLI command implementations.

use std::path::Path;

use crate::config::EngineConfig;
use crate::graph::Graph;
use crate::traversal::GraphIterator;
use crate::types::{GraphError, GraphResult, Label};

/// Graph type handled by the CLI: string payloads, `f64` weights.
pub type CliGraph = Graph<String, f64>;

/// Walk order for `traverse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    DepthFirst,
    BreadthFirst,
}

impl TraversalKind {
    /// Parse "dfs" / "bfs" (and the long forms).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth" | "depth_first" => Some(Self::DepthFirst),
            "bfs" | "breadth" | "breadth_first" => Some(Self::BreadthFirst),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }
}

fn load(path: &Path, config: &EngineConfig) -> GraphResult<CliGraph> {
    config.string_serializer().read_from_file(path)
}

fn save(graph: &CliGraph, path: &Path, config: &EngineConfig) -> GraphResult<()> {
    config.string_serializer().write_to_file(graph, path)
}

/// Create a new empty graph file.
pub fn cmd_create(
    path: &Path,
    directed: bool,
    weighted: bool,
    config: &EngineConfig,
) -> GraphResult<()> {
    let graph = CliGraph::new(directed, weighted);
    save(&graph, path, config)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display information about a graph file.
pub fn cmd_info(path: &Path, config: &EngineConfig, json: bool) -> GraphResult<()> {
    let graph = load(path, config)?;
    let file_size = std::fs::metadata(path)?.len();
    let isolated = graph
        .nodes()
        .filter(|n| n.out_degree() == 0 && n.in_degree() == 0)
        .count();
    let max_out_degree = graph.nodes().map(|n| n.out_degree()).max().unwrap_or(0);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.is_directed(),
            "weighted": graph.is_weighted(),
            "nodes": graph.size(),
            "edges": graph.edge_count(),
            "isolated_nodes": isolated,
            "max_out_degree": max_out_degree,
            "file_size": file_size,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Directed: {}", graph.is_directed());
        println!("Weighted: {}", graph.is_weighted());
        println!("Nodes: {}", graph.size());
        println!("Edges: {}", graph.edge_count());
        println!("Isolated nodes: {}", isolated);
        println!("Max out-degree: {}", max_out_degree);
        println!("File size: {}", format_size(file_size));
    }
    Ok(())
}

/// Add a node, optionally under an explicit label.
pub fn cmd_add(
    path: &Path,
    payload: &str,
    label: Option<Label>,
    config: &EngineConfig,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path, config)?;

    let label = match label {
        Some(label) => {
            if !graph.add_at(label, payload.to_string()) {
                return Err(GraphError::InvalidArgument(format!(
                    "label {} already in use",
                    label
                )));
            }
            label
        }
        None => graph.add(payload.to_string())?,
    };

    save(&graph, path, config)?;

    if json {
        println!("{}", serde_json::json!({"label": label, "payload": payload}));
    } else {
        println!("Added node {} to {}", label, path.display());
    }
    Ok(())
}

/// Connect two nodes.
pub fn cmd_connect(
    path: &Path,
    u: Label,
    v: Label,
    weight: Option<f64>,
    config: &EngineConfig,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path, config)?;
    let added = match weight {
        Some(w) => graph.connect_weighted(u, v, w)?,
        None => graph.connect(u, v)?,
    };
    if added {
        save(&graph, path, config)?;
    }

    let arrow = if graph.is_directed() { "->" } else { "--" };
    if json {
        println!(
            "{}",
            serde_json::json!({"start": u, "end": v, "weight": weight, "added": added})
        );
    } else if added {
        println!("Connected {} {} {}", u, arrow, v);
    } else {
        println!("{} {} {} already connected", u, arrow, v);
    }
    Ok(())
}

/// Remove the edge between two nodes.
pub fn cmd_disconnect(
    path: &Path,
    u: Label,
    v: Label,
    config: &EngineConfig,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load(path, config)?;
    let removed = graph.disconnect(u, v)?.is_some();
    if removed {
        save(&graph, path, config)?;
    }

    if json {
        println!(
            "{}",
            serde_json::json!({"start": u, "end": v, "removed": removed})
        );
    } else if removed {
        println!("Disconnected {} and {}", u, v);
    } else {
        println!("No edge from {} to {}", u, v);
    }
    Ok(())
}

/// Remove a node and its edges.
pub fn cmd_remove(path: &Path, label: Label, config: &EngineConfig, json: bool) -> GraphResult<()> {
    let mut graph = load(path, config)?;
    let payload = graph.remove_at(label)?;
    save(&graph, path, config)?;

    if json {
        println!("{}", serde_json::json!({"label": label, "payload": payload}));
    } else {
        println!("Removed node {} ({:?})", label, payload);
    }
    Ok(())
}

/// Print the visitation order of a depth- or breadth-first walk.
pub fn cmd_traverse(
    path: &Path,
    start: Label,
    kind: TraversalKind,
    include_disconnected: bool,
    config: &EngineConfig,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, config)?;
    let mut iter: Box<dyn GraphIterator<String, f64>> = match kind {
        TraversalKind::DepthFirst => {
            Box::new(graph.depth_first_search_iterator(start, include_disconnected)?)
        }
        TraversalKind::BreadthFirst => {
            Box::new(graph.breadth_first_search_iterator(start, include_disconnected)?)
        }
    };

    let mut visited: Vec<(Label, &String)> = vec![(iter.label(), iter.payload(&graph)?)];
    while iter.has_next(&graph) {
        let label = iter.next(&graph)?;
        visited.push((label, iter.payload(&graph)?));
    }

    if json {
        let nodes: Vec<serde_json::Value> = visited
            .iter()
            .map(|(label, payload)| serde_json::json!({"label": label, "payload": payload}))
            .collect();
        let out = serde_json::json!({
            "start": start,
            "order": kind.name(),
            "visited": nodes,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{} from node {}:", kind.name(), start);
        for (i, (label, payload)) in visited.iter().enumerate() {
            println!("  [{}] {}: {}", i, label, payload);
        }
    }
    Ok(())
}

/// Deep-copy a graph file.
pub fn cmd_duplicate(source: &Path, target: &Path, config: &EngineConfig) -> GraphResult<()> {
    let graph = load(source, config)?;
    let copy = graph.duplicate()?;
    save(&copy, target, config)?;
    println!(
        "Duplicated {} -> {} ({} nodes, {} edges)",
        source.display(),
        target.display(),
        copy.size(),
        copy.edge_count()
    );
    Ok(())
}

/// Export the graph as JSON.
pub fn cmd_export(path: &Path, config: &EngineConfig, pretty: bool) -> GraphResult<()> {
    let graph = load(path, config)?;

    let nodes: Vec<serde_json::Value> = graph
        .nodes()
        .map(|n| {
            serde_json::json!({
                "label": n.label(),
                "payload": n.payload(),
                "attributes": n.attributes(),
            })
        })
        .collect();
    let edges: Vec<serde_json::Value> = graph
        .edges()
        .map(|e| {
            serde_json::json!({
                "start": e.start(),
                "end": e.end(),
                "weight": e.weight().map(|w| w.value()),
                "label": e.label(),
            })
        })
        .collect();

    let out = serde_json::json!({
        "directed": graph.is_directed(),
        "weighted": graph.is_weighted(),
        "nodes": nodes,
        "edges": edges,
    });

    let text = if pretty {
        serde_json::to_string_pretty(&out)
    } else {
        serde_json::to_string(&out)
    }
    .map_err(|e| GraphError::Codec(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
