//! Static architecture graph of the Tauri framework and its force layout.
//!
//! The node and edge set is fixed data; only simulation assigned positions
//! move. Referential integrity is checked once at load time.

use std::collections::HashSet;

use thiserror::Error;

pub mod layout;

pub use layout::Layout;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),
    #[error("Edge endpoint does not resolve to a node: {0}")]
    DanglingEdge(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Core,
    Rust,
    Js,
    Bridge,
}

#[derive(Clone, Debug)]
pub struct GraphNode {
    pub id: String,
    pub group: u8,
    pub label: String,
    pub kind: NodeKind,
}

impl GraphNode {
    /// Visual weight class: lower groups render larger.
    pub fn radius(&self) -> f32 {
        match self.group {
            1 => 12.0,
            2 => 10.0,
            _ => 8.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: f32,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphData {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Load time check: node ids are unique and every edge endpoint resolves.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNodeId(node.id.clone()));
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(GraphError::DanglingEdge(endpoint.clone()));
                }
            }
        }

        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "graph validated"
        );

        Ok(())
    }
}

fn node(id: &str, group: u8, label: &str, kind: NodeKind) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        group,
        label: label.to_string(),
        kind,
    }
}

fn edge(source: &str, target: &str, weight: f32) -> GraphEdge {
    GraphEdge {
        source: source.to_string(),
        target: target.to_string(),
        weight,
    }
}

/// The fixed Tauri architecture dataset.
pub fn architecture() -> GraphData {
    GraphData {
        nodes: vec![
            node("Tauri App", 1, "Tauri App", NodeKind::Core),
            node("Core Process", 1, "Core (Rust)", NodeKind::Rust),
            node("WebView", 2, "WebView", NodeKind::Js),
            node("IPC", 3, "IPC Bridge", NodeKind::Bridge),
            node("Window", 2, "Window", NodeKind::Js),
            node("Event Loop", 1, "Event Loop", NodeKind::Rust),
            node("System Tray", 1, "System Tray", NodeKind::Rust),
            node("Menu", 1, "Menu", NodeKind::Rust),
            node("Frontend Framework", 2, "React/Vue/Svelte", NodeKind::Js),
            node("Invoke", 3, "invoke()", NodeKind::Bridge),
            node("Emit", 3, "emit()", NodeKind::Bridge),
            node("Rust Commands", 1, "#[command]", NodeKind::Rust),
        ],
        edges: vec![
            edge("Tauri App", "Core Process", 10.0),
            edge("Tauri App", "WebView", 10.0),
            edge("Core Process", "Event Loop", 5.0),
            edge("Core Process", "System Tray", 3.0),
            edge("Core Process", "Menu", 3.0),
            edge("WebView", "Window", 8.0),
            edge("WebView", "Frontend Framework", 5.0),
            edge("WebView", "IPC", 10.0),
            edge("Core Process", "IPC", 10.0),
            edge("IPC", "Invoke", 5.0),
            edge("IPC", "Emit", 5.0),
            edge("Invoke", "Rust Commands", 8.0),
        ],
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn architecture_passes_referential_integrity() {
        architecture().validate().expect("static data must resolve");
    }

    #[test]
    fn validate_rejects_dangling_edge() {
        let mut data = architecture();
        data.edges.push(edge("Tauri App", "Missing", 1.0));

        match data.validate() {
            Err(GraphError::DanglingEdge(endpoint)) => assert_eq!(endpoint, "Missing"),
            it => panic!("expected dangling edge error, got {:?}", it),
        }
    }

    #[test]
    fn validate_rejects_duplicate_node_ids() {
        let mut data = architecture();
        data.nodes.push(node("WebView", 2, "WebView", NodeKind::Js));

        assert!(matches!(
            data.validate(),
            Err(GraphError::DuplicateNodeId(_))
        ));
    }

    #[test]
    fn node_resolves_by_id() {
        let data = architecture();

        assert_eq!(data.node("IPC").map(|n| n.label.as_str()), Some("IPC Bridge"));
        assert!(data.node("nope").is_none());
    }
}
