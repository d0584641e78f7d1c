use std::collections::HashMap;
use std::f32::consts::PI;
use std::fmt;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::GraphData;

const SEED_RADIUS: f32 = 25.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NodePosition {
    pub id: String,
    pub x: f32,
    pub y: f32,
}

/// Force directed layout over the static graph.
///
/// Positions live in a fixed world coordinate space; the caller maps them to
/// whatever viewport it renders into. Dragged nodes are pinned as anchors and
/// excluded from the free floating forces until released.
pub struct Layout {
    graph: ForceGraph<String, ()>,
    index: HashMap<String, DefaultNodeIdx>,
    edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
    width: f32,
    height: f32,
}

impl Layout {
    pub fn new(data: &GraphData, width: f32, height: f32) -> Self {
        let mut graph = ForceGraph::new(SimulationParameters {
            force_charge: 150.0,
            force_spring: 0.05,
            force_max: 100.0,
            node_speed: 3000.0,
            damping_factor: 0.9,
        });

        let mut index = HashMap::new();
        for (i, node) in data.nodes.iter().enumerate() {
            let angle = (i as f32) * 2.0 * PI / data.nodes.len().max(1) as f32;
            let idx = graph.add_node(NodeData {
                x: width / 2.0 + SEED_RADIUS * angle.cos(),
                y: height / 2.0 + SEED_RADIUS * angle.sin(),
                mass: node.radius(),
                is_anchor: false,
                user_data: node.id.clone(),
            });
            index.insert(node.id.clone(), idx);
        }

        let mut edges = Vec::new();
        for edge in &data.edges {
            if let (Some(&source), Some(&target)) =
                (index.get(&edge.source), index.get(&edge.target))
            {
                graph.add_edge(source, target, EdgeData::default());
                edges.push((source, target));
            }
        }

        Self {
            graph,
            index,
            edges,
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn tick(&mut self, dt: f32) {
        self.graph.update(dt);
    }

    pub fn positions(&self) -> Vec<NodePosition> {
        let mut positions = Vec::with_capacity(self.index.len());
        self.graph.visit_nodes(|node| {
            positions.push(NodePosition {
                id: node.data.user_data.clone(),
                x: node.x(),
                y: node.y(),
            });
        });

        positions
    }

    pub fn position(&self, id: &str) -> Option<(f32, f32)> {
        let idx = *self.index.get(id)?;
        let mut position = None;
        self.graph.visit_nodes(|node| {
            if node.index() == idx {
                position = Some((node.x(), node.y()));
            }
        });

        position
    }

    /// Edge endpoints in world space, tracking current node positions.
    pub fn edge_endpoints(&self) -> Vec<((f32, f32), (f32, f32))> {
        let mut by_index = HashMap::new();
        self.graph.visit_nodes(|node| {
            by_index.insert(node.index(), (node.x(), node.y()));
        });

        self.edges
            .iter()
            .filter_map(|(source, target)| {
                Some((*by_index.get(source)?, *by_index.get(target)?))
            })
            .collect()
    }

    /// Hit test in world space; returns the closest node within `radius`.
    pub fn node_at(&self, x: f32, y: f32, radius: f32) -> Option<String> {
        let mut found: Option<(String, f32)> = None;
        self.graph.visit_nodes(|node| {
            let (dx, dy) = (node.x() - x, node.y() - y);
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < radius && found.as_ref().map(|(_, it)| distance < *it).unwrap_or(true) {
                found = Some((node.data.user_data.clone(), distance));
            }
        });

        found.map(|(id, _)| id)
    }

    /// Pin a node to the given world position, excluding it from the free
    /// floating forces while dragged.
    pub fn pin(&mut self, id: &str, x: f32, y: f32) {
        let idx = match self.index.get(id) {
            Some(it) => *it,
            None => return,
        };

        self.graph.visit_nodes_mut(|node| {
            if node.index() == idx {
                node.data.x = x;
                node.data.y = y;
                node.data.is_anchor = true;
            }
        });
    }

    /// Release a pinned node back into the simulation.
    pub fn release(&mut self, id: &str) {
        let idx = match self.index.get(id) {
            Some(it) => *it,
            None => return,
        };

        self.graph.visit_nodes_mut(|node| {
            if node.index() == idx {
                node.data.is_anchor = false;
            }
        });
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("nodes", &self.index.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use crate::architecture;

    use super::Layout;

    #[test]
    fn new_assigns_finite_seed_positions_to_every_node() {
        let data = architecture();
        let layout = Layout::new(&data, 100.0, 100.0);

        let positions = layout.positions();
        assert_eq!(positions.len(), data.nodes.len());
        for position in positions {
            assert!(position.x.is_finite() && position.y.is_finite());
        }
    }

    #[test]
    fn tick_keeps_positions_finite() {
        let data = architecture();
        let mut layout = Layout::new(&data, 100.0, 100.0);

        for _ in 0..300 {
            layout.tick(0.035);
        }

        for position in layout.positions() {
            assert!(position.x.is_finite() && position.y.is_finite());
        }
    }

    #[test]
    fn pinned_node_ignores_simulation_forces() {
        let data = architecture();
        let mut layout = Layout::new(&data, 100.0, 100.0);

        layout.pin("WebView", 10.0, 20.0);
        for _ in 0..50 {
            layout.tick(0.035);
        }

        assert_eq!(layout.position("WebView"), Some((10.0, 20.0)));

        layout.release("WebView");
        for _ in 0..50 {
            layout.tick(0.035);
        }

        assert_ne!(layout.position("WebView"), Some((10.0, 20.0)));
    }

    #[test]
    fn node_at_resolves_nearest_node_within_radius() {
        let data = architecture();
        let layout = Layout::new(&data, 100.0, 100.0);

        let (x, y) = layout.position("IPC").unwrap();

        assert_eq!(layout.node_at(x, y, 3.0), Some("IPC".to_string()));
        assert_eq!(layout.node_at(x + 500.0, y, 3.0), None);
    }

    #[test]
    fn edge_endpoints_cover_every_edge() {
        let data = architecture();
        let layout = Layout::new(&data, 100.0, 100.0);

        assert_eq!(layout.edge_endpoints().len(), data.edges.len());
    }
}
