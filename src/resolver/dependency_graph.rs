//! Fragment dependency graph.
//!
//! Nodes are fragment names; an edge `A → B` means A's recipe consumes B's resolved
//! text, so B must be built first. The graph provides cycle detection with the
//! offending chain, topological ordering and tier computation.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use crate::core::GrammarError;

/// Color states for cycle detection using DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Node has not been visited.
    White,
    /// Node is currently being visited (in the DFS stack).
    Gray,
    /// Node has been fully visited.
    Black,
}

/// Directed graph of fragment inputs.
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Add a fragment if it is not already present.
    ///
    /// Fragments are indexed in insertion order, which makes every traversal below
    /// deterministic.
    pub fn add_fragment(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(name) {
            index
        } else {
            let index = self.graph.add_node(name.to_string());
            self.node_map.insert(name.to_string(), index);
            index
        }
    }

    /// Record that `from` consumes the text of `to`.
    pub fn add_dependency(&mut self, from: &str, to: &str) {
        let from_idx = self.add_fragment(from);
        let to_idx = self.add_fragment(to);

        if !self.graph.contains_edge(from_idx, to_idx) {
            self.graph.add_edge(from_idx, to_idx, ());
        }
    }

    /// Fail with the cycle path if the graph has one.
    pub fn detect_cycles(&self) -> Result<(), GrammarError> {
        let mut colors: HashMap<NodeIndex, Color> =
            self.graph.node_indices().map(|node| (node, Color::White)).collect();
        let mut path: Vec<NodeIndex> = Vec::new();

        for node in self.graph.node_indices() {
            if matches!(colors.get(&node), Some(Color::White)) {
                if let Some(cycle) = self.dfs_visit(node, &mut colors, &mut path) {
                    let chain = cycle
                        .iter()
                        .map(|idx| self.graph[*idx].as_str())
                        .collect::<Vec<_>>()
                        .join(" → ");
                    return Err(GrammarError::CircularDependency {
                        chain,
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns `Some(cycle)` when a back edge is found below `node`.
    fn dfs_visit(
        &self,
        node: NodeIndex,
        colors: &mut HashMap<NodeIndex, Color>,
        path: &mut Vec<NodeIndex>,
    ) -> Option<Vec<NodeIndex>> {
        colors.insert(node, Color::Gray);
        path.push(node);

        // neighbors() walks edges newest first; reverse for declaration order
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(node).collect();
        neighbors.reverse();

        for neighbor in neighbors {
            match colors.get(&neighbor) {
                Some(Color::Gray) => {
                    let start = path.iter().position(|n| *n == neighbor).unwrap_or(0);
                    let mut cycle = path[start..].to_vec();
                    cycle.push(neighbor);
                    return Some(cycle);
                }
                Some(Color::White) => {
                    if let Some(cycle) = self.dfs_visit(neighbor, colors, path) {
                        return Some(cycle);
                    }
                }
                _ => {}
            }
        }

        path.pop();
        colors.insert(node, Color::Black);
        None
    }

    /// Fragments ordered so that every input precedes its consumers.
    pub fn topological_order(&self) -> Result<Vec<String>, GrammarError> {
        self.detect_cycles()?;

        let indices = toposort(&self.graph, None).map_err(|cycle| GrammarError::CircularDependency {
            chain: self.graph[cycle.node_id()].clone(),
        })?;

        // toposort puts consumers first
        Ok(indices.into_iter().rev().map(|idx| self.graph[idx].clone()).collect())
    }

    /// Tier of every fragment: 0 without inputs, else one more than its deepest input.
    pub fn tiers(&self) -> Result<HashMap<String, usize>, GrammarError> {
        let mut tiers: HashMap<String, usize> = HashMap::new();
        for name in self.topological_order()? {
            let tier = self
                .direct_deps(&name)
                .iter()
                .filter_map(|dep| tiers.get(dep))
                .map(|t| t + 1)
                .max()
                .unwrap_or(0);
            tiers.insert(name, tier);
        }
        Ok(tiers)
    }

    /// Inputs of `name`, in the order they were added.
    pub fn direct_deps(&self, name: &str) -> Vec<String> {
        match self.node_map.get(name) {
            Some(&idx) => {
                let mut deps: Vec<String> =
                    self.graph.neighbors(idx).map(|n| self.graph[n].clone()).collect();
                deps.reverse();
                deps
            }
            None => Vec::new(),
        }
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
