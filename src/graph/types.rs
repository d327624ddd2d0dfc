//! Core graph types
//!
//! This module contains the adjacency relation produced by the graph builder
//! and consumed by the cycle detector.

use std::collections::HashMap;

use petgraph::graph::DiGraph;

/// Square boolean relation over package positions
///
/// Row `i` holds the packages that package `i` depends on. Cells are stored
/// row-major so a whole row can be handed to a worker at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    size: usize,
    cells: Vec<bool>,
    index: HashMap<String, usize>,
}

impl DependencyGraph {
    pub(crate) fn new(size: usize, index: HashMap<String, usize>) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
            index,
        }
    }

    /// Number of packages in the relation
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.size && to < self.size && self.cells[from * self.size + to]
    }

    pub(crate) fn set_edge(&mut self, from: usize, to: usize) {
        self.cells[from * self.size + to] = true;
    }

    /// Position of the package indexed under `name`
    ///
    /// Packages sharing a short name are conflated; the last one wins.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Successors of `from`, in index order
    pub fn neighbors(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&to| self.has_edge(from, to))
    }

    pub(crate) fn into_cells(self) -> (usize, Vec<bool>) {
        (self.size, self.cells)
    }

    /// Convert into a `petgraph` graph whose node weights are the positions
    /// of the packages in the input batch.
    pub fn to_digraph(&self) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::with_capacity(self.size, self.edge_count());
        let nodes: Vec<_> = (0..self.size).map(|i| graph.add_node(i)).collect();
        for from in 0..self.size {
            for to in self.neighbors(from) {
                graph.add_edge(nodes[from], nodes[to], ());
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_digraph_conversion() {
        let index = HashMap::from([("a".to_string(), 0), ("b".to_string(), 1)]);
        let mut graph = DependencyGraph::new(2, index);
        graph.set_edge(0, 1);

        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(!graph.has_edge(5, 0));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.index_of("b"), Some(1));
        assert_eq!(graph.index_of("c"), None);

        let digraph = graph.to_digraph();
        assert_eq!(digraph.node_count(), 2);
        assert_eq!(digraph.edge_count(), 1);
    }
}
