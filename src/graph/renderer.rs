use std::collections::HashMap;
use std::io::Write;

use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use super::builder::DependencyGraphBuilder;
use crate::core::Package;
use crate::error::AnticycleError;

mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(AnticycleError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(AnticycleError::from)
    };
}

/// Renders a set of packages and the imports between them as a Graphviz
/// digraph.
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_dot(
        &self,
        packages: &[Package],
        output: &mut dyn Write,
    ) -> Result<(), AnticycleError> {
        let relation = DependencyGraphBuilder::new().build(packages);
        let graph = relation.to_digraph();

        // Edges inside one strongly connected component lie on a cycle
        let mut component: HashMap<NodeIndex, usize> = HashMap::new();
        for (id, scc) in tarjan_scc(&graph).into_iter().enumerate() {
            for node in scc {
                component.insert(node, id);
            }
        }

        writeln_out!(output, "digraph package_dependencies {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for node in graph.node_indices() {
            let package = &packages[graph[node]];
            let (fill_color, stroke_color) = if self.highlight_cycles && package.have_cycle() {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };

            writeln_out!(
                output,
                r#"    "{}" [label="{}", style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                package.path(),
                package.name(),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for edge in graph.edge_references() {
            let (source, target) = (edge.source(), edge.target());
            let on_cycle = source == target || component.get(&source) == component.get(&target);

            let color = if self.highlight_cycles && on_cycle {
                colors::CYCLE_EDGE
            } else {
                colors::NORMAL_EDGE
            };
            let width = if self.highlight_cycles && on_cycle {
                "2.5"
            } else {
                "1.5"
            };

            writeln_out!(
                output,
                r#"    "{}" -> "{}" [color="{}", penwidth={}];"#,
                packages[graph[source]].path(),
                packages[graph[target]].path(),
                color,
                width
            )?;
        }

        writeln_out!(output, "}}")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{File, ImportInfo};

    fn package(name: &str, imports: &[&str]) -> Package {
        Package::builder()
            .with_name(name)
            .with_path(format!("app/{name}"))
            .with_file(File::new(
                format!("app/{name}/{name}.go"),
                imports.iter().map(|i| ImportInfo::new(*i, None)).collect(),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_dot_lists_nodes_and_edges() {
        let packages = vec![
            package("foo", &["fmt"]),
            package("bar", &["example.com/app/foo"]),
        ];

        let mut output = Vec::new();
        GraphRenderer::new(true)
            .render_dot(&packages, &mut output)
            .unwrap();
        let dot = String::from_utf8(output).unwrap();

        assert!(dot.starts_with("digraph package_dependencies {"));
        assert!(dot.contains(r#""app/foo" [label="foo""#));
        assert!(dot.contains(r##""app/bar" -> "app/foo" [color="#64B5F6""##));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_render_dot_highlights_cycle_edges() {
        let packages = vec![
            package("foo", &["example.com/app/bar"]),
            package("bar", &["example.com/app/foo"]),
        ];

        let mut output = Vec::new();
        GraphRenderer::new(true)
            .render_dot(&packages, &mut output)
            .unwrap();
        let dot = String::from_utf8(output).unwrap();

        assert_eq!(dot.matches(colors::CYCLE_EDGE).count(), 2);
    }

    #[test]
    fn test_render_dot_empty() {
        let mut output = Vec::new();
        GraphRenderer::default()
            .render_dot(&[], &mut output)
            .unwrap();
        let dot = String::from_utf8(output).unwrap();
        assert!(!dot.contains("->"));
    }
}
