use serde::Serialize;

use crate::ast::{Node, NodeTag, Program};

/// How a node should be drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// The program root.
    Ellipse,
    /// Statements.
    Box,
    /// Operators.
    Diamond,
    /// Literals and identifiers.
    Oval,
}

impl Shape {
    /// The lowercase name of the shape, as used by common graph renderers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ellipse => "ellipse",
            Self::Box => "box",
            Self::Diamond => "diamond",
            Self::Oval => "oval",
        }
    }

    const fn of(tag: NodeTag) -> Self {
        match tag {
            NodeTag::Program => Self::Ellipse,
            NodeTag::Declaration | NodeTag::Assignment | NodeTag::Print => Self::Box,
            NodeTag::BinaryOp => Self::Diamond,
            NodeTag::Number | NodeTag::Identifier | NodeTag::String => Self::Oval,
        }
    }
}

/// A vertex of the exported graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Pre-order index of the node, starting at 0 for the root.
    pub id:    usize,
    /// Text to show inside the node.
    pub label: String,
    /// Suggested shape.
    pub shape: Shape,
}

/// A parent-to-child link.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub parent: usize,
    pub child:  usize,
}

/// A renderer-independent description of an AST as nodes and edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    /// Nodes in pre-order.
    pub nodes: Vec<GraphNode>,
    /// One edge per parent-child relation, in pre-order of the child.
    pub edges: Vec<GraphEdge>,
}

/// Converts a program into a graph with one node per AST node.
///
/// Labels are `Program`, `Declaration\nint x`, `Assignment\nx =`, `Print`,
/// `Operation\n+`, and for leaves their textual form such as `Number(5)`.
///
/// # Example
/// ```
/// use scoobylang::{graph::{Shape, ast_to_graph}, parse};
///
/// let analysis = parse("int x = 1 + 2;").unwrap();
/// let graph = ast_to_graph(&analysis.program);
///
/// let labels: Vec<_> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
/// assert_eq!(labels,
///            ["Program", "Assignment\nx =", "Operation\n+", "Number(1)", "Number(2)"]);
/// assert_eq!(graph.nodes[2].shape, Shape::Diamond);
/// assert_eq!(graph.edges.len(), 4);
/// ```
#[must_use]
pub fn ast_to_graph(program: &Program) -> Graph {
    let mut graph = Graph::default();
    add_node(&mut graph, Node::Program(program), None);
    graph
}

fn add_node(graph: &mut Graph, node: Node<'_>, parent: Option<usize>) {
    let id = graph.nodes.len();
    let tag = node.tag();
    graph.nodes.push(GraphNode { id,
                                 label: label_of(node, tag),
                                 shape: Shape::of(tag) });
    if let Some(parent) = parent {
        graph.edges.push(GraphEdge { parent, child: id });
    }
    for child in node.children() {
        add_node(graph, child, Some(id));
    }
}

fn label_of(node: Node<'_>, tag: NodeTag) -> String {
    let label = node.label();
    match tag {
        NodeTag::Program => label,
        NodeTag::Declaration => format!("Declaration\nint {label}"),
        NodeTag::Assignment => format!("Assignment\n{label} ="),
        NodeTag::Print => "Print".to_string(),
        NodeTag::BinaryOp => format!("Operation\n{label}"),
        NodeTag::Number => format!("Number({label})"),
        NodeTag::Identifier => format!("Identifier('{label}')"),
        NodeTag::String => format!("String('{label}')"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn shapes_follow_node_kinds() {
        let analysis = parse("int x;\nprint \"hi\";\nprint x * 2;").unwrap();
        let graph = ast_to_graph(&analysis.program);
        let shapes: Vec<_> = graph.nodes.iter().map(|n| (n.label.as_str(), n.shape)).collect();
        assert_eq!(shapes,
                   [("Program", Shape::Ellipse),
                    ("Declaration\nint x", Shape::Box),
                    ("Print", Shape::Box),
                    ("String('hi')", Shape::Oval),
                    ("Print", Shape::Box),
                    ("Operation\n*", Shape::Diamond),
                    ("Identifier('x')", Shape::Oval),
                    ("Number(2)", Shape::Oval)]);
    }

    #[test]
    fn edges_link_each_child_to_its_parent() {
        let analysis = parse("int x;\nprint x * 2;").unwrap();
        let graph = ast_to_graph(&analysis.program);
        let edges: Vec<_> = graph.edges.iter().map(|e| (e.parent, e.child)).collect();
        assert_eq!(edges, [(0, 1), (0, 2), (2, 3), (3, 4), (3, 5)]);
    }
}
