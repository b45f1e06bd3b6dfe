//! DOT export, and import through `dot-parser` when the `dot` feature is on.

use std::io::{self, Write};

use crate::{error::DotError, graph::Graph, tracing_support::info_span};

/// Writes `graph` as a DOT digraph: one line per node with outgoing edges,
/// listing the node's label and the labels of its `Out` targets.
///
/// ```text
/// digraph {
///     "a" -> { "b" }
///     "b" -> { "c" }
/// }
/// ```
///
/// Only exact `Out` records are written, so each directed connection shows
/// up once. Labels are not unique, so distinct nodes may merge when the
/// output is read back.
pub fn encode_dot(graph: &Graph, writer: impl Write) -> Result<(), DotError> {
    let _span = info_span!("encode_dot", nodes = graph.num_nodes()).entered();
    let mut writer = io::BufWriter::new(writer);

    writer.write_all(b"digraph {\n")?;
    for node in graph.node_ids() {
        let mut targets = graph.edges(node).outgoing().peekable();
        if targets.peek().is_none() {
            continue;
        }
        let targets: Vec<String> = targets.map(|e| quote(graph.label(e.target))).collect();
        writeln!(writer, "\t{} -> {{ {} }}", quote(graph.label(node)), targets.join(" "))?;
    }
    writer.write_all(b"}\n")?;
    writer.flush()?;
    Ok(())
}

/// Quotes a label as a DOT id, escaping `"`, `\\` and newlines.
///
/// `dot-parser` cannot close a quoted id right after a backslash, so a label
/// ending in one does not read back.
fn quote(label: &str) -> String {
    let mut quoted = String::with_capacity(label.len() + 2);
    quoted.push('"');
    for c in label.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(feature = "dot")]
pub use parse::decode_dot;

#[cfg(feature = "dot")]
mod parse {
    use std::collections::HashMap;

    use dot_parser::ast::{
        Graph as DotGraph, ID, NodeID, Stmt, StmtList, Subgraph, either::Either,
    };

    use crate::{error::DotError, graph::Graph, id::NodeId, tracing_support::info_span};

    type Stmts<'a> = StmtList<(ID<'a>, ID<'a>)>;

    /// Reads DOT text into a new graph.
    ///
    /// Explicitly declared nodes are created first, in statement order, then
    /// nodes that only appear in edge statements. Nodes are keyed by their
    /// DOT id, which becomes the label. Every edge, including the edges of
    /// undirected DOT graphs, is added as an `Out` connection. DOT
    /// attributes are ignored.
    pub fn decode_dot(data: &str) -> Result<Graph, DotError> {
        let _span = info_span!("decode_dot", len = data.len()).entered();
        let dot_ast: DotGraph<_> = DotGraph::try_from(data)
            .map_err(|e| DotError::Parse(format!("{e:?}")))?;

        let mut decoder = Decoder {
            graph: Graph::new(""),
            node_map: HashMap::new(),
        };
        decoder.declare_nodes(&dot_ast.stmts);
        decoder.add_edges(&dot_ast.stmts);
        Ok(decoder.graph)
    }

    struct Decoder {
        graph: Graph,
        node_map: HashMap<String, NodeId>,
    }

    impl Decoder {
        fn node(&mut self, id: String) -> NodeId {
            if let Some(&node) = self.node_map.get(&id) {
                return node;
            }
            let node = self.graph.add_node(id.clone());
            self.node_map.insert(id, node);
            node
        }

        fn declare_nodes(&mut self, stmts: &Stmts<'_>) {
            for stmt in stmts {
                match stmt {
                    Stmt::NodeStmt(node_stmt) => {
                        self.node(unquote(node_stmt.node.id.to_string()));
                    }
                    Stmt::Subgraph(subgraph) => self.declare_nodes(&subgraph.stmts),
                    _ => {}
                }
            }
        }

        fn add_edges(&mut self, stmts: &Stmts<'_>) {
            for stmt in stmts {
                match stmt {
                    Stmt::EdgeStmt(edge_stmt) => {
                        let from_nodes = self.resolve(&edge_stmt.from);
                        for from in from_nodes {
                            let mut current_from = from;
                            let mut current_rhs = Some(&edge_stmt.next);
                            while let Some(rhs) = current_rhs {
                                let to_nodes = self.resolve(&rhs.to);
                                for &to in &to_nodes {
                                    self.graph.add_edge(current_from, to);
                                }
                                // A subgraph continues the chain from its first node.
                                if let Some(&first) = to_nodes.first() {
                                    current_from = first;
                                }
                                current_rhs = rhs.next.as_deref();
                            }
                        }
                    }
                    Stmt::Subgraph(subgraph) => self.add_edges(&subgraph.stmts),
                    _ => {}
                }
            }
        }

        fn resolve(&mut self, either: &Either<NodeID, Subgraph<(ID<'_>, ID<'_>)>>) -> Vec<NodeId> {
            extract_node_ids(either)
                .into_iter()
                .map(|id| self.node(id))
                .collect()
        }
    }

    /// Collects the node ids named by an edge endpoint, descending into
    /// `{ … }` subgraphs.
    fn extract_node_ids(either: &Either<NodeID, Subgraph<(ID<'_>, ID<'_>)>>) -> Vec<String> {
        match either {
            Either::Left(node_id) => vec![unquote(node_id.id.to_string())],
            Either::Right(subgraph) => {
                let mut node_ids = Vec::new();
                for stmt in &subgraph.stmts {
                    match stmt {
                        Stmt::NodeStmt(node_stmt) => {
                            node_ids.push(unquote(node_stmt.node.id.to_string()));
                        }
                        Stmt::EdgeStmt(edge_stmt) => {
                            node_ids.extend(extract_node_ids(&edge_stmt.from));
                            let mut current_rhs = Some(&edge_stmt.next);
                            while let Some(rhs) = current_rhs {
                                node_ids.extend(extract_node_ids(&rhs.to));
                                current_rhs = rhs.next.as_deref();
                            }
                        }
                        Stmt::Subgraph(nested) => {
                            node_ids.extend(extract_node_ids(&Either::Right(nested.clone())));
                        }
                        _ => {}
                    }
                }
                node_ids
            }
        }
    }

    /// Undoes the `\"`, `\\` and `\n` escapes written by `encode_dot`.
    /// Other backslashes are kept as they are.
    fn unquote(id: String) -> String {
        let id = match id.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
            Some(inner) => inner,
            None => id.as_str(),
        };
        let mut unquoted = String::with_capacity(id.len());
        let mut chars = id.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                unquoted.push(c);
                continue;
            }
            match chars.next() {
                Some('"') => unquoted.push('"'),
                Some('\\') => unquoted.push('\\'),
                Some('n') => unquoted.push('\n'),
                Some(other) => {
                    unquoted.push('\\');
                    unquoted.push(other);
                }
                None => unquoted.push('\\'),
            }
        }
        unquoted
    }

}
