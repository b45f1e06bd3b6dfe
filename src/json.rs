//! The JSON interchange format.
//!
//! ```json
//! {
//!   "name": "g",
//!   "nodes": [{"name": "a", "attributes": {"example": true}}, {"name": "b"}],
//!   "edges": [
//!     {"from_index": 0, "direction": 3, "to_index": 1},
//!     {"from_index": 1, "direction": 2, "to_index": 0}
//!   ]
//! }
//! ```
//!
//! Edges list every stored record, both sides of each connection, with
//! nodes addressed by their position in `nodes` and directions by their
//! integer code.

use std::{
    collections::HashMap,
    io::{Read, Write},
};

use serde::{Deserialize, Serialize};

use crate::{
    attributes::Attributes,
    direction::Direction,
    error::JsonError,
    graph::Graph,
    node::Edge,
    tracing_support::info_span,
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct GraphJson {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    nodes: Vec<NodeJson>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    edges: Vec<EdgeJson>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeJson {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    from_index: usize,
    direction: Direction,
    to_index: usize,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
}

/// Writes `graph` as a single line of JSON followed by a newline.
///
/// A record that is an exact duplicate of an earlier one (same ends,
/// direction, name and attributes) is written once.
pub fn encode_json(graph: &Graph, mut writer: impl Write) -> Result<(), JsonError> {
    let _span = info_span!("encode_json", nodes = graph.num_nodes()).entered();

    let nodes = graph
        .node_ids()
        .map(|id| {
            let node = graph.node(id);
            NodeJson {
                name: node.label.clone(),
                attributes: node.attributes.clone(),
            }
        })
        .collect();

    // Records keyed by ends, direction and name; attributes are compared
    // only among records sharing a key.
    let mut seen: HashMap<(usize, Direction, usize, Option<String>), Vec<usize>> = HashMap::new();
    let mut edges: Vec<EdgeJson> = Vec::new();
    for id in graph.node_ids() {
        for edge in graph.edges(id) {
            let record = EdgeJson {
                name: edge.name.clone(),
                from_index: id.index(),
                direction: edge.direction,
                to_index: edge.target.index(),
                attributes: edge.attributes.clone(),
            };
            let key = (
                record.from_index,
                record.direction,
                record.to_index,
                record.name.clone(),
            );
            let same_key = seen.entry(key).or_default();
            if same_key.iter().all(|&i| edges[i].attributes != record.attributes) {
                same_key.push(edges.len());
                edges.push(record);
            }
        }
    }

    let doc = GraphJson {
        name: graph.name().to_string(),
        attributes: graph.attributes().clone(),
        nodes,
        edges,
    };
    serde_json::to_writer(&mut writer, &doc)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Reads a graph written by [`encode_json`].
///
/// Each edge entry is appended as-is to its `from_index` node; no
/// back-record is synthesized, since the input already lists both sides.
/// An index outside the node list is an error, and so is a record without a
/// matching record (ends swapped, direction complemented) on the other side.
pub fn decode_json(reader: impl Read) -> Result<Graph, JsonError> {
    let _span = info_span!("decode_json").entered();
    let doc: GraphJson = serde_json::from_reader(reader)?;

    let mut graph = Graph::new(doc.name).with_attributes(doc.attributes);
    for node in doc.nodes {
        graph.add_node_with_attributes(node.name, node.attributes);
    }

    check_pairing(&doc.edges)?;
    for edge in doc.edges {
        let from = graph.node_at(edge.from_index)?;
        let to = graph.node_at(edge.to_index)?;
        graph.push_edge_record(
            from,
            Edge {
                target: to,
                direction: edge.direction,
                name: edge.name,
                attributes: edge.attributes,
            },
        );
    }

    Ok(graph)
}

/// Every connection is stored on both of its ends, so each record must be
/// matched by as many records going the other way.
fn check_pairing(edges: &[EdgeJson]) -> Result<(), JsonError> {
    let mut counts: HashMap<(usize, Direction, usize), isize> = HashMap::new();
    for edge in edges {
        *counts
            .entry((edge.from_index, edge.direction, edge.to_index))
            .or_default() += 1;
    }
    for (&(from_index, direction, to_index), &count) in &counts {
        let back = counts
            .get(&(to_index, direction.complement(), from_index))
            .copied()
            .unwrap_or_default();
        if back != count {
            return Err(JsonError::UnpairedRecord {
                from_index,
                direction,
                to_index,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attributes::AttrValue, error::GraphError};

    fn sample() -> Graph {
        // a → b → c
        let mut graph = Graph::new("sample");
        let a = graph.add_node_with_attributes("a", [("example", true)].into_iter().collect());
        let b = graph.add_node_with_attributes("b", [("example", "yes")].into_iter().collect());
        let c = graph.add_node_with_attributes("c", [("example", 1)].into_iter().collect());
        graph.add_edge(a, b);
        graph.add_edge(b, c);
        graph
    }

    fn encode(graph: &Graph) -> String {
        let mut buf = Vec::new();
        encode_json(graph, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_encode_layout() {
        let text = encode(&sample());
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "sample");
        assert_eq!(value["nodes"][0]["name"], "a");
        assert_eq!(value["nodes"][1]["attributes"]["example"], "yes");
        let edges = value["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0]["from_index"], 0);
        assert_eq!(edges[0]["direction"], 3);
        assert_eq!(edges[0]["to_index"], 1);
        assert_eq!(edges[1]["from_index"], 1);
        assert_eq!(edges[1]["direction"], 2);
        assert!(edges[0].get("name").is_none());
    }

    #[test]
    fn test_encode_suppresses_duplicate_records() {
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b"]);
        graph.add_edge(nodes[0], nodes[1]);
        graph.add_edge(nodes[0], nodes[1]);
        assert_eq!(graph.num_edge_records(), 4);
        let value: serde_json::Value = serde_json::from_str(&encode(&graph)).unwrap();
        assert_eq!(value["edges"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_decode_restores_records() {
        let original = sample();
        let decoded = decode_json(encode(&original).as_bytes()).unwrap();

        assert_eq!(decoded.name(), "sample");
        assert_eq!(decoded.num_nodes(), 3);
        assert_eq!(decoded.num_edge_records(), 4);
        for (x, y) in original.node_ids().zip(decoded.node_ids()) {
            assert_eq!(original.label(x), decoded.label(y));
            assert_eq!(original.node(x).attributes, decoded.node(y).attributes);
            assert_eq!(original.edges(x)[..], decoded.edges(y)[..]);
        }
        assert_eq!(
            decoded.node(decoded.node_at(2).unwrap()).attributes.value("example"),
            Some(&AttrValue::Int(1))
        );
    }

    #[test]
    fn test_decode_named_edge() {
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b"]);
        graph.add_named_edge(
            nodes[0],
            nodes[1],
            Direction::Both,
            Some("ab".to_string()),
            [("weight", 2.5)].into_iter().collect(),
        );
        let decoded = decode_json(encode(&graph).as_bytes()).unwrap();
        let edge = &decoded.edges(nodes[1])[0];
        assert_eq!(edge.name.as_deref(), Some("ab"));
        assert_eq!(edge.direction, Direction::Both);
        assert_eq!(edge.attributes.get::<f64>("weight").unwrap(), 2.5);
    }

    #[test]
    fn test_decode_unknown_direction_code() {
        let text = r#"{"nodes":[{"name":"a"}],"edges":[{"from_index":0,"direction":9,"to_index":0}]}"#;
        let graph = decode_json(text.as_bytes()).unwrap();
        assert_eq!(graph.name(), "");
        let a = graph.node_at(0).unwrap();
        assert_eq!(graph.edges(a)[0].direction, Direction::Unknown);
    }

    #[test]
    fn test_decode_wide_direction_codes() {
        for code in [300, -1] {
            let text = format!(
                r#"{{"nodes":[{{"name":"a"}}],"edges":[{{"from_index":0,"direction":{code},"to_index":0}}]}}"#
            );
            let graph = decode_json(text.as_bytes()).unwrap();
            let a = graph.node_at(0).unwrap();
            assert_eq!(graph.edges(a)[0].direction, Direction::Unknown);
        }
    }

    #[test]
    fn test_decode_rejects_one_sided_edge() {
        let text = r#"{"nodes":[{"name":"a"},{"name":"b"}],"edges":[{"from_index":0,"direction":3,"to_index":1}]}"#;
        assert!(matches!(
            decode_json(text.as_bytes()),
            Err(JsonError::UnpairedRecord {
                from_index: 0,
                direction: Direction::Out,
                to_index: 1,
            })
        ));

        let text = r#"{"nodes":[{"name":"a"},{"name":"b"}],"edges":[
            {"from_index":0,"direction":3,"to_index":1},
            {"from_index":0,"direction":3,"to_index":1},
            {"from_index":1,"direction":2,"to_index":0}
        ]}"#;
        assert!(matches!(
            decode_json(text.as_bytes()),
            Err(JsonError::UnpairedRecord { .. })
        ));
    }

    #[test]
    fn test_roundtrip_self_loops_and_parallel_edges() {
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b"]);
        graph.add_edge(nodes[0], nodes[0]);
        graph.add_edge_with_direction(nodes[1], nodes[1], Direction::Both);
        graph.add_edge(nodes[0], nodes[1]);
        graph.add_named_edge(
            nodes[0],
            nodes[1],
            Direction::Out,
            None,
            [("weight", 1)].into_iter().collect(),
        );
        let decoded = decode_json(encode(&graph).as_bytes()).unwrap();
        assert_eq!(decoded.edges(nodes[0]).len(), 4);
        assert_eq!(decoded.edges(nodes[1]).len(), 3);
        assert!(decoded.has_path(nodes[0], nodes[1]));
    }

    #[test]
    fn test_decode_index_out_of_range() {
        let text = r#"{"nodes":[{"name":"a"}],"edges":[{"from_index":0,"direction":3,"to_index":1}]}"#;
        assert!(matches!(
            decode_json(text.as_bytes()),
            Err(JsonError::Graph(GraphError::IndexOutOfRange { index: 1, len: 1 }))
        ));
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            decode_json(&b"{\"nodes\": 3}"[..]),
            Err(JsonError::Serde(_))
        ));
    }
}
