//! Example that reads a graph from a DOT or JSON file (or stdin) and prints
//! a structural analysis of it.
//!
//! Usage:
//!   cargo run --example analyze -- path/to/graph.dot
//!   cargo run --example analyze -- --format json path/to/graph.json
//!   cat path/to/graph.dot | cargo run --example analyze

use std::fs;
use std::io::{self, Read};
use std::process;

use clap::{Parser, ValueEnum};
use graphwalk::{Graph, dot::decode_dot, json::decode_json, tracing_support};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Dot,
    Json,
}

/// Read a graph and print its traversal order, bridges, cliques, cycles and
/// partition results.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path (use '-' or omit to read from stdin)
    input: Option<String>,

    /// Input format; guessed from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Label of the node to start the component analyses from
    #[arg(long)]
    root: Option<String>,

    /// Smallest clique size to report
    #[arg(long, default_value_t = 3)]
    min_clique: usize,

    /// Number of classes for the multipartite check
    #[arg(long, default_value_t = 2)]
    classes: usize,

    /// Print per-span timings to stderr when done
    #[arg(long)]
    timings: bool,
}

fn main() {
    let args = Args::parse();
    if args.timings {
        tracing_support::init_tracing();
    }

    let input = match args.input.as_deref() {
        Some("-") | None => read_stdin_or_exit(),
        Some(path) => read_file_or_exit(path),
    };
    let format = args.format.unwrap_or_else(|| match args.input.as_deref() {
        Some(path) if path.ends_with(".json") => Format::Json,
        _ => Format::Dot,
    });

    let graph = parse_or_exit(&input, format);
    print_analysis(&graph, &args);

    if args.timings {
        tracing_support::dump_span_timings();
    }
}

fn read_stdin_or_exit() -> String {
    let mut buffer = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut buffer) {
        eprintln!("Failed to read stdin: {err}");
        process::exit(1);
    }
    buffer
}

fn read_file_or_exit(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read '{path}': {err}");
            process::exit(1);
        }
    }
}

fn parse_or_exit(data: &str, format: Format) -> Graph {
    let parsed = match format {
        Format::Dot => decode_dot(data).map_err(|err| err.to_string()),
        Format::Json => decode_json(data.as_bytes()).map_err(|err| err.to_string()),
    };
    match parsed {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Invalid {format:?} input: {err}");
            process::exit(1);
        }
    }
}

fn print_analysis(graph: &Graph, args: &Args) {
    println!("Nodes: {}", graph.num_nodes());
    println!("Edge records: {}", graph.num_edge_records());

    let root = match args.root.as_deref() {
        Some(label) => match graph.nodes_labelled(label).next() {
            Some(root) => root,
            None => {
                eprintln!("No node labelled '{label}'");
                process::exit(1);
            }
        },
        None => match graph.node_ids().next() {
            Some(root) => root,
            None => return,
        },
    };

    let labels = |nodes: Vec<_>| {
        nodes
            .into_iter()
            .map(|node| graph.label(node))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("DFS: {}", labels(graph.dfs().collect()));
    println!("BFS: {}", labels(graph.bfs().collect()));

    let cyclic: Vec<_> = graph.node_ids().filter(|&n| graph.has_cycles(n)).collect();
    println!("Acyclic: {}", cyclic.is_empty());
    if !cyclic.is_empty() {
        println!("On a cycle: {}", labels(cyclic));
    }

    println!("\nComponent of '{}':", graph.label(root));
    let bridges = graph.find_bridges(root);
    println!("Bridges ({}):", bridges.len());
    for bridge in &bridges {
        println!("  {}", bridge.display(graph));
    }

    let cliques = graph.find_cliques(root, args.min_clique);
    println!("Cliques of {}+ nodes ({}):", args.min_clique, cliques.len());
    for clique in &cliques {
        println!("  {{{}}}", clique.display(graph));
    }

    println!(
        "\n{}-partite: {}",
        args.classes,
        graph.is_multipartite(args.classes)
    );
}
