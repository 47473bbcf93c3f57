//! Graphviz DOT export
//!
//! Renders an extracted DAG as DOT text so Graphviz (or anything that speaks
//! DOT) can do the layout and drawing. Node and edge statements carry the
//! same `class` tags a styling layer keys off; delegated sub-machines become
//! `cluster` subgraphs under their invoke node.

use crate::dag::Dag;

use super::options::LayoutOptions;

/// Render a DAG as a Graphviz DOT document
pub fn to_dot(dag: &Dag, options: &LayoutOptions) -> String {
    let mut dot = String::from("digraph machine {\n");
    dot.push_str(&format!("  rankdir={};\n", options.rank_dir.as_dot()));
    dot.push_str(&format!(
        "  graph [margin=\"{},{}\", nodesep={}, ranksep={}];\n",
        inches(options.margin_x),
        inches(options.margin_y),
        inches(options.node_sep),
        inches(options.rank_sep),
    ));
    dot.push_str("  node [shape=box];\n\n");

    write_dag(&mut dot, dag, 1);

    dot.push_str("}\n");
    dot
}

fn write_dag(dot: &mut String, dag: &Dag, depth: usize) {
    let pad = "  ".repeat(depth);

    for node in &dag.nodes {
        dot.push_str(&format!(
            "{}{} [label=\"{}\", class=\"node--{}\"];\n",
            pad,
            node.id,
            escape(&node.label),
            node.kind.class()
        ));

        if let Some(delegate) = &node.delegate {
            dot.push_str(&format!("{}subgraph cluster_{} {{\n", pad, node.id));
            dot.push_str(&format!("{}  label=\"{}\";\n", pad, escape(&node.label)));
            write_dag(dot, delegate, depth + 1);
            dot.push_str(&format!("{}}}\n", pad));
        }
    }

    dot.push('\n');

    for edge in &dag.edges {
        match &edge.label {
            Some(label) => dot.push_str(&format!(
                "{}{} -> {} [label=\"{}\", class=\"edge--{}\"];\n",
                pad,
                edge.from,
                edge.to,
                escape(label),
                edge.kind.class()
            )),
            None => dot.push_str(&format!(
                "{}{} -> {} [class=\"edge--{}\"];\n",
                pad,
                edge.from,
                edge.to,
                edge.kind.class()
            )),
        }
    }
}

// DOT separations are in inches; options are pixels at 96dpi.
fn inches(px: u32) -> String {
    format!("{:.2}", f64::from(px) / 96.0)
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
