//! Text rendering of a whole graph as an adjacency matrix.

use std::fmt::Display;
use std::io;

use crate::graph::Graph;

/// Write `graph` as a bracketed adjacency matrix.
///
/// ```text
/// Graph (2 Nodes):
///    a b
///    ___
/// a / |5\
/// b \ | /
///    ‾‾‾
/// ```
///
/// Each column is as wide as its node label; several ways between the same
/// pair of nodes are joined with `,`.
pub fn write_adjacency_matrix<N, W>(graph: &dyn Graph<N, W>, out: &mut dyn io::Write) -> io::Result<()>
where
    N: Display,
    W: Display,
{
    let ids = graph.node_ids();
    let labels: Vec<String> = ids
        .iter()
        .map(|id| graph.node(*id).map(ToString::to_string).unwrap_or_default())
        .collect();
    let sizes: Vec<usize> = labels.iter().map(|l| l.chars().count()).collect();
    let max = sizes.iter().map(|s| s + 1).max().unwrap_or(0);
    let last = ids.len().saturating_sub(1);

    writeln!(out, "Graph ({} Nodes):", ids.len())?;

    let mut header = " ".repeat(max);
    for label in &labels {
        header.push(' ');
        header.push_str(label);
    }
    writeln!(out, "{header}")?;
    writeln!(out, "{}", border(max, &sizes, '_'))?;

    for (row, id) in ids.iter().enumerate() {
        let mut cells = vec![String::new(); ids.len()];
        for conn in graph.connections_from(*id) {
            let Some(col) = ids.iter().position(|other| *other == conn.to) else {
                continue;
            };
            if !cells[col].is_empty() {
                cells[col].push(',');
            }
            cells[col].push_str(&conn.way.to_string());
        }

        let mut line = format!("{:<max$}", labels[row]);
        line.push(match row {
            0 => '/',
            r if r == last => '\\',
            _ => '|',
        });
        for (col, cell) in cells.iter().enumerate() {
            line.push_str(&format!("{cell:<width$}", width = sizes[col]));
            line.push(match (col == last, row) {
                (true, 0) => '\\',
                (true, r) if r == last => '/',
                _ => '|',
            });
        }
        writeln!(out, "{line}")?;
    }

    writeln!(out, "{}", border(max, &sizes, '‾'))?;
    out.flush()
}

fn border(indent: usize, sizes: &[usize], fill: char) -> String {
    let mut line = " ".repeat(indent + 1);
    for (i, size) in sizes.iter().enumerate() {
        line.extend(std::iter::repeat(fill).take(*size));
        line.push(if i + 1 == sizes.len() { ' ' } else { fill });
    }
    line
}
