//! Search results and their text form.

use std::fmt;
use std::io;

use crate::graph::NodeId;

/// One traversed connection, with copies of the node and way data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep<N, W> {
    pub from: NodeId,
    pub from_data: N,
    pub way: W,
    pub to: NodeId,
    pub to_data: N,
}

/// An ordered chain of connections and its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N, W> {
    start: NodeId,
    steps: Vec<PathStep<N, W>>,
    cost: u64,
}

impl<N, W> Path<N, W> {
    pub fn new(start: NodeId, steps: Vec<PathStep<N, W>>, cost: u64) -> Self {
        Self { start, steps, cost }
    }

    /// The node the path starts at.
    pub fn first(&self) -> NodeId {
        self.start
    }

    /// The node the path ends at; the start for an empty path.
    pub fn last(&self) -> NodeId {
        self.steps.last().map_or(self.start, |s| s.to)
    }

    pub fn steps(&self) -> &[PathStep<N, W>] {
        &self.steps
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Node ids in visiting order, start included.
    pub fn nodes(&self) -> Vec<NodeId> {
        std::iter::once(self.start)
            .chain(self.steps.iter().map(|s| s.to))
            .collect()
    }

    fn render(&self, f: &mut dyn fmt::Write, open: &str, arrow: &str) -> fmt::Result
    where
        N: fmt::Display,
        W: fmt::Display,
    {
        f.write_str(open)?;
        if let Some(first) = self.steps.first() {
            write!(f, "{}", first.from_data)?;
        }
        for step in &self.steps {
            write!(f, " {arrow} {} {arrow} {}", step.way, step.to_data)?;
        }
        f.write_str("]")
    }
}

/// `Path[a -> w -> b]`
impl<N: fmt::Display, W: fmt::Display> fmt::Display for Path<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, "Path[", "->")
    }
}

/// Writes a search result, including the absence of one.
pub trait PathWriter {
    fn write<N, W>(&self, path: Option<&Path<N, W>>, out: &mut dyn io::Write) -> io::Result<()>
    where
        N: fmt::Display,
        W: fmt::Display;
}

/// One line per path: `Path [a > w > b]`, or `null` when there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePathWriter;

impl PathWriter for SimplePathWriter {
    fn write<N, W>(&self, path: Option<&Path<N, W>>, out: &mut dyn io::Write) -> io::Result<()>
    where
        N: fmt::Display,
        W: fmt::Display,
    {
        let Some(path) = path else {
            out.write_all(b"null\n")?;
            return out.flush();
        };
        let mut line = String::new();
        path.render(&mut line, "Path [", ">")
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        line.push('\n');
        out.write_all(line.as_bytes())?;
        out.flush()
    }
}
