//! A directed multigraph with arbitrary node and way (edge) data.
//!
//! Two interchangeable backends implement [`Graph`]: [`LinkedGraph`]
//! (adjacency lists) and [`MatrixGraph`] (adjacency matrix). Searches run
//! through the [`Algorithm`] trait; [`Dijkstra`] finds the cheapest
//! [`Path`] between two nodes. Paths and whole graphs render as text via
//! [`SimplePathWriter`] and [`write_adjacency_matrix`].

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod linked;
pub mod matrix;
pub mod path;
pub mod render;

pub use algorithm::{Algorithm, Dijkstra};
pub use error::GraphError;
pub use graph::{Connection, EdgeId, Graph, NodeId};
pub use linked::LinkedGraph;
pub use matrix::MatrixGraph;
pub use path::{Path, PathStep, PathWriter, SimplePathWriter};
pub use render::write_adjacency_matrix;
