//! Deterministic auto-arrangement for node graphs
//!
//! This crate computes 2D positions for the nodes of a directed graph the
//! way node editors auto-arrange their canvas: a bidirectional traversal
//! from a root groups nodes into depth columns, columns are placed side by
//! side, and disconnected components are stacked next to each other. It
//! works with any graph implementing petgraph's visitor traits.
//!
//! The layout is intentionally plain and fully deterministic. There is no
//! crossing minimization and no force relaxation; identical inputs always
//! produce identical positions, so a host can cheaply re-run the
//! arrangement on every graph change.
//!
//! # Example
//!
//! ```
//! use graph_arrange::{ColumnarLayout, LayoutEngine, Vec2};
//! use petgraph::graphmap::DiGraphMap;
//!
//! // Create a graph
//! let mut graph = DiGraphMap::new();
//! graph.add_edge(1, 2, ());
//! graph.add_edge(2, 3, ());
//!
//! // Create a layout engine
//! let engine = ColumnarLayout::new(Vec2::new(50.0, 50.0));
//!
//! // Provide node extents
//! let extents = |_node| Vec2::new(100.0, 50.0);
//!
//! // Use the LayoutEngine trait (whole graph, disconnected parts packed):
//! let positions = engine.layout(&graph, &extents);
//! assert_eq!(positions.len(), 3);
//!
//! // Or drive each step directly from a chosen root
//! let board = engine.compute_board(&graph, 1)?;
//! let positions = engine.compute_positions(&board, &extents, Vec2::zero());
//! assert!(positions.contains_key(&1));
//! # Ok::<(), graph_arrange::ColumnarLayoutError<i32>>(())
//! ```

mod apply;
mod engine;
mod extents;
mod geometry;

pub mod columnar;

// Re-export core types and traits
pub use apply::PositionSink;
pub use engine::LayoutEngine;
pub use extents::NodeExtents;
pub use geometry::{Orientation, Point, Vec2};

// Re-export petgraph visitor traits for graph abstraction
pub use petgraph::visit::{GraphBase, IntoNeighborsDirected, IntoNodeIdentifiers};
pub use petgraph::Direction;

// Re-export columnar layout types
pub use columnar::{Board, ColumnarLayout, ColumnarLayoutError};
