//! Core topology data structures.
//!
//! This module provides the halfedge topology graph and the machinery that
//! constructs it from raw triangle geometry.
//!
//! # Overview
//!
//! The primary type is [`HalfedgeGraph`], a halfedge (doubly-connected edge
//! list) connectivity structure. Unlike manifold-only halfedge meshes it
//! tolerates isolated vertices, isolated edges, multiple edges between the
//! same vertex pair, and polygon fans meeting at a single vertex: every
//! halfedge always belongs to exactly one closed loop, face or boundary.
//!
//! # Index Types
//!
//! Graph entities are identified by type-safe id handles:
//! - [`VertexId`] - Identifies a vertex
//! - [`HalfedgeId`] - Identifies a halfedge
//! - [`FaceId`] - Identifies a face
//!
//! # Construction
//!
//! Graphs are built from positions plus an optional index buffer
//! ([`HalfedgeGraph::build_from_geometry`]), from a flat coordinate buffer
//! ([`build_from_buffer`]), or from a face-vertex list
//! ([`build_from_triangles`]):
//!
//! ```
//! use weft::mesh::build_from_triangles;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let graph = build_from_triangles(&positions, &faces).unwrap();
//! assert_eq!(graph.num_halfedges(), 6);
//! ```

mod builder;
mod graph;
mod index;
mod merge;

pub use builder::{build_from_buffer, build_from_triangles, BuildOptions};
pub use graph::{Face, Halfedge, HalfedgeGraph, LoopIter, Vertex};
pub use index::{FaceId, HalfedgeId, VertexId};
pub use merge::weld_positions;
