//! # Weft
//!
//! A halfedge topology graph built from raw triangle soup.
//!
//! Weft converts a flat list of 3D positions (optionally deduplicated
//! through an index buffer) into a halfedge connectivity structure: for
//! every oriented edge, its opposite-oriented twin, its successor and
//! predecessor around a face or boundary loop, and the face it bounds, if
//! any. Consistent adjacency is reconstructed from unordered, possibly
//! duplicated, possibly non-manifold input.
//!
//! ## Features
//!
//! - **Halfedge data structure**: O(1) adjacency queries with type-safe ids
//! - **Vertex welding**: grid-quantization deduplication of soup corners
//! - **Loop enumeration**: face loops and boundary loops partitioned under
//!   one traversal API
//! - **Robust topology**: isolated vertices and edges, multi-edges, and
//!   vertex fans are all representable
//!
//! ## Quick Start
//!
//! ```
//! use weft::prelude::*;
//! use nalgebra::Point3;
//!
//! // Two triangles sharing an edge, as raw soup (6 corners, 4 vertices)
//! let soup = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//!
//! let mut graph = HalfedgeGraph::new();
//! graph.build_from_geometry(&soup, None, &BuildOptions::default()).unwrap();
//!
//! assert_eq!(graph.num_vertices(), 4);
//! assert_eq!(graph.num_faces(), 2);
//!
//! // Enumerate the disjoint loops: two face loops and one boundary loop
//! for rep in graph.loops() {
//!     let sides = graph.loop_from(rep).count();
//!     println!("loop of {} halfedges, face: {:?}", sides, graph.face_of(rep));
//! }
//! ```
//!
//! ## Traversal
//!
//! The halfedge structure enables constant-time navigation between
//! adjacent elements:
//!
//! ```
//! use weft::prelude::*;
//! use nalgebra::Point3;
//!
//! # let positions = vec![
//! #     Point3::new(0.0, 0.0, 0.0),
//! #     Point3::new(1.0, 0.0, 0.0),
//! #     Point3::new(0.5, 1.0, 0.0),
//! # ];
//! # let faces = vec![[0, 1, 2]];
//! # let graph = build_from_triangles(&positions, &faces).unwrap();
//! for he in graph.halfedge_ids() {
//!     let twin = graph.twin(he);
//!     assert_eq!(graph.twin(twin), he);
//!     assert_eq!(graph.origin(he), graph.dest(twin));
//! }
//!
//! let f = FaceId::new(0);
//! let normal = graph.face_normal(f);
//! assert!(normal.z > 0.9);
//! assert!(graph.face_is_front(f, &Point3::new(0.5, 0.5, 1.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use weft::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, TopologyError};
    pub use crate::mesh::{
        build_from_buffer, build_from_triangles, BuildOptions, Face, FaceId, Halfedge,
        HalfedgeGraph, HalfedgeId, Vertex, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
