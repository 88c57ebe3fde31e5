//! Error types for weft.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`TopologyError`].
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors that can occur while constructing a halfedge topology graph.
#[derive(Error, Debug)]
pub enum TopologyError {
    /// No position data was supplied to the build.
    #[error("geometry has no position data")]
    MissingPositions,

    /// A directed edge is traversed by more than one face.
    ///
    /// The builder's edge reuse strategy pairs each undirected edge with at
    /// most one face per orientation; a second face requesting the same
    /// orientation cannot be represented and aborts the build.
    #[error("edge ({v0}, {v1}) is traversed by more than one face in the same orientation")]
    NonManifoldEdge {
        /// Canonical index of the edge's origin vertex.
        v0: usize,
        /// Canonical index of the edge's destination vertex.
        v1: usize,
    },

    /// A face references a position index outside the position buffer.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face's corners collapse to fewer than three distinct vertices
    /// after welding.
    #[error("face {face} is degenerate (corners are not pairwise distinct)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// The position buffer length is not a multiple of three.
    #[error("position buffer length {len} is not a multiple of 3")]
    InvalidPositionBuffer {
        /// The offending length.
        len: usize,
    },

    /// The index buffer length is not a multiple of three.
    #[error("index buffer length {len} is not a multiple of 3")]
    InvalidIndexBuffer {
        /// The offending length.
        len: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl TopologyError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        TopologyError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
