//! Graph construction from raw geometry.
//!
//! This module turns a triangle list into a complete halfedge topology
//! graph in a single deterministic pass. Per triangle side, the builder
//! resolves canonical vertex indices through the welding table, then
//! consults a directed-edge reuse map: the first traversal of an edge
//! allocates a twin pair and registers both orientations, so the face
//! arriving from the opposite side reuses the twin instead of allocating a
//! second pair. Once three sides are resolved, the face is closed with
//! [`HalfedgeGraph::add_face`].
//!
//! Both build-time maps are local to the build call and discarded when it
//! returns; they never leak into the graph's read-only surface.

use std::collections::HashMap;

use nalgebra::Point3;

use super::graph::HalfedgeGraph;
use super::index::{HalfedgeId, VertexId};
use super::merge::weld_positions;
use crate::error::{Result, TopologyError};

/// Options controlling graph construction.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Quantization cell size for vertex welding (default: `1e-10`).
    pub tolerance: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { tolerance: 1e-10 }
    }
}

impl BuildOptions {
    /// Create options with the specified welding tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl HalfedgeGraph {
    /// Build the graph from positions and an optional index buffer,
    /// replacing any previous contents.
    ///
    /// Without an index buffer, positions are taken as consecutive triples,
    /// one per triangle; near-duplicate corners are welded per
    /// [`weld_positions`]. Faces are tagged with their input index.
    ///
    /// # Errors
    ///
    /// Fails if no positions are supplied, if a buffer length is not a
    /// multiple of three, if an index is out of range, if a triangle's
    /// corners collapse under welding, or if a directed edge is traversed
    /// by more than one face ([`TopologyError::NonManifoldEdge`]). On any
    /// failure the graph is left cleared, never partially wired.
    ///
    /// # Example
    ///
    /// ```
    /// use weft::prelude::*;
    /// use nalgebra::Point3;
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    ///     Point3::new(1.0, 1.0, 0.0),
    /// ];
    /// let indices = vec![0, 1, 2, 1, 3, 2];
    ///
    /// let mut graph = HalfedgeGraph::new();
    /// graph
    ///     .build_from_geometry(&positions, Some(&indices), &BuildOptions::default())
    ///     .unwrap();
    /// assert_eq!(graph.num_vertices(), 4);
    /// assert_eq!(graph.num_faces(), 2);
    /// ```
    pub fn build_from_geometry(
        &mut self,
        positions: &[Point3<f64>],
        indices: Option<&[usize]>,
        options: &BuildOptions,
    ) -> Result<()> {
        self.clear();
        match self.build_inner(positions, indices, options) {
            Ok(()) => Ok(()),
            Err(err) => {
                // No partially wired graph survives a failed build
                self.clear();
                Err(err)
            }
        }
    }

    fn build_inner(
        &mut self,
        positions: &[Point3<f64>],
        indices: Option<&[usize]>,
        options: &BuildOptions,
    ) -> Result<()> {
        if positions.is_empty() {
            return Err(TopologyError::MissingPositions);
        }

        let num_faces = match indices {
            Some(indices) => {
                if indices.len() % 3 != 0 {
                    return Err(TopologyError::InvalidIndexBuffer {
                        len: indices.len(),
                    });
                }
                for (face, triple) in indices.chunks_exact(3).enumerate() {
                    for &vertex in triple {
                        if vertex >= positions.len() {
                            return Err(TopologyError::InvalidVertexIndex { face, vertex });
                        }
                    }
                }
                indices.len() / 3
            }
            None => {
                if positions.len() % 3 != 0 {
                    return Err(TopologyError::InvalidPositionBuffer {
                        len: positions.len(),
                    });
                }
                positions.len() / 3
            }
        };

        let canonical = weld_positions(positions, options.tolerance)?;

        self.halfedges.reserve(num_faces * 3 + num_faces / 2);
        self.faces.reserve(num_faces);

        // Both maps live only for this build call.
        let mut vertex_of: HashMap<usize, VertexId> = HashMap::new();
        let mut edge_map: HashMap<(usize, usize), HalfedgeId> = HashMap::new();

        for face in 0..num_faces {
            let corner = |k: usize| match indices {
                Some(indices) => canonical[indices[face * 3 + k]],
                None => canonical[face * 3 + k],
            };
            let corners = [corner(0), corner(1), corner(2)];

            if corners[0] == corners[1] || corners[1] == corners[2] || corners[0] == corners[2] {
                return Err(TopologyError::DegenerateFace { face });
            }

            let mut sides = [HalfedgeId::invalid(); 3];
            for k in 0..3 {
                let (from, to) = (corners[k], corners[(k + 1) % 3]);
                sides[k] = match edge_map.get(&(from, to)) {
                    Some(&he) => he,
                    None => {
                        let v1 = self.materialize_vertex(&mut vertex_of, positions, from);
                        let v2 = self.materialize_vertex(&mut vertex_of, positions, to);
                        let he = self.add_edge(v1, v2);
                        edge_map.insert((from, to), he);
                        edge_map.insert((to, from), self.twin(he));
                        he
                    }
                };
            }

            self.add_face(&sides)?;
        }

        Ok(())
    }

    /// First reference to a canonical index creates the vertex; later
    /// references reuse it.
    fn materialize_vertex(
        &mut self,
        vertex_of: &mut HashMap<usize, VertexId>,
        positions: &[Point3<f64>],
        canonical: usize,
    ) -> VertexId {
        if let Some(&v) = vertex_of.get(&canonical) {
            return v;
        }
        let v = self.add_vertex_with_id(positions[canonical], canonical);
        vertex_of.insert(canonical, v);
        v
    }
}

/// Build a graph from a flat coordinate buffer (three numbers per vertex)
/// and an optional index buffer.
///
/// Adapter for callers holding raw attribute arrays; see
/// [`HalfedgeGraph::build_from_geometry`] for the semantics.
pub fn build_from_buffer(
    buffer: &[f64],
    indices: Option<&[usize]>,
    options: &BuildOptions,
) -> Result<HalfedgeGraph> {
    if buffer.is_empty() {
        return Err(TopologyError::MissingPositions);
    }
    if buffer.len() % 3 != 0 {
        return Err(TopologyError::InvalidPositionBuffer { len: buffer.len() });
    }

    let positions: Vec<Point3<f64>> = buffer
        .chunks_exact(3)
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect();

    let mut graph = HalfedgeGraph::new();
    graph.build_from_geometry(&positions, indices, options)?;
    Ok(graph)
}

/// Build a graph from vertex positions and triangle faces with default
/// options.
///
/// # Example
///
/// ```
/// use weft::prelude::*;
/// use nalgebra::Point3;
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![[0, 1, 2]];
///
/// let graph = build_from_triangles(&positions, &faces).unwrap();
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_faces(), 1);
/// ```
pub fn build_from_triangles(
    positions: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<HalfedgeGraph> {
    let indices: Vec<usize> = faces.iter().flatten().copied().collect();
    let mut graph = HalfedgeGraph::new();
    graph.build_from_geometry(positions, Some(&indices), &BuildOptions::default())?;
    Ok(graph)
}
