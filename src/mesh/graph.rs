//! Halfedge topology graph.
//!
//! This module provides the connectivity structure at the heart of the
//! library: a halfedge graph storing vertices, halfedges, and faces in
//! arenas, with full adjacency information for O(1) topology queries.
//!
//! # Structure
//!
//! - Each undirected edge is represented by two **halfedges** pointing in
//!   opposite directions; halfedges are always created in twin pairs and
//!   never exist singly
//! - Each halfedge knows its **twin**, its **next**/**prev** around the face
//!   or boundary loop it belongs to, its **origin** vertex, and its **face**
//! - Each vertex stores one outgoing halfedge (invalid if isolated)
//! - Each face stores one halfedge of its loop and its side count
//!
//! # Loops
//!
//! The `next` relation is a permutation of all halfedges at all times:
//! [`HalfedgeGraph::add_edge`] leaves a fresh twin pair wired as its own
//! two-halfedge cycle, and [`HalfedgeGraph::add_face`] re-splices the
//! displaced boundary links while closing the face cycle. Every halfedge
//! therefore belongs to exactly one loop, either a face loop or a boundary
//! loop, and [`HalfedgeGraph::loops`] partitions the graph into them.

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use super::index::{FaceId, HalfedgeId, VertexId};
use crate::error::{Result, TopologyError};

/// A vertex in the halfedge graph.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Identifier of this vertex; the canonical source index when the graph
    /// was built through the builder, the arena index otherwise.
    pub id: usize,

    /// The 3D position of this vertex.
    pub position: Point3<f64>,

    /// One outgoing halfedge from this vertex. Invalid for isolated vertices.
    pub halfedge: HalfedgeId,
}

impl Vertex {
    /// Create a new isolated vertex at the given position.
    pub fn new(id: usize, position: Point3<f64>) -> Self {
        Self {
            id,
            position,
            halfedge: HalfedgeId::invalid(),
        }
    }
}

/// A halfedge in the graph: an oriented edge from its origin vertex toward
/// the origin of its twin.
#[derive(Debug, Clone, Copy)]
pub struct Halfedge {
    /// The vertex this halfedge originates from.
    pub origin: VertexId,

    /// The opposite halfedge sharing the same undirected edge.
    pub twin: HalfedgeId,

    /// The next halfedge around the same face or boundary loop.
    pub next: HalfedgeId,

    /// The previous halfedge around the same face or boundary loop.
    pub prev: HalfedgeId,

    /// The face this halfedge bounds. Invalid for boundary halfedges.
    pub face: FaceId,
}

impl Halfedge {
    /// Check if this halfedge bounds no face.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        !self.face.is_valid()
    }
}

/// A face in the halfedge graph.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    /// Identifier of this face; the input face index when the graph was
    /// built through the builder.
    pub id: usize,

    /// One halfedge on the boundary of this face. The full loop is
    /// reachable via `next`.
    pub halfedge: HalfedgeId,

    /// Number of sides of this face.
    pub sides: usize,
}

/// A halfedge topology graph.
///
/// Owns three arenas of vertices, halfedges, and faces, and exposes the
/// primitive mutators ([`add_vertex`](Self::add_vertex),
/// [`add_edge`](Self::add_edge), [`add_face`](Self::add_face)) together
/// with the read-only traversal and query surface. Once built, the graph
/// is plain data with no interior mutability and is safe to traverse from
/// multiple threads.
#[derive(Debug, Clone, Default)]
pub struct HalfedgeGraph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) halfedges: Vec<Halfedge>,
    pub(crate) faces: Vec<Face>,
}

impl HalfedgeGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with capacity pre-allocated for the given number of
    /// triangles.
    pub fn with_capacity(num_triangles: usize) -> Self {
        // Closed mesh: HE = 3F; with boundary, slightly more.
        Self {
            vertices: Vec::with_capacity(num_triangles / 2 + 2),
            halfedges: Vec::with_capacity(num_triangles * 3 + num_triangles / 2),
            faces: Vec::with_capacity(num_triangles),
        }
    }

    /// Remove all vertices, halfedges, and faces, invalidating every
    /// previously returned id.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.halfedges.clear();
        self.faces.clear();
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of halfedges.
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get a vertex by id.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    #[inline]
    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.index()]
    }

    /// Get a halfedge by id.
    #[inline]
    pub fn halfedge(&self, id: HalfedgeId) -> &Halfedge {
        &self.halfedges[id.index()]
    }

    #[inline]
    fn halfedge_mut(&mut self, id: HalfedgeId) -> &mut Halfedge {
        &mut self.halfedges[id.index()]
    }

    /// Get a face by id.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.vertex(v).position
    }

    // ==================== Topology Queries ====================

    /// Get the twin (opposite) halfedge.
    #[inline]
    pub fn twin(&self, he: HalfedgeId) -> HalfedgeId {
        self.halfedge(he).twin
    }

    /// Get the next halfedge around the face or boundary loop.
    #[inline]
    pub fn next(&self, he: HalfedgeId) -> HalfedgeId {
        self.halfedge(he).next
    }

    /// Get the previous halfedge around the face or boundary loop.
    #[inline]
    pub fn prev(&self, he: HalfedgeId) -> HalfedgeId {
        self.halfedge(he).prev
    }

    /// Get the origin vertex of a halfedge.
    #[inline]
    pub fn origin(&self, he: HalfedgeId) -> VertexId {
        self.halfedge(he).origin
    }

    /// Get the destination vertex of a halfedge.
    #[inline]
    pub fn dest(&self, he: HalfedgeId) -> VertexId {
        self.origin(self.twin(he))
    }

    /// Get the face of a halfedge. Invalid for boundary halfedges.
    #[inline]
    pub fn face_of(&self, he: HalfedgeId) -> FaceId {
        self.halfedge(he).face
    }

    /// Check if a halfedge bounds no face.
    #[inline]
    pub fn is_boundary_halfedge(&self, he: HalfedgeId) -> bool {
        self.halfedge(he).is_boundary()
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex ids.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterate over all vertices with their ids.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    /// Iterate over all halfedge ids.
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfedgeId> + '_ {
        (0..self.halfedges.len()).map(HalfedgeId::new)
    }

    /// Iterate over all halfedges with their ids.
    pub fn halfedges(&self) -> impl Iterator<Item = (HalfedgeId, &Halfedge)> + '_ {
        self.halfedges
            .iter()
            .enumerate()
            .map(|(i, he)| (HalfedgeId::new(i), he))
    }

    /// Iterate over all face ids.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    /// Iterate over all faces with their ids.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> + '_ {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, f)| (FaceId::new(i), f))
    }

    /// Iterate over the loop containing a halfedge, starting (and ending)
    /// at `start`.
    ///
    /// The iterator follows `next` and yields `start` first. It is finite
    /// on any graph satisfying the loop-closure invariant, does not mutate
    /// the graph, and may run concurrently with other read-only traversals.
    pub fn loop_from(&self, start: HalfedgeId) -> LoopIter<'_> {
        LoopIter::new(self, start)
    }

    /// Iterate over the halfedges bounding a face.
    pub fn face_halfedges(&self, f: FaceId) -> LoopIter<'_> {
        self.loop_from(self.face(f).halfedge)
    }

    /// Iterate over the vertices of a face, in loop order.
    pub fn face_vertices(&self, f: FaceId) -> impl Iterator<Item = VertexId> + '_ {
        self.face_halfedges(f).map(|he| self.origin(he))
    }

    /// Partition all halfedges into their disjoint cycles under `next`,
    /// returning one representative halfedge per cycle.
    ///
    /// Face loops and boundary loops are reported alike; every halfedge
    /// belongs to the loop of exactly one returned representative.
    pub fn loops(&self) -> Vec<HalfedgeId> {
        let mut visited = vec![false; self.halfedges.len()];
        let mut representatives = Vec::new();

        for he in self.halfedge_ids() {
            if visited[he.index()] {
                continue;
            }
            representatives.push(he);
            for h in self.loop_from(he) {
                visited[h.index()] = true;
            }
        }

        representatives
    }

    /// Like [`loops`](Self::loops), but reporting only boundary loops.
    pub fn boundary_loops(&self) -> Vec<HalfedgeId> {
        self.loops()
            .into_iter()
            .filter(|&he| self.is_boundary_halfedge(he))
            .collect()
    }

    // ==================== Geometry ====================

    /// Number of sides of a face.
    #[inline]
    pub fn face_sides(&self, f: FaceId) -> usize {
        self.face(f).sides
    }

    /// Compute the normal of a face from the first three vertices of its
    /// loop.
    pub fn face_normal(&self, f: FaceId) -> Vector3<f64> {
        let h0 = self.face(f).halfedge;
        let h1 = self.next(h0);
        let h2 = self.next(h1);
        let p0 = self.position(self.origin(h0));
        let p1 = self.position(self.origin(h1));
        let p2 = self.position(self.origin(h2));
        (p1 - p0).cross(&(p2 - p0)).normalize()
    }

    /// Test whether a point lies on the front side of a face's plane.
    ///
    /// The front side is the halfspace the face normal points into; a point
    /// exactly on the plane is not in front.
    pub fn face_is_front(&self, f: FaceId, point: &Point3<f64>) -> bool {
        let normal = self.face_normal(f);
        let p0 = self.position(self.origin(self.face(f).halfedge));
        (point - p0).dot(&normal) > 0.0
    }

    /// Compute the centroid of a face (mean of its loop vertices).
    pub fn face_centroid(&self, f: FaceId) -> Point3<f64> {
        let mut sum = Vector3::zeros();
        for v in self.face_vertices(f) {
            sum += self.position(v).coords;
        }
        Point3::from(sum / self.face_sides(f) as f64)
    }

    /// Compute the area of a face via the cross-product sum over its loop.
    pub fn face_area(&self, f: FaceId) -> f64 {
        let mut sum = Vector3::zeros();
        for he in self.face_halfedges(f) {
            let p = self.position(self.origin(he)).coords;
            let q = self.position(self.dest(he)).coords;
            sum += p.cross(&q);
        }
        0.5 * sum.norm()
    }

    /// Compute the normals of all faces in parallel.
    pub fn face_normals(&self) -> Vec<Vector3<f64>> {
        (0..self.faces.len())
            .into_par_iter()
            .map(|i| self.face_normal(FaceId::new(i)))
            .collect()
    }

    // ==================== Primitive Operations ====================

    /// Add a new isolated vertex and return its id.
    ///
    /// The vertex's identifier is its arena index.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> VertexId {
        let id = self.vertices.len();
        self.add_vertex_with_id(position, id)
    }

    /// Add a new isolated vertex carrying an externally meaningful
    /// identifier (the builder uses the canonical source index).
    pub fn add_vertex_with_id(&mut self, position: Point3<f64>, id: usize) -> VertexId {
        let v = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(id, position));
        v
    }

    /// Add a twin pair of halfedges between two vertices, returning the
    /// halfedge originating at `v1`.
    ///
    /// The pair is wired as its own two-halfedge loop, the canonical state
    /// of an isolated edge; [`add_face`](Self::add_face) re-splices these
    /// links when a face consumes one of the halfedges. Each vertex's
    /// outgoing halfedge is assigned if not already set.
    ///
    /// Calling this repeatedly for the same vertex pair creates distinct
    /// pairs each time; deduplication across faces is the builder's job.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> HalfedgeId {
        let h1 = HalfedgeId::new(self.halfedges.len());
        let h2 = HalfedgeId::new(self.halfedges.len() + 1);

        self.halfedges.push(Halfedge {
            origin: v1,
            twin: h2,
            next: h2,
            prev: h2,
            face: FaceId::invalid(),
        });
        self.halfedges.push(Halfedge {
            origin: v2,
            twin: h1,
            next: h1,
            prev: h1,
            face: FaceId::invalid(),
        });

        if !self.vertex(v1).halfedge.is_valid() {
            self.vertex_mut(v1).halfedge = h1;
        }
        if !self.vertex(v2).halfedge.is_valid() {
            self.vertex_mut(v2).halfedge = h2;
        }

        h1
    }

    /// Close an ordered cyclic sequence of halfedges into a face.
    ///
    /// The halfedges must chain tail to head: the destination of
    /// `boundary[i]` is the origin of `boundary[(i + 1) % n]`. The loop is
    /// spliced closed under `next`/`prev`, a face is created, and every
    /// halfedge in the loop is bound to it. Boundary halfedges displaced by
    /// the splice are re-linked so that every other loop stays closed.
    ///
    /// # Errors
    ///
    /// Fails with [`TopologyError::InvalidParameter`] for fewer than three
    /// sides, and with [`TopologyError::NonManifoldEdge`] if any halfedge
    /// already bounds a face; in both cases the graph is unchanged.
    pub fn add_face(&mut self, boundary: &[HalfedgeId]) -> Result<FaceId> {
        if boundary.len() < 3 {
            return Err(TopologyError::invalid_param(
                "sides",
                boundary.len(),
                "a face needs at least 3 sides",
            ));
        }
        for &he in boundary {
            if self.face_of(he).is_valid() {
                return Err(TopologyError::NonManifoldEdge {
                    v0: self.vertex(self.origin(he)).id,
                    v1: self.vertex(self.dest(he)).id,
                });
            }
        }

        let n = boundary.len();
        for i in 0..n {
            let a = boundary[i];
            let b = boundary[(i + 1) % n];
            debug_assert_eq!(
                self.dest(a),
                self.origin(b),
                "face sides must chain tail to head"
            );

            let a_next = self.next(a);
            if a_next == b {
                continue;
            }
            // Re-link the displaced boundary successors before overwriting,
            // keeping `next` a permutation of all halfedges.
            let b_prev = self.prev(b);
            self.halfedge_mut(b_prev).next = a_next;
            self.halfedge_mut(a_next).prev = b_prev;
            self.halfedge_mut(a).next = b;
            self.halfedge_mut(b).prev = a;
        }

        let f = FaceId::new(self.faces.len());
        self.faces.push(Face {
            id: f.index(),
            halfedge: boundary[0],
            sides: n,
        });
        for &he in boundary {
            self.halfedge_mut(he).face = f;
        }

        Ok(f)
    }

    // ==================== Validation ====================

    /// Check that all connectivity invariants hold.
    ///
    /// Verifies twin symmetry, next/prev inversion, loop closure, face-loop
    /// uniformity (every halfedge in a face loop shares the face, and the
    /// loop length matches the face's side count), and that each vertex's
    /// outgoing halfedge originates at that vertex.
    pub fn is_valid(&self) -> bool {
        for (vid, v) in self.vertices() {
            if v.halfedge.is_valid() && self.origin(v.halfedge) != vid {
                return false;
            }
        }

        for (heid, he) in self.halfedges() {
            if !he.twin.is_valid() || he.twin == heid || self.twin(he.twin) != heid {
                return false;
            }
            if !he.next.is_valid() || self.prev(he.next) != heid {
                return false;
            }
            if !he.prev.is_valid() || self.next(he.prev) != heid {
                return false;
            }
        }

        // Loop closure and face-loop uniformity. The step bound guards
        // against a broken `next` permutation sending us on a long walk.
        for heid in self.halfedge_ids() {
            let face = self.face_of(heid);
            let mut current = heid;
            let mut steps = 0usize;
            loop {
                if self.face_of(current) != face {
                    return false;
                }
                current = self.next(current);
                steps += 1;
                if current == heid {
                    break;
                }
                if steps > self.num_halfedges() {
                    return false;
                }
            }
            if face.is_valid() && self.face(face).sides != steps {
                return false;
            }
        }

        for (fid, f) in self.faces() {
            if !f.halfedge.is_valid() || self.face_of(f.halfedge) != fid {
                return false;
            }
        }

        true
    }
}

/// Iterator over the halfedges of one loop, following `next` from a
/// starting halfedge back to itself.
pub struct LoopIter<'a> {
    graph: &'a HalfedgeGraph,
    start: HalfedgeId,
    current: HalfedgeId,
    done: bool,
}

impl<'a> LoopIter<'a> {
    fn new(graph: &'a HalfedgeGraph, start: HalfedgeId) -> Self {
        Self {
            graph,
            start,
            current: start,
            done: !start.is_valid(),
        }
    }
}

impl<'a> Iterator for LoopIter<'a> {
    type Item = HalfedgeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.current = self.graph.next(self.current);

        if self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = HalfedgeGraph::new();
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_halfedges(), 0);
        assert_eq!(graph.num_faces(), 0);
        assert!(graph.is_valid());
        assert!(graph.loops().is_empty());
    }

    #[test]
    fn test_add_vertex() {
        let mut graph = HalfedgeGraph::new();
        let v0 = graph.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let v1 = graph.add_vertex(Point3::new(1.0, 0.0, 0.0));

        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(v0.index(), 0);
        assert_eq!(v1.index(), 1);
        assert!(!graph.vertex(v0).halfedge.is_valid());
        assert!(graph.is_valid());
    }

    #[test]
    fn test_isolated_edge() {
        let mut graph = HalfedgeGraph::new();
        let a = graph.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = graph.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let h = graph.add_edge(a, b);
        let t = graph.twin(h);

        assert_eq!(graph.num_halfedges(), 2);
        assert_eq!(graph.twin(t), h);
        assert_ne!(t, h);
        assert_eq!(graph.origin(h), a);
        assert_eq!(graph.dest(h), b);
        assert!(graph.is_boundary_halfedge(h));
        assert!(graph.is_boundary_halfedge(t));

        // The fresh pair is its own two-halfedge loop
        let loop_hes: Vec<_> = graph.loop_from(h).collect();
        assert_eq!(loop_hes, vec![h, t]);

        // Outgoing halfedges were assigned lazily
        assert_eq!(graph.vertex(a).halfedge, h);
        assert_eq!(graph.vertex(b).halfedge, t);

        assert!(graph.is_valid());
    }

    #[test]
    fn test_multi_edge() {
        let mut graph = HalfedgeGraph::new();
        let a = graph.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = graph.add_vertex(Point3::new(1.0, 0.0, 0.0));

        // Same ordered pair twice: distinct pairs, not a reuse
        let h0 = graph.add_edge(a, b);
        let h1 = graph.add_edge(a, b);

        assert_ne!(h0, h1);
        assert_eq!(graph.num_halfedges(), 4);
        assert_eq!(graph.loops().len(), 2);
        assert!(graph.is_valid());
    }

    fn triangle_graph() -> (HalfedgeGraph, [HalfedgeId; 3], FaceId) {
        let mut graph = HalfedgeGraph::new();
        let a = graph.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = graph.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = graph.add_vertex(Point3::new(0.0, 1.0, 0.0));

        let h0 = graph.add_edge(a, b);
        let h1 = graph.add_edge(b, c);
        let h2 = graph.add_edge(c, a);
        let f = graph.add_face(&[h0, h1, h2]).unwrap();
        (graph, [h0, h1, h2], f)
    }

    #[test]
    fn test_single_face() {
        let (graph, [h0, h1, h2], f) = triangle_graph();

        assert_eq!(graph.num_faces(), 1);
        assert_eq!(graph.num_halfedges(), 6);
        assert!(graph.is_valid());

        // Face loop is closed over exactly the three sides
        assert_eq!(graph.next(h0), h1);
        assert_eq!(graph.next(h1), h2);
        assert_eq!(graph.next(h2), h0);
        assert_eq!(graph.face_sides(f), 3);
        for &he in &[h0, h1, h2] {
            assert_eq!(graph.face_of(he), f);
        }

        // The three twins form the boundary loop
        let boundary = graph.boundary_loops();
        assert_eq!(boundary.len(), 1);
        assert_eq!(graph.loop_from(boundary[0]).count(), 3);
    }

    #[test]
    fn test_face_already_bound() {
        let (mut graph, [h0, h1, h2], _) = triangle_graph();

        let err = graph.add_face(&[h0, h1, h2]).unwrap_err();
        assert!(matches!(err, TopologyError::NonManifoldEdge { .. }));
        // Rejection before any mutation
        assert_eq!(graph.num_faces(), 1);
        assert!(graph.is_valid());
    }

    #[test]
    fn test_face_too_few_sides() {
        let mut graph = HalfedgeGraph::new();
        let a = graph.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = graph.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let h = graph.add_edge(a, b);
        let t = graph.twin(h);

        let err = graph.add_face(&[h, t]).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidParameter { .. }));
        assert_eq!(graph.num_faces(), 0);
        assert!(graph.is_valid());
    }

    #[test]
    fn test_loops_partition() {
        let (graph, _, _) = triangle_graph();

        let reps = graph.loops();
        assert_eq!(reps.len(), 2); // one face loop, one boundary loop

        let mut seen = vec![0usize; graph.num_halfedges()];
        for rep in reps {
            for he in graph.loop_from(rep) {
                seen[he.index()] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_face_geometry() {
        let (graph, _, f) = triangle_graph();

        let normal = graph.face_normal(f);
        assert!((normal - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-12);

        assert!((graph.face_area(f) - 0.5).abs() < 1e-12);

        let centroid = graph.face_centroid(f);
        assert!((centroid - Point3::new(1.0 / 3.0, 1.0 / 3.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_face_is_front() {
        let (graph, _, f) = triangle_graph();

        // CCW in the z = 0 plane: normal points toward +z
        assert!(graph.face_is_front(f, &Point3::new(0.2, 0.2, 1.0)));
        assert!(!graph.face_is_front(f, &Point3::new(0.2, 0.2, -1.0)));
        // On the plane is not in front
        assert!(!graph.face_is_front(f, &Point3::new(5.0, 5.0, 0.0)));
    }

    #[test]
    fn test_face_normals_parallel() {
        let (graph, _, f) = triangle_graph();
        let normals = graph.face_normals();
        assert_eq!(normals.len(), 1);
        assert!((normals[0] - graph.face_normal(f)).norm() < 1e-15);
    }

    #[test]
    fn test_clear() {
        let (mut graph, _, _) = triangle_graph();
        graph.clear();

        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_halfedges(), 0);
        assert_eq!(graph.num_faces(), 0);
        assert!(graph.is_valid());
    }
}
