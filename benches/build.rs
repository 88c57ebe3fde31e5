//! Benchmarks for graph construction and traversal.

use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Point3;
use weft::prelude::*;

/// Grid of n x n quads split into triangles, as unindexed soup so the
/// build exercises vertex welding.
fn grid_soup(n: usize) -> Vec<Point3<f64>> {
    let corner = |i: usize, j: usize| Point3::new(i as f64, j as f64, 0.0);

    let mut soup = Vec::with_capacity(n * n * 6);
    for j in 0..n {
        for i in 0..n {
            soup.push(corner(i, j));
            soup.push(corner(i + 1, j));
            soup.push(corner(i + 1, j + 1));

            soup.push(corner(i, j));
            soup.push(corner(i + 1, j + 1));
            soup.push(corner(i, j + 1));
        }
    }
    soup
}

fn grid_graph(n: usize) -> HalfedgeGraph {
    let soup = grid_soup(n);
    let mut graph = HalfedgeGraph::new();
    graph
        .build_from_geometry(&soup, None, &BuildOptions::default())
        .unwrap();
    graph
}

fn bench_build(c: &mut Criterion) {
    let soup = grid_soup(30);
    c.bench_function("build_grid_30x30_soup", |b| {
        let mut graph = HalfedgeGraph::new();
        b.iter(|| {
            graph
                .build_from_geometry(&soup, None, &BuildOptions::default())
                .unwrap();
            graph.num_halfedges()
        });
    });
}

fn bench_loops(c: &mut Criterion) {
    let graph = grid_graph(30);
    c.bench_function("loops_grid_30x30", |b| {
        b.iter(|| graph.loops().len());
    });
}

fn bench_face_normals(c: &mut Criterion) {
    let graph = grid_graph(30);
    c.bench_function("face_normals_grid_30x30", |b| {
        b.iter(|| graph.face_normals().len());
    });
}

criterion_group!(benches, bench_build, bench_loops, bench_face_normals);
criterion_main!(benches);
