//! Vertex welding by grid quantization.
//!
//! Raw triangle soup carries each corner position once per face; before
//! connectivity can be reconstructed, positions that denote the same vertex
//! must be mapped to one canonical index. Welding here is *grid-quantization
//! equality*, not nearest-neighbor clustering: each coordinate is
//! independently scaled and rounded to a grid of cell size `tolerance`, and
//! positions compare equal iff all three rounded coordinates match. Two
//! positions closer than `tolerance` that straddle a cell boundary are
//! therefore *not* merged. This blind spot is deliberate and part of the
//! contract; see the tests pinning the boundary behavior.

use std::collections::HashMap;

use nalgebra::Point3;

use crate::error::{Result, TopologyError};

/// Map each input position to its canonical index.
///
/// The canonical index of a position is the index of the first input
/// position occupying the same quantization cell, so an input free of
/// duplicates maps to the identity.
///
/// # Errors
///
/// Fails with [`TopologyError::InvalidParameter`] if `tolerance` is not
/// finite and positive.
pub fn weld_positions(positions: &[Point3<f64>], tolerance: f64) -> Result<Vec<usize>> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(TopologyError::invalid_param(
            "tolerance",
            tolerance,
            "must be finite and positive",
        ));
    }

    let exponent = (1.0 / tolerance).log10().ceil();
    let multiplier = 10f64.powi(exponent as i32);

    let mut cells: HashMap<(i64, i64, i64), usize> = HashMap::with_capacity(positions.len());
    let mut canonical = Vec::with_capacity(positions.len());

    for (i, p) in positions.iter().enumerate() {
        let key = (
            (p.x * multiplier).round() as i64,
            (p.y * multiplier).round() as i64,
            (p.z * multiplier).round() as i64,
        );
        canonical.push(*cells.entry(key).or_insert(i));
    }

    Ok(canonical)
}
