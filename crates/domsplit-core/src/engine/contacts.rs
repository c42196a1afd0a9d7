use crate::core::models::contact_map::ContactMap;
use crate::core::models::trace::CaTrace;
use nalgebra::Point3;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds the contact map of a CA trace.
#[instrument(skip_all, name = "contact_map_build", fields(residues = trace.len(), cutoff = cutoff))]
pub fn build_for_trace(trace: &CaTrace, cutoff: f64) -> ContactMap {
    build(trace.coordinates(), cutoff)
}

/// Builds the symmetric contact map of `coordinates` for a distance `cutoff`.
///
/// Two positions are in contact when the Euclidean distance between them is at most
/// `cutoff`. Only pairs `j < i` are evaluated; the mirrored entry is a copy.
pub fn build(coordinates: &[Point3<f64>], cutoff: f64) -> ContactMap {
    let n = coordinates.len();

    #[cfg(not(feature = "parallel"))]
    let iterator = 0..n;

    #[cfg(feature = "parallel")]
    let iterator = (0..n).into_par_iter();

    let lower: Vec<Vec<bool>> = iterator
        .map(|i| lower_row(coordinates, i, cutoff))
        .collect();

    let map = ContactMap::from_lower_triangle(lower);
    debug!(
        "Contact map built: {} residues, {} contacts.",
        map.size(),
        map.contact_count()
    );
    map
}

fn lower_row(coordinates: &[Point3<f64>], i: usize, cutoff: f64) -> Vec<bool> {
    let ci = &coordinates[i];
    coordinates[..i]
        .iter()
        .map(|cj| (ci - cj).norm_squared().sqrt() <= cutoff)
        .collect()
}
