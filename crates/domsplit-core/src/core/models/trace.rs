use super::ModelError;
use nalgebra::Point3;

/// An ordered alpha-carbon trace of a single chain.
///
/// Positions are 0-based and contiguous. The native residue numbers taken from the
/// structure file are kept index-aligned with the coordinates and are only used to
/// label output; they play no role in the scan itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CaTrace {
    chain_id: char,
    coordinates: Vec<Point3<f64>>,
    residue_numbers: Vec<isize>,
}

impl CaTrace {
    /// Creates a trace from index-aligned coordinates and residue numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LengthMismatch`] if the two sequences differ in length and
    /// [`ModelError::NonFiniteCoordinate`] if any coordinate component is NaN or infinite.
    pub fn new(
        chain_id: char,
        coordinates: Vec<Point3<f64>>,
        residue_numbers: Vec<isize>,
    ) -> Result<Self, ModelError> {
        if coordinates.len() != residue_numbers.len() {
            return Err(ModelError::LengthMismatch {
                coordinates: coordinates.len(),
                residue_numbers: residue_numbers.len(),
            });
        }
        if let Some(index) = coordinates
            .iter()
            .position(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(ModelError::NonFiniteCoordinate { index });
        }
        Ok(Self {
            chain_id,
            coordinates,
            residue_numbers,
        })
    }

    /// Builds a trace numbered `1..=n`, for synthetic coordinates without file numbering.
    pub fn from_coordinates(
        chain_id: char,
        coordinates: Vec<Point3<f64>>,
    ) -> Result<Self, ModelError> {
        let residue_numbers = (1..=coordinates.len() as isize).collect();
        Self::new(chain_id, coordinates, residue_numbers)
    }

    pub fn chain_id(&self) -> char {
        self.chain_id
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn coordinates(&self) -> &[Point3<f64>] {
        &self.coordinates
    }

    pub fn residue_numbers(&self) -> &[isize] {
        &self.residue_numbers
    }

    pub fn residue_number(&self, position: usize) -> Option<isize> {
        self.residue_numbers.get(position).copied()
    }
}
