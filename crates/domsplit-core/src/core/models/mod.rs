//! Data models shared by the contact map builder and the split scorer.

pub mod contact_map;
pub mod score;
pub mod trace;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error(
        "Coordinate count ({coordinates}) does not match residue number count ({residue_numbers})"
    )]
    LengthMismatch {
        coordinates: usize,
        residue_numbers: usize,
    },
    #[error("Coordinate at position {index} is not finite")]
    NonFiniteCoordinate { index: usize },
    #[error("Contact matrix is not square: row {row} has {len} entries, expected {rows}")]
    NotSquare { rows: usize, row: usize, len: usize },
    #[error("Contact matrix is not symmetric at ({row}, {col})")]
    NotSymmetric { row: usize, col: usize },
}
