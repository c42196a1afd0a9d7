//! Provides input/output functionality for the domain scan.
//!
//! Coordinate sources turn structure files into a [`CaTrace`](crate::core::models::trace::CaTrace)
//! through a common trait, so the scan itself has no knowledge of any file format.
//! Report writers render the resulting score curve as text or CSV, and the
//! plot module draws it as an SVG line chart.

pub mod pdb;
pub mod plot;
pub mod report;
pub mod traits;
