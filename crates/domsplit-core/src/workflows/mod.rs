//! # Workflows Module
//!
//! High-level entry points that run a complete domain scan.
//!
//! - **Domain Scan** ([`scan`]) - Builds the contact map of a CA trace, scores every
//!   interior cut, and labels each score with the native residue number of its cut.

pub mod scan;
