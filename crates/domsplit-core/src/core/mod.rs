//! # Core Module
//!
//! Fundamental data structures and I/O for the domain scan.
//!
//! - **Chain Representation** ([`models`]) - The validated CA trace and the contact map
//! - **File I/O** ([`io`]) - Coordinate sources and score report writers

pub mod io;
pub mod models;
