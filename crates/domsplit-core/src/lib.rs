//! # DomSplit Core Library
//!
//! Identification of structural domain boundaries in a single protein chain from
//! its alpha-carbon trace.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`CaTrace`, `ContactMap`)
//!   and I/O utilities (coordinate sources, score reports).
//!
//! - **[`engine`]: The Logic Core.** Configuration, error types, progress reporting,
//!   contact map construction, and the split scoring algorithm.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into a
//!   complete domain scan, from a CA trace to an ordered score curve.

pub mod core;
pub mod engine;
pub mod workflows;
