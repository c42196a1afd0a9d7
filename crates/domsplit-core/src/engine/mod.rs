//! # Engine Module
//!
//! The computational layer of the domain scan: contact map construction and
//! split scoring, plus the configuration, error, and progress types they share.
//!
//! - **Configuration** ([`config`]) - Validated run parameters and their builder
//! - **Contact Maps** ([`contacts`]) - Distance-cutoff contact matrix construction
//! - **Split Scoring** ([`scoring`]) - Per-cut intra/inter domain counts and the discriminator
//! - **Progress** ([`progress`]) - Callback-based progress events
//! - **Errors** ([`error`]) - The engine-level error type

pub mod config;
pub mod contacts;
pub mod error;
pub mod progress;
pub mod scoring;
