//! PCR Master Mix Calculator Library
//!
//! Reagent volumes for a PCR master mix by sample count, excess and mix strength.

pub mod build_info;
pub mod cli;
pub mod mix;
pub mod report;
