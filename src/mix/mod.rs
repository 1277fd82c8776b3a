//! Master mix calculation module
//!
//! Per-sample recipe derivation, excess-scaled totals and half-microliter rounding.

pub mod calculator;
pub mod error;
pub mod units;

pub use calculator::{compute_totals, per_sample_volumes, round_to_half, MixPlan, Recipe};
pub use error::{MixError, MixResult};
pub use units::{
    Component, ComponentVolume, MixConcentration, DEFAULT_EXCESS_PERCENT, DEFAULT_MIX_X,
    PER_SAMPLE_TOTAL_UL, PRIMER_UL,
};
