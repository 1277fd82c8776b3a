//! Volume calculation functions
//!
//! Derives the per-sample recipe for a mix strength and scales it to a batch.

use serde::{Deserialize, Serialize};

use super::error::{MixError, MixResult};
use super::units::{Component, ComponentVolume, MixConcentration, PER_SAMPLE_TOTAL_UL, PRIMER_UL};

/// Round to the nearest 0.5 µL increment
///
/// Ties go to the even half-step: 0.25 -> 0.0, 0.75 -> 1.0, 1.25 -> 1.0.
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round_ties_even() / 2.0
}

/// Component volumes for one reaction or a whole batch, in pipetting order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub mix: MixConcentration,
    pub volumes: [ComponentVolume; 4],
}

impl Recipe {
    /// Volume for a single component
    pub fn volume(&self, component: Component) -> f64 {
        self.volumes
            .iter()
            .find(|v| v.component == component)
            .map(|v| v.volume_ul)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentVolume> {
        self.volumes.iter()
    }

    /// Sum of all component volumes
    pub fn total(&self) -> f64 {
        self.volumes.iter().map(|v| v.volume_ul).sum()
    }

    /// Apply `f` to every volume, keeping order and mix
    fn map_volumes<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let mut volumes = self.volumes;
        for v in volumes.iter_mut() {
            v.volume_ul = f(v.volume_ul);
        }
        Self { mix: self.mix, volumes }
    }
}

/// A fully computed batch: inputs, per-sample recipe, totals and grand total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixPlan {
    pub sample_count: i64,
    pub excess_percent: f64,
    pub mix: MixConcentration,
    pub per_sample_total_ul: f64,
    /// Volumes for a single reaction
    pub per_sample: Recipe,
    /// Batch volumes with excess, each rounded to 0.5 µL
    pub totals: Recipe,
    /// Rounded sum of the rounded totals
    pub grand_total_ul: f64,
}

/// Per-sample component volumes for the requested mix strength
///
/// `mix_x` must be 2 or 5.
pub fn per_sample_volumes(mix_x: u32) -> MixResult<Recipe> {
    let mix = MixConcentration::try_from(mix_x)?;
    assemble_recipe(mix, mix.volume_per_sample())
}

/// Fill the reaction up to the fixed total with diluent
fn assemble_recipe(mix: MixConcentration, mix_volume: f64) -> MixResult<Recipe> {
    let primers_total = 2.0 * PRIMER_UL;
    let diluent = PER_SAMPLE_TOTAL_UL - (mix_volume + primers_total);

    if diluent < 0.0 {
        return Err(MixError::invalid_configuration(format!(
            "negative DDW volume ({:.2} µL) calculated for {} mix; check reaction constants",
            diluent, mix
        )));
    }

    Ok(Recipe {
        mix,
        volumes: [
            ComponentVolume::new(Component::Diluent, diluent),
            ComponentVolume::new(Component::MasterMix, mix_volume),
            ComponentVolume::new(Component::PrimerForward, PRIMER_UL),
            ComponentVolume::new(Component::PrimerReverse, PRIMER_UL),
        ],
    })
}

/// Compute the per-sample recipe, batch totals with excess, and the grand total
///
/// # Arguments
/// * `sample_count` - Number of reactions, at least 1
/// * `excess_percent` - Extra volume for pipetting loss, non-negative
/// * `mix_x` - Master mix concentration, 2 or 5
///
/// Each total is rounded on its own; the grand total rounds the sum of those
/// rounded totals, not the raw sum.
pub fn compute_totals(sample_count: i64, excess_percent: f64, mix_x: u32) -> MixResult<MixPlan> {
    if sample_count < 1 {
        return Err(MixError::invalid_argument("sample count must be ≥ 1"));
    }
    if !excess_percent.is_finite() {
        return Err(MixError::invalid_argument("excess percent must be a finite number"));
    }
    if excess_percent < 0.0 {
        return Err(MixError::invalid_argument("excess percent must be ≥ 0"));
    }

    let per_sample = per_sample_volumes(mix_x)?;
    let factor = 1.0 + excess_percent / 100.0;

    let totals = per_sample.map_volumes(|v| round_to_half(v * sample_count as f64 * factor));
    let grand_total_ul = round_to_half(totals.total());

    tracing::debug!(
        "Computed {} mix for {} samples at {:.1}% excess: {:.1} µL total",
        per_sample.mix,
        sample_count,
        excess_percent,
        grand_total_ul
    );

    Ok(MixPlan {
        sample_count,
        excess_percent,
        mix: per_sample.mix,
        per_sample_total_ul: PER_SAMPLE_TOTAL_UL,
        per_sample,
        totals,
        grand_total_ul,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_half_basic() {
        assert_eq!(round_to_half(0.24), 0.0);
        assert_eq!(round_to_half(0.26), 0.5);
        assert_eq!(round_to_half(1.0), 1.0);
        assert_eq!(round_to_half(31.92), 32.0);
        assert_eq!(round_to_half(10.08), 10.0);
    }

    #[test]
    fn test_round_to_half_ties_to_even() {
        // 0.25 * 2 = 0.5 -> 0, 0.75 * 2 = 1.5 -> 2, 1.25 * 2 = 2.5 -> 2
        assert_eq!(round_to_half(0.25), 0.0);
        assert_eq!(round_to_half(0.75), 1.0);
        assert_eq!(round_to_half(1.25), 1.0);
        assert_eq!(round_to_half(1.75), 2.0);
    }

    #[test]
    fn test_per_sample_2x() {
        let per = per_sample_volumes(2).unwrap();
        assert!((per.volume(Component::Diluent) - 4.0).abs() < 1e-9);
        assert!((per.volume(Component::MasterMix) - 6.0).abs() < 1e-9);
        assert_eq!(per.volume(Component::PrimerForward), 0.5);
        assert_eq!(per.volume(Component::PrimerReverse), 0.5);
    }

    #[test]
    fn test_per_sample_5x() {
        let per = per_sample_volumes(5).unwrap();
        assert!((per.volume(Component::MasterMix) - 2.4).abs() < 1e-9);
        assert!((per.volume(Component::Diluent) - 7.6).abs() < 1e-9);
        assert_eq!(per.volume(Component::PrimerForward), 0.5);
        assert_eq!(per.volume(Component::PrimerReverse), 0.5);
    }

    #[test]
    fn test_per_sample_sums_to_reaction_volume() {
        for mix_x in [2, 5] {
            let per = per_sample_volumes(mix_x).unwrap();
            assert!((per.total() - PER_SAMPLE_TOTAL_UL).abs() < 1e-9);
        }
    }

    #[test]
    fn test_per_sample_fixed_order() {
        let per = per_sample_volumes(5).unwrap();
        let order: Vec<Component> = per.iter().map(|v| v.component).collect();
        assert_eq!(order, Component::ALL.to_vec());
        assert_eq!(per.mix, MixConcentration::FiveX);
    }

    #[test]
    fn test_per_sample_unsupported_mix() {
        let err = per_sample_volumes(3).unwrap_err();
        assert_eq!(err, MixError::invalid_argument("mix_concentration must be 2 or 5"));
    }

    #[test]
    fn test_negative_diluent_is_invalid_configuration() {
        let err = assemble_recipe(MixConcentration::TwoX, 12.0).unwrap_err();
        assert!(matches!(err, MixError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_compute_totals_respects_rounding() {
        let plan = compute_totals(8, 12.5, 2).unwrap();
        // 8 x 4.0 x 1.125 = 36.0
        assert_eq!(plan.totals.volume(Component::Diluent), 36.0);
        assert_eq!(plan.totals.volume(Component::MasterMix), 54.0);
        assert_eq!(plan.totals.volume(Component::PrimerForward), 4.5);
        assert_eq!(plan.grand_total_ul, 99.0);
        assert_eq!(plan.per_sample.volume(Component::PrimerForward), 0.5);
    }

    #[test]
    fn test_compute_totals_5x_with_excess() {
        let plan = compute_totals(4, 5.0, 5).unwrap();
        assert_eq!(plan.totals.volume(Component::Diluent), 32.0);
        assert_eq!(plan.totals.volume(Component::MasterMix), 10.0);
        assert_eq!(plan.totals.volume(Component::PrimerForward), 2.0);
        assert_eq!(plan.totals.volume(Component::PrimerReverse), 2.0);
        assert_eq!(plan.grand_total_ul, 46.0);
    }

    #[test]
    fn test_grand_total_rounds_rounded_totals() {
        // 1 sample, 30% excess, 2X: 5.2 + 7.8 + 0.65 + 0.65 rounds to
        // 5.0 + 8.0 + 0.5 + 0.5 = 14.0, while the raw 14.3 would give 14.5
        let plan = compute_totals(1, 30.0, 2).unwrap();
        assert_eq!(plan.grand_total_ul, 14.0);
        assert_eq!(plan.grand_total_ul, round_to_half(plan.totals.total()));

        let raw_sum = plan.per_sample.total() * 1.3;
        assert_eq!(round_to_half(raw_sum), 14.5);
    }

    #[test]
    fn test_compute_totals_zero_excess() {
        let plan = compute_totals(10, 0.0, 2).unwrap();
        assert_eq!(plan.totals.volume(Component::Diluent), 40.0);
        assert_eq!(plan.totals.volume(Component::MasterMix), 60.0);
        assert_eq!(plan.grand_total_ul, 110.0);
    }

    #[test]
    fn test_compute_totals_invalid_sample_count() {
        let err = compute_totals(0, 0.0, 2).unwrap_err();
        assert!(matches!(err, MixError::InvalidArgument(ref m) if m.contains("sample count")));

        let err = compute_totals(-3, 10.0, 2).unwrap_err();
        assert!(matches!(err, MixError::InvalidArgument(_)));
    }

    #[test]
    fn test_compute_totals_invalid_excess() {
        let err = compute_totals(1, -1.0, 2).unwrap_err();
        assert!(matches!(err, MixError::InvalidArgument(ref m) if m.contains("excess percent")));

        let err = compute_totals(1, f64::NAN, 2).unwrap_err();
        assert!(matches!(err, MixError::InvalidArgument(ref m) if m.contains("excess percent")));
    }

    #[test]
    fn test_compute_totals_invalid_mix() {
        let err = compute_totals(4, 10.0, 3).unwrap_err();
        assert!(matches!(err, MixError::InvalidArgument(ref m) if m.contains("mix_concentration")));
    }

    #[test]
    fn test_compute_totals_is_deterministic() {
        let a = compute_totals(24, 10.0, 5).unwrap();
        let b = compute_totals(24, 10.0, 5).unwrap();
        assert_eq!(a, b);
    }
}
