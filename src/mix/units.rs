//! Reaction constants and component types
//!
//! Fixed volumes for the 11 µL genotyping reaction and the two supported
//! master mix strengths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MixError;

// ============================================================================
// Reaction Constants (microliters)
// ============================================================================

/// Total reaction volume per sample
pub const PER_SAMPLE_TOTAL_UL: f64 = 11.0;
/// Volume of each primer (forward and reverse) per sample
pub const PRIMER_UL: f64 = 0.5;
/// Master mix volume per sample in the reference formulation
pub const REFERENCE_MIX_UL: f64 = 6.0;
/// Concentration of the reference formulation
pub const REFERENCE_MIX_X: f64 = 2.0;

/// Default pipetting-loss excess, in percent
pub const DEFAULT_EXCESS_PERCENT: f64 = 10.0;
/// Default master mix concentration multiplier
pub const DEFAULT_MIX_X: u32 = 2;

// ============================================================================
// Mix Concentration
// ============================================================================

/// Supported master mix strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum MixConcentration {
    TwoX,
    FiveX,
}

impl MixConcentration {
    /// The concentration multiplier (2 or 5)
    pub fn multiplier(&self) -> u32 {
        match self {
            MixConcentration::TwoX => 2,
            MixConcentration::FiveX => 5,
        }
    }

    /// Master mix volume per sample that keeps the reference potency
    ///
    /// 6 µL of 2X holds the same amount of mix as 2.4 µL of 5X.
    pub fn volume_per_sample(&self) -> f64 {
        REFERENCE_MIX_UL * (REFERENCE_MIX_X / self.multiplier() as f64)
    }
}

impl TryFrom<u32> for MixConcentration {
    type Error = MixError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(MixConcentration::TwoX),
            5 => Ok(MixConcentration::FiveX),
            _ => Err(MixError::invalid_argument("mix_concentration must be 2 or 5")),
        }
    }
}

impl From<MixConcentration> for u32 {
    fn from(mix: MixConcentration) -> Self {
        mix.multiplier()
    }
}

/// Accepts "2", "5", "2X" or "5x"
impl FromStr for MixConcentration {
    type Err = MixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix('X')
            .or_else(|| trimmed.strip_suffix('x'))
            .unwrap_or(trimmed);

        digits
            .trim()
            .parse::<u32>()
            .map_err(|_| MixError::invalid_argument("mix_concentration must be 2 or 5"))
            .and_then(MixConcentration::try_from)
    }
}

impl fmt::Display for MixConcentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}X", self.multiplier())
    }
}

// ============================================================================
// Components
// ============================================================================

/// Reaction components, in the order they are listed and pipetted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// DDW (distilled/deionized water)
    Diluent,
    MasterMix,
    PrimerForward,
    PrimerReverse,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Diluent,
        Component::MasterMix,
        Component::PrimerForward,
        Component::PrimerReverse,
    ];

    /// Short display name; the master mix carries its concentration
    pub fn name(&self, mix: MixConcentration) -> String {
        match self {
            Component::Diluent => "DDW".to_string(),
            Component::MasterMix => format!("Mix {}", mix),
            Component::PrimerForward => "Primer F".to_string(),
            Component::PrimerReverse => "Primer R".to_string(),
        }
    }

    /// Name with unit, as used in the text report
    pub fn label(&self, mix: MixConcentration) -> String {
        format!("{} (µL)", self.name(mix))
    }
}

/// A single component and its volume in microliters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentVolume {
    pub component: Component,
    pub volume_ul: f64,
}

impl ComponentVolume {
    pub fn new(component: Component, volume_ul: f64) -> Self {
        Self { component, volume_ul }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_from_u32() {
        assert_eq!(MixConcentration::try_from(2u32), Ok(MixConcentration::TwoX));
        assert_eq!(MixConcentration::try_from(5u32), Ok(MixConcentration::FiveX));
        assert!(matches!(
            MixConcentration::try_from(3u32),
            Err(MixError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_mix_from_str() {
        assert_eq!("2".parse::<MixConcentration>(), Ok(MixConcentration::TwoX));
        assert_eq!("5X".parse::<MixConcentration>(), Ok(MixConcentration::FiveX));
        assert_eq!(" 5x ".parse::<MixConcentration>(), Ok(MixConcentration::FiveX));
        assert!("10".parse::<MixConcentration>().is_err());
        assert!("two".parse::<MixConcentration>().is_err());
    }

    #[test]
    fn test_mix_volume_per_sample() {
        assert!((MixConcentration::TwoX.volume_per_sample() - 6.0).abs() < 1e-9);
        assert!((MixConcentration::FiveX.volume_per_sample() - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_component_labels() {
        assert_eq!(Component::Diluent.label(MixConcentration::TwoX), "DDW (µL)");
        assert_eq!(Component::MasterMix.label(MixConcentration::FiveX), "Mix 5X (µL)");
        assert_eq!(Component::PrimerForward.name(MixConcentration::TwoX), "Primer F");
        assert_eq!(Component::PrimerReverse.name(MixConcentration::TwoX), "Primer R");
    }

    #[test]
    fn test_mix_serializes_as_number() {
        let json = serde_json::to_string(&MixConcentration::FiveX).unwrap();
        assert_eq!(json, "5");
        let back: MixConcentration = serde_json::from_str("2").unwrap();
        assert_eq!(back, MixConcentration::TwoX);
        assert!(serde_json::from_str::<MixConcentration>("3").is_err());
    }
}
