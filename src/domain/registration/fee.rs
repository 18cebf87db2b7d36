//! Experience-based registration fee bands.

use serde::{Deserialize, Serialize};

/// Registration fee band derived from years of professional experience.
///
/// The bands are contiguous and exhaustive: every experience value,
/// including an absent one, falls into exactly one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeBand {
    /// 0-1 years.
    Newcomer,
    /// 2-3 years.
    Junior,
    /// 4-5 years.
    Intermediate,
    /// 6-9 years.
    Established,
    /// 10 or more years, or experience not supplied.
    Veteran,
}

impl FeeBand {
    /// Looks up the band for the given years of experience.
    ///
    /// # Band Configuration
    ///
    /// | Experience | Band | Fee |
    /// |------------|------|-----|
    /// | <= 1 | Newcomer | 500 |
    /// | 2-3 | Junior | 250 |
    /// | 4-5 | Intermediate | 100 |
    /// | 6-9 | Established | 50 |
    /// | >= 10 or absent | Veteran | 0 |
    pub fn for_experience(years: Option<u32>) -> Self {
        match years {
            Some(y) if y <= 1 => FeeBand::Newcomer,
            Some(y) if y <= 3 => FeeBand::Junior,
            Some(y) if y <= 5 => FeeBand::Intermediate,
            Some(y) if y <= 9 => FeeBand::Established,
            _ => FeeBand::Veteran,
        }
    }

    /// Registration fee for this band, in whole currency units.
    pub fn fee(&self) -> u32 {
        match self {
            FeeBand::Newcomer => 500,
            FeeBand::Junior => 250,
            FeeBand::Intermediate => 100,
            FeeBand::Established => 50,
            FeeBand::Veteran => 0,
        }
    }

    /// Returns the display name for this band.
    pub fn label(&self) -> &'static str {
        match self {
            FeeBand::Newcomer => "Newcomer",
            FeeBand::Junior => "Junior",
            FeeBand::Intermediate => "Intermediate",
            FeeBand::Established => "Established",
            FeeBand::Veteran => "Veteran",
        }
    }
}

impl std::fmt::Display for FeeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn band_boundaries_are_exact() {
        assert_eq!(FeeBand::for_experience(Some(0)), FeeBand::Newcomer);
        assert_eq!(FeeBand::for_experience(Some(1)), FeeBand::Newcomer);
        assert_eq!(FeeBand::for_experience(Some(2)), FeeBand::Junior);
        assert_eq!(FeeBand::for_experience(Some(3)), FeeBand::Junior);
        assert_eq!(FeeBand::for_experience(Some(4)), FeeBand::Intermediate);
        assert_eq!(FeeBand::for_experience(Some(5)), FeeBand::Intermediate);
        assert_eq!(FeeBand::for_experience(Some(6)), FeeBand::Established);
        assert_eq!(FeeBand::for_experience(Some(9)), FeeBand::Established);
        assert_eq!(FeeBand::for_experience(Some(10)), FeeBand::Veteran);
    }

    #[test]
    fn fee_amounts_match_the_schedule() {
        assert_eq!(FeeBand::for_experience(Some(1)).fee(), 500);
        assert_eq!(FeeBand::for_experience(Some(2)).fee(), 250);
        assert_eq!(FeeBand::for_experience(Some(3)).fee(), 250);
        assert_eq!(FeeBand::for_experience(Some(5)).fee(), 100);
        assert_eq!(FeeBand::for_experience(Some(6)).fee(), 50);
        assert_eq!(FeeBand::for_experience(Some(9)).fee(), 50);
        assert_eq!(FeeBand::for_experience(Some(10)).fee(), 0);
    }

    #[test]
    fn absent_experience_falls_into_the_zero_fee_band() {
        assert_eq!(FeeBand::for_experience(None), FeeBand::Veteran);
        assert_eq!(FeeBand::for_experience(None).fee(), 0);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(format!("{}", FeeBand::Junior), "Junior");
    }

    proptest! {
        #[test]
        fn every_experience_value_gets_a_scheduled_fee(
            years in proptest::option::of(0u32..=120)
        ) {
            let fee = FeeBand::for_experience(years).fee();
            prop_assert!([0, 50, 100, 250, 500].contains(&fee));
        }

        #[test]
        fn fee_never_increases_with_experience(y in 0u32..=119) {
            let lower = FeeBand::for_experience(Some(y)).fee();
            let higher = FeeBand::for_experience(Some(y + 1)).fee();
            prop_assert!(higher <= lower);
        }
    }
}
