use std::{
    fmt::{Debug, Display, Formatter},
    ops::Add,
};

use derive_more::FromStr;
use serde::{Deserialize, Serialize};

use crate::quantity::energy::KilowattHours;

/// Fraction of the energy that survives a single charge or discharge.
#[must_use]
#[derive(Copy, Clone, PartialEq, FromStr, Deserialize, Serialize)]
pub struct Efficiency(pub f64);

impl Debug for Efficiency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

impl Efficiency {
    pub fn is_valid(self) -> bool {
        self.0 > 0.0 && self.0 <= 1.0
    }

    /// Stored energy drawn in order to deliver the useful `energy`.
    pub fn discharge_draw(self, energy: KilowattHours) -> StorageLevel {
        StorageLevel::floor(energy / self.0)
    }

    /// Stored energy gained from charging the raw `energy`.
    pub fn charge_gain(self, energy: KilowattHours) -> StorageLevel {
        StorageLevel::floor(energy * self.0)
    }
}

/// Discrete storage level in whole kilowatt-hours.
#[must_use]
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    FromStr,
    Deserialize,
    Serialize,
)]
pub struct StorageLevel(pub usize);

impl Debug for StorageLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for StorageLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kWh", self.0)
    }
}

impl Add for StorageLevel {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl StorageLevel {
    pub const ZERO: Self = Self(0);

    /// Truncate the energy to the level below it.
    #[expect(clippy::cast_possible_truncation)]
    #[expect(clippy::cast_sign_loss)]
    pub fn floor(energy: KilowattHours) -> Self {
        debug_assert!(energy >= KilowattHours::ZERO);
        Self(energy.into_inner().floor() as usize)
    }

    #[expect(clippy::cast_precision_loss)]
    pub fn to_energy(self) -> KilowattHours {
        KilowattHours::from(self.0 as f64)
    }

    /// Headroom left until the `max` level.
    pub const fn headroom(self, max: Self) -> Self {
        Self(max.0.saturating_sub(self.0))
    }

    /// Iterate through the levels starting with zero and ending with the current level.
    pub fn iter_from_zero(self) -> impl Iterator<Item = Self> {
        (0..=self.0).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_ok() {
        assert_eq!(StorageLevel::floor(KilowattHours::from(44.99)), StorageLevel(44));
    }

    #[test]
    fn discharge_draw_ok() {
        assert_eq!(Efficiency(0.9).discharge_draw(KilowattHours::from(25.0)), StorageLevel(27));
        assert_eq!(Efficiency(0.9).discharge_draw(KilowattHours::from(20.0)), StorageLevel(22));
    }

    #[test]
    fn charge_gain_ok() {
        assert_eq!(Efficiency(0.9).charge_gain(KilowattHours::from(50.0)), StorageLevel(45));
        assert_eq!(Efficiency(0.9).charge_gain(KilowattHours::from(10.0)), StorageLevel(9));
        assert_eq!(Efficiency(0.9).charge_gain(KilowattHours::from(1.0)), StorageLevel::ZERO);
    }

    #[test]
    fn ideal_efficiency_is_lossless() {
        let energy = KilowattHours::from(17.0);
        assert_eq!(Efficiency(1.0).charge_gain(energy), StorageLevel(17));
        assert_eq!(Efficiency(1.0).discharge_draw(energy), StorageLevel(17));
    }

    #[test]
    fn efficiency_validity() {
        assert!(Efficiency(0.9).is_valid());
        assert!(Efficiency(1.0).is_valid());
        assert!(!Efficiency(0.0).is_valid());
        assert!(!Efficiency(1.1).is_valid());
        assert!(!Efficiency(f64::NAN).is_valid());
    }

    #[test]
    fn headroom_ok() {
        assert_eq!(StorageLevel(40).headroom(StorageLevel(100)), StorageLevel(60));
        assert_eq!(StorageLevel(100).headroom(StorageLevel(100)), StorageLevel::ZERO);
    }
}
