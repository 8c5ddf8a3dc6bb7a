use crate::{
    core::storage_level::{Efficiency, StorageLevel},
    quantity::energy::KilowattHours,
};

/// Charging step from the renewable source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChargeTransition {
    /// Storage level before charging.
    pub from: StorageLevel,

    /// Raw renewable energy spent on charging.
    pub amount: KilowattHours,
}

/// Charging transitions grouped by the storage level they lead to.
///
/// The charged amount only depends on the level it starts from, so the transitions are the same
/// for every period and are built once per solve.
pub struct ChargeTransitions(Vec<Vec<ChargeTransition>>);

impl ChargeTransitions {
    pub fn new(
        max_level: StorageLevel,
        renewable_supply: KilowattHours,
        efficiency: Efficiency,
    ) -> Self {
        let mut by_target = vec![Vec::new(); max_level.0 + 1];
        for from in max_level.iter_from_zero() {
            if from == max_level {
                continue;
            }
            // Charge as much as fits, but no more than the renewable source delivers:
            let amount = from.headroom(max_level).to_energy().min(renewable_supply);
            let to = from + efficiency.charge_gain(amount);
            by_target[to.0].push(ChargeTransition { from, amount });
        }
        Self(by_target)
    }

    /// Transitions ending at the `level`, ordered by the starting level.
    pub fn leading_to(&self, level: StorageLevel) -> &[ChargeTransition] {
        &self.0[level.0]
    }
}
