use serde::{Deserialize, Serialize};

use crate::quantity::{energy::KilowattHours, rate::KilowattHourRate};

/// Unit costs of the energy sources.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Costs {
    pub renewable: KilowattHourRate,
    pub grid: KilowattHourRate,

    /// Cost of the energy delivered from the storage (the charging itself is billed as renewable).
    pub storage: KilowattHourRate,
}

impl Costs {
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, KilowattHourRate)> {
        [
            ("renewable cost", self.renewable),
            ("grid cost", self.grid),
            ("storage cost", self.storage),
        ]
        .into_iter()
    }
}

/// Maximum energy each external source is able to deliver within a single period.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MaxSupply {
    pub renewable: KilowattHours,
    pub grid: KilowattHours,
}

impl MaxSupply {
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, KilowattHours)> {
        [("renewable supply", self.renewable), ("grid supply", self.grid)].into_iter()
    }
}
