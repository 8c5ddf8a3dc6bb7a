use std::{fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        error::Error as SolverError,
        plan::Plan,
        solver::Solver,
        source::{Costs, MaxSupply},
        storage_level::{Efficiency, StorageLevel},
    },
    prelude::*,
    quantity::energy::KilowattHours,
};

/// Complete solver input, as stored in a TOML file.
#[must_use]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Horizon length, defaults to the demand length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_periods: Option<usize>,

    /// Energy demand of each period.
    pub demand: Vec<KilowattHours>,

    pub costs: Costs,
    pub max_supply: MaxSupply,
    pub storage: Storage,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Storage {
    pub max_level: StorageLevel,
    pub efficiency: Efficiency,
}

impl Scenario {
    /// Twelve-period scenario with a 100 kWh storage.
    pub fn reference() -> Self {
        Self {
            n_periods: Some(12),
            demand: [30.0, 20.0, 25.0, 35.0, 45.0, 20.0, 10.0, 40.0, 30.0, 25.0, 15.0, 35.0]
                .into_iter()
                .map(KilowattHours::from)
                .collect(),
            costs: Costs { renewable: 0.05.into(), grid: 0.10.into(), storage: 0.02.into() },
            max_supply: MaxSupply { renewable: 50.0.into(), grid: 50.0.into() },
            storage: Storage { max_level: StorageLevel(100), efficiency: Efficiency(0.9) },
        }
    }

    #[instrument(name = "Reading the scenario…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let this = Self::from_toml(&text)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        info!(n_demands = this.demand.len(), "loaded");
        Ok(this)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn solve(&self) -> Result<Plan, SolverError> {
        Solver::builder()
            .demand(&self.demand)
            .costs(self.costs)
            .max_supply(self.max_supply)
            .max_level(self.storage.max_level)
            .efficiency(self.storage.efficiency)
            .maybe_n_periods(self.n_periods)
            .solve()
    }
}
