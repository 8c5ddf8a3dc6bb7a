use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    core::storage_level::{Efficiency, StorageLevel},
    prelude::*,
    scenario::Scenario,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: optimize the dispatch schedule and print it.
    #[clap(name = "solve")]
    Solve(Box<SolveArgs>),

    /// Print the reference scenario in TOML, to be saved and edited.
    #[clap(name = "scenario")]
    Scenario,
}

#[must_use]
#[derive(Parser)]
pub struct SolveArgs {
    /// Scenario TOML file. The reference scenario is used when omitted.
    #[clap(long = "scenario", env = "SCENARIO_PATH")]
    pub scenario_path: Option<PathBuf>,

    #[clap(flatten)]
    pub overrides: ScenarioOverrides,
}

impl SolveArgs {
    pub fn load_scenario(&self) -> Result<Scenario> {
        let mut scenario = match &self.scenario_path {
            Some(path) => Scenario::read_from(path)?,
            None => {
                info!("using the reference scenario");
                Scenario::reference()
            }
        };
        self.overrides.apply_to(&mut scenario);
        Ok(scenario)
    }
}

/// Command-line replacements for the scenario values.
#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct ScenarioOverrides {
    /// Storage capacity in whole kilowatt-hours.
    #[clap(long = "max-storage", env = "MAX_STORAGE")]
    pub max_level: Option<StorageLevel>,

    /// Charging and discharging efficiency within `(0, 1]`.
    #[clap(long, env = "EFFICIENCY")]
    pub efficiency: Option<Efficiency>,

    /// Horizon length, must match the demand length.
    #[clap(long, env = "N_PERIODS")]
    pub n_periods: Option<usize>,
}

impl ScenarioOverrides {
    pub fn apply_to(self, scenario: &mut Scenario) {
        if let Some(max_level) = self.max_level {
            info!(
                from = %scenario.storage.max_level,
                to = %max_level,
                "overriding the storage capacity"
            );
            scenario.storage.max_level = max_level;
        }
        if let Some(efficiency) = self.efficiency {
            info!(
                from = ?scenario.storage.efficiency,
                to = ?efficiency,
                "overriding the efficiency"
            );
            scenario.storage.efficiency = efficiency;
        }
        if let Some(n_periods) = self.n_periods {
            info!(from = ?scenario.n_periods, to = n_periods, "overriding the horizon");
            scenario.n_periods = Some(n_periods);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_ok() {
        Args::command().debug_assert();
    }

    #[test]
    fn overrides_ok() {
        let args = Args::try_parse_from([
            "dispatch",
            "solve",
            "--max-storage",
            "20",
            "--efficiency",
            "0.8",
        ])
        .unwrap();
        let Command::Solve(args) = args.command else {
            panic!("expected the `solve` command");
        };
        assert_eq!(args.scenario_path, None);

        let mut scenario = Scenario::reference();
        args.overrides.apply_to(&mut scenario);
        assert_eq!(scenario.storage.max_level, StorageLevel(20));
        assert_eq!(scenario.storage.efficiency, Efficiency(0.8));
        assert_eq!(scenario.n_periods, Some(12));
    }

    #[test]
    fn no_overrides_keep_scenario() {
        let overrides = ScenarioOverrides { max_level: None, efficiency: None, n_periods: None };
        let mut scenario = Scenario::reference();
        overrides.apply_to(&mut scenario);
        assert_eq!(scenario, Scenario::reference());
    }
}
