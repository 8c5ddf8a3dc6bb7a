use std::time::Instant;

use bon::Builder;

use crate::{
    core::{
        action::Action,
        charging::ChargeTransitions,
        error::{Error, InvalidInput},
        plan::Plan,
        solution_space::{Solution, SolutionSpace},
        source::{Costs, MaxSupply},
        storage_level::{Efficiency, StorageLevel},
    },
    prelude::{debug, info, instrument},
    quantity::{cost::Cost, energy::KilowattHours},
};

#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Solver<'a> {
    /// Energy demand of each period.
    demand: &'a [KilowattHours],

    costs: Costs,
    max_supply: MaxSupply,

    /// Storage capacity.
    #[builder(default)]
    max_level: StorageLevel,

    efficiency: Efficiency,

    /// Horizon length, if specified, must match the demand length.
    n_periods: Option<usize>,
}

impl<S: solver_builder::IsComplete> SolverBuilder<'_, S> {
    pub fn solve(self) -> Result<Plan, Error> {
        self.build().solve()
    }
}

impl Solver<'_> {
    /// Find the minimum-cost dispatch plan.
    ///
    /// The table is filled forward in time: each `(period, storage level)` cell is derived from
    /// the row of the previous period only, picking the cheapest of the candidate actions.
    /// Then, the cheapest final state is traced back to the schedule.
    #[instrument(skip_all, name = "Solving…", fields(max_level = %self.max_level))]
    fn solve(self) -> Result<Plan, Error> {
        self.validate()?;
        let start_instant = Instant::now();
        let n_periods = self.demand.len();
        info!(n_periods, n_levels = self.max_level.0 + 1, "optimizing…");

        let charge_transitions =
            ChargeTransitions::new(self.max_level, self.max_supply.renewable, self.efficiency);
        let mut solutions = SolutionSpace::new(n_periods, self.max_level);

        for (period, demand) in (1..=n_periods).zip(self.demand.iter().copied()) {
            let (previous, current) = solutions.rows_mut(period);
            for (level, cell) in self.max_level.iter_from_zero().zip(current.iter_mut()) {
                *cell = self.optimize_cell(previous, &charge_transitions, demand, level);
            }
        }

        let (final_level, min_cost) = solutions.cheapest_final().ok_or(Error::Infeasible)?;
        let (schedule, gaps) = solutions.backtrack(final_level, self.efficiency);
        if !gaps.is_empty() {
            debug!(?gaps, "the reconstructed path has gaps");
        }
        info!(elapsed = ?start_instant.elapsed(), %min_cost, %final_level, "optimized");

        Ok(Plan { min_cost, base_cost: self.base_cost(), final_level, schedule, gaps })
    }

    /// Cost of serving every period with the cheapest of the renewable and grid sources.
    ///
    /// # Returns
    ///
    /// [`None`], if some period cannot be served this way.
    pub fn base_cost(&self) -> Option<Cost> {
        self.demand
            .iter()
            .map(|&demand| {
                [Action::Renewable(demand), Action::Grid(demand)]
                    .into_iter()
                    .filter(|action| self.is_supplied(*action))
                    .map(|action| action.cost(&self.costs))
                    .min()
            })
            .sum()
    }

    /// Pick the cheapest way to end up at the `level` after serving the `demand`.
    ///
    /// Candidates go in the order of preference, so that the first minimum wins on a tie.
    ///
    /// # Returns
    ///
    /// [`None`], if the state is unreachable.
    fn optimize_cell(
        &self,
        previous: &[Option<Solution>],
        charge_transitions: &ChargeTransitions,
        demand: KilowattHours,
        level: StorageLevel,
    ) -> Option<Solution> {
        let serving = [Action::Renewable(demand), Action::Grid(demand)]
            .into_iter()
            .filter(|action| self.is_supplied(*action))
            .map(|action| (level, action));
        let discharging =
            self.discharging_from(level, demand).map(|from| (from, Action::Storage(demand)));
        let charging = charge_transitions
            .leading_to(level)
            .iter()
            .map(|transition| (transition.from, Action::ChargeRenewable(transition.amount)));

        serving
            .chain(discharging)
            .chain(charging)
            .filter_map(|(from, action)| {
                // Unreachable predecessors yield no candidates:
                let previous = previous.get(from.0)?.as_ref()?;
                Some(Solution {
                    cost: previous.cost + action.cost(&self.costs),
                    action: Some(action),
                })
            })
            .min_by_key(|solution| solution.cost)
    }

    /// Level to discharge from in order to deliver the `demand` and end up at the `level`.
    fn discharging_from(&self, level: StorageLevel, demand: KilowattHours) -> Option<StorageLevel> {
        let from = StorageLevel(level.0.checked_add(self.efficiency.discharge_draw(demand).0)?);
        (from <= self.max_level && from.to_energy() >= demand).then_some(from)
    }

    fn is_supplied(&self, action: Action) -> bool {
        match action {
            Action::Renewable(amount) => amount <= self.max_supply.renewable,
            Action::Grid(amount) => amount <= self.max_supply.grid,
            Action::Storage(_) | Action::ChargeRenewable(_) => true,
        }
    }

    fn validate(&self) -> Result<(), InvalidInput> {
        if let Some(n_periods) = self.n_periods
            && n_periods != self.demand.len()
        {
            return Err(InvalidInput::HorizonMismatch { n_periods, n_demands: self.demand.len() });
        }
        if self.demand.is_empty() {
            return Err(InvalidInput::EmptyHorizon);
        }
        if !self.efficiency.is_valid() {
            return Err(InvalidInput::Efficiency(self.efficiency.0));
        }
        for (index, demand) in self.demand.iter().enumerate() {
            ensure_non_negative(&format!("demand of period {}", index + 1), demand.into_inner())?;
        }
        for (name, cost) in self.costs.iter() {
            ensure_non_negative(name, cost.into_inner())?;
        }
        for (name, supply) in self.max_supply.iter() {
            ensure_non_negative(name, supply.into_inner())?;
        }
        Ok(())
    }
}

fn ensure_non_negative(name: &str, value: f64) -> Result<(), InvalidInput> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidInput::Negative { name: name.to_string(), value })
    }
}
