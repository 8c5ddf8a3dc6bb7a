use std::cmp::Ordering;

use crate::{
    core::{
        action::Action,
        plan::ScheduleEntry,
        storage_level::{Efficiency, StorageLevel},
    },
    prelude::*,
    quantity::cost::Cost,
};

/// Cheapest known way to reach a `(period, storage level)` state.
#[derive(Copy, Clone)]
pub struct Solution {
    /// Cumulative cost since the beginning of the horizon.
    pub cost: Cost,

    /// Action which led to the state.
    ///
    /// Only the initial state has [`None`] here.
    pub action: Option<Action>,
}

impl Solution {
    /// Starting point: empty storage before the first period.
    pub const INITIAL: Self = Self { cost: Cost::ZERO, action: None };
}

pub struct SolutionSpace {
    /// Energy dimension size.
    max_level: StorageLevel,

    /// Time dimension size, not counting the initial row.
    n_periods: usize,

    /// Flattened 2D array of solutions to speed up the lookups.
    ///
    /// Here, [`None`] means the state is unreachable.
    flat_matrix: Vec<Option<Solution>>,
}

impl SolutionSpace {
    pub fn new(n_periods: usize, max_level: StorageLevel) -> Self {
        let mut flat_matrix = vec![None; (n_periods + 1) * (max_level.0 + 1)];
        flat_matrix[0] = Some(Solution::INITIAL);
        Self { max_level, n_periods, flat_matrix }
    }

    /// Get the solution at the given period and storage level.
    ///
    /// Period `0` is the initial state before the horizon starts.
    pub fn get(&self, period: usize, level: StorageLevel) -> Option<&Solution> {
        match period.cmp(&self.n_periods) {
            Ordering::Less | Ordering::Equal => {
                if level > self.max_level {
                    return None;
                }
                self.flat_matrix[self.flat_index(period, level)].as_ref()
            }
            Ordering::Greater => {
                panic!("period is out of bounds ({period})");
            }
        }
    }

    /// Split the matrix into the completed row of the previous period and the row of `period`.
    ///
    /// Both rows are indexed by the storage level.
    pub fn rows_mut(&mut self, period: usize) -> (&[Option<Solution>], &mut [Option<Solution>]) {
        assert!((1..=self.n_periods).contains(&period), "period is out of bounds ({period})");
        let width = self.max_level.0 + 1;
        let (before, after) = self.flat_matrix.split_at_mut(period * width);
        (&before[(period - 1) * width..], &mut after[..width])
    }

    /// Find the cheapest final state.
    ///
    /// # Returns
    ///
    /// - the lowest storage level with the minimum cost, and the cost itself;
    /// - [`None`], if no final state is reachable.
    pub fn cheapest_final(&self) -> Option<(StorageLevel, Cost)> {
        self.max_level
            .iter_from_zero()
            .filter_map(|level| Some((level, self.get(self.n_periods, level)?.cost)))
            .min_by_key(|(_, cost)| *cost)
    }

    /// Walk back from the final `level` and collect the recorded actions.
    ///
    /// Only discharging is reversed on the way back. Charging leads to a different storage level,
    /// but the walk continues from the same level, which may turn out unreachable in the earlier
    /// periods. Such periods are skipped and returned separately.
    ///
    /// # Returns
    ///
    /// Chronological schedule and the skipped periods.
    pub fn backtrack(
        &self,
        mut level: StorageLevel,
        efficiency: Efficiency,
    ) -> (Vec<ScheduleEntry>, Vec<usize>) {
        let mut schedule = Vec::with_capacity(self.n_periods);
        let mut gaps = Vec::new();

        for period in (1..=self.n_periods).rev() {
            let Some(action) = self.get(period, level).and_then(|solution| solution.action) else {
                debug!(period, ?level, "no action recorded, skipping the period");
                gaps.push(period);
                continue;
            };
            schedule.push(ScheduleEntry { period, action });
            match action {
                Action::Storage(amount) => {
                    level = level + efficiency.discharge_draw(amount);
                }
                Action::Renewable(_) | Action::Grid(_) | Action::ChargeRenewable(_) => {}
            }
        }

        schedule.reverse();
        gaps.reverse();
        (schedule, gaps)
    }

    /// Convert the indices into the respective index in the flattened array.
    #[must_use]
    fn flat_index(&self, period: usize, level: StorageLevel) -> usize {
        debug_assert!(level <= self.max_level);
        period * (self.max_level.0 + 1) + level.0
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::quantity::energy::KilowattHours;

    fn solution(cost: f64, action: Action) -> Option<Solution> {
        Some(Solution { cost: Cost::from(cost), action: Some(action) })
    }

    #[test]
    fn only_empty_storage_is_initially_reachable() {
        let space = SolutionSpace::new(3, StorageLevel(5));
        assert!(space.get(0, StorageLevel::ZERO).is_some());
        assert!((1..=5).all(|level| space.get(0, StorageLevel(level)).is_none()));
        assert!(space.cheapest_final().is_none());
    }

    #[test]
    fn out_of_range_level_is_unreachable() {
        let space = SolutionSpace::new(1, StorageLevel(5));
        assert!(space.get(1, StorageLevel(6)).is_none());
    }

    #[test]
    #[should_panic(expected = "period is out of bounds (4)")]
    fn period_out_of_bounds() {
        let _ = SolutionSpace::new(3, StorageLevel(5)).get(4, StorageLevel::ZERO);
    }

    #[test]
    fn rows_mut_ok() {
        let mut space = SolutionSpace::new(2, StorageLevel(1));
        let (previous, current) = space.rows_mut(1);
        assert_eq!(previous.len(), 2);
        assert!(previous[0].is_some());
        current[1] = solution(1.0, Action::Grid(KilowattHours::from(10.0)));
        assert_eq!(
            space.get(1, StorageLevel(1)).map(|solution| solution.cost),
            Some(Cost::from(1.0)),
        );
    }

    #[test]
    fn cheapest_final_prefers_lowest_level_on_tie() {
        let mut space = SolutionSpace::new(1, StorageLevel(2));
        let (_, current) = space.rows_mut(1);
        current[2] = solution(1.0, Action::Grid(KilowattHours::from(1.0)));
        current[1] = solution(1.0, Action::Renewable(KilowattHours::from(1.0)));
        assert_eq!(space.cheapest_final(), Some((StorageLevel(1), Cost::from(1.0))));
    }

    #[test]
    fn backtrack_reverses_discharge() {
        let mut space = SolutionSpace::new(2, StorageLevel(20));
        space.rows_mut(1).1[20] = solution(2.0, Action::ChargeRenewable(KilowattHours::from(20.0)));
        space.rows_mut(2).1[10] = solution(2.1, Action::Storage(KilowattHours::from(10.0)));

        let (schedule, gaps) = space.backtrack(StorageLevel(10), Efficiency(1.0));
        let actions = schedule.iter().map(|entry| (entry.period, entry.action)).collect_vec();
        assert_eq!(
            actions,
            [
                (1, Action::ChargeRenewable(KilowattHours::from(20.0))),
                (2, Action::Storage(KilowattHours::from(10.0))),
            ],
        );
        assert!(gaps.is_empty());
    }

    #[test]
    fn backtrack_does_not_reverse_charging() {
        let mut space = SolutionSpace::new(2, StorageLevel(2));
        space.rows_mut(1).1[1] = solution(0.05, Action::ChargeRenewable(KilowattHours::from(1.0)));
        space.rows_mut(2).1[2] = solution(0.1, Action::ChargeRenewable(KilowattHours::from(1.0)));

        let (schedule, gaps) = space.backtrack(StorageLevel(2), Efficiency(1.0));
        let actions = schedule.iter().map(|entry| (entry.period, entry.action)).collect_vec();
        assert_eq!(actions, [(2, Action::ChargeRenewable(KilowattHours::from(1.0)))]);
        assert_eq!(gaps, [1]);
    }
}
