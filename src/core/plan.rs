use crate::{
    core::{action::Action, storage_level::StorageLevel},
    quantity::cost::Cost,
};

/// Single schedule entry: what to do within the period.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// One-based period number.
    pub period: usize,

    pub action: Action,
}

/// Optimal dispatch plan.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Minimum total cost over the horizon – the optimization target.
    pub min_cost: Cost,

    /// Cost of serving every period straight from renewable or grid, without the storage.
    ///
    /// [`None`] if some period cannot be covered that way.
    pub base_cost: Option<Cost>,

    /// Storage level at the end of the horizon.
    pub final_level: StorageLevel,

    /// Chronological schedule.
    pub schedule: Vec<ScheduleEntry>,

    /// Periods without a recorded action along the reconstructed path, in chronological order.
    ///
    /// These appear when the path passes through a charging step: charging is not reversed
    /// while walking back, so the walk may land on a state which was never reached.
    pub gaps: Vec<usize>,
}

impl Plan {
    pub fn savings(&self) -> Option<Cost> {
        Some(self.base_cost? - self.min_cost)
    }
}
