/// Solver failure.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("no feasible schedule: every final storage level is unreachable")]
    Infeasible,
}

/// Inconsistent solver input, rejected before any optimization takes place.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("the horizon must contain at least one period")]
    EmptyHorizon,

    #[error("the horizon of {n_periods} periods does not match {n_demands} demand values")]
    HorizonMismatch { n_periods: usize, n_demands: usize },

    #[error("efficiency must be within (0, 1], got {0}")]
    Efficiency(f64),

    #[error("{name} must be a non-negative finite number, got {value}")]
    Negative { name: String, value: f64 },
}
