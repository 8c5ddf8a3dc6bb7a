use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::{
    core::source::Costs,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// What happens within a single period, together with the energy involved.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Serve the demand from the renewable source.
    Renewable(KilowattHours),

    /// Serve the demand from the grid.
    Grid(KilowattHours),

    /// Serve the demand by discharging the storage.
    Storage(KilowattHours),

    /// Charge the storage from the renewable source; the demand of the period stays unserved.
    ChargeRenewable(KilowattHours),
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Renewable(_) => write!(f, "Renewable"),
            Self::Grid(_) => write!(f, "Grid"),
            Self::Storage(_) => write!(f, "Storage"),
            Self::ChargeRenewable(_) => write!(f, "Charge"),
        }
    }
}

impl Action {
    pub const fn amount(self) -> KilowattHours {
        match self {
            Self::Renewable(amount)
            | Self::Grid(amount)
            | Self::Storage(amount)
            | Self::ChargeRenewable(amount) => amount,
        }
    }

    /// Whether the action covers the demand of its period.
    pub const fn is_fulfilling(self) -> bool {
        !matches!(self, Self::ChargeRenewable(_))
    }

    pub fn cost(self, costs: &Costs) -> Cost {
        match self {
            Self::Renewable(amount) | Self::ChargeRenewable(amount) => amount * costs.renewable,
            Self::Grid(amount) => amount * costs.grid,
            Self::Storage(amount) => amount * costs.storage,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Renewable(_) => Color::Green,
            Self::Grid(_) => Color::Red,
            Self::Storage(_) => Color::Blue,
            Self::ChargeRenewable(_) => Color::DarkYellow,
        }
    }
}
