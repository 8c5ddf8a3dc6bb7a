use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{plan::Plan, source::Costs},
    quantity::energy::KilowattHours,
};

pub fn build_schedule_table(plan: &Plan, demand: &[KilowattHours], costs: &Costs) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Period", "Demand", "Action", "Amount", "Cost", "Served"]);

    let mut entries = plan.schedule.iter().peekable();
    for (period, demand) in (1..).zip(demand) {
        let Some(entry) = entries.next_if(|entry| entry.period == period) else {
            // Gap in the reconstructed path:
            table.add_row(vec![
                Cell::new(period).add_attribute(Attribute::Dim),
                Cell::new(demand)
                    .set_alignment(CellAlignment::Right)
                    .add_attribute(Attribute::Dim),
                Cell::new("n/a").add_attribute(Attribute::Dim),
                Cell::new(""),
                Cell::new(""),
                Cell::new("?").add_attribute(Attribute::Dim),
            ]);
            continue;
        };
        let is_fulfilling = entry.action.is_fulfilling();
        table.add_row(vec![
            Cell::new(period),
            Cell::new(demand).set_alignment(CellAlignment::Right),
            Cell::new(entry.action).fg(entry.action.color()),
            Cell::new(entry.action.amount()).set_alignment(CellAlignment::Right),
            Cell::new(entry.action.cost(costs)).set_alignment(CellAlignment::Right),
            Cell::new(if is_fulfilling { "yes" } else { "no" })
                .fg(if is_fulfilling { Color::Green } else { Color::Red }),
        ]);
    }
    table
}

pub fn build_summary_table(plan: &Plan) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.add_row(vec![
        Cell::new("Minimum cost"),
        Cell::new(plan.min_cost).set_alignment(CellAlignment::Right).fg(Color::Green),
    ]);
    let base_cost =
        plan.base_cost.map_or_else(|| "infeasible".to_string(), |base_cost| base_cost.to_string());
    table.add_row(vec![
        Cell::new("Without storage"),
        Cell::new(base_cost).set_alignment(CellAlignment::Right),
    ]);
    if let Some(savings) = plan.savings() {
        table.add_row(vec![
            Cell::new("Savings"),
            Cell::new(savings).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        ]);
    }
    table.add_row(vec![
        Cell::new("Final storage level"),
        Cell::new(plan.final_level).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Gaps"),
        Cell::new(plan.gaps.len()).set_alignment(CellAlignment::Right).fg(if plan.gaps.is_empty() {
            Color::Reset
        } else {
            Color::DarkYellow
        }),
    ]);
    table
}
