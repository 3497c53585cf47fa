use std::collections::BTreeMap;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Per-language batch-test outcome.
#[derive(Debug, Default)]
pub struct LangTally {
    pub total: usize,
    pub hits: usize,
    pub confusions: BTreeMap<String, usize>,
}

pub fn accuracy(tallies: &BTreeMap<String, LangTally>) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Language").add_attribute(Attribute::Bold),
        Cell::new("Rows"),
        Cell::new("Hits"),
        Cell::new("Accuracy").fg(Color::Cyan),
        Cell::new("Confused With"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut grand_total = 0;
    let mut grand_hits = 0;

    for (lang, tally) in tallies {
        grand_total += tally.total;
        grand_hits += tally.hits;

        let pct = tally.hits as f64 / tally.total.max(1) as f64 * 100.0;
        let acc_cell = if pct >= 95.0 {
            Cell::new(format!("{:.1}%", pct)).fg(Color::Green)
        } else if pct >= 80.0 {
            Cell::new(format!("{:.1}%", pct)).fg(Color::Yellow)
        } else {
            Cell::new(format!("{:.1}%", pct)).fg(Color::Red)
        };

        let confused = tally
            .confusions
            .iter()
            .map(|(guess, n)| format!("{} x{}", guess, n))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(lang).add_attribute(Attribute::Bold),
            Cell::new(tally.total),
            Cell::new(tally.hits),
            acc_cell,
            Cell::new(confused),
        ]);
    }

    let overall = grand_hits as f64 / grand_total.max(1) as f64 * 100.0;
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(grand_total),
        Cell::new(grand_hits),
        Cell::new(format!("{:.1}%", overall)).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    println!("\n{}", table);
}
