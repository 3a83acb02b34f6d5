//! Terminal table rendering for KPIs, rankings and statistics

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use polars::prelude::*;

use crate::pipeline::{
    ColumnStats, Summary, COL_CALORIES, COL_CARBS, COL_FAT, COL_FOOD, COL_PROTEIN,
};

/// Print the KPI summary card.
pub fn print_summary(summary: &Summary) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("🍽️  Food Items"),
        Cell::new(summary.food_count)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("🔥 Avg Calories (kcal)"),
        Cell::new(format!("{:.0}", summary.avg_calories)),
    ]);
    table.add_row(vec![
        Cell::new("💪 Avg Protein (g)"),
        Cell::new(format!("{:.1}", summary.avg_protein)),
    ]);
    table.add_row(vec![
        Cell::new("🥑 Avg Fat (g)"),
        Cell::new(format!("{:.1}", summary.avg_fat)),
    ]);
    table.add_row(vec![
        Cell::new("🌾 Avg Carbs (g)"),
        Cell::new(format!("{:.1}", summary.avg_carbohydrates)),
    ]);
    table.add_row(vec![
        Cell::new("🏆 Highest-Calorie Food"),
        Cell::new(summary.max_calorie_food.as_deref().unwrap_or("N/A"))
            .fg(Color::Yellow),
    ]);

    println!("{table}");
}

/// Print the macronutrient split (total protein/fat/carbohydrate mass).
pub fn print_macro_split(summary: &Summary) {
    let total = summary.total_protein + summary.total_fat + summary.total_carbohydrates;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Macronutrient").add_attribute(Attribute::Bold),
        Cell::new("Total (g)").add_attribute(Attribute::Bold),
        Cell::new("Share").add_attribute(Attribute::Bold),
    ]);

    for (label, grams) in [
        ("Protein", summary.total_protein),
        ("Fat", summary.total_fat),
        ("Carbohydrates", summary.total_carbohydrates),
    ] {
        let share = if total > 0.0 {
            format!("{:.1}%", grams / total * 100.0)
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{grams:.1}")),
            Cell::new(share).fg(Color::Cyan),
        ]);
    }

    println!("{table}");
}

/// Print a ranking produced by `top_n`, largest value last so the table
/// reads like a horizontal bar chart with the winner at the bottom.
pub fn print_ranking(ranked: &DataFrame, column: &str) -> Result<(), PolarsError> {
    let names = ranked.column(COL_FOOD)?.as_materialized_series();
    let names = names.str()?;
    let values = ranked
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let values = values.f64()?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Food").add_attribute(Attribute::Bold),
        Cell::new(column).add_attribute(Attribute::Bold),
    ]);

    for i in 0..ranked.height() {
        let name = names.get(i).unwrap_or("(unnamed)");
        let value = values
            .get(i)
            .map(|v| format!("{v:.1}"))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![Cell::new(name), Cell::new(value).fg(Color::Green)]);
    }

    println!("{table}");
    Ok(())
}

/// Print the per-column descriptive statistics table.
pub fn print_column_stats(stats: &[ColumnStats]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
        Cell::new("Mean").add_attribute(Attribute::Bold),
        Cell::new("Std").add_attribute(Attribute::Bold),
        Cell::new("Min").add_attribute(Attribute::Bold),
        Cell::new("25%").add_attribute(Attribute::Bold),
        Cell::new("50%").add_attribute(Attribute::Bold),
        Cell::new("75%").add_attribute(Attribute::Bold),
        Cell::new("Max").add_attribute(Attribute::Bold),
    ]);

    for s in stats {
        table.add_row(vec![
            Cell::new(&s.column).fg(Color::Cyan),
            Cell::new(s.count),
            Cell::new(fmt_stat(s.mean)),
            Cell::new(fmt_stat(s.std_dev)),
            Cell::new(fmt_stat(s.min)),
            Cell::new(fmt_stat(s.q25)),
            Cell::new(fmt_stat(s.median)),
            Cell::new(fmt_stat(s.q75)),
            Cell::new(fmt_stat(s.max)),
        ]);
    }

    println!("{table}");
}

/// Print a bounded preview of the filtered rows.
pub fn print_preview(view: &DataFrame, limit: usize) -> Result<(), PolarsError> {
    let names = view.column(COL_FOOD)?.as_materialized_series();
    let names = names.str()?;

    let mut nutrient_columns = Vec::new();
    for column in [COL_CALORIES, COL_PROTEIN, COL_FAT, COL_CARBS] {
        let series = view
            .column(column)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        nutrient_columns.push(series);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Food").add_attribute(Attribute::Bold),
        Cell::new("Calories").add_attribute(Attribute::Bold),
        Cell::new("Protein").add_attribute(Attribute::Bold),
        Cell::new("Fat").add_attribute(Attribute::Bold),
        Cell::new("Carbs").add_attribute(Attribute::Bold),
    ]);

    let shown = view.height().min(limit);
    for i in 0..shown {
        let mut row = vec![Cell::new(names.get(i).unwrap_or("(unnamed)"))];
        for series in &nutrient_columns {
            let value = series
                .f64()?
                .get(i)
                .map(|v| format!("{v:.1}"))
                .unwrap_or_else(|| "-".to_string());
            row.push(Cell::new(value));
        }
        table.add_row(row);
    }

    println!("{table}");
    if view.height() > shown {
        println!("      ... and {} more row(s)", view.height() - shown);
    }
    Ok(())
}

fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.2}")
    }
}
