//! Terminal styling utilities for the dashboard output

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static PLATE: Emoji<'_, '_> = Emoji("🥗 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "");
pub static FIRE: Emoji<'_, '_> = Emoji("🔥 ", "");
pub static MUSCLE: Emoji<'_, '_> = Emoji("💪 ", "");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ███╗   ██╗██╗   ██╗████████╗██████╗ ██╗
    ████╗  ██║██║   ██║╚══██╔══╝██╔══██╗██║
    ██╔██╗ ██║██║   ██║   ██║   ██████╔╝██║
    ██║╚██╗██║██║   ██║   ██║   ██╔══██╗██║
    ██║ ╚████║╚██████╔╝   ██║   ██║  ██║██║
    ╚═╝  ╚═══╝ ╚═════╝    ╚═╝   ╚═╝  ╚═╝╚═╝
    "#;

    println!();
    println!("{}", style(banner).green().bold());
    println!(
        "    {} {}",
        PLATE,
        style("NutriChoice - food nutrition analytics").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the configuration card
pub fn print_config(
    input: &Path,
    search: Option<&str>,
    calorie_range: (f64, f64),
    protein_range: (f64, f64),
    top_n: usize,
) {
    println!("    {}", style("Configuration").cyan().bold());
    println!(
        "      {} Input:    {}",
        FOLDER,
        style(input.display()).dim()
    );
    println!(
        "      {} Search:   {}",
        SEARCH,
        style(search.filter(|s| !s.is_empty()).unwrap_or("(none)")).yellow()
    );
    println!(
        "      {} Calories: {}",
        FIRE,
        style(format!("{:.0} - {:.0} kcal", calorie_range.0, calorie_range.1)).yellow()
    );
    println!(
        "      {} Protein:  {}",
        MUSCLE,
        style(format!("{:.1} - {:.1} g", protein_range.0, protein_range.1)).yellow()
    );
    println!(
        "      {} Top-N:    {}",
        INFO,
        style(top_n).yellow()
    );
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!(
        "    {} {}",
        style("✓").green().bold(),
        style(message).green()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize) {
    println!(
        "      Found {} {}",
        style(count).yellow().bold(),
        description
    );
}

/// Print the elapsed time for a step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("completed in {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        PLATE,
        style("NutriChoice analysis complete!").green().bold()
    );
    println!();
}
