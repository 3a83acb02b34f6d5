//! Tests for CLI argument parsing and end-to-end binary runs

use assert_cmd::Command;
use clap::Parser;
use nutrichoice::cli::Cli;
use nutrichoice::pipeline::FilterCriteria;
use predicates::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["nutrichoice", "-i", "food.csv"]);

    assert_eq!(cli.top_n, 10, "Default top-N should be 10");
    assert_eq!(cli.rank_by, "Protein", "Default ranking column");
    assert_eq!(
        cli.infer_schema_length, 10000,
        "Default schema inference should be 10000"
    );
    assert_eq!(cli.preview_rows, 20);
    assert!(!cli.show_table);
    assert!(cli.search.is_none());
    assert!(cli.min_calories.is_none());
    assert!(cli.export.is_none());
    assert!(cli.report.is_none());
}

#[test]
fn test_cli_criteria_merges_overrides_onto_seeded_ranges() {
    let cli = Cli::parse_from([
        "nutrichoice",
        "-i",
        "food.csv",
        "-s",
        "apple",
        "--min-calories",
        "100",
        "--max-protein",
        "25",
    ]);

    let seeded = FilterCriteria {
        search_text: None,
        calorie_range: (52.0, 579.0),
        protein_range: (0.3, 31.0),
    };
    let criteria = cli.criteria(seeded);

    assert_eq!(criteria.search_text.as_deref(), Some("apple"));
    assert_eq!(criteria.calorie_range, (100.0, 579.0));
    assert_eq!(criteria.protein_range, (0.3, 25.0));
}

#[test]
fn test_cli_rejects_zero_preview_rows() {
    let result = Cli::try_parse_from(["nutrichoice", "-i", "food.csv", "--preview-rows", "0"]);

    assert!(result.is_err());
}

#[test]
fn test_run_end_to_end() {
    let mut df = common::create_food_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    Command::cargo_bin("nutrichoice")
        .unwrap()
        .args(["-i", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("KPI Summary"))
        .stdout(predicate::str::contains("Descriptive Statistics"));
}

#[test]
fn test_run_with_search_filter() {
    let mut df = common::create_food_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    Command::cargo_bin("nutrichoice")
        .unwrap()
        .args(["-i", csv_path.to_str().unwrap(), "-s", "chick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chicken Breast"));
}

#[test]
fn test_run_fails_on_missing_file() {
    Command::cargo_bin("nutrichoice")
        .unwrap()
        .args(["-i", "/nonexistent/food.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CSV file"));
}

#[test]
fn test_run_fails_on_unknown_ranking_column() {
    let mut df = common::create_food_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    Command::cargo_bin("nutrichoice")
        .unwrap()
        .args(["-i", csv_path.to_str().unwrap(), "--rank-by", "Vibes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown nutrient column"));
}

#[test]
fn test_run_fails_on_inverted_range() {
    let mut df = common::create_food_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    Command::cargo_bin("nutrichoice")
        .unwrap()
        .args([
            "-i",
            csv_path.to_str().unwrap(),
            "--min-calories",
            "500",
            "--max-calories",
            "100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inverted"));
}

#[test]
fn test_run_exports_filtered_csv() {
    let mut df = common::create_food_dataframe();
    let (temp_dir, csv_path) = common::create_temp_csv(&mut df);
    let export_path = temp_dir.path().join("filtered.csv");

    Command::cargo_bin("nutrichoice")
        .unwrap()
        .args([
            "-i",
            csv_path.to_str().unwrap(),
            "-s",
            "apple",
            "--export",
            export_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let exported = std::fs::read_to_string(&export_path).unwrap();
    let lines: Vec<&str> = exported.lines().collect();
    assert!(lines[0].starts_with("food,"), "Header row comes first");
    assert_eq!(lines.len(), 3, "Header plus the two apple rows");
}

#[test]
fn test_run_writes_json_report() {
    let mut df = common::create_food_dataframe();
    let (temp_dir, csv_path) = common::create_temp_csv(&mut df);
    let report_path = temp_dir.path().join("report.json");

    Command::cargo_bin("nutrichoice")
        .unwrap()
        .args([
            "-i",
            csv_path.to_str().unwrap(),
            "--report",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();

    assert_eq!(report["metadata"]["rows_total"], 6);
    assert_eq!(report["metadata"]["rows_matched"], 6);
    assert_eq!(report["summary"]["food_count"], 6);
    assert_eq!(report["summary"]["max_calorie_food"], "Almonds");
    assert_eq!(report["statistics"][0]["column"], "Caloric Value");
}
