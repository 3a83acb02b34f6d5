//! NutriChoice: Food Nutrition Analytics Library
//!
//! A library for filtering, ranking and summarizing food nutrition
//! datasets loaded from CSV files.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
