//! Queries over a table built from in-memory workbooks

use crate::utils::{data_row, single_sheet_workbook};
use wage_reader::{
    RawCell, WageField, WageTable, aggregate, process_workbook, year_over_year_growth,
};

fn table() -> WageTable {
    let rows_for = |median: i32| {
        vec![
            data_row(1, "2512", "Software Engineer", [median; 6].map(RawCell::from)),
            data_row(2, "2142", "Civil Engineer", [median - 500; 6].map(RawCell::from)),
            data_row(3, "1223", "Engineering Manager", [median + 2000; 6].map(RawCell::from)),
        ]
    };

    let mut batches = Vec::new();
    for (year, median) in [(2021, 5000), (2022, 5250), (2023, 5500)] {
        let mut all = single_sheet_workbook("T4", rows_for(median));
        let mut ict = single_sheet_workbook("T4.6", rows_for(median + 300));
        batches.push(process_workbook(&mut all, year, "T4"));
        batches.push(process_workbook(&mut ict, year, "T4"));
    }
    // newest year first, as directory order might give
    batches.reverse();
    aggregate(batches)
}

#[test]
fn test_search_engineer_ranking() {
    assert_eq!(
        table().search_occupations("engineer"),
        vec!["Engineering Manager", "Civil Engineer", "Software Engineer"]
    );
}

#[test]
fn test_filter_returns_year_series() {
    let table = table();
    let rows = table.filter("SOFTWARE ENGINEER", "Information and Communications");
    let series: Vec<(i32, Option<f64>)> = rows.iter().map(|r| (r.year, r.basic_median)).collect();
    assert_eq!(
        series,
        vec![(2021, Some(5300.0)), (2022, Some(5550.0)), (2023, Some(5800.0))]
    );
}

#[test]
fn test_industry_without_rows_is_empty_not_error() {
    let table = table();
    assert!(WageTable::industries().contains(&"Real Estate Services"));
    assert!(table.filter("Software Engineer", "Real Estate Services").is_empty());
}

#[test]
fn test_growth_over_filtered_series() {
    let table = table();
    let rows = table.filter("Software Engineer", "All Industries");
    let growth = year_over_year_growth(&rows, WageField::BasicMedian);
    assert_eq!(growth[0].growth_pct, None);
    assert!((growth[1].growth_pct.unwrap() - 5.0).abs() < 1e-9);
}

#[test]
fn test_summary_counts() {
    let summary = table().summary();
    assert_eq!(summary.records, 18);
    assert_eq!(summary.years, vec![2021, 2022, 2023]);
    assert_eq!(summary.industries, 2);
    assert_eq!(summary.occupations, 3);
}
