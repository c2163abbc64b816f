//! Workbook discovery and loading from a directory

use crate::utils::touch;
use wage_reader::{WageReaderConfig, YearPolicy, find_survey_workbooks, load_wage_data, load_workbooks};

#[test]
fn test_finds_only_survey_workbooks_with_a_year() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "mrsd_2023 monthly basic and gross wages.xlsx");
    touch(dir.path(), "mrsd_2021 monthly basic and gross wages.xlsx");
    touch(dir.path(), "monthly basic and gross wages.xlsx");
    touch(dir.path(), "2022 monthly basic and gross wages.csv");
    touch(dir.path(), "2022 overtime hours.xlsx");
    std::fs::create_dir(dir.path().join("2022 monthly basic and gross wages.xlsx.d")).unwrap();

    let config = WageReaderConfig::with_data_dir(dir.path());
    let workbooks = find_survey_workbooks(&config).unwrap();

    let years: Vec<i32> = workbooks.iter().map(|w| w.year).collect();
    assert_eq!(years, vec![2021, 2023]);
}

#[test]
fn test_legacy_policy_ignores_unknown_years() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "2019 monthly basic and gross wages.xlsx");
    touch(dir.path(), "2024 monthly basic and gross wages.xlsx");

    let mut config = WageReaderConfig::with_data_dir(dir.path());
    config.year_policy = YearPolicy::legacy();
    let workbooks = find_survey_workbooks(&config).unwrap();

    assert_eq!(workbooks.len(), 1);
    assert_eq!(workbooks[0].year, 2024);
}

#[test]
fn test_corrupt_workbooks_give_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "2022 monthly basic and gross wages.xlsx");
    touch(dir.path(), "2023 monthly basic and gross wages.xlsx");

    let config = WageReaderConfig::with_data_dir(dir.path());
    let table = load_wage_data(&config).unwrap();
    assert!(table.is_empty());

    let sequential = WageReaderConfig {
        parallel: false,
        ..config.clone()
    };
    let workbooks = find_survey_workbooks(&sequential).unwrap();
    assert_eq!(workbooks.len(), 2);
    assert!(load_workbooks(&workbooks, &sequential, None).is_empty());
}

#[test]
fn test_empty_directory_gives_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = load_wage_data(&WageReaderConfig::with_data_dir(dir.path())).unwrap();
    assert!(table.is_empty());
    assert!(table.unique_occupations().is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = WageReaderConfig::with_data_dir(dir.path().join("missing"));
    assert!(load_wage_data(&config).is_err());
}
