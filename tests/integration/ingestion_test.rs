//! End-to-end ingestion through in-memory workbooks

use crate::utils::{carpenter_row, data_row, single_sheet_workbook, survey_sheet};
use wage_reader::{MemoryWorkbook, RawCell, WageRecord, aggregate, process_workbook};

#[test]
fn test_single_workbook_produces_one_record() {
    let mut workbook = single_sheet_workbook("T4.5", vec![carpenter_row()]);

    let table = aggregate([process_workbook(&mut workbook, 2022, "T4")]);

    assert_eq!(
        table.records(),
        &[WageRecord {
            year: 2022,
            industry: "Accommodation and Food Services".to_string(),
            ssoc_code: "7112".to_string(),
            occupation: "Carpenter".to_string(),
            basic_p25: Some(2400.0),
            basic_median: Some(2800.0),
            basic_p75: Some(3200.0),
            gross_p25: Some(2600.0),
            gross_median: Some(3000.0),
            gross_p75: Some(3500.0),
        }]
    );
}

#[test]
fn test_suppressed_cell_becomes_missing() {
    let mut row = carpenter_row();
    row[3] = "s".into();
    let mut workbook = single_sheet_workbook("T4.5", vec![row]);

    let table = aggregate([process_workbook(&mut workbook, 2022, "T4")]);

    assert_eq!(table.len(), 1);
    let record = &table.records()[0];
    assert_eq!(record.basic_p25, None);
    assert_eq!(record.basic_median, Some(2800.0));
    assert_eq!(record.basic_p75, Some(3200.0));
    assert_eq!(record.gross_p25, Some(2600.0));
    assert_eq!(record.gross_median, Some(3000.0));
    assert_eq!(record.gross_p75, Some(3500.0));
}

#[test]
fn test_section_headers_never_become_occupations() {
    let rows = vec![
        vec![1.into(), "1".into(), "MANAGERS".into()],
        data_row(2, "1120", "Managing director", [5000; 6].map(RawCell::from)),
        vec![3.into(), "2".into(), "PROFESSIONALS".into()],
        data_row(4, "2512", "Software developer", [4500; 6].map(RawCell::from)),
    ];
    let mut workbook = single_sheet_workbook("T4", rows);

    let table = aggregate([process_workbook(&mut workbook, 2023, "T4")]);

    assert_eq!(
        table.unique_occupations(),
        vec!["Managing director", "Software developer"]
    );
    assert!(
        table
            .records()
            .iter()
            .all(|r| r.occupation != "MANAGERS" && r.occupation != "PROFESSIONALS")
    );
}

#[test]
fn test_title_only_sheet_yields_nothing() {
    let mut workbook = MemoryWorkbook::new().with_sheet(
        "T4.1",
        vec![
            vec!["Table 4.1".into()],
            vec!["Note: figures exclude part-time employees".into()],
        ],
    );
    let table = aggregate([process_workbook(&mut workbook, 2022, "T4")]);
    assert!(table.is_empty());
}

#[test]
fn test_unreadable_sheet_does_not_lose_workbook() {
    let mut workbook = MemoryWorkbook::new()
        .with_unreadable_sheet("T4.1", "corrupt sheet xml")
        .with_sheet("T4.2", survey_sheet(vec![carpenter_row()]));

    let records = process_workbook(&mut workbook, 2021, "T4");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].industry, "Construction");
}

#[test]
fn test_duplicate_keys_across_workbooks_keep_first() {
    let mut original = single_sheet_workbook("T4.2", vec![carpenter_row()]);
    let mut reprint_row = carpenter_row();
    reprint_row[1] = "7115".into();
    reprint_row[4] = 9999.into();
    let mut reprint = single_sheet_workbook("T4.2", vec![reprint_row]);

    let table = aggregate([
        process_workbook(&mut original, 2022, "T4"),
        process_workbook(&mut reprint, 2022, "T4"),
    ]);

    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].ssoc_code, "7112");
    assert_eq!(table.records()[0].basic_median, Some(2800.0));
}

#[test]
fn test_ingestion_is_idempotent() {
    let build = || {
        let rows = vec![
            carpenter_row(),
            data_row(2, "7126", "Plumber", ["s", "2600", " S ", "x", "3100", ""].map(RawCell::from)),
            data_row(3, "5120", "Cook", [1800; 6].map(RawCell::from)),
        ];
        let mut a = single_sheet_workbook("T4.5", rows.clone());
        let mut b = single_sheet_workbook("T4", rows);
        aggregate([
            process_workbook(&mut a, 2024, "T4"),
            process_workbook(&mut b, 2023, "T4"),
        ])
    };

    let first = build();
    let second = build();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(first.records()).unwrap(),
        serde_json::to_string(second.records()).unwrap()
    );
}

#[test]
fn test_every_wage_is_missing_or_non_negative() {
    let rows = vec![
        data_row(1, "1", "Alpha worker", ["-5", "s", "", "abc", "12.5", "0"].map(RawCell::from)),
        data_row(
            2,
            "2",
            "Beta worker",
            [
                RawCell::Number(-1.0),
                RawCell::Number(f64::NAN),
                RawCell::Empty,
                RawCell::Number(300.0),
                "1e3".into(),
                "S".into(),
            ],
        ),
    ];
    let mut workbook = single_sheet_workbook("T4.9", rows);
    let table = aggregate([process_workbook(&mut workbook, 2022, "T4")]);

    assert_eq!(table.len(), 2);
    for record in table.records() {
        for value in record.wages().into_iter().flatten() {
            assert!(value.is_finite() && value >= 0.0);
        }
    }
    assert_eq!(table.records()[0].gross_median, Some(12.5));
    assert_eq!(table.records()[1].gross_median, Some(1000.0));
}
