use chrono::NaiveDate;
use prdlog::core::read::read_table;
use prdlog::core::schema::Delimiter;
use prdlog::core::view::{Filter, ProductionView};
use prdlog::models::columns as col;

const TABLE: &str = "\
timestamp;operator;date;material-code;description;cycle-number;machine;program-number;machine-folder;phase;time-in-phase-minutes;notes
2025-03-01 08:00:00;LUCA;2025-03-01;AB-100;Flange steel;1;HURCO;P1;WASS;Phase 1;1:30:00;n1
2025-03-02 09:00:00;MICHELE;2025-03-02;ab-200;Shaft;2;QUASER;P2;EL.EN;Phase 2;0:45:00;n2
not a date;LUCA;2025-03-02;XY-300;flange cover;3;HURCO;P3;DUMAREY;Setup;2:00:00;n3
2025-03-03 07:00:00;LUCA;2025-03-03;AB-400;Bracket;4;HURCO;P4;wass;Phase 1;;n4
";

fn view() -> ProductionView {
    ProductionView::from_dataset(read_table(TABLE.as_bytes()).unwrap())
}

#[test]
fn test_view_normalizes_and_orders_columns() {
    let v = view();

    assert_eq!(v.delimiter, Delimiter::Semicolon);
    let mut expected = col::display_order();
    expected.push("notes".to_string());
    assert_eq!(v.columns, expected);

    assert_eq!(v.minutes, vec![Some(90), Some(45), Some(120), None]);
    assert_eq!(v.cell(&v.rows[0], col::TIME_IN_PHASE_MINUTES), "90");
    assert_eq!(v.cell(&v.rows[0], col::TIME_IN_PHASE_DISPLAY), "01:30");
    assert_eq!(v.cell(&v.rows[3], col::TIME_IN_PHASE_MINUTES), "");
    assert_eq!(v.total_minutes(), 255);
}

#[test]
fn test_filter_sorts_newest_first_and_puts_bad_timestamps_last() {
    let v = view().filtered(&Filter::default());
    let cycles: Vec<&str> = v.rows.iter().map(|r| v.cell(r, col::CYCLE_NUMBER)).collect();
    assert_eq!(cycles, vec!["4", "2", "1", "3"]);
    assert_eq!(v.minutes, vec![None, Some(45), Some(90), Some(120)]);
}

#[test]
fn test_filter_criteria() {
    let v = view();

    let by_operator = v.filtered(&Filter {
        operator: Some("LUCA".into()),
        ..Filter::default()
    });
    assert_eq!(by_operator.len(), 3);

    let by_code = v.filtered(&Filter {
        material_code: Some("AB".into()),
        ..Filter::default()
    });
    assert_eq!(by_code.len(), 3);

    let by_description = v.filtered(&Filter {
        description: Some("FLANGE".into()),
        ..Filter::default()
    });
    assert_eq!(by_description.len(), 2);

    let by_folder = v.filtered(&Filter {
        machine_folder: Some("Wass".into()),
        ..Filter::default()
    });
    assert_eq!(by_folder.len(), 2);

    let by_date = v.filtered(&Filter {
        date: NaiveDate::from_ymd_opt(2025, 3, 2),
        operator: Some("LUCA".into()),
        ..Filter::default()
    });
    assert_eq!(by_date.len(), 1);
    assert_eq!(by_date.cell(&by_date.rows[0], col::MATERIAL_CODE), "XY-300");
}

#[test]
fn test_filter_on_missing_column_is_ignored() {
    let ds = read_table(b"phase,minutes,hours\nA,10,1\nB,5,0\n").unwrap();
    let v = ProductionView::from_dataset(ds);

    assert_eq!(v.delimiter, Delimiter::Comma);
    assert_eq!(v.minutes, vec![Some(70), Some(5)]);

    let f = v.filtered(&Filter {
        operator: Some("NOBODY".into()),
        ..Filter::default()
    });
    assert_eq!(f.len(), 2);
}

#[test]
fn test_read_table_falls_back_to_other_delimiter() {
    // ';' is sniffed, but the row is wider than the header with it
    let ds = read_table(b"x;y\n1;2;3\n").unwrap();
    assert_eq!(ds.delimiter, Delimiter::Comma);
    assert_eq!(ds.columns, vec!["x;y"]);
    assert_eq!(ds.rows, vec![vec!["1;2;3"]]);
}

#[test]
fn test_read_table_pads_short_rows() {
    let ds = read_table(b"a;b;c\n1\n").unwrap();
    assert_eq!(ds.rows, vec![vec!["1", "", ""]]);
    assert!(read_table(b"").unwrap().is_empty());
}

#[test]
fn test_total_minutes_saturates_on_huge_row() {
    let ds = read_table(b"time-in-phase-minutes\n1e300\n5\n").unwrap();
    let v = ProductionView::from_dataset(ds).filtered(&Filter::default());

    assert_eq!(v.minutes, vec![Some(i64::MAX), Some(5)]);
    assert_eq!(v.total_minutes(), i64::MAX);
}

#[test]
fn test_minutes_column_in_other_case_takes_canonical_name_and_place() {
    let ds = read_table(b"TIME-IN-PHASE-MINUTES;timestamp\n45;2025-01-01 10:00:00\n").unwrap();
    let v = ProductionView::from_dataset(ds);

    assert_eq!(
        v.columns,
        vec![
            col::TIMESTAMP.to_string(),
            col::TIME_IN_PHASE_MINUTES.to_string(),
            col::TIME_IN_PHASE_DISPLAY.to_string(),
        ]
    );
    assert_eq!(v.cell(&v.rows[0], col::TIME_IN_PHASE_MINUTES), "45");
    assert_eq!(v.cell(&v.rows[0], col::TIME_IN_PHASE_DISPLAY), "00:45");
}
