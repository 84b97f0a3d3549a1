use pretty_assertions::assert_eq;

use mapedit::{CellValue, GridSurface, Sheet};

#[test]
fn parses_user_input() {
    assert_eq!(CellValue::parse(""), CellValue::Empty);
    assert_eq!(CellValue::parse("   "), CellValue::Empty);
    assert_eq!(CellValue::parse("2.5"), CellValue::Number(2.5));
    assert_eq!(CellValue::parse(" -12 "), CellValue::Number(-12.0));
    assert_eq!(CellValue::parse("1e1"), CellValue::Number(10.0));
    assert_eq!(CellValue::parse("lean"), CellValue::Text("lean".to_string()));
}

#[test]
fn non_finite_input_stays_text() {
    assert_eq!(CellValue::parse("NaN"), CellValue::Text("NaN".to_string()));
    assert_eq!(CellValue::parse(" inf "), CellValue::Text("inf".to_string()));
    assert_eq!(CellValue::parse("-infinity"), CellValue::Text("-infinity".to_string()));
    assert_eq!(CellValue::parse("1e400"), CellValue::Text("1e400".to_string()));
    assert_eq!(CellValue::parse("NaN").as_number(), None);

    assert_eq!(
        CellValue::Number(f64::NAN).normalized(),
        CellValue::Text("NaN".to_string())
    );
    assert_eq!(CellValue::Number(2.5).normalized(), CellValue::Number(2.5));
}

#[test]
fn displays_like_it_was_entered() {
    assert_eq!(CellValue::Empty.to_string(), "");
    assert_eq!(CellValue::Number(1.21).to_string(), "1.21");
    assert_eq!(CellValue::Number(5.0).to_string(), "5");
    assert_eq!(CellValue::Text("n/a".to_string()).to_string(), "n/a");
}

#[test]
fn new_sheet_is_one_by_one() {
    let sheet = Sheet::new("t");
    assert_eq!(sheet.column_count(), 1);
    assert_eq!(sheet.row_count(), 1);
    assert_eq!(sheet.cell(0, 0), Some(&CellValue::Empty));
    assert_eq!(sheet.column_headers(), ["A".to_string()]);
    assert_eq!(sheet.row_headers(), ["1".to_string()]);
}

#[test]
fn resize_keeps_cells_in_place() {
    let mut sheet = Sheet::new("t");
    sheet.set_cell(0, 0, CellValue::Number(1.0));
    sheet.set_column_count(3);
    sheet.set_row_count(2);
    sheet.set_cell(2, 1, CellValue::Number(6.0));

    assert_eq!(sheet.cell(0, 0), Some(&CellValue::Number(1.0)));
    assert_eq!(sheet.cell(2, 1), Some(&CellValue::Number(6.0)));
    assert_eq!(sheet.cell(1, 1), Some(&CellValue::Empty));
    assert_eq!(sheet.column_headers(), ["A", "B", "C"]);

    sheet.set_column_count(1);
    assert_eq!(sheet.cell(0, 0), Some(&CellValue::Number(1.0)));
    assert_eq!(sheet.cell(2, 1), None);
}

#[test]
fn out_of_range_access_is_ignored() {
    let mut sheet = Sheet::new("t");
    sheet.set_cell(5, 5, CellValue::Number(1.0));
    sheet.set_column_header(5, "x".to_string());
    assert_eq!(sheet.cell(5, 5), None);
    assert_eq!(sheet.back_color(5, 5), None);
}

#[test]
fn default_column_headers_go_past_z() {
    let mut sheet = Sheet::new("t");
    sheet.set_column_count(28);
    assert_eq!(sheet.column_headers()[25], "Z");
    assert_eq!(sheet.column_headers()[26], "AA");
    assert_eq!(sheet.column_headers()[27], "AB");
}
