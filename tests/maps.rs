use pretty_assertions::assert_eq;

use mapedit::interp::Rgb;
use mapedit::{CellValue, EngineConfig, GridSurface, Sheet, TableKind, TunableTable, statics};

const W: usize = statics::MAP_COLUMNS;
const H: usize = statics::MAP_ROWS;

#[test]
fn injection_seed_matches_reference_cells() {
    let config = EngineConfig::default();
    let kind = TableKind::Injection;

    assert_eq!(kind.default_value(0, 0, W, H, &config), 1.21);
    assert_eq!(kind.default_value(5, 3, W, H, &config), 1.55);
    assert_eq!(kind.default_value(10, 10, W, H, &config), 2.38);
    // High speed and load saturate at the max pulse width.
    assert_eq!(kind.default_value(25, 20, W, H, &config), 5.0);
}

#[test]
fn reversed_pulse_bounds_pin_seeds_to_min_pulse_width() {
    let config = EngineConfig {
        min_pulse_width: 6.0,
        max_pulse_width: 5.0,
        ..EngineConfig::default()
    };
    let kind = TableKind::Injection;

    let mut sheet = Sheet::new(kind.sheet_title());
    kind.populate(&mut sheet, &config);
    for y in 0..H {
        for x in 0..W {
            assert_eq!(sheet.cell(x, y), Some(&CellValue::Number(6.0)), "cell ({x}, {y})");
        }
    }
    assert_eq!(
        kind.cell_color(&CellValue::Number(6.0), &config),
        Some(statics::COLOR_GREEN)
    );
}

#[test]
fn injection_seed_stays_within_pulse_bounds() {
    let config = EngineConfig {
        min_pulse_width: 2.0,
        max_pulse_width: 3.5,
        ..EngineConfig::default()
    };
    for y in 0..H {
        for x in 0..W {
            let v = TableKind::Injection.default_value(x, y, W, H, &config);
            assert!((2.0..=3.5).contains(&v), "({x}, {y}) = {v}");
        }
    }
}

#[test]
fn advance_seed_falls_with_rpm_only() {
    let config = EngineConfig::default();
    let kind = TableKind::Advance;

    assert_eq!(kind.default_value(0, 0, W, H, &config), 5.0);
    assert_eq!(kind.default_value(1, 0, W, H, &config), 4.04);
    assert_eq!(kind.default_value(13, 7, W, H, &config), -7.5);
    assert_eq!(kind.default_value(25, 0, W, H, &config), -19.04);
    assert_eq!(
        kind.default_value(25, 0, W, H, &config),
        kind.default_value(25, 20, W, H, &config)
    );
}

#[test]
fn populate_sets_geometry_headers_and_seeds() {
    let config = EngineConfig::default();
    let mut sheet = Sheet::new(TableKind::Advance.sheet_title());
    TableKind::Advance.populate(&mut sheet, &config);

    assert_eq!(sheet.title, "Engine speed [RPM] / Engine load [%]");
    assert_eq!(sheet.column_count(), 26);
    assert_eq!(sheet.row_count(), 21);
    assert_eq!(sheet.column_headers()[0], "0");
    assert_eq!(sheet.column_headers()[1], "500");
    assert_eq!(sheet.column_headers()[25], "12500");
    assert_eq!(sheet.row_headers()[0], "0 %");
    assert_eq!(sheet.row_headers()[20], "100 %");
    assert_eq!(sheet.cell(25, 20), Some(&CellValue::Number(-19.04)));
    assert_eq!(sheet.cell(26, 0), None);
}

#[test]
fn injection_colors_hit_stops_at_bounds_and_center() {
    let config = EngineConfig::default();
    let kind = TableKind::Injection;

    assert_eq!(
        kind.cell_color(&CellValue::Number(1.0), &config),
        Some(statics::INJECTION_COLOR_LOW)
    );
    assert_eq!(
        kind.cell_color(&CellValue::Number(3.0), &config),
        Some(statics::COLOR_GREEN)
    );
    assert_eq!(
        kind.cell_color(&CellValue::Number(5.0), &config),
        Some(statics::INJECTION_COLOR_HIGH)
    );
}

#[test]
fn advance_pivot_is_zero_not_domain_midpoint() {
    let config = EngineConfig::default();
    let kind = TableKind::Advance;

    assert_eq!(
        kind.cell_color(&CellValue::Number(0.0), &config),
        Some(statics::COLOR_GREEN)
    );
    assert_ne!(
        kind.cell_color(&CellValue::Number(-7.5), &config),
        Some(statics::COLOR_GREEN)
    );
    assert_eq!(
        kind.cell_color(&CellValue::Number(-20.0), &config),
        Some(statics::ADVANCE_COLOR_LOW)
    );
    assert_eq!(
        kind.cell_color(&CellValue::Number(-10.0), &config),
        Some(Rgb::new(33, 131, 122))
    );
    // Values past the domain saturate at the outer stops.
    assert_eq!(
        kind.cell_color(&CellValue::Number(12.0), &config),
        Some(statics::ADVANCE_COLOR_HIGH)
    );
    assert_eq!(
        kind.cell_color(&CellValue::Number(-45.0), &config),
        Some(statics::ADVANCE_COLOR_LOW)
    );
}

#[test]
fn non_numeric_cells_are_transparent() {
    let config = EngineConfig::default();
    for kind in TableKind::ALL {
        assert_eq!(kind.cell_color(&CellValue::Empty, &config), None);
        assert_eq!(
            kind.cell_color(&CellValue::Text("rich".to_string()), &config),
            None
        );
    }
}

#[test]
fn injection_colors_follow_pulse_width_config() {
    let config = EngineConfig {
        min_pulse_width: 2.0,
        max_pulse_width: 4.0,
        ..EngineConfig::default()
    };
    assert_eq!(
        TableKind::Injection.cell_color(&CellValue::Number(3.0), &config),
        Some(statics::COLOR_GREEN)
    );
    assert_eq!(
        TableKind::Injection.cell_color(&CellValue::Number(2.0), &config),
        Some(statics::INJECTION_COLOR_LOW)
    );
}

#[test]
fn table_is_seeded_once_and_keeps_edits() {
    let mut config = EngineConfig::default();
    let mut table = TunableTable::new(TableKind::Injection);
    assert!(!table.is_populated());

    let sheet = table.show(&config);
    assert_eq!(sheet.cell(0, 0), Some(&CellValue::Number(1.21)));
    assert!(sheet.back_color(0, 0).is_some());
    sheet.set_cell(0, 0, CellValue::Number(4.5));
    sheet.set_cell(1, 0, CellValue::Text("n/a".to_string()));

    // A config change must not reseed, only recolor.
    config.max_pulse_width = 9.0;
    let sheet = table.show(&config);
    assert_eq!(sheet.cell(0, 0), Some(&CellValue::Number(4.5)));
    assert_eq!(
        sheet.back_color(0, 0),
        TableKind::Injection.cell_color(&CellValue::Number(4.5), &config)
    );
    assert_eq!(sheet.back_color(1, 0), None);
}

#[test]
fn disabled_predicate_tracks_lambda_sensor() {
    let mut config = EngineConfig::default();
    assert!(TableKind::Injection.is_enabled(&config));
    assert!(TableKind::Advance.is_enabled(&config));

    config.lambda_enabled = true;
    assert!(!TableKind::Injection.is_enabled(&config));
    assert!(TableKind::Advance.is_enabled(&config));
}

#[test]
fn labels_and_placeholders() {
    assert_eq!(TableKind::Injection.value_name(), "Injector time [ms]");
    assert_eq!(TableKind::Advance.value_name(), "Spark advance [Deg, 0 at TDC]");
    assert_eq!(TableKind::Injection.placeholder(), 10.0);
    assert_eq!(TableKind::Advance.placeholder(), -2.0);
}
