use pretty_assertions::assert_eq;

use mapedit::config::{FieldCategory, FieldKind};
use mapedit::{EngineConfig, FieldError, FieldValue};

#[test]
fn defaults_match_stock_engine() {
    let c = EngineConfig::default();
    assert_eq!(c.cylinders, 1);
    assert_eq!(c.displacement, 200);
    assert!(c.enable_rev_limit);
    assert_eq!(c.rev_limit, 11000);
    assert_eq!(c.rev_limit_stop, 10950);
    assert!(!c.lambda_enabled);
    assert_eq!(c.min_pulse_width, 1.0);
    assert_eq!(c.max_pulse_width, 5.0);
    assert_eq!(c.pulse_range(), 4.0);
}

#[test]
fn every_descriptor_is_readable_with_its_kind() {
    let c = EngineConfig::default();
    for desc in EngineConfig::FIELDS {
        let v = c
            .get(desc.name)
            .unwrap_or_else(|| panic!("{} not readable", desc.name));
        assert_eq!(v.kind(), desc.kind, "{}", desc.name);
    }
    assert_eq!(c.get("Boost"), None);
}

#[test]
fn every_writable_descriptor_round_trips() {
    let mut c = EngineConfig::default();
    for desc in EngineConfig::FIELDS.iter().filter(|d| !d.read_only) {
        let v = match desc.kind {
            FieldKind::Int => FieldValue::Int(7),
            FieldKind::Bool => FieldValue::Bool(!matches!(c.get(desc.name), Some(FieldValue::Bool(true)))),
            FieldKind::Float => FieldValue::Float(2.5),
        };
        c.set(desc.name, v).expect("writable field");
        assert_eq!(c.get(desc.name), Some(v), "{}", desc.name);
    }
}

#[test]
fn categories_group_fields_in_declaration_order() {
    let names = |cat| {
        EngineConfig::fields_in(cat)
            .map(|d| d.name)
            .collect::<Vec<_>>()
    };
    assert_eq!(names(FieldCategory::Basic), vec!["Cylinders", "Displacement"]);
    assert_eq!(
        names(FieldCategory::RevLimiter),
        vec!["EnableRevLimit", "RevLimit", "RevLimitStop"]
    );
    assert_eq!(
        names(FieldCategory::FuelInjector),
        vec!["MinPulseWidth", "MaxPulseWidth", "PulseRange"]
    );
    let total: usize = FieldCategory::ALL.iter().map(|c| names(*c).len()).sum();
    assert_eq!(total, EngineConfig::FIELDS.len());
}

#[test]
fn pulse_range_is_derived_and_read_only() {
    let mut c = EngineConfig::default();
    c.set("MaxPulseWidth", FieldValue::Float(7.5)).expect("float field");
    assert_eq!(c.get("PulseRange"), Some(FieldValue::Float(6.5)));

    assert_eq!(
        c.set("PulseRange", FieldValue::Float(1.0)),
        Err(FieldError::ReadOnly("PulseRange"))
    );
}

#[test]
fn bad_writes_are_rejected() {
    let mut c = EngineConfig::default();
    assert_eq!(
        c.set("Turbo", FieldValue::Bool(true)),
        Err(FieldError::Unknown("Turbo".to_string()))
    );
    assert_eq!(
        c.set("RevLimit", FieldValue::Float(9000.0)),
        Err(FieldError::KindMismatch {
            field: "RevLimit",
            expected: FieldKind::Int,
            found: FieldKind::Float,
        })
    );
    assert_eq!(c, EngineConfig::default());
    assert_eq!(
        FieldError::ReadOnly("PulseRange").to_string(),
        "engine field 'PulseRange' is calculated and cannot be edited"
    );
}

#[test]
fn reversed_pulse_bounds_are_accepted() {
    let mut c = EngineConfig::default();
    c.set("MinPulseWidth", FieldValue::Float(6.0)).expect("no validation layer");
    assert_eq!(c.pulse_range(), -1.0);
}
