//! Engine configuration constants and the descriptor table the property view binds to.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    Basic,
    RevLimiter,
    Lambda,
    FuelInjector,
}

impl FieldCategory {
    pub const ALL: [FieldCategory; 4] = [
        FieldCategory::Basic,
        FieldCategory::RevLimiter,
        FieldCategory::Lambda,
        FieldCategory::FuelInjector,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldCategory::Basic => "Basic",
            FieldCategory::RevLimiter => "Rev limiter",
            FieldCategory::Lambda => "Lambda",
            FieldCategory::FuelInjector => "Fuel injector",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Bool,
    Float,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Int => "int",
            FieldKind::Bool => "bool",
            FieldKind::Float => "float",
        };
        f.write_str(s)
    }
}

/// A typed field value as read from or written to [`EngineConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Int(i32),
    Bool(bool),
    Float(f32),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Float(_) => FieldKind::Float,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("unknown engine field '{0}'")]
    Unknown(String),
    #[error("engine field '{0}' is calculated and cannot be edited")]
    ReadOnly(&'static str),
    #[error("engine field '{field}' expects {expected}, got {found}")]
    KindMismatch {
        field: &'static str,
        expected: FieldKind,
        found: FieldKind,
    },
}

/// Static metadata for one editable row of the property view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub category: FieldCategory,
    pub description: &'static str,
    pub kind: FieldKind,
    pub read_only: bool,
}

const fn field(
    name: &'static str,
    category: FieldCategory,
    kind: FieldKind,
    description: &'static str,
) -> FieldDescriptor {
    FieldDescriptor {
        name,
        category,
        description,
        kind,
        read_only: false,
    }
}

/// Engine-wide constants shared (read-only) by the tuning maps.
///
/// `max_pulse_width > min_pulse_width` is assumed; reversed bounds are accepted
/// and simply invert the injection map gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub cylinders: i32,
    pub displacement: i32,

    pub enable_rev_limit: bool,
    pub rev_limit: i32,
    pub rev_limit_stop: i32,

    pub lambda_enabled: bool,
    pub lambda_start: f32,
    pub lambda_end: f32,
    pub lambda_ratio_bottom: f32,
    pub lambda_ratio_top: f32,

    pub min_pulse_width: f32,
    pub max_pulse_width: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cylinders: 1,
            displacement: 200,
            enable_rev_limit: true,
            rev_limit: 11000,
            rev_limit_stop: 10950,
            lambda_enabled: false,
            lambda_start: 0.1,
            lambda_end: 0.9,
            lambda_ratio_bottom: 6.0,
            lambda_ratio_top: 17.0,
            min_pulse_width: 1.0,
            max_pulse_width: 5.0,
        }
    }
}

impl EngineConfig {
    pub const FIELDS: &'static [FieldDescriptor] = &[
        field("Cylinders", FieldCategory::Basic, FieldKind::Int, "Number of cylinders"),
        field(
            "Displacement",
            FieldCategory::Basic,
            FieldKind::Int,
            "Engine displacement [cm^3]",
        ),
        field(
            "EnableRevLimit",
            FieldCategory::RevLimiter,
            FieldKind::Bool,
            "Enable limiter",
        ),
        field(
            "RevLimit",
            FieldCategory::RevLimiter,
            FieldKind::Int,
            "RPM above which the rev limiter activates [RPM]",
        ),
        field(
            "RevLimitStop",
            FieldCategory::RevLimiter,
            FieldKind::Int,
            "RPM below which the rev limiter deactivates [RPM]",
        ),
        field(
            "LambdaEnabled",
            FieldCategory::Lambda,
            FieldKind::Bool,
            "Enable lambda sensor. If disabled, open loop fuel injection map is used.",
        ),
        field("LambdaStart", FieldCategory::Lambda, FieldKind::Float, "Sensor min voltage"),
        field("LambdaEnd", FieldCategory::Lambda, FieldKind::Float, "Sensor max voltage"),
        field(
            "LambdaRatioBottom",
            FieldCategory::Lambda,
            FieldKind::Float,
            "Sensor min A/F ratio",
        ),
        field(
            "LambdaRatioTop",
            FieldCategory::Lambda,
            FieldKind::Float,
            "Sensor max A/F ratio",
        ),
        field(
            "MinPulseWidth",
            FieldCategory::FuelInjector,
            FieldKind::Float,
            "Minimum allowed injector pulse width [ms]",
        ),
        field(
            "MaxPulseWidth",
            FieldCategory::FuelInjector,
            FieldKind::Float,
            "Maximum allowed injector pulse width [ms]",
        ),
        FieldDescriptor {
            name: "PulseRange",
            category: FieldCategory::FuelInjector,
            description: "Calculated injector pulse range [ms]",
            kind: FieldKind::Float,
            read_only: true,
        },
    ];

    pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|d| d.name == name)
    }

    /// Descriptors of one category, in declaration order.
    pub fn fields_in(category: FieldCategory) -> impl Iterator<Item = &'static FieldDescriptor> {
        Self::FIELDS.iter().filter(move |d| d.category == category)
    }

    pub fn pulse_range(&self) -> f32 {
        self.max_pulse_width - self.min_pulse_width
    }

    pub fn get(&self, name: &str) -> Option<FieldValue> {
        let v = match name {
            "Cylinders" => FieldValue::Int(self.cylinders),
            "Displacement" => FieldValue::Int(self.displacement),
            "EnableRevLimit" => FieldValue::Bool(self.enable_rev_limit),
            "RevLimit" => FieldValue::Int(self.rev_limit),
            "RevLimitStop" => FieldValue::Int(self.rev_limit_stop),
            "LambdaEnabled" => FieldValue::Bool(self.lambda_enabled),
            "LambdaStart" => FieldValue::Float(self.lambda_start),
            "LambdaEnd" => FieldValue::Float(self.lambda_end),
            "LambdaRatioBottom" => FieldValue::Float(self.lambda_ratio_bottom),
            "LambdaRatioTop" => FieldValue::Float(self.lambda_ratio_top),
            "MinPulseWidth" => FieldValue::Float(self.min_pulse_width),
            "MaxPulseWidth" => FieldValue::Float(self.max_pulse_width),
            "PulseRange" => FieldValue::Float(self.pulse_range()),
            _ => return None,
        };
        Some(v)
    }

    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        let desc = Self::descriptor(name).ok_or_else(|| FieldError::Unknown(name.to_string()))?;
        if desc.read_only {
            return Err(FieldError::ReadOnly(desc.name));
        }
        if desc.kind != value.kind() {
            return Err(FieldError::KindMismatch {
                field: desc.name,
                expected: desc.kind,
                found: value.kind(),
            });
        }

        match (desc.name, value) {
            ("Cylinders", FieldValue::Int(v)) => self.cylinders = v,
            ("Displacement", FieldValue::Int(v)) => self.displacement = v,
            ("EnableRevLimit", FieldValue::Bool(v)) => self.enable_rev_limit = v,
            ("RevLimit", FieldValue::Int(v)) => self.rev_limit = v,
            ("RevLimitStop", FieldValue::Int(v)) => self.rev_limit_stop = v,
            ("LambdaEnabled", FieldValue::Bool(v)) => self.lambda_enabled = v,
            ("LambdaStart", FieldValue::Float(v)) => self.lambda_start = v,
            ("LambdaEnd", FieldValue::Float(v)) => self.lambda_end = v,
            ("LambdaRatioBottom", FieldValue::Float(v)) => self.lambda_ratio_bottom = v,
            ("LambdaRatioTop", FieldValue::Float(v)) => self.lambda_ratio_top = v,
            ("MinPulseWidth", FieldValue::Float(v)) => self.min_pulse_width = v,
            ("MaxPulseWidth", FieldValue::Float(v)) => self.max_pulse_width = v,
            // Descriptor table and this match are kept in sync by the tests.
            _ => return Err(FieldError::Unknown(name.to_string())),
        }
        Ok(())
    }
}
