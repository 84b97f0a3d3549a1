//! The two tuning maps: seed formulas, color formulas and the lazily built sheet.

use crate::config::EngineConfig;
use crate::interp::{self, Rgb};
use crate::sheet::{CellValue, GridSurface, Sheet};
use crate::statics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Injection,
    Advance,
}

/// Where a three-stop gradient puts its middle stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientPolicy {
    /// Halfway between the domain bounds.
    ArithmeticCenter,
    /// A fixed value, independent of the domain bounds.
    FixedPivot(f64),
}

impl GradientPolicy {
    fn center(self) -> Option<f64> {
        match self {
            GradientPolicy::ArithmeticCenter => None,
            GradientPolicy::FixedPivot(p) => Some(p),
        }
    }
}

/// Three color stops, the value domain they span, and where the middle stop sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub low: Rgb,
    pub mid: Rgb,
    pub high: Rgb,
    pub min: f64,
    pub max: f64,
    pub policy: GradientPolicy,
}

impl Gradient {
    pub fn color_at(&self, value: f64) -> Rgb {
        interp::lerp_color3_range(
            self.low,
            self.mid,
            self.high,
            self.min,
            self.max,
            value,
            self.policy.center(),
        )
    }
}

impl TableKind {
    pub const ALL: [TableKind; 2] = [TableKind::Injection, TableKind::Advance];

    pub fn x_name(self) -> &'static str {
        statics::EN_AXIS_ENGINE_SPEED
    }

    pub fn y_name(self) -> &'static str {
        statics::EN_AXIS_ENGINE_LOAD
    }

    pub fn value_name(self) -> &'static str {
        match self {
            TableKind::Injection => statics::EN_VALUE_INJECTOR_TIME,
            TableKind::Advance => statics::EN_VALUE_SPARK_ADVANCE,
        }
    }

    /// Placeholder value a cell would hold without a seed formula.
    pub fn placeholder(self) -> f64 {
        match self {
            TableKind::Injection => 10.0,
            TableKind::Advance => -2.0,
        }
    }

    pub fn sheet_title(self) -> String {
        format!("{} / {}", self.x_name(), self.y_name())
    }

    /// Whether the map is used under the current configuration.
    ///
    /// With a lambda sensor the injection time comes from closed-loop control,
    /// so the open-loop injection map is not editable.
    pub fn is_enabled(self, config: &EngineConfig) -> bool {
        match self {
            TableKind::Injection => !config.lambda_enabled,
            TableKind::Advance => true,
        }
    }

    /// Seed value for column `x`, row `y` of a `w` x `h` grid.
    pub fn default_value(self, x: usize, y: usize, w: usize, h: usize, config: &EngineConfig) -> f64 {
        let wp = x as f64 / w as f64;
        let hp = y as f64 / h as f64;

        match self {
            TableKind::Injection => {
                let min = f64::from(config.min_pulse_width);
                let max = f64::from(config.max_pulse_width);
                let wp = wp + 0.25;
                let hp = hp + 0.3;
                let v = interp::lerp(min, max, wp * hp * 0.7);
                interp::round_to(interp::clamp(v, min, max), 2)
            }
            TableKind::Advance => {
                let v = 5.0 - 25.0 * wp;
                interp::round_to(interp::clamp(v, -30.0, 30.0), 2)
            }
        }
    }

    pub fn gradient(self, config: &EngineConfig) -> Gradient {
        match self {
            TableKind::Injection => Gradient {
                low: statics::INJECTION_COLOR_LOW,
                mid: statics::COLOR_GREEN,
                high: statics::INJECTION_COLOR_HIGH,
                min: f64::from(config.min_pulse_width),
                max: f64::from(config.max_pulse_width),
                policy: GradientPolicy::ArithmeticCenter,
            },
            TableKind::Advance => Gradient {
                low: statics::ADVANCE_COLOR_LOW,
                mid: statics::COLOR_GREEN,
                high: statics::ADVANCE_COLOR_HIGH,
                min: -20.0,
                max: 5.0,
                policy: GradientPolicy::FixedPivot(0.0),
            },
        }
    }

    /// Background for a cell holding `value`; `None` means transparent.
    pub fn cell_color(self, value: &CellValue, config: &EngineConfig) -> Option<Rgb> {
        value.as_number().map(|v| self.gradient(config).color_at(v))
    }

    /// Sizes the surface, writes axis headers and fills every cell with its seed.
    pub fn populate(self, surface: &mut impl GridSurface, config: &EngineConfig) {
        surface.set_column_count(statics::MAP_COLUMNS);
        for x in 0..statics::MAP_COLUMNS {
            surface.set_column_header(x, format!("{}", x * statics::MAP_RPM_STEP));
        }
        surface.set_row_count(statics::MAP_ROWS);
        for y in 0..statics::MAP_ROWS {
            surface.set_row_header(y, format!("{} %", y * statics::MAP_LOAD_STEP));
        }

        let (w, h) = (surface.column_count(), surface.row_count());
        for y in 0..h {
            for x in 0..w {
                let v = self.default_value(x, y, w, h, config);
                surface.set_cell(x, y, CellValue::Number(v));
            }
        }
        log::debug!("populated {:?} map ({w}x{h})", self);
    }

    /// Full recolor pass over every cell of the surface.
    pub fn color_surface(self, surface: &mut impl GridSurface, config: &EngineConfig) {
        let gradient = self.gradient(config);
        for y in 0..surface.row_count() {
            for x in 0..surface.column_count() {
                let color = surface
                    .cell(x, y)
                    .and_then(CellValue::as_number)
                    .map(|v| gradient.color_at(v));
                surface.set_back_color(x, y, color);
            }
        }
    }
}

/// A tuning map whose sheet is built on first display and kept for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct TunableTable {
    pub kind: TableKind,
    sheet: Option<Sheet>,
}

impl TunableTable {
    pub fn new(kind: TableKind) -> Self {
        Self { kind, sheet: None }
    }

    pub fn is_populated(&self) -> bool {
        self.sheet.is_some()
    }

    pub fn sheet(&self) -> Option<&Sheet> {
        self.sheet.as_ref()
    }

    pub fn sheet_mut(&mut self) -> Option<&mut Sheet> {
        self.sheet.as_mut()
    }

    /// Returns the sheet, seeding it first if it was never built, and recolors it.
    pub fn show(&mut self, config: &EngineConfig) -> &mut Sheet {
        let kind = self.kind;
        let sheet = self.sheet.get_or_insert_with(|| {
            let mut sheet = Sheet::new(kind.sheet_title());
            kind.populate(&mut sheet, config);
            sheet
        });
        kind.color_surface(sheet, config);
        sheet
    }

    /// Recolors the existing sheet; no-op before the first display.
    pub fn recolor(&mut self, config: &EngineConfig) {
        if let Some(sheet) = self.sheet.as_mut() {
            self.kind.color_surface(sheet, config);
        }
    }
}
