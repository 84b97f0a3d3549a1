// Central place for UI strings, map geometry and gradient colors.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

use crate::interp::Rgb;

// Map geometry: 26 speed columns (0..12500 RPM), 21 load rows (0..100 %).
pub const MAP_COLUMNS: usize = 26;
pub const MAP_ROWS: usize = 21;
pub const MAP_RPM_STEP: usize = 500;
pub const MAP_LOAD_STEP: usize = 5;
pub const MAP_COLUMN_WIDTH: f32 = 40.0;

// Gradient stops.
pub const COLOR_GREEN: Rgb = Rgb::new(0, 128, 0);
pub const INJECTION_COLOR_LOW: Rgb = Rgb::new(104, 162, 255);
pub const INJECTION_COLOR_HIGH: Rgb = Rgb::new(255, 70, 61);
pub const ADVANCE_COLOR_LOW: Rgb = Rgb::new(66, 134, 244);
pub const ADVANCE_COLOR_HIGH: Rgb = Rgb::new(255, 158, 89);

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "MapEdit";

pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";
pub const EN_BTN_UNDO: &str = "Undo";
pub const EN_BTN_REDO: &str = "Redo";
pub const EN_BTN_CHANGES: &str = "Changes";

pub const EN_WINDOW_ABOUT: &str = "About";
pub const EN_WINDOW_CHANGES: &str = "Changes";

pub const EN_ABOUT_HEADING: &str = "MapEdit: engine map editor";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_ABOUT_SHORTCUTS: &str = "Shortcuts:";
pub const EN_ABOUT_SHORTCUT_UNDO: &str = "- Ctrl+Z: Undo";
pub const EN_ABOUT_SHORTCUT_REDO: &str = "- Ctrl+Y / Ctrl+Shift+Z: Redo";

pub const EN_HOME_HEADING: &str = "MapEdit";
pub const EN_HOME_INSTRUCTIONS: &str = "Select engine data or a map from the left to begin.";

pub const EN_HEADING_CATALOG: &str = "Data";
pub const EN_COL_PROPERTY: &str = "Property";
pub const EN_COL_VALUE: &str = "Value";
pub const EN_COL_LOAD: &str = "Load";

pub const EN_CHANGES_NONE: &str = "No changes yet.";

pub const EN_PREFIX_UNDO: &str = "Undo:";
pub const EN_PREFIX_REDO: &str = "Redo:";
pub const EN_STATUS_DISABLED: &str = "is not used while the lambda sensor is enabled";
pub const EN_HINT_DISABLED: &str =
    "Disabled: the lambda sensor is enabled, so the open loop injection map is not used.";

// Catalog.
pub const EN_CATEGORY_ENGINE: &str = "Engine";
pub const EN_CATEGORY_MAPS: &str = "Maps";
pub const EN_ENTITY_ENGINE_DATA: &str = "Engine data";
pub const EN_ENTITY_INJECTION_MAP: &str = "Fuel injection map";
pub const EN_ENTITY_ADVANCE_MAP: &str = "Spark advance map";

// Axis / value captions.
pub const EN_AXIS_DEFAULT_X: &str = "X Axis";
pub const EN_AXIS_DEFAULT_Y: &str = "Y Axis";
pub const EN_AXIS_DEFAULT_VALUE: &str = "Value";
pub const EN_AXIS_ENGINE_SPEED: &str = "Engine speed [RPM]";
pub const EN_AXIS_ENGINE_LOAD: &str = "Engine load [%]";
pub const EN_VALUE_INJECTOR_TIME: &str = "Injector time [ms]";
pub const EN_VALUE_SPARK_ADVANCE: &str = "Spark advance [Deg, 0 at TDC]";
