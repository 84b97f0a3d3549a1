//! Core library for MapEdit, an editor for engine fuel injection and spark advance maps.
//! Provides the interpolation/coloring formulas, the engine config model, the map sheets
//! and the editor session that the egui front end drives.

pub mod config;
pub mod entity;
mod gui;
pub mod interp;
pub mod sheet;
pub mod statics;
pub mod table;
pub mod workspace;

pub use config::{EngineConfig, FieldError, FieldValue};
pub use entity::{Catalog, EditMode, EntityId};
pub use gui::run_gui;
pub use sheet::{CellValue, GridSurface, Sheet};
pub use table::{TableKind, TunableTable};
pub use workspace::{Selection, View, Workspace};
