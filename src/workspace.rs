//! Editor session state: the shared engine config, both maps, the active view and
//! the undo history. The GUI holds one `Workspace` and drives it with selection
//! and edit events.

use crate::config::{EngineConfig, FieldError, FieldValue};
use crate::entity::{Catalog, EditMode, EntityId};
use crate::sheet::{CellValue, GridSurface, Sheet};
use crate::table::{TableKind, TunableTable};

/// What the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    NoSelection,
    Properties(EntityId),
    Grid(TableKind),
}

impl View {
    pub fn entity(self) -> Option<EntityId> {
        match self {
            View::NoSelection => None,
            View::Properties(id) => Some(id),
            View::Grid(kind) => Some(EntityId::Table(kind)),
        }
    }
}

/// Result of a catalog selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Shown,
    /// The entity is unusable under the current config; the view did not change.
    Disabled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    Cell {
        table: TableKind,
        x: usize,
        y: usize,
        before: CellValue,
        after: CellValue,
    },
    Field {
        name: &'static str,
        before: FieldValue,
        after: FieldValue,
    },
}

impl EditAction {
    pub fn target(&self) -> EntityId {
        match self {
            EditAction::Cell { table, .. } => EntityId::Table(*table),
            EditAction::Field { .. } => EntityId::Engine,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            EditAction::Cell {
                table,
                x,
                y,
                before,
                after,
            } => {
                let name = EntityId::Table(*table).descriptor().display_name;
                format!("{name} [{x}, {y}]: '{before}' -> '{after}'")
            }
            EditAction::Field {
                name,
                before,
                after,
            } => format!("{name}: {before} -> {after}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: EngineConfig,
    tables: [TunableTable; 2],
    view: View,
    catalog: Catalog,
    undo_stack: Vec<EditAction>,
    redo_stack: Vec<EditAction>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn slot(kind: TableKind) -> usize {
    match kind {
        TableKind::Injection => 0,
        TableKind::Advance => 1,
    }
}

impl Workspace {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            tables: [
                TunableTable::new(TableKind::Injection),
                TunableTable::new(TableKind::Advance),
            ],
            view: View::NoSelection,
            catalog: Catalog::new(&EntityId::ALL),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn table(&self, kind: TableKind) -> &TunableTable {
        &self.tables[slot(kind)]
    }

    /// The sheet of the table currently on screen, if any.
    pub fn active_sheet(&self) -> Option<&Sheet> {
        match self.view {
            View::Grid(kind) => self.table(kind).sheet(),
            _ => None,
        }
    }

    pub fn undo_history(&self) -> &[EditAction] {
        &self.undo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Switches the active entity.
    ///
    /// Grid entities are seeded on first display and recolored on every display.
    /// Disabled entities leave the current view untouched.
    pub fn select(&mut self, id: EntityId) -> Selection {
        if !id.is_enabled(&self.config) {
            log::debug!("{id:?} is disabled under the current config, keeping {:?}", self.view);
            return Selection::Disabled;
        }

        self.view = match (id.edit_mode(), id) {
            (EditMode::Grid, EntityId::Table(kind)) => {
                let table = &mut self.tables[slot(kind)];
                let first = !table.is_populated();
                table.show(&self.config);
                log::debug!("showing {kind:?} map (first display: {first})");
                View::Grid(kind)
            }
            (EditMode::Property, _) => {
                log::debug!("showing properties of {id:?}");
                View::Properties(id)
            }
            (EditMode::Grid, EntityId::Engine) => {
                unreachable!("engine data is a property entity")
            }
        };
        Selection::Shown
    }

    /// Recolors the visible map, e.g. after the grid was clicked.
    pub fn refresh_active(&mut self) {
        if let View::Grid(kind) = self.view {
            self.tables[slot(kind)].recolor(&self.config);
        }
    }

    /// Commits a cell edit. Returns `false` when the map is not built yet, the
    /// coordinates are outside the grid, or the value is unchanged.
    pub fn edit_cell(&mut self, table: TableKind, x: usize, y: usize, value: CellValue) -> bool {
        let value = value.normalized();
        let Some(sheet) = self.tables[slot(table)].sheet_mut() else {
            return false;
        };
        let Some(before) = sheet.cell(x, y).cloned() else {
            return false;
        };
        if before == value {
            return false;
        }

        sheet.set_cell(x, y, value.clone());
        self.tables[slot(table)].recolor(&self.config);

        let action = EditAction::Cell {
            table,
            x,
            y,
            before,
            after: value,
        };
        log::info!("{}", action.describe());
        self.record(action);
        true
    }

    /// Writes an engine field through the descriptor table. Returns `Ok(false)`
    /// when the value is unchanged.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<bool, FieldError> {
        let before = self.set_field_untracked(name, value)?;
        Ok(self.record_field_change(name, before))
    }

    /// Writes an engine field without touching the history and returns the
    /// previous value. Used while a drag is in progress.
    pub fn set_field_untracked(
        &mut self,
        name: &str,
        value: FieldValue,
    ) -> Result<FieldValue, FieldError> {
        let before = self
            .config
            .get(name)
            .ok_or_else(|| FieldError::Unknown(name.to_string()))?;
        if let Err(e) = self.config.set(name, value) {
            log::warn!("rejected edit: {e}");
            return Err(e);
        }
        Ok(before)
    }

    /// Records one history entry taking `name` from `before` to its current
    /// value. Returns `false` when nothing changed or the field is unknown.
    pub fn record_field_change(&mut self, name: &str, before: FieldValue) -> bool {
        let Some(desc) = EngineConfig::descriptor(name) else {
            return false;
        };
        let Some(after) = self.config.get(desc.name) else {
            return false;
        };
        if before == after {
            return false;
        }

        let action = EditAction::Field {
            name: desc.name,
            before,
            after,
        };
        log::info!("{}", action.describe());
        self.record(action);
        true
    }

    fn record(&mut self, action: EditAction) {
        self.undo_stack.push(action);
        self.redo_stack.clear();
    }

    /// Reverts the last edit and navigates to the entity it touched.
    pub fn undo(&mut self) -> Option<String> {
        let action = self.undo_stack.pop()?;
        self.apply(&action, false);
        let description = action.describe();
        log::info!("undo {description}");
        self.redo_stack.push(action);
        Some(description)
    }

    pub fn redo(&mut self) -> Option<String> {
        let action = self.redo_stack.pop()?;
        self.apply(&action, true);
        let description = action.describe();
        log::info!("redo {description}");
        self.undo_stack.push(action);
        Some(description)
    }

    fn apply(&mut self, action: &EditAction, use_after: bool) {
        match action {
            EditAction::Cell {
                table,
                x,
                y,
                before,
                after,
            } => {
                let value = if use_after { after } else { before };
                if let Some(sheet) = self.tables[slot(*table)].sheet_mut() {
                    sheet.set_cell(*x, *y, value.clone());
                }
            }
            EditAction::Field {
                name,
                before,
                after,
            } => {
                let value = if use_after { *after } else { *before };
                if let Err(e) = self.config.set(name, value) {
                    log::warn!("could not restore {name}: {e}");
                }
            }
        }

        // Navigation recolors grids; a disabled target keeps the current view.
        if self.select(action.target()) == Selection::Disabled {
            self.refresh_active();
        }
    }
}
