use crate::config::{EngineConfig, FieldCategory, FieldDescriptor, FieldValue};
use crate::entity::EntityId;
use crate::interp::Rgb;
use crate::sheet::{CellValue, GridSurface, Sheet};
use crate::statics;
use crate::table::TableKind;
use crate::workspace::{Selection, View, Workspace};
use eframe::egui;
use egui_extras::{Column, TableBuilder};

pub fn run_gui() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| {
            Ok(Box::new(MapEditApp {
                theme_dark: true,
                ..Default::default()
            }))
        }),
    )
}

/// The main application state and GUI logic.
/// Owns the Workspace (config, maps, history) plus transient UI state.
#[derive(Default)]
struct MapEditApp {
    workspace: Workspace,
    status: String,
    editing: Option<CellEditor>,
    /// Field being dragged and its value when the drag began.
    field_gesture: Option<(&'static str, FieldValue)>,
    about_open: bool,
    changes_open: bool,
    theme_dark: bool,
}

/// In-progress text edit of one map cell.
#[derive(Clone, Debug, PartialEq)]
struct CellEditor {
    table: TableKind,
    x: usize,
    y: usize,
    buffer: String,
    request_focus: bool,
}

/// What a property widget reported this frame. A drag changes the value on
/// many frames but finishes once.
#[derive(Clone, Copy, Debug, PartialEq)]
struct FieldEdit {
    value: Option<FieldValue>,
    finished: bool,
}

fn to_color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// Dark text on light backgrounds, light text on dark ones.
fn text_color_on(bg: Rgb) -> egui::Color32 {
    let luma = 0.299 * f32::from(bg.r) + 0.587 * f32::from(bg.g) + 0.114 * f32::from(bg.b);
    if luma > 140.0 {
        egui::Color32::BLACK
    } else {
        egui::Color32::WHITE
    }
}

fn disabled_status(id: EntityId) -> String {
    format!("{} {}", id.descriptor().display_name, statics::EN_STATUS_DISABLED)
}

impl MapEditApp {
    fn select(&mut self, id: EntityId) {
        // Any pending cell edit belongs to the view being left.
        self.editing = None;
        self.finish_field_gesture();
        match self.workspace.select(id) {
            Selection::Shown => self.status.clear(),
            Selection::Disabled => self.status = disabled_status(id),
        }
    }

    fn undo(&mut self) {
        self.editing = None;
        self.finish_field_gesture();
        if let Some(desc) = self.workspace.undo() {
            self.status = format!("{} {desc}", statics::EN_PREFIX_UNDO);
        }
    }

    fn redo(&mut self) {
        self.editing = None;
        self.finish_field_gesture();
        if let Some(desc) = self.workspace.redo() {
            self.status = format!("{} {desc}", statics::EN_PREFIX_REDO);
        }
    }

    /// Applies a live field value and records one undo step when the gesture ends.
    fn apply_field_edit(&mut self, name: &'static str, edit: FieldEdit) {
        if let Some(value) = edit.value {
            if self.field_gesture.is_some_and(|(active, _)| active != name) {
                self.finish_field_gesture();
            }
            match self.workspace.set_field_untracked(name, value) {
                Ok(before) => {
                    self.field_gesture.get_or_insert((name, before));
                }
                Err(e) => self.status = e.to_string(),
            }
        }
        if edit.finished {
            self.finish_field_gesture();
        }
    }

    fn finish_field_gesture(&mut self) {
        if let Some((name, before)) = self.field_gesture.take() {
            self.workspace.record_field_change(name, before);
        }
    }

    fn commit_cell_edit(&mut self) {
        let Some(ed) = self.editing.take() else {
            return;
        };
        self.workspace
            .edit_cell(ed.table, ed.x, ed.y, CellValue::parse(&ed.buffer));
    }

    fn render_catalog(&mut self, ui: &mut egui::Ui) {
        ui.heading(statics::EN_HEADING_CATALOG);
        ui.separator();

        let view = self.workspace.view();
        let mut clicked = None;
        for (category, ids) in self.workspace.catalog().categories() {
            egui::CollapsingHeader::new(category)
                .default_open(true)
                .show(ui, |ui| {
                    for id in ids {
                        let name = id.descriptor().display_name;
                        let selected = view.entity() == Some(*id);
                        let resp = if id.is_enabled(&self.workspace.config) {
                            ui.selectable_label(selected, name)
                        } else {
                            ui.selectable_label(selected, egui::RichText::new(name).weak())
                                .on_hover_text(statics::EN_HINT_DISABLED)
                        };
                        if resp.clicked() {
                            clicked = Some(*id);
                        }
                    }
                });
        }

        if let Some(id) = clicked {
            self.select(id);
        }
    }

    fn render_labels(ui: &mut egui::Ui, id: EntityId) {
        let (x_name, y_name, value_name) = id.labels();
        ui.heading(value_name);
        ui.horizontal(|ui| {
            ui.label(format!("{y_name} \u{2193}"));
            ui.separator();
            ui.label(format!("{x_name} \u{2192}"));
        });
        ui.separator();
    }

    fn field_editor(ui: &mut egui::Ui, desc: &FieldDescriptor, current: FieldValue) -> Option<FieldEdit> {
        if desc.read_only {
            ui.add_enabled(false, egui::Label::new(current.to_string()));
            return None;
        }

        let (resp, value) = match current {
            FieldValue::Int(v) => {
                let mut tmp = v;
                let resp = ui.add(egui::DragValue::new(&mut tmp).speed(1));
                (resp, FieldValue::Int(tmp))
            }
            FieldValue::Bool(v) => {
                let mut tmp = v;
                let resp = ui.checkbox(&mut tmp, "");
                return resp.changed().then_some(FieldEdit {
                    value: Some(FieldValue::Bool(tmp)),
                    finished: true,
                });
            }
            FieldValue::Float(v) => {
                let mut tmp = v;
                let resp = ui.add(
                    egui::DragValue::new(&mut tmp)
                        .speed(0.01)
                        .range(f32::NEG_INFINITY..=f32::INFINITY),
                );
                (resp, FieldValue::Float(tmp))
            }
        };

        let edit = FieldEdit {
            value: resp.changed().then_some(value),
            finished: resp.drag_stopped() || resp.lost_focus(),
        };
        (edit.value.is_some() || edit.finished).then_some(edit)
    }

    fn render_properties(&mut self, ui: &mut egui::Ui) {
        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
        let config = &self.workspace.config;
        let mut pending: Option<(&'static str, FieldEdit)> = None;

        ui.push_id("engine_properties", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::initial(240.0).resizable(true))
                .column(Column::remainder())
                .header(row_h, |mut header| {
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_PROPERTY);
                    });
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_VALUE);
                    });
                })
                .body(|mut body| {
                    for category in FieldCategory::ALL {
                        body.row(row_h, |mut row| {
                            row.col(|ui| {
                                ui.strong(category.label());
                            });
                            row.col(|_| {});
                        });

                        for desc in EngineConfig::fields_in(category) {
                            let Some(current) = config.get(desc.name) else {
                                continue;
                            };
                            body.row(row_h, |mut row| {
                                row.col(|ui| {
                                    ui.label(desc.name).on_hover_text(desc.description);
                                });
                                row.col(|ui| {
                                    if let Some(edit) = Self::field_editor(ui, desc, current) {
                                        pending = Some((desc.name, edit));
                                    }
                                });
                            });
                        }
                    }
                });
        });

        if let Some((name, edit)) = pending {
            self.apply_field_edit(name, edit);
        }
    }

    fn render_grid(&mut self, ui: &mut egui::Ui, kind: TableKind) {
        let Some(sheet) = self.workspace.table(kind).sheet() else {
            return;
        };
        let editing = &mut self.editing;
        let mut commit = false;
        let mut cancel = false;
        let mut start_edit: Option<(usize, usize)> = None;
        let mut touched = false;

        ui.weak(&sheet.title);
        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
        ui.push_id(("map_grid", kind), |ui| {
            egui::ScrollArea::horizontal().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(false)
                    .cell_layout(egui::Layout::centered_and_justified(egui::Direction::LeftToRight))
                    .column(Column::exact(statics::MAP_COLUMN_WIDTH * 1.5))
                    .columns(Column::exact(statics::MAP_COLUMN_WIDTH), sheet.column_count())
                    .header(row_h, |mut header| {
                        header.col(|ui| {
                            ui.strong(statics::EN_COL_LOAD);
                        });
                        for h in sheet.column_headers() {
                            header.col(|ui| {
                                ui.strong(h);
                            });
                        }
                    })
                    .body(|mut body| {
                        for y in 0..sheet.row_count() {
                            body.row(row_h, |mut row| {
                                row.col(|ui| {
                                    ui.strong(&sheet.row_headers()[y]);
                                });
                                for x in 0..sheet.column_count() {
                                    row.col(|ui| {
                                        let (c, r, t) = render_cell(ui, sheet, kind, x, y, editing);
                                        commit |= c;
                                        cancel |= t;
                                        if r {
                                            start_edit = Some((x, y));
                                            touched = true;
                                        }
                                    });
                                }
                            });
                        }
                    });
            });
        });

        if cancel {
            self.editing = None;
        } else if commit {
            self.commit_cell_edit();
        }
        if let Some((x, y)) = start_edit {
            self.commit_cell_edit();
            let buffer = self
                .workspace
                .table(kind)
                .sheet()
                .and_then(|s| s.cell(x, y))
                .map(CellValue::to_string)
                .unwrap_or_default();
            self.editing = Some(CellEditor {
                table: kind,
                x,
                y,
                buffer,
                request_focus: true,
            });
        }
        if touched {
            self.workspace.refresh_active();
        }
    }
}

/// Draws one map cell. Returns `(commit, clicked, cancelled)`.
fn render_cell(
    ui: &mut egui::Ui,
    sheet: &Sheet,
    kind: TableKind,
    x: usize,
    y: usize,
    editing: &mut Option<CellEditor>,
) -> (bool, bool, bool) {
    if let Some(ed) = editing.as_mut()
        && ed.table == kind
        && ed.x == x
        && ed.y == y
    {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut ed.buffer)
                .hint_text(kind.placeholder().to_string())
                .desired_width(f32::INFINITY),
        );
        if ed.request_focus {
            resp.request_focus();
            ed.request_focus = false;
        }
        let cancelled = ui.input(|i| i.key_pressed(egui::Key::Escape));
        return (resp.lost_focus() && !cancelled, false, cancelled);
    }

    let text = sheet.cell(x, y).map(CellValue::to_string).unwrap_or_default();
    let label = match sheet.back_color(x, y) {
        Some(bg) => {
            ui.painter().rect_filled(ui.max_rect(), 0.0, to_color32(bg));
            egui::RichText::new(text).color(text_color_on(bg))
        }
        None => egui::RichText::new(text),
    };
    let resp = ui.add(egui::Label::new(label).sense(egui::Sense::click()));
    (false, resp.clicked(), false)
}

impl eframe::App for MapEditApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Consume undo/redo keys unless a cell is being typed into, so the
        // text editor keeps its own undo.
        let mut do_undo = false;
        let mut do_redo = false;
        if self.editing.is_none() {
            ctx.input_mut(|i| {
                let ctrl_shift = egui::Modifiers {
                    shift: true,
                    ..egui::Modifiers::CTRL
                };
                if i.consume_key(ctrl_shift, egui::Key::Z) {
                    do_redo = true;
                }
                if i.consume_key(egui::Modifiers::CTRL, egui::Key::Y) {
                    do_redo = true;
                }
                if i.consume_key(egui::Modifiers::CTRL, egui::Key::Z) {
                    do_undo = true;
                }
            });
        }
        if do_undo {
            self.undo();
            ctx.request_repaint();
        }
        if do_redo {
            self.redo();
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui
                    .add_enabled(self.workspace.can_undo(), egui::Button::new(statics::EN_BTN_UNDO))
                    .clicked()
                {
                    self.undo();
                }
                if ui
                    .add_enabled(self.workspace.can_redo(), egui::Button::new(statics::EN_BTN_REDO))
                    .clicked()
                {
                    self.redo();
                }
                if ui.button(statics::EN_BTN_CHANGES).clicked() {
                    self.changes_open = true;
                }

                ui.separator();
                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }
                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        if self.changes_open {
            let mut open = self.changes_open;
            egui::Window::new(statics::EN_WINDOW_CHANGES)
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    let history = self.workspace.undo_history();
                    if history.is_empty() {
                        ui.label(statics::EN_CHANGES_NONE);
                    } else {
                        egui::ScrollArea::vertical().show(ui, |ui| {
                            for (i, action) in history.iter().enumerate() {
                                ui.label(format!("{}. {}", i + 1, action.describe()));
                            }
                        });
                    }
                });
            self.changes_open = open;
        }

        if self.about_open {
            let mut open = self.about_open;
            egui::Window::new(statics::EN_WINDOW_ABOUT)
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(statics::EN_ABOUT_HEADING);
                    ui.label(format!(
                        "{} {}",
                        statics::EN_ABOUT_VERSION,
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.separator();
                    ui.label(statics::EN_ABOUT_SHORTCUTS);
                    ui.label(statics::EN_ABOUT_SHORTCUT_UNDO);
                    ui.label(statics::EN_ABOUT_SHORTCUT_REDO);
                });
            self.about_open = open;
        }

        egui::SidePanel::left("catalog_panel")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                self.render_catalog(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.workspace.view() {
            View::NoSelection => {
                ui.heading(statics::EN_HOME_HEADING);
                ui.label(statics::EN_HOME_INSTRUCTIONS);
            }
            View::Properties(id) => {
                Self::render_labels(ui, id);
                self.render_properties(ui);
            }
            View::Grid(kind) => {
                Self::render_labels(ui, EntityId::Table(kind));
                self.render_grid(ui, kind);
            }
        });
    }
}
