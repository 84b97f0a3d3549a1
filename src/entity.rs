//! The set of editable entities and the catalog the navigation tree is built from.

use crate::config::EngineConfig;
use crate::statics;
use crate::table::TableKind;
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// 2D map shown as a spreadsheet.
    Grid,
    /// Flat categorized property rows.
    Property,
}

/// Catalog metadata for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub category: &'static str,
    pub display_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    Engine,
    Table(TableKind),
}

impl EntityId {
    pub const ALL: [EntityId; 3] = [
        EntityId::Engine,
        EntityId::Table(TableKind::Injection),
        EntityId::Table(TableKind::Advance),
    ];

    pub fn descriptor(self) -> EntityDescriptor {
        match self {
            EntityId::Engine => EntityDescriptor {
                category: statics::EN_CATEGORY_ENGINE,
                display_name: statics::EN_ENTITY_ENGINE_DATA,
            },
            EntityId::Table(TableKind::Injection) => EntityDescriptor {
                category: statics::EN_CATEGORY_MAPS,
                display_name: statics::EN_ENTITY_INJECTION_MAP,
            },
            EntityId::Table(TableKind::Advance) => EntityDescriptor {
                category: statics::EN_CATEGORY_MAPS,
                display_name: statics::EN_ENTITY_ADVANCE_MAP,
            },
        }
    }

    pub fn edit_mode(self) -> EditMode {
        match self {
            EntityId::Engine => EditMode::Property,
            EntityId::Table(_) => EditMode::Grid,
        }
    }

    pub fn is_enabled(self, config: &EngineConfig) -> bool {
        match self {
            EntityId::Engine => true,
            EntityId::Table(kind) => kind.is_enabled(config),
        }
    }

    /// Axis and value captions shown above the editor.
    pub fn labels(self) -> (&'static str, &'static str, &'static str) {
        match self {
            EntityId::Engine => (
                statics::EN_AXIS_DEFAULT_X,
                statics::EN_AXIS_DEFAULT_Y,
                statics::EN_AXIS_DEFAULT_VALUE,
            ),
            EntityId::Table(kind) => (kind.x_name(), kind.y_name(), kind.value_name()),
        }
    }
}

/// Entities grouped by category, both levels in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    groups: IndexMap<&'static str, Vec<EntityId>>,
}

impl Catalog {
    pub fn new(entities: &[EntityId]) -> Self {
        let mut groups: IndexMap<&'static str, Vec<EntityId>> = IndexMap::new();
        for id in entities {
            groups.entry(id.descriptor().category).or_default().push(*id);
        }
        Self { groups }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &[EntityId])> {
        self.groups.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
