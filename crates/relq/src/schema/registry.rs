use crate::{
    FOREIGN_KEY_SUFFIX,
    error::SchemaError,
    schema::{ManyManyDef, RelationDef, SchemaProvider},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

///
/// EntityDef
///
/// Declarative description of one entity type: its table, parent, owned
/// fields, and relations. Built fluently and handed to `Schema::entity`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntityDef {
    name: String,
    table: Option<String>,
    parent: Option<String>,
    fields: BTreeSet<String>,
    has_one: BTreeMap<String, String>,
    has_many: BTreeMap<String, String>,
    many_many: BTreeMap<String, ManyManyDef>,
}

impl EntityDef {
    /// Start a definition; the table name defaults to the entity name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            parent: None,
            fields: BTreeSet::new(),
            has_one: BTreeMap::new(),
            has_many: BTreeMap::new(),
            many_many: BTreeMap::new(),
        }
    }

    /// Override the physical table name.
    #[must_use]
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Declare the immediate ancestor type.
    #[must_use]
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Declare a field stored on this entity's own table.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.insert(field.into());
        self
    }

    /// Declare several own-table fields at once.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Declare a one-to-one relation; this entity carries `<name>ID`.
    #[must_use]
    pub fn has_one(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.has_one.insert(name.into(), target.into());
        self
    }

    /// Declare a one-to-many relation; the target carries the reverse key.
    #[must_use]
    pub fn has_many(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.has_many.insert(name.into(), target.into());
        self
    }

    /// Declare a many-to-many relation with conventional wiring: join table
    /// `<Entity>_<Relation>`, keys `<Entity>ID` / `<Child>ID`.
    #[must_use]
    pub fn many_many(self, name: impl Into<String>, child: impl Into<String>) -> Self {
        let name = name.into();
        let child = child.into();
        let def = ManyManyDef {
            parent: self.name.clone(),
            parent_key: format!("{}{FOREIGN_KEY_SUFFIX}", self.name),
            child_key: format!("{child}{FOREIGN_KEY_SUFFIX}"),
            join_table: format!("{}_{name}", self.name),
            child,
        };
        self.many_many_via(name, def)
    }

    /// Declare a many-to-many relation with explicit wiring.
    #[must_use]
    pub fn many_many_via(mut self, name: impl Into<String>, def: ManyManyDef) -> Self {
        self.many_many.insert(name.into(), def);
        self
    }

    fn resolved_table(&self) -> &str {
        self.table.as_deref().unwrap_or(&self.name)
    }
}

///
/// Schema
///
/// In-memory entity registry implementing `SchemaProvider`. Hosts with an
/// external metadata service implement the trait directly instead.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Schema {
    entities: BTreeMap<String, EntityDef>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity definition, replacing any previous one of the
    /// same name.
    #[must_use]
    pub fn entity(mut self, def: EntityDef) -> Self {
        self.entities.insert(def.name.clone(), def);
        self
    }

    /// Check referential integrity: parents exist, relation targets exist,
    /// and no ancestry chain loops back on itself.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for def in self.entities.values() {
            if let Some(parent) = &def.parent {
                if !self.entities.contains_key(parent) {
                    return Err(SchemaError::UnknownParent {
                        entity: def.name.clone(),
                        parent: parent.clone(),
                    });
                }
            }

            let targets = def
                .has_one
                .iter()
                .chain(def.has_many.iter())
                .map(|(name, target)| (name.as_str(), target.as_str()))
                .chain(
                    def.many_many
                        .iter()
                        .map(|(name, mm)| (name.as_str(), mm.child.as_str())),
                );
            for (relation, target) in targets {
                if !self.entities.contains_key(target) {
                    return Err(SchemaError::UnknownRelationTarget {
                        entity: def.name.clone(),
                        relation: relation.to_string(),
                        target: target.to_string(),
                    });
                }
            }

            if self.walk_ancestry(&def.name).is_none() {
                return Err(SchemaError::AncestryCycle {
                    entity: def.name.clone(),
                });
            }
        }

        Ok(())
    }

    fn def(&self, entity: &str) -> Option<&EntityDef> {
        self.entities.get(entity)
    }

    // Returns None when the parent chain revisits a type.
    fn walk_ancestry(&self, entity: &str) -> Option<Vec<String>> {
        let mut chain = Vec::new();
        let mut seen = BTreeSet::new();
        let mut cursor = self.def(entity);

        while let Some(def) = cursor {
            if !seen.insert(def.name.clone()) {
                return None;
            }
            chain.push(def.name.clone());
            cursor = def.parent.as_deref().and_then(|p| self.def(p));
        }

        Some(chain)
    }
}

impl Schema {
    fn own_relation(def: &EntityDef, name: &str) -> Option<RelationDef> {
        if let Some(target) = def.has_one.get(name) {
            return Some(RelationDef::OneToOne {
                target: target.clone(),
            });
        }
        if let Some(target) = def.has_many.get(name) {
            return Some(RelationDef::OneToMany {
                target: target.clone(),
            });
        }

        def.many_many
            .get(name)
            .map(|mm| RelationDef::ManyToMany(mm.clone()))
    }
}

impl SchemaProvider for Schema {
    // Relation config is inherited: subtypes traverse relations declared on
    // any ancestor, nearest declaration first.
    fn relation(&self, entity: &str, name: &str) -> Option<RelationDef> {
        self.ancestry(entity)
            .iter()
            .find_map(|ancestor| Self::own_relation(self.def(ancestor)?, name))
    }

    fn field_on_own_table(&self, entity: &str, field: &str) -> bool {
        self.def(entity).is_some_and(|def| {
            // Relation FK columns live on the owning table too.
            def.fields.contains(field)
                || field
                    .strip_suffix(FOREIGN_KEY_SUFFIX)
                    .is_some_and(|name| def.has_one.contains_key(name))
        })
    }

    fn ancestry(&self, entity: &str) -> Vec<String> {
        self.walk_ancestry(entity).unwrap_or_default()
    }

    fn base_table(&self, entity: &str) -> Option<String> {
        self.def(entity).map(|def| def.resolved_table().to_string())
    }

    fn reverse_foreign_key(&self, child: &str, parent: &str) -> Option<String> {
        let def = self.def(child)?;

        def.has_one
            .iter()
            .find(|(_, target)| target.as_str() == parent)
            .map(|(name, _)| format!("{name}{FOREIGN_KEY_SUFFIX}"))
    }
}
