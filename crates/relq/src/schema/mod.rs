//! Entity metadata boundary: the `SchemaProvider` trait this crate consumes,
//! the relation descriptors it hands back, and an in-memory registry for
//! hosts that keep their metadata in process.

mod registry;


use serde::{Deserialize, Serialize};

pub use registry::{EntityDef, Schema};

///
/// RelationDef
///
/// Tagged relation descriptor returned by a single metadata lookup. "No
/// relation of that name" is the `None` of the surrounding `Option`, so the
/// planner matches relation kinds exhaustively instead of probing each kind
/// in turn.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RelationDef {
    /// The owning type holds a `<RelationName>ID` foreign key to the target.
    OneToOne { target: String },

    /// The target (child) type holds a foreign key back to the owner.
    OneToMany { target: String },

    /// Resolved through an explicit join table.
    ManyToMany(ManyManyDef),
}

impl RelationDef {
    /// Entity type reached after traversing this relation.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::OneToOne { target } | Self::OneToMany { target } => target,
            Self::ManyToMany(def) => &def.child,
        }
    }
}

///
/// ManyManyDef
///
/// Join-table wiring for a many-to-many relation: both endpoint types plus
/// the key column each side contributes to the join table.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ManyManyDef {
    pub parent: String,
    pub child: String,
    pub parent_key: String,
    pub child_key: String,
    pub join_table: String,
}

///
/// SchemaProvider
///
/// Read-only entity metadata consumed during filter application. All
/// lookups are deterministic and in-memory; absence is modeled with
/// `Option`/`bool`, never with errors.
///

pub trait SchemaProvider {
    /// Resolve the relation `name` defined on `entity`, if any.
    fn relation(&self, entity: &str, name: &str) -> Option<RelationDef>;

    /// Whether `entity`'s own table physically stores `field`. Fields owned
    /// by ancestors must answer `false` here; the ancestry walk finds them.
    fn field_on_own_table(&self, entity: &str, field: &str) -> bool;

    /// Inheritance chain starting at `entity` itself, most-specific first.
    /// Unknown entities yield an empty chain.
    fn ancestry(&self, entity: &str) -> Vec<String>;

    /// Physical table backing `entity` itself, or `None` for unknown
    /// entities. Each type in an ancestry owns its own table; this is the
    /// entity's table, not the ancestry root's (that one is the table of
    /// `ancestry(entity).last()`). Many-to-many joins therefore target the
    /// declaring type's table, which is the type a traversal reaches.
    fn base_table(&self, entity: &str) -> Option<String>;

    /// Foreign-key column `child` uses to reference `parent`, when the
    /// provider knows one. The planner falls back to `<CurrentType>ID` when
    /// no ancestor produces a hit.
    fn reverse_foreign_key(&self, child: &str, parent: &str) -> Option<String>;
}
