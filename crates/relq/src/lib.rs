//! Relation-aware search filters: dotted field paths resolved hop by hop
//! against entity metadata, joins planned per relation kind, and comparison
//! predicates applied on fully qualified columns.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod filter;
pub mod path;
pub mod plan;
pub mod query;
pub mod schema;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Column name every entity table uses for its primary key.
pub const PRIMARY_KEY_COLUMN: &str = "ID";

/// Suffix appended to a relation name to form its foreign-key column.
pub const FOREIGN_KEY_SUFFIX: &str = "ID";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors and the in-memory registry are imported from their modules.
///

pub mod prelude {
    pub use crate::{
        filter::{
            EndsWithFilter, ExactMatchFilter, GreaterThanFilter, LessThanFilter, NegationFilter,
            PartialMatchFilter, SearchFilter, SetMembershipFilter, StartsWithFilter,
            WithinRangeFilter,
        },
        path::FieldPath,
        plan::TraversalMode,
        query::{ColumnRef, CompareOp, Join, JoinKind, JoinOn, Predicate, Query, QueryTarget},
        schema::{ManyManyDef, RelationDef, SchemaProvider},
        value::Value,
    };
}
