use thiserror::Error as ThisError;

///
/// FilterError
///
/// Failures raised while applying a search filter to a query. These indicate
/// a mis-specified filter or schema, never a transient condition, so callers
/// should surface them rather than retry.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FilterError {
    /// The terminal field was not found on the entity or any ancestor.
    #[error("field '{field}' not found on entity '{entity}' or any of its ancestors")]
    FieldNotFound { field: String, entity: String },

    /// Strict traversal hit a path segment that names no relation.
    #[error("relation '{relation}' is not defined on entity '{entity}'")]
    UnresolvedRelation { relation: String, entity: String },

    /// An entity name reached during traversal is unknown to the provider.
    #[error("unknown entity type '{entity}'")]
    UnknownEntity { entity: String },

    /// The filter was applied before the query layer configured its root
    /// entity type.
    #[error("filter has no root entity type configured")]
    EntityNotConfigured,
}

///
/// SchemaError
///
/// Structural problems detected when validating an in-memory schema
/// registry. Reported eagerly so traversal never has to reason about
/// dangling references.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("entity '{entity}' names unknown parent '{parent}'")]
    UnknownParent { entity: String, parent: String },

    #[error("relation '{relation}' on entity '{entity}' targets unknown entity '{target}'")]
    UnknownRelationTarget {
        entity: String,
        relation: String,
        target: String,
    },

    #[error("entity '{entity}' participates in an ancestry cycle")]
    AncestryCycle { entity: String },
}
