//! The polymorphic comparison family. Each variant owns one comparison
//! semantic; the traversal (joins, ancestry walk, column qualification) is
//! shared by the trait's default `apply`.

mod variants;


use crate::{
    error::FilterError,
    path::FieldPath,
    plan::{TraversalMode, owning_table, plan_joins},
    query::{ColumnRef, Predicate, QueryTarget},
    schema::SchemaProvider,
    value::Value,
};

pub use variants::{
    EndsWithFilter, ExactMatchFilter, GreaterThanFilter, LessThanFilter, NegationFilter,
    PartialMatchFilter, SetMembershipFilter, StartsWithFilter, WithinRangeFilter,
};

///
/// FilterBase
///
/// State shared by every filter variant. The path is parsed exactly once at
/// construction and never re-parsed; afterwards only the comparison value
/// and the root entity type (set by the query layer) may change.
///

#[derive(Clone, Debug)]
pub struct FilterBase {
    path: FieldPath,
    value: Value,
    entity: Option<String>,
    mode: TraversalMode,
}

impl FilterBase {
    pub(crate) fn new(path: &str, value: impl Into<Value>) -> Self {
        Self {
            path: FieldPath::parse(path),
            value: value.into(),
            entity: None,
            mode: TraversalMode::default(),
        }
    }

    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Root entity type, or the working type after a successful `apply`.
    #[must_use]
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    #[must_use]
    pub const fn mode(&self) -> TraversalMode {
        self.mode
    }

    pub fn set_entity(&mut self, entity: impl Into<String>) {
        self.entity = Some(entity.into());
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    pub const fn set_mode(&mut self, mode: TraversalMode) {
        self.mode = mode;
    }
}

///
/// SearchFilter
///
/// One filter instance serves one query build: the query layer sets the
/// root entity type, calls `apply` exactly once, and discards the filter.
/// `apply` mutates the query only on success; on error no predicate lands.
///

pub trait SearchFilter {
    fn base(&self) -> &FilterBase;
    fn base_mut(&mut self) -> &mut FilterBase;

    /// Variant-specific predicates over the resolved, qualified column.
    fn predicates(&self, column: &ColumnRef) -> Vec<Predicate>;

    /// Configure the root entity type. Called by the query layer before
    /// `apply`.
    fn set_entity(&mut self, entity: &str) {
        self.base_mut().set_entity(entity);
    }

    /// Replace the comparison value. The path and relation sequence stay
    /// fixed.
    fn set_value(&mut self, value: Value) {
        self.base_mut().set_value(value);
    }

    /// Plan relation joins, resolve the owning table of the terminal field,
    /// and push this variant's predicates.
    fn apply(
        &mut self,
        schema: &dyn SchemaProvider,
        query: &mut dyn QueryTarget,
    ) -> Result<(), FilterError> {
        let Some(entity) = self.base().entity().map(str::to_string) else {
            return Err(FilterError::EntityNotConfigured);
        };

        let mode = self.base().mode();
        let working = if self.base().path().has_relations() {
            plan_joins(
                schema,
                query,
                &entity,
                self.base().path().relations(),
                mode,
            )?
        } else {
            entity
        };
        self.base_mut().set_entity(working.clone());

        let field = self.base().path().field().to_string();
        let table = owning_table(schema, &working, &field)?;
        let column = ColumnRef::new(table, field);

        for predicate in self.predicates(&column) {
            query.add_where(predicate);
        }

        Ok(())
    }
}
