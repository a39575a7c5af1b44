use crate::{
    filter::{FilterBase, SearchFilter},
    plan::TraversalMode,
    query::{ColumnRef, CompareOp, Predicate},
    value::Value,
};

// Single-comparison variants share their whole shape; only the operator
// differs.
macro_rules! comparison_filter {
    ($(#[$meta:meta])* $name:ident => $op:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            base: FilterBase,
        }

        impl $name {
            /// Construct from a dotted path and a comparison value. The
            /// path is parsed here, once.
            #[must_use]
            pub fn new(path: &str, value: impl Into<Value>) -> Self {
                Self {
                    base: FilterBase::new(path, value),
                }
            }

            /// Raise `UnresolvedRelation` on unmatched path segments
            /// instead of skipping them.
            #[must_use]
            pub fn strict(mut self) -> Self {
                self.base.set_mode(TraversalMode::Strict);
                self
            }
        }

        impl SearchFilter for $name {
            fn base(&self) -> &FilterBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut FilterBase {
                &mut self.base
            }

            fn predicates(&self, column: &ColumnRef) -> Vec<Predicate> {
                vec![Predicate::new(
                    column.clone(),
                    $op,
                    self.base.value().clone(),
                )]
            }
        }
    };
}

comparison_filter! {
    /// Exact equality on the resolved column.
    ExactMatchFilter => CompareOp::Eq
}

comparison_filter! {
    /// Inequality; the negated counterpart of `ExactMatchFilter`.
    NegationFilter => CompareOp::Ne
}

comparison_filter! {
    /// Substring match anywhere in the column value.
    PartialMatchFilter => CompareOp::Contains
}

comparison_filter! {
    /// Prefix match.
    StartsWithFilter => CompareOp::StartsWith
}

comparison_filter! {
    /// Suffix match.
    EndsWithFilter => CompareOp::EndsWith
}

comparison_filter! {
    /// Strictly-greater comparison (numeric or lexical, per the engine).
    GreaterThanFilter => CompareOp::Gt
}

comparison_filter! {
    /// Strictly-less comparison.
    LessThanFilter => CompareOp::Lt
}

comparison_filter! {
    /// Set membership; the value is expected to be a `Value::List`.
    SetMembershipFilter => CompareOp::In
}

///
/// WithinRangeFilter
///
/// Inclusive range over the resolved column, emitted as a `>= min` and a
/// `<= max` predicate pair.
///

#[derive(Clone, Debug)]
pub struct WithinRangeFilter {
    base: FilterBase,
    min: Value,
    max: Value,
}

impl WithinRangeFilter {
    #[must_use]
    pub fn new(path: &str, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        Self {
            base: FilterBase::new(path, Value::Null),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Raise `UnresolvedRelation` on unmatched path segments instead of
    /// skipping them.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.base.set_mode(TraversalMode::Strict);
        self
    }

    /// Replace both bounds.
    pub fn set_range(&mut self, min: impl Into<Value>, max: impl Into<Value>) {
        self.min = min.into();
        self.max = max.into();
    }
}

impl SearchFilter for WithinRangeFilter {
    fn base(&self) -> &FilterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FilterBase {
        &mut self.base
    }

    fn predicates(&self, column: &ColumnRef) -> Vec<Predicate> {
        vec![
            Predicate::new(column.clone(), CompareOp::Gte, self.min.clone()),
            Predicate::new(column.clone(), CompareOp::Lte, self.max.clone()),
        ]
    }
}
