//! Query-builder boundary: structured joins and predicates, the
//! `QueryTarget` trait filters mutate, and a recording `Query` accumulator.
//!
//! Everything here is dialect-agnostic. Rendering to SQL (or anything else)
//! belongs to the execution engine that consumes the accumulated structure.

#[cfg(test)]
mod tests;

use crate::value::Value;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ColumnRef
///
/// Fully qualified column reference. Filters never emit bare field names;
/// qualification is what keeps predicates unambiguous across joined tables.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[display("{table}.{field}")]
pub struct ColumnRef {
    pub table: String,
    pub field: String,
}

impl ColumnRef {
    #[must_use]
    pub fn new(table: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            field: field.into(),
        }
    }
}

///
/// JoinKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum JoinKind {
    #[display("INNER")]
    Inner,
    #[display("LEFT")]
    Left,
}

///
/// JoinOn
///
/// Equality condition joining two columns.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[display("{lhs} = {rhs}")]
pub struct JoinOn {
    pub lhs: ColumnRef,
    pub rhs: ColumnRef,
}

impl JoinOn {
    #[must_use]
    pub const fn new(lhs: ColumnRef, rhs: ColumnRef) -> Self {
        Self { lhs, rhs }
    }
}

///
/// Join
///

#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[display("{kind} JOIN {table} ON {on}")]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub on: JoinOn,
}

impl Join {
    #[must_use]
    pub fn inner(table: impl Into<String>, on: JoinOn) -> Self {
        Self {
            kind: JoinKind::Inner,
            table: table.into(),
            on,
        }
    }

    #[must_use]
    pub fn left(table: impl Into<String>, on: JoinOn) -> Self {
        Self {
            kind: JoinKind::Left,
            table: table.into(),
            on,
        }
    }
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Contains,
    StartsWith,
    EndsWith,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::In => "IN",
            Self::Contains => "CONTAINS",
            Self::StartsWith => "STARTSWITH",
            Self::EndsWith => "ENDSWITH",
        };
        write!(f, "{s}")
    }
}

///
/// Predicate
///
/// One comparison over a qualified column.
///

#[derive(Clone, Debug, Deserialize, Display, PartialEq, Serialize)]
#[display("{column} {op} {value}")]
pub struct Predicate {
    pub column: ColumnRef,
    pub op: CompareOp,
    pub value: Value,
}

impl Predicate {
    #[must_use]
    pub fn new(column: ColumnRef, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            column,
            op,
            value: value.into(),
        }
    }
}

///
/// QueryTarget
///
/// Mutable accumulator filters write into. Exclusively owned by one query
/// build; the planner appends joins in path order and variants append
/// predicates last.
///

pub trait QueryTarget {
    fn add_join(&mut self, join: Join);
    fn add_where(&mut self, predicate: Predicate);

    /// Convenience for the planner's inner-join hops.
    fn add_inner_join(&mut self, table: &str, on: JoinOn) {
        self.add_join(Join::inner(table, on));
    }

    /// Convenience for the planner's left-join hops.
    fn add_left_join(&mut self, table: &str, on: JoinOn) {
        self.add_join(Join::left(table, on));
    }
}

///
/// Query
///
/// Reference `QueryTarget`: records joins and predicates in arrival order.
/// Used by the tests and by hosts that translate the recorded structure
/// into their own execution plan.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Query {
    pub joins: Vec<Join>,
    pub wheres: Vec<Predicate>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryTarget for Query {
    fn add_join(&mut self, join: Join) {
        self.joins.push(join);
    }

    fn add_where(&mut self, predicate: Predicate) {
        self.wheres.push(predicate);
    }
}
