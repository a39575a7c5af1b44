//! Join planning: walks a filter path's relation hops left to right,
//! emitting one join (or two, for many-to-many) per hop, and resolves the
//! terminal field to the ancestor table that physically stores it.
//!
//! The walk is a pure fold: each hop takes the current entity type and
//! returns the next. Nothing here mutates shared state beyond appending to
//! the caller's `QueryTarget`.


use crate::{
    FOREIGN_KEY_SUFFIX, PRIMARY_KEY_COLUMN,
    error::FilterError,
    query::{ColumnRef, JoinOn, QueryTarget},
    schema::{RelationDef, SchemaProvider},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

///
/// TraversalMode
///
/// What to do with a path segment that names no relation on the current
/// entity type. Lenient skips the hop (the historical behavior, useful for
/// paths carrying non-relation segments); Strict treats it as a typo.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum TraversalMode {
    #[default]
    Lenient,
    Strict,
}

/// Resolve the concrete table storing `field`, walking the ancestry of
/// `entity` from most specific upward. Exhausting the chain is a fatal
/// configuration error: the caller is filtering on a field that does not
/// exist.
pub fn owning_table<S>(schema: &S, entity: &str, field: &str) -> Result<String, FilterError>
where
    S: SchemaProvider + ?Sized,
{
    let ancestry = schema.ancestry(entity);
    if ancestry.is_empty() {
        return Err(FilterError::UnknownEntity {
            entity: entity.to_string(),
        });
    }

    for ancestor in &ancestry {
        if schema.field_on_own_table(ancestor, field) {
            return schema
                .base_table(ancestor)
                .ok_or_else(|| FilterError::UnknownEntity {
                    entity: ancestor.clone(),
                });
        }
    }

    Err(FilterError::FieldNotFound {
        field: field.to_string(),
        entity: entity.to_string(),
    })
}

/// Walk `relations` in path order, appending joins to `query`, and return
/// the entity type reached after the final hop. Each hop's join depends on
/// the type the previous hop reached, so the fold is inherently sequential.
pub fn plan_joins<S, Q>(
    schema: &S,
    query: &mut Q,
    entity: &str,
    relations: &[String],
    mode: TraversalMode,
) -> Result<String, FilterError>
where
    S: SchemaProvider + ?Sized,
    Q: QueryTarget + ?Sized,
{
    let mut current = entity.to_string();
    for relation in relations {
        current = plan_hop(schema, query, &current, relation, mode)?;
    }

    Ok(current)
}

/// Plan a single relation hop from `current`, returning the entity type the
/// hop lands on. Unmatched segments leave the type unchanged in Lenient
/// mode.
pub fn plan_hop<S, Q>(
    schema: &S,
    query: &mut Q,
    current: &str,
    relation: &str,
    mode: TraversalMode,
) -> Result<String, FilterError>
where
    S: SchemaProvider + ?Sized,
    Q: QueryTarget + ?Sized,
{
    match schema.relation(current, relation) {
        Some(RelationDef::OneToOne { target }) => {
            let target_table = table_of(schema, &target)?;
            let fk = format!("{relation}{FOREIGN_KEY_SUFFIX}");
            // Inherited relations keep their foreign key on the declaring
            // ancestor's table; providers that do not report foreign-key
            // columns as fields fall back to the current type's table.
            let current_table = match owning_table(schema, current, &fk) {
                Ok(table) => table,
                Err(FilterError::FieldNotFound { .. }) => table_of(schema, current)?,
                Err(err) => return Err(err),
            };

            debug!(current, relation, %target, kind = "one_to_one", %fk, "planned hop");
            query.add_left_join(
                &target_table,
                JoinOn::new(
                    ColumnRef::new(target_table.clone(), PRIMARY_KEY_COLUMN),
                    ColumnRef::new(current_table, fk),
                ),
            );

            Ok(target)
        }
        Some(RelationDef::OneToMany { target }) => {
            let current_table = table_of(schema, current)?;
            let child_table = table_of(schema, &target)?;
            let fk = remote_join_field(schema, current, &target);

            debug!(current, relation, %target, kind = "one_to_many", %fk, "planned hop");
            query.add_left_join(
                &child_table,
                JoinOn::new(
                    ColumnRef::new(child_table.clone(), fk),
                    ColumnRef::new(current_table, PRIMARY_KEY_COLUMN),
                ),
            );

            Ok(target)
        }
        Some(RelationDef::ManyToMany(def)) => {
            let parent_table = table_of(schema, &def.parent)?;
            let child_table = table_of(schema, &def.child)?;

            debug!(
                current,
                relation,
                child = %def.child,
                kind = "many_to_many",
                join_table = %def.join_table,
                "planned hop"
            );
            query.add_inner_join(
                &def.join_table,
                JoinOn::new(
                    ColumnRef::new(def.join_table.clone(), def.parent_key),
                    ColumnRef::new(parent_table, PRIMARY_KEY_COLUMN),
                ),
            );
            query.add_left_join(
                &child_table,
                JoinOn::new(
                    ColumnRef::new(child_table.clone(), PRIMARY_KEY_COLUMN),
                    ColumnRef::new(def.join_table, def.child_key),
                ),
            );

            Ok(def.child)
        }
        None => match mode {
            TraversalMode::Lenient => {
                debug!(current, relation, "no relation of that name; hop skipped");
                Ok(current.to_string())
            }
            TraversalMode::Strict => Err(FilterError::UnresolvedRelation {
                relation: relation.to_string(),
                entity: current.to_string(),
            }),
        },
    }
}

// Foreign-key column the child type uses to point back at `current`:
// nearest ancestor with reverse-key metadata wins, then `<CurrentType>ID`.
fn remote_join_field<S>(schema: &S, current: &str, child: &str) -> String
where
    S: SchemaProvider + ?Sized,
{
    schema
        .ancestry(current)
        .iter()
        .find_map(|ancestor| schema.reverse_foreign_key(child, ancestor))
        .unwrap_or_else(|| format!("{current}{FOREIGN_KEY_SUFFIX}"))
}

fn table_of<S>(schema: &S, entity: &str) -> Result<String, FilterError>
where
    S: SchemaProvider + ?Sized,
{
    schema
        .base_table(entity)
        .ok_or_else(|| FilterError::UnknownEntity {
            entity: entity.to_string(),
        })
}
