use super::*;

#[test]
fn column_refs_display_qualified() {
    assert_eq!(ColumnRef::new("Player", "Name").to_string(), "Player.Name");
}

#[test]
fn joins_display_kind_table_and_condition() {
    let join = Join::inner(
        "Team_Players",
        JoinOn::new(
            ColumnRef::new("Team_Players", "TeamID"),
            ColumnRef::new("Team", "ID"),
        ),
    );

    assert_eq!(
        join.to_string(),
        "INNER JOIN Team_Players ON Team_Players.TeamID = Team.ID"
    );
}

#[test]
fn predicates_display_with_operator_symbol() {
    let predicate = Predicate::new(ColumnRef::new("Player", "Name"), CompareOp::Eq, "Ann");
    assert_eq!(predicate.to_string(), "Player.Name = 'Ann'");

    let listed = Predicate::new(
        ColumnRef::new("Player", "Name"),
        CompareOp::In,
        vec!["Ann", "Bea"],
    );
    assert_eq!(listed.to_string(), "Player.Name IN ('Ann', 'Bea')");
}

#[test]
fn query_records_joins_and_predicates_in_arrival_order() {
    let mut query = Query::new();

    query.add_inner_join(
        "Team_Players",
        JoinOn::new(
            ColumnRef::new("Team_Players", "TeamID"),
            ColumnRef::new("Team", "ID"),
        ),
    );
    query.add_left_join(
        "Player",
        JoinOn::new(
            ColumnRef::new("Player", "ID"),
            ColumnRef::new("Team_Players", "PlayerID"),
        ),
    );
    query.add_where(Predicate::new(
        ColumnRef::new("Player", "Name"),
        CompareOp::Eq,
        "Ann",
    ));

    assert_eq!(query.joins[0].kind, JoinKind::Inner);
    assert_eq!(query.joins[1].kind, JoinKind::Left);
    assert_eq!(query.wheres.len(), 1);
}

#[test]
fn predicates_serialize_structurally() {
    let predicate = Predicate::new(ColumnRef::new("Player", "Name"), CompareOp::Eq, "Ann");

    assert_eq!(
        serde_json::to_value(&predicate).unwrap(),
        serde_json::json!({
            "column": { "table": "Player", "field": "Name" },
            "op": "Eq",
            "value": { "Text": "Ann" },
        })
    );
}
