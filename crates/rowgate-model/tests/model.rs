use rowgate_model::{
    CellValue, ExpectedType, FieldRule, Record, RuleKind, RuleSet, Table, Verdict, Violation,
};

#[test]
fn verdict_serializes() {
    let mut verdict = Verdict::default();
    verdict.add(Violation::new("ID", RuleKind::Unique));
    verdict.add(Violation::new("SIGNUP", RuleKind::Type(ExpectedType::Date)));
    let json = serde_json::to_string(&verdict).expect("serialize verdict");
    let round: Verdict = serde_json::from_str(&json).expect("deserialize verdict");
    assert_eq!(round, verdict);
}

#[test]
fn rule_set_serializes_in_order() {
    let rules = RuleSet::new(vec![
        (
            "ID".to_string(),
            FieldRule {
                require_non_null: true,
                require_unique: true,
                expected_type: Some(ExpectedType::Int),
            },
        ),
        (
            "COUNTRY".to_string(),
            FieldRule {
                expected_type: Some(ExpectedType::CountryCode),
                ..FieldRule::default()
            },
        ),
    ]);
    let json = serde_json::to_string(&rules).expect("serialize rules");
    let round: RuleSet = serde_json::from_str(&json).expect("deserialize rules");
    let fields: Vec<&str> = round.fields().collect();
    assert_eq!(fields, vec!["ID", "COUNTRY"]);
}

#[test]
fn table_round_trips_cells() {
    let mut table = Table::new(vec!["ID".to_string()]);
    table.push_record(Record::new(2, vec![CellValue::int(1)]));
    table.push_record(Record::new(3, vec![CellValue::Missing]));
    let json = serde_json::to_string(&table).expect("serialize table");
    let round: Table = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(round, table);
}
