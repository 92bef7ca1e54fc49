//! Unit tests for the field checks and classifier.

use rowgate_model::{
    CellValue, ExpectedType, FieldRule, Record, RuleKind, RuleSet, Table, ValidationOptions,
    Violation,
};
use rowgate_validate::{StructuralError, classify, partition, summarize, verify_columns};

fn make_table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|c| (*c).to_string()).collect());
    for (idx, row) in rows.iter().enumerate() {
        let cells = row.iter().map(|raw| CellValue::from_raw(raw)).collect();
        table.push_record(Record::new(idx as u64 + 2, cells));
    }
    table
}

fn rule(none: bool, unique: bool, expected: Option<ExpectedType>) -> FieldRule {
    FieldRule {
        require_non_null: none,
        require_unique: unique,
        expected_type: expected,
    }
}

#[test]
fn unique_flags_every_member_of_a_duplicate_group() {
    let table = make_table(&["ID"], &[&["1"], &["2"], &["2"], &["3"]]);
    let rules = RuleSet::new(vec![("ID".to_string(), rule(false, true, None))]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    assert!(verdicts[0].is_valid());
    assert!(!verdicts[1].is_valid());
    assert!(!verdicts[2].is_valid());
    assert!(verdicts[3].is_valid());
    assert!(
        verdicts[1]
            .violations
            .contains(&Violation::new("ID", RuleKind::Unique))
    );
}

#[test]
fn unique_keys_on_the_source_lexeme_not_the_parsed_value() {
    // "007" and "7" both parse to 7 but are distinct cell values.
    let table = make_table(&["ID"], &[&["007"], &["7"], &["abc"]]);
    let rules = RuleSet::new(vec![("ID".to_string(), rule(false, true, None))]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    assert!(verdicts.iter().all(|verdict| verdict.is_valid()));
}

#[test]
fn null_is_exempt_from_type_and_uniqueness_checks() {
    let table = make_table(&["AGE"], &[&["30"], &[""], &[""]]);
    let rules = RuleSet::new(vec![(
        "AGE".to_string(),
        rule(false, true, Some(ExpectedType::Int)),
    )]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    assert!(verdicts.iter().all(|verdict| verdict.is_valid()));
}

#[test]
fn id_example_produces_expected_verdicts_and_stats() {
    // ID: {none: true, unique: true, type: int} over ["1", "2", "2", null]
    let table = make_table(&["ID"], &[&["1"], &["2"], &["2"], &[""]]);
    let rules = RuleSet::new(vec![(
        "ID".to_string(),
        rule(true, true, Some(ExpectedType::Int)),
    )]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    assert!(verdicts[0].is_valid());
    assert_eq!(
        verdicts[1].violations,
        [Violation::new("ID", RuleKind::Unique)].into_iter().collect()
    );
    assert_eq!(
        verdicts[2].violations,
        [Violation::new("ID", RuleKind::Unique)].into_iter().collect()
    );
    assert_eq!(
        verdicts[3].violations,
        [Violation::new("ID", RuleKind::NonNull)]
            .into_iter()
            .collect()
    );

    let stats = summarize(&verdicts, &rules);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].0, "ID");
    assert_eq!(stats[0].1.fail_count, 3);
    assert_eq!(stats[0].1.total_checked, 4);
    assert_eq!(stats[0].1.fail_percentage, 75.0);
}

#[test]
fn date_check_requires_the_exact_run_format() {
    let table = make_table(&["SIGNUP"], &[&["2023-01-01"], &["2023/01/01"]]);
    let rules = RuleSet::new(vec![(
        "SIGNUP".to_string(),
        rule(false, false, Some(ExpectedType::Date)),
    )]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    assert!(verdicts[0].is_valid());
    assert_eq!(
        verdicts[1].violations,
        [Violation::new(
            "SIGNUP",
            RuleKind::Type(ExpectedType::Date)
        )]
        .into_iter()
        .collect()
    );
}

#[test]
fn country_check_uses_the_reference_list() {
    let table = make_table(&["COUNTRY"], &[&["ES"], &["ZZ"], &[""]]);
    let rules = RuleSet::new(vec![(
        "COUNTRY".to_string(),
        rule(false, false, Some(ExpectedType::CountryCode)),
    )]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    assert!(verdicts[0].is_valid());
    assert!(!verdicts[1].is_valid());
    assert!(verdicts[2].is_valid());
}

#[test]
fn string_check_rejects_numeric_cells() {
    let table = make_table(&["NAME"], &[&["ana"], &["42"], &["12.5"]]);
    let rules = RuleSet::new(vec![(
        "NAME".to_string(),
        rule(false, false, Some(ExpectedType::Str)),
    )]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    assert!(verdicts[0].is_valid());
    assert!(!verdicts[1].is_valid());
    // "12.5" does not parse as an integer, so it stays text.
    assert!(verdicts[2].is_valid());
}

#[test]
fn int_check_rejects_fractional_and_alphanumeric_cells() {
    let table = make_table(&["AGE"], &[&["30"], &["12.5"], &["abc"]]);
    let rules = RuleSet::new(vec![(
        "AGE".to_string(),
        rule(false, false, Some(ExpectedType::Int)),
    )]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    assert!(verdicts[0].is_valid());
    assert!(!verdicts[1].is_valid());
    assert!(!verdicts[2].is_valid());
}

#[test]
fn a_record_aggregates_violations_across_fields() {
    let table = make_table(&["ID", "COUNTRY"], &[&["x", "ZZ"], &["1", "ES"]]);
    let rules = RuleSet::new(vec![
        ("ID".to_string(), rule(true, false, Some(ExpectedType::Int))),
        (
            "COUNTRY".to_string(),
            rule(false, false, Some(ExpectedType::CountryCode)),
        ),
    ]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    assert_eq!(verdicts[0].violations.len(), 2);
    assert!(verdicts[0].touches("ID"));
    assert!(verdicts[0].touches("COUNTRY"));
    assert!(verdicts[1].is_valid());
}

#[test]
fn verify_columns_names_every_missing_column() {
    let table = make_table(&["ID"], &[&["1"]]);
    let rules = RuleSet::new(vec![
        ("ID".to_string(), FieldRule::default()),
        ("COUNTRY".to_string(), FieldRule::default()),
        ("SIGNUP".to_string(), FieldRule::default()),
    ]);

    let err = verify_columns(&table, &rules).expect_err("columns missing");
    let StructuralError::MissingColumns { columns } = err;
    assert_eq!(columns, vec!["COUNTRY", "SIGNUP"]);
}

#[test]
fn unlisted_columns_are_unchecked() {
    let table = make_table(&["ID", "NOTES"], &[&["1", ""], &["2", "x"]]);
    let rules = RuleSet::new(vec![("ID".to_string(), rule(true, true, None))]);

    verify_columns(&table, &rules).expect("rule fields present");
    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    assert!(verdicts.iter().all(|verdict| verdict.is_valid()));
}

#[test]
fn summarize_reports_in_declaration_order() {
    let table = make_table(
        &["ID", "COUNTRY"],
        &[&["1", "ZZ"], &["1", "ES"], &["2", "XX"]],
    );
    let rules = RuleSet::new(vec![
        (
            "COUNTRY".to_string(),
            rule(false, false, Some(ExpectedType::CountryCode)),
        ),
        ("ID".to_string(), rule(false, true, None)),
    ]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    let stats = summarize(&verdicts, &rules);
    assert_eq!(stats[0].0, "COUNTRY");
    assert_eq!(stats[0].1.fail_count, 2);
    assert_eq!(stats[0].1.fail_percentage, 66.6667);
    assert_eq!(stats[1].0, "ID");
    assert_eq!(stats[1].1.fail_count, 2);
}

#[test]
fn partition_preserves_order_within_each_side() {
    let table = make_table(&["ID"], &[&["1"], &["2"], &["2"], &[""], &["5"]]);
    let rules = RuleSet::new(vec![(
        "ID".to_string(),
        rule(true, true, Some(ExpectedType::Int)),
    )]);

    let verdicts = classify(&table, &rules, &ValidationOptions::default());
    let (accepted, rejected) = partition(&table, &verdicts);

    let accepted_lines: Vec<u64> = accepted.iter().map(|record| record.line).collect();
    let rejected_lines: Vec<u64> = rejected.iter().map(|record| record.line).collect();
    assert_eq!(accepted_lines, vec![2, 6]);
    assert_eq!(rejected_lines, vec![3, 4, 5]);
}

#[test]
fn custom_date_format_is_threaded_through() {
    let table = make_table(&["TS"], &[&["2023-01-01 10:30:00"], &["2023-01-01"]]);
    let rules = RuleSet::new(vec![(
        "TS".to_string(),
        rule(false, false, Some(ExpectedType::Date)),
    )]);
    let options = ValidationOptions::new().with_date_format("%Y-%m-%d %H:%M:%S");

    let verdicts = classify(&table, &rules, &options);
    assert!(verdicts[0].is_valid());
    assert!(!verdicts[1].is_valid());
}
