use pretty_assertions::assert_eq;

use quill::{Db, Expr, FieldDescriptor, InItem, Record, RecordType, Value};

fn open_with_trainers() -> Db {
    let mut db = Db::in_memory().unwrap();
    db.declare(
        RecordType::new(
            "trainer",
            vec![
                FieldDescriptor::text("name"),
                FieldDescriptor::integer("age"),
            ],
        )
        .unwrap(),
    )
    .unwrap();

    let trainer = db.table("trainer").unwrap();
    db.create_table()
        .from_record_type(trainer)
        .execute()
        .unwrap();

    for (name, age) in [("Giovanni", 42), ("James", 21), ("Jessie", 17)] {
        let record = Record::new(
            trainer,
            [("name", Value::from(name)), ("age", Value::from(age))],
        )
        .unwrap();
        db.insert(trainer).record(&record).unwrap().execute().unwrap();
    }

    db
}

fn names(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.get("name").unwrap().as_str().unwrap().to_string())
        .collect()
}

#[test]
fn nth_is_limit_offset_sugar() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();

    let first = db.select(trainer).nth(0).unwrap();
    assert_eq!(first.get("name"), Some(&Value::from("Giovanni")));

    let third = db.select(trainer).nth(2).unwrap();
    assert_eq!(third.get("name"), Some(&Value::from("Jessie")));
}

#[test]
fn nth_out_of_range_is_an_error() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();

    let err = db.select(trainer).nth(5).unwrap_err();
    assert!(err.is_record_not_found());
}

#[test]
fn slices_map_onto_limit_and_offset() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();

    let middle = db.select(trainer).slice(1..3).unwrap();
    assert_eq!(names(&middle), ["James", "Jessie"]);

    let head = db.select(trainer).slice(..2).unwrap();
    assert_eq!(names(&head), ["Giovanni", "James"]);

    let tail = db.select(trainer).slice(1..).unwrap();
    assert_eq!(names(&tail), ["James", "Jessie"]);
}

#[test]
fn dicts_honor_the_selected_field_subset() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let name = trainer.field("name").unwrap();

    let dicts = db.select(trainer).select(&[name]).dicts().unwrap();

    assert_eq!(dicts.len(), 3);
    assert_eq!(dicts[0].len(), 1);
    assert_eq!(dicts[0]["name"], Value::from("Giovanni"));
}

#[test]
fn record_materialization_rejects_field_subsets() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let name = trainer.field("name").unwrap();

    let err = db.select(trainer).select(&[name]).records().unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn tuples_return_raw_rows_in_schema_order() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();

    let rows = db.select(trainer).tuples().unwrap();

    // Columns follow the name-sorted field order: age, name, pk.
    assert_eq!(
        rows[0],
        vec![Value::Integer(42), Value::from("Giovanni"), Value::Integer(1)]
    );
}

#[test]
fn order_by_named_field() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let age = trainer.field("age").unwrap();

    let by_age = db.select(trainer).order_by(age.asc()).records().unwrap();
    assert_eq!(names(&by_age), ["Jessie", "James", "Giovanni"]);

    let by_age_desc = db.select(trainer).order_by(age.desc()).records().unwrap();
    assert_eq!(names(&by_age_desc), ["Giovanni", "James", "Jessie"]);
}

#[test]
fn distinct_deduplicates_the_selected_fields() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let name = trainer.field("name").unwrap();

    let twin = Record::new(
        trainer,
        [("name", Value::from("Jessie")), ("age", Value::from(18))],
    )
    .unwrap();
    db.insert(trainer).record(&twin).unwrap().execute().unwrap();

    let rows = db.select(trainer).distinct(&[name]).tuples().unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn in_list_mixes_subqueries_and_scalars() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let pk = trainer.field("pk").unwrap();
    let age = trainer.field("age").unwrap();

    // pk of every trainer over 30, plus Jessie's pk as a scalar.
    let over_30 = db
        .select(trainer)
        .select(&[pk])
        .filter(age.gt(30).unwrap())
        .into_select();

    let matched = db
        .select(trainer)
        .filter(pk.in_list([InItem::from(over_30), InItem::from(3)]).unwrap())
        .records()
        .unwrap();

    assert_eq!(names(&matched), ["Giovanni", "Jessie"]);
}

#[test]
fn in_with_a_single_subquery() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let pk = trainer.field("pk").unwrap();
    let age = trainer.field("age").unwrap();

    let minors = db
        .select(trainer)
        .select(&[pk])
        .filter(age.lt(18).unwrap())
        .into_select();

    let matched = db
        .select(trainer)
        .filter(pk.in_select(minors))
        .records()
        .unwrap();

    assert_eq!(names(&matched), ["Jessie"]);
}

#[test]
fn between_is_inclusive_on_both_ends() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let age = trainer.field("age").unwrap();

    let matched = db
        .select(trainer)
        .filter(age.between(17, 21).unwrap())
        .records()
        .unwrap();

    assert_eq!(names(&matched), ["James", "Jessie"]);
}

#[test]
fn exists_gates_on_the_subquery_having_rows() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let age = trainer.field("age").unwrap();

    let some_adult = db.select(trainer).filter(age.gt(30).unwrap()).exists();
    let all = db.select(trainer).filter(some_adult).records().unwrap();
    assert_eq!(all.len(), 3);

    let nobody = db.select(trainer).filter(age.gt(100).unwrap()).exists();
    let none = db.select(trainer).filter(nobody).records().unwrap();
    assert!(none.is_empty());
}

#[test]
fn or_groups_compose_with_and() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let name = trainer.field("name").unwrap();
    let age = trainer.field("age").unwrap();

    let either = Expr::or(
        name.eq("Giovanni").unwrap(),
        name.eq("Jessie").unwrap(),
    );

    let matched = db
        .select(trainer)
        .filter(either)
        .filter(age.gt(18).unwrap())
        .records()
        .unwrap();

    assert_eq!(names(&matched), ["Giovanni"]);
}

#[test]
fn display_wraps_the_statement_for_nesting() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let age = trainer.field("age").unwrap();

    let query = db.select(trainer).filter(age.gt(18).unwrap());

    assert_eq!(
        query.to_string(),
        "(SELECT * FROM trainer WHERE trainer.age > 18)"
    );
}

#[test]
fn chained_filters_build_the_same_sql_as_a_combined_expression() {
    let db = open_with_trainers();
    let trainer = db.table("trainer").unwrap();
    let name = trainer.field("name").unwrap();
    let age = trainer.field("age").unwrap();

    let chained = db
        .select(trainer)
        .filter(age.gt(18).unwrap())
        .filter(name.ne("Giovanni").unwrap())
        .build();

    let combined = db
        .select(trainer)
        .filter(Expr::and(
            age.gt(18).unwrap(),
            name.ne("Giovanni").unwrap(),
        ))
        .build();

    assert_eq!(chained, combined);
}
