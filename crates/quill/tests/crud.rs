use pretty_assertions::assert_eq;

use quill::{Db, FieldDescriptor, Record, RecordType, Value};

fn trainer_type() -> RecordType {
    RecordType::new(
        "trainer",
        vec![
            FieldDescriptor::text("name"),
            FieldDescriptor::integer("age"),
        ],
    )
    .unwrap()
}

fn open() -> Db {
    let mut db = Db::in_memory().unwrap();
    db.declare(trainer_type()).unwrap();

    let trainer = db.table("trainer").unwrap();
    db.create_table()
        .from_record_type(trainer)
        .execute()
        .unwrap();

    db
}

fn new_trainer(db: &Db, name: &str, age: i64) -> Record {
    let trainer = db.table("trainer").unwrap();
    Record::new(
        trainer,
        [("name", Value::from(name)), ("age", Value::from(age))],
    )
    .unwrap()
}

fn add_trainers(db: &Db) {
    let trainer = db.table("trainer").unwrap();

    for (name, age) in [("Giovanni", 42), ("James", 21), ("Jessie", 17)] {
        let record = new_trainer(db, name, age);
        db.insert(trainer).record(&record).unwrap().execute().unwrap();
    }
}

#[test]
fn insert_returns_the_generated_pk_and_rows_round_trip() {
    let db = open();
    let trainer = db.table("trainer").unwrap();

    let giovanni = new_trainer(&db, "Giovanni", 42);
    let pk = db
        .insert(trainer)
        .record(&giovanni)
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(pk, Some(1));

    let loaded = db.select(trainer).records().unwrap();
    assert_eq!(loaded, vec![giovanni.with_pk(1)]);
}

#[test]
fn explicit_pk_override_is_honored() {
    let db = open();
    let trainer = db.table("trainer").unwrap();

    let record = Record::new(
        trainer,
        [
            ("name", Value::from("Giovanni")),
            ("age", Value::from(42)),
            ("pk", Value::from(10)),
        ],
    )
    .unwrap();

    let pk = db.insert(trainer).record(&record).unwrap().execute().unwrap();
    assert_eq!(pk, Some(10));
}

#[test]
fn batch_insert_returns_no_id() {
    let db = open();
    let trainer = db.table("trainer").unwrap();

    let records = vec![new_trainer(&db, "James", 21), new_trainer(&db, "Jessie", 17)];
    let pk = db
        .insert(trainer)
        .records(&records)
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(pk, None);
    assert_eq!(db.select(trainer).records().unwrap().len(), 2);
}

#[test]
fn filters_select_matching_rows_in_insertion_order() {
    let db = open();
    add_trainers(&db);

    let trainer = db.table("trainer").unwrap();
    let age = trainer.field("age").unwrap();

    let adults = db
        .select(trainer)
        .filter(age.gt(18).unwrap())
        .records()
        .unwrap();

    let names: Vec<_> = adults
        .iter()
        .map(|record| record.get("name").unwrap().as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Giovanni", "James"]);
    assert_eq!(adults[0].get("age"), Some(&Value::Integer(42)));
}

#[test]
fn chained_filters_and_together() {
    let db = open();
    add_trainers(&db);

    let trainer = db.table("trainer").unwrap();
    let age = trainer.field("age").unwrap();
    let name = trainer.field("name").unwrap();

    let result = db
        .select(trainer)
        .filter(age.gt(18).unwrap())
        .filter(name.ne("Giovanni").unwrap())
        .records()
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].get("name"), Some(&Value::from("James")));
    assert_eq!(result[0].get("age"), Some(&Value::Integer(21)));
}

#[test]
fn update_changes_only_the_matching_row() {
    let db = open();
    add_trainers(&db);

    let trainer = db.table("trainer").unwrap();
    let name = trainer.field("name").unwrap();
    let age = trainer.field("age").unwrap();

    let affected = db
        .update(trainer)
        .set(name.assign("Mario").unwrap())
        .filter(age.eq(21).unwrap())
        .execute()
        .unwrap();
    assert_eq!(affected, 1);

    let records = db.select(trainer).records().unwrap();
    let names: Vec<_> = records
        .iter()
        .map(|record| record.get("name").unwrap().as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Giovanni", "Mario", "Jessie"]);

    // The matched row keeps its other fields.
    assert_eq!(records[1].get("age"), Some(&Value::Integer(21)));
}

#[test]
fn delete_without_a_filter_removes_every_row() {
    let db = open();
    add_trainers(&db);

    let trainer = db.table("trainer").unwrap();

    let removed = db.delete(trainer).execute().unwrap();
    assert_eq!(removed, 3);
    assert!(db.select(trainer).records().unwrap().is_empty());
}

#[test]
fn delete_with_a_filter_removes_matching_rows_only() {
    let db = open();
    add_trainers(&db);

    let trainer = db.table("trainer").unwrap();
    let age = trainer.field("age").unwrap();

    let removed = db
        .delete(trainer)
        .filter(age.lt(18).unwrap())
        .execute()
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(db.select(trainer).records().unwrap().len(), 2);
}

#[test]
fn create_table_twice_is_a_noop() {
    let db = open();
    let trainer = db.table("trainer").unwrap();

    db.create_table()
        .from_record_type(trainer)
        .execute()
        .unwrap();

    add_trainers(&db);
    assert_eq!(db.select(trainer).records().unwrap().len(), 3);
}

#[test]
fn create_table_from_raw_fields_has_no_implicit_pk() {
    let db = Db::in_memory().unwrap();

    let sql = db
        .create_table()
        .table("trainer")
        .fields(&[
            FieldDescriptor::text("name"),
            FieldDescriptor::integer("age"),
        ])
        .build()
        .unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS trainer (age INTEGER NOT NULL, name TEXT NOT NULL)"
    );
}

#[test]
fn insert_with_an_explicit_field_subset() {
    let mut db = Db::in_memory().unwrap();
    db.declare(
        RecordType::new(
            "pokemon",
            vec![
                FieldDescriptor::text("name"),
                FieldDescriptor::integer("level").required(false),
            ],
        )
        .unwrap(),
    )
    .unwrap();

    let pokemon = db.table("pokemon").unwrap();
    db.create_table()
        .from_record_type(pokemon)
        .execute()
        .unwrap();

    let name = pokemon.field("name").unwrap();
    let koffing = Record::new(
        pokemon,
        [("name", Value::from("Koffing")), ("level", Value::from(9))],
    )
    .unwrap();

    db.insert(pokemon)
        .fields(&[name])
        .record(&koffing)
        .unwrap()
        .execute()
        .unwrap();

    // Only the selected column was written; level stayed null.
    let rows = db.select(pokemon).tuples().unwrap();
    assert_eq!(
        rows[0],
        vec![Value::Null, Value::from("Koffing"), Value::Integer(1)]
    );
}

#[test]
fn opens_from_a_connection_url() {
    let mut db = Db::open("sqlite::memory:").unwrap();
    db.declare(trainer_type()).unwrap();

    let trainer = db.table("trainer").unwrap();
    db.create_table()
        .from_record_type(trainer)
        .execute()
        .unwrap();

    let giovanni = new_trainer(&db, "Giovanni", 42);
    db.insert(trainer).record(&giovanni).unwrap().execute().unwrap();
    assert_eq!(db.select(trainer).records().unwrap().len(), 1);
}

#[test]
fn drop_table_is_idempotent() {
    let db = open();

    db.drop_table().table("trainer").execute().unwrap();
    db.drop_table().table("trainer").execute().unwrap();
    db.drop_table().table("never_created").execute().unwrap();
}

#[test]
fn unique_violations_surface_as_integrity_violations() {
    let mut db = Db::in_memory().unwrap();
    db.declare(
        RecordType::new("user", vec![FieldDescriptor::text("name").unique(true)]).unwrap(),
    )
    .unwrap();

    let user = db.table("user").unwrap();
    db.create_table().from_record_type(user).execute().unwrap();

    let mario = Record::new(user, [("name", Value::from("Mario"))]).unwrap();
    db.insert(user).record(&mario).unwrap().execute().unwrap();

    let err = db
        .insert(user)
        .record(&mario)
        .unwrap()
        .execute()
        .unwrap_err();
    assert!(err.is_integrity_violation());
}

#[test]
fn foreign_key_violations_surface_as_integrity_violations() {
    let mut db = Db::in_memory().unwrap();
    db.declare(trainer_type()).unwrap();
    db.declare(
        RecordType::new(
            "pokemon",
            vec![
                FieldDescriptor::text("name"),
                FieldDescriptor::foreign_key("trainer", "trainer"),
            ],
        )
        .unwrap(),
    )
    .unwrap();

    let trainer = db.table("trainer").unwrap();
    let pokemon = db.table("pokemon").unwrap();
    db.create_table()
        .from_record_type(trainer)
        .execute()
        .unwrap();
    db.create_table()
        .from_record_type(pokemon)
        .execute()
        .unwrap();

    let stray = Record::new(
        pokemon,
        [("name", Value::from("Koffing")), ("trainer", Value::from(999))],
    )
    .unwrap();

    let err = db
        .insert(pokemon)
        .record(&stray)
        .unwrap()
        .execute()
        .unwrap_err();
    assert!(err.is_integrity_violation());
}
