use pretty_assertions::assert_eq;

use quill::{Db, Error, FieldDescriptor, Record, RecordType, Value};

fn open() -> Db {
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

    db
}

fn insert_trainer(db: &Db, name: &str, age: i64) -> quill::Result<Option<i64>> {
    let trainer = db.table("trainer")?;
    let record = Record::new(
        trainer,
        [("name", Value::from(name)), ("age", Value::from(age))],
    )?;

    db.insert(trainer).record(&record)?.execute()
}

fn count(db: &Db) -> usize {
    let trainer = db.table("trainer").unwrap();
    db.select(trainer).records().unwrap().len()
}

#[test]
fn commits_on_ok() {
    let db = open();

    db.transaction(|db| {
        insert_trainer(db, "Giovanni", 42)?;
        insert_trainer(db, "James", 21)?;
        Ok(())
    })
    .unwrap();

    assert_eq!(count(&db), 2);
}

#[test]
fn rolls_back_on_err() {
    let db = open();

    let err = db
        .transaction(|db| -> quill::Result<()> {
            insert_trainer(db, "Giovanni", 42)?;
            Err(Error::invalid_statement("abort the batch"))
        })
        .unwrap_err();

    assert!(err.is_invalid_statement());
    assert_eq!(count(&db), 0);
}

#[test]
fn nested_scopes_only_commit_at_the_outermost_level() {
    let db = open();

    db.transaction(|db| {
        insert_trainer(db, "Giovanni", 42)?;

        db.transaction(|db| {
            insert_trainer(db, "James", 21)?;
            Ok(())
        })?;

        insert_trainer(db, "Jessie", 17)?;
        Ok(())
    })
    .unwrap();

    assert_eq!(count(&db), 3);
}

#[test]
fn an_inner_error_rolls_back_the_whole_scope() {
    let db = open();

    let result: quill::Result<()> = db.transaction(|db| {
        insert_trainer(db, "Giovanni", 42)?;

        db.transaction(|db| -> quill::Result<()> {
            insert_trainer(db, "James", 21)?;
            Err(Error::invalid_statement("abort from the inner scope"))
        })
    });

    assert!(result.is_err());
    assert_eq!(count(&db), 0);
}

#[test]
fn statements_keep_working_after_a_rollback() {
    let db = open();

    let _ = db.transaction(|db| -> quill::Result<()> {
        insert_trainer(db, "Giovanni", 42)?;
        Err(Error::invalid_statement("abort"))
    });

    insert_trainer(&db, "James", 21).unwrap();
    assert_eq!(count(&db), 1);
}
