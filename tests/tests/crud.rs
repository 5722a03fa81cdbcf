use ormic::{values, Db, Fetch, Model, Rows, Type, Value};
use pretty_assertions::assert_eq;
use tests::{assert_err, assert_none, assert_ok, assert_some, connect, user_model};

#[tokio::test]
async fn save_fetch_delete() {
    let user = user_model();
    assert_eq!(user.to_sql_table(), "users (id INTEGER, name TEXT)");

    let (_db, _log) = assert_ok!(connect(Db::builder().register(&user)).await);

    let mut alice = assert_ok!(user.record(values! { id: 1, name: "a" }));
    assert_eq!(alice.to_sql_literal(), "(1, 'a')");
    assert_ok!(alice.save().await);

    let found = assert_some!(assert_ok!(user.fetch(values! { id: 1 }).await));
    assert_eq!(found, alice);
    assert_eq!(found.get_as::<String>("name").unwrap(), "a");

    assert_ok!(alice.delete(None).await);
    assert_none!(assert_ok!(user.fetch(values! { id: 1 }).await));
}

#[tokio::test]
async fn create_tables_in_registration_order() {
    let user = user_model();
    let post: Model = Model::builder("Post")
        .field("id", Type::I64)
        .field("title", "CHAR")
        .build()
        .unwrap()
        .into();

    let (_db, log) = connect(Db::builder().register(&user).register(&post))
        .await
        .unwrap();

    assert_eq!(
        log.sql(),
        [
            r#"CREATE TABLE IF NOT EXISTS "users" ("id" INTEGER, "name" TEXT);"#,
            r#"CREATE TABLE IF NOT EXISTS "Post" ("id" INTEGER, "title" CHAR);"#,
        ]
    );
}

#[tokio::test]
async fn skip_create_tables() {
    let user = user_model();
    let (db, log) = connect(Db::builder().register(&user).create_tables(false))
        .await
        .unwrap();
    assert!(log.is_empty());

    let err = assert_err!(user.fetch(values! { id: 1 }).await);
    assert!(err.is_driver());

    db.create_tables().await.unwrap();
    assert_none!(user.fetch(values! { id: 1 }).await.unwrap());
}

#[tokio::test]
async fn fetch_all_filters() {
    let user = user_model();
    let (_db, _log) = connect(Db::builder().register(&user)).await.unwrap();

    for (id, name) in [(1, "a"), (2, "b"), (3, "a")] {
        let mut record = user.record(values! { id: id, name: name }).unwrap();
        record.save().await.unwrap();
    }

    let named_a = user.fetch_all(values! { name: "a" }).await.unwrap();
    let ids = named_a
        .iter()
        .map(|record| record.get_as::<i64>("id").unwrap())
        .collect::<Vec<_>>();
    assert_eq!(ids, [1, 3]);

    assert_eq!(user.fetch_all(values! {}).await.unwrap().len(), 3);
    assert!(user
        .fetch_all(values! { id: 2, name: "a" })
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn update_targets_persisted_row() {
    let user = user_model();
    let (_db, log) = connect(Db::builder().register(&user)).await.unwrap();

    let mut a = user.record(values! { id: 1, name: "a" }).unwrap();
    let mut b = user.record(values! { id: 2, name: "b" }).unwrap();
    a.save().await.unwrap();
    b.save().await.unwrap();

    a.update(true, values! { name: "c" }).await.unwrap();
    assert_eq!(
        log.sql().last().unwrap(),
        r#"UPDATE "users" SET "id" = ?1, "name" = ?2 WHERE "id" = ?3 AND "name" = ?4;"#
    );

    // The record now matches its updated row
    a.update(true, values! { name: "d" }).await.unwrap();

    let names = user
        .fetch_all(values! {})
        .await
        .unwrap()
        .iter()
        .map(|record| record.get_as::<String>("name").unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, ["d", "b"]);
}

#[tokio::test]
async fn update_rejects_bad_change() {
    let user = user_model();
    let (_db, log) = connect(Db::builder().register(&user)).await.unwrap();

    let mut a = user.record(values! { id: 1, name: "a" }).unwrap();
    a.save().await.unwrap();
    let before = log.len();

    let err = assert_err!(a.update(true, values! { id: "x" }).await);
    assert!(err.is_invalid_field_value());
    assert_eq!(log.len(), before);
    assert_eq!(a.get("id"), Some(&Value::I64(1)));
}

#[tokio::test]
async fn delete_with_limit() {
    let user = user_model();
    let (_db, _log) = connect(Db::builder().register(&user)).await.unwrap();

    let mut a = user.record(values! { id: 1, name: "a" }).unwrap();
    for _ in 0..3 {
        a.save().await.unwrap();
    }
    let mut b = user.record(values! { id: 2, name: "b" }).unwrap();
    b.save().await.unwrap();

    a.delete(Some(1)).await.unwrap();
    assert_eq!(user.fetch_all(values! { id: 1 }).await.unwrap().len(), 2);

    a.delete(None).await.unwrap();
    assert!(user.fetch_all(values! { id: 1 }).await.unwrap().is_empty());
    assert_eq!(user.fetch_all(values! {}).await.unwrap(), [b]);
}

#[tokio::test]
async fn quoted_text_round_trips() {
    let user = user_model();
    let (_db, _log) = connect(Db::builder().register(&user)).await.unwrap();

    let mut record = user.record(values! { id: 1, name: "O'Brien" }).unwrap();
    assert_eq!(record.to_sql_literal(), "(1, 'O''Brien')");
    record.save().await.unwrap();

    let found = user.fetch(values! { name: "O'Brien" }).await.unwrap();
    assert_eq!(found, Some(record));
}

#[tokio::test]
async fn typed_columns_round_trip() {
    let created = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();

    let event: Model = Model::builder("Event")
        .field("id", "BIGINT")
        .field("score", Type::F64)
        .field("created", Type::DateTime)
        .field_with_default("note", Type::String, "none")
        .build()
        .unwrap()
        .into();

    let (_db, _log) = connect(Db::builder().register(&event)).await.unwrap();

    let mut record = event
        .record(values! { id: 1, score: 2.0, created: created })
        .unwrap();
    record.save().await.unwrap();

    let found = event
        .fetch(values! { created: created })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, record);
    assert_eq!(found.get_as::<f64>("score").unwrap(), 2.0);
    assert_eq!(
        found.get_as::<chrono::NaiveDateTime>("created").unwrap(),
        created
    );
    assert_eq!(found.get("note"), Some(&Value::from("none")));
}

#[tokio::test]
async fn raw_execute() {
    let user = user_model();
    let (db, _log) = connect(Db::builder().register(&user)).await.unwrap();

    let rows = db
        .execute(r#"INSERT INTO users (id, name) VALUES (1, 'a'), (2, 'b')"#, true, Fetch::None)
        .await
        .unwrap();
    assert_eq!(rows, Rows::None);

    let row = db
        .execute("SELECT COUNT(*) FROM users", false, Fetch::One)
        .await
        .unwrap()
        .into_one()
        .unwrap();
    assert_eq!(row[0], Value::I64(2));

    let rows = db
        .execute("SELECT id FROM users ORDER BY id", false, Fetch::All)
        .await
        .unwrap()
        .into_all();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], Value::I64(2));
}

#[tokio::test]
async fn failed_statement_keeps_session_usable() {
    let user = user_model();
    let (db, _log) = connect(Db::builder().register(&user)).await.unwrap();

    let err = assert_err!(db.execute("SELECT * FROM missing", false, Fetch::All).await);
    assert!(err.is_driver());

    let mut record = user.record(values! { id: 1, name: "a" }).unwrap();
    record.save().await.unwrap();
    assert_some!(user.fetch(values! { id: 1 }).await.unwrap());
}

#[tokio::test]
async fn unchecked_default_round_trips() {
    let counter: Model = Model::builder("Counter")
        .field("id", Type::I64)
        .field_with_default("n", Type::I64, "x")
        .build()
        .unwrap()
        .into();
    let (_db, _log) = connect(Db::builder().register(&counter)).await.unwrap();

    let mut record = counter.record(values! { id: 1 }).unwrap();
    record.save().await.unwrap();

    let found = assert_some!(assert_ok!(counter.fetch(values! { id: 1 }).await));
    assert_eq!(found.get("n"), Some(&Value::from("x")));
    assert_eq!(found, record);
}
