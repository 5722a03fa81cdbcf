use ormic::{values, Db, Fetch, Model, Type};
use pretty_assertions::assert_eq;
use tests::{assert_err, connect, user_model};

#[tokio::test]
async fn execute_before_connect() {
    let db = Db::new();

    for fetch in [Fetch::None, Fetch::One, Fetch::All] {
        let err = assert_err!(db.execute("SELECT 1", true, fetch).await);
        assert!(err.is_not_connected());
        assert_eq!(
            err.to_string(),
            "this database handler isn't connected to a database"
        );
    }
}

#[tokio::test]
async fn crud_before_connect() {
    let user = user_model();
    let db = Db::new();
    db.register_model(&user);

    let mut record = user.record(values! { id: 1, name: "a" }).unwrap();
    assert!(assert_err!(record.save().await).is_not_connected());
    assert!(assert_err!(record.update(true, values! { name: "b" }).await).is_not_connected());
    assert!(assert_err!(record.delete(None).await).is_not_connected());
    assert!(assert_err!(user.fetch_all(values! {}).await).is_not_connected());
    assert!(assert_err!(db.create_tables().await).is_not_connected());
}

#[tokio::test]
async fn model_without_db() {
    let user = user_model();

    let mut record = user.record(values! { id: 1 }).unwrap();
    let err = assert_err!(record.save().await);
    assert!(err.is_not_registered());
    assert_eq!(
        err.to_string(),
        "model `User` has not been added to any database"
    );
}

#[tokio::test]
async fn unknown_fetch_field_issues_no_query() {
    let user = user_model();
    let (_db, log) = connect(Db::builder().register(&user)).await.unwrap();
    let before = log.len();

    let err = assert_err!(user.fetch(values! { nickname: "a" }).await);
    assert!(err.is_unknown_field());
    assert_eq!(log.len(), before);
}

#[test]
fn unmapped_field_types() {
    let err = assert_err!(Model::builder("Flag").field("on", Type::Bool).build());
    assert!(err.is_unsupported_type());

    let err = assert_err!(Model::builder("Name").field("name", "VARCHAR").build());
    assert_eq!(err.to_string(), "unsupported type: VARCHAR");
}

#[tokio::test]
async fn unsupported_url() {
    let db = Db::new();
    let err = assert_err!(db.connect("mysql://localhost/app", true).await);
    assert!(!err.is_not_connected());
    assert!(!db.is_connected().await);
}
