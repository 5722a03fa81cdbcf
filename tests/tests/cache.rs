use ormic::{values, Db, Record};
use pretty_assertions::assert_eq;
use tests::{assert_none, assert_some, connect, user_model, ExecLog};

async fn seed(user: &ormic::Model, count: i64) -> Vec<Record> {
    let mut records = vec![];
    for id in 1..=count {
        let mut record = user
            .record(values! { id: id, name: format!("user{id}") })
            .unwrap();
        record.save().await.unwrap();
        records.push(record);
    }
    records
}

async fn setup(enabled: bool, limit: usize) -> (Db, ExecLog, ormic::Model) {
    let user = user_model();
    let (db, log) = connect(Db::builder().register(&user).cache(enabled, limit))
        .await
        .unwrap();
    (db, log, user)
}

#[tokio::test]
async fn fetch_all_admits_up_to_limit() {
    let (_db, _log, user) = setup(true, 2).await;
    let records = seed(&user, 3).await;

    // Saving does not admit
    assert_none!(user.get(values! { id: 1 }).unwrap());

    user.fetch_all(values! {}).await.unwrap();

    assert_eq!(user.get(values! { id: 1 }).unwrap().as_ref(), Some(&records[0]));
    assert_eq!(user.get(values! { id: 2 }).unwrap().as_ref(), Some(&records[1]));
    assert_none!(user.get(values! { id: 3 }).unwrap());
}

#[tokio::test]
async fn get_or_fetch_hit_skips_storage() {
    let (_db, mut log, user) = setup(true, 10).await;
    let records = seed(&user, 2).await;

    user.fetch(values! { id: 1 }).await.unwrap();
    log.clear();

    let hit = assert_some!(user.get_or_fetch(values! { id: 1 }).await.unwrap());
    assert_eq!(hit, records[0]);
    assert!(log.is_empty());

    let miss = assert_some!(user.get_or_fetch(values! { id: 2 }).await.unwrap());
    assert_eq!(miss, records[1]);
    assert_eq!(log.count_prefix("SELECT"), 1);

    // The fetch admitted the record
    log.clear();
    assert_some!(user.get_or_fetch(values! { id: 2 }).await.unwrap());
    assert!(log.is_empty());
}

#[tokio::test]
async fn get_or_fetch_miss_everywhere() {
    let (_db, log, user) = setup(true, 10).await;
    seed(&user, 1).await;
    let before = log.len();

    assert_none!(user.get_or_fetch(values! { id: 9 }).await.unwrap());
    assert_eq!(log.len(), before + 1);
}

#[tokio::test]
async fn disabled_cache_never_admits() {
    let (db, mut log, user) = setup(false, 10).await;
    seed(&user, 1).await;

    user.fetch(values! { id: 1 }).await.unwrap();
    assert!(!db.caching_enabled(&user));
    assert_none!(user.get(values! { id: 1 }).unwrap());

    log.clear();
    assert_some!(user.get_or_fetch(values! { id: 1 }).await.unwrap());
    assert_eq!(log.len(), 1);

    // Turned on later, the next fetch admits
    db.set_caching(true, 10);
    user.fetch(values! { id: 1 }).await.unwrap();
    assert_some!(user.get(values! { id: 1 }).unwrap());
}

#[tokio::test]
async fn duplicate_fetches_are_cached_once() {
    let (db, _log, user) = setup(true, 2).await;
    let records = seed(&user, 2).await;

    user.fetch(values! { id: 1 }).await.unwrap();
    user.fetch(values! { id: 1 }).await.unwrap();
    user.fetch(values! { id: 2 }).await.unwrap();

    assert_eq!(user.get(values! { id: 2 }).unwrap(), Some(records[1].clone()));

    // Admission through the session respects the same rules
    db.admit_to_cache(&user, records.clone());
    assert_eq!(user.get(values! {}).unwrap(), Some(records[0].clone()));
}

#[tokio::test]
async fn unknown_filter_field_misses_cache() {
    let (_db, _log, user) = setup(true, 10).await;
    seed(&user, 1).await;
    user.fetch(values! { id: 1 }).await.unwrap();

    assert_none!(user.get(values! { id: 1, nickname: "x" }).unwrap());
}

#[tokio::test]
async fn integer_filter_hits_float_field() {
    let scored: ormic::Model = ormic::Model::builder("Scored")
        .field("id", ormic::Type::I64)
        .field("score", ormic::Type::F64)
        .build()
        .unwrap()
        .into();
    let (_db, mut log) = connect(Db::builder().register(&scored).cache(true, 10))
        .await
        .unwrap();

    let mut record = scored.record(values! { id: 1, score: 2.0 }).unwrap();
    record.save().await.unwrap();

    assert_some!(scored.fetch(values! { score: 2 }).await.unwrap());
    assert_eq!(scored.get(values! { score: 2 }).unwrap(), Some(record.clone()));

    log.clear();
    let hit = assert_some!(scored.get_or_fetch(values! { score: 2 }).await.unwrap());
    assert_eq!(hit, record);
    assert!(log.is_empty());
}
