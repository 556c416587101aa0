use jamii::models::{Collection, Fields};
use jamii::store::{Database, LocalStore, RecordStore};
use jamii::{table, AppError};
use tempfile::TempDir;

async fn create_test_database(dir: &TempDir) -> Database {
    Database::new(&dir.path().join("jamii.db")).await.unwrap()
}

fn fields(pairs: &[(&str, &str)]) -> Fields {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Runs the same add/update/remove sequence against any backend.
async fn exercise_contract<S: RecordStore>(store: &S) {
    // 1. Empty collections
    assert!(store.list_all(Collection::Family).await.unwrap().is_empty());

    // 2. Add two family members
    let asha = store
        .add(Collection::Family, fields(&[("name", "Asha"), ("phone", "0700")]), Some("u1".to_string()))
        .await
        .unwrap();
    let juma = store
        .add(Collection::Family, fields(&[("name", "Juma"), ("phone", "")]), Some("u2".to_string()))
        .await
        .unwrap();
    assert_ne!(asha, juma);

    let rows = store.list_all(Collection::Family).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("name"), "Asha");
    assert_eq!(rows[0].owner.as_deref(), Some("u1"));
    assert_eq!(rows[1].get("name"), "Juma");

    // 3. Update one field, the other stays
    store.update_field(Collection::Family, asha, "phone", "0711").await.unwrap();
    let rows = store.list_all(Collection::Family).await.unwrap();
    assert_eq!(rows[0].get("phone"), "0711");
    assert_eq!(rows[0].get("name"), "Asha");

    // 4. Other collections untouched
    assert!(store.list_all(Collection::Michango).await.unwrap().is_empty());

    // 5. Remove and verify
    store.remove(Collection::Family, asha).await.unwrap();
    let rows = store.list_all(Collection::Family).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, juma);

    // 6. Unknown ids fail
    assert!(matches!(
        store.remove(Collection::Family, asha).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.update_field(Collection::Family, 9999, "name", "x").await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_database_record_contract() {
    let dir = TempDir::new().unwrap();
    let db = create_test_database(&dir).await;
    exercise_contract(&db).await;
}

#[tokio::test]
async fn test_local_store_record_contract() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(&dir.path().join("records.json")).await.unwrap();
    exercise_contract(&store).await;
}

#[tokio::test]
async fn test_database_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let db = create_test_database(&dir).await;
        db.add(Collection::Michango, fields(&[("name", "Asha"), ("amount", "500")]), None)
            .await
            .unwrap();
        db.pool.close().await;
    }

    let db = create_test_database(&dir).await;
    let rows = db.list_all(Collection::Michango).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("amount"), "500");
    assert!(rows[0].owner.is_none());
}

#[tokio::test]
async fn test_table_workflow_on_database() {
    let dir = TempDir::new().unwrap();
    let db = create_test_database(&dir).await;

    // A blank row carries every schema field
    let rows = table::add_blank_row(&db, Collection::Michango, Some("me".to_string()))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    for spec in Collection::Michango.schema() {
        assert_eq!(rows[0].get(spec.name), "");
        assert!(rows[0].fields.contains_key(spec.name));
    }

    let id = rows[0].id;
    let rows = table::update_row(&db, Collection::Michango, id, "amount", "1,250")
        .await
        .unwrap();
    assert_eq!(rows[0].get("amount"), "1,250");

    // Fields outside the schema are rejected before reaching the store
    let err = table::update_row(&db, Collection::Michango, id, "phone", "0700")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let rows = table::remove_row(&db, Collection::Michango, id).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_local_store_ids_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");

    let first = {
        let store = LocalStore::open(&path).await.unwrap();
        let id = store.add(Collection::Family, Fields::new(), None).await.unwrap();
        store.remove(Collection::Family, id).await.unwrap();
        id
    };

    let store = LocalStore::open(&path).await.unwrap();
    let second = store.add(Collection::Family, Fields::new(), None).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn test_meeting_date_must_be_a_real_day() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(&dir.path().join("records.json")).await.unwrap();

    let rows = table::add_row(
        &store,
        Collection::Meetings,
        fields(&[("date", "2024-03-20"), ("agenda", "Budget"), ("decisions", "Approved")]),
        Some("me".to_string()),
    )
    .await
    .unwrap();
    let id = rows[0].id;

    // 1. Free text and impossible days are refused before reaching the store
    for bad in ["next friday", "2024-02-30"] {
        let err = table::update_row(&store, Collection::Meetings, id, "date", bad)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
    let rows = store.list_all(Collection::Meetings).await.unwrap();
    assert_eq!(rows[0].get("date"), "2024-03-20");

    // 2. Clearing the date and setting a valid one both work
    let rows = table::update_row(&store, Collection::Meetings, id, "date", "").await.unwrap();
    assert_eq!(rows[0].get("date"), "");
    let rows = table::update_row(&store, Collection::Meetings, id, "date", "2024-02-29")
        .await
        .unwrap();
    assert_eq!(rows[0].get("date"), "2024-02-29");

    // 3. New rows are checked too
    let err = table::add_row(&store, Collection::Michango, fields(&[("date", "someday")]), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(store.list_all(Collection::Michango).await.unwrap().is_empty());
}
