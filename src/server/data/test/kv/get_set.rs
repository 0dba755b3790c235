use super::*;

/// Tests storing and reading back a JSON document.
///
/// Expected: Ok(Some(value))
#[tokio::test]
async fn reads_back_stored_value() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set("team:t1", &json!({ "name": "Hawks" })).await?;

    let value = repo.get::<Value>("team:t1").await?;
    assert_eq!(value, Some(json!({ "name": "Hawks" })));

    Ok(())
}

/// Tests that a second write to the same key replaces the value.
///
/// Expected: Ok(Some(second value))
#[tokio::test]
async fn overwrites_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set("counter", &1).await?;
    repo.set("counter", &2).await?;

    assert_eq!(repo.get::<i32>("counter").await?, Some(2));

    Ok(())
}

/// Tests reading a key that was never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_key_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);

    assert_eq!(repo.get::<Value>("nothing").await?, None);
    assert!(!repo.exists("nothing").await?);

    Ok(())
}

/// Tests deleting a key reports whether anything was removed.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn del_reports_removal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set("session:abc", &json!({})).await?;

    assert!(repo.del("session:abc").await?);
    assert!(!repo.del("session:abc").await?);
    assert!(!repo.exists("session:abc").await?);

    Ok(())
}

/// Tests that a value of the wrong shape surfaces as an error instead of a panic.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn undecodable_value_is_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set("user:u1", &json!({ "unexpected": true })).await?;

    let result = repo.get::<Vec<String>>("user:u1").await;
    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
