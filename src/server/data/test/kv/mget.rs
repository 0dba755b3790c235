use super::*;

/// Tests that mget preserves request order and reports missing keys as None.
///
/// Expected: Ok([Some(a), None, Some(b)])
#[tokio::test]
async fn preserves_order_with_gaps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set("k:b", &"b").await?;
    repo.set("k:a", &"a").await?;

    let keys = vec!["k:a".to_string(), "k:missing".to_string(), "k:b".to_string()];
    let values = repo.mget::<String>(&keys).await?;

    assert_eq!(
        values,
        vec![Some("a".to_string()), None, Some("b".to_string())]
    );

    Ok(())
}

/// Tests mget with no keys does not touch the database.
///
/// Expected: Ok([])
#[tokio::test]
async fn empty_request_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    let values = repo.mget::<Value>(&[]).await?;

    assert!(values.is_empty());

    Ok(())
}
