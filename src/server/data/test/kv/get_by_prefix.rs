use super::*;

/// Tests that prefix scans match literally even though `_` is a LIKE wildcard.
///
/// Expected: Ok(only keys beginning with the exact prefix)
#[tokio::test]
async fn underscore_is_not_a_wildcard() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set("attendance:event_1:user_1", &"a1").await?;
    repo.set("attendance:event_1:user_2", &"a2").await?;
    repo.set("attendance:eventX1:user_3", &"a3").await?;
    repo.set("attendance:event_10:user_4", &"a4").await?;

    let entries = repo.get_by_prefix::<String>("attendance:event_1:").await?;
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();

    assert_eq!(
        keys,
        vec!["attendance:event_1:user_1", "attendance:event_1:user_2"]
    );

    Ok(())
}

/// Tests that prefix scans are case-sensitive.
///
/// Expected: Ok(lowercase key only)
#[tokio::test]
async fn prefix_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set("user:one", &1).await?;
    repo.set("USER:two", &2).await?;

    let entries = repo.get_by_prefix::<i32>("user:").await?;

    assert_eq!(entries, vec![("user:one".to_string(), 1)]);

    Ok(())
}
