use super::*;

/// Tests appending ids keeps insertion order and ignores duplicates.
///
/// Expected: Ok(["a", "b"])
#[tokio::test]
async fn append_skips_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    assert!(repo.append_to_list("team:t:members", "a").await?);
    assert!(repo.append_to_list("team:t:members", "b").await?);
    assert!(!repo.append_to_list("team:t:members", "a").await?);

    assert_eq!(repo.get_list("team:t:members").await?, vec!["a", "b"]);

    Ok(())
}

/// Tests prepending puts the newest id first.
///
/// Expected: Ok(["second", "first"])
#[tokio::test]
async fn prepend_puts_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.prepend_to_list("team:t:messages", "first").await?;
    repo.prepend_to_list("team:t:messages", "second").await?;

    assert_eq!(
        repo.get_list("team:t:messages").await?,
        vec!["second", "first"]
    );

    Ok(())
}

/// Tests removing an id that is not listed leaves the list alone.
///
/// Expected: Ok(false) and the list unchanged
#[tokio::test]
async fn remove_reports_absent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.append_to_list("user:u:teams", "t1").await?;
    repo.append_to_list("user:u:teams", "t2").await?;

    assert!(!repo.remove_from_list("user:u:teams", "t3").await?);
    assert!(repo.remove_from_list("user:u:teams", "t1").await?);
    assert_eq!(repo.get_list("user:u:teams").await?, vec!["t2"]);

    Ok(())
}

/// Tests loading listed records skips ids whose record is gone.
///
/// Expected: Ok([record of "a"])
#[tokio::test]
async fn get_listed_skips_dangling_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_kv_store().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = KvRepository::new(db);
    repo.set("item:a", &json!({ "id": "a" })).await?;
    repo.append_to_list("items", "a").await?;
    repo.append_to_list("items", "gone").await?;

    let items = repo
        .get_listed::<Value>("items", |id| format!("item:{}", id))
        .await?;

    assert_eq!(items, vec![json!({ "id": "a" })]);

    Ok(())
}
