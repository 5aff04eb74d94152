use pretty_assertions::assert_eq;
use rowmap::{FieldMap, ModelRegistry, QueryOptions, Record, Updated, Value, Values};
use std_util::assert_err;
use tests::{models, setup};

#[tokio::test]
async fn persist_assigns_generated_key() {
    let (db, log) = setup(ModelRegistry::builder().register(models::user())).await;
    let user = db.model("User").unwrap();

    let mut ann = user.create(Values::new().set("name", "ann").set("id", 40));
    assert!(ann.persist(&db, false).await.unwrap());

    // The generated key replaces the supplied one.
    let exec = log.pop();
    assert_eq!(exec.sql, "INSERT INTO `user` (`name`, `active`) VALUES (?, ?);");
    assert_eq!(exec.params, [Value::from("ann"), Value::I64(1)]);
    assert_eq!(ann.get("id"), Some(&Value::I64(1)));

    let mut bo = user.create(Values::new().set("name", "bo").set("active", false));
    assert!(bo.persist(&db, false).await.unwrap());
    assert_eq!(bo.get_as::<i64>("id").unwrap(), Some(2));
    assert_eq!(log.pop().params, [Value::from("bo"), Value::I64(0)]);
}

#[tokio::test]
async fn persist_keeps_supplied_key() {
    let (db, log) = setup(ModelRegistry::builder().register(models::tag())).await;
    let tag = db.model("Tag").unwrap();

    let mut rust = tag.create(Values::new().set("slug", "rust").set("label", "Rust"));
    assert!(rust.is_persisted());
    assert!(rust.persist(&db, false).await.unwrap());

    let exec = log.pop();
    assert_eq!(exec.sql, "INSERT INTO `tag` (`slug`, `label`) VALUES (?, ?);");
    assert_eq!(rust.get("slug"), Some(&Value::from("rust")));

    // Duplicate keys surface as driver errors.
    let mut again = tag.create(Values::new().set("slug", "rust"));
    assert!(assert_err!(again.persist(&db, false).await).is_driver());
}

#[tokio::test]
async fn persist_reads_back_database_assigned_key() {
    let (db, log) = setup(ModelRegistry::builder().register(models::item())).await;
    let item = db.model("Item").unwrap();

    let mut first = item.create(Values::new().set("name", "a"));
    assert!(first.persist(&db, false).await.unwrap());
    assert_eq!(log.pop().sql, "INSERT INTO `item` (`name`) VALUES (?);");
    assert_eq!(first.get("id"), Some(&Value::I64(1)));
    assert!(first.is_persisted());

    first.set("name", "b");
    assert!(first.update(&db, false).await.unwrap().is_updated());
    assert_eq!(log.pop().sql, "UPDATE `item` SET `name`=? WHERE `id`=?;");

    // A supplied key is sent and kept.
    let mut chosen = item.create(Values::new().set("id", 10).set("name", "c"));
    assert!(chosen.persist(&db, false).await.unwrap());
    assert_eq!(log.pop().sql, "INSERT INTO `item` (`id`, `name`) VALUES (?, ?);");
    assert_eq!(chosen.get("id"), Some(&Value::I64(10)));

    assert!(first.remove(&db).await.unwrap());
}

#[tokio::test]
async fn second_key_field_is_an_ordinary_column() {
    let (db, log) = setup(ModelRegistry::builder().register(models::pair())).await;
    let pair = db.model("Pair").unwrap();

    let mut record = pair.create(Values::new().set("b", "x").set("c", "y"));
    assert!(record.persist(&db, false).await.unwrap());
    assert_eq!(record.get("a"), Some(&Value::I64(1)));
    log.clear();

    record.set("b", "changed");
    assert!(record.update(&db, false).await.unwrap().is_updated());
    assert_eq!(
        log.pop().sql,
        "UPDATE `pair` SET `b`=?, `c`=? WHERE `a`=?;"
    );

    let stored = pair.one(&db, 1, QueryOptions::default()).await.unwrap().unwrap();
    assert_eq!(stored.get("b"), Some(&Value::from("changed")));
}

#[tokio::test]
async fn persist_fills_auto_update_field() {
    let (db, log) = setup(ModelRegistry::builder().register(models::post())).await;
    let post = db.model("Post").unwrap();

    let mut hello = post.create(Values::new().set("title", "hello"));

    // `default_now` resolves when the record is created.
    let created_at = hello.get_as::<chrono::DateTime<chrono::Utc>>("updated_at").unwrap();
    assert!(created_at.is_some());

    hello.unset("updated_at");
    assert!(hello.persist(&db, false).await.unwrap());

    let exec = log.pop();
    assert_eq!(
        exec.sql,
        "INSERT INTO `post` (`title`, `updated_at`) VALUES (?, ?);"
    );
    assert_eq!(Some(&exec.params[1]), hello.get("updated_at"));
}

#[tokio::test]
async fn update_refreshes_auto_update_field() {
    let (db, log) = setup(ModelRegistry::builder().register(models::post())).await;
    let post = db.model("Post").unwrap();

    let mut hello = post.create(
        Values::new()
            .set("title", "hello")
            .set("tags", serde_json::json!(["a", "b"])),
    );
    assert!(hello.persist(&db, false).await.unwrap());
    log.clear();

    hello.set("title", "hello, world");
    let updated = hello.update(&db, false).await.unwrap();
    assert!(updated.is_updated());

    let modify_time = updated.modify_time.unwrap();
    assert_eq!(hello.get("updated_at"), Some(&Value::Timestamp(modify_time)));

    let exec = log.pop();
    assert_eq!(
        exec.sql,
        "UPDATE `post` SET `title`=?, `tags`=?, `updated_at`=? WHERE `id`=?;"
    );
    assert_eq!(exec.params[3], Value::I64(1));

    let stored = post.one(&db, 1, QueryOptions::default()).await.unwrap().unwrap();
    assert_eq!(stored.get_as::<String>("title").unwrap().as_deref(), Some("hello, world"));
    assert_eq!(
        stored.get("tags"),
        Some(&Value::Json(serde_json::json!(["a", "b"])))
    );

    // Timestamps are stored with millisecond precision.
    let stored_at = stored
        .get_as::<chrono::DateTime<chrono::Utc>>("updated_at")
        .unwrap()
        .unwrap();
    assert_eq!(stored_at.timestamp_millis(), modify_time.timestamp_millis());
}

#[tokio::test]
async fn explicit_auto_update_value_is_kept() {
    let (db, log) = setup(ModelRegistry::builder().register(models::post())).await;
    let post = db.model("Post").unwrap();

    let mut hello = post.create(Values::new().set("title", "hello"));
    assert!(hello.persist(&db, false).await.unwrap());
    log.clear();

    let at = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(1_700_000_000_000).unwrap();
    hello.set("updated_at", at);

    let updated = hello.update(&db, false).await.unwrap();
    assert_eq!(
        updated,
        Updated {
            updated: true,
            modify_time: None,
        }
    );
    assert_eq!(hello.get("updated_at"), Some(&Value::Timestamp(at)));

    let exec = log.pop();
    assert_eq!(
        exec.sql,
        "UPDATE `post` SET `title`=?, `updated_at`=? WHERE `id`=?;"
    );
}

#[tokio::test]
async fn update_with_nothing_to_assign() {
    let (db, log) = setup(ModelRegistry::builder().register(models::user())).await;
    let user = db.model("User").unwrap();

    let mut stub = user.hydrate(Values::new().set("id", 1));
    assert_eq!(stub.update(&db, false).await.unwrap(), Updated::none());
    assert!(log.is_empty());
}

#[tokio::test]
async fn update_of_missing_row() {
    let (db, _log) = setup(ModelRegistry::builder().register(models::user())).await;
    let user = db.model("User").unwrap();

    let mut ghost = user.hydrate(Values::new().set("id", 99).set("name", "ghost"));
    assert_eq!(ghost.update(&db, false).await.unwrap(), Updated::none());
}

#[tokio::test]
async fn remove_record() {
    let (db, log) = setup(ModelRegistry::builder().register(models::user())).await;
    let user = db.model("User").unwrap();

    let mut ann = user.create(Values::new().set("name", "ann"));
    ann.persist(&db, false).await.unwrap();
    log.clear();

    assert!(ann.remove(&db).await.unwrap());
    assert_eq!(log.pop().sql, "DELETE FROM `user` WHERE `id`=?;");

    assert!(!ann.remove(&db).await.unwrap());
    assert_eq!(user.count(&db, FieldMap::new(), QueryOptions::default()).await.unwrap(), 0);
}

#[tokio::test]
async fn instance_preconditions_issue_no_statement() {
    let (db, log) = setup(
        ModelRegistry::builder()
            .register(models::user())
            .register(models::event()),
    )
    .await;

    let mut ann = db.model("User").unwrap().create(Values::new().set("name", "ann"));
    assert!(assert_err!(ann.update(&db, false).await).is_missing_primary_key());
    assert!(assert_err!(ann.remove(&db).await).is_missing_primary_key());

    let mut event = db
        .model("Event")
        .unwrap()
        .create(Values::new().set("kind", "boot"));
    assert!(assert_err!(event.update(&db, false).await).is_no_primary_key_defined());

    assert!(log.is_empty());

    // Keyless records can still be inserted.
    assert!(event.persist(&db, false).await.unwrap());
    assert!(!event.is_persisted());
}

fn named(record: &Record, _is_update: bool) -> bool {
    record
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty())
}

#[tokio::test]
async fn validation_rejects_writes() {
    let (db, log) = setup(ModelRegistry::builder().register_validated(models::user(), named)).await;
    let user = db.model("User").unwrap();

    let mut blank = user.create(Values::new().set("name", ""));
    assert!(!blank.persist(&db, true).await.unwrap());
    assert!(log.is_empty());

    // Skipping validation writes the record anyway.
    assert!(blank.persist(&db, false).await.unwrap());
    log.clear();

    assert_eq!(blank.update(&db, true).await.unwrap(), Updated::none());
    assert!(log.is_empty());

    blank.set("name", "ann");
    assert!(blank.update(&db, true).await.unwrap().is_updated());
}

#[tokio::test]
async fn validator_sees_update_flag() {
    let (db, _log) = setup(
        ModelRegistry::builder()
            .register_validated(models::user(), |_: &Record, is_update: bool| !is_update),
    )
    .await;
    let user = db.model("User").unwrap();

    let mut ann = user.create(Values::new().set("name", "ann"));
    assert!(ann.persist(&db, true).await.unwrap());

    ann.set("name", "bo");
    assert!(!ann.update(&db, true).await.unwrap().is_updated());
}
