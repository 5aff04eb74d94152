use pretty_assertions::assert_eq;
use rowmap::{Condition, FieldMap, ModelRegistry, QueryOptions, Updated, Value, Values};
use std_util::{assert_err, assert_ok, assert_some};
use tests::{models, setup, Exec, ExecLog};

async fn seed(db: &ModelRegistry, log: &ExecLog) {
    let user = db.model("User").unwrap();

    for (name, active) in [("ann", true), ("bo", false), ("cy", true), ("di", true)] {
        let mut record = user.create(Values::new().set("name", name).set("active", active));
        assert!(record.persist(db, false).await.unwrap());
    }

    log.clear();
}

fn names(records: &[rowmap::Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.get_as::<String>("name").unwrap().unwrap())
        .collect()
}

#[tokio::test]
async fn all_with_options() {
    let (db, log) = setup(ModelRegistry::builder().register(models::user())).await;
    seed(&db, &log).await;
    let user = db.model("User").unwrap();

    let options = QueryOptions::new().order_by("name DESC").limit(2).offset(1);
    let records = user
        .all(&db, FieldMap::new().eq("active", 1), options)
        .await
        .unwrap();

    assert_eq!(names(&records), ["cy", "ann"]);
    assert_eq!(
        log.pop(),
        Exec {
            sql: "SELECT * FROM `user` WHERE `active`=? ORDER BY name DESC LIMIT 1, 2;".to_string(),
            params: vec![Value::I64(1)],
        }
    );

    let records = user
        .all(
            &db,
            FieldMap::new().is_in("name", ["bo", "di", "zed"]),
            QueryOptions::new().order_by("id"),
        )
        .await
        .unwrap();
    assert_eq!(names(&records), ["bo", "di"]);
}

#[tokio::test]
async fn projections_hydrate_selected_fields() {
    let (db, log) = setup(ModelRegistry::builder().register(models::user())).await;
    seed(&db, &log).await;
    let user = db.model("User").unwrap();

    let ann = user
        .one(&db, 1, QueryOptions::new().fields(["id", "name"]))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(log.pop().sql, "SELECT `id`, `name` FROM `user` WHERE `id`=? LIMIT 1;");
    assert!(ann.is_defined("name"));
    assert!(!ann.is_defined("active"));

    // Columns the model does not declare are dropped.
    let bo = user
        .one(&db, 2, QueryOptions::new().raw_fields("id, upper(name) AS shout"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bo.values().len(), 1);
}

#[tokio::test]
async fn one_honors_caller_limit() {
    let (db, log) = setup(ModelRegistry::builder().register(models::user())).await;
    seed(&db, &log).await;
    let user = db.model("User").unwrap();

    let first = user
        .one(&db, FieldMap::new(), QueryOptions::new().order_by("id DESC").limit(3))
        .await
        .unwrap();
    let first = assert_some!(first, "expected the newest user");

    assert_eq!(first.get_as::<String>("name").unwrap().as_deref(), Some("di"));
    assert_eq!(log.pop().sql, "SELECT * FROM `user` ORDER BY id DESC LIMIT 3;");
}

#[tokio::test]
async fn touch_fetches_the_key() {
    let (db, log) = setup(
        ModelRegistry::builder()
            .register(models::user())
            .register(models::event()),
    )
    .await;
    seed(&db, &log).await;
    let user = db.model("User").unwrap();

    let found = assert_some!(assert_ok!(user.touch(&db, 3).await));
    assert_eq!(found.values(), Values::new().set("id", 3));
    assert_eq!(log.pop().sql, "SELECT `id` FROM `user` WHERE `id`=? LIMIT 1;");

    assert!(user.touch(&db, 42).await.unwrap().is_none());

    let event = db.model("Event").unwrap();
    assert!(assert_err!(event.touch(&db, FieldMap::new()).await).is_no_primary_key_defined());
}

#[tokio::test]
async fn count_records() {
    let (db, log) = setup(ModelRegistry::builder().register(models::user())).await;
    let user = db.model("User").unwrap();

    assert_eq!(user.count(&db, FieldMap::new(), QueryOptions::new()).await.unwrap(), 0);

    seed(&db, &log).await;

    let active = user
        .count(&db, FieldMap::new().eq("active", true), QueryOptions::new())
        .await
        .unwrap();
    assert_eq!(active, 3);
    assert_eq!(
        log.pop().sql,
        "SELECT COUNT(*) AS `N` FROM `user` WHERE `active`=?;"
    );

    let distinct = user
        .count(&db, FieldMap::new(), QueryOptions::new().count("DISTINCT active"))
        .await
        .unwrap();
    assert_eq!(distinct, 2);
}

#[tokio::test]
async fn static_update() {
    let (db, log) = setup(
        ModelRegistry::builder()
            .register(models::user())
            .register(models::post()),
    )
    .await;
    seed(&db, &log).await;
    let user = db.model("User").unwrap();

    let updated = user
        .update(&db, FieldMap::new().eq("active", false), Values::new().set("active", true))
        .await
        .unwrap();
    assert_eq!(
        updated,
        Updated {
            updated: true,
            modify_time: None,
        }
    );
    assert_eq!(
        log.pop(),
        Exec {
            sql: "UPDATE `user` SET `active`=? WHERE `active`=?;".to_string(),
            params: vec![Value::I64(1), Value::I64(0)],
        }
    );

    // The key is never assigned.
    let updated = user
        .update(&db, 1, Values::new().set("id", 7).set("name", "ann2"))
        .await
        .unwrap();
    assert!(updated.is_updated());
    assert_eq!(log.pop().sql, "UPDATE `user` SET `name`=? WHERE `id`=?;");

    let missing = user
        .update(&db, 99, Values::new().set("name", "nobody"))
        .await
        .unwrap();
    assert_eq!(missing, Updated::none());

    let post = db.model("Post").unwrap();
    post.create(Values::new().set("title", "a"))
        .persist(&db, false)
        .await
        .unwrap();

    let updated = post
        .update(&db, 1, Values::new().set("title", "b"))
        .await
        .unwrap();
    assert!(updated.modify_time.is_some());
}

#[tokio::test]
async fn mutations_need_a_filter() {
    let (db, log) = setup(
        ModelRegistry::builder()
            .register(models::user())
            .register(models::event()),
    )
    .await;
    seed(&db, &log).await;
    let user = db.model("User").unwrap();

    let err = assert_err!(user.remove(&db, Condition::all()).await);
    assert!(err.is_unfiltered_mutation());

    // Unknown fields compile to nothing.
    let err = assert_err!(
        user.update(&db, FieldMap::new().eq("nickname", "x"), Values::new().set("name", "x"))
            .await
    );
    assert!(err.is_unfiltered_mutation());
    assert!(log.is_empty());

    let event = db.model("Event").unwrap();
    assert!(assert_err!(event.remove(&db, 1).await).is_no_primary_key_defined());

    assert_eq!(
        event
            .remove(&db, FieldMap::new().eq("kind", "boot"))
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn json_columns_round_trip() {
    let (db, _log) = setup(ModelRegistry::builder().register(models::event())).await;
    let event = db.model("Event").unwrap();

    let payload = serde_json::json!({ "pid": 7, "args": ["-v"] });
    let mut boot = event.create(Values::new().set("kind", "boot").set("payload", payload.clone()));
    assert!(boot.persist(&db, false).await.unwrap());

    let stored = event
        .one(&db, FieldMap::new().eq("kind", "boot"), QueryOptions::new())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        stored.get_as::<serde_json::Value>("payload").unwrap(),
        Some(payload)
    );
}
