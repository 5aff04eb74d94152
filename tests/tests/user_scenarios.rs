use pretty_assertions::assert_eq;
use rowmap::{FieldMap, ModelRegistry, QueryOptions, Value, Values};
use tests::{models, setup, Exec};

#[tokio::test]
async fn one_active_user() {
    let (db, log) = setup(ModelRegistry::builder().register(models::user())).await;
    let user = db.model("User").unwrap();

    let found = user
        .one(&db, FieldMap::new().eq("active", true), QueryOptions::default())
        .await
        .unwrap();
    assert!(found.is_none());

    assert_eq!(
        log.pop(),
        Exec {
            sql: "SELECT * FROM `user` WHERE `active`=? LIMIT 1;".to_string(),
            params: vec![Value::I64(1)],
        }
    );

    let mut ann = user.create(Values::new().set("name", "ann"));
    assert!(ann.persist(&db, false).await.unwrap());
    log.clear();

    let found = user
        .one(&db, FieldMap::new().eq("active", true), QueryOptions::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.get("id"), ann.get("id"));
    assert_eq!(found.get("name"), Some(&Value::from("ann")));
    assert_eq!(found.get("active"), Some(&Value::Bool(true)));
    assert!(found.is_persisted());
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn remove_users_by_key_set() {
    let (db, log) = setup(ModelRegistry::builder().register(models::user())).await;
    let user = db.model("User").unwrap();

    for name in ["ann", "bo", "cy", "di"] {
        assert!(user
            .create(Values::new().set("name", name))
            .persist(&db, false)
            .await
            .unwrap());
    }
    log.clear();

    assert_eq!(user.remove(&db, [1, 2, 3]).await.unwrap(), 3);
    assert_eq!(
        log.pop(),
        Exec {
            sql: "DELETE FROM `user` WHERE `id` IN (?,?,?);".to_string(),
            params: vec![Value::I64(1), Value::I64(2), Value::I64(3)],
        }
    );

    let rest = user.all(&db, FieldMap::new(), QueryOptions::default()).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].get_as::<String>("name").unwrap().as_deref(), Some("di"));
}
