use pretty_assertions::assert_eq;
use rowmap::{FieldDecl, ModelDecl, ModelRegistry, QueryOptions, Values};
use rowmap_driver_sqlite::Sqlite;
use std_util::{assert_err, assert_ok};
use tests::{init_tracing, models, setup, LoggingDriver};

#[test]
fn model_lookup() {
    init_tracing();

    let db = ModelRegistry::builder()
        .register(models::user())
        .register(models::post())
        .build(Sqlite::in_memory().unwrap())
        .unwrap();

    let names: Vec<_> = db.models().map(|model| model.name()).collect();
    assert_eq!(names, ["User", "Post"]);
    assert_eq!(assert_ok!(db.model("Post")).table(), "post");

    let err = assert_err!(db.model("Comment"));
    assert!(err.is_model_not_found());
    assert_eq!(err.to_string(), "model `Comment` is not registered");
}

#[test]
fn registering_twice() {
    let db = ModelRegistry::builder()
        .register(models::user())
        .register(models::user())
        .build(Sqlite::in_memory().unwrap())
        .unwrap();
    assert_eq!(db.models().count(), 1);

    let other = ModelDecl::new("User").field(FieldDecl::new("email", "string"));
    let err = assert_err!(ModelRegistry::builder()
        .register(models::user())
        .register(other)
        .build(Sqlite::in_memory().unwrap()));
    assert!(err.is_model_conflict());
}

#[test]
fn declaration_errors_fail_the_build() {
    let decl = ModelDecl::new("File").field(
        FieldDecl::new("contents", "string")
            .db_type("BLOB")
            .default_value("empty"),
    );
    let err = assert_err!(ModelRegistry::builder()
        .register(decl)
        .build(Sqlite::in_memory().unwrap()));
    assert!(err.is_unsupported_default_value());

    let decl = ModelDecl::new("File").field(FieldDecl::new("size", "integer").db_type("HUGEINT"));
    let err = assert_err!(ModelRegistry::builder()
        .register(decl)
        .build(Sqlite::in_memory().unwrap()));
    assert!(err.is_unknown_field_type());

    let decl = ModelDecl::new("File").field(
        FieldDecl::new("touched_at", "timestamp")
            .db_type("TEXT")
            .default_now()
            .auto_update(),
    );
    let err = assert_err!(ModelRegistry::builder()
        .register(decl)
        .build(Sqlite::in_memory().unwrap()));
    assert!(err.is_invalid_auto_update_field());
}

#[tokio::test]
async fn declarations_load_from_json() {
    let decl = ModelDecl::from_json(
        r#"{
            "name": "Account",
            "table": "accounts",
            "fields": [
                { "name": "id", "type": "integer", "isPrimaryKey": true, "autoIncrement": true },
                { "name": "email", "type": "string", "dbType": "VARCHAR(255)" },
                { "name": "verified", "type": "boolean", "default": false },
                { "name": "settings", "type": "json", "default": { "theme": "dark" } },
                { "name": "updatedAt", "type": "timestamp", "default": "now", "autoUpdate": true }
            ]
        }"#,
    )
    .unwrap();

    let (db, log) = setup(ModelRegistry::builder().register(decl)).await;
    let account = db.model("Account").unwrap();

    assert_eq!(account.table(), "accounts");
    assert_eq!(account.metadata().primary_key_name(), "id");
    assert_eq!(account.metadata().auto_update_field().unwrap().name, "updatedAt");

    let mut record = account.create(Values::new().set("email", "a@example.com"));
    assert!(record.persist(&db, false).await.unwrap());
    assert_eq!(
        log.pop().sql,
        "INSERT INTO `accounts` (`email`, `verified`, `settings`, `updatedAt`) VALUES (?, ?, ?, ?);"
    );

    let stored = account.one(&db, 1, QueryOptions::new()).await.unwrap().unwrap();
    assert_eq!(stored.get_as::<bool>("verified").unwrap(), Some(false));
    assert_eq!(
        stored.get_as::<serde_json::Value>("settings").unwrap(),
        Some(serde_json::json!({ "theme": "dark" }))
    );
}

#[tokio::test]
async fn table_ddl() {
    init_tracing();

    let driver = LoggingDriver::new(Sqlite::in_memory().unwrap());
    let log = driver.exec_log();

    let db = ModelRegistry::builder()
        .table_name_prefix("app_")
        .register(models::user())
        .register(models::event())
        .build(driver)
        .unwrap();

    db.create_tables().await.unwrap();
    assert_eq!(
        log.statements(),
        [
            "CREATE TABLE IF NOT EXISTS `app_user` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `name` TEXT, `active` INTEGER);",
            "CREATE TABLE IF NOT EXISTS `app_event` (`kind` TEXT, `payload` TEXT);",
        ]
    );

    // Creating existing tables is a no-op.
    db.create_tables().await.unwrap();

    let user = db.model("User").unwrap();
    user.drop_table(&db).await.unwrap();
    assert_eq!(log.statements().last().unwrap(), "DROP TABLE IF EXISTS `app_user`;");

    let err = assert_err!(user.count(&db, 1, QueryOptions::new()).await);
    assert!(err.is_driver());

    user.create_table(&db).await.unwrap();
    assert_eq!(user.count(&db, 1, QueryOptions::new()).await.unwrap(), 0);
}

#[tokio::test]
async fn file_database() {
    init_tracing();

    let path = std::env::temp_dir().join(format!("rowmap-registry-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let url = format!("sqlite:{}", path.display());
    let driver = Sqlite::new(&url).unwrap();
    assert_eq!(driver.url(), url);

    let db = ModelRegistry::builder()
        .register(models::user())
        .build(driver)
        .unwrap();
    db.create_tables().await.unwrap();

    let user = db.model("User").unwrap();
    user.create(Values::new().set("name", "ann"))
        .persist(&db, false)
        .await
        .unwrap();

    // A second connection sees the committed row.
    let reopened = ModelRegistry::builder()
        .register(models::user())
        .build(Sqlite::open(&path).unwrap())
        .unwrap();
    let count = reopened
        .model("User")
        .unwrap()
        .count(&reopened, 1, QueryOptions::new())
        .await
        .unwrap();
    assert_eq!(count, 1);

    std::fs::remove_file(&path).unwrap();
}
