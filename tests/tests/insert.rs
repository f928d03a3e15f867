use pretty_assertions::assert_eq;
use sqlutil::{Identifier, Record, Value};
use tests::{setup, ConstraintViolation, TableDef};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Record)]
struct Item {
    #[column("id")]
    id: Uuid,

    #[column("unique_key")]
    unique_key: String,

    #[column("value")]
    value: Option<String>,

    /// Not persisted
    label: String,
}

fn item(id: Uuid, unique_key: &str) -> Item {
    Item {
        id,
        unique_key: unique_key.to_string(),
        value: None,
        label: "ignored".to_string(),
    }
}

#[tokio::test]
async fn insert_returns_supplied_ids() {
    let (registry, exec) = setup();
    exec.create_table(TableDef::new("items").unique("unique_key"));
    registry.register::<Item>("items").unwrap();

    let insert = registry
        .mutation(&Item::default(), "items")
        .unwrap()
        .insert(exec.clone())
        .unwrap();

    assert_eq!(
        insert.sql(),
        "INSERT INTO items (id, unique_key, value) VALUES ($1, $2, $3)"
    );

    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let id = insert.exec(&item(a, "a")).await.unwrap();
    assert_eq!(id, Identifier::Supplied(Value::Uuid(a)));

    let id = insert.exec(&item(b, "b")).await.unwrap();
    assert_eq!(id.load::<Uuid>().unwrap(), b);

    // Reusing `a` with a fresh unique key violates the primary key.
    let err = insert.exec(&item(a, "c")).await.unwrap_err();
    assert!(err.is_execution());

    let violation = err.root().driver_error::<ConstraintViolation>().unwrap();
    assert_eq!(violation.column, "id");
    assert_eq!(
        err.to_string(),
        "insert into `items` failed: duplicate key value violates unique constraint \"items_id_key\""
    );

    assert_eq!(exec.rows("items").len(), 2);
}

#[tokio::test]
async fn insert_binds_current_field_values() {
    let (registry, exec) = setup();
    exec.create_table(TableDef::new("items").unique("unique_key"));
    registry.register::<Item>("items").unwrap();

    let insert = registry
        .mutation(&Item::default(), "items")
        .unwrap()
        .insert(exec.clone())
        .unwrap();

    let mut value = item(Uuid::new_v4(), "a");
    value.value = Some("first".to_string());
    insert.exec(&value).await.unwrap();

    let mut log = exec.log();
    let op = log.pop().unwrap();
    assert_eq!(
        op.params,
        vec![
            Value::Uuid(value.id),
            Value::from("a"),
            Value::from("first"),
        ]
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn duplicate_unique_column_surfaces_as_execution_error() {
    let (registry, exec) = setup();
    exec.create_table(TableDef::new("items").unique("unique_key"));
    registry.register::<Item>("items").unwrap();

    let insert = registry
        .mutation(&Item::default(), "items")
        .unwrap()
        .insert(exec.clone())
        .unwrap();

    insert.exec(&item(Uuid::new_v4(), "same")).await.unwrap();
    let err = insert.exec(&item(Uuid::new_v4(), "same")).await.unwrap_err();

    assert!(err.is_execution());
    assert_eq!(exec.rows("items").len(), 1);
}

#[derive(Debug, Default, Record)]
struct Stats {
    #[column("id")]
    id: i64,

    #[column("value")]
    value: i32,

    #[column("doubled", expr = "value * 2")]
    doubled: i32,
}

#[tokio::test]
async fn computed_columns_are_never_written() {
    let (registry, exec) = setup();
    exec.create_table(TableDef::new("stats"));
    registry.register::<Stats>("stats").unwrap();

    let insert = registry
        .mutation(&Stats::default(), "stats")
        .unwrap()
        .insert(exec.clone())
        .unwrap();

    assert_eq!(insert.sql(), "INSERT INTO stats (id, value) VALUES ($1, $2)");

    insert
        .exec(&Stats {
            id: 1,
            value: 21,
            doubled: 0,
        })
        .await
        .unwrap();

    let row = exec.find("stats", "id", &Value::I64(1)).unwrap();
    assert!(!row.contains_key("doubled"));
}

#[test]
fn id_column_must_be_writable() {
    let (registry, exec) = setup();
    registry.register::<Stats>("stats").unwrap();

    let builder = registry.mutation(&Stats::default(), "stats").unwrap();

    let err = builder.clone().id_column("doubled").insert(exec.clone()).unwrap_err();
    assert!(err.is_schema());
    assert!(err.to_string().contains("is computed and cannot be written"));

    let err = builder.id_column("missing").insert(exec).unwrap_err();
    assert!(err.is_schema());
    assert!(err.to_string().contains("id column `missing` is not declared"));
}

#[test]
fn unregistered_type_cannot_prepare_mutations() {
    let (registry, _exec) = setup();

    let err = registry.mutation(&Item::default(), "items").unwrap_err();
    assert!(err.is_not_registered());
}

#[tokio::test]
async fn wrong_instance_type_is_rejected() {
    let (registry, exec) = setup();
    exec.create_table(TableDef::new("items").unique("unique_key"));
    registry.register::<Item>("items").unwrap();
    registry.register::<Stats>("stats").unwrap();

    let insert = registry
        .mutation(&Item::default(), "items")
        .unwrap()
        .insert(exec.clone())
        .unwrap();

    let err = insert.exec(&Stats::default()).await.unwrap_err();
    assert!(err.is_schema());
    assert!(exec.log().is_empty());
}
