#![cfg(feature = "postgresql")]

use pretty_assertions::assert_eq;
use sqlutil::{Omit, Record, Registry};
use tests::db::postgresql::SetupPostgreSQL;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Record)]
struct Item {
    #[column("id")]
    id: Uuid,

    #[column("unique_key")]
    unique_key: String,

    #[column("value")]
    value: Option<String>,
}

#[derive(Debug, Clone, Default, Record)]
struct SerialItem {
    #[column("id")]
    id: Option<i32>,

    #[column("unique_key")]
    unique_key: String,

    #[column("value")]
    value: Option<String>,
}

async fn setup() -> (SetupPostgreSQL, Registry) {
    tests::init_tracing();

    let db = SetupPostgreSQL::connect().await.unwrap();
    db.create_tables().await.unwrap();

    let registry = Registry::new();
    registry.register::<Item>(db.table("items")).unwrap();
    registry
        .register::<SerialItem>(db.table("serial_items"))
        .unwrap();

    (db, registry)
}

fn item(unique_key: &str) -> Item {
    Item {
        id: Uuid::new_v4(),
        unique_key: unique_key.to_string(),
        value: None,
    }
}

#[tokio::test]
async fn insert_and_duplicate_id() {
    let (db, registry) = setup().await;

    let insert = registry
        .mutation(&Item::default(), db.table("items"))
        .unwrap()
        .insert(db.executor())
        .unwrap();

    let a = item("a");
    let b = item("b");

    assert_eq!(insert.exec(&a).await.unwrap().load::<Uuid>().unwrap(), a.id);
    assert_eq!(insert.exec(&b).await.unwrap().load::<Uuid>().unwrap(), b.id);

    let reused = Item {
        unique_key: "c".to_string(),
        ..a.clone()
    };
    let err = insert.exec(&reused).await.unwrap_err();
    assert!(err.is_execution());
    assert!(err.root().is_driver());

    db.cleanup().await.unwrap();
}

#[tokio::test]
async fn insert_generated_counts_from_one() {
    let (db, registry) = setup().await;

    let insert = registry
        .mutation(&SerialItem::default(), db.table("serial_items"))
        .unwrap()
        .insert_generated(db.executor())
        .unwrap();

    for (expected, key) in [(1, "a"), (2, "b")] {
        let id = insert
            .exec(&SerialItem {
                id: None,
                unique_key: key.to_string(),
                value: None,
            })
            .await
            .unwrap();

        assert_eq!(id.as_i64(), Some(expected));
    }

    db.cleanup().await.unwrap();
}

#[tokio::test]
async fn upsert_then_update() {
    let (db, registry) = setup().await;
    let table = db.table("items");

    let mutation = registry.mutation(&Item::default(), &table).unwrap();
    let upsert = mutation.upsert(db.executor(), "unique_key").unwrap();
    let update = mutation.update(db.executor(), "id").unwrap();

    let mut value = item("id1");
    let first = upsert.exec(&value).await.unwrap();
    assert_eq!(first.clone().load::<Uuid>().unwrap(), value.id);

    value.value = Some("value".to_string());
    let second = upsert.exec(&value).await.unwrap();
    assert_eq!(first, second);

    value.value = Some("updated".to_string());
    update.exec(&value).await.unwrap();

    let sql = registry
        .select(&value, &Omit::none(), &format!("WHERE {table}.id = $1"))
        .unwrap();
    let row = db
        .db()
        .client()
        .query_one(sql.as_str(), &[&value.id.as_bytes().to_vec()])
        .await
        .unwrap();

    assert_eq!(row.get::<_, Option<String>>("value").as_deref(), Some("updated"));

    db.cleanup().await.unwrap();
}

#[tokio::test]
async fn upsert_into_bytea_key_with_every_value_set() {
    let (db, registry) = setup().await;

    let upsert = registry
        .mutation(&Item::default(), db.table("items"))
        .unwrap()
        .upsert(db.executor(), "unique_key")
        .unwrap();

    let value = Item {
        value: Some("v".to_string()),
        ..item("k")
    };
    let id = upsert.exec(&value).await.unwrap();
    assert_eq!(id.load::<Uuid>().unwrap(), value.id);

    // A second caller with a fresh id lands on the existing row.
    let other = Item {
        value: Some("w".to_string()),
        ..item("k")
    };
    let id = upsert.exec(&other).await.unwrap();
    assert_eq!(id.load::<Uuid>().unwrap(), value.id);

    db.cleanup().await.unwrap();
}
