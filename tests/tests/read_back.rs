use sqlutil::{
    async_trait, Executor, Operation, Record, Registry, Result, Value, ValueRecord,
};
use std::sync::Arc;
use uuid::Uuid;

/// Answers every statement with the same row.
#[derive(Debug)]
struct Canned(Option<ValueRecord>);

#[async_trait]
impl Executor for Canned {
    async fn execute(&self, _op: Operation<'_>) -> Result<u64> {
        Ok(1)
    }

    async fn query_row(&self, _op: Operation<'_>) -> Result<Option<ValueRecord>> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Default, Record)]
struct Item {
    #[column("id")]
    id: Uuid,

    #[column("unique_key")]
    unique_key: String,
}

#[derive(Debug, Default, Record)]
struct SerialItem {
    #[column("id")]
    id: Option<i64>,

    #[column("unique_key")]
    unique_key: String,
}

fn registry() -> Registry {
    tests::init_tracing();

    let registry = Registry::new();
    registry.register::<Item>("items").unwrap();
    registry.register::<SerialItem>("serial_items").unwrap();
    registry
}

fn canned(row: Option<Vec<Value>>) -> Arc<dyn Executor> {
    Arc::new(Canned(row.map(ValueRecord::from_vec)))
}

async fn insert_generated(row: Option<Vec<Value>>) -> sqlutil::Error {
    registry()
        .mutation(&SerialItem::default(), "serial_items")
        .unwrap()
        .insert_generated(canned(row))
        .unwrap()
        .exec(&SerialItem::default())
        .await
        .unwrap_err()
}

async fn upsert(row: Option<Vec<Value>>) -> sqlutil::Error {
    registry()
        .mutation(&Item::default(), "items")
        .unwrap()
        .upsert(canned(row), "unique_key")
        .unwrap()
        .exec(&Item::default())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn missing_row_is_a_scan_error() {
    let err = insert_generated(None).await;
    assert!(err.is_scan());
    assert!(err.to_string().contains("returned no row"));

    let err = upsert(None).await;
    assert!(err.is_scan());
    assert!(err.to_string().contains("returned no row"));
}

#[tokio::test]
async fn extra_returned_columns_are_a_scan_error() {
    let err = insert_generated(Some(vec![Value::I64(1), Value::I64(2)])).await;
    assert!(err.is_scan());
    assert!(err.to_string().contains("expected 1 returned column, got 2"));

    let row = vec![Value::Uuid(Uuid::new_v4()), Value::from("k")];
    let err = upsert(Some(row)).await;
    assert!(err.is_scan());
    assert!(err.to_string().contains("got 2"));
}

#[tokio::test]
async fn mistyped_key_is_a_scan_error() {
    let err = insert_generated(Some(vec![Value::from("one")])).await;
    assert!(err.is_scan());
    assert!(err.to_string().contains("expected I64"));

    let err = upsert(Some(vec![Value::from("one")])).await;
    assert!(err.is_scan());
    assert!(err.to_string().contains("expected Uuid"));

    let err = upsert(Some(vec![Value::Null])).await;
    assert!(err.is_scan());
}

#[tokio::test]
async fn uuid_key_is_read_back_from_bytes() {
    let id = Uuid::new_v4();

    let returned = registry()
        .mutation(&Item::default(), "items")
        .unwrap()
        .upsert(canned(Some(vec![Value::Bytes(id.as_bytes().to_vec())])), "unique_key")
        .unwrap()
        .exec(&Item::default())
        .await
        .unwrap();

    assert_eq!(returned.load::<Uuid>().unwrap(), id);
}
