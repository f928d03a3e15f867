use sqlutil::{AnyRecord, Record, StatementFn};
use std::sync::Arc;
use tests::{setup, TableDef};

#[derive(Debug, Default, Record)]
struct Counter {
    #[column("id")]
    id: Option<i64>,

    #[column("name")]
    name: String,
}

#[tokio::test]
async fn closures_store_behind_one_trait() {
    let (registry, exec) = setup();
    exec.create_table(TableDef::new("counters").unique("name").auto_increment());
    registry.register::<Counter>("counters").unwrap();

    let mutation = registry.mutation(&Counter::default(), "counters").unwrap();
    let statements: Vec<Box<dyn StatementFn>> = vec![
        Box::new(mutation.insert_generated(exec.clone()).unwrap()),
        Box::new(mutation.upsert(exec.clone(), "name").unwrap()),
    ];

    let record: Arc<dyn AnyRecord> = Arc::new(Counter {
        id: None,
        name: "hits".to_string(),
    });

    let generated = statements[0].call(record.as_ref()).await.unwrap();
    assert_eq!(generated.as_i64(), Some(1));
    assert_eq!(exec.rows("counters").len(), 1);

    // The upsert conflicts on `name` and reads back the stored key.
    let upserted = statements[1].call(record.as_ref()).await.unwrap();
    assert!(upserted.is_returned());
    assert_eq!(upserted, generated);

    let log = exec.log();
    assert_eq!(log.len(), 2);
    assert_eq!(
        log.sql(),
        statements.iter().map(|s| s.sql().to_string()).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn boxed_records_are_accepted_directly() {
    let (registry, exec) = setup();
    exec.create_table(TableDef::new("counters").unique("name").auto_increment());

    let boxed: Box<dyn AnyRecord> = Box::new(Counter::default());
    registry.register_value(&boxed, "counters").unwrap();

    let insert = registry
        .mutation(&boxed, "counters")
        .unwrap()
        .insert_generated(exec.clone())
        .unwrap();

    let id = insert.exec(&boxed).await.unwrap();
    assert_eq!(id.as_i64(), Some(1));
    assert!(registry.contains::<Counter>());
}
