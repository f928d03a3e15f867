
pub use exec_log::{ExecLog, LoggedOp};

mod isolation;
pub use isolation::TestIsolation;

pub use memory::{ConstraintViolation, MemoryExecutor, TableDef};

use std::sync::Arc;

pub use sqlutil::{Executor, Registry};

/// Installs a `tracing` subscriber filtered by `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fresh registry and in-memory executor for one test.
pub fn setup() -> (Registry, Arc<MemoryExecutor>) {
    init_tracing();
    (Registry::new(), Arc::new(MemoryExecutor::new()))
}
