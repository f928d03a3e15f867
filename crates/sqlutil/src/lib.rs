//! Maps `#[derive(Record)]` structs to PostgreSQL statements.
//!
//! Types are registered once against a table in a [`Registry`]. The registry
//! caches the column layout, so generating a `SELECT` or preparing an insert,
//! upsert or update never repeats the work per call.
//!
//! ```ignore
//! #[derive(Default, sqlutil::Record)]
//! struct Item {
//!     #[column("id")]
//!     id: uuid::Uuid,
//!     #[column("unique_key")]
//!     unique_key: String,
//!     #[column("value")]
//!     value: Option<String>,
//! }
//!
//! let registry = Registry::new();
//! registry.register::<Item>("items")?;
//!
//! let sql = registry.select(&Item::default(), &Omit::none(), "WHERE id = $1")?;
//! let insert = registry.mutation(&Item::default(), "items")?.insert(executor)?;
//! let id = insert.exec(&item).await?;
//! ```

extern crate self as sqlutil;

mod extract;
pub use extract::extract;

mod identifier;
pub use identifier::Identifier;

pub mod mutation;
pub use mutation::{MutationBuilder, StatementFn};

mod primitive;
pub use primitive::Primitive;

mod record;
pub use record::{AnyRecord, AsRecord, FieldDef, Record, RecordType, Selector, SelectorFn, Shape};

mod registry;
pub use registry::Registry;

mod schema;
pub use schema::{Column, TypeEntry};

mod select;
pub use select::{generate, select, Omit};

pub use sqlutil_macros::Record;

pub use sqlutil_core::{
    async_trait, bail, err,
    driver::{self, Executor, Operation},
    stmt::{self, Type, Value, ValueRecord},
    Error, Result,
};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::record::{Detect, HasSelector, NoSelector};
    pub use crate::{FieldDef, Omit, Primitive, Record, Selector, SelectorFn, Shape};
    pub use sqlutil_core::{
        stmt::{Type, Value},
        Result,
    };
}
