use crate::{Omit, Result, Type, Value};

use std::{any::TypeId, marker::PhantomData, sync::Arc};

/// A struct whose fields map to the columns of a table.
///
/// Usually implemented with `#[derive(Record)]`. Hand-written
/// implementations go through the same validation when registered.
pub trait Record: Sized + Send + Sync + 'static {
    /// Describes every declared field, persisted or not, in declaration
    /// order.
    fn shape() -> Shape;

    /// Returns the type's own `SELECT` generator, if it has one.
    fn selector() -> Option<SelectorFn> {
        None
    }

    /// Returns the value of the field at `index` (its declaration
    /// position). Fields without a column return [`Value::Null`].
    fn field(&self, index: usize) -> Value;
}

/// Raw field description produced by `#[derive(Record)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub fields: Vec<FieldDef>,
}

/// One declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Rust field name
    pub name: &'static str,

    /// Column name from `#[column("...")]`; `None` for non-persisted fields
    pub column: Option<&'static str>,

    /// SQL expression from `#[column("...", expr = "...")]`
    pub expression: Option<&'static str>,

    /// Value type, known for annotated fields only
    pub ty: Option<Type>,

    /// True for `Option<T>` fields
    pub nullable: bool,
}

/// A type that writes its own `SELECT` statement.
///
/// `#[derive(Record)]` picks up an implementation of this trait for the
/// deriving struct: registration stores [`Selector::select_statement`] and
/// generic generation is skipped for the type. Adding `#[record(selector)]`
/// to the struct makes a missing implementation a compile error.
///
/// Hand-written [`Record`] implementations must return the hook from
/// [`Record::selector`] themselves.
pub trait Selector {
    fn select_statement(omit: &Omit, remainder: &str) -> Result<String>;
}

pub type SelectorFn = fn(&Omit, &str) -> Result<String>;

/// Lets derived code ask whether `T` implements [`Selector`] without
/// requiring it: method resolution on `&&Detect<T>` prefers
/// [`HasSelector`] when the bound holds and falls back to [`NoSelector`].
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

impl<T> Detect<T> {
    pub fn new() -> Self {
        Detect(PhantomData)
    }
}

#[doc(hidden)]
pub trait HasSelector {
    fn detect_selector(&self) -> Option<SelectorFn>;
}

impl<T: Selector> HasSelector for &Detect<T> {
    fn detect_selector(&self) -> Option<SelectorFn> {
        Some(T::select_statement as SelectorFn)
    }
}

#[doc(hidden)]
pub trait NoSelector {
    fn detect_selector(&self) -> Option<SelectorFn>;
}

impl<T> NoSelector for Detect<T> {
    fn detect_selector(&self) -> Option<SelectorFn> {
        None
    }
}

/// Type identity plus the static hooks of a [`Record`] type, reachable
/// from a type-erased instance.
#[derive(Debug, Clone, Copy)]
pub struct RecordType {
    pub(crate) id: TypeId,
    pub(crate) name: &'static str,
    pub(crate) shape: fn() -> Shape,
    pub(crate) selector: fn() -> Option<SelectorFn>,
}

impl RecordType {
    pub fn of<T: Record>() -> RecordType {
        RecordType {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            shape: T::shape,
            selector: T::selector,
        }
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RecordType {}

/// Object-safe view of a [`Record`] instance.
pub trait AnyRecord: Send + Sync + 'static {
    fn record_type(&self) -> RecordType;

    fn field_value(&self, index: usize) -> Value;
}

impl<T: Record> AnyRecord for T {
    fn record_type(&self) -> RecordType {
        RecordType::of::<T>()
    }

    fn field_value(&self, index: usize) -> Value {
        self.field(index)
    }
}

impl core::fmt::Debug for dyn AnyRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnyRecord")
            .field("type", &self.record_type().name)
            .finish()
    }
}

/// Anything that resolves to a record instance: a concrete record, a
/// `dyn AnyRecord`, or a boxed or shared `dyn AnyRecord`.
///
/// Every entry point takes `&impl AsRecord`, so the caller never has to
/// unwrap before calling.
pub trait AsRecord: Send + Sync {
    fn as_record(&self) -> &dyn AnyRecord;
}

impl<T: Record> AsRecord for T {
    fn as_record(&self) -> &dyn AnyRecord {
        self
    }
}

impl AsRecord for dyn AnyRecord {
    fn as_record(&self) -> &dyn AnyRecord {
        self
    }
}

impl AsRecord for Box<dyn AnyRecord> {
    fn as_record(&self) -> &dyn AnyRecord {
        &**self
    }
}

impl AsRecord for Arc<dyn AnyRecord> {
    fn as_record(&self) -> &dyn AnyRecord {
        &**self
    }
}
