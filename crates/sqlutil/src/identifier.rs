use crate::{Primitive, Result, Value};

/// The key of the row a mutation wrote.
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    /// Taken from the instance that was written. No read-back was needed.
    Supplied(Value),

    /// Read back from the database through `RETURNING`.
    Returned(Value),
}

impl Identifier {
    pub fn value(&self) -> &Value {
        match self {
            Self::Supplied(value) | Self::Returned(value) => value,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Supplied(value) | Self::Returned(value) => value,
        }
    }

    /// Returns the key as an `i64` if it is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        self.value().as_i64()
    }

    /// Converts the key to `T`, failing with a scan error on a type
    /// mismatch.
    pub fn load<T: Primitive>(self) -> Result<T> {
        T::load(self.into_value())
    }

    pub fn is_supplied(&self) -> bool {
        matches!(self, Self::Supplied(_))
    }

    pub fn is_returned(&self) -> bool {
        matches!(self, Self::Returned(_))
    }
}

impl core::fmt::Display for Identifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.value() {
            Value::Bool(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::Bytes(v) => {
                for byte in v {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Value::Uuid(v) => write!(f, "{v}"),
            Value::Null => f.write_str("NULL"),
        }
    }
}
