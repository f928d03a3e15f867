use crate::{Error, Result, Type, Value};

/// A Rust type that maps to a single column.
pub trait Primitive: Sized {
    const TYPE: Type;
    const NULLABLE: bool = false;

    fn to_value(&self) -> Value;

    fn load(value: Value) -> Result<Self>;
}

fn mismatch<T: Primitive>(value: &Value) -> Error {
    Error::scan(format!("cannot load {} as {}", value.type_name(), T::TYPE))
}

impl Primitive for bool {
    const TYPE: Type = Type::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl Primitive for i16 {
    const TYPE: Type = Type::I16;

    fn to_value(&self) -> Value {
        Value::I16(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I16(v) => Ok(v),
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl Primitive for i32 {
    const TYPE: Type = Type::I32;

    fn to_value(&self) -> Value {
        Value::I32(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I16(v) => Ok(v.into()),
            Value::I32(v) => Ok(v),
            Value::I64(v) => i32::try_from(v).map_err(|_| mismatch::<Self>(&value)),
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl Primitive for i64 {
    const TYPE: Type = Type::I64;

    fn to_value(&self) -> Value {
        Value::I64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        value.as_i64().ok_or_else(|| mismatch::<Self>(&value))
    }
}

impl Primitive for f64 {
    const TYPE: Type = Type::F64;

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl Primitive for String {
    const TYPE: Type = Type::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl Primitive for Vec<u8> {
    const TYPE: Type = Type::Bytes;

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl Primitive for uuid::Uuid {
    const TYPE: Type = Type::Uuid;

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            // Keys stored as `bytea` come back as raw bytes.
            Value::Bytes(ref bytes) => {
                uuid::Uuid::from_slice(bytes).map_err(|_| mismatch::<Self>(&value))
            }
            _ => Err(mismatch::<Self>(&value)),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
