use postgres_types::{private::BytesMut, to_sql_checked, IsNull, ToSql, Type};
use sqlutil_core::stmt;

type BoxError = Box<dyn std::error::Error + Sync + Send>;

/// Binds a [`stmt::Value`] as a PostgreSQL parameter.
#[derive(Debug)]
pub struct Value<'a>(&'a stmt::Value);

impl<'a> From<&'a stmt::Value> for Value<'a> {
    fn from(value: &'a stmt::Value) -> Self {
        Self(value)
    }
}

fn mismatch(value: &stmt::Value, ty: &Type) -> BoxError {
    format!("cannot bind {} to a parameter of type `{}`", value.type_name(), ty).into()
}

fn out_of_range(value: i64, ty: &Type) -> BoxError {
    format!("integer {value} out of range for type `{ty}`").into()
}

/// Writes an integer at the width the parameter expects.
fn int_to_sql(value: i64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(value)
            .map_err(|_| out_of_range(value, ty))?
            .to_sql(ty, out),
        Type::INT4 => i32::try_from(value)
            .map_err(|_| out_of_range(value, ty))?
            .to_sql(ty, out),
        Type::INT8 => value.to_sql(ty, out),
        _ => Err(mismatch(&stmt::Value::I64(value), ty)),
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match self.0 {
            stmt::Value::Bool(value) => value.to_sql(ty, out),
            stmt::Value::I16(value) => int_to_sql((*value).into(), ty, out),
            stmt::Value::I32(value) => int_to_sql((*value).into(), ty, out),
            stmt::Value::I64(value) => int_to_sql(*value, ty, out),
            stmt::Value::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::String(value) => value.to_sql(ty, out),
            stmt::Value::Bytes(value) => value.to_sql(ty, out),
            stmt::Value::Uuid(value) => match *ty {
                Type::UUID => value.to_sql(ty, out),
                Type::BYTEA => value.as_bytes().as_slice().to_sql(ty, out),
                _ => value.to_string().to_sql(ty, out),
            },
            stmt::Value::Null => Ok(IsNull::Yes),
        }
    }

    // Every value checks its own target type in `to_sql`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}
