use crate::{Error, Result, Value};
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Rust type with a CQL counterpart.
///
/// Reading goes through [`Value::cast`], so `from_value` accepts anything
/// castable to the prototype.
pub trait CqlType: Sized {
    /// Payload-less value naming the CQL type.
    fn prototype() -> Value;
    fn into_value(self) -> Value;
    fn from_value(value: Value) -> Result<Self>;
}

macro_rules! cql_scalar {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl CqlType for $ty {
            fn prototype() -> Value {
                Value::$variant(None)
            }
            fn into_value(self) -> Value {
                Value::$variant(Some(self))
            }
            fn from_value(value: Value) -> Result<Self> {
                match value.cast(&Self::prototype())? {
                    Value::$variant(Some(v)) => Ok(v),
                    _ => Err(Error::msg(concat!(
                        "Null where a ",
                        stringify!($ty),
                        " is required"
                    ))),
                }
            }
        }
    )+};
}

cql_scalar! {
    bool => Boolean,
    i8 => TinyInt,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    f32 => Float,
    f64 => Double,
    Decimal => Decimal,
    String => Text,
    Box<[u8]> => Blob,
    Date => Date,
    Time => Time,
    PrimitiveDateTime => LocalTimestamp,
    OffsetDateTime => Timestamp,
    Uuid => Uuid,
}

impl<T: CqlType> CqlType for Vec<T> {
    fn prototype() -> Value {
        Value::List(None, Box::new(T::prototype()))
    }
    fn into_value(self) -> Value {
        Value::List(
            Some(self.into_iter().map(T::into_value).collect()),
            Box::new(T::prototype()),
        )
    }
    fn from_value(value: Value) -> Result<Self> {
        match value.cast(&Self::prototype())? {
            Value::List(Some(items), ..) => items.into_iter().map(T::from_value).collect(),
            _ => Err(Error::msg("Null where a list is required")),
        }
    }
}

/// `None` is the typed null of `T`.
impl<T: CqlType> CqlType for Option<T> {
    fn prototype() -> Value {
        T::prototype()
    }
    fn into_value(self) -> Value {
        self.map_or_else(T::prototype, T::into_value)
    }
    fn from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_value(value).map(Some)
    }
}

impl<T: CqlType> From<T> for Value {
    fn from(value: T) -> Self {
        value.into_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(Some(value.to_string()))
    }
}
