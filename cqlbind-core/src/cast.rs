use crate::{
    Error, Result, Value, parse_date, parse_local_timestamp, parse_time, parse_timestamp,
};
use anyhow::Context;
use atoi::FromRadix10SignedChecked;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};
use uuid::Uuid;

impl Value {
    /// Convert into the type of `prototype`.
    ///
    /// A null becomes the prototype itself and a `Null` prototype accepts
    /// anything. Integers widen freely and narrow only when in range, text is
    /// parsed, list items are cast one by one.
    pub fn cast(self, prototype: &Value) -> Result<Value> {
        if self.is_null() {
            return Ok(prototype.as_prototype());
        }
        Ok(match prototype {
            Value::Null => self,
            Value::Boolean(..) => Value::Boolean(Some(to_bool(self)?)),
            Value::TinyInt(..) => Value::TinyInt(Some(narrow(to_i64(self)?, prototype)?)),
            Value::SmallInt(..) => Value::SmallInt(Some(narrow(to_i64(self)?, prototype)?)),
            Value::Int(..) => Value::Int(Some(narrow(to_i64(self)?, prototype)?)),
            Value::BigInt(..) => Value::BigInt(Some(to_i64(self)?)),
            Value::Float(..) => Value::Float(Some(to_f32(self)?)),
            Value::Double(..) => Value::Double(Some(to_f64(self)?)),
            Value::Decimal(..) => Value::Decimal(Some(to_decimal(self)?)),
            Value::Text(..) => match self {
                Value::Text(v) => Value::Text(v),
                other => return Err(mismatch(&other, "text")),
            },
            Value::Blob(..) => Value::Blob(Some(to_blob(self)?)),
            Value::Date(..) => Value::Date(Some(to_date(self)?)),
            Value::Time(..) => Value::Time(Some(to_time(self)?)),
            Value::LocalTimestamp(..) => Value::LocalTimestamp(Some(to_local_timestamp(self)?)),
            Value::Timestamp(..) => Value::Timestamp(Some(to_timestamp(self)?)),
            Value::Uuid(..) => Value::Uuid(Some(to_uuid(self)?)),
            Value::List(.., item) => match self {
                Value::List(Some(items), ..) => Value::List(
                    Some(
                        items
                            .into_iter()
                            .enumerate()
                            .map(|(i, v)| v.cast(item).with_context(|| format!("List item {i}")))
                            .collect::<Result<_>>()?,
                    ),
                    item.clone(),
                ),
                other => return Err(mismatch(&other, &prototype.cql_type())),
            },
        })
    }
}

fn mismatch(value: &Value, target: &str) -> Error {
    Error::msg(format!(
        "Cannot cast {value} of type {} to {target}",
        value.cql_type()
    ))
}

fn narrow<T: TryFrom<i64>>(value: i64, prototype: &Value) -> Result<T> {
    T::try_from(value)
        .map_err(|_| Error::msg(format!("{value} is out of range for {}", prototype.cql_type())))
}

fn parse_integer(text: &str) -> Result<i64> {
    let digits = text.trim();
    match i64::from_radix_10_signed_checked(digits.as_bytes()) {
        (Some(v), used) if used == digits.len() && digits.ends_with(|c: char| c.is_ascii_digit()) => {
            Ok(v)
        }
        _ => Err(Error::msg(format!("`{text}` is not a bigint"))),
    }
}

fn to_i64(value: Value) -> Result<i64> {
    match value {
        Value::TinyInt(Some(v)) => Ok(v.into()),
        Value::SmallInt(Some(v)) => Ok(v.into()),
        Value::Int(Some(v)) => Ok(v.into()),
        Value::BigInt(Some(v)) => Ok(v),
        Value::Decimal(Some(v)) if v.is_integer() => v
            .to_i64()
            .ok_or_else(|| Error::msg(format!("{v} is out of range for bigint"))),
        Value::Text(Some(v)) => parse_integer(&v),
        other => Err(mismatch(&other, "an integer")),
    }
}

fn to_f64(value: Value) -> Result<f64> {
    Ok(match value {
        Value::TinyInt(Some(v)) => v.into(),
        Value::SmallInt(Some(v)) => v.into(),
        Value::Int(Some(v)) => v.into(),
        Value::BigInt(Some(v)) => v as f64,
        Value::Float(Some(v)) => v.into(),
        Value::Double(Some(v)) => v,
        Value::Decimal(Some(v)) => v
            .to_f64()
            .ok_or_else(|| Error::msg(format!("{v} is out of range for double")))?,
        Value::Text(Some(v)) => fast_float::parse(v.trim())
            .map_err(|_| Error::msg(format!("`{v}` is not a number")))?,
        other => return Err(mismatch(&other, "a floating point number")),
    })
}

fn to_f32(value: Value) -> Result<f32> {
    if let Value::Float(Some(v)) = value {
        return Ok(v);
    }
    let wide = to_f64(value)?;
    let narrowed = wide as f32;
    if wide.is_finite() && !narrowed.is_finite() {
        return Err(Error::msg(format!("{wide} is out of range for float")));
    }
    Ok(narrowed)
}

fn to_decimal(value: Value) -> Result<Decimal> {
    match value {
        Value::Decimal(Some(v)) => Ok(v),
        Value::Float(Some(v)) => {
            Decimal::try_from(v).with_context(|| format!("{v} is not a valid decimal"))
        }
        Value::Double(Some(v)) => {
            Decimal::try_from(v).with_context(|| format!("{v} is not a valid decimal"))
        }
        Value::Text(Some(v)) => {
            Decimal::from_str_exact(v.trim()).with_context(|| format!("`{v}` is not a decimal"))
        }
        integer @ (Value::TinyInt(..) | Value::SmallInt(..) | Value::Int(..) | Value::BigInt(..)) => {
            Ok(to_i64(integer)?.into())
        }
        other => Err(mismatch(&other, "decimal")),
    }
}

fn to_bool(value: Value) -> Result<bool> {
    match value {
        Value::Boolean(Some(v)) => Ok(v),
        Value::Text(Some(v)) => match v.trim() {
            t if t.eq_ignore_ascii_case("true") => Ok(true),
            t if t.eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(Error::msg(format!("`{v}` is not a boolean"))),
        },
        integer @ (Value::TinyInt(..) | Value::SmallInt(..) | Value::Int(..) | Value::BigInt(..)) => {
            Ok(to_i64(integer)? != 0)
        }
        other => Err(mismatch(&other, "boolean")),
    }
}

fn to_blob(value: Value) -> Result<Box<[u8]>> {
    match value {
        Value::Blob(Some(v)) => Ok(v),
        Value::Text(Some(v)) => {
            let digits = v
                .trim()
                .strip_prefix("0x")
                .or_else(|| v.trim().strip_prefix("0X"))
                .ok_or_else(|| Error::msg(format!("`{v}` is not a 0x prefixed blob")))?;
            let bytes = hex::decode(digits).with_context(|| format!("`{v}` is not a blob"))?;
            Ok(bytes.into_boxed_slice())
        }
        other => Err(mismatch(&other, "blob")),
    }
}

fn to_uuid(value: Value) -> Result<Uuid> {
    match value {
        Value::Uuid(Some(v)) => Ok(v),
        Value::Text(Some(v)) => {
            Uuid::parse_str(v.trim()).with_context(|| format!("`{v}` is not a uuid"))
        }
        other => Err(mismatch(&other, "uuid")),
    }
}

fn to_date(value: Value) -> Result<Date> {
    match value {
        Value::Date(Some(v)) => Ok(v),
        Value::LocalTimestamp(Some(v)) => Ok(v.date()),
        Value::Timestamp(Some(v)) => Ok(v.date()),
        Value::Text(Some(v)) => parse_date(&v),
        other => Err(mismatch(&other, "date")),
    }
}

fn to_time(value: Value) -> Result<Time> {
    match value {
        Value::Time(Some(v)) => Ok(v),
        Value::Text(Some(v)) => parse_time(&v),
        other => Err(mismatch(&other, "time")),
    }
}

fn to_local_timestamp(value: Value) -> Result<PrimitiveDateTime> {
    match value {
        Value::LocalTimestamp(Some(v)) => Ok(v),
        Value::Timestamp(Some(v)) => {
            let utc = v.to_offset(UtcOffset::UTC);
            Ok(PrimitiveDateTime::new(utc.date(), utc.time()))
        }
        Value::Date(Some(v)) => Ok(v.midnight()),
        Value::Text(Some(v)) => parse_local_timestamp(&v),
        other => Err(mismatch(&other, "timestamp")),
    }
}

/// Values without offset are read as UTC.
fn to_timestamp(value: Value) -> Result<OffsetDateTime> {
    match value {
        Value::Timestamp(Some(v)) => Ok(v),
        Value::LocalTimestamp(Some(v)) => Ok(v.assume_utc()),
        Value::Date(Some(v)) => Ok(v.midnight().assume_utc()),
        Value::Text(Some(v)) => {
            parse_timestamp(&v)
                .or_else(|_| parse_local_timestamp(&v).map(PrimitiveDateTime::assume_utc))
        }
        other => Err(mismatch(&other, "timestamp")),
    }
}
