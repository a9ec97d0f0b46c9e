use rust_decimal::Decimal;
use std::fmt::{self, Display, Write};
use uuid::Uuid;

macro_rules! cql_values {
    ($($variant:ident($ty:ty) = $name:literal,)+) => {
        /// Dynamically typed CQL value.
        ///
        /// Every scalar variant holds an `Option`: without a payload the value
        /// is a prototype, the bare type a [`ColumnDef`](crate::ColumnDef)
        /// stores its values as.
        #[derive(Default, Debug, Clone)]
        pub enum Value {
            #[default]
            Null,
            $($variant(Option<$ty>),)+
            /// Items and the prototype of an item.
            List(Option<Vec<Value>>, Box<Value>),
        }

        impl Value {
            /// `Null` or a variant without payload.
            pub fn is_null(&self) -> bool {
                match self {
                    Value::Null => true,
                    $(Value::$variant(v) => v.is_none(),)+
                    Value::List(items, ..) => items.is_none(),
                }
            }

            /// Same variant, payload dropped.
            pub fn as_prototype(&self) -> Value {
                match self {
                    Value::Null => Value::Null,
                    $(Value::$variant(..) => Value::$variant(None),)+
                    Value::List(.., item) => Value::List(None, item.clone()),
                }
            }

            /// CQL spelling of the type, `list<int>` for lists.
            pub fn cql_type(&self) -> String {
                match self {
                    Value::Null => "null".to_string(),
                    $(Value::$variant(..) => $name.to_string(),)+
                    Value::List(.., item) => format!("list<{}>", item.cql_type()),
                }
            }
        }

        impl PartialEq for Value {
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    (Value::Null, Value::Null) => true,
                    $((Value::$variant(a), Value::$variant(b)) => a == b,)+
                    (Value::List(a, a_item), Value::List(b, b_item)) => {
                        a == b && a_item == b_item
                    }
                    _ => false,
                }
            }
        }
    };
}

cql_values! {
    Boolean(bool) = "boolean",
    TinyInt(i8) = "tinyint",
    SmallInt(i16) = "smallint",
    Int(i32) = "int",
    BigInt(i64) = "bigint",
    Float(f32) = "float",
    Double(f64) = "double",
    Decimal(Decimal) = "decimal",
    Text(String) = "text",
    Blob(Box<[u8]>) = "blob",
    Date(time::Date) = "date",
    Time(time::Time) = "time",
    LocalTimestamp(time::PrimitiveDateTime) = "timestamp",
    Timestamp(time::OffsetDateTime) = "timestamp",
    Uuid(Uuid) = "uuid",
}

macro_rules! write_float {
    ($f:ident, $value:expr) => {{
        let value = $value;
        if value.is_nan() {
            $f.write_str("NaN")
        } else if value.is_infinite() {
            $f.write_str(if value.is_sign_negative() { "-Infinity" } else { "Infinity" })
        } else {
            let mut buffer = ryu::Buffer::new();
            $f.write_str(buffer.format_finite(value))
        }
    }};
}

/// CQL literal of the value.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(Some(v)) => write!(f, "{v}"),
            Value::TinyInt(Some(v)) => write!(f, "{v}"),
            Value::SmallInt(Some(v)) => write!(f, "{v}"),
            Value::Int(Some(v)) => write!(f, "{v}"),
            Value::BigInt(Some(v)) => write!(f, "{v}"),
            Value::Float(Some(v)) => write_float!(f, *v),
            Value::Double(Some(v)) => write_float!(f, *v),
            Value::Decimal(Some(v)) => write!(f, "{v}"),
            Value::Text(Some(v)) => write!(f, "'{}'", v.replace('\'', "''")),
            Value::Blob(Some(v)) => write!(f, "0x{}", hex::encode(v)),
            Value::Date(Some(v)) => write!(f, "'{v}'"),
            Value::Time(Some(v)) => write!(f, "'{v}'"),
            Value::LocalTimestamp(Some(v)) => write!(f, "'{v}'"),
            Value::Timestamp(Some(v)) => write!(f, "'{v}'"),
            Value::Uuid(Some(v)) => write!(f, "{v}"),
            Value::List(Some(items), ..) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_char(']')
            }
            _ => f.write_str("null"),
        }
    }
}
