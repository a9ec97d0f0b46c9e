use crate::{Result, Value};
use anyhow::Context;

/// Column descriptor: knows how to turn a raw value into what gets stored.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: &'static str,
    /// Prototype of the storage type.
    pub value: Value,
    pub nullable: bool,
    /// Component of the partition key, hashed by `token()`.
    pub partition_key: bool,
}

impl ColumnDef {
    /// Nullable regular column storing values of the type of `value`.
    pub fn new(name: &'static str, value: Value) -> Self {
        Self {
            name,
            value: value.as_prototype(),
            nullable: true,
            partition_key: false,
        }
    }
    /// Mark as partition key component, which is never null.
    pub fn partition_key(mut self) -> Self {
        self.partition_key = true;
        self.nullable = false;
        self
    }

    /// Convert a raw value into the column storage representation.
    pub fn serialize(&self, value: Value) -> Result<Value> {
        if value.is_null() && !self.nullable {
            return Err(crate::Error::msg(format!(
                "Column `{}` is not nullable",
                self.name
            )));
        }
        log::trace!(
            "Serializing {value} as {} for `{}`",
            self.value.cql_type(),
            self.name
        );
        value.cast(&self.value).with_context(|| {
            format!(
                "While serializing column `{}` of type {}",
                self.name,
                self.value.cql_type()
            )
        })
    }
}
