use crate::{BindError, BindingContext, CqlWriter, GenericCqlWriter, Result, Value};
use std::{fmt::Debug, ops::Range};

/// The `size` consecutive ids starting at `id`.
pub fn id_span(id: u32, size: u32) -> Result<Range<u32>> {
    id.checked_add(size).map(|end| id..end).ok_or_else(|| {
        BindError::IdOverflow {
            id,
            size: size.into(),
        }
        .into()
    })
}

/// Placeholders needed by `len` values, failing past `u32::MAX`.
pub fn placeholder_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        BindError::IdOverflow {
            id: 0,
            size: len as u64,
        }
        .into()
    })
}

/// Single-assignment slot for the first placeholder id of a value.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextId(Option<u32>);

impl ContextId {
    pub fn get(&self) -> Option<u32> {
        self.0
    }
    /// Store `id` as the first of `size` ids, all of which must fit `u32`.
    pub fn set(&mut self, id: u32, size: u32) -> Result<()> {
        if let Some(current) = self.0 {
            return Err(BindError::ContextIdAlreadySet(current).into());
        }
        id_span(id, size)?;
        self.0 = Some(id);
        Ok(())
    }
    pub fn require(&self) -> Result<u32> {
        self.0.ok_or_else(|| BindError::MissingContextId.into())
    }
    pub fn span(&self, size: u32) -> Result<Range<u32>> {
        id_span(self.require()?, size)
    }
}

/// A filter value that renders itself as placeholder text and binds its
/// payload into the statement [`BindingContext`].
///
/// The statement builder first assigns the starting id (usually through
/// [`crate::Context::assign`]), then writes the query text, then populates
/// the context once the statement is complete.
pub trait Bindable: Debug + Send + Sync {
    fn context_id(&self) -> Option<u32>;
    /// Fails if an id was already assigned or if the ids from `id` on
    /// overflow `u32`.
    fn set_context_id(&mut self, id: u32) -> Result<()>;
    /// Number of consecutive placeholder ids consumed.
    fn context_size(&self) -> u32 {
        1
    }
    /// Write the placeholder text.
    fn write_query(&self, writer: &dyn CqlWriter, out: &mut String) -> Result<()> {
        writer.write_placeholder(out, self.require_context_id()?);
        Ok(())
    }
    /// Write exactly `context_size()` entries starting at the context id.
    fn update_context(&self, context: &mut BindingContext) -> Result<()>;
    fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_query(&GenericCqlWriter::new(), &mut out)?;
        Ok(out)
    }
    fn require_context_id(&self) -> Result<u32> {
        self.context_id()
            .ok_or_else(|| BindError::MissingContextId.into())
    }
}

/// Plain value bound to a single placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryValue {
    value: Value,
    context_id: ContextId,
}

impl QueryValue {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            context_id: Default::default(),
        }
    }
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Bindable for QueryValue {
    fn context_id(&self) -> Option<u32> {
        self.context_id.get()
    }
    fn set_context_id(&mut self, id: u32) -> Result<()> {
        self.context_id.set(id, 1)
    }
    fn update_context(&self, context: &mut BindingContext) -> Result<()> {
        context.insert(self.context_id.require()?, self.value.clone());
        Ok(())
    }
}
