use crate::{Bindable, Result, id_span};

/// Per-statement allocator of placeholder ids.
///
/// Every bindable value gets the next free id and reserves as many
/// consecutive ids as its `context_size()`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub counter: u32,
}

impl Context {
    /// Start numbering at `start`, e.g. after values bound by an outer clause.
    pub fn new(start: u32) -> Self {
        Self { counter: start }
    }
    pub fn update_from(&mut self, context: &Context) {
        self.counter = context.counter;
    }
    /// Reserve `size` consecutive ids returning the first.
    pub fn reserve(&mut self, size: u32) -> Result<u32> {
        let ids = id_span(self.counter, size)?;
        self.counter = ids.end;
        Ok(ids.start)
    }
    /// Assign the next id to `value`.
    pub fn assign<B: Bindable + ?Sized>(&mut self, value: &mut B) -> Result<u32> {
        let mut next = *self;
        let id = next.reserve(value.context_size())?;
        value.set_context_id(id)?;
        self.update_from(&next);
        Ok(id)
    }
}
