use crate::{CqlFunction, write_separated};
use std::ops::Range;

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Dialect printer for the placeholder text bound values emit.
pub trait CqlWriter {
    /// Prefix of a named placeholder.
    fn placeholder_prefix(&self) -> char {
        ':'
    }

    /// Render a single bound-parameter marker.
    fn write_placeholder(&self, out: &mut String, id: u32) {
        out.push(self.placeholder_prefix());
        write_integer!(out, id);
    }

    /// Server side name of a function.
    fn function_name(&self, function: CqlFunction) -> &'static str {
        match function {
            CqlFunction::MinTimeUuid => "MinTimeUUID",
            CqlFunction::MaxTimeUuid => "MaxTimeUUID",
            CqlFunction::Token => "token",
        }
    }

    /// Render `name(:a, :b, ...)` over the placeholders in `ids`.
    fn write_function_call(&self, out: &mut String, function: CqlFunction, ids: Range<u32>) {
        out.push_str(self.function_name(function));
        out.push('(');
        write_separated(out, ids, ", ", |out, id| self.write_placeholder(out, id));
        out.push(')');
    }
}

/// Placeholders in the `:{id}` form.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericCqlWriter {}

impl GenericCqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl CqlWriter for GenericCqlWriter {}
