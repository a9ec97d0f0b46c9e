mod bindable;
mod binding_context;
mod cast;
mod column;
mod error;
mod function;
mod native;
mod parse;
mod util;
mod value;
mod writer;

pub use bindable::*;
pub use binding_context::*;
pub use column::*;
pub use error::*;
pub use function::*;
pub use native::*;
pub use parse::*;
pub use util::*;
pub use value::*;
pub use writer::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
