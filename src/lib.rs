//! Bind CQL filter values into positional query parameters.
//!
//! A statement builder hands every filter value a starting placeholder id
//! through a [`Context`], writes the placeholder text returned by
//! [`Bindable::write_query`] into the query, and finally collects the
//! parameters into a [`BindingContext`].
//!
//! ```rust
//! use cqlbind::{Bindable, BindingContext, Context, TimeUuid, Value};
//! use time::macros::datetime;
//!
//! let mut context = Context::default();
//! let mut since = TimeUuid::min(datetime!(1970-01-01 0:00:01 UTC)).unwrap();
//! context.assign(&mut since).unwrap();
//! assert_eq!(since.render().unwrap(), "MinTimeUUID(:0)");
//!
//! let mut bindings = BindingContext::new();
//! since.update_context(&mut bindings).unwrap();
//! assert_eq!(bindings.get(0), Some(&Value::BigInt(Some(1000))));
//! ```
pub use cqlbind_core::*;
