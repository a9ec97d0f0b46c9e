use crate::{Bindable, Error, Result, Value, id_span, placeholder_count};
use std::collections::BTreeMap;

/// Placeholder key to bound value, filled while a statement is assembled and
/// consumed when it is executed.
///
/// Keys are the stringified placeholder ids (`"0"`, `"1"`, ...).
#[derive(Default, Debug, Clone, PartialEq)]
pub struct BindingContext {
    values: BTreeMap<String, Value>,
}

impl BindingContext {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn get(&self, id: u32) -> Option<&Value> {
        self.values.get(Self::key(id).as_str())
    }
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
    pub fn contains(&self, id: u32) -> bool {
        self.values.contains_key(Self::key(id).as_str())
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Bind `value` at placeholder `id`, returning the previous value if any.
    pub fn insert(&mut self, id: u32, value: Value) -> Option<Value> {
        let previous = self.values.insert(Self::key(id), value);
        if let Some(previous) = &previous {
            log::warn!("Placeholder :{id} was already bound to {previous}, it is now replaced");
        }
        previous
    }

    /// Bind consecutive placeholders starting at `start`.
    ///
    /// Nothing is bound if the ids would overflow `u32`.
    pub fn extend(&mut self, start: u32, values: impl IntoIterator<Item = Value>) -> Result<()> {
        let values: Vec<Value> = values.into_iter().collect();
        let ids = id_span(start, placeholder_count(values.len())?)?;
        for (id, value) in ids.zip(values) {
            self.insert(id, value);
        }
        Ok(())
    }

    /// Let `value` write its bindings.
    pub fn update_from(&mut self, value: &dyn Bindable) -> Result<()> {
        value.update_context(self)
    }

    /// Values ordered by placeholder id, ready for a positional driver.
    ///
    /// Fails unless the ids are exactly `0..len`.
    pub fn into_positional(self) -> Result<Vec<Value>> {
        let mut ids = self
            .values
            .into_iter()
            .map(|(k, v)| {
                k.parse::<u32>()
                    .map(|id| (id, v))
                    .map_err(|_| Error::msg(format!("Placeholder key `{k}` is not an integer")))
            })
            .collect::<Result<Vec<_>>>()?;
        ids.sort_unstable_by_key(|(id, _)| *id);
        ids.into_iter()
            .enumerate()
            .map(|(i, (id, v))| {
                if id as usize != i {
                    return Err(Error::msg(format!(
                        "Placeholder :{i} is not bound (next bound id is :{id})"
                    )));
                }
                Ok(v)
            })
            .collect()
    }

    fn key(id: u32) -> String {
        let mut buffer = itoa::Buffer::new();
        buffer.format(id).to_owned()
    }
}

impl<'a> IntoIterator for &'a BindingContext {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
