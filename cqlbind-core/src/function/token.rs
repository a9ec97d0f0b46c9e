use crate::{
    BindError, Bindable, BindingContext, ColumnDef, ContextId, CqlFunction, CqlWriter,
    QueryFunction, Result, Value, placeholder_count,
};
use anyhow::Context;

/// Shape of the arguments a [`Token`] was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenArgs {
    /// A single list argument, its items are the components.
    Sequence(Vec<Value>),
    /// Each argument is a component.
    Variadic(Vec<Value>),
}

impl TokenArgs {
    pub fn from_args(args: Vec<Value>) -> Self {
        match <[Value; 1]>::try_from(args) {
            Ok([Value::List(Some(values), ..)]) => TokenArgs::Sequence(values),
            Ok([value]) => TokenArgs::Variadic(vec![value]),
            Err(args) => TokenArgs::Variadic(args),
        }
    }
    pub fn into_values(self) -> Vec<Value> {
        match self {
            TokenArgs::Sequence(v) | TokenArgs::Variadic(v) => v,
        }
    }
}

/// Partitioner token of a partition key, rendered `token(:a, :b, ...)`.
///
/// The columns used to serialize each component are supplied after
/// construction with [`Token::set_columns`], the token can be populated only
/// once they match the components one to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'c> {
    values: Vec<Value>,
    size: u32,
    columns: Option<&'c [ColumnDef]>,
    context_id: ContextId,
}

impl<'c> Token<'c> {
    pub fn new<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Result<Self> {
        Self::from_args(TokenArgs::from_args(
            values.into_iter().map(Into::into).collect(),
        ))
    }
    /// Fails if the components would need more placeholders than `u32` holds.
    pub fn from_args(args: TokenArgs) -> Result<Self> {
        let values = args.into_values();
        Ok(Self {
            size: placeholder_count(values.len())?,
            values,
            columns: None,
            context_id: Default::default(),
        })
    }
    /// Token already bound to its partition key columns.
    pub fn for_columns<V: Into<Value>>(
        columns: &'c [ColumnDef],
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self> {
        let mut result = Self::new(values)?;
        result.set_columns(columns);
        Ok(result)
    }
    pub fn set_columns(&mut self, columns: &'c [ColumnDef]) -> &mut Self {
        if columns.len() != self.values.len() {
            log::debug!(
                "Token over {} values received {} columns",
                self.values.len(),
                columns.len()
            );
        }
        self.columns = Some(columns);
        self
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn columns(&self) -> Option<&'c [ColumnDef]> {
        self.columns
    }
    /// Columns are set and match the components.
    pub fn is_ready(&self) -> bool {
        self.columns
            .is_some_and(|columns| columns.len() == self.values.len())
    }

    fn ready_columns(&self) -> Result<&'c [ColumnDef]> {
        let Some(columns) = self.columns else {
            return Err(BindError::PreconditionViolation(
                "the token columns were not set".into(),
            )
            .into());
        };
        if columns.len() != self.values.len() {
            return Err(BindError::PreconditionViolation(format!(
                "the token has {} values but {} columns",
                self.values.len(),
                columns.len()
            ))
            .into());
        }
        Ok(columns)
    }
}

impl<'c> Bindable for Token<'c> {
    fn context_id(&self) -> Option<u32> {
        self.context_id.get()
    }
    fn set_context_id(&mut self, id: u32) -> Result<()> {
        self.context_id.set(id, self.size)
    }
    fn context_size(&self) -> u32 {
        self.size
    }
    fn write_query(&self, writer: &dyn CqlWriter, out: &mut String) -> Result<()> {
        let ids = self.context_id.span(self.size)?;
        writer.write_function_call(out, CqlFunction::Token, ids);
        Ok(())
    }
    fn update_context(&self, context: &mut BindingContext) -> Result<()> {
        let ids = self.context_id.span(self.size)?;
        let columns = self.ready_columns()?;
        // Nothing is written unless every component serializes
        let values = columns
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(i, (column, value))| {
                column
                    .serialize(value.clone())
                    .with_context(|| format!("While binding the token component {i}"))
            })
            .collect::<Result<Vec<_>>>()?;
        log::trace!("Binding {} token components at :{}", values.len(), ids.start);
        context.extend(ids.start, values)
    }
}

impl<'c> QueryFunction for Token<'c> {
    fn function(&self) -> CqlFunction {
        CqlFunction::Token
    }
}

/// Build a [`Token`] from a list of components, failing like
/// [`Token::from_args`].
///
/// ```rust
/// use cqlbind_core::{Bindable, token};
/// let mut token = token!(7, "us-east").unwrap();
/// token.set_context_id(2).unwrap();
/// assert_eq!(token.render().unwrap(), "token(:2, :3)");
/// ```
#[macro_export]
macro_rules! token {
    ($($value:expr),* $(,)?) => {
        $crate::Token::from_args($crate::TokenArgs::from_args(
            vec![$($crate::Value::from($value)),*]
        ))
    };
}
