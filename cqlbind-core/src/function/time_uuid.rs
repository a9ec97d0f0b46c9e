use crate::{
    BindError, Bindable, BindingContext, ContextId, CqlFunction, CqlWriter, Error, QueryFunction,
    Result, Value, parse_local_timestamp, parse_timestamp,
};
use std::fmt::{self, Display};
use time::{Duration, OffsetDateTime, PrimitiveDateTime, macros::datetime};

const EPOCH: PrimitiveDateTime = datetime!(1970-01-01 0:00);

/// A point in time, with or without a UTC offset attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Naive(PrimitiveDateTime),
    WithOffset(OffsetDateTime),
}

impl Timestamp {
    /// The unix epoch in the same representation (same offset) as `self`.
    pub fn epoch(&self) -> Timestamp {
        match self {
            Timestamp::Naive(..) => Timestamp::Naive(EPOCH),
            Timestamp::WithOffset(v) => Timestamp::WithOffset(EPOCH.assume_offset(v.offset())),
        }
    }

    /// UTC offset in seconds, zero when naive.
    pub fn offset_seconds(&self) -> i32 {
        match self {
            Timestamp::Naive(..) => 0,
            Timestamp::WithOffset(v) => v.offset().whole_seconds(),
        }
    }

    /// Milliseconds since the unix epoch, truncated toward zero.
    ///
    /// Naive values are read as UTC. An offset value and its UTC equivalent
    /// give the same result.
    pub fn unix_millis(&self) -> Result<i64> {
        let elapsed = match self {
            Timestamp::Naive(v) => *v - EPOCH,
            Timestamp::WithOffset(v) => *v - EPOCH.assume_offset(v.offset()),
        };
        let elapsed = elapsed - Duration::seconds(self.offset_seconds() as i64);
        let millis = elapsed.whole_milliseconds();
        i64::try_from(millis)
            .map_err(|_| Error::msg(format!("{self} is out of the millisecond range ({millis})")))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Naive(v) => write!(f, "{v}"),
            Timestamp::WithOffset(v) => write!(f, "{v}"),
        }
    }
}

impl From<PrimitiveDateTime> for Timestamp {
    fn from(value: PrimitiveDateTime) -> Self {
        Timestamp::Naive(value)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(value: OffsetDateTime) -> Self {
        Timestamp::WithOffset(value)
    }
}

impl TryFrom<Value> for Timestamp {
    type Error = Error;
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::LocalTimestamp(Some(v)) => Ok(Timestamp::Naive(v)),
            Value::Timestamp(Some(v)) => Ok(Timestamp::WithOffset(v)),
            Value::Text(Some(v)) => parse_timestamp(&v)
                .map(Timestamp::WithOffset)
                .or_else(|_| parse_local_timestamp(&v).map(Timestamp::Naive))
                .map_err(|e| {
                    BindError::InvalidArgument(format!("`{v}` is not a timestamp: {e:#}")).into()
                }),
            _ => Err(BindError::InvalidArgument(format!(
                "a timestamp is required, got {}",
                value.cql_type()
            ))
            .into()),
        }
    }
}

/// Which end of a timeuuid range a [`TimeUuid`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUuidBound {
    /// Sorts before every timeuuid of the same millisecond.
    Min,
    /// Sorts after every timeuuid of the same millisecond.
    Max,
}

/// Fake timeuuid bounding a scan over a timeuuid column at a given instant.
///
/// Renders `MinTimeUUID(:id)` or `MaxTimeUUID(:id)` and binds the instant as
/// milliseconds since the unix epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeUuid {
    bound: TimeUuidBound,
    timestamp: Timestamp,
    context_id: ContextId,
}

impl TimeUuid {
    /// Fails with [`BindError::InvalidArgument`] unless `value` is a timestamp
    /// or text parsing as one.
    pub fn new(bound: TimeUuidBound, value: impl Into<Value>) -> Result<Self> {
        let value: Value = value.into();
        Ok(Self {
            bound,
            timestamp: value.try_into()?,
            context_id: Default::default(),
        })
    }
    pub fn min(value: impl Into<Value>) -> Result<Self> {
        Self::new(TimeUuidBound::Min, value)
    }
    pub fn max(value: impl Into<Value>) -> Result<Self> {
        Self::new(TimeUuidBound::Max, value)
    }
    pub fn bound(&self) -> TimeUuidBound {
        self.bound
    }
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }
}

impl Bindable for TimeUuid {
    fn context_id(&self) -> Option<u32> {
        self.context_id.get()
    }
    fn set_context_id(&mut self, id: u32) -> Result<()> {
        self.context_id.set(id, 1)
    }
    fn write_query(&self, writer: &dyn CqlWriter, out: &mut String) -> Result<()> {
        let ids = self.context_id.span(1)?;
        writer.write_function_call(out, self.function(), ids);
        Ok(())
    }
    fn update_context(&self, context: &mut BindingContext) -> Result<()> {
        let id = self.context_id.require()?;
        let millis = self.timestamp.unix_millis()?;
        log::trace!("Binding {} as {millis} at :{id}", self.timestamp);
        context.insert(id, Value::BigInt(Some(millis)));
        Ok(())
    }
}

impl QueryFunction for TimeUuid {
    fn function(&self) -> CqlFunction {
        match self.bound {
            TimeUuidBound::Min => CqlFunction::MinTimeUuid,
            TimeUuidBound::Max => CqlFunction::MaxTimeUuid,
        }
    }
}
