use super::{Event, Severity, Status, promote};

/// Accumulates validation events and the status they imply.
///
/// The status starts at [`Status::Ok`] and only ever moves toward
/// [`Status::Error`] as events arrive. Events are kept in insertion order and
/// never deduplicated. A result may also carry the payload of a successful
/// operation, set through [`ValidationResult::of`].
///
/// Not meant to be shared between writers; each validation call path builds
/// and owns its own instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationResult<T> {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    data: Option<T>,
    status: Status,
    events: Vec<Event>,
}

impl<T> Default for ValidationResult<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: Status::Ok,
            events: Vec::new(),
        }
    }
}

impl<T> ValidationResult<T> {
    /// Empty result: no payload, no events, `Ok`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful result carrying `data`.
    pub fn of(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Result holding a single [`Severity::Info`] event.
    pub fn info(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::single(Event::info(key, message))
    }

    /// Result holding a single [`Severity::Warn`] event.
    pub fn warn(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::single(Event::warn(key, message))
    }

    /// Result holding a single [`Severity::Error`] event.
    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::single(Event::error(key, message))
    }

    fn single(event: Event) -> Self {
        let mut result = Self::new();
        result.add_event(event);
        result
    }

    /// Combines the events of `results`, in order, into a new result.
    ///
    /// Payloads of the inputs are dropped. The merged status is the highest
    /// status among the inputs, whatever order they come in.
    pub fn merge<U, I>(results: I) -> Self
    where
        I: IntoIterator<Item = ValidationResult<U>>,
    {
        results
            .into_iter()
            .fold(Self::new(), |mut merged, result| {
                merged.absorb(result);
                merged
            })
    }

    pub fn add_event(&mut self, event: Event) {
        self.status = promote(self.status, event.severity());
        self.events.push(event);
    }

    pub fn add_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.add_event(event);
        }
    }

    /// Appends every event of `other`, discarding its payload.
    pub fn absorb<U>(&mut self, other: ValidationResult<U>) {
        self.add_events(other.events);
    }

    /// Replaces the payload while keeping status and events.
    pub fn with_data<U>(self, data: U) -> ValidationResult<U> {
        ValidationResult {
            data: Some(data),
            status: self.status,
            events: self.events,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Events at or above `severity`, in insertion order.
    pub fn events_at_least(
        &self,
        severity: Severity,
    ) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |event| event.severity() >= severity)
    }
}

impl<T> Extend<Event> for ValidationResult<T> {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.add_events(iter);
    }
}

impl<T> FromIterator<Event> for ValidationResult<T> {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut result = Self::new();
        result.add_events(iter);
        result
    }
}

/// Merges any number of results, possibly with different payload types.
///
/// ```
/// use mediadex_model::{merge_results, Status, ValidationResult};
///
/// let year: ValidationResult<i32> = ValidationResult::warn("X", "x");
/// let name: ValidationResult<String> = ValidationResult::error("Y", "y");
/// let merged: ValidationResult<()> = merge_results![year, name];
///
/// assert_eq!(merged.status(), Status::Error);
/// assert_eq!(merged.events().len(), 2);
/// ```
#[macro_export]
macro_rules! merge_results {
    ($($result:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut merged = $crate::ValidationResult::new();
        $( merged.absorb($result); )*
        merged
    }};
}
