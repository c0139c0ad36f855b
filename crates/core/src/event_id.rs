//! Logging event identifier.

use core::any::Any;
use core::hash::{Hash, Hasher};
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{EventIdError, EventIdResult};
use crate::value_object::ValueObject;

/// Identifies a logging event: a numeric code plus a short descriptive name.
///
/// The public shape follows the event identifier of common logging
/// abstractions (`id`, `name`, conversion from an integer or an
/// `(integer, name)` pair), so call sites that only build, compare or hash
/// identifiers port over without changes.
///
/// - **Equality** compares `id` and the exact bytes of `name` (case-sensitive,
///   no normalization).
/// - **Hashing** uses `id` only. Identifiers sharing an id but not a name land
///   in the same bucket, which stays consistent with equality.
///
/// Names are stored as `Cow<'static, str>` so identifiers can be declared as
/// constants:
///
/// ```
/// use eventid_core::EventId;
///
/// const USER_LOGGED_IN: EventId = EventId::from_static(42, "UserLoggedIn");
///
/// fn log_with(event: impl Into<EventId>) -> EventId {
///     event.into()
/// }
///
/// assert_eq!(log_with(USER_LOGGED_IN).id(), 42);
/// assert_eq!(log_with(5), EventId::new(5, ""));
/// assert_eq!(log_with((10, "Shutdown")).name(), "Shutdown");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventId {
    id: i32,
    #[serde(default)]
    name: Cow<'static, str>,
}

impl EventId {
    /// Create an identifier; both fields are stored verbatim.
    pub fn new(id: i32, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Compile-time constructor for identifiers with a static name.
    pub const fn from_static(id: i32, name: &'static str) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrowing decomposition, for `let (id, name) = event.deconstruct();`.
    pub fn deconstruct(&self) -> (i32, &str) {
        (self.id, &self.name)
    }

    /// Owning decomposition. Static names come back borrowed.
    pub fn into_parts(self) -> (i32, Cow<'static, str>) {
        (self.id, self.name)
    }

    /// Typed equality: same id and byte-identical name.
    pub fn equals(&self, other: &EventId) -> bool {
        self.id == other.id && self.name.as_bytes() == other.name.as_bytes()
    }

    /// Equality against a value of unknown type.
    ///
    /// Returns `false` for `None` and for anything that is not an `EventId`.
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|value| value.downcast_ref::<EventId>())
            .is_some_and(|event| self.equals(event))
    }

    /// Hash code of the identifier, which is the id itself.
    pub fn hash_code(&self) -> i32 {
        self.id
    }
}

impl PartialEq for EventId {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for EventId {}

impl Hash for EventId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl ValueObject for EventId {}

/// Displays the name, or the id when the name is empty.
impl core::fmt::Display for EventId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.name.is_empty() {
            core::fmt::Display::fmt(&self.id, f)
        } else {
            f.pad(&self.name)
        }
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        Self::from_static(id, "")
    }
}

impl<N> From<(i32, N)> for EventId
where
    N: Into<Cow<'static, str>>,
{
    fn from((id, name): (i32, N)) -> Self {
        Self::new(id, name)
    }
}

impl From<&EventId> for EventId {
    fn from(value: &EventId) -> Self {
        value.clone()
    }
}

impl From<EventId> for (i32, String) {
    fn from(value: EventId) -> Self {
        (value.id, value.name.into_owned())
    }
}

impl TryFrom<i64> for EventId {
    type Error = EventIdError;

    fn try_from(value: i64) -> EventIdResult<Self> {
        let id = i32::try_from(value).map_err(|_| EventIdError::out_of_range(value))?;
        Ok(Self::from(id))
    }
}

impl TryFrom<u32> for EventId {
    type Error = EventIdError;

    fn try_from(value: u32) -> EventIdResult<Self> {
        let id = i32::try_from(value).map_err(|_| EventIdError::out_of_range(value))?;
        Ok(Self::from(id))
    }
}
