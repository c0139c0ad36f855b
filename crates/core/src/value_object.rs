//! Value object trait: equality by value, not identity.
//!
//! An event identifier has no identity of its own. It is defined entirely by
//! its numeric code and its name, so two identifiers built from the same
//! values are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They expose read
/// accessors only; "changing" one means building a new instance.
///
/// Immutability also makes them safe to share across threads without
/// synchronization, which is what logging call sites on many threads need.
///
/// The trait requires:
/// - **Clone**: values are copied around freely (names are shared when static)
/// - **PartialEq**: instances are compared by their attribute values
/// - **Debug**: instances must be printable in diagnostics and test failures
///
/// ```
/// use eventid_core::{EventId, ValueObject};
///
/// fn assert_value_object<T: ValueObject>(a: T, b: T) -> bool {
///     a == b
/// }
///
/// assert!(assert_value_object(EventId::new(1, "Start"), EventId::from((1, "Start"))));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
