//! Exception-like values and the type tags used to match them.
//!
//! This module defines:
//!
//! - [`Throwable`]: object-safe view of an error value (type tag + optional message)
//! - [`ThrowableClass`]: static side of a throwable type, exposing its canonical name
//! - [`ThrowableType`]: the stable type tag compared by redaction rules
//! - [`MessageSource`]: field types usable as a derived message
//!
//! Type identity is [`TypeId`]-based. Two types that share a canonical name but
//! are defined in different crates or modules are distinct tags, so a rule
//! naming one never matches the other.

use std::{
    any::TypeId,
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
};

mod std_impls;

// =============================================================================
// Throwable - Object-safe view of an error value
// =============================================================================

/// An exception-like value that may be attached to a log call.
///
/// Implement this with `#[derive(Throwable)]` rather than by hand; the derive
/// keeps [`Throwable::throwable_type`] consistent with
/// [`ThrowableType::of`].
pub trait Throwable {
    /// Returns the type tag of this value.
    fn throwable_type(&self) -> ThrowableType;

    /// Returns the message carried by this value, if any.
    fn message(&self) -> Option<Cow<'_, str>>;
}

impl<T: Throwable + ?Sized> Throwable for &T {
    fn throwable_type(&self) -> ThrowableType {
        (**self).throwable_type()
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        (**self).message()
    }
}

impl<T: Throwable + ?Sized> Throwable for Box<T> {
    fn throwable_type(&self) -> ThrowableType {
        (**self).throwable_type()
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        (**self).message()
    }
}

// =============================================================================
// ThrowableClass - Static side of a throwable type
// =============================================================================

/// Names a concrete throwable type so rules can refer to it without an instance.
pub trait ThrowableClass: Throwable + Sized + 'static {
    /// Fully qualified name used in redaction placeholders.
    const TYPE_NAME: &'static str;
}

// =============================================================================
// ThrowableType - Stable type tag
// =============================================================================

/// Type tag of a throwable: its [`TypeId`] plus its canonical name.
///
/// Equality and hashing use the [`TypeId`] only.
#[derive(Clone, Copy)]
pub struct ThrowableType {
    id: TypeId,
    name: &'static str,
}

impl ThrowableType {
    /// Returns the tag of `T`.
    pub fn of<T: ThrowableClass>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::TYPE_NAME,
        }
    }

    /// Canonical name of the type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying [`TypeId`].
    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for ThrowableType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ThrowableType {}

impl Hash for ThrowableType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ThrowableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ThrowableType").field(&self.name).finish()
    }
}

impl fmt::Display for ThrowableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// =============================================================================
// MessageSource - Field types usable as a derived message
// =============================================================================

/// A field type that can provide the message of a derived throwable.
///
/// Used by `#[throwable(message)]`.
pub trait MessageSource {
    fn message_source(&self) -> Option<Cow<'_, str>>;
}

impl MessageSource for String {
    fn message_source(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl MessageSource for &'static str {
    fn message_source(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl MessageSource for Cow<'static, str> {
    fn message_source(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl<T: MessageSource> MessageSource for Option<T> {
    fn message_source(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(MessageSource::message_source)
    }
}

impl<T: MessageSource + ?Sized> MessageSource for Box<T> {
    fn message_source(&self) -> Option<Cow<'_, str>> {
        (**self).message_source()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct Timeout;

    impl Throwable for Timeout {
        fn throwable_type(&self) -> ThrowableType {
            ThrowableType::of::<Self>()
        }

        fn message(&self) -> Option<Cow<'_, str>> {
            None
        }
    }

    impl ThrowableClass for Timeout {
        const TYPE_NAME: &'static str = "net::Timeout";
    }

    mod shadow {
        use super::{Cow, Throwable, ThrowableClass, ThrowableType};

        // Same canonical name as the outer `Timeout`, different type.
        pub(super) struct Timeout;

        impl Throwable for Timeout {
            fn throwable_type(&self) -> ThrowableType {
                ThrowableType::of::<Self>()
            }

            fn message(&self) -> Option<Cow<'_, str>> {
                None
            }
        }

        impl ThrowableClass for Timeout {
            const TYPE_NAME: &'static str = "net::Timeout";
        }
    }

    #[test]
    fn tag_uses_canonical_name() {
        let tag = ThrowableType::of::<Timeout>();
        assert_eq!(tag.name(), "net::Timeout");
        assert_eq!(tag.to_string(), "net::Timeout");
        assert_eq!(Timeout.throwable_type(), tag);
    }

    #[test]
    fn same_name_different_definition_is_a_different_tag() {
        let outer = ThrowableType::of::<Timeout>();
        let inner = ThrowableType::of::<shadow::Timeout>();
        assert_eq!(outer.name(), inner.name());
        assert_ne!(outer, inner);

        let set: HashSet<_> = [outer].into_iter().collect();
        assert!(!set.contains(&inner));
    }

    #[test]
    fn references_forward_to_the_value() {
        let boxed: Box<dyn Throwable> = Box::new(Timeout);
        assert_eq!(boxed.throwable_type(), ThrowableType::of::<Timeout>());
        assert!((&boxed).message().is_none());
    }

    #[test]
    fn message_sources() {
        assert_eq!(String::from("a").message_source().as_deref(), Some("a"));
        assert_eq!(Some("b").message_source().as_deref(), Some("b"));
        assert_eq!(None::<String>.message_source(), None);
        assert_eq!(
            Cow::<'static, str>::Borrowed("c").message_source().as_deref(),
            Some("c")
        );
    }
}
