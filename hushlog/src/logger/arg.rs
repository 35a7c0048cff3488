//! Values passed to log calls.

use std::{borrow::Cow, fmt};

use crate::{rules::Redaction, throwable::Throwable};

/// One argument of a log call.
///
/// Only [`Arg::Throwable`] is ever rewritten by sanitization; it either comes
/// back as the same reference or becomes [`Arg::Redacted`].
#[derive(Clone)]
pub enum Arg<'a> {
    /// An exception-like value.
    Throwable(&'a dyn Throwable),
    Text(Cow<'a, str>),
    Display(&'a dyn fmt::Display),
    /// Placeholder standing in for a hidden throwable.
    Redacted(Redaction),
    /// No value.
    Absent,
}

impl<'a> Arg<'a> {
    pub fn throwable<T: Throwable>(value: &'a T) -> Self {
        Arg::Throwable(value)
    }

    pub fn display<T: fmt::Display>(value: &'a T) -> Self {
        Arg::Display(value)
    }

    /// `Arg::Absent` for `None`, `Arg::Throwable` otherwise.
    pub fn optional_throwable(value: Option<&'a dyn Throwable>) -> Self {
        value.map_or(Arg::Absent, Arg::Throwable)
    }

    pub fn as_throwable(&self) -> Option<&'a dyn Throwable> {
        match self {
            Arg::Throwable(throwable) => Some(*throwable),
            _ => None,
        }
    }

    pub fn as_redaction(&self) -> Option<&Redaction> {
        match self {
            Arg::Redacted(redaction) => Some(redaction),
            _ => None,
        }
    }

    /// True for throwables and for placeholders that replaced one.
    pub fn is_cause(&self) -> bool {
        matches!(self, Arg::Throwable(_) | Arg::Redacted(_))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Arg::Text(Cow::Owned(value))
    }
}

impl From<Redaction> for Arg<'_> {
    fn from(value: Redaction) -> Self {
        Arg::Redacted(value)
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Throwable(throwable) => {
                let name = throwable.throwable_type().name();
                match throwable.message() {
                    Some(message) => write!(f, "{name}: {message}"),
                    None => f.write_str(name),
                }
            }
            Arg::Text(text) => f.write_str(text),
            Arg::Display(value) => fmt::Display::fmt(value, f),
            Arg::Redacted(redaction) => fmt::Display::fmt(redaction, f),
            Arg::Absent => f.write_str("<absent>"),
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Throwable(throwable) => f
                .debug_struct("Throwable")
                .field("type", &throwable.throwable_type().name())
                .field("message", &throwable.message())
                .finish(),
            Arg::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Arg::Display(value) => f.debug_tuple("Display").field(&value.to_string()).finish(),
            Arg::Redacted(redaction) => f.debug_tuple("Redacted").field(redaction).finish(),
            Arg::Absent => f.write_str("Absent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        rules::RedactionReason,
        throwable::{ThrowableClass, ThrowableType},
    };

    struct Denied(Option<&'static str>);

    impl Throwable for Denied {
        fn throwable_type(&self) -> ThrowableType {
            ThrowableType::of::<Self>()
        }

        fn message(&self) -> Option<Cow<'_, str>> {
            self.0.map(Cow::Borrowed)
        }
    }

    impl ThrowableClass for Denied {
        const TYPE_NAME: &'static str = "auth::Denied";
    }

    #[test]
    fn display_renders_each_variant() {
        let with_message = Denied(Some("no token"));
        let without_message = Denied(None);
        let count = 3;

        assert_eq!(
            Arg::throwable(&with_message).to_string(),
            "auth::Denied: no token"
        );
        assert_eq!(Arg::throwable(&without_message).to_string(), "auth::Denied");
        assert_eq!(Arg::from("plain").to_string(), "plain");
        assert_eq!(Arg::display(&count).to_string(), "3");
        assert_eq!(
            Arg::from(Redaction::new("auth::Denied", RedactionReason::HiddenByClass)).to_string(),
            "auth::Denied is hidden by class"
        );
        assert_eq!(Arg::Absent.to_string(), "<absent>");
    }

    #[test]
    fn optional_throwable_maps_none_to_absent() {
        let err = Denied(None);
        assert!(matches!(Arg::optional_throwable(None), Arg::Absent));
        assert!(Arg::optional_throwable(Some(&err)).as_throwable().is_some());
    }

    #[test]
    fn causes_are_throwables_and_placeholders() {
        let err = Denied(None);
        assert!(Arg::throwable(&err).is_cause());
        assert!(
            Arg::from(Redaction::new("auth::Denied", RedactionReason::Suspended)).is_cause()
        );
        assert!(!Arg::from("text").is_cause());
        assert!(!Arg::Absent.is_cause());
    }
}
