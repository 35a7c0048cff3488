//! Decides, per logged value, between pass-through and a redaction placeholder.
//!
//! Checks run in a fixed order and the first match wins:
//!
//! 1. suspend flag
//! 2. hidden class (exact type)
//! 3. hidden message substring
//! 4. hidden class and message substring
//!
//! Anything else passes through untouched. Evaluation never fails: a throwable
//! without a message simply never matches the message-based rules.

use std::fmt;

use super::rule_set::RuleSet;
use crate::{logger::Arg, throwable::Throwable};

// =============================================================================
// Redaction - Placeholder emitted instead of a hidden throwable
// =============================================================================

/// Why a throwable was redacted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedactionReason {
    Suspended,
    HiddenByClass,
    /// Carries the full message of the hidden throwable.
    HiddenByMessage(String),
    /// Carries the full message of the hidden throwable.
    HiddenByClassAndMessage(String),
}

/// Placeholder that replaces a hidden throwable in a log call.
///
/// Its `Display` output is the text written to the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redaction {
    type_name: &'static str,
    reason: RedactionReason,
}

impl Redaction {
    pub fn new(type_name: &'static str, reason: RedactionReason) -> Self {
        Self { type_name, reason }
    }

    /// Name of the redacted throwable's type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn reason(&self) -> &RedactionReason {
        &self.reason
    }
}

impl fmt::Display for Redaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.type_name;
        match &self.reason {
            RedactionReason::Suspended => write!(f, "{name} is suspended"),
            RedactionReason::HiddenByClass => write!(f, "{name} is hidden by class"),
            RedactionReason::HiddenByMessage(message) => {
                write!(f, "{name} is hidden by message:{message}")
            }
            RedactionReason::HiddenByClassAndMessage(message) => {
                write!(f, "{name} is hidden by class: {name} and message:{message}")
            }
        }
    }
}

// =============================================================================
// Rule evaluation
// =============================================================================

impl RuleSet {
    /// Returns the redaction for `throwable`, or `None` if it passes through.
    pub fn verdict(&self, suspended: bool, throwable: &dyn Throwable) -> Option<Redaction> {
        let class = throwable.throwable_type();
        if suspended {
            return Some(Redaction::new(class.name(), RedactionReason::Suspended));
        }
        if self.hidden_classes.contains(&class) {
            return Some(Redaction::new(class.name(), RedactionReason::HiddenByClass));
        }

        let message = throwable.message();
        let message = message.as_deref();
        if let Some(text) = message {
            if self
                .hidden_messages
                .iter()
                .any(|pattern| text.contains(pattern.as_str()))
            {
                return Some(Redaction::new(
                    class.name(),
                    RedactionReason::HiddenByMessage(text.to_owned()),
                ));
            }
        }
        if self
            .hidden_class_and_message
            .iter()
            .any(|rule| rule.matches(class, message))
        {
            // `matches` only succeeds with a message present.
            let text = message.unwrap_or_default().to_owned();
            return Some(Redaction::new(
                class.name(),
                RedactionReason::HiddenByClassAndMessage(text),
            ));
        }
        None
    }
}

/// Sanitizes one log argument against `rules`.
///
/// Non-throwable and absent arguments are returned unchanged. A throwable that
/// no rule hides is returned as the same reference.
pub fn sanitize<'a>(rules: &RuleSet, suspended: bool, arg: &Arg<'a>) -> Arg<'a> {
    match arg {
        Arg::Throwable(throwable) => match rules.verdict(suspended, *throwable) {
            Some(redaction) => Arg::Redacted(redaction),
            None => Arg::Throwable(*throwable),
        },
        other => other.clone(),
    }
}

/// Sanitizes every argument, preserving order and length.
///
/// `None` stays `None` rather than becoming an empty list.
pub fn sanitize_args<'a>(
    rules: &RuleSet,
    suspended: bool,
    args: Option<&[Arg<'a>]>,
) -> Option<Vec<Arg<'a>>> {
    args.map(|args| {
        args.iter()
            .map(|arg| sanitize(rules, suspended, arg))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::{
        rules::ClassAndMessage,
        throwable::{ThrowableClass, ThrowableType},
    };

    struct InvalidArgument(Option<&'static str>);
    struct InvalidState(Option<&'static str>);

    macro_rules! fixture {
        ($ty:ident => $name:literal) => {
            impl Throwable for $ty {
                fn throwable_type(&self) -> ThrowableType {
                    ThrowableType::of::<Self>()
                }

                fn message(&self) -> Option<Cow<'_, str>> {
                    self.0.map(Cow::Borrowed)
                }
            }

            impl ThrowableClass for $ty {
                const TYPE_NAME: &'static str = $name;
            }
        };
    }

    fixture!(InvalidArgument => "args::InvalidArgument");
    fixture!(InvalidState => "args::InvalidState");

    fn rules_with(
        classes: &[ThrowableType],
        messages: &[&str],
        pairs: &[ClassAndMessage],
    ) -> RuleSet {
        RuleSet {
            hidden_classes: classes.iter().copied().collect(),
            hidden_messages: messages.iter().map(|m| (*m).to_owned()).collect(),
            hidden_class_and_message: pairs.to_vec(),
        }
    }

    fn rendered(arg: &Arg<'_>) -> String {
        match arg {
            Arg::Redacted(redaction) => redaction.to_string(),
            other => panic!("expected a redaction, got {other:?}"),
        }
    }

    #[test]
    fn suspend_wins_over_every_other_rule() {
        let rules = rules_with(
            &[ThrowableType::of::<InvalidArgument>()],
            &["boom"],
            &[ClassAndMessage::of::<InvalidArgument>("boom")],
        );
        let err = InvalidArgument(Some("boom"));
        let out = sanitize(&rules, true, &Arg::Throwable(&err));
        assert_eq!(rendered(&out), "args::InvalidArgument is suspended");
    }

    #[test]
    fn class_wins_over_message() {
        let rules = rules_with(&[ThrowableType::of::<InvalidArgument>()], &["boom"], &[]);
        let err = InvalidArgument(Some("boom"));
        let out = sanitize(&rules, false, &Arg::Throwable(&err));
        assert_eq!(rendered(&out), "args::InvalidArgument is hidden by class");
    }

    #[test]
    fn message_wins_over_class_and_message() {
        let rules = rules_with(
            &[],
            &["boom"],
            &[ClassAndMessage::of::<InvalidArgument>("boom")],
        );
        let err = InvalidArgument(Some("big boom"));
        let out = sanitize(&rules, false, &Arg::Throwable(&err));
        assert_eq!(
            rendered(&out),
            "args::InvalidArgument is hidden by message:big boom"
        );
    }

    #[test]
    fn class_and_message_requires_both() {
        let rules = rules_with(&[], &[], &[ClassAndMessage::of::<InvalidArgument>("obvious")]);

        let hit = InvalidArgument(Some("Error: obvious"));
        assert_eq!(
            rendered(&sanitize(&rules, false, &Arg::Throwable(&hit))),
            "args::InvalidArgument is hidden by class: args::InvalidArgument and message:Error: obvious"
        );

        let wrong_type = InvalidState(Some("Error: obvious"));
        assert!(matches!(
            sanitize(&rules, false, &Arg::Throwable(&wrong_type)),
            Arg::Throwable(_)
        ));

        let wrong_message = InvalidArgument(Some("subtle"));
        assert!(matches!(
            sanitize(&rules, false, &Arg::Throwable(&wrong_message)),
            Arg::Throwable(_)
        ));
    }

    #[test]
    fn absent_message_never_matches_message_rules() {
        let rules = rules_with(&[], &[""], &[ClassAndMessage::of::<InvalidArgument>("")]);
        let err = InvalidArgument(None);
        let out = sanitize(&rules, false, &Arg::Throwable(&err));
        assert!(matches!(out, Arg::Throwable(_)));
    }

    #[test]
    fn pass_through_keeps_identity() {
        let rules = RuleSet::default();
        let err = InvalidArgument(Some("fine"));
        match sanitize(&rules, false, &Arg::Throwable(&err)) {
            Arg::Throwable(out) => assert!(std::ptr::addr_eq(out, &err)),
            other => panic!("expected pass-through, got {other:?}"),
        }
    }

    #[test]
    fn non_throwables_are_untouched_even_when_suspended() {
        let rules = RuleSet::default();
        assert!(matches!(
            sanitize(&rules, true, &Arg::from("text")),
            Arg::Text(Cow::Borrowed("text"))
        ));
        assert!(matches!(sanitize(&rules, true, &Arg::Absent), Arg::Absent));
    }

    #[test]
    fn sanitize_args_preserves_shape() {
        let rules = rules_with(&[], &["boom"], &[]);
        let hidden = InvalidArgument(Some("boom"));
        let shown = InvalidState(Some("calm"));
        let args = [
            Arg::from("start"),
            Arg::Throwable(&hidden),
            Arg::Absent,
            Arg::Throwable(&shown),
            Arg::from("end"),
        ];

        let out = sanitize_args(&rules, false, Some(&args)).unwrap();

        assert_eq!(out.len(), 5);
        assert!(matches!(out[0], Arg::Text(Cow::Borrowed("start"))));
        assert_eq!(
            rendered(&out[1]),
            "args::InvalidArgument is hidden by message:boom"
        );
        assert!(matches!(out[2], Arg::Absent));
        assert!(matches!(out[3], Arg::Throwable(t) if std::ptr::addr_eq(t, &shown)));
        assert!(matches!(out[4], Arg::Text(Cow::Borrowed("end"))));
    }

    #[test]
    fn sanitize_args_keeps_absent_list_absent() {
        assert!(sanitize_args(&RuleSet::default(), true, None).is_none());
        assert_eq!(
            sanitize_args(&RuleSet::default(), true, Some(&[]))
                .unwrap()
                .len(),
            0
        );
    }
}
