//! `{}`-style message formatting for argument-list log calls.

use super::arg::Arg;

/// A rendered message plus the cause split off the argument list, if any.
#[derive(Debug)]
pub struct FormattedMessage<'a> {
    pub text: String,
    pub cause: Option<Arg<'a>>,
}

/// Substitutes each `{}` in `format` with the next argument.
///
/// Placeholders without a matching argument are left as they are. When the
/// last argument was not consumed and is a throwable (or the placeholder that
/// replaced one), it becomes the cause of the record instead of being dropped.
pub fn format_message<'a>(format: &str, args: &[Arg<'a>]) -> FormattedMessage<'a> {
    let mut text = String::with_capacity(format.len());
    let mut rest = format;
    let mut used = 0;

    while used < args.len() {
        let Some(at) = rest.find("{}") else {
            break;
        };
        text.push_str(&rest[..at]);
        text.push_str(&args[used].to_string());
        used += 1;
        rest = &rest[at + 2..];
    }
    text.push_str(rest);

    let cause = match args.last() {
        Some(last) if used < args.len() && last.is_cause() => Some(last.clone()),
        _ => None,
    };
    FormattedMessage { text, cause }
}
