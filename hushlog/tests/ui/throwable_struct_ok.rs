use hushlog::{Arg, RuleSetHolder, Throwable, ThrowableType};

#[derive(Throwable)]
#[throwable(name = "config::MissingKey")]
struct MissingKey {
    #[throwable(message)]
    key: String,
    #[allow(dead_code)]
    line: u32,
}

#[derive(Throwable)]
struct Unnamed(#[throwable(message)] Option<&'static str>);

fn main() {
    let err = MissingKey {
        key: "port".into(),
        line: 3,
    };
    assert_eq!(err.throwable_type(), ThrowableType::of::<MissingKey>());
    assert_eq!(err.message().as_deref(), Some("port"));
    assert!(Unnamed(None).message().is_none());

    let holder = RuleSetHolder::new();
    holder.set_hidden_messages(Some(["port"]));
    assert!(holder.sanitize(&Arg::throwable(&err)).as_redaction().is_some());
}
