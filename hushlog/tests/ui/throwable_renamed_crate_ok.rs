use hushlog as hl;

#[derive(hl::Throwable)]
#[throwable(name = "auth::Expired")]
struct Expired;

fn main() {
    use hl::{Throwable, ThrowableClass};

    assert_eq!(<Expired as ThrowableClass>::TYPE_NAME, "auth::Expired");
    assert!(Expired.message().is_none());
}
