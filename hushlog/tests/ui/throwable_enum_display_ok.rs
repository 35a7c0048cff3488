use std::fmt;

use hushlog::Throwable;

#[derive(Debug, Throwable)]
#[throwable(display)]
enum FetchError {
    Timeout,
    Status(u16),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timed out"),
            Self::Status(code) => write!(f, "status {code}"),
        }
    }
}

fn main() {
    assert_eq!(FetchError::Timeout.message().as_deref(), Some("timed out"));
    assert_eq!(FetchError::Status(503).message().as_deref(), Some("status 503"));
    assert!(FetchError::Timeout.throwable_type().name().ends_with("::FetchError"));
}
