//! Redaction of expected errors in log output.
//!
//! A component logs through a [`LoggerSlot`]. A test installs an adapter in
//! that slot with [`Substitution::install`]; the adapter wraps the original
//! logger and, on every call that carries a throwable, rewrites the throwable
//! according to the rules in a shared [`RuleSetHolder`] before delegating.
//! Reverting the substitution puts the original logger back.
//!
//! What this crate does:
//! - defines the [`Throwable`] view of error values and `#[derive(Throwable)]`
//! - evaluates redaction rules (suspend, class, message, class and message)
//! - maps native logger types to adapters through an [`AdapterRegistry`]
//! - provides backends for `slog` and `tracing` behind feature flags
//!
//! What it does not do:
//! - route, format, filter, or persist log records
//! - find loggers inside arbitrary objects; components expose a [`LoggerSlot`]
//!
//! The `Throwable` derive macro lives in `hushlog-derive` and is re-exported
//! from this crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else,
    clippy::type_complexity
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub use hushlog_derive::Throwable;

#[allow(unused_extern_crates)]
extern crate self as hushlog;

pub mod adapter;
mod error;
pub mod logger;
mod registry;
pub mod rules;
mod substitution;
pub mod throwable;

#[cfg(feature = "slog")]
pub use adapter::SlogAdapter;
#[cfg(feature = "tracing-backend")]
pub use adapter::TracingAdapter;
pub use adapter::{Accepts, Adapter, AdapterFactory, SanitizingLogger};
pub use error::{BoxError, Error, Result};
pub use logger::{Arg, HandleType, Level, Logger, LoggerExt, LoggerSlot, Marker};
pub use registry::{AdapterRegistry, global};
pub use rules::{
    ClassAndMessage, Redaction, RedactionReason, RedactionScope, RuleSet, RuleSetHolder,
    SuspendSwitch,
};
pub use substitution::{Substitution, SubstitutionSet};
pub use throwable::{MessageSource, Throwable, ThrowableClass, ThrowableType};

#[doc(hidden)]
pub mod __private {
    pub use std::borrow::Cow;
}
