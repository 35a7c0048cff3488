//! Redaction rules and the sanitizer that applies them.
//!
//! - **`rule_set`**: immutable rule snapshots (`RuleSet`, `ClassAndMessage`)
//! - **`holder`**: the shared holder adapters read at call time (`RuleSetHolder`, `SuspendSwitch`)
//! - **`sanitize`**: rule evaluation and placeholders (`Redaction`, `sanitize`, `sanitize_args`)
//! - **`scope`**: declarative per-scope settings (`RedactionScope`)

mod holder;
mod rule_set;
mod sanitize;
mod scope;

pub use holder::{RuleSetHolder, SuspendSwitch};
pub use rule_set::{ClassAndMessage, RuleSet};
pub use sanitize::{Redaction, RedactionReason, sanitize, sanitize_args};
pub use scope::RedactionScope;
