pub mod builtin;
pub mod core;

pub use self::core::{Decision, Rule, RuleError};
