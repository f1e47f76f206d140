//! Fieldcheck Rules
//!
//! Pure constraint predicates with no side effects: value syntax checks,
//! the fixed password rule set, and the country-specific postal patterns.
//! The runtime crate composes these into per-field validity outcomes.

pub mod password;
pub mod postal;
pub mod syntax;

// Re-export all predicates
pub use password::{violations, PasswordRule, PASSWORD_RULES};
pub use postal::Country;
pub use syntax::{is_valid_email, is_valid_url, matches_pattern, pattern_compiles};
