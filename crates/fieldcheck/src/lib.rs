// fieldcheck - blur-driven form validation
// Replaces native browser validation popups with per-field error messages

pub mod error;
pub mod field;
pub mod form;
pub mod slots;
pub mod validator;
pub mod validity;

// Re-export the model types
pub use error::Error;
pub use field::{Field, FieldType};
pub use form::Form;
pub use slots::{DisplaySlots, SlotPolicy};

// Re-export the validator and its configuration
pub use validator::{FieldBindings, Validator, ValidatorConfig};

// Re-export the validity inspection functions
pub use validity::{
    evaluate, evaluate_password, inspect, inspect_password, message, ValidityError,
    PASSWORD_PATTERN_HEADER,
};

// Re-export the pure rules crate
pub use fieldcheck_rules as rules;
pub use fieldcheck_rules::Country;
