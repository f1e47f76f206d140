// File: src/form.rs
// Purpose: Form state: validation opt-in marker, novalidate flag, ordered fields

use crate::error::Error;
use crate::field::Field;
use serde::{Deserialize, Serialize};

/// A rendered form and its fields, in document order.
///
/// Forms opt in to validation with [`Form::with_validation`]; the
/// validator ignores blur events on forms without the marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    #[serde(default)]
    validate: bool,
    #[serde(default)]
    novalidate: bool,
    #[serde(default)]
    fields: Vec<Field>,
}

impl Form {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            validate: false,
            novalidate: false,
            fields: Vec::new(),
        }
    }

    /// Mark the form for validation (the `.validate` class of the page).
    pub fn with_validation(mut self) -> Self {
        self.validate = true;
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn is_validated(&self) -> bool {
        self.validate
    }

    /// Turn off the hosting environment's own validation popups.
    pub fn suppress_native_validation(&mut self) {
        self.novalidate = true;
    }

    pub fn native_validation_suppressed(&self) -> bool {
        self.novalidate
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.fields.iter().any(|f| f.id == field_id)
    }

    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn field_mut(&mut self, field_id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == field_id)
    }

    /// User input mutation by field id.
    pub fn set_value(&mut self, field_id: &str, value: impl Into<String>) -> Result<(), Error> {
        match self.field_mut(field_id) {
            Some(field) => {
                field.set_value(value);
                Ok(())
            }
            None => Err(Error::UnknownField(field_id.to_string())),
        }
    }
}
