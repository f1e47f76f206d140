// File: src/validator.rs
// Purpose: Blur dispatch: constraint recompute first, presentation second

use crate::error::Error;
use crate::form::Form;
use crate::slots::{DisplaySlots, SlotPolicy};
use crate::validity::{inspect, inspect_password};
use fieldcheck_rules::{violations, Country};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Role-to-field-id bindings, injected at construction.
///
/// The validator never looks fields up ambiently; everything it touches
/// is named here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBindings {
    pub email: String,
    pub country: String,
    pub postal: String,
    pub password: String,
    pub confirmation: String,
}

fn default_country() -> Country {
    Country::Ch
}

/// Validator construction options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub slot_policy: SlotPolicy,
    /// Country pattern seeded onto the postal field when the country
    /// selection is empty or unrecognized at construction.
    #[serde(default = "default_country")]
    pub default_country: Country,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            slot_policy: SlotPolicy::default(),
            default_country: default_country(),
        }
    }
}

/// One validator per form.
///
/// Owns the form state and the display slots for its lifetime; constructed
/// once when the form appears, dropped on teardown.
#[derive(Debug)]
pub struct Validator {
    form: Form,
    bindings: FieldBindings,
    slots: DisplaySlots,
    config: ValidatorConfig,
}

impl Validator {
    /// Bind a validator to a form, registering one display slot per field.
    ///
    /// Suppresses the form's native validation and seeds the postal
    /// pattern from the current country selection (falling back to the
    /// configured default). Fails when a bound field id is missing from
    /// the form.
    pub fn new(form: Form, bindings: FieldBindings, config: ValidatorConfig) -> Result<Self, Error> {
        let mut slots = DisplaySlots::new();
        for field in form.fields() {
            slots.register(&field.id);
        }
        Self::with_display_slots(form, bindings, config, slots)
    }

    /// [`Validator::new`] with caller-supplied slots, for pages where not
    /// every field has a display element.
    pub fn with_display_slots(
        form: Form,
        bindings: FieldBindings,
        config: ValidatorConfig,
        slots: DisplaySlots,
    ) -> Result<Self, Error> {
        for id in [
            &bindings.email,
            &bindings.country,
            &bindings.postal,
            &bindings.password,
            &bindings.confirmation,
        ] {
            if !form.contains(id) {
                return Err(Error::UnknownField(id.clone()));
            }
        }

        let mut validator = Self {
            form,
            bindings,
            slots,
            config,
        };
        validator.form.suppress_native_validation();

        let code = validator
            .form
            .field(&validator.bindings.country)
            .map(|field| field.value.clone())
            .unwrap_or_default();
        let initial = Country::parse(&code).unwrap_or(validator.config.default_country);
        validator.set_postal_pattern(initial);

        Ok(validator)
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn bindings(&self) -> &FieldBindings {
        &self.bindings
    }

    /// Current text of a field's display slot.
    pub fn slot_message(&self, field_id: &str) -> Option<&str> {
        self.slots.message(field_id)
    }

    /// Currently rendered password rule violations, in rule order.
    pub fn rule_list(&self) -> &[String] {
        self.slots.rule_list()
    }

    /// User input mutation, by field id.
    pub fn set_value(&mut self, field_id: &str, value: impl Into<String>) -> Result<(), Error> {
        self.form.set_value(field_id, value)
    }

    /// One synchronous validation pass for a focus-loss on `field_id`.
    ///
    /// Blur on the country field additionally re-applies the postal
    /// pattern and re-renders the postal field's message when one is
    /// produced. The password rules are re-evaluated on every pass,
    /// whichever field triggered it.
    pub fn handle_blur(&mut self, field_id: &str) -> Result<(), Error> {
        if !self.form.is_validated() {
            return Ok(());
        }
        if !self.form.contains(field_id) {
            return Err(Error::UnknownField(field_id.to_string()));
        }

        if field_id == self.bindings.country {
            self.apply_country_pattern();
            let postal_id = self.bindings.postal.clone();
            // A postal field that is fine under the new pattern keeps
            // whatever message it last showed.
            if let Some(message) = self.inspect_by_id(&postal_id) {
                self.render(&postal_id, &message)?;
            }
        }

        // Inspect before the rule checker runs: a blur on the confirmation
        // field is judged against the pattern set by the previous pass.
        let result = self.inspect_by_id(field_id);
        self.check_password();
        match result {
            Some(message) => self.render(field_id, &message)?,
            None => self.render(field_id, "")?,
        }
        Ok(())
    }

    /// Map the country selection onto the postal field's pattern and
    /// title. Unknown codes keep the prior pattern in place.
    pub fn apply_country_pattern(&mut self) {
        let code = match self.form.field(&self.bindings.country) {
            Some(field) => field.value.clone(),
            None => return,
        };
        match Country::parse(&code) {
            Some(country) => self.set_postal_pattern(country),
            None => {
                debug!(code = %code, "unrecognized country code, keeping current postal pattern")
            }
        }
    }

    /// Re-evaluate the password rules, refresh the rule list, and pin the
    /// confirmation field's pattern to the literal password value.
    pub fn check_password(&mut self) {
        let value = match self.form.field(&self.bindings.password) {
            Some(field) => field.value.clone(),
            None => return,
        };
        let items: Vec<String> = violations(&value)
            .iter()
            .map(|rule| rule.message.to_string())
            .collect();
        self.slots.replace_rule_list(items);

        if let Some(confirmation) = self.form.field_mut(&self.bindings.confirmation) {
            confirmation.pattern = Some(value);
        }
    }

    fn inspect_by_id(&self, field_id: &str) -> Option<String> {
        let field = self.form.field(field_id)?;
        if field_id == self.bindings.password {
            inspect_password(field)
        } else {
            inspect(field)
        }
    }

    // Presentation stage: write (or clear) a field's display slot.
    fn render(&mut self, field_id: &str, message: &str) -> Result<(), Error> {
        if !self.slots.set(field_id, message) {
            match self.config.slot_policy {
                SlotPolicy::Strict => return Err(Error::MissingSlot(field_id.to_string())),
                SlotPolicy::Lenient => {
                    warn!(field = %field_id, "no display slot registered, skipping render")
                }
            }
        }
        Ok(())
    }

    fn set_postal_pattern(&mut self, country: Country) {
        debug!(country = %country, "applying postal pattern");
        if let Some(postal) = self.form.field_mut(&self.bindings.postal) {
            postal.pattern = Some(country.postal_pattern().to_string());
            postal.title = Some(country.postal_example().to_string());
        }
    }
}
