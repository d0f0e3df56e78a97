//! Registration form model and its validation schema.
//!
//! DESIGN
//! ======
//! The whole schema is declared on `RegisterForm` with `validator` attributes.
//! Every field carries a `length(min = 1)` rule tagged with the `required`
//! code; when a field breaks several rules that one wins, so each field
//! reports at most one message and an empty field never shows a format error.
//! Everything is synchronous and free of Leptos types so it can be exercised
//! directly in tests.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::net::types::RegistrationPayload;

/// Maximum characters accepted for the display name.
pub const NAME_MAX_LEN: usize = 15;

/// The four inputs of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Password, Field::ConfirmPassword];

    /// HTML `name` attribute of the input bound to this field.
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    fn schema_key(self) -> &'static str {
        match self {
            Field::ConfirmPassword => "confirm_password",
            other => other.input_name(),
        }
    }

    fn from_schema_key(key: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.schema_key() == key)
    }
}

const REQUIRED: &str = "required";

/// Raw values typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct RegisterForm {
    #[validate(
        length(min = 1, code = "required", message = "Nome obrigatório"),
        custom(function = "name_within_limit")
    )]
    pub name: String,
    #[validate(
        length(min = 1, code = "required", message = "E-mail obrigatório"),
        email(message = "E-mail inválido")
    )]
    pub email: String,
    #[validate(length(min = 1, code = "required", message = "Senha obrigatória"))]
    pub password: String,
    #[validate(
        length(min = 1, code = "required", message = "Confirmação de senha obrigatória"),
        must_match(other = "password", message = "As senhas não conferem")
    )]
    pub confirm_password: String,
}

// `length` can only appear once per field, so the upper bound lives here.
fn name_within_limit(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() <= NAME_MAX_LEN {
        return Ok(());
    }
    let mut error = ValidationError::new("length");
    error.message = Some(Cow::Borrowed("Máximo de 15 caracteres"));
    Err(error)
}

impl RegisterForm {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    fn to_payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            email: self.email.clone(),
            password: self.password.clone(),
            confirmpassword: self.confirm_password.clone(),
            name: self.name.clone(),
        }
    }
}

/// Per-field error messages from the last validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.slot(*f).is_none())
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Run the full schema over the form.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate_form(form: &RegisterForm) -> Result<(), FieldErrors> {
    match form.validate() {
        Ok(()) => Ok(()),
        Err(schema) => Err(collect_field_errors(&schema)),
    }
}

fn collect_field_errors(schema: &ValidationErrors) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for (key, reported) in schema.field_errors() {
        let Some(field) = Field::from_schema_key(&key) else {
            continue;
        };
        let chosen = reported.iter().find(|e| e.code == REQUIRED).or_else(|| reported.first());
        if let Some(error) = chosen {
            let message = error
                .message
                .as_ref()
                .map_or_else(|| error.code.to_string(), ToString::to_string);
            errors.set(field, message);
        }
    }
    errors
}

/// Validate and, when clean, build the payload for the auth service.
///
/// # Errors
///
/// Returns the per-field messages when validation fails; nothing should be
/// sent in that case.
pub fn prepare_submission(form: &RegisterForm) -> Result<RegistrationPayload, FieldErrors> {
    validate_form(form)?;
    Ok(form.to_payload())
}

/// Refresh one field's message after an edit, but only if it is currently
/// showing an error. Untouched fields stay quiet until the next submit.
pub fn revalidate_field(errors: &mut FieldErrors, form: &RegisterForm, field: Field) {
    if errors.get(field).is_none() {
        return;
    }
    let fresh = validate_form(form).err().unwrap_or_default();
    match fresh.get(field) {
        Some(message) => errors.set(field, message),
        None => errors.clear(field),
    }
}
