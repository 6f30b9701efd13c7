/// Validation utilities for forms and user input
///
/// The create-user form: six required free-text fields, two of which must
/// repeat their primary field. Errors are only reported once a submit has
/// been attempted, and are re-evaluated from the current values on every
/// read so they clear as the user edits.

use crate::types::NewUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    VerifyEmail,
    Password,
    VerifyPassword,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::VerifyEmail,
        FormField::Password,
        FormField::VerifyPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email",
            FormField::VerifyEmail => "Verify Email",
            FormField::Password => "Password",
            FormField::VerifyPassword => "Verify Password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FormField::Password | FormField::VerifyPassword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Mismatch,
}

/// Why a submit attempt was stopped before reaching the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRejection {
    MissingFields,
    EmailMismatch,
    PasswordMismatch,
    /// A previous submit is still waiting on the API.
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub verify_email: String,
    pub password: String,
    pub verify_password: String,
    pub submitted: bool,
}

impl UserForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::VerifyEmail => &self.verify_email,
            FormField::Password => &self.password,
            FormField::VerifyPassword => &self.verify_password,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::VerifyEmail => &mut self.verify_email,
            FormField::Password => &mut self.password,
            FormField::VerifyPassword => &mut self.verify_password,
        };
        *slot = value.into();
    }

    /// Error for `field` given the current values, ignoring whether a submit
    /// happened.
    pub fn check(&self, field: FormField) -> Option<FieldError> {
        let value = self.value(field);
        if value.is_empty() {
            return Some(FieldError::Required);
        }

        let primary = match field {
            FormField::VerifyEmail => &self.email,
            FormField::VerifyPassword => &self.password,
            _ => return None,
        };
        // An empty primary field already carries its own error.
        if !primary.is_empty() && value != primary {
            Some(FieldError::Mismatch)
        } else {
            None
        }
    }

    /// Error to display for `field`; nothing before the first submit.
    pub fn field_error(&self, field: FormField) -> Option<FieldError> {
        if self.submitted {
            self.check(field)
        } else {
            None
        }
    }

    pub fn error_message(&self, field: FormField) -> Option<&'static str> {
        self.field_error(field).map(|error| field_error_message(field, error))
    }

    pub fn has_error(&self, field: FormField) -> bool {
        self.field_error(field).is_some()
    }

    /// Submit attempt: enables error display, then checks required fields,
    /// the email confirmation and the password confirmation, in that order.
    pub fn submit(&mut self, company_id: &str) -> Result<NewUser, FormRejection> {
        self.submitted = true;

        if FormField::ALL.iter().any(|field| self.value(*field).is_empty()) {
            return Err(FormRejection::MissingFields);
        }
        if self.email != self.verify_email {
            return Err(FormRejection::EmailMismatch);
        }
        if self.password != self.verify_password {
            return Err(FormRejection::PasswordMismatch);
        }

        Ok(NewUser {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            company_id: company_id.to_string(),
        })
    }
}

pub fn field_error_message(field: FormField, error: FieldError) -> &'static str {
    match (field, error) {
        (FormField::FirstName, _) => "First name is required",
        (FormField::LastName, _) => "Last name is required",
        (FormField::Email, _) => "Email is required",
        (FormField::VerifyEmail, FieldError::Required) => "Email confirmation is required",
        (FormField::VerifyEmail, FieldError::Mismatch) => "Emails do not match",
        (FormField::Password, _) => "Password is required",
        (FormField::VerifyPassword, FieldError::Required) => "Password confirmation is required",
        (FormField::VerifyPassword, FieldError::Mismatch) => "Passwords do not match",
    }
}
