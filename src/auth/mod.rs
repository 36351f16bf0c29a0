//! Contains the login form and its validation rules.
pub(crate) mod form_field;
pub(crate) mod login_form;
pub(crate) mod password_policy;
pub(crate) mod validation_errors;
pub(crate) mod validation_message;
