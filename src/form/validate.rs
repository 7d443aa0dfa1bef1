use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::RegistrationDraft;

/// First rule a draft violates, in the fixed check order of [`RULES`].
/// The `#[error]` text doubles as the user-facing rejection message.
#[derive(Debug, Error, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter your name")]
    EmptyName,
    #[error("please use your college email address")]
    InvalidDomain,
    #[error("please select your gender")]
    MissingGender,
    #[error("please enter your roll number")]
    EmptyRollNo,
    #[error("please enter a password")]
    EmptyPassword,
    #[error("passwords do not match")]
    PasswordMismatch,
}

type Rule = fn(&RegistrationDraft, &str) -> Option<ValidationError>;

/// Ordered rule list. Order is part of the contract: validation reports the
/// first violated rule and never a later one.
const RULES: &[Rule] = &[
    name_present,
    email_in_domain,
    gender_selected,
    roll_no_present,
    password_present,
    passwords_match,
];

/// Check `draft` against the ordered rules, short-circuiting on the first
/// failure. Pure: no side effects, no draft mutation.
pub fn validate(draft: &RegistrationDraft, email_domain: &str) -> Result<(), ValidationError> {
    match RULES.iter().find_map(|rule| rule(draft, email_domain)) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn name_present(draft: &RegistrationDraft, _: &str) -> Option<ValidationError> {
    draft.name.is_empty().then_some(ValidationError::EmptyName)
}

fn email_in_domain(draft: &RegistrationDraft, domain: &str) -> Option<ValidationError> {
    (!draft.email.contains(domain)).then_some(ValidationError::InvalidDomain)
}

fn gender_selected(draft: &RegistrationDraft, _: &str) -> Option<ValidationError> {
    draft.gender.is_none().then_some(ValidationError::MissingGender)
}

fn roll_no_present(draft: &RegistrationDraft, _: &str) -> Option<ValidationError> {
    draft
        .roll_no
        .is_empty()
        .then_some(ValidationError::EmptyRollNo)
}

fn password_present(draft: &RegistrationDraft, _: &str) -> Option<ValidationError> {
    draft
        .password
        .is_empty()
        .then_some(ValidationError::EmptyPassword)
}

fn passwords_match(draft: &RegistrationDraft, _: &str) -> Option<ValidationError> {
    (draft.password != draft.confirm_password).then_some(ValidationError::PasswordMismatch)
}
