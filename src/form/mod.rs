pub mod registration;
pub mod validate;

use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// One user edit to a single form field. Text fields carry their full new
/// value, not a delta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Email(String),
    Gender(Gender),
    Hosteller(bool),
    RollNo(String),
    Password(String),
    ConfirmPassword(String),
}

/// In-memory form state for one registration attempt. Created empty when the
/// form mounts, mutated field-by-field through [`RegistrationDraft::apply`],
/// and reset only after a confirmed successful submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    /// `None` until the user picks an option; there is no default gender.
    pub gender: Option<Gender>,
    pub is_hosteller: bool,
    pub roll_no: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationDraft {
    /// Replace exactly the edited field, leaving every other field alone.
    /// Never validates and never fails.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(value) => self.name = value,
            FieldEdit::Email(value) => self.email = value,
            FieldEdit::Gender(value) => self.gender = Some(value),
            FieldEdit::Hosteller(value) => self.is_hosteller = value,
            FieldEdit::RollNo(value) => self.roll_no = value,
            FieldEdit::Password(value) => self.password = value,
            FieldEdit::ConfirmPassword(value) => self.confirm_password = value,
        }
    }

    /// Restore the empty initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_touches_only_the_edited_field() {
        let mut draft = RegistrationDraft::default();
        draft.apply(FieldEdit::Name("Ann".into()));
        draft.apply(FieldEdit::Email("ann@sece.ac.in".into()));

        draft.apply(FieldEdit::RollNo("21CS042".into()));

        assert_eq!(draft.name, "Ann");
        assert_eq!(draft.email, "ann@sece.ac.in");
        assert_eq!(draft.roll_no, "21CS042");
        assert_eq!(draft.gender, None);
        assert!(!draft.is_hosteller);
        assert_eq!(draft.password, "");
    }

    #[test]
    fn apply_is_idempotent() {
        let mut once = RegistrationDraft::default();
        once.apply(FieldEdit::Gender(Gender::Female));

        let mut twice = RegistrationDraft::default();
        twice.apply(FieldEdit::Gender(Gender::Female));
        twice.apply(FieldEdit::Gender(Gender::Female));

        assert_eq!(once, twice);
    }

    #[test]
    fn reset_restores_the_empty_draft() {
        let mut draft = RegistrationDraft::default();
        draft.apply(FieldEdit::Name("Ann".into()));
        draft.apply(FieldEdit::Hosteller(true));
        draft.reset();
        assert_eq!(draft, RegistrationDraft::default());
    }
}
