use serde_derive::{Deserialize, Serialize};

use crate::form::{Gender, RegistrationDraft};

/// Wire payload for the registration endpoint. Field names and the 0/1
/// encodings are the collaborator's contract and must not change, however
/// irregular the casing looks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    /// The server keys accounts by email, carried under `User_name`.
    #[serde(rename = "User_name")]
    pub username: String,
    pub password: String,
    /// 1 = male, 0 = female.
    pub gender: u8,
    #[serde(rename = "isHosteller")]
    pub is_hosteller: u8,
    #[serde(rename = "rollNo")]
    pub roll_no: String,
    pub name: String,
}

impl RegistrationRequest {
    /// Build the payload from a draft that already passed validation.
    /// An unset gender encodes as 0 rather than panicking, but callers are
    /// expected to have validated first.
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        Self {
            username: draft.email.clone(),
            password: draft.password.clone(),
            gender: match draft.gender {
                Some(Gender::Male) => 1,
                _ => 0,
            },
            is_hosteller: draft.is_hosteller as u8,
            roll_no: draft.roll_no.clone(),
            name: draft.name.clone(),
        }
    }
}
