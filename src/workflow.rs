use log::{debug, warn};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::{APIClient, RegistrationOutcome};
use crate::form::validate::{validate, ValidationError};
use crate::form::{FieldEdit, RegistrationDraft};

/// Terminal result of one submission attempt. Every variant returns the
/// workflow to idle; none of them halts further edits or attempts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; no network call was made.
    Rejected(ValidationError),
    /// Account created. The draft has been reset to empty.
    Created,
    UsernameConflict,
    RollNoConflict,
    /// The call did not produce an interpretable success response.
    TransportFailure(String),
}

/// Owns the draft for one form-fill session and runs the submission
/// pipeline: validation gate, wire payload, one request, three-way response
/// branch. The draft is only ever touched through [`update_field`] and
/// [`submit`]; there is no shared or global form state.
///
/// [`update_field`]: RegistrationWorkflow::update_field
/// [`submit`]: RegistrationWorkflow::submit
pub struct RegistrationWorkflow {
    client: APIClient,
    draft: RegistrationDraft,
}

impl RegistrationWorkflow {
    pub fn new(client: APIClient) -> Self {
        Self {
            client,
            draft: RegistrationDraft::default(),
        }
    }

    /// Apply one field edit. Synchronous, infallible, no validation.
    pub fn update_field(&mut self, edit: FieldEdit) {
        self.draft.apply(edit);
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Run one submission attempt to completion.
    ///
    /// Invalid drafts are rejected before any network traffic. The draft is
    /// reset only on [`SubmitOutcome::Created`]; every other outcome leaves
    /// it exactly as it was so the user can correct and resubmit. Exclusive
    /// access through `&mut self` keeps a second submit from starting while
    /// this one awaits its response.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if let Err(rule) = validate(&self.draft, self.client.email_domain()) {
            return SubmitOutcome::Rejected(rule);
        }

        let attempt = Uuid::new_v4();
        debug!("submitting registration attempt {attempt}");

        match self.client.register(&self.draft).await {
            Ok(RegistrationOutcome::Created) => {
                debug!("attempt {attempt} created an account");
                self.draft.reset();
                SubmitOutcome::Created
            }
            Ok(RegistrationOutcome::UsernameConflict) => SubmitOutcome::UsernameConflict,
            Ok(RegistrationOutcome::RollNoConflict) => SubmitOutcome::RollNoConflict,
            Err(e) => {
                warn!("registration attempt {attempt} failed: {e}");
                SubmitOutcome::TransportFailure(e.to_string())
            }
        }
    }
}
