use reqwest::StatusCode;
use serde_derive::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::errors::{Error, Result};
use crate::form::registration::RegistrationRequest;
use crate::form::RegistrationDraft;

/// Classification of a completed registration response.
///
/// The service signals both conflict cases inside the success status range:
/// a plain `200` means the username is taken and a `202` means the roll
/// number is taken, while an actual account creation answers with any other
/// 2xx status. Inherited contract, preserved as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created,
    UsernameConflict,
    RollNoConflict,
}

/// Simple API client for the registration endpoint.
pub struct APIClient {
    config: FormConfig,
    client: reqwest::Client,
}

impl APIClient {
    /// Create a new API client from `config`.
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn email_domain(&self) -> &str {
        &self.config.email_domain
    }

    /// Send one registration request built from `draft` and classify the
    /// response by status code.
    ///
    /// The draft is read-only here; resetting after success is the caller's
    /// decision. Errors cover everything that is not an interpretable
    /// success response: connection failures and error-range statuses.
    pub async fn register(&self, draft: &RegistrationDraft) -> Result<RegistrationOutcome> {
        let request = RegistrationRequest::from_draft(draft);
        let endpoint = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.register_path
        );

        let response = self.client.post(&endpoint).json(&request).send().await?;

        match response.status() {
            StatusCode::OK => Ok(RegistrationOutcome::UsernameConflict),
            StatusCode::ACCEPTED => Ok(RegistrationOutcome::RollNoConflict),
            status if status.is_success() => Ok(RegistrationOutcome::Created),
            status => Err(Error::UnexpectedStatus(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldEdit, Gender};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn valid_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::default();
        for edit in [
            FieldEdit::Name("Ann".into()),
            FieldEdit::Email("ann@sece.ac.in".into()),
            FieldEdit::Gender(Gender::Female),
            FieldEdit::RollNo("21CS042".into()),
            FieldEdit::Password("hunter2".into()),
            FieldEdit::ConfirmPassword("hunter2".into()),
        ] {
            draft.apply(edit);
        }
        draft
    }

    async fn client_for(server: &MockServer) -> APIClient {
        APIClient::new(FormConfig::new(server.uri()))
    }

    #[tokio::test]
    async fn posts_the_contract_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .and(body_json(serde_json::json!({
                "User_name": "ann@sece.ac.in",
                "password": "hunter2",
                "gender": 0,
                "isHosteller": 0,
                "rollNo": "21CS042",
                "name": "Ann",
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server).await.register(&valid_draft()).await;
        assert_eq!(outcome.unwrap(), RegistrationOutcome::Created);
    }

    #[tokio::test]
    async fn status_200_means_username_taken() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let outcome = client_for(&server).await.register(&valid_draft()).await;
        assert_eq!(outcome.unwrap(), RegistrationOutcome::UsernameConflict);
    }

    #[tokio::test]
    async fn status_202_means_roll_no_taken() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let outcome = client_for(&server).await.register(&valid_draft()).await;
        assert_eq!(outcome.unwrap(), RegistrationOutcome::RollNoConflict);
    }

    #[tokio::test]
    async fn error_status_is_not_classified() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let outcome = client_for(&server).await.register(&valid_draft()).await;
        assert!(matches!(outcome, Err(Error::UnexpectedStatus(status)) if status.as_u16() == 500));
    }
}
