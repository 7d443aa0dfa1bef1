pub mod api;
pub mod config;
pub mod errors;
pub mod form;
pub mod services;
pub mod workflow;

pub use api::{APIClient, RegistrationOutcome};
pub use config::FormConfig;
pub use errors::{Error, Result};
pub use form::registration::RegistrationRequest;
pub use form::validate::{validate, ValidationError};
pub use form::{FieldEdit, Gender, RegistrationDraft};
pub use services::{FormCmd, FormService, FormUiCmd};
pub use workflow::{RegistrationWorkflow, SubmitOutcome};
