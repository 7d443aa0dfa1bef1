use log::debug;
use serde_derive::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::APIClient;
use crate::config::FormConfig;
use crate::form::validate::ValidationError;
use crate::form::FieldEdit;
use crate::workflow::{RegistrationWorkflow, SubmitOutcome};

/// Commands the UI thread sends into the form service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormCmd {
    Edit(FieldEdit),
    Submit,
}

/// Notifications the service sends back for the UI to present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormUiCmd {
    /// A validation rule failed; nothing was sent to the server.
    Rejected(ValidationError),
    /// Account created, the form has been cleared.
    Registered,
    UsernameTaken,
    RollNoTaken,
    RequestFailed(String),
}

impl FormUiCmd {
    fn from_outcome(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Rejected(rule) => FormUiCmd::Rejected(rule),
            SubmitOutcome::Created => FormUiCmd::Registered,
            SubmitOutcome::UsernameConflict => FormUiCmd::UsernameTaken,
            SubmitOutcome::RollNoConflict => FormUiCmd::RollNoTaken,
            SubmitOutcome::TransportFailure(reason) => FormUiCmd::RequestFailed(reason),
        }
    }

    /// Text for the UI's notification toast.
    pub fn message(&self) -> String {
        match self {
            FormUiCmd::Rejected(rule) => rule.to_string(),
            FormUiCmd::Registered => "account created".to_string(),
            FormUiCmd::UsernameTaken => "username already exists".to_string(),
            FormUiCmd::RollNoTaken => "roll number already exists".to_string(),
            FormUiCmd::RequestFailed(_) => {
                "could not reach the registration service, please try again".to_string()
            }
        }
    }
}

/// Background service that owns a [`RegistrationWorkflow`] and bridges it to
/// a UI event loop over channels. The UI pushes [`FormCmd`]s through [`tx`]
/// and polls [`try_recv`] for notifications.
///
/// [`tx`]: FormService::tx
/// [`try_recv`]: FormService::try_recv
pub struct FormService {
    handle: tokio::runtime::Handle,
    service_handle: tokio::task::JoinHandle<()>,
    cmd_tx: UnboundedSender<FormCmd>,
    ui_rx: UnboundedReceiver<FormUiCmd>,
}

impl FormService {
    pub fn new(runtime: &tokio::runtime::Runtime, config: FormConfig) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let handle = runtime.handle().clone();
        let workflow = RegistrationWorkflow::new(APIClient::new(config));
        let service_handle = handle.spawn(form_service(cmd_rx, ui_tx, workflow));
        Self {
            handle,
            service_handle,
            cmd_tx,
            ui_rx,
        }
    }

    pub fn tx(&self) -> &UnboundedSender<FormCmd> {
        &self.cmd_tx
    }

    pub fn edit(
        cmd_tx: &UnboundedSender<FormCmd>,
        edit: FieldEdit,
    ) -> Result<(), mpsc::error::SendError<FormCmd>> {
        cmd_tx.send(FormCmd::Edit(edit))
    }

    pub fn submit(
        cmd_tx: &UnboundedSender<FormCmd>,
    ) -> Result<(), mpsc::error::SendError<FormCmd>> {
        cmd_tx.send(FormCmd::Submit)
    }

    pub fn try_recv(&mut self) -> Option<FormUiCmd> {
        match self.ui_rx.try_recv() {
            Ok(val) => Some(val),
            Err(_e) => None,
        }
    }
}

async fn form_service(
    mut cmd_rx: UnboundedReceiver<FormCmd>,
    ui_tx: UnboundedSender<FormUiCmd>,
    mut workflow: RegistrationWorkflow,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            FormCmd::Edit(edit) => workflow.update_field(edit),
            FormCmd::Submit => {
                let outcome = workflow.submit().await;
                if ui_tx.send(FormUiCmd::from_outcome(outcome)).is_err() {
                    break;
                }
                // One outstanding request per attempt: submits that queued up
                // while this one was awaiting its response are dropped, edits
                // still apply.
                while let Ok(queued) = cmd_rx.try_recv() {
                    match queued {
                        FormCmd::Edit(edit) => workflow.update_field(edit),
                        FormCmd::Submit => {
                            debug!("dropping submit queued while another was in flight")
                        }
                    }
                }
            }
        }
    }
}
