//! Confirm-then-delete flow, independent of browser dialogs and fetch.

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::messages::DeleteResponse;
use crate::view_state::ViewState;
use std::future::Future;

/// Blocking user dialogs.
pub trait DeletePrompt {
    /// Ask the user to confirm. Returns false when declined.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// What the caller should do once the delete flow finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// User declined; no request was sent.
    Declined,
    /// Server deleted the file and returned the new view state.
    Refreshed(ViewState),
    /// Server deleted the file without returning state; reload the page.
    ReloadRequired,
    /// Server answered `success: false`. The user has been alerted.
    Rejected,
    /// Request failed. The user has been alerted.
    Failed(ViewerError),
}

/// Confirm with the user, send the delete request and interpret the answer.
///
/// `send` receives the raw file name and is only called after confirmation.
/// The view is never modified here; the caller applies the outcome.
pub async fn run_delete<P, F, Fut>(
    filename: &str,
    config: &ViewerConfig,
    prompt: &P,
    send: F,
) -> DeleteOutcome
where
    P: DeletePrompt + ?Sized,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<DeleteResponse, ViewerError>>,
{
    if !prompt.confirm(&config.confirm_delete_message(filename)) {
        return DeleteOutcome::Declined;
    }

    match send(filename.to_string()).await {
        Ok(DeleteResponse {
            success: true,
            state: Some(state),
        }) => DeleteOutcome::Refreshed(state),
        Ok(DeleteResponse {
            success: true,
            state: None,
        }) => DeleteOutcome::ReloadRequired,
        Ok(DeleteResponse { success: false, .. }) => {
            log::warn!("Server refused to delete {}", filename);
            prompt.alert(&config.messages.delete_failed);
            DeleteOutcome::Rejected
        }
        Err(e) => {
            log::error!("Error deleting image {}: {}", filename, e);
            prompt.alert(&config.messages.delete_failed);
            DeleteOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::GalleryEntry;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct ScriptedPrompt {
        answer: bool,
        confirms: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                confirms: RefCell::new(Vec::new()),
                alerts: RefCell::new(Vec::new()),
            }
        }
    }

    impl DeletePrompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn declined_confirmation_sends_nothing() {
        let config = ViewerConfig::default();
        let prompt = ScriptedPrompt::answering(false);
        let sent = Cell::new(false);

        let outcome = block_on(run_delete("cat.png", &config, &prompt, |_| {
            sent.set(true);
            async { Ok(DeleteResponse::ok()) }
        }));

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert!(!sent.get());
        assert_eq!(
            *prompt.confirms.borrow(),
            vec!["Are you sure you want to delete cat.png?".to_string()]
        );
        assert!(prompt.alerts.borrow().is_empty());
    }

    #[test]
    fn rejection_alerts_without_reload() {
        let config = ViewerConfig::default();
        let prompt = ScriptedPrompt::answering(true);

        let outcome = block_on(run_delete("cat.png", &config, &prompt, |_| async {
            Ok(DeleteResponse::failed())
        }));

        assert_eq!(outcome, DeleteOutcome::Rejected);
        assert_eq!(
            *prompt.alerts.borrow(),
            vec![config.messages.delete_failed.clone()]
        );
    }

    #[test]
    fn transport_error_alerts() {
        let config = ViewerConfig::default();
        let prompt = ScriptedPrompt::answering(true);

        let outcome = block_on(run_delete("cat.png", &config, &prompt, |_| async {
            Err(ViewerError::Transport("offline".to_string()))
        }));

        assert_eq!(
            outcome,
            DeleteOutcome::Failed(ViewerError::Transport("offline".to_string()))
        );
        assert_eq!(prompt.alerts.borrow().len(), 1);
    }

    #[test]
    fn success_without_state_requires_reload() {
        let config = ViewerConfig::default();
        let prompt = ScriptedPrompt::answering(true);
        let requested = RefCell::new(None);

        let outcome = block_on(run_delete("my file.png", &config, &prompt, |name| {
            *requested.borrow_mut() = Some(name);
            async { Ok(DeleteResponse::ok()) }
        }));

        assert_eq!(outcome, DeleteOutcome::ReloadRequired);
        assert_eq!(requested.borrow().as_deref(), Some("my file.png"));
        assert!(prompt.alerts.borrow().is_empty());
    }

    #[test]
    fn success_with_state_refreshes() {
        let config = ViewerConfig::default();
        let prompt = ScriptedPrompt::answering(true);
        let remaining = ViewState::default().with_gallery(vec![GalleryEntry::new("dog.png", "")]);
        let response = DeleteResponse {
            success: true,
            state: Some(remaining.clone()),
        };

        let outcome = block_on(run_delete("cat.png", &config, &prompt, move |_| async move {
            Ok(response)
        }));

        assert_eq!(outcome, DeleteOutcome::Refreshed(remaining));
    }
}
