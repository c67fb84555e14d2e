use std::future::Future;

use futures::future::{abortable, AbortHandle, Aborted};
use gloo_timers::future::TimeoutFuture;
use log::info;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;

use super::validation::{validate, FormData};
use crate::config;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode the enquiry: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("the enquiry was rejected: {0}")]
    Rejected(String),
}

impl SubmitError {
    /// Text shown in the retry banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Serialize(_) => {
                "We couldn't prepare your message. Please try again.".to_string()
            }
            SubmitError::Rejected(reason) => format!("Your message wasn't sent: {}", reason),
        }
    }
}

/// Stand-in for the enquiry endpoint. Rejects payloads that fail the field rules,
/// otherwise waits out the simulated latency and accepts.
pub async fn send_enquiry(data: FormData) -> Result<(), SubmitError> {
    let errors = validate(&data);
    if !errors.is_empty() {
        return Err(SubmitError::Rejected(format!(
            "{} field(s) failed validation",
            errors.len()
        )));
    }
    let payload = serde_json::to_string(&data)?;
    TimeoutFuture::new(config::SUBMIT_LATENCY_MS).await;
    info!("Form submitted: {}", payload);
    Ok(())
}

/// Owns an in-flight submission. Dropping or cancelling it aborts the task before it
/// can report back to a view that no longer exists.
pub struct SubmissionTask {
    handle: AbortHandle,
}

/// Wraps a submission so it can be aborted. The returned future calls `on_done` only if
/// the submission ran to completion.
pub fn supervise<Fut, F>(submission: Fut, on_done: F) -> (impl Future<Output = ()>, AbortHandle)
where
    Fut: Future<Output = Result<(), SubmitError>>,
    F: FnOnce(Result<(), SubmitError>),
{
    let (future, handle) = abortable(submission);
    let supervised = async move {
        match future.await {
            Ok(result) => on_done(result),
            Err(Aborted) => info!("Enquiry submission cancelled"),
        }
    };
    (supervised, handle)
}

impl SubmissionTask {
    pub fn spawn<Fut, F>(submission: Fut, on_done: F) -> Self
    where
        Fut: Future<Output = Result<(), SubmitError>> + 'static,
        F: FnOnce(Result<(), SubmitError>) + 'static,
    {
        let (supervised, handle) = supervise(submission, on_done);
        spawn_local(supervised);
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for SubmissionTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;
    use futures::future::ready;

    use super::*;

    type Outcome = Rc<RefCell<Option<Result<(), String>>>>;

    fn recorder() -> (Outcome, impl FnOnce(Result<(), SubmitError>)) {
        let outcome: Outcome = Rc::new(RefCell::new(None));
        let slot = outcome.clone();
        let on_done = move |result: Result<(), SubmitError>| {
            *slot.borrow_mut() = Some(result.map_err(|e| e.to_string()));
        };
        (outcome, on_done)
    }

    #[test]
    fn cancelled_submission_never_reports() {
        let (outcome, on_done) = recorder();
        let (supervised, handle) = supervise(ready(Ok(())), on_done);
        handle.abort();
        block_on(supervised);
        assert!(outcome.borrow().is_none());
    }

    #[test]
    fn dropped_task_handle_aborts_submission() {
        let (outcome, on_done) = recorder();
        let (supervised, handle) = supervise(ready(Ok(())), on_done);
        drop(SubmissionTask { handle });
        block_on(supervised);
        assert!(outcome.borrow().is_none());
    }

    #[test]
    fn completed_submission_reports_success() {
        let (outcome, on_done) = recorder();
        let (supervised, _handle) = supervise(ready(Ok(())), on_done);
        block_on(supervised);
        assert_eq!(*outcome.borrow(), Some(Ok(())));
    }

    #[test]
    fn failing_submission_delivers_error() {
        let (outcome, on_done) = recorder();
        let failing = ready(Err(SubmitError::Rejected("mailbox full".to_string())));
        let (supervised, _handle) = supervise(failing, on_done);
        block_on(supervised);
        assert_eq!(
            *outcome.borrow(),
            Some(Err("the enquiry was rejected: mailbox full".to_string()))
        );
    }

    #[test]
    fn endpoint_rejects_invalid_payload() {
        let result = block_on(send_enquiry(FormData::default()));
        match result {
            Err(SubmitError::Rejected(reason)) => assert_eq!(reason, "4 field(s) failed validation"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let data = FormData {
            full_name: "Jane".to_string(),
            email: "jane@acme.com".to_string(),
            company: "Acme".to_string(),
            message: "Hello from Acme".to_string(),
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["fullName"], "Jane");
        assert_eq!(value["email"], "jane@acme.com");
        assert_eq!(value["company"], "Acme");
        assert_eq!(value["message"], "Hello from Acme");
    }

    #[test]
    fn rejection_message_names_the_reason() {
        let err = SubmitError::Rejected("mailbox full".to_string());
        assert_eq!(err.user_message(), "Your message wasn't sent: mailbox full");
        assert_eq!(err.to_string(), "the enquiry was rejected: mailbox full");
    }
}
