use std::ops::Deref;
use std::rc::Rc;

use futures::future::{select, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

use crate::config;
use crate::forms::{ContactRecord, Subscription};

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("couldn't package your details: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("couldn't reach the server, please check your connection")]
    Network(String),
    #[error("the server couldn't take this right now (status {0})")]
    Rejected(u16),
    #[error("the server took too long to answer")]
    Timeout,
}

pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}

async fn post_json<T: Serialize>(path: &str, body: &T) -> Result<(), SubmitError> {
    let payload = serde_json::to_string(body)?;
    let url = config::endpoint(path);

    let send = Box::pin(
        Request::post(&url)
            .header("Content-Type", "application/json")
            .body(payload)
            .send(),
    );
    let timeout = Box::pin(TimeoutFuture::new(config::SUBMIT_TIMEOUT_MS));

    match select(send, timeout).await {
        Either::Left((Ok(response), _)) => check_status(response.status()),
        Either::Left((Err(e), _)) => Err(SubmitError::Network(e.to_string())),
        Either::Right(_) => Err(SubmitError::Timeout),
    }
}

/// Pending answer from the intake service.
pub type Submission = LocalBoxFuture<'static, Result<(), SubmitError>>;

/// The outside service that takes newsletter signups and contact requests.
/// Forms only see this; which implementation runs is decided by the shell.
pub trait Intake {
    fn subscribe(&self, subscription: Subscription) -> Submission;
    fn submit_contact(&self, record: ContactRecord) -> Submission;
}

/// Posts JSON to the intake endpoints under the backend URL.
pub struct HttpIntake;

impl Intake for HttpIntake {
    fn subscribe(&self, subscription: Subscription) -> Submission {
        async move {
            let result = post_json(config::NEWSLETTER_PATH, &subscription).await;
            match &result {
                Ok(()) => info!("Newsletter signup accepted"),
                Err(e) => warn!("Newsletter signup failed: {}", e),
            }
            result
        }
        .boxed_local()
    }

    fn submit_contact(&self, record: ContactRecord) -> Submission {
        async move {
            let result = post_json(config::CONTACT_PATH, &record).await;
            match &result {
                Ok(()) => info!("Contact request accepted"),
                Err(e) => warn!("Contact request failed: {:?}", e),
            }
            result
        }
        .boxed_local()
    }
}

/// Stand-in for builds that ship without an intake service. Everything is
/// accepted and only written to the console.
pub struct OfflineIntake;

impl Intake for OfflineIntake {
    fn subscribe(&self, subscription: Subscription) -> Submission {
        info!("Intake offline, newsletter signup for {} not delivered", subscription.email);
        futures::future::ready(Ok(())).boxed_local()
    }

    fn submit_contact(&self, record: ContactRecord) -> Submission {
        info!("Intake offline, contact request from {} not delivered", record.email);
        futures::future::ready(Ok(())).boxed_local()
    }
}

/// Shared intake handed down through a `ContextProvider`.
#[derive(Clone)]
pub struct IntakeHandle(Rc<dyn Intake>);

impl IntakeHandle {
    pub fn new(intake: impl Intake + 'static) -> Self {
        IntakeHandle(Rc::new(intake))
    }

    pub fn from_config() -> Self {
        if config::INTAKE_OFFLINE {
            warn!("No intake service configured, form submissions stay in the browser");
            IntakeHandle::new(OfflineIntake)
        } else {
            IntakeHandle::new(HttpIntake)
        }
    }
}

impl PartialEq for IntakeHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for IntakeHandle {
    type Target = dyn Intake;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[hook]
pub fn use_intake() -> IntakeHandle {
    use_context::<IntakeHandle>().unwrap_or_else(IntakeHandle::from_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_counts_as_accepted() {
        assert!(check_status(200).is_ok());
        assert!(check_status(201).is_ok());
        assert!(check_status(204).is_ok());
        assert!(matches!(check_status(302), Err(SubmitError::Rejected(302))));
        assert!(matches!(check_status(422), Err(SubmitError::Rejected(422))));
        assert!(matches!(check_status(503), Err(SubmitError::Rejected(503))));
    }

    #[test]
    fn failures_read_as_sentences() {
        assert_eq!(
            SubmitError::Rejected(500).to_string(),
            "the server couldn't take this right now (status 500)"
        );
        assert_eq!(SubmitError::Timeout.to_string(), "the server took too long to answer");
    }

    #[test]
    fn offline_intake_accepts_without_a_server() {
        let intake = IntakeHandle::new(OfflineIntake);
        let signup = Subscription {
            name: None,
            email: "a@b.co".into(),
        };
        assert!(futures::executor::block_on(intake.subscribe(signup)).is_ok());
    }

    #[test]
    fn handles_compare_by_identity() {
        let first = IntakeHandle::new(OfflineIntake);
        assert!(first == first.clone());
        assert!(first != IntakeHandle::new(OfflineIntake));
    }
}
