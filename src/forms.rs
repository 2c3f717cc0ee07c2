//! Form state for the newsletter signup and the contact form.
//!
//! Both forms follow the same lifecycle: fields are editable until a submit
//! passes validation, the record is handed to the intake service, and the
//! outcome decides between the finished view and an inline failure with a
//! retry. Nothing here touches the browser: components own the reducers,
//! spawn [`submit_newsletter`] / [`submit_contact`] and pass in the intake.

use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

use crate::intake::{Intake, Submission};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please add your name")]
    MissingName,
    #[error("please add your email address")]
    MissingEmail,
    #[error("that email address doesn't look quite right")]
    MalformedEmail,
    #[error("tell me a little about what's going on")]
    MissingMessage,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Sending,
    Done,
    Failed(String),
}

impl SubmissionStatus {
    pub fn accepts_edits(&self) -> bool {
        matches!(self, SubmissionStatus::Editing | SubmissionStatus::Failed(_))
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::MalformedEmail),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Outcome messages shared by both reducers.
pub enum SubmitAction {
    Invalid(ValidationError),
    Sending,
    Accepted,
    Failed(String),
}

fn apply_submit(status: &mut SubmissionStatus, error: &mut Option<ValidationError>, action: SubmitAction) {
    match action {
        SubmitAction::Invalid(e) => {
            *error = Some(e);
            *status = SubmissionStatus::Editing;
        }
        SubmitAction::Sending => {
            *error = None;
            *status = SubmissionStatus::Sending;
        }
        SubmitAction::Accepted => *status = SubmissionStatus::Done,
        SubmitAction::Failed(message) => *status = SubmissionStatus::Failed(message),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsletterState {
    pub name: String,
    pub email: String,
    pub status: SubmissionStatus,
    pub error: Option<ValidationError>,
}

impl NewsletterState {
    pub fn subscription(&self) -> Result<Subscription, ValidationError> {
        validate_email(&self.email)?;
        Ok(Subscription {
            name: non_empty(&self.name),
            email: self.email.trim().to_string(),
        })
    }
}

pub enum NewsletterAction {
    SetName(String),
    SetEmail(String),
    Submit(SubmitAction),
}

impl Reducible for NewsletterState {
    type Action = NewsletterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NewsletterAction::SetName(_) | NewsletterAction::SetEmail(_)
                if !self.status.accepts_edits() =>
            {
                return self;
            }
            NewsletterAction::SetName(name) => {
                next.name = name;
                next.error = None;
            }
            NewsletterAction::SetEmail(email) => {
                next.email = email;
                next.error = None;
            }
            NewsletterAction::Submit(SubmitAction::Sending) if !self.status.accepts_edits() => {
                return self;
            }
            NewsletterAction::Submit(submit) => apply_submit(&mut next.status, &mut next.error, submit),
        }
        Rc::new(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Interest,
    Name,
    Email,
    Message,
    Source,
    Extra,
}

pub const INTEREST_OPTIONS: [&str; 4] = [
    "brand experience audit or consulting (creators/service providers)",
    "workshops or leadership consulting (corporate teams)",
    "brand partnerships or speaking",
    "just saying hi / not sure yet",
];

pub const SOURCE_OPTIONS: [&str; 5] = ["LinkedIn", "Instagram", "Google", "Referral", "Other"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<String>,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub interest: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub source: String,
    pub extra: String,
    pub status: SubmissionStatus,
    pub error: Option<ValidationError>,
}

impl ContactState {
    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Interest => &mut self.interest,
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
            ContactField::Source => &mut self.source,
            ContactField::Extra => &mut self.extra,
        }
    }

    /// Name, email and message are required; the rest is passed along when
    /// filled in.
    pub fn record(&self) -> Result<ContactRecord, ValidationError> {
        let name = non_empty(&self.name).ok_or(ValidationError::MissingName)?;
        validate_email(&self.email)?;
        let message = non_empty(&self.message).ok_or(ValidationError::MissingMessage)?;
        Ok(ContactRecord {
            interest: non_empty(&self.interest),
            name,
            email: self.email.trim().to_string(),
            message,
            source: non_empty(&self.source),
            extra: non_empty(&self.extra),
        })
    }
}

pub enum ContactAction {
    Set(ContactField, String),
    Submit(SubmitAction),
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Set(..) if !self.status.accepts_edits() => return self,
            ContactAction::Set(field, value) => {
                *next.field_mut(field) = value;
                next.error = None;
            }
            ContactAction::Submit(SubmitAction::Sending) if !self.status.accepts_edits() => {
                return self;
            }
            ContactAction::Submit(submit) => apply_submit(&mut next.status, &mut next.error, submit),
        }
        Rc::new(next)
    }
}

/// One press of a submit button. Nothing happens while a request is in
/// flight or after success; invalid input is reported without sending.
async fn submit<T>(
    status: &SubmissionStatus,
    payload: Result<T, ValidationError>,
    send: impl FnOnce(T) -> Submission,
    dispatch: impl Fn(SubmitAction),
) {
    if !status.accepts_edits() {
        return;
    }
    match payload {
        Ok(payload) => {
            dispatch(SubmitAction::Sending);
            let outcome = match send(payload).await {
                Ok(()) => SubmitAction::Accepted,
                Err(e) => SubmitAction::Failed(e.to_string()),
            };
            dispatch(outcome);
        }
        Err(e) => dispatch(SubmitAction::Invalid(e)),
    }
}

pub async fn submit_newsletter(
    state: &NewsletterState,
    intake: &dyn Intake,
    dispatch: impl Fn(NewsletterAction),
) {
    submit(
        &state.status,
        state.subscription(),
        |subscription| intake.subscribe(subscription),
        |action| dispatch(NewsletterAction::Submit(action)),
    )
    .await
}

pub async fn submit_contact(
    state: &ContactState,
    intake: &dyn Intake,
    dispatch: impl Fn(ContactAction),
) {
    submit(
        &state.status,
        state.record(),
        |record| intake.submit_contact(record),
        |action| dispatch(ContactAction::Submit(action)),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::SubmitError;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers from a script and remembers what it was sent.
    #[derive(Default)]
    struct ScriptedIntake {
        answers: RefCell<VecDeque<Result<(), SubmitError>>>,
        signups: RefCell<Vec<Subscription>>,
        contacts: RefCell<Vec<ContactRecord>>,
    }

    impl ScriptedIntake {
        fn answering(answers: Vec<Result<(), SubmitError>>) -> Self {
            ScriptedIntake {
                answers: RefCell::new(answers.into()),
                ..ScriptedIntake::default()
            }
        }

        fn answer(&self) -> Submission {
            let answer = self.answers.borrow_mut().pop_front().unwrap_or(Ok(()));
            futures::future::ready(answer).boxed_local()
        }
    }

    impl Intake for ScriptedIntake {
        fn subscribe(&self, subscription: Subscription) -> Submission {
            self.signups.borrow_mut().push(subscription);
            self.answer()
        }

        fn submit_contact(&self, record: ContactRecord) -> Submission {
            self.contacts.borrow_mut().push(record);
            self.answer()
        }
    }

    fn press_newsletter(state: &RefCell<Rc<NewsletterState>>, intake: &ScriptedIntake) {
        let snapshot = state.borrow().clone();
        block_on(submit_newsletter(&snapshot, intake, |action| {
            let current = state.borrow().clone();
            *state.borrow_mut() = current.reduce(action);
        }));
    }

    fn press_contact(state: &RefCell<Rc<ContactState>>, intake: &ScriptedIntake) {
        let snapshot = state.borrow().clone();
        block_on(submit_contact(&snapshot, intake, |action| {
            let current = state.borrow().clone();
            *state.borrow_mut() = current.reduce(action);
        }));
    }

    fn newsletter(state: NewsletterState, actions: Vec<NewsletterAction>) -> Rc<NewsletterState> {
        actions
            .into_iter()
            .fold(Rc::new(state), |state, action| state.reduce(action))
    }

    fn contact(actions: Vec<ContactAction>) -> Rc<ContactState> {
        actions
            .into_iter()
            .fold(Rc::new(ContactState::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn email_needs_an_at_sign_with_both_halves() {
        assert_eq!(validate_email("sam@bysamanthabrown.com"), Ok(()));
        assert_eq!(validate_email("  a@b "), Ok(()));
        assert_eq!(validate_email(""), Err(ValidationError::MissingEmail));
        assert_eq!(validate_email("   "), Err(ValidationError::MissingEmail));
        assert_eq!(validate_email("sam.example.com"), Err(ValidationError::MalformedEmail));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::MalformedEmail));
        assert_eq!(validate_email("sam@"), Err(ValidationError::MalformedEmail));
    }

    #[test]
    fn newsletter_without_at_sign_stays_editable_with_inline_error() {
        let state = newsletter(
            NewsletterState::default(),
            vec![NewsletterAction::SetEmail("not-an-email".into())],
        );
        let error = state.subscription().unwrap_err();
        let state = state.reduce(NewsletterAction::Submit(SubmitAction::Invalid(error)));

        assert_eq!(state.status, SubmissionStatus::Editing);
        assert_eq!(state.error, Some(ValidationError::MalformedEmail));
        assert!(state.status.accepts_edits());

        let state = state.reduce(NewsletterAction::SetEmail("sam@".into()));
        assert_eq!(state.email, "sam@");
        assert_eq!(state.error, None);
    }

    #[test]
    fn newsletter_done_rejects_further_edits() {
        let state = newsletter(
            NewsletterState::default(),
            vec![
                NewsletterAction::SetName("sam".into()),
                NewsletterAction::SetEmail("sam@bysamanthabrown.com".into()),
                NewsletterAction::Submit(SubmitAction::Sending),
                NewsletterAction::Submit(SubmitAction::Accepted),
            ],
        );
        assert_eq!(state.status, SubmissionStatus::Done);

        let after = state
            .clone()
            .reduce(NewsletterAction::SetEmail("other@example.com".into()));
        assert!(Rc::ptr_eq(&state, &after));
        let after = state.clone().reduce(NewsletterAction::SetName("x".into()));
        assert_eq!(after.name, "sam");
    }

    #[test]
    fn newsletter_subscription_trims_and_drops_blank_name() {
        let state = NewsletterState {
            name: "   ".into(),
            email: " sam@bysamanthabrown.com ".into(),
            ..NewsletterState::default()
        };
        assert_eq!(
            state.subscription(),
            Ok(Subscription {
                name: None,
                email: "sam@bysamanthabrown.com".into()
            })
        );
    }

    #[test]
    fn edits_are_ignored_while_sending() {
        let state = newsletter(
            NewsletterState {
                email: "a@b.co".into(),
                ..NewsletterState::default()
            },
            vec![
                NewsletterAction::Submit(SubmitAction::Sending),
                NewsletterAction::SetEmail("changed@b.co".into()),
            ],
        );
        assert_eq!(state.status, SubmissionStatus::Sending);
        assert_eq!(state.email, "a@b.co");
    }

    #[test]
    fn failure_keeps_fields_and_allows_retry() {
        let state = newsletter(
            NewsletterState {
                email: "a@b.co".into(),
                ..NewsletterState::default()
            },
            vec![
                NewsletterAction::Submit(SubmitAction::Sending),
                NewsletterAction::Submit(SubmitAction::Failed("timed out".into())),
            ],
        );
        assert_eq!(state.status, SubmissionStatus::Failed("timed out".into()));
        assert_eq!(state.email, "a@b.co");

        let state = state.reduce(NewsletterAction::Submit(SubmitAction::Sending));
        assert_eq!(state.status, SubmissionStatus::Sending);
        let state = state.reduce(NewsletterAction::Submit(SubmitAction::Accepted));
        assert_eq!(state.status, SubmissionStatus::Done);
    }

    #[test]
    fn empty_contact_form_is_not_sent() {
        let state = ContactState::default();
        assert_eq!(state.record(), Err(ValidationError::MissingName));

        let state = contact(vec![ContactAction::Set(ContactField::Name, "sam".into())]);
        assert_eq!(state.record(), Err(ValidationError::MissingEmail));

        let state = state.reduce(ContactAction::Set(ContactField::Email, "sam@x.co".into()));
        assert_eq!(state.record(), Err(ValidationError::MissingMessage));
    }

    #[test]
    fn contact_requires_name_email_and_message_only() {
        let state = contact(vec![
            ContactAction::Set(ContactField::Name, " Jo ".into()),
            ContactAction::Set(ContactField::Email, "jo@studio.co".into()),
            ContactAction::Set(ContactField::Message, "my client onboarding is chaos".into()),
        ]);
        assert_eq!(
            state.record(),
            Ok(ContactRecord {
                interest: None,
                name: "Jo".into(),
                email: "jo@studio.co".into(),
                message: "my client onboarding is chaos".into(),
                source: None,
                extra: None,
            })
        );
    }

    #[test]
    fn contact_fields_are_independent() {
        let state = contact(vec![
            ContactAction::Set(ContactField::Interest, INTEREST_OPTIONS[1].into()),
            ContactAction::Set(ContactField::Source, SOURCE_OPTIONS[0].into()),
            ContactAction::Set(ContactField::Extra, "4-day week please".into()),
        ]);
        assert_eq!(state.interest, INTEREST_OPTIONS[1]);
        assert_eq!(state.source, "LinkedIn");
        assert_eq!(state.extra, "4-day week please");
        assert_eq!(state.name, "");
    }

    #[test]
    fn contact_sent_only_after_acceptance() {
        let state = contact(vec![
            ContactAction::Set(ContactField::Name, "Jo".into()),
            ContactAction::Set(ContactField::Email, "jo@studio.co".into()),
            ContactAction::Set(ContactField::Message, "hi".into()),
            ContactAction::Submit(SubmitAction::Sending),
        ]);
        assert_eq!(state.status, SubmissionStatus::Sending);
        assert_ne!(state.status, SubmissionStatus::Done);

        let state = state.reduce(ContactAction::Submit(SubmitAction::Accepted));
        assert_eq!(state.status, SubmissionStatus::Done);
        let state = state.reduce(ContactAction::Set(ContactField::Message, "edit".into()));
        assert_eq!(state.message, "hi");
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::MissingName.to_string(), "please add your name");
        assert_eq!(
            ValidationError::MalformedEmail.to_string(),
            "that email address doesn't look quite right"
        );
    }

    #[test]
    fn payloads_omit_empty_optionals() {
        let record = ContactRecord {
            interest: Some(INTEREST_OPTIONS[3].into()),
            name: "Jo".into(),
            email: "jo@studio.co".into(),
            message: "hi".into(),
            source: None,
            extra: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["interest"], "just saying hi / not sure yet");
        assert_eq!(json["name"], "Jo");
        assert!(json.get("source").is_none());
        assert!(json.get("extra").is_none());

        let json = serde_json::to_value(Subscription {
            name: None,
            email: "a@b.co".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "email": "a@b.co" }));
    }

    #[test]
    fn submitting_a_bad_email_sends_nothing_and_stays_editable() {
        let intake = ScriptedIntake::default();
        let state = RefCell::new(Rc::new(NewsletterState {
            email: "sam.example.com".into(),
            ..NewsletterState::default()
        }));

        press_newsletter(&state, &intake);

        let state = state.borrow();
        assert_eq!(state.status, SubmissionStatus::Editing);
        assert_eq!(state.error, Some(ValidationError::MalformedEmail));
        assert!(intake.signups.borrow().is_empty());
    }

    #[test]
    fn submitting_a_good_email_reaches_done() {
        let intake = ScriptedIntake::answering(vec![Ok(())]);
        let state = RefCell::new(Rc::new(NewsletterState {
            name: "sam".into(),
            email: "sam@bysamanthabrown.com".into(),
            ..NewsletterState::default()
        }));

        press_newsletter(&state, &intake);

        assert_eq!(state.borrow().status, SubmissionStatus::Done);
        assert_eq!(
            *intake.signups.borrow(),
            vec![Subscription {
                name: Some("sam".into()),
                email: "sam@bysamanthabrown.com".into()
            }]
        );

        // A finished form ignores further presses.
        press_newsletter(&state, &intake);
        assert_eq!(intake.signups.borrow().len(), 1);
    }

    #[test]
    fn rejected_signup_fails_then_retry_sends_again() {
        let intake = ScriptedIntake::answering(vec![Err(SubmitError::Rejected(503)), Ok(())]);
        let state = RefCell::new(Rc::new(NewsletterState {
            email: "a@b.co".into(),
            ..NewsletterState::default()
        }));

        press_newsletter(&state, &intake);
        assert_eq!(
            state.borrow().status,
            SubmissionStatus::Failed("the server couldn't take this right now (status 503)".into())
        );
        assert_eq!(state.borrow().email, "a@b.co");

        press_newsletter(&state, &intake);
        assert_eq!(state.borrow().status, SubmissionStatus::Done);
        assert_eq!(intake.signups.borrow().len(), 2);
    }

    #[test]
    fn press_while_sending_is_ignored() {
        let intake = ScriptedIntake::default();
        let state = RefCell::new(Rc::new(NewsletterState {
            email: "a@b.co".into(),
            status: SubmissionStatus::Sending,
            ..NewsletterState::default()
        }));

        press_newsletter(&state, &intake);

        assert_eq!(state.borrow().status, SubmissionStatus::Sending);
        assert!(intake.signups.borrow().is_empty());
    }

    #[test]
    fn empty_contact_form_never_reaches_the_intake() {
        let intake = ScriptedIntake::default();
        let state = RefCell::new(Rc::new(ContactState::default()));

        press_contact(&state, &intake);

        assert_eq!(state.borrow().status, SubmissionStatus::Editing);
        assert_eq!(state.borrow().error, Some(ValidationError::MissingName));
        assert!(intake.contacts.borrow().is_empty());
    }

    #[test]
    fn complete_contact_form_is_sent_once_and_shows_sent() {
        let intake = ScriptedIntake::answering(vec![Ok(())]);
        let state = RefCell::new(contact(vec![
            ContactAction::Set(ContactField::Name, "Jo".into()),
            ContactAction::Set(ContactField::Email, "jo@studio.co".into()),
            ContactAction::Set(ContactField::Message, "our team engagement scores are tanking".into()),
        ]));

        press_contact(&state, &intake);

        assert_eq!(state.borrow().status, SubmissionStatus::Done);
        assert_eq!(intake.contacts.borrow().len(), 1);
        assert_eq!(intake.contacts.borrow()[0].name, "Jo");
    }

    #[test]
    fn contact_timeout_offers_retry() {
        let intake = ScriptedIntake::answering(vec![Err(SubmitError::Timeout)]);
        let state = RefCell::new(contact(vec![
            ContactAction::Set(ContactField::Name, "Jo".into()),
            ContactAction::Set(ContactField::Email, "jo@studio.co".into()),
            ContactAction::Set(ContactField::Message, "hi".into()),
        ]));

        press_contact(&state, &intake);

        assert_eq!(
            state.borrow().status,
            SubmissionStatus::Failed("the server took too long to answer".into())
        );
        assert!(state.borrow().status.accepts_edits());
    }
}
