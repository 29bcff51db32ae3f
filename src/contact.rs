use serde::Serialize;
use thiserror::Error;

/// Delay of the simulated submission transport, in milliseconds.
pub const SUBMIT_DELAY_MS: f64 = 1500.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    /// JSON body a real backend would receive for these fields.
    pub fn to_payload(&self) -> Result<String, FormError> {
        serde_json::to_string(self).map_err(|e| FormError::Payload(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Issued by every accepted `submit`; a completion only lands if it carries
/// the ticket of the submission still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,
    #[error("Form must be reset before sending another message")]
    NotReady,
    #[error("Form can only be reset after a submission has finished")]
    NotFinished,
    #[error("No submission in flight for this completion")]
    StaleCompletion,
    #[error("Couldn't encode form payload: {0}")]
    Payload(String),
}

/// Delivers an accepted submission. Implementations must eventually call
/// `ContactForm::complete` with the same ticket, once per `dispatch`.
pub trait SubmitTransport {
    fn dispatch(&self, ticket: SubmissionTicket, body: String, delay_ms: f64);
}

/// Contact form state: the three fields and the submission lifecycle.
///
/// `Idle --submit--> Loading --complete--> Success --reset--> Idle`, with
/// `Loading --complete(Err)--> Failed` for transports that can fail. Failed
/// accepts either `submit` (retry) or `reset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: FormFields,
    status: SubmissionStatus,
    in_flight: Option<SubmissionTicket>,
    issued: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
    }

    pub fn submit(&mut self) -> Result<SubmissionTicket, FormError> {
        match self.status {
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {}
            SubmissionStatus::Loading => return Err(FormError::AlreadySubmitting),
            SubmissionStatus::Success => return Err(FormError::NotReady),
        }
        self.issued += 1;
        let ticket = SubmissionTicket(self.issued);
        self.in_flight = Some(ticket);
        self.status = SubmissionStatus::Loading;
        log::debug!("contact form submission {} started", self.issued);
        Ok(ticket)
    }

    /// `submit`, then hand the encoded fields to `transport`. Nothing is
    /// dispatched when the submission is rejected.
    pub fn submit_with<T: SubmitTransport + ?Sized>(
        &mut self,
        transport: &T,
    ) -> Result<SubmissionTicket, FormError> {
        let body = self.fields.to_payload()?;
        let ticket = self.submit()?;
        transport.dispatch(ticket, body, SUBMIT_DELAY_MS);
        Ok(ticket)
    }

    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<(), String>,
    ) -> Result<(), FormError> {
        if !self.status.is_loading() || self.in_flight != Some(ticket) {
            return Err(FormError::StaleCompletion);
        }
        self.in_flight = None;
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.fields = FormFields::default();
            }
            Err(msg) => {
                log::warn!("contact form submission {} failed: {msg}", ticket.0);
                self.status = SubmissionStatus::Failed(msg);
            }
        }
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), FormError> {
        match self.status {
            SubmissionStatus::Success | SubmissionStatus::Failed(_) => {
                self.status = SubmissionStatus::Idle;
                Ok(())
            }
            SubmissionStatus::Idle | SubmissionStatus::Loading => Err(FormError::NotFinished),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records dispatches instead of starting a timer; `fire` plays the
    /// timer callback for everything scheduled so far.
    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<(SubmissionTicket, String, f64)>>,
    }

    impl SubmitTransport for RecordingTransport {
        fn dispatch(&self, ticket: SubmissionTicket, body: String, delay_ms: f64) {
            self.sent.borrow_mut().push((ticket, body, delay_ms));
        }
    }

    impl RecordingTransport {
        fn count(&self) -> usize {
            self.sent.borrow().len()
        }

        fn fire(&self, form: &mut ContactForm) -> Vec<Result<(), FormError>> {
            self.sent
                .borrow()
                .iter()
                .map(|(ticket, _, _)| form.complete(*ticket, Ok(())))
                .collect()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Ava");
        form.update_field(Field::Email, "ava@x.com");
        form.update_field(Field::Message, "Hi");
        form
    }

    #[test]
    fn test_update_field_last_write_wins() {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "A");
        form.update_field(Field::Email, "a@b.c");
        form.update_field(Field::Name, "Ava");
        form.update_field(Field::Message, "first");
        form.update_field(Field::Message, "");
        form.update_field(Field::Message, "second");

        assert_eq!(form.fields().name, "Ava");
        assert_eq!(form.fields().email, "a@b.c");
        assert_eq!(form.fields().message, "second");
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_end_to_end_submission() {
        let mut form = filled();
        let ticket = form.submit().expect("submit from idle should succeed");
        assert_eq!(form.status(), &SubmissionStatus::Loading);
        // fields stay until the transport reports back
        assert_eq!(form.fields().name, "Ava");

        form.complete(ticket, Ok(())).expect("completion should apply");
        assert_eq!(form.status(), &SubmissionStatus::Success);
        assert_eq!(form.fields(), &FormFields::default());
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        let before = form.clone();

        assert_eq!(form.submit(), Err(FormError::AlreadySubmitting));
        assert_eq!(form, before);

        // the original ticket still completes exactly once
        assert!(form.complete(ticket, Ok(())).is_ok());
        assert_eq!(form.complete(ticket, Ok(())), Err(FormError::StaleCompletion));
        assert_eq!(form.status(), &SubmissionStatus::Success);
    }

    #[test]
    fn test_reset_only_from_finished() {
        let mut form = filled();
        assert_eq!(form.reset(), Err(FormError::NotFinished));
        assert_eq!(form.status(), &SubmissionStatus::Idle);

        let ticket = form.submit().unwrap();
        assert_eq!(form.reset(), Err(FormError::NotFinished));
        assert_eq!(form.status(), &SubmissionStatus::Loading);

        form.complete(ticket, Ok(())).unwrap();
        assert!(form.reset().is_ok());
        assert_eq!(form.status(), &SubmissionStatus::Idle);

        // a fresh cycle works after reset
        form.update_field(Field::Name, "Bo");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_submit_from_success_rejected() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        form.complete(ticket, Ok(())).unwrap();
        form.update_field(Field::Name, "Bo");
        let before = form.clone();

        assert_eq!(form.submit(), Err(FormError::NotReady));
        assert_eq!(form, before);
        assert_eq!(form.status(), &SubmissionStatus::Success);
    }

    #[test]
    fn test_submit_with_dispatches_once_with_fixed_delay() {
        let transport = RecordingTransport::default();
        let mut form = filled();

        let ticket = form.submit_with(&transport).unwrap();
        assert_eq!(transport.count(), 1);
        let (sent_ticket, body, delay_ms) = transport.sent.borrow()[0].clone();
        assert_eq!(sent_ticket, ticket);
        assert_eq!(delay_ms, SUBMIT_DELAY_MS);
        assert_eq!(delay_ms, 1500.0);
        assert!(body.contains("ava@x.com"));

        // rejected while loading: no second timer
        assert_eq!(form.submit_with(&transport), Err(FormError::AlreadySubmitting));
        assert_eq!(transport.count(), 1);
    }

    #[test]
    fn test_success_only_after_scheduled_completion() {
        let transport = RecordingTransport::default();
        let mut form = filled();
        form.submit_with(&transport).unwrap();

        // nothing has fired yet
        assert_eq!(form.status(), &SubmissionStatus::Loading);
        assert_eq!(form.fields().name, "Ava");

        assert_eq!(transport.fire(&mut form), vec![Ok(())]);
        assert_eq!(form.status(), &SubmissionStatus::Success);
        assert_eq!(form.fields(), &FormFields::default());

        // replaying the same timer is a no-op
        assert_eq!(transport.fire(&mut form), vec![Err(FormError::StaleCompletion)]);
        assert_eq!(form.status(), &SubmissionStatus::Success);
    }

    #[test]
    fn test_rejected_submit_dispatches_nothing() {
        let transport = RecordingTransport::default();
        let mut form = filled();
        let ticket = form.submit().unwrap();
        form.complete(ticket, Ok(())).unwrap();

        assert_eq!(form.submit_with(&transport), Err(FormError::NotReady));
        assert_eq!(transport.count(), 0);

        form.reset().unwrap();
        assert!(form.submit_with(&transport).is_ok());
        assert_eq!(transport.count(), 1);
    }

    #[test]
    fn test_completion_without_submission_rejected() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        form.complete(ticket, Ok(())).unwrap();
        form.reset().unwrap();
        let before = form.clone();

        assert_eq!(form.complete(ticket, Ok(())), Err(FormError::StaleCompletion));
        assert_eq!(form, before);
    }

    #[test]
    fn test_stale_ticket_does_not_complete_newer_submission() {
        let mut form = filled();
        let first = form.submit().unwrap();
        form.complete(first, Err("timeout".to_string())).unwrap();
        let second = form.submit().unwrap();

        assert_eq!(form.complete(first, Ok(())), Err(FormError::StaleCompletion));
        assert_eq!(form.status(), &SubmissionStatus::Loading);
        assert!(form.complete(second, Ok(())).is_ok());
    }

    #[test]
    fn test_failed_keeps_fields_and_allows_retry_or_reset() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        form.complete(ticket, Err("server unavailable".to_string()))
            .unwrap();
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failed("server unavailable".to_string())
        );
        assert_eq!(form.fields().email, "ava@x.com");

        let retry = form.submit().expect("retry from failed should succeed");
        assert!(form.status().is_loading());
        form.complete(retry, Err("again".to_string())).unwrap();

        assert!(form.reset().is_ok());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.fields().message, "Hi");
    }

    #[test]
    fn test_payload_contains_all_fields() {
        let form = filled();
        let payload = form.fields().to_payload().unwrap();
        let decoded: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded["name"], "Ava");
        assert_eq!(decoded["email"], "ava@x.com");
        assert_eq!(decoded["message"], "Hi");
    }
}
