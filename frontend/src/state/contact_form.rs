use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use yew::Callback;

use crate::config;
use crate::state::deferred::{DeferredTask, Scheduler};

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// The `name`/`id` attribute of the matching input.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<FormField> {
        FormField::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    EmptyField(FormField),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started,
    AlreadySubmitting,
    Rejected(FormError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitNotice {
    pub title: String,
    pub description: String,
}

impl SubmitNotice {
    fn sent() -> Self {
        Self {
            title: "Message Sent Successfully! ✨".to_string(),
            description: "Thank you for your message. I'll get back to you soon!".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitting: bool,
    pub focused: Option<FormField>,
}

impl ContactFormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn on_field_change(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn is_focused(&self, field: FormField) -> bool {
        self.focused == Some(field)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
        {
            return Err(FormError::EmptyField(field));
        }
        if !EMAIL_SHAPE.is_match(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Idle -> Submitting. Refuses while a submission is already in flight.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::AlreadySubmitting;
        }
        if let Err(err) = self.validate() {
            return SubmitOutcome::Rejected(err);
        }
        self.submitting = true;
        SubmitOutcome::Started
    }

    /// Submitting -> Idle, clearing every field. `None` when nothing was in flight.
    pub fn finish_submit(&mut self) -> Option<SubmitNotice> {
        if !self.submitting {
            return None;
        }
        *self = Self::default();
        Some(SubmitNotice::sent())
    }
}

/// Drives the simulated send: state, the pending delay and the notice sink.
pub struct ContactController<S: Scheduler> {
    state: Rc<RefCell<ContactFormState>>,
    scheduler: S,
    pending: Option<DeferredTask>,
    on_notice: Callback<SubmitNotice>,
}

impl<S: Scheduler> ContactController<S> {
    pub fn new(scheduler: S, on_notice: Callback<SubmitNotice>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ContactFormState::default())),
            scheduler,
            pending: None,
            on_notice,
        }
    }

    /// Borrow for rendering. Release it before calling back into the controller.
    pub fn state(&self) -> Ref<'_, ContactFormState> {
        self.state.borrow()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().submitting
    }

    pub fn on_field_change(&mut self, field: FormField, value: String) {
        self.state.borrow_mut().on_field_change(field, value);
    }

    pub fn focus(&mut self, field: FormField) {
        self.state.borrow_mut().focus(field);
    }

    pub fn blur(&mut self) {
        self.state.borrow_mut().blur();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.state.borrow_mut().begin_submit();
        match &outcome {
            SubmitOutcome::Started => {
                debug!("contact form submitting");
                let state = self.state.clone();
                let on_notice = self.on_notice.clone();
                self.pending = Some(self.scheduler.schedule(
                    config::SUBMIT_DELAY_MS,
                    Box::new(move || {
                        let notice = state.borrow_mut().finish_submit();
                        if let Some(notice) = notice {
                            info!("contact form sent");
                            on_notice.emit(notice);
                        }
                    }),
                ));
            }
            SubmitOutcome::AlreadySubmitting => debug!("submit ignored, already submitting"),
            SubmitOutcome::Rejected(err) => debug!("submit rejected: {}", err),
        }
        outcome
    }

    /// Drops an in-flight completion and returns to Idle with the fields intact.
    pub fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
            self.state.borrow_mut().submitting = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::deferred::testing::ManualScheduler;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.on_field_change(FormField::Name, "Jane Doe");
        state.on_field_change(FormField::Email, "jane@example.com");
        state.on_field_change(FormField::Subject, "Hello");
        state.on_field_change(FormField::Message, "Hi there");
        state
    }

    fn controller() -> (
        ContactController<ManualScheduler>,
        ManualScheduler,
        Rc<RefCell<Vec<SubmitNotice>>>,
    ) {
        let scheduler = ManualScheduler::default();
        let notices = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let notices = notices.clone();
            Callback::from(move |notice: SubmitNotice| notices.borrow_mut().push(notice))
        };
        (ContactController::new(scheduler.clone(), sink), scheduler, notices)
    }

    fn fill(controller: &mut ContactController<ManualScheduler>) {
        let state = filled();
        for field in FormField::ALL {
            controller.on_field_change(field, state.value(field).to_string());
        }
    }

    #[test]
    fn field_change_touches_exactly_one_field() {
        let mut state = filled();
        state.on_field_change(FormField::Subject, "Project inquiry");
        assert_eq!(state.subject, "Project inquiry");
        assert_eq!(state.name, "Jane Doe");
        assert_eq!(state.email, "jane@example.com");
        assert_eq!(state.message, "Hi there");
    }

    #[test]
    fn field_names_match_input_attributes() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("phone"), None);
    }

    #[test]
    fn validation_requires_every_field_and_an_address_shape() {
        let mut state = filled();
        assert_eq!(state.validate(), Ok(()));

        state.on_field_change(FormField::Message, "   ");
        assert_eq!(state.validate(), Err(FormError::EmptyField(FormField::Message)));

        let mut state = filled();
        state.on_field_change(FormField::Email, "jane.example.com");
        assert_eq!(state.validate(), Err(FormError::InvalidEmail));
        state.on_field_change(FormField::Email, "jane@example");
        assert_eq!(state.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn form_error_messages_use_field_labels() {
        assert_eq!(
            FormError::EmptyField(FormField::Email).to_string(),
            "Email Address is required"
        );
    }

    #[test]
    fn focus_and_blur_track_one_field() {
        let mut state = ContactFormState::default();
        state.focus(FormField::Email);
        assert!(state.is_focused(FormField::Email));
        assert!(!state.is_focused(FormField::Name));
        state.blur();
        assert_eq!(state.focused, None);
    }

    #[test]
    fn finish_without_begin_yields_nothing() {
        let mut state = filled();
        assert_eq!(state.finish_submit(), None);
        assert_eq!(state.name, "Jane Doe");
    }

    #[test]
    fn successful_submission_clears_fields_and_notifies_once() {
        let (mut controller, scheduler, notices) = controller();
        fill(&mut controller);

        assert_eq!(controller.submit(), SubmitOutcome::Started);
        assert!(controller.is_submitting());
        assert_eq!(scheduler.delays(), vec![config::SUBMIT_DELAY_MS]);
        assert!(notices.borrow().is_empty());

        assert_eq!(scheduler.advance(), 1);

        assert_eq!(*controller.state(), ContactFormState::default());
        assert!(!controller.is_submitting());
        assert_eq!(*notices.borrow(), vec![SubmitNotice::sent()]);
    }

    #[test]
    fn resubmitting_while_in_flight_is_a_no_op() {
        let (mut controller, scheduler, notices) = controller();
        fill(&mut controller);

        assert_eq!(controller.submit(), SubmitOutcome::Started);
        assert_eq!(controller.submit(), SubmitOutcome::AlreadySubmitting);
        assert_eq!(controller.submit(), SubmitOutcome::AlreadySubmitting);
        assert_eq!(scheduler.scheduled(), 1);

        scheduler.advance();
        assert_eq!(notices.borrow().len(), 1);
    }

    #[test]
    fn rejected_submission_schedules_nothing() {
        let (mut controller, scheduler, notices) = controller();
        controller.on_field_change(FormField::Name, "Jane Doe".to_string());

        assert_eq!(
            controller.submit(),
            SubmitOutcome::Rejected(FormError::EmptyField(FormField::Email))
        );
        assert_eq!(scheduler.scheduled(), 0);
        assert!(!controller.is_submitting());
        assert!(notices.borrow().is_empty());
    }

    #[test]
    fn form_is_usable_again_after_a_send() {
        let (mut controller, scheduler, notices) = controller();
        fill(&mut controller);
        controller.submit();
        scheduler.advance();

        fill(&mut controller);
        assert_eq!(controller.submit(), SubmitOutcome::Started);
        scheduler.advance();
        assert_eq!(notices.borrow().len(), 2);
    }

    #[test]
    fn state_borrows_the_live_form_without_copying() {
        let (mut controller, _scheduler, _notices) = controller();
        assert!(std::ptr::eq(&*controller.state(), &*controller.state()));

        controller.on_field_change(FormField::Subject, "Collaboration".to_string());
        controller.focus(FormField::Subject);
        {
            let state = controller.state();
            assert_eq!(state.subject, "Collaboration");
            assert!(state.is_focused(FormField::Subject));
        }

        controller.blur();
        assert_eq!(controller.state().focused, None);
    }

    #[test]
    fn cancelling_keeps_the_fields_and_suppresses_the_notice() {
        let (mut controller, scheduler, notices) = controller();
        fill(&mut controller);
        controller.submit();
        controller.cancel_pending();

        assert_eq!(scheduler.advance(), 0);
        assert!(!controller.is_submitting());
        assert_eq!(controller.state().name, "Jane Doe");
        assert!(notices.borrow().is_empty());
    }
}
