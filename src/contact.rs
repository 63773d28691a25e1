use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

use crate::schedule::Scheduler;

/// How long the simulated delivery takes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the confirmation stays up before the form comes back.
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(5000);
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// Checks every field and collects one error per failing field. An empty map
/// means the form can be sent.
pub fn validate(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !EMAIL_RE.is_match(email) {
        errors.insert(Field::Email, FieldError::EmailInvalid);
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, FieldError::MessageRequired);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(Field::Message, FieldError::MessageTooShort);
    }

    errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Timer events the form asks its scheduler to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTimer {
    SubmissionSettled,
    ConfirmationExpired,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("a submission is already in progress")]
    Busy,
}

#[derive(Debug, Clone)]
pub struct ContactForm<H> {
    fields: FormFields,
    errors: FieldErrors,
    phase: FormPhase,
    pending: Option<H>,
}

impl<H> Default for ContactForm<H> {
    fn default() -> Self {
        Self {
            fields: FormFields::default(),
            errors: FieldErrors::new(),
            phase: FormPhase::Editing,
            pending: None,
        }
    }
}

impl<H> ContactForm<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// Updates one field. Any error shown for that field goes away; the other
    /// fields keep theirs until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.errors.remove(&field);
    }

    pub fn submit<S>(&mut self, scheduler: &mut S) -> Result<(), SubmitError>
    where
        S: Scheduler<FormTimer, Handle = H>,
    {
        if self.phase != FormPhase::Editing {
            return Err(SubmitError::Busy);
        }
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            log::debug!("contact form rejected: {:?}", self.errors);
            return Err(SubmitError::Invalid(self.errors.clone()));
        }
        self.phase = FormPhase::Submitting;
        self.pending = Some(scheduler.schedule(SUBMIT_DELAY, FormTimer::SubmissionSettled));
        Ok(())
    }

    /// Delivers a timer event. Events that no longer match the current phase
    /// (the user dismissed the confirmation, say) are dropped.
    pub fn on_timer<S>(&mut self, timer: FormTimer, scheduler: &mut S)
    where
        S: Scheduler<FormTimer, Handle = H>,
    {
        match (timer, self.phase) {
            (FormTimer::SubmissionSettled, FormPhase::Submitting) => {
                log::info!("contact form submitted");
                self.phase = FormPhase::Submitted;
                self.fields = FormFields::default();
                self.pending =
                    Some(scheduler.schedule(CONFIRMATION_DELAY, FormTimer::ConfirmationExpired));
            }
            (FormTimer::ConfirmationExpired, FormPhase::Submitted) => {
                self.phase = FormPhase::Editing;
                self.pending = None;
            }
            (timer, phase) => {
                log::debug!("ignoring stale {timer:?} in {phase:?}");
            }
        }
    }

    /// "Send another message": leaves the confirmation before it times out.
    pub fn dismiss_confirmation<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<FormTimer, Handle = H>,
    {
        if self.phase != FormPhase::Submitted {
            return;
        }
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        self.phase = FormPhase::Editing;
    }

    /// Clears any outstanding timer so nothing fires after the form is gone.
    pub fn teardown<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<FormTimer, Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}
