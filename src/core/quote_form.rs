//! Quote-request form shared by the contact section and the detail views.
//!
//! One [`QuoteForm`] instance owns one draft. The [`QuoteContext`] decides what the
//! `service` field is pre-filled with, whether `message` is required, and the texts
//! shown to the visitor.

use crate::core::catalog::CONTACT_SERVICE_OPTIONS;
use crate::domain::model::{ProductListing, QuoteRequest, ServiceListing};
use crate::domain::ports::{ConfigProvider, ContentGateway};
use crate::utils::error::Result;
use crate::utils::validation::{digits_only, is_blank, is_valid_email};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_AUTO_DISMISS_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteContext {
    /// The contact section; the visitor picks a service and must write a message.
    General,
    Service { title: String },
    Product { title: String },
}

impl QuoteContext {
    pub fn for_service(service: &ServiceListing) -> Self {
        QuoteContext::Service {
            title: service.title.clone(),
        }
    }

    pub fn for_product(product: &ProductListing) -> Self {
        QuoteContext::Product {
            title: product.title.clone(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuoteContext::General => "general",
            QuoteContext::Service { .. } => "service",
            QuoteContext::Product { .. } => "product",
        }
    }

    pub fn prefilled_service(&self) -> String {
        match self {
            QuoteContext::General => String::new(),
            QuoteContext::Service { title } | QuoteContext::Product { title } => title.clone(),
        }
    }

    /// `(value, label)` choices for the `service` field; detail contexts are pre-filled
    /// and offer none.
    pub fn service_options(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            QuoteContext::General => &CONTACT_SERVICE_OPTIONS,
            QuoteContext::Service { .. } | QuoteContext::Product { .. } => &[],
        }
    }

    pub fn requires_message(&self) -> bool {
        matches!(self, QuoteContext::General)
    }

    /// Sent when the visitor leaves `message` empty.
    pub fn default_message(&self) -> String {
        match self {
            QuoteContext::General => "Contact form inquiry".to_string(),
            QuoteContext::Service { title } => format!("Interested in {} service", title),
            QuoteContext::Product { title } => format!("Inquiry about {}", title),
        }
    }

    /// Detail views show the form in a modal; the contact section shows it inline.
    pub fn is_modal(&self) -> bool {
        !matches!(self, QuoteContext::General)
    }

    pub fn success_text(&self) -> &'static str {
        match self {
            QuoteContext::General => "Thank you! Your message has been sent successfully.",
            QuoteContext::Service { .. } => {
                "Thank you! Your quote request has been submitted successfully."
            }
            QuoteContext::Product { .. } => "Thank you! Your inquiry has been submitted.",
        }
    }

    pub fn failure_text(&self) -> &'static str {
        match self {
            QuoteContext::General => "Failed to send message",
            QuoteContext::Service { .. } => "Failed to submit quote request",
            QuoteContext::Product { .. } => "Failed to submit inquiry",
        }
    }

    fn service_required_text(&self) -> &'static str {
        match self {
            QuoteContext::Product { .. } => "Service/Product is required",
            _ => "Please select a service",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Service,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Service => "service",
            FormField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    RequiredField,
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub error: FieldError,
    pub message: String,
}

/// Validation failures keyed by field, one entry per invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, FieldIssue>);

impl FieldErrors {
    fn insert(&mut self, field: FormField, error: FieldError, message: &str) {
        self.0.insert(
            field,
            FieldIssue {
                error,
                message: message.to_string(),
            },
        );
    }

    pub fn get(&self, field: FormField) -> Option<&FieldIssue> {
        self.0.get(&field)
    }

    pub fn message(&self, field: FormField) -> Option<&str> {
        self.get(field).map(|issue| issue.message.as_str())
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FormField, &FieldIssue)> {
        self.0.iter()
    }

    fn clear_field(&mut self, field: FormField) {
        self.0.remove(&field);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl QuoteFields {
    fn prefilled(context: &QuoteContext) -> Self {
        Self {
            service: context.prefilled_service(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Service => &self.service,
            FormField::Message => &self.message,
        }
    }

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Service => self.service = value,
            FormField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Banner shown under the form after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Handle for closing a modal form some time after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket {
    generation: u64,
    delay: Duration,
}

impl DismissTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

pub struct QuoteForm<G: ContentGateway> {
    context: QuoteContext,
    gateway: G,
    fields: QuoteFields,
    errors: FieldErrors,
    status: SubmissionStatus,
    notice: Option<Notice>,
    open: bool,
    auto_dismiss_delay: Duration,
    // bumped on every submission attempt and on close
    generation: u64,
    // generation of the submission awaiting its gateway answer
    pending: Option<u64>,
}

impl<G: ContentGateway> QuoteForm<G> {
    pub fn new(context: QuoteContext, gateway: G) -> Self {
        let fields = QuoteFields::prefilled(&context);
        let open = !context.is_modal();
        Self {
            context,
            gateway,
            fields,
            errors: FieldErrors::default(),
            status: SubmissionStatus::Idle,
            notice: None,
            open,
            auto_dismiss_delay: DEFAULT_AUTO_DISMISS_DELAY,
            generation: 0,
            pending: None,
        }
    }

    pub fn with_auto_dismiss_delay(mut self, delay: Duration) -> Self {
        self.auto_dismiss_delay = delay;
        self
    }

    pub fn with_config<C: ConfigProvider>(self, config: &C) -> Self {
        self.with_auto_dismiss_delay(config.auto_dismiss_delay())
    }

    pub fn context(&self) -> &QuoteContext {
        &self.context
    }

    pub fn fields(&self) -> &QuoteFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    /// Editing a field clears that field's error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.clear_field(field);
    }

    /// Shows the form. A notice left over from an earlier, dismissed attempt is dropped.
    pub fn open(&mut self) {
        self.open = true;
        if self.status != SubmissionStatus::Submitting {
            self.notice = None;
        }
    }

    /// Closes a modal form and throws the draft away. The inline contact form stays visible.
    pub fn close(&mut self) {
        self.open = !self.context.is_modal();
        self.reset_draft();
        self.notice = None;
        if self.status != SubmissionStatus::Submitting {
            self.status = SubmissionStatus::Idle;
        }
        self.generation += 1;
    }

    /// Check every field; nothing short-circuits, so each bad field gets its own entry.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        let fields = &self.fields;

        if is_blank(&fields.name) {
            errors.insert(FormField::Name, FieldError::RequiredField, "Name is required");
        }

        if is_blank(&fields.email) {
            errors.insert(FormField::Email, FieldError::RequiredField, "Email is required");
        } else if !is_valid_email(&fields.email) {
            errors.insert(FormField::Email, FieldError::InvalidFormat, "Email is invalid");
        }

        if is_blank(&fields.phone) {
            errors.insert(
                FormField::Phone,
                FieldError::RequiredField,
                "Phone number is required",
            );
        } else if digits_only(&fields.phone).is_empty() {
            errors.insert(
                FormField::Phone,
                FieldError::InvalidFormat,
                "Phone number is invalid",
            );
        }

        if fields.service.is_empty() {
            errors.insert(
                FormField::Service,
                FieldError::RequiredField,
                self.context.service_required_text(),
            );
        }

        if self.context.requires_message() && is_blank(&fields.message) {
            errors.insert(
                FormField::Message,
                FieldError::RequiredField,
                "Message is required",
            );
        }

        errors
    }

    /// Payload for the gateway: phone reduced to digits, empty message replaced by the
    /// context's default.
    pub fn build_request(&self) -> QuoteRequest {
        let message = if is_blank(&self.fields.message) {
            self.context.default_message()
        } else {
            self.fields.message.clone()
        };

        QuoteRequest {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            phone: digits_only(&self.fields.phone),
            service: self.fields.service.clone(),
            message,
        }
    }

    /// First half of a submission. Returns the request to send, or `None` when a
    /// submission is already in flight or validation failed (errors are then recorded).
    pub fn begin_submit(&mut self) -> Option<QuoteRequest> {
        if !self.can_submit() {
            tracing::warn!("Ignoring {} quote submit: already submitting", self.context.label());
            return None;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(
                "{} quote form has {} invalid field(s)",
                self.context.label(),
                errors.len()
            );
            self.errors = errors;
            return None;
        }

        self.errors = FieldErrors::default();
        self.status = SubmissionStatus::Submitting;
        self.notice = None;
        self.generation += 1;
        self.pending = Some(self.generation);
        Some(self.build_request())
    }

    /// Second half of a submission: record the gateway's answer. An answer for a
    /// submission whose form was closed in the meantime is discarded.
    pub fn finish_submit(&mut self, outcome: Result<serde_json::Value>) {
        let pending = self.pending.take();
        if pending != Some(self.generation) {
            tracing::debug!(
                "Discarding {} quote result: form closed while submitting",
                self.context.label()
            );
            if self.status == SubmissionStatus::Submitting {
                self.status = SubmissionStatus::Idle;
            }
            return;
        }

        match outcome {
            Ok(ack) => {
                tracing::info!("✅ {} quote request accepted", self.context.label());
                tracing::debug!("Gateway acknowledgement: {}", ack);
                self.status = SubmissionStatus::Succeeded;
                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    text: self.context.success_text().to_string(),
                });
                self.reset_draft();
            }
            Err(e) => {
                tracing::error!(
                    "❌ {} quote request failed: {} (Category: {:?})",
                    self.context.label(),
                    e,
                    e.category()
                );
                self.status = SubmissionStatus::Failed;
                self.notice = Some(Notice {
                    kind: NoticeKind::Error,
                    text: e.user_message(self.context.failure_text()),
                });
            }
        }
    }

    /// Validate, post, and record the outcome.
    pub async fn submit(&mut self) -> SubmissionStatus {
        let Some(request) = self.begin_submit() else {
            return self.status;
        };

        let outcome = self.gateway.submit_quote(&request).await;
        self.finish_submit(outcome);
        self.status
    }

    /// Ticket for closing the modal after a success, `None` for the inline contact form
    /// or when the last submission did not succeed.
    pub fn dismiss_ticket(&self) -> Option<DismissTicket> {
        if self.context.is_modal() && self.status == SubmissionStatus::Succeeded {
            Some(DismissTicket {
                generation: self.generation,
                delay: self.auto_dismiss_delay,
            })
        } else {
            None
        }
    }

    /// Closes the modal unless the form moved on (new submission, manual close) since
    /// the ticket was issued. Returns whether it closed.
    pub fn apply_dismiss(&mut self, ticket: DismissTicket) -> bool {
        if ticket.generation != self.generation || self.status != SubmissionStatus::Succeeded {
            return false;
        }
        self.open = false;
        self.notice = None;
        self.status = SubmissionStatus::Idle;
        true
    }

    pub async fn dismiss_after_success(&mut self) -> bool {
        match self.dismiss_ticket() {
            Some(ticket) => {
                ticket.wait().await;
                self.apply_dismiss(ticket)
            }
            None => false,
        }
    }

    fn reset_draft(&mut self) {
        self.fields = QuoteFields::prefilled(&self.context);
        self.errors = FieldErrors::default();
    }
}
