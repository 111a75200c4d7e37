use std::time::Duration;

use tokio::time::{Instant, sleep_until};

use crate::domain::{
    common::{DEFAULT_RESET_DELAY, MAX_RESET_DELAY, entities::app_errors::CoreError},
    submission::{
        entities::{Field, FormState, Notification, SUCCESS_MESSAGE, SubmissionDraft},
        ports::ApiClient,
        validators::validate_draft,
        value_objects::{FieldErrors, RESTAURANTS_PATH, RestaurantPayload},
    },
};

/// Holds the form in `Submitting` while a request is in flight.
///
/// Dropping it without [`SubmittingGuard::finish`] puts the form back into
/// `Editing`, so a cancelled submit leaves the draft editable.
struct SubmittingGuard<'a> {
    state: &'a mut FormState,
    armed: bool,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(state: &'a mut FormState) -> Self {
        *state = FormState::Submitting;
        Self { state, armed: true }
    }

    fn finish(mut self, next: FormState) {
        *self.state = next;
        self.armed = false;
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::debug!("Submission dropped before completion");
            *self.state = FormState::Editing;
        }
    }
}

/// Drives one restaurant submission form.
///
/// The controller owns the draft and moves through
/// `Editing -> Submitting -> Submitted | Editing`. `Submitted` returns to
/// `Editing` either through [`FormController::submit_another`] or once the
/// reset delay has elapsed.
pub struct FormController<A: ApiClient> {
    api_client: A,
    draft: SubmissionDraft,
    state: FormState,
    errors: FieldErrors,
    notification: Option<Notification>,
    reset_delay: Duration,
    reset_at: Option<Instant>,
}

impl<A: ApiClient> FormController<A> {
    pub fn new(api_client: A) -> Self {
        Self::with_reset_delay(api_client, DEFAULT_RESET_DELAY)
    }

    /// Delays above [`MAX_RESET_DELAY`] are clamped.
    pub fn with_reset_delay(api_client: A, reset_delay: Duration) -> Self {
        let reset_delay = reset_delay.min(MAX_RESET_DELAY);
        Self {
            api_client,
            draft: SubmissionDraft::default(),
            state: FormState::Editing,
            errors: FieldErrors::new(),
            notification: None,
            reset_delay,
            reset_at: None,
        }
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Errors from the last blocked submit, kept current as fields change.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state == FormState::Editing
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), CoreError> {
        self.tick();
        if self.state != FormState::Editing {
            return Err(CoreError::NotEditing);
        }

        self.draft.set(field, value)?;

        if self.errors.contains_key(field.as_str()) {
            match self.validate_field(field) {
                Some(message) => {
                    self.errors.insert(field.to_string(), message);
                }
                None => {
                    self.errors.remove(field.as_str());
                }
            }
        }

        Ok(())
    }

    pub fn validate(&self) -> FieldErrors {
        validate_draft(&self.draft)
    }

    pub fn validate_field(&self, field: Field) -> Option<String> {
        self.validate().remove(field.as_str())
    }

    /// Validates the draft and posts it to the food map API.
    ///
    /// On success the draft is cleared and the form shows the submitted view
    /// until the reset delay passes. On failure the draft is kept so the user
    /// can retry, and the error is also stored as a notification.
    pub async fn submit(&mut self) -> Result<serde_json::Value, CoreError> {
        self.tick();
        match self.state {
            FormState::Submitting => return Err(CoreError::SubmissionInProgress),
            FormState::Submitted => return Err(CoreError::NotEditing),
            FormState::Editing => {}
        }

        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Draft rejected locally");
            self.errors = errors.clone();
            return Err(CoreError::Validation(errors));
        }
        self.errors.clear();

        let payload = RestaurantPayload::try_from(&self.draft)?;
        let body = serde_json::to_value(&payload)
            .map_err(|e| CoreError::InvalidPayload(e.to_string()))?;

        tracing::info!(
            name = %payload.name,
            category = %payload.category,
            "Submitting restaurant"
        );
        tracing::debug!(payload = %body, "Restaurant payload");

        let guard = SubmittingGuard::enter(&mut self.state);
        match self.api_client.post_json(RESTAURANTS_PATH, body).await {
            Ok(ack) => {
                tracing::info!("Restaurant submission acknowledged");
                guard.finish(FormState::Submitted);
                self.draft = SubmissionDraft::default();
                self.reset_at = Instant::now().checked_add(self.reset_delay);
                self.notification = Some(Notification::success(SUCCESS_MESSAGE));
                Ok(ack)
            }
            Err(e) => {
                tracing::error!("Restaurant submission failed: {}", e);
                guard.finish(FormState::Editing);
                self.notification = Some(Notification::error(e.user_message()));
                Err(e)
            }
        }
    }

    /// Leaves the submitted view and starts an empty form.
    pub fn submit_another(&mut self) {
        if self.state == FormState::Submitted {
            self.reset_to_editing();
        }
    }

    /// Applies the automatic return to the form once the reset delay passed.
    pub fn tick(&mut self) -> FormState {
        if let (FormState::Submitted, Some(reset_at)) = (self.state, self.reset_at) {
            if Instant::now() >= reset_at {
                self.reset_to_editing();
            }
        }
        self.state
    }

    /// Waits for the reset delay of the submitted view, then returns to the form.
    pub async fn wait_for_reset(&mut self) -> FormState {
        if let (FormState::Submitted, Some(reset_at)) = (self.state, self.reset_at) {
            sleep_until(reset_at).await;
        }
        self.tick()
    }

    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_at
    }

    fn reset_to_editing(&mut self) {
        self.state = FormState::Editing;
        self.draft = SubmissionDraft::default();
        self.errors.clear();
        self.reset_at = None;
    }
}
