//! Live signup form validation

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::domain::registration::{
    AccountApi, AvailabilityField, Field, FieldState, RegistrationView,
};
use crate::infrastructure::timing::{DebouncePolicy, Debouncer, KeyedSequencer};
use crate::render::registration::{
    availability_network_error, availability_pending, availability_reset, availability_result,
    password_network_error, password_reset, password_result,
};

/// Checks email, username and password against the backend as the user types
///
/// Each field moves independently through
/// `Idle -> Pending -> {Valid, Invalid, NetworkError}` and returns to `Idle`
/// when emptied or when the form is submitted.
pub struct RegistrationValidator {
    api: Arc<dyn AccountApi>,
    view: Arc<dyn RegistrationView>,
    policy: DebouncePolicy,
    debouncer: Debouncer,
    sequencer: KeyedSequencer,
    states: Mutex<HashMap<Field, FieldState>>,
}

impl std::fmt::Debug for RegistrationValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationValidator")
            .field("policy", &self.policy)
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}

impl RegistrationValidator {
    pub fn new(
        api: Arc<dyn AccountApi>,
        view: Arc<dyn RegistrationView>,
        policy: DebouncePolicy,
    ) -> Self {
        Self {
            api,
            view,
            policy,
            debouncer: Debouncer::new(),
            sequencer: KeyedSequencer::new(),
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Current state of a field
    pub fn state(&self, field: Field) -> FieldState {
        self.lock_states().get(&field).copied().unwrap_or_default()
    }

    pub async fn on_email_input(self: &Arc<Self>, value: &str) {
        self.on_availability_input(AvailabilityField::Email, value).await;
    }

    pub async fn on_username_input(self: &Arc<Self>, value: &str) {
        self.on_availability_input(AvailabilityField::Username, value).await;
    }

    async fn on_availability_input(self: &Arc<Self>, field: AvailabilityField, value: &str) {
        let key = field.field().as_str();
        let value = value.trim();

        if value.is_empty() {
            self.debouncer.cancel(key);
            self.sequencer.invalidate(key);
            self.view.apply_availability(field, &availability_reset());
            self.set_state(field.field(), FieldState::Idle);
            return;
        }

        let delay = match field {
            AvailabilityField::Email => self.policy.email,
            AvailabilityField::Username => self.policy.username,
        };

        if delay.is_zero() {
            self.debouncer.cancel(key);
            self.check_availability(field, value).await;
            return;
        }

        let validator = Arc::downgrade(self);
        let value = value.to_string();
        self.debouncer.schedule(key, delay, async move {
            if let Some(validator) = validator.upgrade() {
                validator.check_availability(field, &value).await;
            }
        });
    }

    /// Asks the backend whether an email or username can be used
    #[instrument(skip(self, field, value), fields(field = field.field().as_str()))]
    pub async fn check_availability(&self, field: AvailabilityField, value: &str) {
        let key = field.field().as_str();
        let ticket = self.sequencer.issue(key);

        self.set_state(field.field(), FieldState::Pending);
        self.view.apply_availability(field, &availability_pending());

        let result = self.api.check_availability(field, value).await;

        if !self.sequencer.is_current(key, ticket) {
            debug!(ticket = ticket.value(), "Discarding stale availability response");
            return;
        }

        match result {
            Ok(result) => {
                let state = if result.is_valid {
                    FieldState::Valid
                } else {
                    FieldState::Invalid
                };
                self.set_state(field.field(), state);
                self.view
                    .apply_availability(field, &availability_result(field, &result));
            }
            Err(e) => {
                warn!(error = %e, "Availability check failed");
                self.set_state(field.field(), FieldState::NetworkError);
                self.view
                    .apply_availability(field, &availability_network_error(field));
            }
        }
    }

    /// Password is checked as typed, without trimming
    pub async fn on_password_input(self: &Arc<Self>, value: &str) {
        let key = Field::Password.as_str();

        if value.is_empty() {
            self.debouncer.cancel(key);
            self.sequencer.invalidate(key);
            self.view.apply_password(&password_reset());
            self.set_state(Field::Password, FieldState::Idle);
            return;
        }

        let delay: Duration = self.policy.password;
        if delay.is_zero() {
            self.debouncer.cancel(key);
            self.check_password(value).await;
            return;
        }

        let validator: Weak<Self> = Arc::downgrade(self);
        let value = value.to_string();
        self.debouncer.schedule(key, delay, async move {
            if let Some(validator) = validator.upgrade() {
                validator.check_password(&value).await;
            }
        });
    }

    #[instrument(skip_all)]
    async fn check_password(&self, password: &str) {
        let key = Field::Password.as_str();
        let ticket = self.sequencer.issue(key);
        self.set_state(Field::Password, FieldState::Pending);

        let result = self.api.check_password(password).await;

        if !self.sequencer.is_current(key, ticket) {
            debug!(ticket = ticket.value(), "Discarding stale password response");
            return;
        }

        match result {
            Ok(check) => {
                let state = if check.is_valid {
                    FieldState::Valid
                } else {
                    FieldState::Invalid
                };
                debug!(strength = %check.strength, score = check.score, "Password scored");
                self.set_state(Field::Password, state);
                self.view.apply_password(&password_result(&check));
            }
            Err(e) => {
                warn!(error = %e, "Password check failed");
                self.set_state(Field::Password, FieldState::NetworkError);
                self.view.apply_password(&password_network_error());
            }
        }
    }

    /// Drops pending and in-flight checks and clears every field's feedback
    pub fn on_submit(&self) {
        self.debouncer.cancel_all();
        self.sequencer.invalidate_all();

        for field in [AvailabilityField::Email, AvailabilityField::Username] {
            self.view.apply_availability(field, &availability_reset());
        }
        self.view.apply_password(&password_reset());

        let mut states = self.lock_states();
        for field in Field::all() {
            states.insert(field, FieldState::Idle);
        }
    }

    fn set_state(&self, field: Field, state: FieldState) {
        self.lock_states().insert(field, state);
    }

    fn lock_states(&self) -> std::sync::MutexGuard<'_, HashMap<Field, FieldState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
