//! Signup view over an in-memory document

use std::sync::Arc;

use super::document::Document;
use crate::domain::registration::{
    AvailabilityDecoration, AvailabilityField, Feedback, IndicatorState, InputMark,
    PasswordDecoration, RegistrationConfig, RegistrationView,
};
use crate::render::markup::{
    feedback_html, strength_bar_class, suggestions_html, text_feedback_class, SUGGESTIONS_CLASS,
};

const HIDDEN: &str = "d-none";
const SUCCESS_ICON: &str = "success-icon";
const ERROR_ICON: &str = "error-icon";
const IS_VALID: &str = "is-valid";
const IS_INVALID: &str = "is-invalid";

/// Element ids around one availability-checked input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityBinding {
    pub input_id: String,
    pub spinner_id: String,
    pub check_id: String,
    pub cross_id: String,
    pub feedback_id: String,
}

impl AvailabilityBinding {
    /// Ids derived from a prefix, e.g. `email-spinner`, `email-check`
    pub fn with_prefix(prefix: &str, input_id: impl Into<String>) -> Self {
        Self {
            input_id: input_id.into(),
            spinner_id: format!("{}-spinner", prefix),
            check_id: format!("{}-check", prefix),
            cross_id: format!("{}-cross", prefix),
            feedback_id: format!("{}-feedback", prefix),
        }
    }
}

/// Element ids the signup view patches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationBinding {
    pub email: AvailabilityBinding,
    pub username: AvailabilityBinding,
    pub password_input_id: String,
    pub strength_bar_id: String,
    pub password_feedback_id: String,
    pub password_suggestions_id: String,
}

impl RegistrationBinding {
    pub fn from_config(config: &RegistrationConfig) -> Self {
        Self {
            email: AvailabilityBinding::with_prefix("email", config.email_field_id.clone()),
            username: AvailabilityBinding::with_prefix("username", config.username_field_id.clone()),
            password_input_id: config.password_field_id.clone(),
            strength_bar_id: "strength-bar".to_string(),
            password_feedback_id: "password-feedback".to_string(),
            password_suggestions_id: "password-suggestions".to_string(),
        }
    }

    pub fn availability(&self, field: AvailabilityField) -> &AvailabilityBinding {
        match field {
            AvailabilityField::Email => &self.email,
            AvailabilityField::Username => &self.username,
        }
    }
}

/// `RegistrationView` backed by a [`Document`]
#[derive(Debug)]
pub struct DocumentRegistrationView {
    document: Arc<Document>,
    binding: RegistrationBinding,
}

impl DocumentRegistrationView {
    pub fn new(document: Arc<Document>, binding: RegistrationBinding) -> Self {
        Self { document, binding }
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    pub fn binding(&self) -> &RegistrationBinding {
        &self.binding
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if visible {
            self.document.remove_class(id, HIDDEN);
        } else {
            self.document.add_class(id, HIDDEN);
        }
    }

    fn apply_indicator(&self, id: &str, state: IndicatorState, accent: &str) {
        match state {
            IndicatorState::Shown => {
                self.document.remove_class(id, HIDDEN);
                self.document.add_class(id, accent);
            }
            IndicatorState::Hidden => self.document.add_class(id, HIDDEN),
            IndicatorState::Reset => {
                self.document.add_class(id, HIDDEN);
                self.document.remove_class(id, SUCCESS_ICON);
                self.document.remove_class(id, ERROR_ICON);
            }
        }
    }

    fn apply_feedback(&self, id: &str, feedback: &Feedback) {
        let class_name = match feedback {
            Feedback::Cleared => String::new(),
            Feedback::Text { tone, .. } => text_feedback_class(*tone),
            Feedback::Panel(_) => "small mt-1".to_string(),
        };
        self.document.set_class_name(id, &class_name);
        self.document.set_html(id, feedback_html(feedback));
    }

    fn apply_input(&self, id: &str, mark: InputMark) {
        match mark {
            InputMark::Valid => {
                self.document.remove_class(id, IS_INVALID);
                self.document.add_class(id, IS_VALID);
            }
            InputMark::Invalid => {
                self.document.remove_class(id, IS_VALID);
                self.document.add_class(id, IS_INVALID);
            }
            InputMark::Neutral => {
                self.document.remove_class(id, IS_VALID);
                self.document.remove_class(id, IS_INVALID);
            }
        }
    }
}

impl RegistrationView for DocumentRegistrationView {
    fn apply_availability(&self, field: AvailabilityField, decoration: &AvailabilityDecoration) {
        let ids = self.binding.availability(field);

        self.set_visible(&ids.spinner_id, decoration.spinner);
        self.apply_indicator(&ids.check_id, decoration.check, SUCCESS_ICON);
        self.apply_indicator(&ids.cross_id, decoration.cross, ERROR_ICON);

        if let Some(feedback) = &decoration.feedback {
            self.apply_feedback(&ids.feedback_id, feedback);
        }
        if let Some(mark) = decoration.input {
            self.apply_input(&ids.input_id, mark);
        }
    }

    fn apply_password(&self, decoration: &PasswordDecoration) {
        if let Some(bar) = decoration.strength_bar {
            self.document
                .set_class_name(&self.binding.strength_bar_id, &strength_bar_class(bar));
        }

        if let Some(lines) = &decoration.suggestions {
            let id = &self.binding.password_suggestions_id;
            let class_name = if lines.is_empty() { "" } else { SUGGESTIONS_CLASS };
            self.document.set_class_name(id, class_name);
            self.document.set_html(id, suggestions_html(lines));
        }

        self.apply_feedback(&self.binding.password_feedback_id, &decoration.feedback);

        if let Some(mark) = decoration.input {
            self.apply_input(&self.binding.password_input_id, mark);
        }
    }
}
