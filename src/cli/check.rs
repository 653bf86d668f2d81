//! Check command - runs the signup validator against the backend

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use clap::Subcommand;

use super::{http_client, prepare, BackendArgs};
use crate::config::BackendConfig;
use crate::controller::RegistrationValidator;
use crate::domain::registration::{Field, RegistrationConfig};
use crate::infrastructure::api::HttpAccountApi;
use crate::infrastructure::http::CsrfToken;
use crate::infrastructure::timing::DebouncePolicy;
use crate::infrastructure::view::{
    Document, DocumentRegistrationView, Element, RegistrationBinding,
};

#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Check whether an email address can be registered
    Email { value: String },

    /// Check whether a username can be registered
    Username { value: String },

    /// Score a candidate password
    Password { value: String },
}

impl CheckCommand {
    fn field(&self) -> Field {
        match self {
            Self::Email { .. } => Field::Email,
            Self::Username { .. } => Field::Username,
            Self::Password { .. } => Field::Password,
        }
    }
}

/// Data attributes the signup form would carry for this backend
fn form_attributes(backend: &BackendConfig) -> HashMap<String, String> {
    HashMap::from([
        ("data-check-email-url".to_string(), backend.check_email_path.clone()),
        ("data-check-username-url".to_string(), backend.check_username_path.clone()),
        ("data-validate-password-url".to_string(), backend.validate_password_path.clone()),
    ])
}

fn signup_page(binding: &RegistrationBinding) -> Arc<Document> {
    let document = Document::new();
    for ids in [&binding.email, &binding.username] {
        document.insert(&ids.input_id, Element::new());
        document.insert(&ids.feedback_id, Element::new());
        for id in [&ids.spinner_id, &ids.check_id, &ids.cross_id] {
            document.insert(id, Element::new().with_class("d-none"));
        }
    }
    for id in [
        &binding.password_input_id,
        &binding.strength_bar_id,
        &binding.password_feedback_id,
        &binding.password_suggestions_id,
    ] {
        document.insert(id, Element::new());
    }
    Arc::new(document)
}

pub async fn run(backend: BackendArgs, command: CheckCommand) -> anyhow::Result<()> {
    let config = prepare(&backend);
    let registration = RegistrationConfig::from_data_attributes(&form_attributes(&config.backend))?;

    let binding = RegistrationBinding::from_config(&registration);
    let document = signup_page(&binding);
    let view = Arc::new(DocumentRegistrationView::new(document.clone(), binding.clone()));
    let api = HttpAccountApi::new(
        http_client(&config)?,
        &config.backend.base_url,
        &registration,
        CsrfToken::from(config.backend.csrf_token.clone()),
    );
    // A single value per invocation; send it without waiting.
    let validator = Arc::new(RegistrationValidator::new(
        Arc::new(api),
        view,
        DebouncePolicy::uniform(Duration::ZERO),
    ));

    let field = command.field();
    match &command {
        CheckCommand::Email { value } => validator.on_email_input(value).await,
        CheckCommand::Username { value } => validator.on_username_input(value).await,
        CheckCommand::Password { value } => validator.on_password_input(value).await,
    }

    println!("{:<12} {:?}", "state:", validator.state(field));
    let feedback_id = match field {
        Field::Email => &binding.email.feedback_id,
        Field::Username => &binding.username.feedback_id,
        Field::Password => {
            if let Some(bar) = document.get(&binding.strength_bar_id) {
                println!("{:<12} {}", "strength:", bar.class_name());
            }
            if let Some(html) = document
                .html(&binding.password_suggestions_id)
                .filter(|html| !html.is_empty())
            {
                println!("{:<12} {}", "suggestions:", html);
            }
            &binding.password_feedback_id
        }
    };
    if let Some(html) = document.html(feedback_id).filter(|html| !html.is_empty()) {
        println!("{:<12} {}", "feedback:", html);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_attributes_build_registration_config() {
        let backend = BackendConfig::default();
        let config = RegistrationConfig::from_data_attributes(&form_attributes(&backend)).unwrap();

        assert_eq!(config.check_email_url, backend.check_email_path);
        assert_eq!(config.validate_password_url, backend.validate_password_path);
        assert_eq!(config.password_field_id, "id_password1");
    }

    #[test]
    fn test_signup_page_has_every_bound_node() {
        let config = RegistrationConfig::from_data_attributes(&form_attributes(
            &BackendConfig::default(),
        ))
        .unwrap();
        let binding = RegistrationBinding::from_config(&config);
        let document = signup_page(&binding);

        assert!(document.has_class("email-spinner", "d-none"));
        assert!(document.contains("username-feedback"));
        assert!(document.contains("password-suggestions"));
        assert!(document.contains("id_password1"));
    }
}
