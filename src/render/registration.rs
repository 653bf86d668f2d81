//! Validation results to field decorations

use crate::domain::registration::{
    AvailabilityDecoration, AvailabilityField, AvailabilityResult, Feedback, Icon,
    IndicatorState, InputMark, Panel, PasswordCheck, PasswordDecoration, Score, StrengthBar,
    SuggestionLine, Tone,
};

const CONNECTION_ERROR: &str = "Connection Error";

fn rejection_heading(field: AvailabilityField) -> (Icon, &'static str) {
    match field {
        AvailabilityField::Email => (Icon::EnvelopeOpenText, "Invalid Email"),
        AvailabilityField::Username => (Icon::ExclamationTriangle, "Invalid Input"),
    }
}

fn connection_message(field: AvailabilityField) -> &'static str {
    match field {
        AvailabilityField::Email => "Error checking email availability",
        AvailabilityField::Username => "Error checking username availability",
    }
}

fn connection_panel(message: &str) -> Feedback {
    Feedback::Panel(Panel {
        tone: Tone::Error,
        icon: Icon::Wifi,
        heading: Some(CONNECTION_ERROR),
        message: message.to_string(),
        score: None,
    })
}

/// Spinner on while the check is in flight
pub fn availability_pending() -> AvailabilityDecoration {
    AvailabilityDecoration {
        spinner: true,
        check: IndicatorState::Hidden,
        cross: IndicatorState::Hidden,
        feedback: None,
        input: None,
    }
}

pub fn availability_result(
    field: AvailabilityField,
    result: &AvailabilityResult,
) -> AvailabilityDecoration {
    if result.is_valid {
        return AvailabilityDecoration {
            spinner: false,
            check: IndicatorState::Shown,
            cross: IndicatorState::Hidden,
            feedback: Some(Feedback::Text {
                tone: Tone::Success,
                message: result.message.clone(),
            }),
            input: Some(InputMark::Valid),
        };
    }

    let (icon, heading) = rejection_heading(field);
    AvailabilityDecoration {
        spinner: false,
        check: IndicatorState::Hidden,
        cross: IndicatorState::Shown,
        feedback: Some(Feedback::Panel(Panel {
            tone: Tone::Error,
            icon,
            heading: Some(heading),
            message: result.message.clone(),
            score: None,
        })),
        input: Some(InputMark::Invalid),
    }
}

/// The check could not be completed; the input keeps its current mark
pub fn availability_network_error(field: AvailabilityField) -> AvailabilityDecoration {
    AvailabilityDecoration {
        spinner: false,
        check: IndicatorState::Hidden,
        cross: IndicatorState::Shown,
        feedback: Some(connection_panel(connection_message(field))),
        input: None,
    }
}

pub fn availability_reset() -> AvailabilityDecoration {
    AvailabilityDecoration {
        spinner: false,
        check: IndicatorState::Reset,
        cross: IndicatorState::Reset,
        feedback: Some(Feedback::Cleared),
        input: Some(InputMark::Neutral),
    }
}

fn suggestion_lines(check: &PasswordCheck) -> Vec<SuggestionLine> {
    let present = |text: &Option<String>| {
        text.as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
    };

    let mut lines = Vec::with_capacity(2);
    if let Some(suggestions) = present(&check.suggestions) {
        lines.push(SuggestionLine::Improve(suggestions));
    }
    if let Some(details) = present(&check.details) {
        lines.push(SuggestionLine::Details(details));
    }
    lines
}

fn password_feedback(check: &PasswordCheck) -> (Feedback, InputMark) {
    let score = Score {
        score: check.score,
        max_score: check.max_score,
    };

    if check.is_strong_and_valid() {
        let panel = Panel {
            tone: Tone::Success,
            icon: Icon::CheckCircle,
            heading: None,
            message: check.message.clone(),
            score: Some(score),
        };
        return (Feedback::Panel(panel), InputMark::Valid);
    }

    if !check.is_valid {
        let panel = if check.django_error {
            Panel {
                tone: Tone::Error,
                icon: Icon::ExclamationTriangle,
                heading: Some("Invalid Password"),
                message: check.message.clone(),
                score: None,
            }
        } else {
            Panel {
                tone: Tone::Error,
                icon: Icon::ShieldAlt,
                heading: Some("Weak Password"),
                message: check.message.clone(),
                score: Some(score),
            }
        };
        return (Feedback::Panel(panel), InputMark::Invalid);
    }

    let panel = Panel {
        tone: Tone::Warning,
        icon: Icon::ExclamationCircle,
        heading: None,
        message: check.message.clone(),
        score: Some(score),
    };
    (Feedback::Panel(panel), InputMark::Neutral)
}

pub fn password_result(check: &PasswordCheck) -> PasswordDecoration {
    let (feedback, input) = password_feedback(check);
    PasswordDecoration {
        strength_bar: Some(StrengthBar::Level(check.strength)),
        suggestions: Some(suggestion_lines(check)),
        feedback,
        input: Some(input),
    }
}

/// Only the feedback changes; the bar and suggestions keep their last state
pub fn password_network_error() -> PasswordDecoration {
    PasswordDecoration {
        strength_bar: None,
        suggestions: None,
        feedback: connection_panel("Error checking password strength"),
        input: None,
    }
}

pub fn password_reset() -> PasswordDecoration {
    PasswordDecoration {
        strength_bar: Some(StrengthBar::Neutral),
        suggestions: Some(Vec::new()),
        feedback: Feedback::Cleared,
        input: Some(InputMark::Neutral),
    }
}
