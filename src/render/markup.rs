//! Bootstrap / Font Awesome markup for the server-rendered templates

use crate::domain::cart::ButtonState;
use crate::domain::registration::{
    Feedback, Icon, Panel, Score, StrengthBar, SuggestionLine, Tone,
};

/// Class of the password suggestions node once populated
pub const SUGGESTIONS_CLASS: &str = "small mt-1 text-muted";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn icon_class(icon: Icon) -> &'static str {
    match icon {
        Icon::EnvelopeOpenText => "fas fa-envelope-open-text",
        Icon::ExclamationTriangle => "fas fa-exclamation-triangle",
        Icon::ExclamationCircle => "fas fa-exclamation-circle",
        Icon::CheckCircle => "fas fa-check-circle",
        Icon::ShieldAlt => "fas fa-shield-alt",
        Icon::Wifi => "fas fa-wifi",
        Icon::ChartBar => "fas fa-chart-bar",
        Icon::Lightbulb => "fas fa-lightbulb",
        Icon::InfoCircle => "fas fa-info-circle",
    }
}

fn icon_html(icon: Icon) -> String {
    format!(r#"<i class="{} me-1"></i>"#, icon_class(icon))
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "validation-success",
        Tone::Warning => "validation-warning",
        Tone::Error => "validation-error",
    }
}

fn score_html(score: &Score) -> String {
    format!(
        r#"<div class="password-progress">{}{}</div>"#,
        icon_html(Icon::ChartBar),
        escape_html(&score.to_string())
    )
}

fn panel_html(panel: &Panel) -> String {
    let mut html = match panel.heading {
        Some(heading) => format!(
            r#"<div class="invalid-input-message">{}{}</div><div class="{} small mt-1">{}</div>"#,
            icon_html(panel.icon),
            escape_html(heading),
            tone_class(panel.tone),
            escape_html(&panel.message)
        ),
        None => format!(
            r#"<div class="{} small">{}{}</div>"#,
            tone_class(panel.tone),
            icon_html(panel.icon),
            escape_html(&panel.message)
        ),
    };

    if let Some(score) = &panel.score {
        html.push_str(&score_html(score));
    }
    html
}

/// Inner HTML of a feedback node
pub fn feedback_html(feedback: &Feedback) -> String {
    match feedback {
        Feedback::Cleared => String::new(),
        Feedback::Text { message, .. } => escape_html(message),
        Feedback::Panel(panel) => panel_html(panel),
    }
}

/// Class name a feedback node takes for one-line messages
pub fn text_feedback_class(tone: Tone) -> String {
    format!("small mt-1 {}", tone_class(tone))
}

/// Inner HTML of the password suggestions node
pub fn suggestions_html(lines: &[SuggestionLine]) -> String {
    lines
        .iter()
        .map(|line| match line {
            SuggestionLine::Improve(text) => format!(
                "<div>{}<strong>Improve:</strong> {}</div>",
                icon_html(Icon::Lightbulb),
                escape_html(text)
            ),
            SuggestionLine::Details(text) => format!(
                r#"<div class="mt-1">{}{}</div>"#,
                icon_html(Icon::InfoCircle),
                escape_html(text)
            ),
        })
        .collect()
}

/// Full class name of the strength bar
pub fn strength_bar_class(bar: StrengthBar) -> String {
    match bar {
        StrengthBar::Neutral => "strength-bar".to_string(),
        StrengthBar::Level(strength) => format!("strength-bar strength-{}", strength),
    }
}

/// Inner HTML of an add-to-cart button; `None` means the original label
pub fn button_html(state: ButtonState) -> Option<&'static str> {
    match state {
        ButtonState::Idle => None,
        ButtonState::Busy => Some(r#"<i class="fas fa-spinner fa-spin me-2"></i>Adding..."#),
        ButtonState::Added => Some(r#"<i class="fas fa-check me-2"></i>Added!"#),
    }
}
