//! Signup view binding and the decorations rendered into it

use super::{AvailabilityField, Strength};

/// Page nodes the signup validator patches
pub trait RegistrationView: Send + Sync {
    /// Updates the spinner, icons, feedback and input mark of an availability field
    fn apply_availability(&self, field: AvailabilityField, decoration: &AvailabilityDecoration);

    /// Updates the strength bar, suggestions, feedback and input mark of the password field
    fn apply_password(&self, decoration: &PasswordDecoration);
}

/// Color family of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

/// Font Awesome glyphs used by feedback panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    EnvelopeOpenText,
    ExclamationTriangle,
    ExclamationCircle,
    CheckCircle,
    ShieldAlt,
    Wifi,
    ChartBar,
    Lightbulb,
    InfoCircle,
}

/// Points awarded by the strength heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub score: u32,
    pub max_score: u32,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Strength: {}/{} points", self.score, self.max_score)
    }
}

/// A structured feedback block with optional heading and score line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub tone: Tone,
    pub icon: Icon,
    pub heading: Option<&'static str>,
    pub message: String,
    pub score: Option<Score>,
}

/// Content of a field's feedback node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Cleared,
    /// A bare one-line message
    Text { tone: Tone, message: String },
    Panel(Panel),
}

impl Feedback {
    pub fn tone(&self) -> Option<Tone> {
        match self {
            Self::Cleared => None,
            Self::Text { tone, .. } => Some(*tone),
            Self::Panel(panel) => Some(panel.tone),
        }
    }

    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Self::Panel(panel) => panel.heading,
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Cleared => None,
            Self::Text { message, .. } => Some(message),
            Self::Panel(panel) => Some(&panel.message),
        }
    }
}

/// Validity class on an input element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMark {
    Valid,
    Invalid,
    /// Neither valid nor invalid
    Neutral,
}

/// Visibility of a check/cross indicator next to an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Shown,
    Hidden,
    /// Hidden with its success/error accent removed
    Reset,
}

impl IndicatorState {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Everything the validator changes on an email or username field
///
/// `None` leaves the corresponding node untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityDecoration {
    pub spinner: bool,
    pub check: IndicatorState,
    pub cross: IndicatorState,
    pub feedback: Option<Feedback>,
    pub input: Option<InputMark>,
}

/// State of the password strength bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBar {
    Neutral,
    Level(Strength),
}

/// One line in the password suggestions panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionLine {
    Improve(String),
    Details(String),
}

/// Everything the validator changes on the password field
///
/// `None` leaves the corresponding node untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDecoration {
    pub strength_bar: Option<StrengthBar>,
    pub suggestions: Option<Vec<SuggestionLine>>,
    pub feedback: Feedback,
    pub input: Option<InputMark>,
}
