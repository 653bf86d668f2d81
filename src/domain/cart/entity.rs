//! Cart domain entities

use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Largest quantity a single cart line may hold
pub const MAX_QUANTITY: u32 = 99;

/// Form action fragment that marks a form as an add-to-cart form
const ADD_TO_CART_ACTION: &str = "add_to_cart";

/// Class name that marks a form as an add-to-cart form
const ADD_TO_CART_CLASS: &str = "add-to-cart-form";

/// Hidden form field carrying the CSRF token
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").expect("valid leading integer pattern"));

/// Identifier of a cart line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Quantity of a cart line, always within `0..=MAX_QUANTITY`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);
    pub const MAX: Quantity = Quantity(MAX_QUANTITY);

    /// Clamps any integer into the allowed range
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, MAX_QUANTITY as i64) as u32)
    }

    /// Parses user input the way a browser's `parseInt` would, then clamps.
    ///
    /// Leading whitespace and a sign are accepted and parsing stops at the first
    /// non-digit. Input without leading digits yields zero.
    pub fn parse_lenient(raw: &str) -> Self {
        let Some(captures) = LEADING_INTEGER.captures(raw) else {
            return Self::ZERO;
        };

        let negative = &captures[1] == "-";
        let magnitude = match captures[2].parse::<i64>() {
            Ok(value) => value,
            // Digit runs too long for i64 are still "large", so saturate.
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
            Err(_) => return Self::ZERO,
        };

        if negative {
            Self::ZERO
        } else {
            Self::clamped(magnitude)
        }
    }

    /// Moves one step in the given direction, staying in range
    pub fn step(self, direction: QuantityDirection) -> Self {
        match direction {
            QuantityDirection::Increase => Self((self.0 + 1).min(MAX_QUANTITY)),
            QuantityDirection::Decrease => Self(self.0.saturating_sub(1)),
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a +/- quantity button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityDirection {
    Increase,
    Decrease,
}

impl std::str::FromStr for QuantityDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase" | "+" => Ok(Self::Increase),
            "decrease" | "-" => Ok(Self::Decrease),
            other => Err(format!("unknown quantity direction '{}'", other)),
        }
    }
}

/// A form submission captured from the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedForm {
    /// Element id of the form, used to address its submit button
    pub id: String,
    /// Form action URL
    pub action: String,
    /// Class names on the form element
    pub class_names: Vec<String>,
    /// Field name/value pairs in document order
    pub fields: Vec<(String, String)>,
}

impl SubmittedForm {
    pub fn new(id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            class_names: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_names.push(class_name.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Whether this form should be intercepted as an add-to-cart submission
    pub fn is_add_to_cart(&self) -> bool {
        self.action.contains(ADD_TO_CART_ACTION)
            || self.class_names.iter().any(|c| c == ADD_TO_CART_CLASS)
    }

    /// Value of the first field with the given name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// CSRF token carried by the form's hidden field, if any
    pub fn csrf_token(&self) -> Option<&str> {
        self.field(CSRF_FIELD).filter(|token| !token.is_empty())
    }
}

/// Visual state of an add-to-cart submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Original label, enabled
    #[default]
    Idle,
    /// Request in flight
    Busy,
    /// Item added, waiting to revert
    Added,
}

impl ButtonState {
    pub fn is_disabled(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Result of offering a form submission to the cart controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was an add-to-cart form and was handled asynchronously
    Intercepted,
    /// The form is not ours; let the page submit it normally
    Ignored,
}
