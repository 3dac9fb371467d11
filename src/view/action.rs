//! Actions that can be dispatched to the view store.

use std::str::FromStr;

use crate::error::StoreError;
use crate::mvi::Action;

use super::state::Color;

/// Closed set of view transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetCount(i64),
    SetText(String),
    SetColor(Color),
    /// Flip `is_good`.
    ToggleGood,
}

impl Action for ViewAction {}

impl ViewAction {
    pub const SET_COUNT: &'static str = "set-count";
    pub const SET_TEXT: &'static str = "set-text";
    pub const SET_COLOR: &'static str = "set-color";
    pub const TOGGLE_GOOD: &'static str = "toggle-good";

    /// Textual tag of this variant, as accepted by `FromStr`.
    pub fn tag(&self) -> &'static str {
        match self {
            ViewAction::SetCount(_) => Self::SET_COUNT,
            ViewAction::SetText(_) => Self::SET_TEXT,
            ViewAction::SetColor(_) => Self::SET_COLOR,
            ViewAction::ToggleGood => Self::TOGGLE_GOOD,
        }
    }
}

/// Decodes `tag[=payload]`, e.g. `set-count=5` or `toggle-good`.
///
/// This is the only place an action tag arrives untyped, so an unknown tag
/// fails with [`StoreError::UnhandledAction`] instead of being skipped.
impl FromStr for ViewAction {
    type Err = StoreError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (tag, payload) = match input.split_once('=') {
            Some((tag, payload)) => (tag.trim(), Some(payload)),
            None => (input.trim(), None),
        };

        let invalid = |value: &str, reason: String| StoreError::InvalidPayload {
            tag: tag.to_string(),
            value: value.to_string(),
            reason,
        };

        match tag {
            Self::SET_COUNT => {
                let value = require(tag, payload)?;
                value
                    .trim()
                    .parse::<i64>()
                    .map(ViewAction::SetCount)
                    .map_err(|e| invalid(value, e.to_string()))
            }
            Self::SET_TEXT => {
                require(tag, payload).map(|value| ViewAction::SetText(value.to_string()))
            }
            Self::SET_COLOR => {
                let value = require(tag, payload)?;
                Color::parse(value).map(ViewAction::SetColor).ok_or_else(|| {
                    invalid(value, "expected one of red, orange, yellow".to_string())
                })
            }
            Self::TOGGLE_GOOD => match payload {
                None => Ok(ViewAction::ToggleGood),
                Some(value) => Err(invalid(value, "takes no payload".to_string())),
            },
            other => Err(StoreError::UnhandledAction {
                tag: other.to_string(),
            }),
        }
    }
}

fn require<'a>(tag: &str, payload: Option<&'a str>) -> Result<&'a str, StoreError> {
    payload.ok_or_else(|| StoreError::MissingPayload {
        tag: tag.to_string(),
    })
}
