//! State for the view store.

use std::fmt;

use serde::Serialize;

use crate::mvi::UiState;

/// Colour choice shown by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Red,
    Orange,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Orange, Color::Yellow];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
        }
    }

    /// Parse a colour name, ignoring ASCII case.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete view state record.
///
/// Every transition produces a whole new record; there are no partial
/// updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub count: i64,
    pub text: String,
    pub color: Color,
    pub is_good: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            count: 0,
            text: "hello".to_string(),
            color: Color::Red,
            is_good: true,
        }
    }
}

impl UiState for ViewState {}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={} text={:?} color={} is_good={}",
            self.count, self.text, self.color, self.is_good
        )
    }
}
