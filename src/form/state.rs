//! Form page state machine — tracks which page is visible.

use serde::{Deserialize, Serialize};

/// The four pages of the intake form.
///
/// Progresses linearly: Basic → Career → Preference → Extra. There is no
/// backward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FormStep {
    /// Name, gender, age, contact.
    Basic,
    /// Location, industry, job role.
    Career,
    /// Preference type and the investment/incubation details.
    Preference,
    /// Net worth and expected investment.
    Extra,
}

impl FormStep {
    pub const ALL: [FormStep; 4] = [Self::Basic, Self::Career, Self::Preference, Self::Extra];

    /// 1-based page number.
    pub fn number(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Career => 2,
            Self::Preference => 3,
            Self::Extra => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Basic),
            2 => Some(Self::Career),
            3 => Some(Self::Preference),
            4 => Some(Self::Extra),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<FormStep> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<FormStep> {
        Self::from_number(self.number() - 1)
    }

    /// DOM id of the page container, `step-<n>`.
    pub fn container_id(&self) -> String {
        format!("step-{}", self.number())
    }
}

impl Default for FormStep {
    fn default() -> Self {
        Self::Basic
    }
}

impl From<FormStep> for u8 {
    fn from(step: FormStep) -> Self {
        step.number()
    }
}

impl TryFrom<u8> for FormStep {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n).ok_or_else(|| format!("No form page {n}"))
    }
}

impl std::fmt::Display for FormStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Client-side page state. Exactly one page is visible at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPageState {
    /// Currently visible page.
    pub current: FormStep,
    /// Set once the server accepted the final page, redirect or not.
    pub completed: bool,
}

impl FormPageState {
    /// Make `target` the visible page. Whether the move is allowed is decided
    /// by the server acknowledging the page being left, not by this state.
    pub fn show(&mut self, target: FormStep) {
        self.current = target;
    }
}
