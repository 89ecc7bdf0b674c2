//! Two-set visibility swap (`.initial-shown` / `.initial-hidden`)

/// Which of the two element sets is currently visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    /// `.initial-shown` visible, `.initial-hidden` hidden
    #[default]
    Initial,
    /// `.initial-hidden` visible, `.initial-shown` hidden
    Swapped,
}

impl VisibilityState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Initial => Self::Swapped,
            Self::Swapped => Self::Initial,
        }
    }

    /// Whether `.initial-shown` elements carry the hidden class
    pub fn hides_initial_shown(self) -> bool {
        self == Self::Swapped
    }

    /// Whether `.initial-hidden` elements carry the hidden class
    pub fn hides_initial_hidden(self) -> bool {
        self == Self::Initial
    }
}
