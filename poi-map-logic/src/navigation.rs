use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Turn-by-turn progress through a list of `steps` instructions. Navigation is linear: it
/// never wraps around and never finishes on its own.
pub enum DriveState {
    /// No turn-by-turn in progress
    #[default]
    Inactive,
    /// Showing the instruction at this index
    Active(usize),
}

impl DriveState {
    /// Begin (or restart) driving at the first step. A route with one step or fewer can't be
    /// driven, so the state is left alone.
    pub fn start(self, steps: usize) -> Self {
        if steps > 1 { Self::Active(0) } else { self }
    }

    /// Advance one step, staying put on the last one
    pub fn next(self, steps: usize) -> Self {
        match self {
            Self::Active(i) if i + 1 < steps => Self::Active(i + 1),
            other => other,
        }
    }

    /// Go back one step, staying put on the first one
    pub fn prev(self) -> Self {
        match self {
            Self::Active(i) if i > 0 => Self::Active(i - 1),
            other => other,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Index of the current step, 0 when not driving
    pub fn current_step(&self) -> usize {
        match self {
            Self::Active(i) => *i,
            Self::Inactive => 0,
        }
    }
}
