use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Selector value meaning "every participant"
pub const ALL_PARTICIPANTS: &str = "All";

/// Which messages an analysis should look at
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParticipantSelector {
    /// Every message, in transcript order
    #[default]
    All,
    /// Only messages whose sender equals this name exactly
    Participant(String),
}

impl ParticipantSelector {
    pub fn participant(name: impl Into<String>) -> Self {
        ParticipantSelector::Participant(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ParticipantSelector::All)
    }

    pub fn matches(&self, sender: &str) -> bool {
        match self {
            ParticipantSelector::All => true,
            ParticipantSelector::Participant(name) => name == sender,
        }
    }
}

impl FromStr for ParticipantSelector {
    type Err = Infallible;

    /// `"All"` selects everyone; any other value is an exact sender name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_PARTICIPANTS {
            Ok(ParticipantSelector::All)
        } else {
            Ok(ParticipantSelector::Participant(s.to_string()))
        }
    }
}

impl fmt::Display for ParticipantSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantSelector::All => f.write_str(ALL_PARTICIPANTS),
            ParticipantSelector::Participant(name) => f.write_str(name),
        }
    }
}
