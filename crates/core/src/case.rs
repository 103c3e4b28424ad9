use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Case priority as the backend names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CasePriority {
    PriorityUnspecified,
    PriorityInfo,
    PriorityLow,
    PriorityMedium,
    PriorityHigh,
    PriorityCritical,
}

impl CasePriority {
    pub const ALL: [Self; 6] = [
        Self::PriorityUnspecified,
        Self::PriorityInfo,
        Self::PriorityLow,
        Self::PriorityMedium,
        Self::PriorityHigh,
        Self::PriorityCritical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PriorityUnspecified => "PriorityUnspecified",
            Self::PriorityInfo => "PriorityInfo",
            Self::PriorityLow => "PriorityLow",
            Self::PriorityMedium => "PriorityMedium",
            Self::PriorityHigh => "PriorityHigh",
            Self::PriorityCritical => "PriorityCritical",
        }
    }
}

impl fmt::Display for CasePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a priority name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case priority '{0}'")]
pub struct UnknownPriority(pub String);

impl FromStr for CasePriority {
    type Err = UnknownPriority;

    /// Accepts the backend name (`PriorityHigh`) or the short form (`high`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| {
                let name = p.as_str();
                name.eq_ignore_ascii_case(wanted)
                    || name
                        .strip_prefix("Priority")
                        .is_some_and(|short| short.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| UnknownPriority(s.to_owned()))
    }
}

/// Why a case was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloseReason {
    Malicious,
    NotMalicious,
    Maintenance,
    Inconclusive,
}

impl CloseReason {
    pub const ALL: [Self; 4] = [
        Self::Malicious,
        Self::NotMalicious,
        Self::Maintenance,
        Self::Inconclusive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Malicious => "Malicious",
            Self::NotMalicious => "NotMalicious",
            Self::Maintenance => "Maintenance",
            Self::Inconclusive => "Inconclusive",
        }
    }
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown close reason '{0}'; expected one of Malicious, NotMalicious, Maintenance, Inconclusive")]
pub struct UnknownCloseReason(pub String);

impl FromStr for CloseReason {
    type Err = UnknownCloseReason;

    /// Case-insensitive; `not_malicious` and `not-malicious` are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().chars().filter(|c| !matches!(c, '_' | '-' | ' ')).collect();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownCloseReason(s.to_owned()))
    }
}
