//! Transfer Status and Orchestration Phases
//!
//! Status strings match the `transfers.status` column.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Persisted transfer status
///
/// Terminal states: COMPLETED, FAILED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    /// Settled by the provider, awaiting the status callback
    Pending,
    /// Terminal: provider confirmed the transfer
    Completed,
    /// Terminal: provider reported failure
    Failed,
}

impl TransferStatus {
    /// Check if this is a terminal state (no more transitions possible)
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferStatus::Completed | TransferStatus::Failed)
    }

    /// Monotone transition rule: only PENDING may move, and only to a terminal state
    pub fn can_transition_to(&self, next: TransferStatus) -> bool {
        *self == TransferStatus::Pending && next.is_terminal()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "PENDING",
            TransferStatus::Completed => "COMPLETED",
            TransferStatus::Failed => "FAILED",
        }
    }

    /// Map the provider's callback vocabulary onto a terminal status.
    ///
    /// Returns `None` for anything unrecognized, including `PENDING`:
    /// a callback must always settle the transfer one way or the other.
    pub fn from_provider(status: &str) -> Option<Self> {
        match status.trim().to_ascii_uppercase().as_str() {
            "COMPLETED" | "SUCCESS" | "SUCCEEDED" | "SETTLED" => Some(TransferStatus::Completed),
            "FAILED" | "FAILURE" | "REJECTED" | "DECLINED" => Some(TransferStatus::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransferStatus {
    type Err = String;

    /// Parse the stored column value (exact match)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(TransferStatus::Pending),
            "COMPLETED" => Ok(TransferStatus::Completed),
            "FAILED" => Ok(TransferStatus::Failed),
            other => Err(format!("Invalid transfer status: {}", other)),
        }
    }
}

impl TryFrom<String> for TransferStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Orchestration phase of a single create-transfer request.
///
/// Not persisted; carried in log fields so a failure can be traced to the
/// step that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Validating,
    Settling,
    Recording,
    Done,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Validating => "VALIDATING",
            Phase::Settling => "SETTLING",
            Phase::Recording => "RECORDING",
            Phase::Done => "DONE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(TransferStatus::Completed.is_terminal());
        assert!(TransferStatus::Failed.is_terminal());
        assert!(!TransferStatus::Pending.is_terminal());
    }

    #[test]
    fn test_transitions_are_monotone() {
        assert!(TransferStatus::Pending.can_transition_to(TransferStatus::Completed));
        assert!(TransferStatus::Pending.can_transition_to(TransferStatus::Failed));
        assert!(!TransferStatus::Pending.can_transition_to(TransferStatus::Pending));
        assert!(!TransferStatus::Completed.can_transition_to(TransferStatus::Failed));
        assert!(!TransferStatus::Failed.can_transition_to(TransferStatus::Completed));
    }

    #[test]
    fn test_provider_vocabulary() {
        assert_eq!(
            TransferStatus::from_provider("success"),
            Some(TransferStatus::Completed)
        );
        assert_eq!(
            TransferStatus::from_provider(" COMPLETED "),
            Some(TransferStatus::Completed)
        );
        assert_eq!(
            TransferStatus::from_provider("Rejected"),
            Some(TransferStatus::Failed)
        );
        assert_eq!(TransferStatus::from_provider("PENDING"), None);
        assert_eq!(TransferStatus::from_provider("refunded"), None);
        assert_eq!(TransferStatus::from_provider(""), None);
    }

    #[test]
    fn test_column_parse() {
        assert_eq!(
            "FAILED".parse::<TransferStatus>().unwrap(),
            TransferStatus::Failed
        );
        assert!("failed".parse::<TransferStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_column_names() {
        let json = serde_json::to_string(&TransferStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
    }
}
