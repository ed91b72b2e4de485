use thiserror::Error;

/// Failures talking to the settlement provider.
///
/// Messages name the operation but never carry request headers, so the
/// bearer credential cannot leak through `Display`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettlementError {
    #[error("settlement provider unreachable during {operation}: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("settlement provider rejected {operation} (HTTP {status})")]
    Rejected { operation: &'static str, status: u16 },

    #[error("invalid {operation} response from settlement provider: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },
}

impl SettlementError {
    pub fn operation(&self) -> &'static str {
        match self {
            SettlementError::Transport { operation, .. }
            | SettlementError::Rejected { operation, .. }
            | SettlementError::Decode { operation, .. } => operation,
        }
    }
}
