use std::fmt;

use thiserror::Error;

/// Category of a failed exchange, independent of the detail message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeErrorKind {
    Transport,
    RemoteRejected,
    Malformed,
    Encoding,
}

impl fmt::Display for ExchangeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeErrorKind::Transport => write!(f, "transport"),
            ExchangeErrorKind::RemoteRejected => write!(f, "remote_rejected"),
            ExchangeErrorKind::Malformed => write!(f, "malformed"),
            ExchangeErrorKind::Encoding => write!(f, "encoding"),
        }
    }
}

/// Errors from a single message round trip.
///
/// All variants are recoverable at turn granularity: the session reports
/// them and keeps reading input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    #[error("error sending message: {0}")]
    Transport(String),

    #[error("remote rejected the message: {status}")]
    RemoteRejected { status: String },

    #[error("error decoding response: {0}")]
    Malformed(String),

    #[error("error encoding request body: {0}")]
    Encoding(String),
}

impl ExchangeError {
    pub fn kind(&self) -> ExchangeErrorKind {
        match self {
            ExchangeError::Transport(_) => ExchangeErrorKind::Transport,
            ExchangeError::RemoteRejected { .. } => ExchangeErrorKind::RemoteRejected,
            ExchangeError::Malformed(_) => ExchangeErrorKind::Malformed,
            ExchangeError::Encoding(_) => ExchangeErrorKind::Encoding,
        }
    }
}

/// Errors from resolving a display name to a conversation target.
///
/// Always fatal to session start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no Nomi found with the name: {name}")]
    NotFound { name: String },

    #[error("error making request: {0}")]
    Transport(String),

    #[error("error fetching Nomis: {status}")]
    RemoteRejected { status: String },

    #[error("error decoding response: {0}")]
    Malformed(String),
}

/// Errors from assembling the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("NOMI_API_KEY is not set (export it or add api_key to {config_path})")]
    MissingApiKey { config_path: String },

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_error_display() {
        let err = ExchangeError::RemoteRejected {
            status: "500 Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "remote rejected the message: 500 Internal Server Error"
        );
        assert_eq!(err.kind(), ExchangeErrorKind::RemoteRejected);
    }

    #[test]
    fn test_exchange_error_kinds() {
        assert_eq!(
            ExchangeError::Transport("refused".into()).kind(),
            ExchangeErrorKind::Transport
        );
        assert_eq!(
            ExchangeError::Malformed("eof".into()).kind(),
            ExchangeErrorKind::Malformed
        );
        assert_eq!(
            ExchangeError::Encoding("bad".into()).kind(),
            ExchangeErrorKind::Encoding
        );
    }

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::NotFound {
            name: "Aria".to_string(),
        };
        assert_eq!(err.to_string(), "no Nomi found with the name: Aria");
    }

    #[test]
    fn test_config_error_mentions_path() {
        let err = ConfigError::MissingApiKey {
            config_path: "/home/me/.nomi/config.toml".to_string(),
        };
        assert!(err.to_string().contains("/home/me/.nomi/config.toml"));
    }
}
