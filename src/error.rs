//! Error types for the lead form client.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Local validation failures for the page being left.
///
/// `Display` is the exact text shown in the step message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("联系方式必须为11位数字")]
    ContactFormat,

    #[error("年龄必须在10-120之间")]
    AgeOutOfRange,

    #[error("请填写完整第{page}页所有必填项")]
    IncompletePage { page: u8 },
}

/// The request never produced a usable reply.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Response was not a JSON object: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::ContactFormat.to_string(), "联系方式必须为11位数字");
        assert_eq!(ValidationError::AgeOutOfRange.to_string(), "年龄必须在10-120之间");
        assert_eq!(
            ValidationError::IncompletePage { page: 2 }.to_string(),
            "请填写完整第2页所有必填项"
        );
    }

    #[test]
    fn top_level_wraps_sources() {
        let err: Error = ValidationError::IncompletePage { page: 3 }.into();
        assert!(err.to_string().contains("第3页"));

        let err: Error = TransportError::Network("connection refused".into()).into();
        assert!(matches!(err, Error::Transport(_)));
    }
}
