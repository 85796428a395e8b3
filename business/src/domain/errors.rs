/// Errors raised by the remote catalog gateway.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.unreachable")]
    Unreachable,
    #[error("gateway.not_found")]
    NotFound,
    #[error("gateway.status")]
    Status { status: u16, message: String },
    #[error("gateway.rejected")]
    Rejected(String),
    #[error("gateway.invalid_request")]
    InvalidRequest(String),
    #[error("gateway.invalid_response")]
    InvalidResponse(String),
}

impl GatewayError {
    pub fn unreachable() -> Self {
        GatewayError::Unreachable
    }
    pub fn not_found() -> Self {
        GatewayError::NotFound
    }
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        GatewayError::Status {
            status,
            message: message.into(),
        }
    }
    pub fn rejected(message: impl Into<String>) -> Self {
        GatewayError::Rejected(message.into())
    }
    pub fn invalid_request(message: impl Into<String>) -> Self {
        GatewayError::InvalidRequest(message.into())
    }
    pub fn invalid_response(message: impl Into<String>) -> Self {
        GatewayError::InvalidResponse(message.into())
    }
}
