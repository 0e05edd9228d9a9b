use thiserror::Error;

/// Ошибка обращения к сервису логов
///
/// Единственный вид ошибок времени выполнения: показывается пользователю
/// уведомлением, повторно запрос не отправляется.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error: {status}")]
    Status { status: u16 },
    #[error("Log {0} not found")]
    NotFound(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn from_status(status: u16, id: Option<&str>) -> Self {
        match (status, id) {
            (404, Some(id)) => ApiError::NotFound(id.to_string()),
            _ => ApiError::Status { status },
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
