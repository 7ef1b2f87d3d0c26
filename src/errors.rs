use std::fmt;

/// Transport-level failure of an API call. Never retried; every failure is
/// terminal for the user action that issued it.
#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Classified outcome of an auth-related request, consumed by the calling
/// view to pick its inline messaging. Never persisted.
///
/// `Unauthorized` is handled globally by the request interceptor (session
/// wipe plus reload); it is surfaced here only so callers can recognize a
/// response that already triggered the wipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthError {
    NotFound,
    Conflict,
    Unauthorized,
    Other,
}

impl AuthError {
    #[must_use]
    pub fn classify(error: &AppError) -> Self {
        match error {
            AppError::Http { status: 404, .. } => Self::NotFound,
            AppError::Http { status: 409, .. } => Self::Conflict,
            AppError::Http { status: 401, .. } => Self::Unauthorized,
            _ => Self::Other,
        }
    }
}

impl From<AppError> for AuthError {
    fn from(error: AppError) -> Self {
        Self::classify(&error)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotFound => write!(formatter, "account not found"),
            AuthError::Conflict => write!(formatter, "account already exists"),
            AuthError::Unauthorized => write!(formatter, "unauthorized"),
            AuthError::Other => write!(formatter, "request failed"),
        }
    }
}

impl std::error::Error for AuthError {}
