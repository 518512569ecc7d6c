use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    ActivityNotFound,
    AlreadySignedUp,
    NotSignedUp,
    ActivityFull,
    InvalidInput,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ActivityNotFound => "ACTIVITY_NOT_FOUND",
            ErrorCode::AlreadySignedUp => "ALREADY_SIGNED_UP",
            ErrorCode::NotSignedUp => "NOT_SIGNED_UP",
            ErrorCode::ActivityFull => "ACTIVITY_FULL",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ActivityNotFound => ErrorCode::ActivityNotFound,
            AppError::AlreadySignedUp => ErrorCode::AlreadySignedUp,
            AppError::NotSignedUp => ErrorCode::NotSignedUp,
            AppError::ActivityFull => ErrorCode::ActivityFull,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
