use thiserror::Error;

use crate::field::ScheduleField;

/// Layout hint shown whenever the expression does not have the expected shape.
pub const USAGE_INFO: &str = "Usage: \"MINUTE_EXPRESSION HOUR_EXPRESSION DAY_OF_MONTH_EXPRESSION MONTH_EXPRESSION DAY_OF_WEEK_EXPRESSION COMMAND\"";

/// Errors produced while parsing a cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronParseError {
    #[error("{}", USAGE_INFO)]
    Usage,

    #[error("Unsupported expression part for {} part: {token}", .field.name())]
    UnsupportedSyntax { field: ScheduleField, token: String },

    #[error(
        "Expression part {token} for {} part produces a value, which is out of range {min}..{max}",
        .field.name()
    )]
    OutOfRange {
        field: ScheduleField,
        token: String,
        min: u32,
        max: u32,
    },

    #[error(
        "Range {token} for {} part start must be less or equal to end",
        .field.name()
    )]
    InvalidOrder { field: ScheduleField, token: String },

    #[error("Expression part {token} for {} part has a step of zero", .field.name())]
    InvalidStep { field: ScheduleField, token: String },

    #[error(
        "Expression part {token} for {} part is not a valid number for the field",
        .field.name()
    )]
    MalformedNumber { field: ScheduleField, token: String },
}

/// Coarse classification of [`CronParseError`], handy for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    UnsupportedSyntax,
    OutOfRange,
    InvalidOrder,
    InvalidStep,
    MalformedNumber,
}

/// Result alias used across the parser.
pub type CronResult<T> = std::result::Result<T, CronParseError>;

impl CronParseError {
    pub fn usage() -> Self {
        Self::Usage
    }

    pub fn unsupported<S: Into<String>>(field: ScheduleField, token: S) -> Self {
        Self::UnsupportedSyntax {
            field,
            token: token.into(),
        }
    }

    pub fn out_of_range<S: Into<String>>(field: ScheduleField, token: S) -> Self {
        Self::OutOfRange {
            field,
            token: token.into(),
            min: field.lower_bound(),
            max: field.upper_bound(),
        }
    }

    pub fn invalid_order<S: Into<String>>(field: ScheduleField, token: S) -> Self {
        Self::InvalidOrder {
            field,
            token: token.into(),
        }
    }

    pub fn invalid_step<S: Into<String>>(field: ScheduleField, token: S) -> Self {
        Self::InvalidStep {
            field,
            token: token.into(),
        }
    }

    pub fn malformed_number<S: Into<String>>(field: ScheduleField, token: S) -> Self {
        Self::MalformedNumber {
            field,
            token: token.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage => ErrorKind::Usage,
            Self::UnsupportedSyntax { .. } => ErrorKind::UnsupportedSyntax,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InvalidOrder { .. } => ErrorKind::InvalidOrder,
            Self::InvalidStep { .. } => ErrorKind::InvalidStep,
            Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
        }
    }

    /// The schedule field the error belongs to, if any.
    pub fn field(&self) -> Option<ScheduleField> {
        match self {
            Self::Usage => None,
            Self::UnsupportedSyntax { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidOrder { field, .. }
            | Self::InvalidStep { field, .. }
            | Self::MalformedNumber { field, .. } => Some(*field),
        }
    }
}
