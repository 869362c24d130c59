//! Cron expression parsing.
//!
//! Expands the five schedule fields of a cron expression into the concrete values they match.

pub mod dispatcher;
pub mod errors;
pub mod expression;
pub mod field;
pub mod parser;
pub mod syntax;

pub use dispatcher::{resolve, resolve_with};
pub use errors::{CronParseError, CronResult, ErrorKind, USAGE_INFO};
pub use expression::{ParsedExpression, NAME_COLUMN_WIDTH};
pub use field::{ScheduleField, EXPRESSION_PARTS};
pub use parser::{parse_expression, ExpressionParser};
pub use syntax::FieldSyntax;
