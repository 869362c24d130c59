use tracing::debug;

use crate::errors::{CronParseError, CronResult};
use crate::field::ScheduleField;
use crate::syntax::FieldSyntax;

/// Expands a single field token using the default variant order.
pub fn resolve(token: &str, field: ScheduleField) -> CronResult<Vec<u32>> {
    resolve_with(&FieldSyntax::ALL, token, field)
}

/// Expands a single field token with the first variant in `variants` that recognizes it.
///
/// Expansion failures of the selected variant are returned as is; no other variant is tried.
pub fn resolve_with(
    variants: &[FieldSyntax],
    token: &str,
    field: ScheduleField,
) -> CronResult<Vec<u32>> {
    let syntax = variants
        .iter()
        .find(|syntax| syntax.recognize(token))
        .ok_or_else(|| CronParseError::unsupported(field, token))?;

    debug!(field = field.name(), token, syntax = %syntax, "resolving expression part");
    syntax.expand(token, field)
}
