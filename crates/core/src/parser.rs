use tracing::debug;

use crate::dispatcher::resolve_with;
use crate::errors::{CronParseError, CronResult};
use crate::expression::ParsedExpression;
use crate::field::{ScheduleField, EXPRESSION_PARTS};
use crate::syntax::FieldSyntax;

/// Parses `"<minute> <hour> <day-of-month> <month> <day-of-week> <command>"` expressions.
///
/// Parts are separated by exactly one space, so the command itself cannot contain spaces.
#[derive(Debug, Clone)]
pub struct ExpressionParser {
    variants: Vec<FieldSyntax>,
}

impl ExpressionParser {
    /// Parser trying every field syntax in the default order.
    pub fn new() -> Self {
        Self::with_variants(FieldSyntax::ALL.to_vec())
    }

    /// Parser restricted to `variants`, tried in the given order.
    pub fn with_variants(variants: Vec<FieldSyntax>) -> Self {
        Self { variants }
    }

    /// Parses an expression that may be missing altogether.
    pub fn parse_optional(&self, expression: Option<&str>) -> CronResult<ParsedExpression> {
        match expression {
            Some(expression) => self.parse(expression),
            None => Err(CronParseError::usage()),
        }
    }

    /// Parses `expression`, stopping at the first field that fails.
    pub fn parse(&self, expression: &str) -> CronResult<ParsedExpression> {
        if expression.is_empty() {
            return Err(CronParseError::usage());
        }

        let tokens: Vec<&str> = expression.split(' ').collect();
        if tokens.len() != EXPRESSION_PARTS {
            debug!(
                parts = tokens.len(),
                expected = EXPRESSION_PARTS,
                "unexpected number of expression parts"
            );
            return Err(CronParseError::usage());
        }

        let parts = ScheduleField::ALL
            .iter()
            .map(|field| {
                let values = self.parse_part(tokens[field.ordinal()], *field)?;
                Ok((*field, values))
            })
            .collect::<CronResult<Vec<_>>>()?;

        let command = tokens[EXPRESSION_PARTS - 1].to_string();
        Ok(ParsedExpression::new(parts, command))
    }

    /// Expands a single field token.
    pub fn parse_part(&self, token: &str, field: ScheduleField) -> CronResult<Vec<u32>> {
        resolve_with(&self.variants, token, field)
    }
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot parse with the default parser.
pub fn parse_expression(expression: &str) -> CronResult<ParsedExpression> {
    ExpressionParser::new().parse(expression)
}
