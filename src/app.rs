use anyhow::{Context, Result};
use cron_parser_config::{OutputConfig, OutputFormat};
use cron_parser_core::{ExpressionParser, ParsedExpression};
use tracing::{debug, warn};

/// Lead-in printed before the raw expression when parsing fails.
pub const ERROR_LEAD_IN: &str = "There was an error parsing expression: ";

/// Text to print and whether the expression was valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

/// Parses the raw command line argument and renders the result or the failure.
pub fn describe(expression: Option<&str>, output: &OutputConfig) -> Result<Outcome> {
    let parser = ExpressionParser::new();
    let trimmed = expression.map(str::trim);

    match parser.parse_optional(trimmed) {
        Ok(parsed) => {
            debug!(command = parsed.command(), "expression parsed");
            Ok(Outcome {
                output: render(&parsed, output)?,
                success: true,
            })
        }
        Err(err) => {
            warn!(
                error = %err,
                field = err.field().map(|field| field.name()),
                "expression rejected"
            );
            Ok(Outcome {
                output: failure_message(expression, &err.to_string()),
                success: false,
            })
        }
    }
}

pub fn render(parsed: &ParsedExpression, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Text => Ok(parsed.render(output.name_column_width)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(parsed).context("Failed to serialize parsed expression")
        }
    }
}

/// Quotes the input as given, or `null` when there was none.
pub fn failure_message(expression: Option<&str>, message: &str) -> String {
    format!(
        "{ERROR_LEAD_IN}{}\n{message}",
        expression.unwrap_or("null")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_quotes_input() {
        assert_eq!(
            failure_message(Some("*/15 0"), "boom"),
            "There was an error parsing expression: */15 0\nboom"
        );
        assert_eq!(
            failure_message(None, "boom"),
            "There was an error parsing expression: null\nboom"
        );
    }

    #[test]
    fn test_describe_trims_argument() {
        let outcome = describe(Some("  0 0 1 1 1 /bin/true \n"), &OutputConfig::default()).unwrap();
        assert!(outcome.success);
        assert!(outcome.output.ends_with("/bin/true"));
    }
}
