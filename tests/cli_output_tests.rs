use cron_parser::app::{describe, render, ERROR_LEAD_IN};
use cron_parser_config::{OutputConfig, OutputFormat};
use cron_parser_core::{parse_expression, USAGE_INFO};

fn text_output() -> OutputConfig {
    OutputConfig::default()
}

#[test]
fn test_describe_renders_table() {
    let outcome = describe(Some("*/15 0 1,15 * 1-5 /usr/bin/find"), &text_output()).unwrap();

    assert!(outcome.success);
    let expected = "\
minute        0, 15, 30, 45
hour          0
day of month  1, 15
month         1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12
day of week   1, 2, 3, 4, 5
/usr/bin/find";
    assert_eq!(outcome.output, expected);
}

#[test]
fn test_describe_reports_invalid_field() {
    let input = "*/15 0 20,15 * 1-10 /usr/bin/find";
    let outcome = describe(Some(input), &text_output()).unwrap();

    assert!(!outcome.success);
    assert_eq!(
        outcome.output,
        format!(
            "{ERROR_LEAD_IN}{input}\nExpression part 1-10 for DAY_OF_WEEK part produces a value, which is out of range 1..7"
        )
    );
}

#[test]
fn test_describe_without_expression_prints_usage() {
    let outcome = describe(None, &text_output()).unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.output, format!("{ERROR_LEAD_IN}null\n{USAGE_INFO}"));
}

#[test]
fn test_describe_wrong_part_count_prints_usage() {
    let outcome = describe(Some("*/15 0"), &text_output()).unwrap();

    assert!(!outcome.success);
    assert!(outcome.output.ends_with(USAGE_INFO));
}

#[test]
fn test_render_json() {
    let parsed = parse_expression("15 0 1 10 1 /usr/bin/find").unwrap();
    let output = OutputConfig {
        format: OutputFormat::Json,
        ..OutputConfig::default()
    };

    let rendered = render(&parsed, &output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "minute": [15],
            "hour": [0],
            "day_of_month": [1],
            "month": [10],
            "day_of_week": [1],
            "command": "/usr/bin/find"
        })
    );
}

#[test]
fn test_render_custom_column_width() {
    let parsed = parse_expression("0 0 1 1 1 cmd").unwrap();
    let output = OutputConfig {
        name_column_width: 20,
        ..OutputConfig::default()
    };

    let rendered = render(&parsed, &output).unwrap();
    assert_eq!(rendered.lines().next(), Some("minute              0"));
}
