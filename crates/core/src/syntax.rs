//! Field syntax variants.
//!
//! Every schedule field token is written in exactly one of six shapes. Recognition only looks at
//! the shape of the token; numeric validation happens while expanding, so a recognized token can
//! still be rejected for being out of range.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{CronParseError, CronResult};
use crate::field::ScheduleField;

static SIMPLE_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]+$"));
static RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]+-[0-9]+$"));
static LIST_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]+,[0-9]+(,[0-9]+)*$"));
static WILDCARD_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^\*$"));
static WILDCARD_STEP_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^\*/[0-9]+$"));
static START_WITH_STEP_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]+/[0-9]+$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("field syntax patterns are valid regular expressions")
}

/// Shape of a single field token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSyntax {
    /// `n`
    Simple,
    /// `a-b`
    Range,
    /// `a,b[,c...]`
    List,
    /// `*`
    Wildcard,
    /// `*/n`
    WildcardStep,
    /// `a/n`
    StartWithStep,
}

impl FieldSyntax {
    /// Variants in the order the dispatcher tries them.
    pub const ALL: [FieldSyntax; 6] = [
        FieldSyntax::Simple,
        FieldSyntax::Range,
        FieldSyntax::List,
        FieldSyntax::Wildcard,
        FieldSyntax::WildcardStep,
        FieldSyntax::StartWithStep,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            FieldSyntax::Simple => &SIMPLE_PATTERN,
            FieldSyntax::Range => &RANGE_PATTERN,
            FieldSyntax::List => &LIST_PATTERN,
            FieldSyntax::Wildcard => &WILDCARD_PATTERN,
            FieldSyntax::WildcardStep => &WILDCARD_STEP_PATTERN,
            FieldSyntax::StartWithStep => &START_WITH_STEP_PATTERN,
        }
    }

    /// Whether `token` has the shape of this variant.
    pub fn recognize(&self, token: &str) -> bool {
        self.pattern().is_match(token)
    }

    /// Expands `token` into the concrete values it matches for `field`.
    ///
    /// Tokens without the shape of this variant are rejected as unsupported.
    pub fn expand(&self, token: &str, field: ScheduleField) -> CronResult<Vec<u32>> {
        if !self.recognize(token) {
            return Err(CronParseError::unsupported(field, token));
        }
        match self {
            FieldSyntax::Simple => expand_simple(token, field),
            FieldSyntax::Range => expand_range(token, field),
            FieldSyntax::List => expand_list(token, field),
            FieldSyntax::Wildcard => Ok(field.range().collect()),
            FieldSyntax::WildcardStep => expand_wildcard_step(token, field),
            FieldSyntax::StartWithStep => expand_start_with_step(token, field),
        }
    }
}

impl fmt::Display for FieldSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldSyntax::Simple => "simple",
            FieldSyntax::Range => "range",
            FieldSyntax::List => "list",
            FieldSyntax::Wildcard => "wildcard",
            FieldSyntax::WildcardStep => "wildcard-step",
            FieldSyntax::StartWithStep => "start-with-step",
        };
        f.write_str(name)
    }
}

fn parse_number(literal: &str, token: &str, field: ScheduleField) -> CronResult<u32> {
    literal
        .parse::<u32>()
        .map_err(|_| CronParseError::malformed_number(field, token))
}

/// Splits `token` once on `separator` and parses both halves.
fn parse_pair(token: &str, separator: char, field: ScheduleField) -> CronResult<(u32, u32)> {
    let (left, right) = token
        .split_once(separator)
        .ok_or_else(|| CronParseError::unsupported(field, token))?;
    Ok((
        parse_number(left, token, field)?,
        parse_number(right, token, field)?,
    ))
}

fn expand_simple(token: &str, field: ScheduleField) -> CronResult<Vec<u32>> {
    let value = parse_number(token, token, field)?;
    field.require_in_range(value, token)?;
    Ok(vec![value])
}

fn expand_range(token: &str, field: ScheduleField) -> CronResult<Vec<u32>> {
    let (start, end) = parse_pair(token, '-', field)?;
    field.require_in_range(start, token)?;
    field.require_in_range(end, token)?;
    if start > end {
        return Err(CronParseError::invalid_order(field, token));
    }
    Ok((start..=end).collect())
}

fn expand_list(token: &str, field: ScheduleField) -> CronResult<Vec<u32>> {
    token
        .split(',')
        .map(|literal| {
            let value = parse_number(literal, token, field)?;
            field.require_in_range(value, token)?;
            Ok(value)
        })
        .collect()
}

fn expand_wildcard_step(token: &str, field: ScheduleField) -> CronResult<Vec<u32>> {
    let literal = token.strip_prefix("*/").unwrap_or(token);
    let step = parse_number(literal, token, field)?;
    // The first step past the lower bound must itself be a valid value.
    let first_step = field
        .lower_bound()
        .checked_add(step)
        .ok_or_else(|| CronParseError::out_of_range(field, token))?;
    field.require_in_range(first_step, token)?;
    progression(field.lower_bound(), step, token, field)
}

fn expand_start_with_step(token: &str, field: ScheduleField) -> CronResult<Vec<u32>> {
    let (start, step) = parse_pair(token, '/', field)?;
    field.require_in_range(start, token)?;
    // The step is checked as if it were a value of the field.
    field.require_in_range(step, token)?;
    progression(start, step, token, field)
}

/// `start, start + step, ...` up to and including the field's upper bound.
fn progression(start: u32, step: u32, token: &str, field: ScheduleField) -> CronResult<Vec<u32>> {
    if step == 0 {
        return Err(CronParseError::invalid_step(field, token));
    }
    Ok((start..=field.upper_bound()).step_by(step as usize).collect())
}
