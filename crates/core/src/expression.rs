use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::field::ScheduleField;

/// Column width the field names are padded to in the text rendering.
pub const NAME_COLUMN_WIDTH: usize = 14;

/// Fully expanded cron expression.
///
/// Holds the values of every schedule field (iterated in expression order) and the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedExpression {
    #[serde(flatten)]
    parts: BTreeMap<ScheduleField, Vec<u32>>,
    command: String,
}

impl ParsedExpression {
    /// Builds an expression from per field values listed in expression order.
    pub(crate) fn new(parts: Vec<(ScheduleField, Vec<u32>)>, command: String) -> Self {
        Self {
            parts: parts.into_iter().collect(),
            command,
        }
    }

    /// Field values in expression order.
    pub fn parts(&self) -> impl Iterator<Item = (ScheduleField, &[u32])> {
        self.parts
            .iter()
            .map(|(field, values)| (*field, values.as_slice()))
    }

    pub fn values(&self, field: ScheduleField) -> &[u32] {
        self.parts.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Renders one line per field, names padded to `name_width`, followed by the command.
    pub fn render(&self, name_width: usize) -> String {
        let mut output = String::new();
        for (field, values) in self.parts() {
            let joined = values
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!(
                "{:<width$}{}\n",
                field.display_name(),
                joined,
                width = name_width
            ));
        }
        output.push_str(&self.command);
        output
    }
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(NAME_COLUMN_WIDTH))
    }
}
