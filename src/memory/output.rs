//! Output buffer filled by the write primitive

use super::Cell;
use crate::interpreter::errors::OutputError;

/// Append-only sequence of written cell values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    values: Vec<Cell>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        OutputBuffer { values: Vec::new() }
    }

    pub fn push(&mut self, value: Cell) {
        self.values.push(value);
    }

    /// The raw written values.
    pub fn values(&self) -> &[Cell] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Space-separated decimal rendering, e.g. `72 105`.
    pub fn as_numeric_list(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Decode every value as a Unicode code point.
    ///
    /// Fails on the first negative value, surrogate or value above
    /// `U+10FFFF` instead of substituting a replacement character.
    pub fn as_characters(&self) -> Result<String, OutputError> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u32::try_from(value)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(OutputError::InvalidCodePoint { index, value })
            })
            .collect()
    }
}
