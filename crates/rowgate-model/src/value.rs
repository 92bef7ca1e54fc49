#![deny(unsafe_code)]

use std::fmt;

/// A single cell, tagged at ingestion time.
///
/// Raw text is reified into one of three shapes when a table is read:
/// blank cells become [`CellValue::Missing`], cells that parse as an
/// integer become [`CellValue::Int`], and everything else stays
/// [`CellValue::Text`]. Checks pattern-match on the tag instead of
/// re-parsing raw strings.
///
/// Integer cells keep the source lexeme alongside the parsed value:
/// `"007"` and `"7"` are both `Int` with value 7, but render (and
/// compare for uniqueness) as the distinct strings they came from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Missing,
    Int { value: i64, raw: String },
    Text(String),
}

impl CellValue {
    /// Reify a raw cell from the source table.
    ///
    /// Leading and trailing whitespace is not significant: a cell of
    /// spaces is missing, and `" 42 "` is the integer 42.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return CellValue::Int {
                value,
                raw: trimmed.to_string(),
            };
        }
        CellValue::Text(trimmed.to_string())
    }

    /// An integer cell whose lexeme is the canonical decimal form.
    pub fn int(value: i64) -> Self {
        CellValue::Int {
            value,
            raw: value.to_string(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Render the cell back to the text written to output files.
    ///
    /// Missing cells render as the empty string; integer cells render
    /// their source lexeme, not the parsed value.
    pub fn render(&self) -> &str {
        match self {
            CellValue::Missing => "",
            CellValue::Int { raw, .. } => raw,
            CellValue::Text(text) => text,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}
