use crate::weight::Weight;

/// A raw matrix cell as supplied by a caller, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

/// What a cell resolves to once tokens are recognized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Weight(Weight),
    Absent,
}

impl Cell {
    /// Returns `None` when the cell is neither a number nor a known token.
    pub fn parse(&self) -> Option<CellValue> {
        match self {
            Cell::Number(number) if number.is_nan() => None,
            Cell::Number(number) => Some(CellValue::Weight(*number)),
            Cell::Missing => Some(CellValue::Absent),
            Cell::Text(text) => parse_token(text),
        }
    }
}

fn parse_token(text: &str) -> Option<CellValue> {
    let token = text.trim().to_lowercase();

    match token.as_str() {
        "" | "none" | "null" => Some(CellValue::Absent),
        "inf" | "+inf" | "infinity" | "+infinity" => Some(CellValue::Weight(f64::INFINITY)),
        "-inf" | "-infinity" => Some(CellValue::Weight(f64::NEG_INFINITY)),
        _ => token
            .parse::<f64>()
            .ok()
            .filter(|number| !number.is_nan())
            .map(CellValue::Weight),
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Missing, Into::into)
    }
}

impl From<&serde_json::Value> for Cell {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Cell::Missing,
            serde_json::Value::Number(number) => number
                .as_f64()
                .map_or_else(|| Cell::Text(number.to_string()), Cell::Number),
            serde_json::Value::String(text) => Cell::Text(text.clone()),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(number) => write!(f, "{number}"),
            Cell::Text(text) => write!(f, "{text}"),
            Cell::Missing => write!(f, "none"),
        }
    }
}
