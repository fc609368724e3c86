//! JSON tool — pretty-print, minify, and structural analysis.
//!
//! Parse errors come straight from serde_json; their messages are surfaced
//! verbatim to the user.

use serde_json::Value;

/// Pretty-print JSON with 2-space indentation.
pub fn pretty(input: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(input)?;
    serde_json::to_string_pretty(&value)
}

/// Minify JSON to a single line.
pub fn minify(input: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(input)?;
    serde_json::to_string(&value)
}

/// Recursive tally of value-type occurrences in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeCounts {
    pub nulls: usize,
    pub bools: usize,
    pub numbers: usize,
    pub strings: usize,
    pub arrays: usize,
    pub objects: usize,
}

impl TypeCounts {
    pub fn total(&self) -> usize {
        self.nulls + self.bools + self.numbers + self.strings + self.arrays + self.objects
    }
}

/// Structural report for a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonReport {
    /// Kind of the top-level value ("object", "array", ...).
    pub top_level: &'static str,
    /// Key count for a top-level object, element count for a top-level array.
    pub top_level_len: Option<usize>,
    pub counts: TypeCounts,
}

impl JsonReport {
    /// Human-readable summary lines, one fact per line.
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![format!("top-level: {}", self.top_level)];
        if let Some(len) = self.top_level_len {
            match self.top_level {
                "object" => out.push(format!("keys: {len}")),
                _ => out.push(format!("elements: {len}")),
            }
        }
        let c = &self.counts;
        out.push(format!("values: {}", c.total()));
        out.push(format!(
            "null: {}  bool: {}  number: {}  string: {}  array: {}  object: {}",
            c.nulls, c.bools, c.numbers, c.strings, c.arrays, c.objects
        ));
        out
    }
}

/// Parse and analyze a JSON document.
pub fn analyze(input: &str) -> Result<JsonReport, serde_json::Error> {
    let value: Value = serde_json::from_str(input)?;
    let top_level_len = match &value {
        Value::Object(map) => Some(map.len()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    };
    let mut counts = TypeCounts::default();
    tally(&value, &mut counts);
    Ok(JsonReport {
        top_level: kind(&value),
        top_level_len,
        counts,
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn tally(value: &Value, counts: &mut TypeCounts) {
    match value {
        Value::Null => counts.nulls += 1,
        Value::Bool(_) => counts.bools += 1,
        Value::Number(_) => counts.numbers += 1,
        Value::String(_) => counts.strings += 1,
        Value::Array(items) => {
            counts.arrays += 1;
            for item in items {
                tally(item, counts);
            }
        }
        Value::Object(map) => {
            counts.objects += 1;
            for child in map.values() {
                tally(child, counts);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"name":"box","tags":["a","b"],"size":3,"open":true,"owner":null}"#;

    #[test]
    fn pretty_uses_two_space_indent() {
        let out = pretty(r#"{"a":1}"#).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn pretty_then_parse_is_structurally_equal() {
        let original: Value = serde_json::from_str(SAMPLE).unwrap();
        let reparsed: Value = serde_json::from_str(&pretty(SAMPLE).unwrap()).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn minify_strips_whitespace() {
        let out = minify("{ \"a\" : [ 1 , 2 ] }").unwrap();
        assert_eq!(out, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn parse_error_is_surfaced() {
        let err = pretty("{nope}").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn analyze_counts_types_recursively() {
        let report = analyze(SAMPLE).unwrap();
        assert_eq!(report.top_level, "object");
        assert_eq!(report.top_level_len, Some(5));
        assert_eq!(report.counts.strings, 3); // "box", "a", "b"
        assert_eq!(report.counts.numbers, 1);
        assert_eq!(report.counts.bools, 1);
        assert_eq!(report.counts.nulls, 1);
        assert_eq!(report.counts.arrays, 1);
        assert_eq!(report.counts.objects, 1);
    }

    #[test]
    fn analyze_scalar_top_level() {
        let report = analyze("42").unwrap();
        assert_eq!(report.top_level, "number");
        assert_eq!(report.top_level_len, None);
        assert_eq!(report.counts.total(), 1);
    }
}
