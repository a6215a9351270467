//! Parser for Python-literal style documents.
//!
//! Style files with a `.py` or `.dict` extension hold a Python literal
//! expression (the original workflow produced them with `repr()`). This
//! parser covers the subset such documents use: dicts, lists, tuples,
//! single- or double-quoted strings, numbers, and `True`/`False`/`None`.
//! Trailing commas and `#` comments are accepted.

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Error produced when a Python-literal document cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct LiteralError {
    message: String,
    offset: usize,
}

/// Parses a Python literal expression into a JSON value.
///
/// Tuples are mapped to arrays; dict keys must be strings.
///
/// # Errors
///
/// Returns a [`LiteralError`] describing the first unparseable construct.
pub fn parse(input: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser {
        input: input.as_bytes(),
        pos: 0,
    };
    parser.skip_trivia();
    let value = parser.parse_value()?;
    parser.skip_trivia();
    if parser.pos != parser.input.len() {
        return Err(parser.error("trailing content after literal"));
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn error(&self, message: &str) -> LiteralError {
        LiteralError {
            message: message.to_string(),
            offset: self.pos,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Skips whitespace and `#` line comments.
    fn skip_trivia(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' | b'\r' | b'\n' => self.pos += 1,
                b'#' => {
                    while let Some(b) = self.peek() {
                        self.pos += 1;
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn parse_value(&mut self) -> Result<Value, LiteralError> {
        match self.peek() {
            Some(b'{') => self.parse_dict(),
            Some(b'[') => self.parse_sequence(b'[', b']'),
            Some(b'(') => self.parse_sequence(b'(', b')'),
            Some(b'\'' | b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b'-' | b'+' | b'0'..=b'9' | b'.') => self.parse_number(),
            Some(byte) if byte.is_ascii_alphabetic() => self.parse_keyword(),
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_dict(&mut self) -> Result<Value, LiteralError> {
        self.pos += 1; // consume '{'
        let mut entries = Map::new();
        loop {
            self.skip_trivia();
            match self.peek() {
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(entries));
                }
                Some(b'\'' | b'"') => {}
                Some(_) => return Err(self.error("mapping keys must be string literals")),
                None => return Err(self.error("unterminated dict")),
            }
            let key = self.parse_string()?;
            self.skip_trivia();
            if self.peek() != Some(b':') {
                return Err(self.error("expected ':' after mapping key"));
            }
            self.pos += 1;
            self.skip_trivia();
            let value = self.parse_value()?;
            entries.insert(key, value);
            self.skip_trivia();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {}
                _ => return Err(self.error("expected ',' or '}' in dict")),
            }
        }
    }

    fn parse_sequence(&mut self, open: u8, close: u8) -> Result<Value, LiteralError> {
        debug_assert_eq!(self.peek(), Some(open));
        self.pos += 1;
        let mut items = Vec::new();
        loop {
            self.skip_trivia();
            match self.peek() {
                Some(byte) if byte == close => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                None => return Err(self.error("unterminated sequence")),
                _ => {}
            }
            items.push(self.parse_value()?);
            self.skip_trivia();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(byte) if byte == close => {}
                _ => return Err(self.error("expected ',' or closing bracket in sequence")),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, LiteralError> {
        let quote = self.peek().ok_or_else(|| self.error("expected string"))?;
        self.pos += 1;
        let mut bytes = Vec::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated string")),
                Some(byte) if byte == quote => {
                    self.pos += 1;
                    break;
                }
                Some(b'\\') => {
                    self.pos += 1;
                    let escaped = self
                        .peek()
                        .ok_or_else(|| self.error("unterminated escape"))?;
                    self.pos += 1;
                    match escaped {
                        b'n' => bytes.push(b'\n'),
                        b't' => bytes.push(b'\t'),
                        b'r' => bytes.push(b'\r'),
                        b'0' => bytes.push(0),
                        b'\\' | b'\'' | b'"' => bytes.push(escaped),
                        // Python leaves unknown escapes verbatim.
                        other => {
                            bytes.push(b'\\');
                            bytes.push(other);
                        }
                    }
                }
                Some(byte) => {
                    bytes.push(byte);
                    self.pos += 1;
                }
            }
        }
        String::from_utf8(bytes).map_err(|_| self.error("invalid UTF-8 in string"))
    }

    fn parse_number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            match byte {
                b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E' | b'_' => self.pos += 1,
                _ => break,
            }
        }
        let text: String = std::str::from_utf8(&self.input[start..self.pos])
            .map_err(|_| self.error("invalid number"))?
            .replace('_', "");
        if let Ok(int) = text.parse::<i64>() {
            return Ok(Value::Number(int.into()));
        }
        let float = text
            .parse::<f64>()
            .map_err(|_| self.error("invalid number"))?;
        Number::from_f64(float)
            .map(Value::Number)
            .ok_or_else(|| self.error("number out of range"))
    }

    fn parse_keyword(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte.is_ascii_alphanumeric() {
                self.pos += 1;
            } else {
                break;
            }
        }
        match &self.input[start..self.pos] {
            b"True" => Ok(Value::Bool(true)),
            b"False" => Ok(Value::Bool(false)),
            b"None" => Ok(Value::Null),
            _ => Err(LiteralError {
                message: "unknown identifier".to_string(),
                offset: start,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_flat_dict() {
        let value = parse("{'opacity': 0.8, 'thickness': 2}").unwrap();
        assert_eq!(value, json!({"opacity": 0.8, "thickness": 2}));
    }

    #[test]
    fn parses_nested_structures() {
        let value = parse(
            "{'colorRange': {'name': 'Global Warming', 'colors': ['#5A1846', '#900C3F']}}",
        )
        .unwrap();
        assert_eq!(
            value,
            json!({"colorRange": {"name": "Global Warming", "colors": ["#5A1846", "#900C3F"]}})
        );
    }

    #[test]
    fn parses_python_keywords() {
        let value = parse("{'filled': True, 'stroked': False, 'sizeRange': None}").unwrap();
        assert_eq!(
            value,
            json!({"filled": true, "stroked": false, "sizeRange": null})
        );
    }

    #[test]
    fn tuples_become_arrays() {
        let value = parse("{'offset': (0, 10)}").unwrap();
        assert_eq!(value, json!({"offset": [0, 10]}));
    }

    #[test]
    fn accepts_trailing_commas_and_comments() {
        let value = parse("{\n  # layer opacity\n  'opacity': 1.0,\n}").unwrap();
        assert_eq!(value, json!({"opacity": 1.0}));
    }

    #[test]
    fn double_quoted_strings_and_escapes() {
        let value = parse(r#"{"label": "line one\nline two", 'quote': '\''}"#).unwrap();
        assert_eq!(
            value,
            json!({"label": "line one\nline two", "quote": "'"})
        );
    }

    #[test]
    fn negative_and_exponent_numbers() {
        let value = parse("[-3, 1.5e2, +0.25]").unwrap();
        assert_eq!(value, json!([-3, 150.0, 0.25]));
    }

    #[test]
    fn rejects_unterminated_dict() {
        let err = parse("{'a': 1").unwrap_err();
        assert!(err.to_string().contains("dict"));
    }

    #[test]
    fn rejects_non_string_keys() {
        assert!(parse("{1: 'a'}").is_err());
    }

    #[test]
    fn rejects_trailing_content() {
        let err = parse("{} {}").unwrap_err();
        assert!(err.to_string().contains("trailing"));
    }

    #[test]
    fn rejects_unknown_identifier() {
        assert!(parse("{'a': true}").is_err());
    }

    #[test]
    fn error_reports_offset() {
        let err = parse("{'a': @}").unwrap_err();
        assert!(err.to_string().contains("offset 6"));
    }
}
