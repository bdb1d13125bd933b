//! Recursive descent over agtype text.
//!
//! The grammar is JSON with three extensions: a `::vertex`, `::edge`,
//! `::path` or `::numeric` suffix after a value, and bare `Infinity`,
//! `-Infinity` and `NaN` tokens.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use super::number::infer_number;
use super::path::reconstruct_path;
use super::DecodeOptions;
use crate::error::{AgtypeError, Result};
use crate::graph::{Edge, Vertex};
use crate::value::{named_float, Properties, Value};

/// Deepest list/object nesting accepted before giving up.
const MAX_DEPTH: usize = 128;

pub(crate) struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    named_floats: bool,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str, options: DecodeOptions) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            depth: 0,
            named_floats: options.allow_named_float_literals,
        }
    }

    /// Parse one value spanning the whole input (surrounding whitespace allowed).
    pub(crate) fn parse_document(mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.pos < self.bytes.len() {
            return Err(self.error("end of agtype value", self.pos));
        }
        Ok(value)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn error(&self, expected: &'static str, at: usize) -> AgtypeError {
        match self.src.get(at..) {
            Some(rest) if !rest.is_empty() => AgtypeError::format(expected, rest),
            _ => AgtypeError::format(expected, "<end of input>"),
        }
    }

    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<()> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(expected, self.pos))
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let start = self.pos;
        let value = match self.peek() {
            Some(b'{') => self.nested(|p| p.parse_object().map(Value::Object))?,
            Some(b'[') => self.nested(|p| p.parse_array().map(Value::List))?,
            Some(b'"') => self.parse_string_value()?,
            Some(b'-' | b'0'..=b'9') => self.parse_number()?,
            Some(b) if b.is_ascii_alphabetic() => self.parse_word()?,
            _ => return Err(self.error("agtype value", start)),
        };
        self.parse_suffix(value, start)
    }

    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("nesting depth", self.pos));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_object(&mut self) -> Result<Properties> {
        self.expect(b'{', "object")?;
        let mut map = Properties::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(map);
        }
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.error("object key", self.pos));
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            self.expect(b':', "`:` after object key")?;
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(map);
                }
                _ => return Err(self.error("`,` or `}` in object", self.pos)),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Vec<Value>> {
        self.expect(b'[', "list")?;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(items);
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(items);
                }
                _ => return Err(self.error("`,` or `]` in list", self.pos)),
            }
        }
    }

    fn parse_string_value(&mut self) -> Result<Value> {
        let s = self.parse_string()?;
        if self.named_floats {
            if let Some(f) = named_float(&s) {
                return Ok(Value::Double(f));
            }
        }
        Ok(Value::String(s))
    }

    fn parse_string(&mut self) -> Result<String> {
        let start = self.pos;
        self.expect(b'"', "string")?;
        let mut out = String::new();
        let mut run = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.error("terminated string", start)),
                Some(b'"') => {
                    out.push_str(&self.src[run..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.src[run..self.pos]);
                    self.parse_escape(&mut out)?;
                    run = self.pos;
                }
                Some(b) if b < 0x20 => return Err(self.error("string character", self.pos)),
                Some(_) => self.pos += 1,
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        let start = self.pos;
        self.pos += 1;
        let c = match self.peek() {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{8}',
            Some(b'f') => '\u{c}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                self.pos += 1;
                let c = self.parse_unicode_escape(start)?;
                out.push(c);
                return Ok(());
            }
            _ => return Err(self.error("string escape", start)),
        };
        self.pos += 1;
        out.push(c);
        Ok(())
    }

    fn parse_unicode_escape(&mut self, start: usize) -> Result<char> {
        let high = self.parse_hex4(start)?;
        let code = if (0xD800..0xDC00).contains(&high) {
            if self.bytes.get(self.pos..self.pos + 2) != Some(b"\\u".as_slice()) {
                return Err(self.error("unicode surrogate pair", start));
            }
            self.pos += 2;
            let low = self.parse_hex4(start)?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(self.error("unicode surrogate pair", start));
            }
            0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
        } else {
            u32::from(high)
        };
        char::from_u32(code).ok_or_else(|| self.error("unicode escape", start))
    }

    fn parse_hex4(&mut self, start: usize) -> Result<u16> {
        let digits = self
            .src
            .get(self.pos..self.pos + 4)
            .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| self.error("unicode escape", start))?;
        let code = u16::from_str_radix(digits, 16).map_err(|_| self.error("unicode escape", start))?;
        self.pos += 4;
        Ok(code)
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let negated_word = self.peek() == Some(b'-')
            && self.bytes.get(self.pos + 1).is_some_and(u8::is_ascii_alphabetic);
        if negated_word {
            return self.parse_word();
        }
        while matches!(self.peek(), Some(b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')) {
            self.pos += 1;
        }
        let literal = &self.src[start..self.pos];
        infer_number(literal).ok_or_else(|| AgtypeError::format("number", literal))
    }

    fn parse_word(&mut self) -> Result<Value> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        match &self.src[start..self.pos] {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            word => named_float(word)
                .map(Value::Double)
                .ok_or_else(|| self.error("agtype value", start)),
        }
    }

    /// Apply a trailing `::name` annotation to the value that started at `start`.
    fn parse_suffix(&mut self, value: Value, start: usize) -> Result<Value> {
        if !self.bytes[self.pos..].starts_with(b"::") {
            return Ok(value);
        }
        let src = self.src;
        let literal = &src[start..self.pos];
        self.pos += 2;
        let name_start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_') {
            self.pos += 1;
        }
        match (&src[name_start..self.pos], value) {
            ("vertex", Value::Object(map)) => Vertex::try_from(map).map(Value::Vertex),
            ("edge", Value::Object(map)) => Edge::try_from(map).map(Value::Edge),
            ("path", Value::List(items)) => reconstruct_path(items).map(Value::Path),
            ("numeric", value) => numeric(value, literal),
            _ => Err(self.error("suffix annotation", start)),
        }
    }
}

/// Re-read a number annotated `::numeric` as an exact decimal.
fn numeric(value: Value, literal: &str) -> Result<Value> {
    match value {
        Value::Double(d) if !d.is_finite() => Ok(Value::Double(d)),
        Value::Int(_) | Value::Long(_) | Value::Decimal(_) | Value::Double(_) => {
            BigDecimal::from_str(literal)
                .map(Value::Decimal)
                .map_err(|_| AgtypeError::format("numeric", literal))
        }
        _ => Err(AgtypeError::format("numeric", literal)),
    }
}
