//! Block-style YAML emitter.
//!
//! `serde_yaml`'s own serializer pins sequence items to the parent column;
//! this emitter produces the block shape the crate guarantees instead:
//! nested nodes indented by four spaces, `- ` items with two-space
//! continuation lines, plain scalars wherever they reparse as the same
//! string and double-quoted scalars everywhere else, and a trailing newline
//! after the document.

use serde_yaml::{Mapping, Number, Sequence, Value};

use super::YamlError;

const INDENT: usize = 4;

/// Block-style YAML encoder over [`serde_yaml::Value`].
pub struct YamlEmitter {
    out: String,
}

impl Default for YamlEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlEmitter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Encodes a value as a complete document and returns the bytes.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, YamlError> {
        self.out.clear();
        match value {
            Value::Mapping(map) if !map.is_empty() => self.write_mapping(map, 0, false)?,
            Value::Sequence(seq) if !seq.is_empty() => self.write_sequence(seq, 0, false)?,
            other => {
                self.write_flow(other)?;
                self.out.push('\n');
            }
        }
        Ok(std::mem::take(&mut self.out).into_bytes())
    }

    /// Writes a mapping's entries at `indent`. With `inline_first`, the
    /// first entry continues the current line (directly after a `- `).
    fn write_mapping(
        &mut self,
        map: &Mapping,
        indent: usize,
        mut inline_first: bool,
    ) -> Result<(), YamlError> {
        for (key, value) in map.iter() {
            if inline_first {
                inline_first = false;
            } else {
                self.write_indent(indent);
            }
            self.write_key(key)?;
            self.out.push(':');
            self.write_entry_value(value, indent)?;
        }
        Ok(())
    }

    /// Writes the value half of a `key:` entry, either on the same line or
    /// as an indented block below it.
    fn write_entry_value(&mut self, value: &Value, indent: usize) -> Result<(), YamlError> {
        match value {
            Value::Mapping(map) if !map.is_empty() => {
                self.out.push('\n');
                self.write_mapping(map, indent + INDENT, false)
            }
            Value::Sequence(seq) if !seq.is_empty() => {
                self.out.push('\n');
                self.write_sequence(seq, indent + INDENT, false)
            }
            Value::Tagged(tagged) => {
                self.out.push(' ');
                self.out.push_str(&tagged.tag.to_string());
                match &tagged.value {
                    Value::Mapping(map) if !map.is_empty() => {
                        self.out.push('\n');
                        self.write_mapping(map, indent + INDENT, false)
                    }
                    Value::Sequence(seq) if !seq.is_empty() => {
                        self.out.push('\n');
                        self.write_sequence(seq, indent + INDENT, false)
                    }
                    other => {
                        self.out.push(' ');
                        self.write_flow(other)?;
                        self.out.push('\n');
                        Ok(())
                    }
                }
            }
            other => {
                self.out.push(' ');
                self.write_flow(other)?;
                self.out.push('\n');
                Ok(())
            }
        }
    }

    /// Writes a sequence's items at `indent`. With `inline_first`, the first
    /// item continues the current line (a sequence nested in a sequence).
    fn write_sequence(
        &mut self,
        seq: &Sequence,
        indent: usize,
        mut inline_first: bool,
    ) -> Result<(), YamlError> {
        for item in seq {
            if inline_first {
                inline_first = false;
            } else {
                self.write_indent(indent);
            }
            self.out.push_str("- ");
            match item {
                Value::Mapping(map) if !map.is_empty() => {
                    self.write_mapping(map, indent + 2, true)?;
                }
                Value::Sequence(inner) if !inner.is_empty() => {
                    self.write_sequence(inner, indent + 2, true)?;
                }
                other => {
                    self.write_flow(other)?;
                    self.out.push('\n');
                }
            }
        }
        Ok(())
    }

    /// Writes a mapping key; only scalar keys are representable.
    fn write_key(&mut self, key: &Value) -> Result<(), YamlError> {
        match key {
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                self.write_flow(key)
            }
            _ => Err(YamlError::ComplexKey),
        }
    }

    /// Writes a node that fits on the current line.
    fn write_flow(&mut self, value: &Value) -> Result<(), YamlError> {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(number) => self.write_number(number),
            Value::String(s) => self.write_string(s),
            Value::Sequence(_) => self.out.push_str("[]"),
            Value::Mapping(_) => self.out.push_str("{}"),
            Value::Tagged(tagged) => {
                self.out.push_str(&tagged.tag.to_string());
                self.out.push(' ');
                self.write_flow(&tagged.value)?;
            }
        }
        Ok(())
    }

    fn write_number(&mut self, number: &Number) {
        self.out.push_str(&number.to_string());
    }

    /// Writes a string scalar, plain when safe, double-quoted otherwise.
    fn write_string(&mut self, s: &str) {
        if plain_safe(s) {
            self.out.push_str(s);
        } else {
            self.write_quoted(s);
        }
    }

    fn write_quoted(&mut self, s: &str) {
        self.out.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                ch if (ch as u32) < 0x20 => {
                    self.out.push_str(&format!("\\u{:04x}", ch as u32));
                }
                ch => self.out.push(ch),
            }
        }
        self.out.push('"');
    }

    fn write_indent(&mut self, indent: usize) {
        for _ in 0..indent {
            self.out.push(' ');
        }
    }
}

/// Whether `s` written as a plain scalar reparses as the same string.
fn plain_safe(s: &str) -> bool {
    if s.is_empty() || s != s.trim() {
        return false;
    }
    if let Some(first) = s.chars().next() {
        if "-?:,[]{}#&*!|>'\"%@`".contains(first) {
            return false;
        }
    }
    if s.contains(": ") || s.ends_with(':') || s.contains(" #") {
        return false;
    }
    if s.chars().any(|ch| ch.is_control()) {
        return false;
    }
    !reparses_specially(s)
}

/// Whether a plain `s` would reparse as null, a boolean, or a number.
fn reparses_specially(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "null" | "~" | "true" | "false" | "yes" | "no" | "on" | "off" | ".inf" | "-.inf" | ".nan"
    ) || s.parse::<i64>().is_ok()
        || s.parse::<f64>().is_ok()
}
