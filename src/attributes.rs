use crate::values::{self, Resolution};
use serde::Serialize;
use std::fmt::Display;

const NAME_VALUE_SEPARATOR: char = '=';
const ATTRIBUTE_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Decimal integer, or hexadecimal when the value starts with `0x`.
    pub fn integer(&self) -> Option<u64> {
        values::parse_integer_or_hex(&self.value)
    }

    pub fn float(&self) -> Option<f64> {
        values::parse_float(&self.value)
    }

    pub fn bytes(&self) -> Option<Vec<u8>> {
        values::parse_hex_bytes(&self.value)
    }

    pub fn resolution(&self) -> Option<Resolution> {
        values::parse_resolution(&self.value)
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Ordered `NAME=VALUE` pairs of an attribute-list tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(Vec<Attribute>);

fn is_name_char(c: char) -> bool {
    c.is_ascii_uppercase() || c == '-'
}

fn is_value_char(c: char, quoted: bool) -> bool {
    if quoted {
        c != '"' && c != '\n' && c != '\r'
    } else {
        c.is_ascii_alphanumeric() || c == '-' || c == '.'
    }
}

impl Attributes {
    /// Parses an attribute list in a single left-to-right pass.
    ///
    /// Malformed input never fails: characters that are not valid at the
    /// current position are skipped. `quoted` only holds while the scanner
    /// sits on an opening `"`, so quote marks are never stored and a comma
    /// always ends the value, even between quotes.
    pub fn parse(raw: &str) -> Self {
        let mut attributes = Vec::new();
        let mut chars = raw.chars().peekable();

        while chars.peek().is_some() {
            let mut name = String::new();
            for c in chars.by_ref() {
                if c == NAME_VALUE_SEPARATOR {
                    break;
                }
                if is_name_char(c) {
                    name.push(c);
                }
            }

            let mut value = String::new();
            let mut quoted = false;
            for c in chars.by_ref() {
                quoted = c == '"' && !quoted;

                if c == ATTRIBUTE_SEPARATOR && !quoted {
                    break;
                }
                if is_value_char(c, quoted) {
                    value.push(c);
                }
            }

            attributes.push(Attribute { name, value });
        }

        Self(attributes)
    }

    /// First attribute with the given name.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0.iter().find(|attr| attr.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|attr| attr.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Attribute>> for Attributes {
    fn from(attributes: Vec<Attribute>) -> Self {
        Self(attributes)
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, attr) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", ATTRIBUTE_SEPARATOR)?;
            }
            write!(f, "{}", attr)?;
        }
        Ok(())
    }
}
