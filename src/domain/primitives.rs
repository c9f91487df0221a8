use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::temporal::DateTime;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BinaryData {
    pub byte_array: Vec<u8>,
}

/// Equal-length collections of primitives
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionsOfPrimitives {
    pub byte_array: Vec<u8>,
    pub date_time_array: Vec<DateTime>,
    pub dictionary: IndexMap<i32, String>,
    pub list_of_int: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimpleStructWithProperties {
    pub num: i32,
    pub text: String,
}

/// List of ints that serializes as a bare sequence
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimpleListOfInt(Vec<i32>);

impl Deref for SimpleListOfInt {
    type Target = Vec<i32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SimpleListOfInt {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<i32>> for SimpleListOfInt {
    fn from(values: Vec<i32>) -> Self {
        Self(values)
    }
}

impl FromIterator<i32> for SimpleListOfInt {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Single XML element with text content
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct XmlElement {
    pub name: String,
    pub inner_text: String,
}

impl XmlElement {
    pub fn new(name: impl Into<String>, inner_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner_text: inner_text.into(),
        }
    }

    /// Markup form, e.g. `<Element>text</Element>`
    pub fn to_xml_string(&self) -> String {
        let mut escaped = String::with_capacity(self.inner_text.len());
        for c in self.inner_text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                _ => escaped.push(c),
            }
        }
        format!("<{0}>{1}</{0}>", self.name, escaped)
    }
}

/// Record that writes its own representation, including a field
/// callers cannot set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlSerializableRecord {
    pub string_value: String,
    bool_value: bool,
}

impl XmlSerializableRecord {
    pub fn new(string_value: impl Into<String>) -> Self {
        Self {
            string_value: string_value.into(),
            ..Self::default()
        }
    }

    pub fn bool_value(&self) -> bool {
        self.bool_value
    }
}

impl Default for XmlSerializableRecord {
    fn default() -> Self {
        Self {
            string_value: String::new(),
            bool_value: true,
        }
    }
}
