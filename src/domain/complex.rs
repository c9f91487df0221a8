use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::amount::FixedPoint;
use super::arity::arity_family;
use super::temporal::{DateTime, DateTimeOffset};
use super::uri::Uri;

/// Key/value pair serialized as a two-field record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyValuePair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValuePair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

arity_family! {
    /// One field of nearly every kind a serializer has to handle
    ///
    /// `list_with_null` always holds at least one `None` inside a
    /// non-empty list.
    pub struct ComplexClass {
        pub byte: u8,
        pub sbyte: i8,
        pub character: char,
        pub decimal: FixedPoint,
        pub boolean: bool,
        pub single: f32,
        pub double: f64,
        pub date_time: DateTime,
        pub date_time_offset: DateTimeOffset,
        pub guid: Uuid,
        pub uri: Uri,
        pub jagged_array: Vec<Vec<Vec<i32>>>,
        pub nested_list: Vec<Vec<Vec<String>>>,
        pub ordered_list: Vec<String>,
        pub unordered_set: IndexSet<String>,
        pub pair: KeyValuePair<String, i32>,
        pub int_keyed: IndexMap<i32, String>,
        pub string_keyed: IndexMap<String, i32>,
        pub list_with_null: Vec<Option<String>>,
    }

    pub struct ParameterizedComplexClass2Args {
        new(byte: u8, guid: Uuid);
        set(
            sbyte: i8,
            character: char,
            decimal: FixedPoint,
            boolean: bool,
            single: f32,
            double: f64,
            date_time: DateTime,
            date_time_offset: DateTimeOffset,
            uri: Uri,
            jagged_array: Vec<Vec<Vec<i32>>>,
            nested_list: Vec<Vec<Vec<String>>>,
            ordered_list: Vec<String>,
            unordered_set: IndexSet<String>,
            pair: KeyValuePair<String, i32>,
            int_keyed: IndexMap<i32, String>,
            string_keyed: IndexMap<String, i32>,
            list_with_null: Vec<Option<String>>,
        );
    }

    pub struct ParameterizedComplexClass8Args {
        new(
            byte: u8,
            sbyte: i8,
            character: char,
            decimal: FixedPoint,
            boolean: bool,
            date_time: DateTime,
            guid: Uuid,
            uri: Uri,
        );
        set(
            single: f32,
            double: f64,
            date_time_offset: DateTimeOffset,
            jagged_array: Vec<Vec<Vec<i32>>>,
            nested_list: Vec<Vec<Vec<String>>>,
            ordered_list: Vec<String>,
            unordered_set: IndexSet<String>,
            pair: KeyValuePair<String, i32>,
            int_keyed: IndexMap<i32, String>,
            string_keyed: IndexMap<String, i32>,
            list_with_null: Vec<Option<String>>,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_pair_serializes_as_record() {
        let pair = KeyValuePair::new("answer".to_string(), 42);
        assert_eq!(
            serde_json::to_string(&pair).unwrap(),
            r#"{"key":"answer","value":42}"#
        );
    }

    #[test]
    fn null_element_survives_json() {
        let mut value = ComplexClass::default();
        value.list_with_null = vec![Some("a".to_string()), None];

        let json = serde_json::to_string(&value).unwrap();
        assert!(json.contains(r#""list_with_null":["a",null]"#));

        let back: ComplexClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back.list_with_null, value.list_with_null);
    }

    #[test]
    fn two_args_requires_byte_and_guid() {
        let guid = Uuid::from_u128(1);
        let value = ParameterizedComplexClass2Args::new(9, guid);
        assert_eq!(*value.byte(), 9);
        assert_eq!(*value.guid(), guid);
        assert!(value.list_with_null.is_empty());
    }
}
