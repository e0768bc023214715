//! SQL data type descriptors used as CAST targets.

use serde::{Deserialize, Serialize};

/// A data type, possibly nested.
///
/// Type names are stored upper-case. STRUCT field names are kept exactly as
/// declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// A bare type name, e.g. `BOOLEAN`, `BINARY`, `STRING`.
    Simple(String),
    /// A type with numeric parameters, e.g. `DECIMAL(10, 2)`, `VARCHAR(20)`.
    Sized {
        /// Type name.
        name: String,
        /// Numeric parameters, in order.
        args: Vec<u32>,
    },
    /// `ARRAY<T>`.
    Array(Box<DataType>),
    /// `MAP<K, V>`.
    Map {
        /// Key type.
        key: Box<DataType>,
        /// Value type.
        value: Box<DataType>,
    },
    /// `STRUCT<name type, ...>`.
    Struct(Vec<StructField>),
}

/// A named field of a STRUCT type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    /// Field name, case preserved.
    pub name: String,
    /// Field type.
    pub data_type: DataType,
}

impl StructField {
    /// Creates a struct field.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

impl DataType {
    /// Creates a bare type with a canonical upper-case name.
    #[must_use]
    pub fn simple(name: &str) -> Self {
        Self::Simple(name.to_ascii_uppercase())
    }

    /// Creates `ARRAY<element>`.
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    /// Creates `MAP<key, value>`.
    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}
