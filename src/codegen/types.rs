use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Whole numbers strictly inside this bound fit the compact `int` type
const COMPACT_INT_LIMIT: i64 = 32000;

/// C++ type of a generated leaf declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CppType {
    /// `const char*`
    Str,
    /// `float`
    Float,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `bool`
    Bool,
}

impl CppType {
    /// Infer the declaration type for a scalar value.
    ///
    /// Returns `None` for `null` and for arrays or objects, which never get
    /// a leaf declaration.
    pub fn for_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => Some(CppType::Str),
            Value::Bool(_) => Some(CppType::Bool),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::for_integer(i))
                } else if n.is_u64() {
                    Some(CppType::Long)
                } else {
                    n.as_f64().map(Self::for_float)
                }
            }
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn for_integer(i: i64) -> Self {
        if i > -COMPACT_INT_LIMIT && i < COMPACT_INT_LIMIT {
            CppType::Int
        } else {
            CppType::Long
        }
    }

    fn for_float(f: f64) -> Self {
        if f.fract() != 0.0 {
            CppType::Float
        } else if f > -(COMPACT_INT_LIMIT as f64) && f < COMPACT_INT_LIMIT as f64 {
            CppType::Int
        } else {
            CppType::Long
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CppType::Str => "const char*",
            CppType::Float => "float",
            CppType::Int => "int",
            CppType::Long => "long",
            CppType::Bool => "bool",
        }
    }
}

impl fmt::Display for CppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for code generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Composites with more children than this get a named reference
    pub max_inline_children: usize,

    /// Elements extracted from an array that got a named reference
    pub max_named_array_elements: usize,

    /// Nesting depth above which the depth is passed to the parse call
    pub nesting_hint_threshold: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_inline_children: 2,
            max_named_array_elements: 4,
            nesting_hint_threshold: 10,
        }
    }
}
