//! # Parsergen - ArduinoJson Parser Generator
//!
//! Turns a sample JSON document into the C++ statements that parse it with
//! ArduinoJson and extract every value into a typed local variable.
//!
//! ## Quick Start
//!
//! ```rust
//! use parsergen::generate_parser;
//!
//! # fn main() -> anyhow::Result<()> {
//! let code = generate_parser(r#"{"sensor":"gps","time":1351824120}"#, "JSON_OBJECT_SIZE(2)")?;
//!
//! assert!(code.contains("JsonObject& root = jsonBuffer.parseObject(json);"));
//! assert!(code.contains(r#"const char* sensor = root["sensor"]; // "gps""#));
//! assert!(code.contains(r#"long time = root["time"]; // 1351824120"#));
//! # Ok(())
//! # }
//! ```
//!
//! Without a hand-written size expression, one can be derived from the
//! document:
//!
//! ```rust
//! use parsergen::{capacity_expression, ParserGenerator, GeneratorConfig};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let doc = json!({"data": [48.75, 2.30]});
//! let size = capacity_expression(&doc);
//! let code = ParserGenerator::new(GeneratorConfig::default()).generate_value(&doc, &size)?;
//! assert!(code.contains("JSON_ARRAY_SIZE(2) + JSON_OBJECT_SIZE(1)"));
//! # Ok(())
//! # }
//! ```

pub mod codegen;
pub mod error;

// Re-export commonly used types for convenience
pub use codegen::{capacity_expression, CppType, GeneratorConfig, ParserGenerator, ProgramWriter};
pub use error::{GenerateError, Result};

/// Main entry point: generate parsing code for `json` with default settings
pub fn generate_parser(json: &str, buffer_size: &str) -> Result<String> {
    ParserGenerator::default().generate(json, buffer_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_generation() {
        let code = generate_parser(
            r#"{"sensor":"gps","time":1351824120,"data":[48.756080,2.302038]}"#,
            "JSON_ARRAY_SIZE(2) + JSON_OBJECT_SIZE(3)",
        )
        .unwrap();

        assert!(code.contains(r#"const char* sensor = root["sensor"]; // "gps""#));
        assert!(code.contains(r#"long time = root["time"]; // 1351824120"#));
        assert!(code.contains(r#"float data0 = root["data"][0]; // 48.75608"#));
        assert!(code.contains(r#"float data1 = root["data"][1]; // 2.302038"#));
    }

    #[test]
    fn test_truncated_input_produces_no_output() {
        let result = generate_parser(r#"{"sensor":"gp"#, "0");
        assert!(matches!(result, Err(GenerateError::Parse(_))));
    }
}
