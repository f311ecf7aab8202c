use crate::codegen::extractor::{PathContext, ValueExtractor};
use crate::codegen::naming::{escape_cpp_string, ROOT_NAME};
use crate::codegen::nesting::measure_nesting;
use crate::codegen::types::GeneratorConfig;
use crate::codegen::writer::ProgramWriter;
use crate::error::{GenerateError, Result};
use serde_json::Value;
use tracing::debug;

/// Prefix used for the elements of a root array
const ROOT_ARRAY_PREFIX: &str = "root_";

/// Generates ArduinoJson parsing code for a JSON document
#[derive(Debug, Clone, Default)]
pub struct ParserGenerator {
    config: GeneratorConfig,
}

impl ParserGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        ParserGenerator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Parse `json` and generate the statements that parse it again at
    /// runtime and bind every leaf to a typed variable.
    ///
    /// `buffer_size` is copied verbatim into the `bufferSize` declaration.
    pub fn generate(&self, json: &str, buffer_size: &str) -> Result<String> {
        let root: Value = serde_json::from_str(json).map_err(GenerateError::Parse)?;
        self.generate_value(&root, buffer_size)
    }

    /// Generate code for an already parsed document
    pub fn generate_value(&self, root: &Value, buffer_size: &str) -> Result<String> {
        let mut prg = ProgramWriter::new();

        prg.add_line(format!("const size_t bufferSize = {};", buffer_size));
        prg.add_line("DynamicJsonBuffer jsonBuffer(bufferSize);");
        prg.add_empty_line();

        let compact = serde_json::to_string(root).map_err(GenerateError::Serialize)?;
        prg.add_line(format!("const char* json = \"{}\";", escape_cpp_string(&compact)));
        prg.add_empty_line();

        let nesting = measure_nesting(root);
        let args = self.parse_arguments(nesting);
        let extractor = ValueExtractor::new(self.config.clone());

        match root {
            Value::Array(_) => {
                debug!(nesting, "generating parser for root array");
                prg.add_line(format!("JsonArray& {} = jsonBuffer.parseArray({});", ROOT_NAME, args));
                let ctx = PathContext::new(ROOT_NAME, Some(ROOT_ARRAY_PREFIX.to_string()));
                extractor.extract(root, &ctx, &mut prg);
            }
            Value::Object(_) => {
                debug!(nesting, "generating parser for root object");
                prg.add_line(format!("JsonObject& {} = jsonBuffer.parseObject({});", ROOT_NAME, args));
                // the root object is already addressable, so it never gets a prefix
                let ctx = PathContext::new(ROOT_NAME, None);
                extractor.extract(root, &ctx, &mut prg);
            }
            _ => {
                debug!("generating parser for scalar root");
                prg.add_line(format!("JsonVariant {} = jsonBuffer.parse({});", ROOT_NAME, args));
            }
        }

        debug!(lines = prg.len(), "generated parser program");
        Ok(prg.render())
    }

    /// Arguments for the runtime parse call; deep documents need an
    /// explicit nesting limit.
    fn parse_arguments(&self, nesting: usize) -> String {
        if nesting > self.config.nesting_hint_threshold {
            format!("json, {}", nesting)
        } else {
            "json".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generate(json: &str) -> String {
        ParserGenerator::default()
            .generate(json, "JSON_OBJECT_SIZE(2)")
            .unwrap()
    }

    fn nested(depth: usize) -> String {
        let mut value = json!(1);
        for _ in 0..depth {
            value = json!({ "a": value });
        }
        value.to_string()
    }

    #[test]
    fn test_two_key_object() {
        let out = generate(r#"{"a":1,"b":2}"#);
        let expected = [
            "  const size_t bufferSize = JSON_OBJECT_SIZE(2);",
            "  DynamicJsonBuffer jsonBuffer(bufferSize);",
            "",
            r#"  const char* json = "{\"a\":1,\"b\":2}";"#,
            "",
            "  JsonObject& root = jsonBuffer.parseObject(json);",
            "",
            r#"  int a = root["a"]; // 1"#,
            r#"  int b = root["b"]; // 2"#,
            "",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_root_object_is_never_named() {
        let out = generate(r#"{"a":1,"b":2,"c":{"x":1,"y":2,"z":3}}"#);
        assert!(!out.contains("JsonObject& root_"));
        assert!(out.contains(r#"int a = root["a"]; // 1"#));
        assert!(out.contains(r#"JsonObject& c = root["c"];"#));
        assert!(out.contains(r#"int c_x = c["x"]; // 1"#));
        assert!(out.contains(r#"int c_y = c["y"]; // 2"#));
        assert!(out.contains(r#"int c_z = c["z"]; // 3"#));
        assert_eq!(out.matches("JsonObject&").count(), 2);
    }

    #[test]
    fn test_keys_keep_document_order() {
        let out = generate(r#"{"zeta":1,"alpha":2}"#);
        let zeta = out.find("int zeta").unwrap();
        let alpha = out.find("int alpha").unwrap();
        assert!(zeta < alpha);
        assert!(out.contains(r#"{\"zeta\":1,\"alpha\":2}"#));
    }

    #[test]
    fn test_root_array() {
        let out = generate("[1,2,3,4,5]");
        assert!(out.contains("JsonArray& root = jsonBuffer.parseArray(json);"));
        assert!(out.contains("JsonArray& root_ = root;"));
        assert!(out.contains("int root_0 = root_[0]; // 1"));
        assert!(out.contains("int root_3 = root_[3]; // 4"));
        assert!(!out.contains("root_4"));
    }

    #[test]
    fn test_small_root_array_is_inlined() {
        let out = generate(r#"[true,"on"]"#);
        assert!(!out.contains("JsonArray& root_"));
        assert!(out.contains("bool root_0 = root[0]; // true"));
        assert!(out.contains(r#"const char* root_1 = root[1]; // "on""#));
    }

    #[test]
    fn test_scalar_root() {
        let out = generate("42");
        assert!(out.contains("JsonVariant root = jsonBuffer.parse(json);"));
        assert!(out.ends_with("JsonVariant root = jsonBuffer.parse(json);"));
        assert!(!out.contains("int "));
    }

    #[test]
    fn test_deep_nesting_adds_hint() {
        let out = generate(&nested(12));
        assert!(out.contains("JsonObject& root = jsonBuffer.parseObject(json, 12);"));

        let out = generate(&nested(5));
        assert!(out.contains("JsonObject& root = jsonBuffer.parseObject(json);"));
    }

    #[test]
    fn test_nesting_hint_boundary() {
        assert!(generate(&nested(10)).contains("parseObject(json);"));
        assert!(generate(&nested(11)).contains("parseObject(json, 11);"));
    }

    #[test]
    fn test_quotes_escaped_once() {
        let out = generate(r#"{"msg":"say \"hi\"","k":"v"}"#);
        let literal = out
            .lines()
            .find(|l| l.contains("const char* json"))
            .unwrap();
        assert_eq!(
            literal,
            r#"  const char* json = "{\"msg\":\"say \\\"hi\\\"\",\"k\":\"v\"}";"#
        );
    }

    #[test]
    fn test_buffer_size_is_verbatim() {
        let out = ParserGenerator::default()
            .generate("{}", "JSON_ARRAY_SIZE(3) + 42 /* slack */")
            .unwrap();
        assert!(out.starts_with("  const size_t bufferSize = JSON_ARRAY_SIZE(3) + 42 /* slack */;"));
    }

    #[test]
    fn test_malformed_input_fails() {
        let err = ParserGenerator::default()
            .generate(r#"{"a": [1, 2"#, "0")
            .unwrap_err();
        assert!(matches!(err, GenerateError::Parse(_)));
    }

    #[test]
    fn test_custom_nesting_threshold() {
        let generator = ParserGenerator::new(GeneratorConfig {
            nesting_hint_threshold: 2,
            ..GeneratorConfig::default()
        });
        let out = generator.generate(r#"{"a":{"b":[1]}}"#, "0").unwrap();
        assert!(out.contains("parseObject(json, 3);"));
    }
}
