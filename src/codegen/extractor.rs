use crate::codegen::naming::{escape_cpp_string, make_variable_name, sanitize_name, Segment};
use crate::codegen::types::{CppType, GeneratorConfig};
use crate::codegen::writer::ProgramWriter;
use serde_json::{Map, Value};
use tracing::trace;

/// Shape of a JSON value as seen by the extractor
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Array(&'a [Value]),
    Object(&'a Map<String, Value>),
    Scalar(&'a Value),
    Null,
}

impl<'a> Node<'a> {
    pub fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Array(arr) => Node::Array(arr),
            Value::Object(obj) => Node::Object(obj),
            Value::Null => Node::Null,
            scalar => Node::Scalar(scalar),
        }
    }
}

/// Where a value lives: the accessor chain used in generated code, and the
/// prefix its variable names are derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    /// Member expression, e.g. `root["a"][2]`
    pub member: String,

    /// Identifier context, absent for the root object
    pub prefix: Option<String>,
}

impl PathContext {
    pub fn new(member: impl Into<String>, prefix: Option<String>) -> Self {
        PathContext {
            member: member.into(),
            prefix,
        }
    }

    /// Context for the `index`-th element below `base`
    pub fn element(&self, base: &str, index: usize) -> Self {
        PathContext {
            member: format!("{}[{}]", base, index),
            prefix: Some(make_variable_name(
                self.prefix.as_deref(),
                Some(Segment::Index(index)),
            )),
        }
    }

    /// Context for the member `key` below `base`
    pub fn field(&self, base: &str, key: &str) -> Self {
        let name = sanitize_name(key);
        PathContext {
            member: format!("{}[\"{}\"]", base, escape_cpp_string(key)),
            prefix: Some(make_variable_name(
                self.prefix.as_deref(),
                Some(Segment::Key(&name)),
            )),
        }
    }

    /// Variable name for this path
    pub fn variable_name(&self) -> String {
        make_variable_name(self.prefix.as_deref(), None)
    }

    /// Only a non-empty prefix can name a reference
    fn can_name_reference(&self) -> bool {
        self.prefix.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Walks a JSON tree and writes one declaration per leaf value
pub struct ValueExtractor {
    config: GeneratorConfig,
}

impl ValueExtractor {
    pub fn new(config: GeneratorConfig) -> Self {
        ValueExtractor { config }
    }

    /// Recursively write declarations for every leaf below `value`
    pub fn extract(&self, value: &Value, ctx: &PathContext, prg: &mut ProgramWriter) {
        match Node::from_value(value) {
            Node::Array(arr) => self.extract_from_array(arr, ctx, prg),
            Node::Object(obj) => self.extract_from_object(obj, ctx, prg),
            Node::Scalar(scalar) => Self::extract_scalar(scalar, ctx, prg),
            Node::Null => trace!(member = %ctx.member, "skipping null value"),
        }
    }

    fn extract_from_array(&self, arr: &[Value], ctx: &PathContext, prg: &mut ProgramWriter) {
        prg.add_empty_line();

        if self.should_name_reference(ctx, arr.len()) {
            let array_name = ctx.variable_name();
            trace!(name = %array_name, len = arr.len(), "naming array reference");
            prg.add_line(format!("JsonArray& {} = {};", array_name, ctx.member));

            // Large arrays are previewed, not fully unrolled
            let take = arr.len().min(self.config.max_named_array_elements);
            for (i, item) in arr.iter().take(take).enumerate() {
                self.extract(item, &ctx.element(&array_name, i), prg);
            }
        } else {
            for (i, item) in arr.iter().enumerate() {
                self.extract(item, &ctx.element(&ctx.member, i), prg);
            }
        }

        prg.add_empty_line();
    }

    fn extract_from_object(
        &self,
        obj: &Map<String, Value>,
        ctx: &PathContext,
        prg: &mut ProgramWriter,
    ) {
        prg.add_empty_line();

        if self.should_name_reference(ctx, obj.len()) {
            let object_name = ctx.variable_name();
            trace!(name = %object_name, len = obj.len(), "naming object reference");
            prg.add_line(format!("JsonObject& {} = {};", object_name, ctx.member));

            for (key, value) in obj.iter() {
                self.extract(value, &ctx.field(&object_name, key), prg);
            }
        } else {
            for (key, value) in obj.iter() {
                self.extract(value, &ctx.field(&ctx.member, key), prg);
            }
        }

        prg.add_empty_line();
    }

    fn extract_scalar(value: &Value, ctx: &PathContext, prg: &mut ProgramWriter) {
        let Some(cpp_type) = CppType::for_value(value) else {
            return;
        };

        prg.add_line(format!(
            "{} {} = {}; // {}",
            cpp_type,
            ctx.variable_name(),
            ctx.member,
            value
        ));
    }

    /// Check if a composite with `children` entries gets its own reference
    fn should_name_reference(&self, ctx: &PathContext, children: usize) -> bool {
        ctx.can_name_reference() && children > self.config.max_inline_children
    }
}
