//! ArduinoJson parser code generation
//!
//! This module turns a JSON document into C++ statements that parse the
//! same document at runtime and bind each leaf value to a typed variable.
//!
//! ## Flattening
//!
//! Arrays and objects with more than `max_inline_children` entries get a
//! named `JsonArray&` / `JsonObject&` reference so that the accessor chains
//! of their children stay short. Arrays with a reference only have their
//! first `max_named_array_elements` elements extracted.

pub mod capacity;
pub mod extractor;
pub mod generator;
pub mod naming;
pub mod nesting;
pub mod types;
pub mod writer;

pub use capacity::capacity_expression;
pub use extractor::{Node, PathContext, ValueExtractor};
pub use generator::ParserGenerator;
pub use naming::{make_variable_name, sanitize_name, Segment};
pub use nesting::measure_nesting;
pub use types::{CppType, GeneratorConfig};
pub use writer::ProgramWriter;
