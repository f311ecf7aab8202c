use std::fmt;

/// Append-only buffer of generated statements with indentation tracking
#[derive(Debug, Clone)]
pub struct ProgramWriter {
    lines: Vec<String>,
    indent: usize,
}

impl Default for ProgramWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramWriter {
    /// Create an empty writer at the baseline indent of one level
    pub fn new() -> Self {
        ProgramWriter {
            lines: Vec::new(),
            indent: 1,
        }
    }

    /// Append one line at the current indent
    pub fn add_line(&mut self, line: impl AsRef<str>) {
        let mut text = "  ".repeat(self.indent);
        text.push_str(line.as_ref());
        self.lines.push(text);
    }

    /// Append a blank line unless the buffer is empty or already ends with one
    pub fn add_empty_line(&mut self) {
        if matches!(self.lines.last(), Some(last) if !last.is_empty()) {
            self.lines.push(String::new());
        }
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Balancing with `indent` is up to the caller; stops at zero.
    pub fn unindent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join all lines with newlines
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for ProgramWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
