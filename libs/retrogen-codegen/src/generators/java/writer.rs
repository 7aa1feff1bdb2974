//! Minimal Java source writer

const INDENT: &str = "  ";

/// Accumulates Java declarations into a source string
#[derive(Debug, Default)]
pub struct JavaWriter {
    out: String,
    depth: usize,
}

impl JavaWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit_package(&mut self, package: &str) -> &mut Self {
        self.out.push_str(&format!("package {};\n\n", package));
        self
    }

    pub fn emit_imports<I, S>(&mut self, imports: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for import in imports {
            self.out.push_str(&format!("import {};\n", import.as_ref()));
        }
        self
    }

    pub fn emit_empty_line(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Emit a Javadoc block; blank text emits nothing
    pub fn emit_javadoc(&mut self, text: &str) -> &mut Self {
        let lines: Vec<&str> = text.trim().lines().map(str::trim_end).collect();
        if lines.iter().all(|l| l.trim().is_empty()) {
            return self;
        }

        self.line("/**");
        for line in lines {
            let line = line.replace("*/", "*&#47;");
            if line.is_empty() {
                self.line(" *");
            } else {
                self.line(&format!(" * {}", line));
            }
        }
        self.line(" */");
        self
    }

    /// Open a public type declaration (`class`, `interface`)
    pub fn begin_type(&mut self, kind: &str, name: &str) -> &mut Self {
        self.line(&format!("public {} {} {{", kind, name));
        self.depth += 1;
        self
    }

    pub fn end_type(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
        self
    }

    pub fn emit_field(&mut self, type_name: &str, name: &str) -> &mut Self {
        self.line(&format!("public {} {};", type_name, name));
        self
    }

    /// Emit `@name(value)`
    pub fn emit_annotation(&mut self, name: &str, value: &str) -> &mut Self {
        self.line(&format!("@{}({})", name, value));
        self
    }

    /// Emit an abstract method signature
    pub fn emit_method_signature(
        &mut self,
        return_type: &str,
        name: &str,
        parameters: &[String],
    ) -> &mut Self {
        self.line(&format!(
            "{} {}({});",
            return_type,
            name,
            parameters.join(", ")
        ));
        self
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}
