/// Minimal plain-text tool output.
///
/// One `A:` answer line followed by `N:` notes. The JSON payload travels separately as structured
/// content.
pub(crate) struct TextDocBuilder {
    out: String,
}

impl TextDocBuilder {
    #[must_use]
    pub(crate) fn new() -> Self {
        let mut out = String::new();
        out.push_str("[CONTENT]\n");
        Self { out }
    }

    #[must_use]
    pub(crate) fn finish(self) -> String {
        self.out
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    pub(crate) fn push_blank(&mut self) {
        if !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        self.out.push('\n');
    }

    pub(crate) fn push_answer(&mut self, text: &str) {
        self.push_line(&format!("A: {text}"));
    }

    pub(crate) fn push_note(&mut self, text: &str) {
        self.push_line(&format!("N: {text}"));
    }
}
