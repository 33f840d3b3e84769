/// Line-oriented text buffer with an indentation level.
///
/// Indentation is written lazily at the first text of a line, so blank lines
/// carry no trailing whitespace.
pub(super) struct Writer<'c> {
    unit: &'c str,
    depth: usize,
    at_line_start: bool,
    output: String,
}

impl<'c> Writer<'c> {
    pub fn new(unit: &'c str) -> Self {
        Self {
            unit,
            depth: 0,
            at_line_start: true,
            output: String::new(),
        }
    }

    pub fn write(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if self.at_line_start {
            for _ in 0..self.depth {
                self.output.push_str(self.unit);
            }
            self.at_line_start = false;
        }
        self.output.push_str(text);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.output.push('\n');
        self.at_line_start = true;
        self
    }

    /// Write `text` and end the line.
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.write(text).newline()
    }

    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Saturates at zero.
    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn finish(self) -> String {
        self.output
    }
}
