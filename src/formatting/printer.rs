//! Writer that prefixes each physical line with its original line number

/// Separator placed between lines that had to be joined together.
pub const JOIN_SEPARATOR: &str = "  ";

/// Accumulates output text, writing a fixed-width `/*NN*/` comment at the
/// start of every physical line when comments are enabled. Lines without a
/// number get a blank comment of the same width so everything aligns.
pub struct LineNumberPrinter {
    buffer: String,
    width: usize,
    comments: bool,
    needs_prefix: bool,
    pending_join: bool,
    line_ending: &'static str,
}

impl LineNumberPrinter {
    pub fn new(max_line_number: usize, comments: bool) -> LineNumberPrinter {
        let width = max_line_number
            .to_string()
            .len();

        LineNumberPrinter {
            buffer: String::new(),
            width,
            comments,
            needs_prefix: true,
            pending_join: false,
            line_ending: "\n",
        }
    }

    /// Terminate lines with `\r\n` (or anything else) instead of `\n`.
    pub fn with_line_ending(self, line_ending: &'static str) -> LineNumberPrinter {
        LineNumberPrinter {
            line_ending,
            ..self
        }
    }

    fn prefix(&mut self, number: Option<usize>) {
        if self.pending_join {
            self.buffer
                .push_str(JOIN_SEPARATOR);
            self.pending_join = false;
        }
        if self.needs_prefix && self.comments {
            let width = self.width;
            let prefix = match number {
                Some(number) => format!("/*{:>width$}*/", number),
                None => format!("/*{:width$}*/", ""),
            };
            self.buffer
                .push_str(&prefix);
        }
        self.needs_prefix = false;
    }

    /// Write text without ending the physical line.
    pub fn print(&mut self, number: Option<usize>, text: &str) {
        self.prefix(number);
        self.buffer
            .push_str(text);
    }

    /// Write text which the next write continues on the same physical line,
    /// after a separator.
    pub fn join(&mut self, number: Option<usize>, text: &str) {
        self.print(number, text);
        self.pending_join = true;
    }

    /// Write text and end the physical line.
    pub fn println(&mut self, number: Option<usize>, text: &str) {
        // nothing follows the separator, so leave it off
        if text.is_empty() {
            self.pending_join = false;
        }
        self.prefix(number);
        self.buffer
            .push_str(text);
        self.buffer
            .push_str(self.line_ending);
        self.needs_prefix = true;
    }

    /// Complete the output, ending a joined line left open at the very end.
    pub fn finish(mut self) -> String {
        if !self.needs_prefix {
            self.buffer
                .push_str(self.line_ending);
        }
        self.buffer
    }
}
