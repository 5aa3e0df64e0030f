//! Turn a stream of write instructions into the final text

use crate::formatting::printer::LineNumberPrinter;
use crate::formatting::stretcher::Emit;

/// We reformat in passes. First the splitter and the stretcher decide what
/// goes on which line, producing a Vec of instructions. Then this applies
/// them to a printer which adds the leading comments, if asked for.
pub fn render(emits: &[Emit], max_line_number: usize, comments: bool) -> String {
    render_with_ending(emits, max_line_number, comments, "\n")
}

/// As [`render`], terminating each line with the given line ending.
pub fn render_with_ending(
    emits: &[Emit],
    max_line_number: usize,
    comments: bool,
    line_ending: &'static str,
) -> String {
    let mut printer =
        LineNumberPrinter::new(max_line_number, comments).with_line_ending(line_ending);

    for emit in emits {
        match *emit {
            Emit::Line { number, text } => printer.println(number, text),
            Emit::Join { number, text } => printer.join(number, text),
            Emit::Blank => printer.println(None, ""),
        }
    }

    printer.finish()
}
