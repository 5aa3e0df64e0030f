//! Align physical lines with the original line numbers they came from

use tracing::debug;

use crate::language::{LineNumberOptions, Position, PositionError};

/// One write instruction for the line number printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit<'a> {
    /// Write the text and end the physical line.
    Line {
        number: Option<usize>,
        text: &'a str,
    },
    /// Write the text and continue on the same physical line; used as the
    /// last resort when there are no blank lines left to remove.
    Join {
        number: Option<usize>,
        text: &'a str,
    },
    /// An inserted empty line.
    Blank,
}

/// The instruction stream along with each record moved to the physical line
/// where its number ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stretched<'a> {
    pub emits: Vec<Emit<'a>>,
    pub positions: Vec<Position>,
}

/// After splitting, every record refers to a distinct physical line.
fn validate(positions: &[Position], count: usize) -> Result<(), PositionError> {
    let mut previous = 0;

    for (index, position) in positions
        .iter()
        .enumerate()
    {
        if position.original_line == 0 || position.emitted_line == 0 {
            return Err(PositionError::ZeroValue(index));
        }
        if position.emitted_line > count {
            return Err(PositionError::PastEndOfFile(index, count));
        }
        if position.emitted_line <= previous {
            return Err(PositionError::OutOfOrder(index));
        }
        previous = position.emitted_line;
    }

    Ok(())
}

/// Walk the (already split) lines and decide, for each marker, what to write
/// so that it lands as close as possible to its original line number. When
/// stretching is off this only marks which line carries which number.
pub fn stretch<'a>(
    lines: &'a [String],
    positions: &[Position],
    options: LineNumberOptions,
) -> Result<Stretched<'a>, PositionError> {
    validate(positions, lines.len())?;

    let mut stretcher = Stretcher::new(lines);

    for position in positions {
        let adjustment =
            position.original_line as isize - position.emitted_line as isize - stretcher.offset;

        if options.stretched() && adjustment < 0 {
            stretcher.squeeze(position, adjustment);
        } else if options.stretched() {
            stretcher.push_through(position, adjustment);
        } else {
            stretcher.push_through(position, 0);
        }
    }

    while stretcher.cursor < lines.len() {
        let text = stretcher.next_line();
        stretcher.emit(Emit::Line { number: None, text });
    }

    debug!(
        "Stretched {} lines by {}",
        lines.len(),
        stretcher.offset
    );

    Ok(Stretched {
        emits: stretcher.emits,
        positions: stretcher.landed,
    })
}

struct Stretcher<'a> {
    lines: &'a [String],
    emits: Vec<Emit<'a>>,
    landed: Vec<Position>,
    cursor: usize,
    // lines inserted less lines removed so far
    offset: isize,
    // physical lines written so far
    completed: usize,
}

impl<'a> Stretcher<'a> {
    fn new(lines: &'a [String]) -> Stretcher<'a> {
        Stretcher {
            lines,
            emits: Vec::with_capacity(lines.len()),
            landed: Vec::new(),
            cursor: 0,
            offset: 0,
            completed: 0,
        }
    }

    fn next_line(&mut self) -> &'a str {
        let line = self.lines[self.cursor].as_str();
        self.cursor += 1;
        line
    }

    fn emit(&mut self, emit: Emit<'a>) {
        match emit {
            Emit::Line { .. } | Emit::Blank => self.completed += 1,
            Emit::Join { .. } => {}
        }
        self.emits
            .push(emit);
    }

    /// Record that the physical line currently being written carries this
    /// marker.
    fn mark(&mut self, position: &Position) {
        self.landed
            .push(position.moved_to(self.completed + 1));
    }

    /// Copy lines through to the marker, inserting blank lines immediately
    /// before it if the marker is early.
    fn push_through(&mut self, position: &Position, adjustment: isize) {
        while self.cursor < position.emitted_line - 1 {
            let text = self.next_line();
            self.emit(Emit::Line { number: None, text });
        }

        if adjustment > 0 {
            for _ in 0..adjustment {
                self.emit(Emit::Blank);
            }
            self.offset += adjustment;
        }

        let text = self.next_line();
        self.mark(position);
        self.emit(Emit::Line {
            number: Some(position.original_line),
            text,
        });
    }

    /// The marker is late. Remove blank lines before it first; if that is
    /// not enough, join the lines immediately preceding it onto its line.
    fn squeeze(&mut self, position: &Position, mut adjustment: isize) {
        let mut kept = Vec::new();

        while self.cursor < position.emitted_line - 1 {
            let text = self.next_line();
            if adjustment < 0
                && text
                    .trim()
                    .is_empty()
            {
                adjustment += 1;
                self.offset -= 1;
            } else {
                kept.push(text);
            }
        }

        let deficit = adjustment.unsigned_abs();
        let joined = deficit.min(kept.len());
        let boundary = kept.len() - joined;

        for &text in &kept[..boundary] {
            self.emit(Emit::Line { number: None, text });
        }

        let number = Some(position.original_line);
        self.mark(position);

        if joined > 0 {
            debug!(
                "Joining {} lines onto original line {}",
                joined, position.original_line
            );
        }
        for &text in &kept[boundary..] {
            self.emit(Emit::Join { number, text });
        }
        self.offset -= joined as isize;

        // If the deficit is larger than what could be removed the marker
        // stays late; its line is never run into the next marker's.
        if deficit > joined {
            debug!(
                "Original line {} remains {} lines late",
                position.original_line,
                deficit - joined
            );
        }

        let text = self.next_line();
        self.emit(Emit::Line { number, text });
    }
}
