//! Break physical lines that carry more than one position marker

use tracing::debug;

use crate::language::{Position, PositionError};

/// The result of splitting: the new physical lines, and the position records
/// renumbered so that each refers to its own physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub lines: Vec<String>,
    pub positions: Vec<Position>,
}

/// Check the ordering invariants the splitter relies on. Records must be
/// sorted by emitted line; records sharing an emitted line must have
/// increasing columns and must not go backwards in original line.
pub fn validate(positions: &[Position], count: usize) -> Result<(), PositionError> {
    let mut previous: Option<&Position> = None;

    for (index, position) in positions
        .iter()
        .enumerate()
    {
        if position.original_line == 0 || position.emitted_line == 0 || position.emitted_column == 0
        {
            return Err(PositionError::ZeroValue(index));
        }
        if position.emitted_line > count {
            return Err(PositionError::PastEndOfFile(index, count));
        }

        if let Some(previous) = previous {
            if position.emitted_line < previous.emitted_line {
                return Err(PositionError::OutOfOrder(index));
            }
            if position.emitted_line == previous.emitted_line {
                if position.emitted_column <= previous.emitted_column {
                    return Err(PositionError::ColumnNotIncreasing(index));
                }
                if position.original_line < previous.original_line {
                    return Err(PositionError::OriginalDecreasing(index));
                }
            }
        }

        previous = Some(position);
    }

    Ok(())
}

/// Produce a new set of physical lines in which no line carries more than
/// one marker. Lines holding several co-located records are cut at the
/// recorded columns and each piece is indented to stay under its column.
pub fn split_lines(lines: &[&str], positions: &[Position]) -> Result<Split, PositionError> {
    validate(positions, lines.len())?;

    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut result: Vec<Position> = Vec::with_capacity(positions.len());
    let mut cursor = 0;
    let mut start = 0;

    while start < positions.len() {
        let target = positions[start].emitted_line;
        let end = positions[start..]
            .iter()
            .position(|position| position.emitted_line != target)
            .map_or(positions.len(), |n| start + n);

        // Copy up to but not including the line carrying this group.
        while cursor < target - 1 {
            output.push(lines[cursor].to_string());
            cursor += 1;
        }

        let line = lines[cursor];
        cursor += 1;

        if end - start == 1 {
            output.push(line.to_string());
            result.push(positions[start].moved_to(output.len()));
        } else {
            debug!(
                "Splitting emitted line {} at {} markers",
                target,
                end - start
            );
            cut_line(line, &positions[start..end], start, &mut output, &mut result)?;
        }

        start = end;
    }

    output.extend(
        lines[cursor..]
            .iter()
            .map(|line| line.to_string()),
    );

    Ok(Split {
        lines: output,
        positions: result,
    })
}

fn cut_line(
    line: &str,
    group: &[Position],
    base: usize,
    output: &mut Vec<String>,
    result: &mut Vec<Position>,
) -> Result<(), PositionError> {
    let length = line
        .chars()
        .count();

    // characters already cut off the front of the line
    let mut consumed = 0;
    let mut rest = line;

    // Whatever precedes the first marker belongs to an earlier statement;
    // give it a line of its own unless it is only indentation.
    let first = group[0].emitted_column - 1;
    if first > length {
        return Err(PositionError::ColumnPastEndOfLine(base, length));
    }
    let (head, tail) = split_at_char(rest, first);
    if !head
        .trim()
        .is_empty()
    {
        output.push(head.to_string());
        consumed = first;
        rest = tail;
    }

    for (i, position) in group
        .iter()
        .enumerate()
    {
        let indent = " ".repeat(consumed);

        let piece = match group.get(i + 1) {
            Some(next) => {
                let column = next.emitted_column - 1;
                if column > length {
                    return Err(PositionError::ColumnPastEndOfLine(base + i + 1, length));
                }
                let (piece, tail) = split_at_char(rest, column - consumed);
                rest = tail;
                consumed = column;
                piece
            }
            None => rest,
        };

        output.push(indent + piece);

        // Repeated original lines within one emitted line collapse onto the
        // last piece.
        if i > 0 {
            if let Some(previous) = result.last() {
                if previous.original_line == position.original_line {
                    result.pop();
                }
            }
        }
        result.push(position.moved_to(output.len()));
    }

    Ok(())
}

fn split_at_char(text: &str, count: usize) -> (&str, &str) {
    let offset = text
        .char_indices()
        .nth(count)
        .map_or(text.len(), |(offset, _)| offset);
    text.split_at(offset)
}
