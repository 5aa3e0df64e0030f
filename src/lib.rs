//! Realign line number markers in generated (decompiled) source files.
//!
//! Given the generated text and a list of [`language::Position`] records
//! saying which original source line each physical line came from, the
//! [`formatting`] passes split lines carrying several markers, optionally
//! prefix every line with a `/*NN*/` comment, and optionally insert or remove
//! blank lines so that markers sit on their original line numbers. The
//! [`output`] module applies that to a file on disk.

pub mod formatting;
pub mod language;
pub mod output;
pub mod parsing;
