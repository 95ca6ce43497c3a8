//! Splits a generation string into turtle instructions.
//!
//! An instruction is a single character, optionally followed by a parameter
//! group: an opening parenthesis, one or more ASCII digits, and a closing
//! parenthesis, as in `F(12)`. Only symbols from the parameterizable
//! alphabet may carry a group; for everything else a `(` is just another
//! character. Malformed groups are not errors: the symbol comes through
//! bare and the group's characters are re-read as ordinary instructions, so
//! the lexer always makes progress and never rejects input.

/// One decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instruction {
    /// The instruction character as it appeared in the generation string.
    pub symbol: char,
    /// Value of a well-formed trailing `(digits)` group, when present.
    pub value: Option<f32>,
}

/// Returns true for symbols that may carry a parameter group:
/// ASCII letters and `+ - & ^ < > \ / |`.
pub fn is_parameterizable(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '+' | '-' | '&' | '^' | '<' | '>' | '\\' | '/' | '|')
}

/// Iterator over the instructions of one generation string.
#[derive(Clone, Debug)]
pub struct InstructionLexer<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> InstructionLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Byte offset of the next instruction within the source string.
    pub fn offset(&self) -> usize {
        self.cursor
    }
}

impl Iterator for InstructionLexer<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        let rest = &self.source[self.cursor..];
        let symbol = rest.chars().next()?;
        let symbol_len = symbol.len_utf8();

        if is_parameterizable(symbol) {
            if let Some((value, group_len)) = parameter_group(&rest[symbol_len..]) {
                self.cursor += symbol_len + group_len;
                return Some(Instruction {
                    symbol,
                    value: Some(value),
                });
            }
        }

        self.cursor += symbol_len;
        Some(Instruction {
            symbol,
            value: None,
        })
    }
}

/// Parses a leading `(digits)` group. Returns the parsed value and the
/// group's byte length, or `None` when the group is absent or malformed.
fn parameter_group(s: &str) -> Option<(f32, usize)> {
    let body = s.strip_prefix('(')?;
    let digit_count = body.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 || !body[digit_count..].starts_with(')') {
        return None;
    }
    let value = body[..digit_count].parse::<f32>().ok()?;
    Some((value, digit_count + 2))
}
