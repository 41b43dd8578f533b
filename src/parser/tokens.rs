//! Token types for the pattern lexer.

/// A token in a date or number pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Quoted text or a character with no special meaning.
    Literal(String),

    // Date patterns
    /// A run of one pattern letter: `yyyy` is `Field('y', 4)`.
    Field(char, usize),

    // Number patterns
    Hash,                 // #
    Digit(u8),            // 0-9
    SignificantDigit,     // @
    GroupingSeparator,    // ,
    DecimalSeparator,     // .
    Exponent,             // E
    Plus,                 // +
    Minus,                // -
    Percent,              // %
    Permill,              // ‰
    Currency(usize),      // ¤, ¤¤, ¤¤¤
    PadEscape(char),      // *x
    SubpatternSeparator,  // ;

    /// End of input.
    Eof,
}

/// A token with its byte position in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
