//! Lexer for ICU date and number patterns.
//!
//! Both pattern kinds share the quoting rules: text between single quotes is
//! literal and `''` stands for one quote, inside or outside quoted text. In
//! date patterns every ASCII letter run becomes a [`Token::Field`]; in number
//! patterns the decimal pattern characters get their own tokens and letters
//! other than `E` are literal.

use crate::error::FormatError;
use crate::parser::tokens::{SpannedToken, Token};

/// Which pattern syntax to tokenize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Date,
    Number,
}

/// A lexer for pattern strings.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    mode: Mode,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, mode: Mode) -> Self {
        Lexer {
            input,
            position: 0,
            mode,
        }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, FormatError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = if ch == '\'' {
            self.lex_quoted()?
        } else {
            match self.mode {
                Mode::Date => self.lex_date(ch),
                Mode::Number => self.lex_number(ch)?,
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns all remaining tokens, ending with [`Token::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, FormatError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn lex_date(&mut self, ch: char) -> Token {
        if ch.is_ascii_alphabetic() {
            Token::Field(ch, self.count_run(|c| c == ch))
        } else {
            self.advance();
            Token::Literal(ch.to_string())
        }
    }

    fn lex_number(&mut self, ch: char) -> Result<Token, FormatError> {
        if ch == '¤' {
            return Ok(Token::Currency(self.count_run(|c| c == '¤')));
        }

        self.advance();
        let token = match ch {
            '#' => Token::Hash,
            '0'..='9' => Token::Digit(ch as u8 - b'0'),
            '@' => Token::SignificantDigit,
            ',' => Token::GroupingSeparator,
            '.' => Token::DecimalSeparator,
            'E' => Token::Exponent,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '%' => Token::Percent,
            '‰' => Token::Permill,
            ';' => Token::SubpatternSeparator,
            '*' => {
                let pad = self.current_char().ok_or_else(|| {
                    FormatError::invalid_pattern(self.input, "pad escape at end of pattern")
                })?;
                self.advance();
                Token::PadEscape(pad)
            }
            _ => Token::Literal(ch.to_string()),
        };
        Ok(token)
    }

    /// Lexes `''` or a quoted section, starting at the opening quote.
    fn lex_quoted(&mut self) -> Result<Token, FormatError> {
        self.advance();
        if self.current_char() == Some('\'') {
            self.advance();
            return Ok(Token::Literal("'".to_string()));
        }

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('\'') => {
                    self.advance();
                    if self.current_char() == Some('\'') {
                        content.push('\'');
                        self.advance();
                    } else {
                        return Ok(Token::Literal(content));
                    }
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => {
                    return Err(FormatError::invalid_pattern(
                        self.input,
                        "unterminated quote",
                    ))
                }
            }
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    fn count_run(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if !predicate(ch) {
                break;
            }
            count += 1;
            self.advance();
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str, mode: Mode) -> Vec<Token> {
        Lexer::new(input, mode)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokens("", Mode::Date), vec![Token::Eof]);
    }

    #[test]
    fn test_date_fields_are_runs() {
        assert_eq!(
            tokens("MMM d, y", Mode::Date),
            vec![
                Token::Field('M', 3),
                Token::Literal(" ".to_string()),
                Token::Field('d', 1),
                Token::Literal(",".to_string()),
                Token::Literal(" ".to_string()),
                Token::Field('y', 1),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            tokens("h 'o''clock' ''", Mode::Date),
            vec![
                Token::Field('h', 1),
                Token::Literal(" ".to_string()),
                Token::Literal("o'clock".to_string()),
                Token::Literal(" ".to_string()),
                Token::Literal("'".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(matches!(
            Lexer::new("'abc", Mode::Date).tokenize(),
            Err(FormatError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_number_tokens() {
        assert_eq!(
            tokens("¤#,##0.00;(#)", Mode::Number),
            vec![
                Token::Currency(1),
                Token::Hash,
                Token::GroupingSeparator,
                Token::Hash,
                Token::Hash,
                Token::Digit(0),
                Token::DecimalSeparator,
                Token::Digit(0),
                Token::Digit(0),
                Token::SubpatternSeparator,
                Token::Literal("(".to_string()),
                Token::Hash,
                Token::Literal(")".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_pad_escape() {
        assert_eq!(
            tokens("*x#", Mode::Number),
            vec![Token::PadEscape('x'), Token::Hash, Token::Eof]
        );
        assert!(Lexer::new("#*", Mode::Number).tokenize().is_err());
    }
}
