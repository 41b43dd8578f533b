//! Parsers for ICU date and decimal patterns.

pub mod lexer;
pub mod tokens;

use crate::ast::{
    Affix, AffixPart, DateItem, DatePattern, Exponent, NumberPattern, Padding,
};
use crate::error::FormatError;
use crate::options::PaddingPosition;
use lexer::{Lexer, Mode};
use tokens::{SpannedToken, Token};

/// Pattern letters understood by the date renderer.
const DATE_FIELDS: &str = "GyYuQqMLwdDEecahHkKmsSzZXxvV";

/// Parses a date pattern such as `EEEE d MMMM y 'à' HH:mm`.
pub fn parse_date_pattern(pattern: &str) -> Result<DatePattern, FormatError> {
    let mut items: Vec<DateItem> = Vec::new();
    for spanned in Lexer::new(pattern, Mode::Date).tokenize()? {
        match spanned.token {
            Token::Field(symbol, width) => {
                if !DATE_FIELDS.contains(symbol) {
                    return Err(FormatError::invalid_pattern(
                        pattern,
                        format!("unknown pattern letter '{symbol}'"),
                    ));
                }
                items.push(DateItem::Field { symbol, width });
            }
            Token::Literal(text) => match items.last_mut() {
                Some(DateItem::Literal(previous)) => previous.push_str(&text),
                _ => items.push(DateItem::Literal(text)),
            },
            Token::Eof => break,
            other => {
                return Err(FormatError::invalid_pattern(
                    pattern,
                    format!("unexpected token {other:?}"),
                ))
            }
        }
    }
    Ok(DatePattern::new(items))
}

/// Parses a decimal pattern such as `#,##0.00 ¤;(#,##0.00 ¤)`.
///
/// Only the affixes of a negative subpattern are used; its number part is
/// ignored.
pub fn parse_number_pattern(pattern: &str) -> Result<NumberPattern, FormatError> {
    if pattern.is_empty() {
        return Err(FormatError::invalid_pattern(pattern, "empty pattern"));
    }

    let tokens = Lexer::new(pattern, Mode::Number).tokenize()?;
    let mut parser = Parser {
        pattern,
        tokens,
        index: 0,
    };

    let positive = parser.parse_subpattern()?;
    let negative = if parser.current() == &Token::SubpatternSeparator {
        parser.advance();
        Some(parser.parse_subpattern()?)
    } else {
        None
    };
    if parser.current() != &Token::Eof {
        return Err(parser.unexpected());
    }

    let (negative_prefix, negative_suffix) = match negative {
        Some(negative) => (negative.prefix, negative.suffix),
        None => (positive.prefix.negated(), positive.suffix.clone()),
    };
    let number = positive.number;

    Ok(NumberPattern {
        positive_prefix: positive.prefix,
        positive_suffix: positive.suffix,
        negative_prefix,
        negative_suffix,
        min_integer: number.min_integer,
        max_integer: number.exponent.map(|_| number.integer_width),
        min_fraction: number.min_fraction,
        max_fraction: number.max_fraction,
        grouping: number.grouping,
        secondary_grouping: number.secondary_grouping,
        decimal_always_shown: number.decimal_always_shown,
        significant: number.significant,
        exponent: number.exponent,
        rounding_increment: number.rounding_increment,
        padding: positive.padding.map(|(character, position)| Padding {
            character,
            width: positive.width,
            position,
        }),
    })
}

struct Subpattern {
    prefix: Affix,
    suffix: Affix,
    number: NumberPart,
    padding: Option<(char, PaddingPosition)>,
    /// Characters of the subpattern, pad escape excluded.
    width: usize,
}

#[derive(Default)]
struct NumberPart {
    min_integer: usize,
    /// Integer placeholders, `#` included.
    integer_width: usize,
    min_fraction: usize,
    max_fraction: usize,
    grouping: usize,
    secondary_grouping: usize,
    decimal_always_shown: bool,
    significant: Option<(usize, usize)>,
    exponent: Option<Exponent>,
    rounding_increment: Option<f64>,
}

struct Parser<'a> {
    pattern: &'a str,
    tokens: Vec<SpannedToken>,
    index: usize,
}

impl<'a> Parser<'a> {
    fn current(&self) -> &Token {
        // `tokenize` always ends with Eof, and `advance` never moves past it.
        &self.tokens[self.index].token
    }

    fn advance(&mut self) {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
    }

    fn width_of_current(&self) -> usize {
        let spanned = &self.tokens[self.index];
        self.pattern[spanned.start..spanned.end].chars().count()
    }

    fn error(&self, reason: impl Into<String>) -> FormatError {
        FormatError::invalid_pattern(self.pattern, reason)
    }

    fn unexpected(&self) -> FormatError {
        let spanned = &self.tokens[self.index];
        self.error(format!(
            "unexpected {:?} at position {}",
            &self.pattern[spanned.start..spanned.end],
            spanned.start
        ))
    }

    fn parse_subpattern(&mut self) -> Result<Subpattern, FormatError> {
        let mut padding = None;
        let mut width = 0;

        self.parse_pad(&mut padding, PaddingPosition::BeforePrefix)?;
        let prefix = self.parse_affix(&mut width);
        self.parse_pad(&mut padding, PaddingPosition::AfterPrefix)?;
        let number = self.parse_number(&mut width)?;
        self.parse_pad(&mut padding, PaddingPosition::BeforeSuffix)?;
        let suffix = self.parse_affix(&mut width);
        self.parse_pad(&mut padding, PaddingPosition::AfterSuffix)?;

        Ok(Subpattern {
            prefix,
            suffix,
            number,
            padding,
            width,
        })
    }

    fn parse_pad(
        &mut self,
        padding: &mut Option<(char, PaddingPosition)>,
        position: PaddingPosition,
    ) -> Result<(), FormatError> {
        if let Token::PadEscape(character) = *self.current() {
            if padding.is_some() {
                return Err(self.error("multiple pad specifiers"));
            }
            *padding = Some((character, position));
            self.advance();
        }
        Ok(())
    }

    fn parse_affix(&mut self, width: &mut usize) -> Affix {
        let mut parts: Vec<AffixPart> = Vec::new();
        loop {
            let part = match self.current() {
                Token::Literal(text) => AffixPart::Literal(text.clone()),
                Token::Exponent => AffixPart::Literal("E".to_string()),
                Token::Plus => AffixPart::Plus,
                Token::Minus => AffixPart::Minus,
                Token::Percent => AffixPart::Percent,
                Token::Permill => AffixPart::Permill,
                Token::Currency(count) => AffixPart::Currency(*count),
                _ => break,
            };
            *width += self.width_of_current();
            self.advance();

            if let AffixPart::Literal(text) = &part {
                if let Some(AffixPart::Literal(previous)) = parts.last_mut() {
                    previous.push_str(text);
                    continue;
                }
            }
            parts.push(part);
        }
        Affix(parts)
    }

    fn parse_number(&mut self, width: &mut usize) -> Result<NumberPart, FormatError> {
        let mut part = NumberPart::default();
        let mut in_fraction = false;
        let mut seen_zero = false;
        let mut seen_fraction_hash = false;
        let mut at_signs = 0;
        let mut trailing_hashes = 0;
        // Digits since the last grouping separator, and the previous group.
        let mut group: Option<usize> = None;
        let mut previous_group: Option<usize> = None;
        let mut increment = String::new();
        let mut has_increment = false;

        loop {
            match *self.current() {
                Token::Hash if !in_fraction => {
                    if seen_zero {
                        return Err(self.unexpected());
                    }
                    if at_signs > 0 {
                        trailing_hashes += 1;
                    }
                    part.integer_width += 1;
                    group = group.map(|n| n + 1);
                    increment.push('0');
                }
                Token::Digit(digit) if !in_fraction => {
                    if at_signs > 0 {
                        return Err(self.error("'0' cannot be combined with '@'"));
                    }
                    seen_zero = true;
                    part.min_integer += 1;
                    part.integer_width += 1;
                    group = group.map(|n| n + 1);
                    has_increment |= digit > 0;
                    increment.push(char::from(b'0' + digit));
                }
                Token::SignificantDigit if !in_fraction => {
                    if seen_zero || trailing_hashes > 0 {
                        return Err(self.unexpected());
                    }
                    at_signs += 1;
                    part.integer_width += 1;
                    group = group.map(|n| n + 1);
                }
                Token::GroupingSeparator if !in_fraction => {
                    previous_group = group;
                    group = Some(0);
                }
                Token::DecimalSeparator if !in_fraction => {
                    if at_signs > 0 {
                        return Err(self.error("'@' cannot be combined with a decimal separator"));
                    }
                    in_fraction = true;
                    increment.push('.');
                }
                Token::Digit(digit) => {
                    if seen_fraction_hash {
                        return Err(self.unexpected());
                    }
                    part.min_fraction += 1;
                    part.max_fraction += 1;
                    has_increment |= digit > 0;
                    increment.push(char::from(b'0' + digit));
                }
                Token::Hash => {
                    seen_fraction_hash = true;
                    part.max_fraction += 1;
                }
                Token::SignificantDigit | Token::GroupingSeparator | Token::DecimalSeparator => {
                    return Err(self.unexpected());
                }
                _ => break,
            }
            *width += self.width_of_current();
            self.advance();
        }

        if part.integer_width == 0 && part.max_fraction == 0 {
            return Err(self.error("pattern has no digits"));
        }
        if group == Some(0) {
            return Err(self.error("grouping separator at end of integer part"));
        }

        part.grouping = group.unwrap_or(0);
        part.secondary_grouping = match previous_group {
            Some(size) if size != part.grouping && size > 0 => size,
            _ => 0,
        };
        part.decimal_always_shown = in_fraction && part.max_fraction == 0;
        if at_signs > 0 {
            part.significant = Some((at_signs, at_signs + trailing_hashes));
        }
        if has_increment {
            part.rounding_increment = increment.parse::<f64>().ok();
        }

        if *self.current() == Token::Exponent {
            *width += self.width_of_current();
            self.advance();
            let show_plus = *self.current() == Token::Plus;
            if show_plus {
                *width += self.width_of_current();
                self.advance();
            }
            let mut min_digits = 0;
            while *self.current() == Token::Digit(0) {
                min_digits += 1;
                *width += self.width_of_current();
                self.advance();
            }
            if min_digits == 0 {
                return Err(self.error("exponent without digits"));
            }
            part.exponent = Some(Exponent {
                min_digits,
                show_plus,
            });
        }

        Ok(part)
    }
}
