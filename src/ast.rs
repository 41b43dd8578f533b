//! Parsed ICU date and number patterns.

use crate::options::PaddingPosition;

/// One element of a date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateItem {
    /// A run of a pattern letter, e.g. `MMM` is `Field { symbol: 'M', width: 3 }`.
    Field { symbol: char, width: usize },
    /// Text copied to the output unchanged.
    Literal(String),
}

/// A compiled date pattern such as `EEEE, MMMM d, y`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatePattern {
    items: Vec<DateItem>,
}

impl DatePattern {
    pub fn new(items: Vec<DateItem>) -> Self {
        DatePattern { items }
    }

    pub fn items(&self) -> &[DateItem] {
        &self.items
    }

    /// Returns true if the pattern contains a field for `symbol`.
    pub fn has_field(&self, symbol: char) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, DateItem::Field { symbol: s, .. } if *s == symbol))
    }
}

/// One element of a number prefix or suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffixPart {
    Literal(String),
    Minus,
    Plus,
    Percent,
    Permill,
    /// `¤` repeated: 1 is the symbol, 2 the ISO code, 3 the currency name.
    Currency(usize),
}

/// A number prefix or suffix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Affix(pub Vec<AffixPart>);

impl Affix {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, part: &AffixPart) -> bool {
        self.0.contains(part)
    }

    pub fn has_currency(&self) -> bool {
        self.0.iter().any(|part| matches!(part, AffixPart::Currency(_)))
    }

    /// The affix preceded by a minus sign, used when no negative subpattern is given.
    pub fn negated(&self) -> Affix {
        let mut parts = Vec::with_capacity(self.0.len() + 1);
        parts.push(AffixPart::Minus);
        parts.extend(self.0.iter().cloned());
        Affix(parts)
    }
}

/// Exponent settings of a scientific pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponent {
    pub min_digits: usize,
    pub show_plus: bool,
}

/// Padding declared with `*x` in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub character: char,
    pub width: usize,
    pub position: PaddingPosition,
}

/// A compiled decimal pattern such as `#,##0.00;(#,##0.00)`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberPattern {
    pub positive_prefix: Affix,
    pub positive_suffix: Affix,
    pub negative_prefix: Affix,
    pub negative_suffix: Affix,
    pub min_integer: usize,
    /// `None` means unbounded.
    pub max_integer: Option<usize>,
    pub min_fraction: usize,
    pub max_fraction: usize,
    /// Primary grouping size; 0 when the pattern has no grouping separator.
    pub grouping: usize,
    /// Secondary grouping size; 0 when it equals the primary size.
    pub secondary_grouping: usize,
    pub decimal_always_shown: bool,
    /// Minimum and maximum significant digits, for `@` patterns.
    pub significant: Option<(usize, usize)>,
    pub exponent: Option<Exponent>,
    pub rounding_increment: Option<f64>,
    pub padding: Option<Padding>,
}

impl NumberPattern {
    /// The implicit multiplier: 100 for percent patterns, 1000 for per-mille.
    pub fn multiplier(&self) -> i64 {
        let affixes = [
            &self.positive_prefix,
            &self.positive_suffix,
            &self.negative_prefix,
            &self.negative_suffix,
        ];
        if affixes.iter().any(|affix| affix.has(&AffixPart::Percent)) {
            100
        } else if affixes.iter().any(|affix| affix.has(&AffixPart::Permill)) {
            1000
        } else {
            1
        }
    }

    pub fn is_currency(&self) -> bool {
        self.positive_prefix.has_currency() || self.positive_suffix.has_currency()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negated_affix() {
        let affix = Affix(vec![AffixPart::Currency(1)]);
        assert_eq!(
            affix.negated(),
            Affix(vec![AffixPart::Minus, AffixPart::Currency(1)])
        );
        assert!(affix.has_currency());
    }

    #[test]
    fn test_has_field() {
        let pattern = DatePattern::new(vec![
            DateItem::Field {
                symbol: 'h',
                width: 1,
            },
            DateItem::Literal(":".to_string()),
        ]);
        assert!(pattern.has_field('h'));
        assert!(!pattern.has_field('a'));
    }
}
