//! Decimal, currency, percent and scientific rendering, plus the rule-based
//! spellout, ordinal and duration styles.

use crate::ast::{Affix, AffixPart, Exponent, NumberPattern};
use crate::error::FormatError;
use crate::locale::LocaleData;
use crate::native::constants::number as nf;
use crate::native::{NativeNumberFormatter, Number, NumericValue};
use crate::options::{
    AttributeFormat, OptionEnum, PaddingPosition, RoundingMode, StyleFormat, SymbolFormat,
    TextFormat,
};
use crate::parser::parse_number_pattern;

use super::digits::Digits;
use super::spellout;

const SYMBOL_COUNT: usize = 18;

/// Reported as the maximum integer digits when no limit is set.
const UNLIMITED_INTEGER_DIGITS: i64 = 2_000_000_000;

/// Upper bound for digit counts, grouping sizes and format width.
const MAX_DIGIT_COUNT: usize = 999;

/// Significant digit bounds used when only one bound has been set.
const DEFAULT_SIGNIFICANT: (usize, usize) = (1, 6);

const SPELLOUT_RULESETS: &[&str] = &[
    "%spellout-numbering",
    "%spellout-cardinal",
    "%spellout-ordinal",
];
const ORDINAL_RULESETS: &[&str] = &["%digits-ordinal"];
const DURATION_RULESETS: &[&str] = &["%in-numerals", "%with-words"];

/// Decimal format state: seeded from a pattern, then tuned by attributes.
#[derive(Debug, Clone)]
struct DecimalSettings {
    grouping_used: bool,
    decimal_always_shown: bool,
    min_integer: usize,
    max_integer: Option<usize>,
    min_fraction: usize,
    max_fraction: usize,
    multiplier: i64,
    grouping: usize,
    secondary_grouping: usize,
    rounding_mode: RoundingMode,
    rounding_increment: Option<f64>,
    format_width: usize,
    padding_position: PaddingPosition,
    pad_character: char,
    significant: Option<(usize, usize)>,
    lenient_parse: bool,
    /// Fraction digits were set by attribute rather than by the pattern.
    fraction_set: bool,
}

impl DecimalSettings {
    fn from_pattern(pattern: &NumberPattern) -> Self {
        DecimalSettings {
            grouping_used: pattern.grouping > 0,
            decimal_always_shown: pattern.decimal_always_shown,
            min_integer: pattern.min_integer,
            max_integer: pattern.max_integer,
            min_fraction: pattern.min_fraction,
            max_fraction: pattern.max_fraction,
            multiplier: pattern.multiplier(),
            grouping: pattern.grouping,
            secondary_grouping: pattern.secondary_grouping,
            rounding_mode: RoundingMode::HalfEven,
            rounding_increment: pattern.rounding_increment,
            format_width: pattern.padding.map_or(0, |p| p.width),
            padding_position: pattern
                .padding
                .map_or(PaddingPosition::BeforePrefix, |p| p.position),
            pad_character: pattern.padding.map_or(' ', |p| p.character),
            significant: pattern.significant,
            lenient_parse: false,
            fraction_set: false,
        }
    }
}

/// A number formatter driven by the built-in locale data.
#[derive(Debug)]
pub(crate) struct BuiltinNumberFormatter {
    data: &'static LocaleData,
    style: StyleFormat,
    compiled: NumberPattern,
    settings: DecimalSettings,
    /// Text overrides for positive prefix, positive suffix, negative prefix
    /// and negative suffix.
    affixes: [Option<String>; 4],
    symbols: [String; SYMBOL_COUNT],
    currency: String,
    ruleset: Option<&'static str>,
}

impl BuiltinNumberFormatter {
    pub(crate) fn new(locale: &str, style: i32) -> Result<Self, FormatError> {
        let style = StyleFormat::from_native(style)?;
        let data = LocaleData::for_locale(locale);
        let currency = data.currency_for(locale).to_string();

        let pattern = match style {
            StyleFormat::Currency => data.currency_pattern,
            StyleFormat::Percent => data.percent_pattern,
            StyleFormat::Scientific => data.scientific_pattern,
            _ => data.decimal_pattern,
        };
        let compiled = parse_number_pattern(pattern)?;
        let ruleset = match style {
            StyleFormat::Spellout => Some(SPELLOUT_RULESETS[0]),
            StyleFormat::Ordinal => Some(ORDINAL_RULESETS[0]),
            StyleFormat::Duration => Some(DURATION_RULESETS[0]),
            _ => None,
        };

        Ok(BuiltinNumberFormatter {
            data,
            style,
            settings: DecimalSettings::from_pattern(&compiled),
            compiled,
            affixes: Default::default(),
            symbols: std::array::from_fn(|i| default_symbol(data, &currency, i as i32)),
            currency,
            ruleset,
        })
    }

    fn is_rule_based(&self) -> bool {
        matches!(
            self.style,
            StyleFormat::Spellout | StyleFormat::Ordinal | StyleFormat::Duration
        )
    }

    fn public_rulesets(&self) -> &'static [&'static str] {
        match self.style {
            StyleFormat::Spellout => SPELLOUT_RULESETS,
            StyleFormat::Ordinal => ORDINAL_RULESETS,
            StyleFormat::Duration => DURATION_RULESETS,
            _ => &[],
        }
    }

    fn symbol_text(&self, symbol: i32) -> &str {
        &self.symbols[symbol as usize]
    }

    fn set_currency(&mut self, code: &str) -> Result<(), FormatError> {
        let code = code.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FormatError::native(format!("invalid currency code \"{}\"", code)));
        }
        self.symbols[nf::CURRENCY_SYMBOL as usize] = self.data.currency_symbol(&code);
        self.symbols[nf::INTL_CURRENCY_SYMBOL as usize] = code.clone();
        self.currency = code;
        Ok(())
    }

    /// Renders a number through the decimal pattern. `currency` overrides
    /// the formatter's own currency.
    fn format_decimal(&self, number: Number, currency: Option<&str>) -> String {
        let mut negative = match number {
            Number::Int(n) => n < 0,
            Number::Float(f) => {
                if f.is_nan() {
                    return self.symbol_text(nf::NAN_SYMBOL).to_string();
                }
                f.is_sign_negative()
            }
        };
        if self.settings.multiplier < 0 {
            negative = !negative;
        }

        if matches!(number, Number::Float(f) if f.is_infinite()) {
            return self.assemble(self.symbol_text(nf::INFINITY_SYMBOL), negative, currency);
        }

        let digits = scaled_digits(number, self.settings.multiplier);
        let body = match self.compiled.exponent {
            Some(exponent) => self.scientific(digits, negative, exponent),
            None => self.fixed(digits, negative, currency.unwrap_or(&self.currency)),
        };
        self.assemble(&body, negative, currency)
    }

    fn fraction_bounds(&self, currency: &str) -> (usize, usize) {
        if self.compiled.is_currency() && !self.settings.fraction_set {
            let digits = LocaleData::currency_fraction_digits(currency);
            (digits, digits)
        } else {
            (self.settings.min_fraction, self.settings.max_fraction)
        }
    }

    fn fixed(&self, mut digits: Digits, negative: bool, currency: &str) -> String {
        let s = &self.settings;
        let (integer, fraction) = match s.significant {
            Some((min_significant, max_significant)) => {
                digits.round_significant(max_significant, s.rounding_mode, negative);
                let min_fraction = if digits.is_zero() {
                    min_significant.saturating_sub(1)
                } else if digits.point() > 0 {
                    min_significant.saturating_sub(digits.point() as usize)
                } else {
                    digits.point().unsigned_abs() as usize + min_significant
                };
                (
                    digits.integer_digits(1, None),
                    digits.fraction_digits(min_fraction),
                )
            }
            None => {
                let (min_fraction, max_fraction) = self.fraction_bounds(currency);
                if let Some(increment) = s.rounding_increment {
                    digits = round_to_increment(&digits, increment, s.rounding_mode, negative);
                }
                digits.round_fraction(to_i32(max_fraction), s.rounding_mode, negative);
                (
                    digits.integer_digits(s.min_integer, s.max_integer),
                    digits.fraction_digits(min_fraction),
                )
            }
        };

        let (decimal, grouping) = if self.compiled.is_currency() {
            (nf::MONETARY_SEPARATOR_SYMBOL, nf::MONETARY_GROUPING_SEPARATOR_SYMBOL)
        } else {
            (nf::DECIMAL_SEPARATOR_SYMBOL, nf::GROUPING_SEPARATOR_SYMBOL)
        };

        let mut body = if integer.is_empty() && fraction.is_empty() {
            self.localize(&[0])
        } else {
            self.group(&integer, self.symbol_text(grouping))
        };
        if !fraction.is_empty() || s.decimal_always_shown {
            body.push_str(self.symbol_text(decimal));
            body.push_str(&self.localize(&fraction));
        }
        body
    }

    fn scientific(&self, mut digits: Digits, negative: bool, exponent: Exponent) -> String {
        let s = &self.settings;
        let min_integer = s.min_integer.max(1);
        let max_integer = s.max_integer.unwrap_or(min_integer);
        let engineering = max_integer > min_integer && max_integer > 1;

        let mut power = 0;
        if !digits.is_zero() {
            power = if engineering {
                let step = to_i32(max_integer);
                (digits.point() - 1).div_euclid(step) * step
            } else {
                digits.point() - to_i32(min_integer)
            };
            digits.scale(-power);
            match s.significant {
                Some((_, max_significant)) => {
                    digits.round_significant(max_significant, s.rounding_mode, negative)
                }
                None => digits.round_fraction(to_i32(s.max_fraction), s.rounding_mode, negative),
            }
            let (limit, step) = if engineering {
                (to_i32(max_integer), to_i32(max_integer))
            } else {
                (to_i32(min_integer), 1)
            };
            if digits.point() > limit {
                digits.scale(-step);
                power += step;
            }
        }

        let integer = digits.integer_digits(if engineering { 1 } else { min_integer }, None);
        let fraction = digits.fraction_digits(s.min_fraction);
        let mut body = self.localize(&integer);
        if !fraction.is_empty() || s.decimal_always_shown {
            body.push_str(self.symbol_text(nf::DECIMAL_SEPARATOR_SYMBOL));
            body.push_str(&self.localize(&fraction));
        }
        body.push_str(self.symbol_text(nf::EXPONENTIAL_SYMBOL));
        if power < 0 {
            body.push_str(self.symbol_text(nf::MINUS_SIGN_SYMBOL));
        } else if exponent.show_plus {
            body.push_str(self.symbol_text(nf::PLUS_SIGN_SYMBOL));
        }
        let magnitude = format!(
            "{:0width$}",
            power.unsigned_abs(),
            width = exponent.min_digits
        );
        let exponent_digits: Vec<u8> = magnitude.bytes().map(|b| b - b'0').collect();
        body.push_str(&self.localize(&exponent_digits));
        body
    }

    /// Maps digits onto the zero digit symbol.
    fn localize(&self, digits: &[u8]) -> String {
        let zero = self
            .symbol_text(nf::ZERO_DIGIT_SYMBOL)
            .chars()
            .next()
            .unwrap_or('0');
        digits
            .iter()
            .map(|d| char::from_u32(zero as u32 + u32::from(*d)).unwrap_or('0'))
            .collect()
    }

    fn group(&self, integer: &[u8], separator: &str) -> String {
        let s = &self.settings;
        let secondary = if s.secondary_grouping > 0 {
            s.secondary_grouping
        } else {
            s.grouping
        };
        let len = integer.len();
        let mut out = String::new();
        for (i, digit) in integer.iter().enumerate() {
            let remaining = len - i;
            if i > 0
                && s.grouping_used
                && s.grouping > 0
                && remaining >= s.grouping
                && (remaining - s.grouping) % secondary == 0
            {
                out.push_str(separator);
            }
            out.push_str(&self.localize(&[*digit]));
        }
        out
    }

    fn expand(&self, affix: &Affix, currency: Option<&str>) -> String {
        let mut out = String::new();
        for part in &affix.0 {
            match part {
                AffixPart::Literal(text) => out.push_str(text),
                AffixPart::Minus => out.push_str(self.symbol_text(nf::MINUS_SIGN_SYMBOL)),
                AffixPart::Plus => out.push_str(self.symbol_text(nf::PLUS_SIGN_SYMBOL)),
                AffixPart::Percent => out.push_str(self.symbol_text(nf::PERCENT_SYMBOL)),
                AffixPart::Permill => out.push_str(self.symbol_text(nf::PERMILL_SYMBOL)),
                AffixPart::Currency(1) => match currency {
                    Some(code) => out.push_str(&self.data.currency_symbol(code)),
                    None => out.push_str(self.symbol_text(nf::CURRENCY_SYMBOL)),
                },
                AffixPart::Currency(_) => match currency {
                    Some(code) => out.push_str(code),
                    None => out.push_str(self.symbol_text(nf::INTL_CURRENCY_SYMBOL)),
                },
            }
        }
        out
    }

    fn affix_text(&self, attribute: i32, currency: Option<&str>) -> String {
        if let Some(text) = &self.affixes[attribute as usize] {
            return text.clone();
        }
        let affix = match attribute {
            nf::POSITIVE_PREFIX => &self.compiled.positive_prefix,
            nf::POSITIVE_SUFFIX => &self.compiled.positive_suffix,
            nf::NEGATIVE_PREFIX => &self.compiled.negative_prefix,
            _ => &self.compiled.negative_suffix,
        };
        self.expand(affix, currency)
    }

    /// Wraps a number body in its affixes and pads it to the format width.
    fn assemble(&self, body: &str, negative: bool, currency: Option<&str>) -> String {
        let (prefix_attr, suffix_attr) = if negative {
            (nf::NEGATIVE_PREFIX, nf::NEGATIVE_SUFFIX)
        } else {
            (nf::POSITIVE_PREFIX, nf::POSITIVE_SUFFIX)
        };
        let mut prefix = self.affix_text(prefix_attr, currency);
        let mut suffix = self.affix_text(suffix_attr, currency);

        let starts_with_digit = body.chars().next().is_some_and(|c| c.is_numeric());
        let ends_with_digit = body.chars().last().is_some_and(|c| c.is_numeric());
        if starts_with_digit && prefix.chars().last().is_some_and(char::is_alphabetic) {
            prefix.push('\u{a0}');
        }
        if ends_with_digit && suffix.chars().next().is_some_and(char::is_alphabetic) {
            suffix.insert(0, '\u{a0}');
        }

        let s = &self.settings;
        let len = prefix.chars().count() + body.chars().count() + suffix.chars().count();
        if s.format_width <= len {
            return format!("{}{}{}", prefix, body, suffix);
        }
        let pad: String = std::iter::repeat(s.pad_character)
            .take(s.format_width - len)
            .collect();
        match s.padding_position {
            PaddingPosition::BeforePrefix => format!("{}{}{}{}", pad, prefix, body, suffix),
            PaddingPosition::AfterPrefix => format!("{}{}{}{}", prefix, pad, body, suffix),
            PaddingPosition::BeforeSuffix => format!("{}{}{}{}", prefix, body, pad, suffix),
            PaddingPosition::AfterSuffix => format!("{}{}{}{}", prefix, body, suffix, pad),
        }
    }

    fn spellout(&self, number: Number) -> String {
        if self.data.language != "en" {
            return self.format_decimal(number, None);
        }
        if let Number::Float(f) = number {
            if f.is_nan() {
                return self.symbol_text(nf::NAN_SYMBOL).to_string();
            }
            if f.is_infinite() {
                let sign = if f < 0.0 { "minus " } else { "" };
                return format!("{}infinity", sign);
            }
        }
        match integral(number) {
            Some(n) => {
                let sign = if n < 0 { "minus " } else { "" };
                let words = if self.ruleset == Some("%spellout-ordinal") {
                    spellout::ordinal(n.unsigned_abs())
                } else {
                    spellout::cardinal(n.unsigned_abs())
                };
                format!("{}{}", sign, words)
            }
            None => spellout::spell(number.as_f64()),
        }
    }

    fn ordinal(&self, number: Number) -> String {
        match integral(number) {
            Some(n) => format!(
                "{}{}",
                self.format_decimal(Number::Int(n), None),
                spellout::ordinal_suffix(self.data.language, n.unsigned_abs())
            ),
            None => self.format_decimal(number, None),
        }
    }

    fn duration(&self, number: Number) -> String {
        let seconds = match number {
            Number::Int(n) => n,
            Number::Float(f) if f.is_nan() => {
                return self.symbol_text(nf::NAN_SYMBOL).to_string();
            }
            Number::Float(f) => f as i64,
        };
        if self.ruleset == Some("%with-words") {
            spellout::duration_words(seconds)
        } else {
            spellout::duration_numerals(seconds)
        }
    }
}

impl NativeNumberFormatter for BuiltinNumberFormatter {
    fn set_attribute(&mut self, attribute: i32, value: NumericValue) -> Result<(), FormatError> {
        let s = &mut self.settings;
        let count = usize::try_from(value.as_i64())
            .unwrap_or(0)
            .min(MAX_DIGIT_COUNT);
        let flag = value.as_i64() != 0;
        match attribute {
            nf::GROUPING_USED => s.grouping_used = flag,
            nf::DECIMAL_ALWAYS_SHOWN => s.decimal_always_shown = flag,
            nf::MAX_INTEGER_DIGITS => {
                s.max_integer = Some(count);
                s.min_integer = s.min_integer.min(count);
            }
            nf::MIN_INTEGER_DIGITS => {
                s.min_integer = count;
                s.max_integer = s.max_integer.map(|max| max.max(count));
            }
            nf::INTEGER_DIGITS => {
                s.min_integer = count;
                s.max_integer = Some(count);
            }
            nf::MAX_FRACTION_DIGITS => {
                s.max_fraction = count;
                s.min_fraction = s.min_fraction.min(count);
                s.fraction_set = true;
            }
            nf::MIN_FRACTION_DIGITS => {
                s.min_fraction = count;
                s.max_fraction = s.max_fraction.max(count);
                s.fraction_set = true;
            }
            nf::FRACTION_DIGITS => {
                s.min_fraction = count;
                s.max_fraction = count;
                s.fraction_set = true;
            }
            nf::MULTIPLIER => {
                s.multiplier = match value.as_i64() {
                    0 => 1,
                    n => n,
                }
            }
            nf::GROUPING_SIZE => s.grouping = count,
            nf::SECONDARY_GROUPING_SIZE => s.secondary_grouping = count,
            nf::ROUNDING_MODE => {
                s.rounding_mode =
                    RoundingMode::from_native(i32::try_from(value.as_i64()).unwrap_or(-1))?
            }
            nf::ROUNDING_INCREMENT => {
                let increment = value.as_f64();
                s.rounding_increment = (increment > 0.0).then_some(increment);
            }
            nf::FORMAT_WIDTH => s.format_width = count,
            nf::PADDING_POSITION => {
                s.padding_position =
                    PaddingPosition::from_native(i32::try_from(value.as_i64()).unwrap_or(-1))?
            }
            nf::SIGNIFICANT_DIGITS_USED => {
                let current = s.significant.unwrap_or(DEFAULT_SIGNIFICANT);
                s.significant = flag.then_some(current);
            }
            nf::MIN_SIGNIFICANT_DIGITS => {
                let (_, max) = s.significant.unwrap_or(DEFAULT_SIGNIFICANT);
                let min = count.max(1);
                s.significant = Some((min, max.max(min)));
            }
            nf::MAX_SIGNIFICANT_DIGITS => {
                let (min, _) = s.significant.unwrap_or(DEFAULT_SIGNIFICANT);
                let max = count.max(1);
                s.significant = Some((min.min(max), max));
            }
            nf::LENIENT_PARSE => s.lenient_parse = flag,
            _ => {
                return Err(FormatError::UnsupportedConstant {
                    domain: AttributeFormat::DOMAIN,
                    value: attribute,
                })
            }
        }
        Ok(())
    }

    fn set_text_attribute(&mut self, attribute: i32, value: &str) -> Result<(), FormatError> {
        match attribute {
            nf::POSITIVE_PREFIX..=nf::NEGATIVE_SUFFIX => {
                self.affixes[attribute as usize] = Some(value.to_string());
            }
            nf::PADDING_CHARACTER => {
                self.settings.pad_character = value
                    .chars()
                    .next()
                    .ok_or_else(|| FormatError::native("empty padding character"))?;
            }
            nf::CURRENCY_CODE => self.set_currency(value)?,
            nf::DEFAULT_RULESET => {
                let ruleset = self
                    .public_rulesets()
                    .iter()
                    .find(|name| **name == value)
                    .ok_or_else(|| FormatError::native(format!("unknown ruleset \"{}\"", value)))?;
                self.ruleset = Some(*ruleset);
            }
            nf::PUBLIC_RULESETS => {
                return Err(FormatError::native("public rulesets can not be changed"))
            }
            _ => {
                return Err(FormatError::UnsupportedConstant {
                    domain: TextFormat::DOMAIN,
                    value: attribute,
                })
            }
        }
        Ok(())
    }

    fn set_symbol(&mut self, symbol: i32, value: &str) -> Result<(), FormatError> {
        match usize::try_from(symbol) {
            Ok(index) if index < SYMBOL_COUNT => {
                self.symbols[index] = value.to_string();
                Ok(())
            }
            _ => Err(FormatError::UnsupportedConstant {
                domain: SymbolFormat::DOMAIN,
                value: symbol,
            }),
        }
    }

    fn set_pattern(&mut self, pattern: &str) -> Result<(), FormatError> {
        if self.is_rule_based() {
            return Err(FormatError::invalid_pattern(
                pattern,
                format!("the {} style does not accept decimal patterns", self.style),
            ));
        }
        let compiled = parse_number_pattern(pattern)?;
        let mut settings = DecimalSettings::from_pattern(&compiled);
        settings.rounding_mode = self.settings.rounding_mode;
        settings.lenient_parse = self.settings.lenient_parse;

        self.compiled = compiled;
        self.settings = settings;
        self.affixes = Default::default();
        Ok(())
    }

    fn attribute(&self, attribute: i32) -> Option<NumericValue> {
        let s = &self.settings;
        let int = |n: usize| Some(NumericValue::Int(n as i64));
        let flag = |b: bool| Some(NumericValue::Int(i64::from(b)));
        let (min_significant, max_significant) = s.significant.unwrap_or(DEFAULT_SIGNIFICANT);
        match attribute {
            nf::GROUPING_USED => flag(s.grouping_used),
            nf::DECIMAL_ALWAYS_SHOWN => flag(s.decimal_always_shown),
            nf::MAX_INTEGER_DIGITS => Some(NumericValue::Int(
                s.max_integer.map_or(UNLIMITED_INTEGER_DIGITS, |n| n as i64),
            )),
            nf::MIN_INTEGER_DIGITS | nf::INTEGER_DIGITS => int(s.min_integer),
            nf::MAX_FRACTION_DIGITS => int(s.max_fraction),
            nf::MIN_FRACTION_DIGITS | nf::FRACTION_DIGITS => int(s.min_fraction),
            nf::MULTIPLIER => Some(NumericValue::Int(s.multiplier)),
            nf::GROUPING_SIZE => int(s.grouping),
            nf::SECONDARY_GROUPING_SIZE => int(s.secondary_grouping),
            nf::ROUNDING_MODE => Some(NumericValue::Int(s.rounding_mode.to_native().into())),
            nf::ROUNDING_INCREMENT => Some(NumericValue::Float(s.rounding_increment.unwrap_or(0.0))),
            nf::FORMAT_WIDTH => int(s.format_width),
            nf::PADDING_POSITION => Some(NumericValue::Int(s.padding_position.to_native().into())),
            nf::SIGNIFICANT_DIGITS_USED => flag(s.significant.is_some()),
            nf::MIN_SIGNIFICANT_DIGITS => int(min_significant),
            nf::MAX_SIGNIFICANT_DIGITS => int(max_significant),
            nf::LENIENT_PARSE => flag(s.lenient_parse),
            _ => None,
        }
    }

    fn text_attribute(&self, attribute: i32) -> Option<String> {
        match attribute {
            nf::POSITIVE_PREFIX..=nf::NEGATIVE_SUFFIX => Some(self.affix_text(attribute, None)),
            nf::PADDING_CHARACTER => Some(self.settings.pad_character.to_string()),
            nf::CURRENCY_CODE => Some(self.currency.clone()),
            nf::DEFAULT_RULESET => self.ruleset.map(str::to_string),
            nf::PUBLIC_RULESETS if self.is_rule_based() => Some(self.public_rulesets().join(";")),
            _ => None,
        }
    }

    fn symbol(&self, symbol: i32) -> Option<String> {
        usize::try_from(symbol)
            .ok()
            .and_then(|index| self.symbols.get(index))
            .cloned()
    }

    fn format(&self, number: Number, format_type: i32) -> Option<String> {
        let number = match format_type {
            nf::TYPE_DEFAULT => number,
            nf::TYPE_INT32 => Number::Int(i64::from(truncate(number) as i32)),
            nf::TYPE_INT64 => Number::Int(truncate(number)),
            nf::TYPE_DOUBLE => Number::Float(number.as_f64()),
            _ => return None,
        };
        Some(match self.style {
            StyleFormat::Spellout => self.spellout(number),
            StyleFormat::Ordinal => self.ordinal(number),
            StyleFormat::Duration => self.duration(number),
            _ => self.format_decimal(number, None),
        })
    }

    fn format_currency(&self, amount: f64, currency: &str) -> Option<String> {
        if self.is_rule_based() {
            return None;
        }
        let code = currency.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(self.format_decimal(Number::Float(amount), Some(&code)))
    }
}

fn default_symbol(data: &LocaleData, currency: &str, symbol: i32) -> String {
    let text = match symbol {
        nf::DECIMAL_SEPARATOR_SYMBOL | nf::MONETARY_SEPARATOR_SYMBOL => data.decimal_separator,
        nf::GROUPING_SEPARATOR_SYMBOL | nf::MONETARY_GROUPING_SEPARATOR_SYMBOL => {
            data.grouping_separator
        }
        nf::PATTERN_SEPARATOR_SYMBOL => ";",
        nf::PERCENT_SYMBOL => data.percent_sign,
        nf::ZERO_DIGIT_SYMBOL => "0",
        nf::DIGIT_SYMBOL => "#",
        nf::MINUS_SIGN_SYMBOL => data.minus_sign,
        nf::PLUS_SIGN_SYMBOL => data.plus_sign,
        nf::CURRENCY_SYMBOL => return data.currency_symbol(currency),
        nf::INTL_CURRENCY_SYMBOL => currency,
        nf::EXPONENTIAL_SYMBOL => data.exponential,
        nf::PERMILL_SYMBOL => data.permill_sign,
        nf::PAD_ESCAPE_SYMBOL => "*",
        nf::INFINITY_SYMBOL => data.infinity,
        nf::NAN_SYMBOL => data.nan,
        nf::SIGNIFICANT_DIGIT_SYMBOL => "@",
        _ => "",
    };
    text.to_string()
}

/// The magnitude of a number after applying the multiplier.
fn scaled_digits(number: Number, multiplier: i64) -> Digits {
    let factor = multiplier.unsigned_abs();
    let power_of_ten = (0..19).find(|p| 10u64.pow(*p) == factor);
    match number {
        Number::Int(n) => n
            .unsigned_abs()
            .checked_mul(factor)
            .map(Digits::from_u64)
            .unwrap_or_else(|| Digits::from_f64(n as f64 * factor as f64)),
        Number::Float(f) => match power_of_ten {
            Some(power) => {
                let mut digits = Digits::from_f64(f);
                digits.scale(power as i32);
                digits
            }
            None => Digits::from_f64(f * factor as f64),
        },
    }
}

/// Rounds to a multiple of `increment`, keeping its decimal places exact.
fn round_to_increment(digits: &Digits, increment: f64, mode: RoundingMode, negative: bool) -> Digits {
    let mut quotient = Digits::from_f64(digits.to_f64() / increment);
    quotient.round_fraction(0, mode, negative);
    let places = Digits::from_f64(increment).fraction_digits(0).len() as i32;
    let mut result = Digits::from_f64(quotient.to_f64() * increment);
    result.round_fraction(places, RoundingMode::HalfEven, negative);
    result
}

fn truncate(number: Number) -> i64 {
    match number {
        Number::Int(n) => n,
        Number::Float(f) => f as i64,
    }
}

/// The value as an integer, if it has no fractional part.
fn to_i32(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

fn integral(number: Number) -> Option<i64> {
    match number {
        Number::Int(n) => Some(n),
        Number::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e18 => Some(f as i64),
        Number::Float(_) => None,
    }
}
