//! Native integer constants of the host formatting library.
//!
//! The values follow ICU's `UDateFormatStyle`, `UNumberFormatStyle`,
//! `UNumberFormatAttribute`, `UNumberFormatTextAttribute`,
//! `UNumberFormatSymbol`, `UNumberFormatRoundingMode` and
//! `UNumberFormatPadPosition` enumerations.

/// Date and time style constants.
pub mod date {
    pub const NONE: i32 = -1;
    pub const FULL: i32 = 0;
    pub const LONG: i32 = 1;
    pub const MEDIUM: i32 = 2;
    pub const SHORT: i32 = 3;
    pub const RELATIVE_FULL: i32 = 128;
    pub const RELATIVE_LONG: i32 = 129;
    pub const RELATIVE_MEDIUM: i32 = 130;
    pub const RELATIVE_SHORT: i32 = 131;

    /// Offset between a relative style and its plain counterpart.
    pub const RELATIVE: i32 = 128;

    pub const TRADITIONAL: i32 = 0;
    pub const GREGORIAN: i32 = 1;
}

/// Number formatter constants.
pub mod number {
    // Styles
    pub const DECIMAL: i32 = 1;
    pub const CURRENCY: i32 = 2;
    pub const PERCENT: i32 = 3;
    pub const SCIENTIFIC: i32 = 4;
    pub const SPELLOUT: i32 = 5;
    pub const ORDINAL: i32 = 6;
    pub const DURATION: i32 = 7;

    // Format types
    pub const TYPE_DEFAULT: i32 = 0;
    pub const TYPE_INT32: i32 = 1;
    pub const TYPE_INT64: i32 = 2;
    pub const TYPE_DOUBLE: i32 = 3;
    pub const TYPE_CURRENCY: i32 = 4;

    // Numeric attributes
    pub const GROUPING_USED: i32 = 1;
    pub const DECIMAL_ALWAYS_SHOWN: i32 = 2;
    pub const MAX_INTEGER_DIGITS: i32 = 3;
    pub const MIN_INTEGER_DIGITS: i32 = 4;
    pub const INTEGER_DIGITS: i32 = 5;
    pub const MAX_FRACTION_DIGITS: i32 = 6;
    pub const MIN_FRACTION_DIGITS: i32 = 7;
    pub const FRACTION_DIGITS: i32 = 8;
    pub const MULTIPLIER: i32 = 9;
    pub const GROUPING_SIZE: i32 = 10;
    pub const ROUNDING_MODE: i32 = 11;
    pub const ROUNDING_INCREMENT: i32 = 12;
    pub const FORMAT_WIDTH: i32 = 13;
    pub const PADDING_POSITION: i32 = 14;
    pub const SECONDARY_GROUPING_SIZE: i32 = 15;
    pub const SIGNIFICANT_DIGITS_USED: i32 = 16;
    pub const MIN_SIGNIFICANT_DIGITS: i32 = 17;
    pub const MAX_SIGNIFICANT_DIGITS: i32 = 18;
    pub const LENIENT_PARSE: i32 = 19;

    // Text attributes
    pub const POSITIVE_PREFIX: i32 = 0;
    pub const POSITIVE_SUFFIX: i32 = 1;
    pub const NEGATIVE_PREFIX: i32 = 2;
    pub const NEGATIVE_SUFFIX: i32 = 3;
    pub const PADDING_CHARACTER: i32 = 4;
    pub const CURRENCY_CODE: i32 = 5;
    pub const DEFAULT_RULESET: i32 = 6;
    pub const PUBLIC_RULESETS: i32 = 7;

    // Symbols
    pub const DECIMAL_SEPARATOR_SYMBOL: i32 = 0;
    pub const GROUPING_SEPARATOR_SYMBOL: i32 = 1;
    pub const PATTERN_SEPARATOR_SYMBOL: i32 = 2;
    pub const PERCENT_SYMBOL: i32 = 3;
    pub const ZERO_DIGIT_SYMBOL: i32 = 4;
    pub const DIGIT_SYMBOL: i32 = 5;
    pub const MINUS_SIGN_SYMBOL: i32 = 6;
    pub const PLUS_SIGN_SYMBOL: i32 = 7;
    pub const CURRENCY_SYMBOL: i32 = 8;
    pub const INTL_CURRENCY_SYMBOL: i32 = 9;
    pub const MONETARY_SEPARATOR_SYMBOL: i32 = 10;
    pub const EXPONENTIAL_SYMBOL: i32 = 11;
    pub const PERMILL_SYMBOL: i32 = 12;
    pub const PAD_ESCAPE_SYMBOL: i32 = 13;
    pub const INFINITY_SYMBOL: i32 = 14;
    pub const NAN_SYMBOL: i32 = 15;
    pub const SIGNIFICANT_DIGIT_SYMBOL: i32 = 16;
    pub const MONETARY_GROUPING_SEPARATOR_SYMBOL: i32 = 17;

    // Rounding modes
    pub const ROUND_CEILING: i32 = 0;
    pub const ROUND_FLOOR: i32 = 1;
    pub const ROUND_DOWN: i32 = 2;
    pub const ROUND_UP: i32 = 3;
    pub const ROUND_HALFEVEN: i32 = 4;
    pub const ROUND_HALFDOWN: i32 = 5;
    pub const ROUND_HALFUP: i32 = 6;

    // Padding positions
    pub const PAD_BEFORE_PREFIX: i32 = 0;
    pub const PAD_AFTER_PREFIX: i32 = 1;
    pub const PAD_BEFORE_SUFFIX: i32 = 2;
    pub const PAD_AFTER_SUFFIX: i32 = 3;
}
