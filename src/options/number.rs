//! Number formatter option domains.

use crate::native::constants::number as nf;

option_enum! {
    /// Style of a number formatter.
    pub enum StyleFormat in "style" {
        Currency = ("currency", nf::CURRENCY),
        Decimal = ("decimal", nf::DECIMAL),
        Duration = ("duration", nf::DURATION),
        Ordinal = ("ordinal", nf::ORDINAL),
        Percent = ("percent", nf::PERCENT),
        Scientific = ("scientific", nf::SCIENTIFIC),
        Spellout = ("spellout", nf::SPELLOUT),
    }
}

option_enum! {
    /// Numeric subtype a number is formatted as.
    pub enum TypeFormat in "type" {
        Default = ("default", nf::TYPE_DEFAULT),
        Int32 = ("int32", nf::TYPE_INT32),
        Int64 = ("int64", nf::TYPE_INT64),
        Double = ("double", nf::TYPE_DOUBLE),
        Currency = ("currency", nf::TYPE_CURRENCY),
    }
}

impl Default for TypeFormat {
    fn default() -> Self {
        TypeFormat::Default
    }
}

option_enum! {
    /// Numeric attribute of a number formatter.
    pub enum AttributeFormat in "attribute name format" {
        GroupingUsed = ("grouping_used", nf::GROUPING_USED),
        DecimalAlwaysShown = ("decimal_always_shown", nf::DECIMAL_ALWAYS_SHOWN),
        MaxIntegerDigit = ("max_integer_digit", nf::MAX_INTEGER_DIGITS),
        MinIntegerDigit = ("min_integer_digit", nf::MIN_INTEGER_DIGITS),
        IntegerDigit = ("integer_digit", nf::INTEGER_DIGITS),
        MaxFractionDigit = ("max_fraction_digit", nf::MAX_FRACTION_DIGITS),
        MinFractionDigit = ("min_fraction_digit", nf::MIN_FRACTION_DIGITS),
        FractionDigit = ("fraction_digit", nf::FRACTION_DIGITS),
        Multiplier = ("multiplier", nf::MULTIPLIER),
        GroupingSize = ("grouping_size", nf::GROUPING_SIZE),
        /// Accepts a [`RoundingMode`] name as its value.
        RoundingMode = ("rounding_mode", nf::ROUNDING_MODE),
        RoundingIncrement = ("rounding_increment", nf::ROUNDING_INCREMENT),
        FormatWidth = ("format_width", nf::FORMAT_WIDTH),
        /// Accepts a [`PaddingPosition`] name as its value.
        PaddingPosition = ("padding_position", nf::PADDING_POSITION),
        SecondaryGroupingSize = ("secondary_grouping_size", nf::SECONDARY_GROUPING_SIZE),
        SignificantDigitsUsed = ("significant_digits_used", nf::SIGNIFICANT_DIGITS_USED),
        MinSignificantDigitsUsed = ("min_significant_digits_used", nf::MIN_SIGNIFICANT_DIGITS),
        MaxSignificantDigitsUsed = ("max_significant_digits_used", nf::MAX_SIGNIFICANT_DIGITS),
        LenientParse = ("lenient_parse", nf::LENIENT_PARSE),
    }
}

option_enum! {
    /// Text attribute of a number formatter.
    pub enum TextFormat in "text format" {
        PositivePrefix = ("positive_prefix", nf::POSITIVE_PREFIX),
        PositiveSuffix = ("positive_suffix", nf::POSITIVE_SUFFIX),
        NegativePrefix = ("negative_prefix", nf::NEGATIVE_PREFIX),
        NegativeSuffix = ("negative_suffix", nf::NEGATIVE_SUFFIX),
        PaddingCharacter = ("padding_character", nf::PADDING_CHARACTER),
        CurrencyCode = ("currency_code", nf::CURRENCY_CODE),
        DefaultRuleset = ("default_ruleset", nf::DEFAULT_RULESET),
        PublicRulesets = ("public_rulesets", nf::PUBLIC_RULESETS),
    }
}

option_enum! {
    /// Symbol of a number formatter.
    pub enum SymbolFormat in "symbol format" {
        DecimalSeparator = ("decimal_separator", nf::DECIMAL_SEPARATOR_SYMBOL),
        GroupingSeparator = ("grouping_separator", nf::GROUPING_SEPARATOR_SYMBOL),
        PatternSeparator = ("pattern_separator", nf::PATTERN_SEPARATOR_SYMBOL),
        Percent = ("percent", nf::PERCENT_SYMBOL),
        ZeroDigit = ("zero_digit", nf::ZERO_DIGIT_SYMBOL),
        Digit = ("digit", nf::DIGIT_SYMBOL),
        MinusSign = ("minus_sign", nf::MINUS_SIGN_SYMBOL),
        PlusSign = ("plus_sign", nf::PLUS_SIGN_SYMBOL),
        Currency = ("currency", nf::CURRENCY_SYMBOL),
        IntlCurrency = ("int_currency", nf::INTL_CURRENCY_SYMBOL),
        MonetarySeparator = ("monetary_separator", nf::MONETARY_SEPARATOR_SYMBOL),
        Exponential = ("exponential", nf::EXPONENTIAL_SYMBOL),
        Permill = ("permill", nf::PERMILL_SYMBOL),
        PadEscape = ("pad_escape", nf::PAD_ESCAPE_SYMBOL),
        Infinity = ("infinity", nf::INFINITY_SYMBOL),
        Nan = ("nan", nf::NAN_SYMBOL),
        SignificantDigit = ("significant_digit", nf::SIGNIFICANT_DIGIT_SYMBOL),
        MonetaryGroupingSeparator = ("monetary_grouping_separator", nf::MONETARY_GROUPING_SEPARATOR_SYMBOL),
    }
}

option_enum! {
    /// Rounding mode, the value of the `rounding_mode` attribute.
    pub enum RoundingMode in "rounding mode" {
        Ceiling = ("ceiling", nf::ROUND_CEILING),
        Floor = ("floor", nf::ROUND_FLOOR),
        Down = ("down", nf::ROUND_DOWN),
        Up = ("up", nf::ROUND_UP),
        HalfEven = ("halfeven", nf::ROUND_HALFEVEN),
        HalfDown = ("halfdown", nf::ROUND_HALFDOWN),
        HalfUp = ("halfup", nf::ROUND_HALFUP),
    }
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::HalfEven
    }
}

option_enum! {
    /// Padding position, the value of the `padding_position` attribute.
    pub enum PaddingPosition in "padding position" {
        BeforePrefix = ("before_prefix", nf::PAD_BEFORE_PREFIX),
        AfterPrefix = ("after_prefix", nf::PAD_AFTER_PREFIX),
        BeforeSuffix = ("before_suffix", nf::PAD_BEFORE_SUFFIX),
        AfterSuffix = ("after_suffix", nf::PAD_AFTER_SUFFIX),
    }
}

impl Default for PaddingPosition {
    fn default() -> Self {
        PaddingPosition::BeforePrefix
    }
}
