//! Symbolic formatting options.
//!
//! Each option domain is a closed set of symbolic names (`"full"`,
//! `"halfeven"`, `"grouping_used"`, ...) mapped one-to-one onto the native
//! integer constants of the formatting backend. The mapping is a static
//! table per domain.

use crate::error::FormatError;

/// A closed, table-driven symbolic option domain.
pub trait OptionEnum: Sized + Copy + PartialEq + 'static {
    /// Human readable name of the domain, used in diagnostics.
    const DOMAIN: &'static str;

    /// Every value of the domain with its symbolic name and native constant.
    const CASES: &'static [(Self, &'static str, i32)];

    /// The canonical symbolic name.
    fn name(&self) -> &'static str;

    /// The native constant this value maps to.
    fn to_native(&self) -> i32;

    /// Resolves a symbolic name.
    ///
    /// Fails with [`FormatError::UnknownOption`] carrying every valid name
    /// when `name` is not part of the domain.
    fn from_name(name: &str) -> Result<Self, FormatError> {
        Self::try_from_name(name).ok_or_else(|| FormatError::UnknownOption {
            domain: Self::DOMAIN,
            name: name.to_string(),
            expected: Self::names(),
        })
    }

    /// Resolves a symbolic name, returning `None` if it is unknown.
    fn try_from_name(name: &str) -> Option<Self> {
        Self::CASES
            .iter()
            .find(|(_, key, _)| *key == name)
            .map(|(value, _, _)| *value)
    }

    /// Resolves a native constant back to its symbolic value.
    fn from_native(value: i32) -> Result<Self, FormatError> {
        Self::CASES
            .iter()
            .find(|(_, _, native)| *native == value)
            .map(|(option, _, _)| *option)
            .ok_or(FormatError::UnsupportedConstant {
                domain: Self::DOMAIN,
                value,
            })
    }

    /// All values of the domain, in declaration order.
    fn cases() -> Vec<Self> {
        Self::CASES.iter().map(|(value, _, _)| *value).collect()
    }

    /// All symbolic names of the domain, in declaration order.
    fn names() -> Vec<&'static str> {
        Self::CASES.iter().map(|(_, key, _)| *key).collect()
    }
}

/// Declares an option domain enum and its name/constant table.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $domain:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = ($key:literal, $native:expr),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::options::OptionEnum for $name {
            const DOMAIN: &'static str = $domain;
            const CASES: &'static [(Self, &'static str, i32)] = &[
                $(($name::$variant, $key, $native),)+
            ];

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            fn to_native(&self) -> i32 {
                match self {
                    $($name::$variant => $native,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::FormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::options::OptionEnum>::from_name(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::error::FormatError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                <$name as $crate::options::OptionEnum>::from_name(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::options::OptionEnum::name(self))
            }
        }
    };
}

mod attribute;
mod date;
mod number;

pub use attribute::{
    AttributeMap, AttributeValue, NumberAttributeOption, NumberSymbolOption, NumberTextOption,
};
pub use date::{CalendarFormat, DateFormat, TimeFormat};
pub use number::{
    AttributeFormat, PaddingPosition, RoundingMode, StyleFormat, SymbolFormat, TextFormat,
    TypeFormat,
};
