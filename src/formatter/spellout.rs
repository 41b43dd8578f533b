//! Rule-based renderings: spelled-out numbers, ordinal suffixes and durations.

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// English cardinal words: `1234` is `one thousand two hundred thirty-four`.
pub(crate) fn cardinal(n: u64) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    if n < 100 {
        let tens = TENS[(n / 10) as usize];
        return match n % 10 {
            0 => tens.to_string(),
            ones => format!("{}-{}", tens, ONES[ones as usize]),
        };
    }
    if n < 1000 {
        return join(format!("{} hundred", ONES[(n / 100) as usize]), n % 100);
    }
    SCALES
        .iter()
        .find(|(scale, _)| n >= *scale)
        .map(|(scale, name)| join(format!("{} {}", cardinal(n / scale), name), n % scale))
        .unwrap_or_default()
}

fn join(head: String, rest: u64) -> String {
    if rest == 0 {
        head
    } else {
        format!("{} {}", head, cardinal(rest))
    }
}

/// English ordinal words: `21` is `twenty-first`.
pub(crate) fn ordinal(n: u64) -> String {
    let words = cardinal(n);
    let split = words.rfind([' ', '-']).map_or(0, |i| i + 1);
    let (head, last) = words.split_at(split);
    let last = match last {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        word if word.ends_with('y') => format!("{}ieth", &word[..word.len() - 1]),
        word => format!("{}th", word),
    };
    format!("{}{}", head, last)
}

/// Spells a number, reading fraction digits one by one after `point`.
pub(crate) fn spell(value: f64) -> String {
    let mut words = String::new();
    if value.is_sign_negative() && value != 0.0 {
        words.push_str("minus ");
    }
    let magnitude = value.abs();
    let text = format!("{}", magnitude);
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    words.push_str(&cardinal(integer.parse().unwrap_or(magnitude.trunc() as u64)));
    if !fraction.is_empty() {
        words.push_str(" point");
        for digit in fraction.bytes() {
            words.push(' ');
            words.push_str(ONES[usize::from(digit - b'0')]);
        }
    }
    words
}

/// The suffix of a numeric ordinal in a language: `st` for `1` in English.
pub(crate) fn ordinal_suffix(language: &str, n: u64) -> &'static str {
    match language {
        "fr" if n == 1 => "er",
        "fr" => "e",
        "de" => ".",
        _ => match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        },
    }
}

/// Renders seconds as `45 sec.`, `1:05` or `1:01:05`.
pub(crate) fn duration_numerals(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if total < 60 {
        format!("{}{} sec.", sign, total)
    } else if hours == 0 {
        format!("{}{}:{:02}", sign, minutes, secs)
    } else {
        format!("{}{}:{:02}:{:02}", sign, hours, minutes, secs)
    }
}

/// Renders seconds as `1 hour, 1 minute, 5 seconds`.
pub(crate) fn duration_words(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    let units = [
        (total / 3600, "hour"),
        ((total % 3600) / 60, "minute"),
        (total % 60, "second"),
    ];
    let parts: Vec<String> = units
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| {
            let plural = if *count == 1 { "" } else { "s" };
            format!("{} {}{}", count, unit, plural)
        })
        .collect();
    if parts.is_empty() {
        "0 seconds".to_string()
    } else {
        format!("{}{}", sign, parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal() {
        assert_eq!(cardinal(0), "zero");
        assert_eq!(cardinal(15), "fifteen");
        assert_eq!(cardinal(40), "forty");
        assert_eq!(cardinal(99), "ninety-nine");
        assert_eq!(cardinal(100), "one hundred");
        assert_eq!(cardinal(1234), "one thousand two hundred thirty-four");
        assert_eq!(cardinal(2_000_001), "two million one");
        assert_eq!(
            cardinal(u64::MAX),
            "eighteen quintillion four hundred forty-six quadrillion seven hundred forty-four \
             trillion seventy-three billion seven hundred nine million five hundred fifty-one \
             thousand six hundred fifteen"
        );
    }

    #[test]
    fn test_ordinal_words() {
        assert_eq!(ordinal(1), "first");
        assert_eq!(ordinal(12), "twelfth");
        assert_eq!(ordinal(20), "twentieth");
        assert_eq!(ordinal(21), "twenty-first");
        assert_eq!(ordinal(100), "one hundredth");
        assert_eq!(ordinal(103), "one hundred third");
    }

    #[test]
    fn test_spell() {
        assert_eq!(spell(42.0), "forty-two");
        assert_eq!(spell(-3.0), "minus three");
        assert_eq!(spell(1.25), "one point two five");
    }

    #[test]
    fn test_ordinal_suffix() {
        let en: Vec<&str> = [1, 2, 3, 4, 11, 12, 13, 21, 102, 111]
            .iter()
            .map(|n| ordinal_suffix("en", *n))
            .collect();
        assert_eq!(en, ["st", "nd", "rd", "th", "th", "th", "th", "st", "nd", "th"]);
        assert_eq!(ordinal_suffix("fr", 1), "er");
        assert_eq!(ordinal_suffix("fr", 2), "e");
        assert_eq!(ordinal_suffix("de", 7), ".");
    }

    #[test]
    fn test_durations() {
        assert_eq!(duration_numerals(45), "45 sec.");
        assert_eq!(duration_numerals(65), "1:05");
        assert_eq!(duration_numerals(3665), "1:01:05");
        assert_eq!(duration_numerals(-65), "-1:05");
        assert_eq!(duration_words(3665), "1 hour, 1 minute, 5 seconds");
        assert_eq!(duration_words(120), "2 minutes");
        assert_eq!(duration_words(0), "0 seconds");
    }
}
