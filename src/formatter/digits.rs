//! Exact decimal digit strings and rounding.

use crate::options::RoundingMode;

/// A non-negative decimal number held as its significant digits.
///
/// The value is `0.d₀d₁d₂… × 10^point`. Digits carry no leading or trailing
/// zeros, so zero is the empty digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Digits {
    digits: Vec<u8>,
    point: i32,
}

impl Digits {
    pub(crate) fn from_u64(n: u64) -> Self {
        let digits: Vec<u8> = n.to_string().bytes().map(|b| b - b'0').collect();
        let point = digits.len() as i32;
        Digits::normalized(digits, point)
    }

    /// The shortest decimal representation of a finite float's magnitude.
    pub(crate) fn from_f64(value: f64) -> Self {
        let text = format!("{:e}", value.abs());
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let digits: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        Digits::normalized(digits, exponent + 1)
    }

    fn normalized(mut digits: Vec<u8>, mut point: i32) -> Self {
        while digits.last() == Some(&0) {
            digits.pop();
        }
        let leading = digits.iter().take_while(|d| **d == 0).count();
        digits.drain(..leading);
        point -= leading as i32;
        if digits.is_empty() {
            point = 0;
        }
        Digits { digits, point }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Position of the decimal point relative to the first digit.
    pub(crate) fn point(&self) -> i32 {
        self.point
    }

    pub(crate) fn significant_len(&self) -> usize {
        self.digits.len()
    }

    /// Multiplies by `10^power`.
    pub(crate) fn scale(&mut self, power: i32) {
        if !self.is_zero() {
            self.point += power;
        }
    }

    /// Rounds to `fraction` digits after the decimal point.
    pub(crate) fn round_fraction(&mut self, fraction: i32, mode: RoundingMode, negative: bool) {
        let keep = self.point.saturating_add(fraction);
        self.round_at(keep, fraction, mode, negative);
    }

    /// Rounds to `count` significant digits.
    pub(crate) fn round_significant(&mut self, count: usize, mode: RoundingMode, negative: bool) {
        let keep = i32::try_from(count).unwrap_or(i32::MAX);
        let fraction = keep.saturating_sub(self.point);
        self.round_at(keep, fraction, mode, negative);
    }

    /// Keeps the first `keep` digits; the last kept place is `10^-fraction`.
    fn round_at(&mut self, keep: i32, fraction: i32, mode: RoundingMode, negative: bool) {
        if self.is_zero() || keep >= self.digits.len() as i32 {
            return;
        }

        let (first_dropped, rest_nonzero, last_kept_odd) = if keep < 0 {
            (0, true, false)
        } else {
            let k = keep as usize;
            (
                self.digits[k],
                self.digits[k + 1..].iter().any(|d| *d != 0),
                k > 0 && self.digits[k - 1] % 2 == 1,
            )
        };

        let round_up = match mode {
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::Down => false,
            RoundingMode::Up => true,
            RoundingMode::HalfEven => {
                first_dropped > 5 || (first_dropped == 5 && (rest_nonzero || last_kept_odd))
            }
            RoundingMode::HalfDown => first_dropped > 5 || (first_dropped == 5 && rest_nonzero),
            RoundingMode::HalfUp => first_dropped >= 5,
        };

        if keep <= 0 {
            self.digits.clear();
            self.point = 0;
            if round_up {
                self.digits.push(1);
                self.point = 1i32.saturating_sub(fraction);
            }
            return;
        }

        self.digits.truncate(keep as usize);
        if round_up {
            let mut carried = true;
            for digit in self.digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carried = false;
                    break;
                }
            }
            if carried {
                self.digits.insert(0, 1);
                self.point += 1;
            }
        }
        let point = self.point;
        *self = Digits::normalized(std::mem::take(&mut self.digits), point);
    }

    /// Digits left of the decimal point, zero-padded to `min` and cut to the
    /// `max` lowest-order digits.
    pub(crate) fn integer_digits(&self, min: usize, max: Option<usize>) -> Vec<u8> {
        let mut out: Vec<u8> = if self.point > 0 {
            let point = self.point as usize;
            let mut out: Vec<u8> = self.digits.iter().take(point).copied().collect();
            out.resize(point, 0);
            out
        } else {
            Vec::new()
        };
        if let Some(max) = max {
            if out.len() > max {
                out.drain(..out.len() - max);
            }
        }
        while out.first() == Some(&0) {
            out.remove(0);
        }
        if out.len() < min {
            let mut padded = vec![0; min - out.len()];
            padded.extend(out);
            out = padded;
        }
        out
    }

    /// Digits right of the decimal point, zero-padded to `min`.
    pub(crate) fn fraction_digits(&self, min: usize) -> Vec<u8> {
        let mut out = if self.point < 0 {
            let mut out = vec![0; (-self.point) as usize];
            out.extend(&self.digits);
            out
        } else {
            self.digits.iter().skip(self.point as usize).copied().collect()
        };
        if out.len() < min {
            out.resize(min, 0);
        }
        out
    }

    pub(crate) fn to_f64(&self) -> f64 {
        let text: String = self.digits.iter().map(|d| char::from(b'0' + d)).collect();
        if text.is_empty() {
            return 0.0;
        }
        format!("0.{}e{}", text, self.point).parse().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(value: f64, fraction: i32, mode: RoundingMode) -> f64 {
        let mut digits = Digits::from_f64(value);
        digits.round_fraction(fraction, mode, value < 0.0);
        let magnitude = digits.to_f64();
        if value < 0.0 {
            -magnitude
        } else {
            magnitude
        }
    }

    #[test]
    fn test_from_f64() {
        let digits = Digits::from_f64(1234.5);
        assert_eq!(digits.integer_digits(1, None), vec![1, 2, 3, 4]);
        assert_eq!(digits.fraction_digits(0), vec![5]);

        let small = Digits::from_f64(0.0025);
        assert_eq!(small.point(), -2);
        assert_eq!(small.integer_digits(1, None), vec![0]);
        assert_eq!(small.fraction_digits(0), vec![0, 0, 2, 5]);

        assert!(Digits::from_f64(0.0).is_zero());
        assert!(Digits::from_f64(-0.0).is_zero());
    }

    #[test]
    fn test_from_u64() {
        let digits = Digits::from_u64(1200);
        assert_eq!(digits.significant_len(), 2);
        assert_eq!(digits.integer_digits(0, None), vec![1, 2, 0, 0]);
        assert!(Digits::from_u64(0).is_zero());
    }

    #[test]
    fn test_half_even() {
        assert_eq!(rounded(2.5, 0, RoundingMode::HalfEven), 2.0);
        assert_eq!(rounded(3.5, 0, RoundingMode::HalfEven), 4.0);
        assert_eq!(rounded(1.2345, 3, RoundingMode::HalfEven), 1.234);
        assert_eq!(rounded(1.23451, 3, RoundingMode::HalfEven), 1.235);
    }

    #[test]
    fn test_directed_modes() {
        assert_eq!(rounded(1.21, 1, RoundingMode::Ceiling), 1.3);
        assert_eq!(rounded(-1.21, 1, RoundingMode::Ceiling), -1.2);
        assert_eq!(rounded(1.29, 1, RoundingMode::Floor), 1.2);
        assert_eq!(rounded(-1.21, 1, RoundingMode::Floor), -1.3);
        assert_eq!(rounded(1.29, 1, RoundingMode::Down), 1.2);
        assert_eq!(rounded(1.21, 1, RoundingMode::Up), 1.3);
        assert_eq!(rounded(2.5, 0, RoundingMode::HalfDown), 2.0);
        assert_eq!(rounded(2.5, 0, RoundingMode::HalfUp), 3.0);
    }

    #[test]
    fn test_carry() {
        let mut digits = Digits::from_f64(9.996);
        digits.round_fraction(2, RoundingMode::HalfEven, false);
        assert_eq!(digits.integer_digits(1, None), vec![1, 0]);
        assert!(digits.fraction_digits(0).is_empty());
    }

    #[test]
    fn test_round_below_every_digit() {
        let mut digits = Digits::from_f64(0.004);
        digits.round_fraction(1, RoundingMode::HalfEven, false);
        assert!(digits.is_zero());

        let mut digits = Digits::from_f64(0.004);
        digits.round_fraction(1, RoundingMode::Up, false);
        assert_eq!(digits.fraction_digits(0), vec![1]);
    }

    #[test]
    fn test_round_with_extreme_places() {
        assert_eq!(rounded(12.5, i32::MAX, RoundingMode::HalfEven), 12.5);

        let mut digits = Digits::from_f64(12.5);
        digits.round_significant(usize::MAX, RoundingMode::HalfEven, false);
        assert_eq!(digits, Digits::from_f64(12.5));

        let mut digits = Digits::from_f64(12.5);
        digits.round_fraction(i32::MIN, RoundingMode::Up, false);
        assert!(!digits.is_zero());
    }

    #[test]
    fn test_significant() {
        let mut digits = Digits::from_f64(123456.0);
        digits.round_significant(3, RoundingMode::HalfEven, false);
        assert_eq!(digits.integer_digits(1, None), vec![1, 2, 3, 0, 0, 0]);

        let mut digits = Digits::from_f64(0.012345);
        digits.round_significant(2, RoundingMode::HalfEven, false);
        assert_eq!(digits.fraction_digits(0), vec![0, 1, 2]);
    }

    #[test]
    fn test_integer_limits() {
        let digits = Digits::from_u64(12345);
        assert_eq!(digits.integer_digits(1, Some(3)), vec![3, 4, 5]);
        assert_eq!(digits.integer_digits(7, None), vec![0, 0, 1, 2, 3, 4, 5]);
        assert_eq!(Digits::from_u64(1005).integer_digits(1, Some(2)), vec![5]);
    }

    #[test]
    fn test_scale() {
        let mut digits = Digits::from_f64(0.125);
        digits.scale(2);
        assert_eq!(digits.integer_digits(1, None), vec![1, 2]);
        assert_eq!(digits.fraction_digits(0), vec![5]);
    }
}
