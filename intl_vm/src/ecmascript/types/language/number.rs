// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)

use super::{String, Value};
use crate::ecmascript::execution::Agent;

/// An IEEE 754-2019 binary64 value. Numbers are stored inline in
/// [`Value::Number`]; this type carries the conversions between numbers and
/// strings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Number(pub f64);

impl Number {
    pub fn into_f64(self) -> f64 {
        self.0
    }

    /// ### [6.1.6.1.20 Number::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-number-tostring)
    ///
    /// Radix 10 only; `ryu-js` implements the shortest round-trip formatting
    /// the specification requires.
    pub fn to_string_radix_10(self, agent: &mut Agent) -> String {
        let x = self.0;
        if x == 0.0 {
            // Both +0 and -0 format as "0".
            return String::from_str(agent, "0");
        }
        let mut buffer = ryu_js::Buffer::new();
        let formatted = buffer.format(x);
        String::from_str(agent, formatted)
    }

    /// Number::toString for radixes other than 10. The integer part is
    /// exact; the fraction is cut off once it cannot change the value.
    ///
    /// ## Panics
    ///
    /// If `radix` is not in the inclusive interval from 2 to 36.
    pub fn to_string_radix(self, agent: &mut Agent, radix: u32) -> String {
        assert!((2..=36).contains(&radix));
        if radix == 10 {
            return self.to_string_radix_10(agent);
        }
        let x = self.0;
        if x.is_nan() {
            return String::from_str(agent, "NaN");
        }
        if x.is_infinite() {
            let result = if x > 0.0 { "Infinity" } else { "-Infinity" };
            return String::from_str(agent, result);
        }
        let radix_f = f64::from(radix);
        let magnitude = x.abs();
        let mut integer = magnitude.trunc();
        let mut fraction = magnitude - integer;
        let mut digits = Vec::new();
        loop {
            let digit = (integer % radix_f) as u32;
            digits.push(char::from_digit(digit, radix).unwrap_or('0'));
            integer = (integer / radix_f).trunc();
            if integer < 1.0 {
                break;
            }
        }
        if x < 0.0 {
            digits.push('-');
        }
        let mut result: std::string::String = digits.into_iter().rev().collect();
        if fraction > 0.0 {
            result.push('.');
            // 52 fraction digits in radix 2 exhaust the precision of f64; other
            // radixes need fewer.
            for _ in 0..52 {
                if fraction <= 0.0 {
                    break;
                }
                fraction *= radix_f;
                let digit = fraction.trunc();
                fraction -= digit;
                result.push(char::from_digit(digit as u32, radix).unwrap_or('0'));
            }
        }
        String::from_string(agent, result)
    }

    /// ### [7.1.4.1.1 StringToNumber ( str )](https://tc39.es/ecma262/#sec-stringtonumber)
    pub fn from_str_literal(str: &str) -> Self {
        let trimmed = str.trim_matches(is_string_numeric_whitespace);
        if trimmed.is_empty() {
            return Number(0.0);
        }
        match trimmed {
            "Infinity" | "+Infinity" => return Number(f64::INFINITY),
            "-Infinity" => return Number(f64::NEG_INFINITY),
            _ => {}
        }
        let bytes = trimmed.as_bytes();
        if bytes.len() > 2 && bytes[0] == b'0' {
            let radix = match bytes[1] {
                b'x' | b'X' => Some(16),
                b'o' | b'O' => Some(8),
                b'b' | b'B' => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                let digits = &trimmed[2..];
                return digits
                    .chars()
                    .try_fold(0.0f64, |acc, c| {
                        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
                    })
                    .map_or(Number(f64::NAN), Number);
            }
        }
        // fast-float accepts "inf" and "nan" spellings that are not
        // StrDecimalLiterals.
        if trimmed
            .bytes()
            .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
        {
            return Number(f64::NAN);
        }
        fast_float::parse::<f64, _>(trimmed).map_or(Number(f64::NAN), Number)
    }
}

/// WhiteSpace and LineTerminator code points as accepted around a
/// StringNumericLiteral.
fn is_string_numeric_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{FEFF}'
            | '\u{000A}'
            | '\u{000D}'
            | '\u{2028}'
            | '\u{2029}'
    ) || c.is_whitespace()
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value.0)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Number;
    use crate::ecmascript::execution::{Agent, Options};

    #[test]
    fn number_to_string() {
        let mut agent = Agent::new(Options::default());
        let mut check = |x: f64, radix: u32, expected: &str| {
            let string = Number(x).to_string_radix(&mut agent, radix);
            assert_eq!(string.to_string_lossy(&agent), expected);
        };
        check(7.0, 10, "7");
        check(-0.0, 10, "0");
        check(1e21, 10, "1e+21");
        check(0.1, 10, "0.1");
        check(255.0, 16, "ff");
        check(-0.5, 2, "-0.1");
        check(f64::NAN, 2, "NaN");
        check(f64::NEG_INFINITY, 36, "-Infinity");
    }

    #[test]
    fn string_to_number() {
        assert_eq!(Number::from_str_literal(" 12 ").into_f64(), 12.0);
        assert_eq!(Number::from_str_literal("0x10").into_f64(), 16.0);
        assert_eq!(Number::from_str_literal("").into_f64(), 0.0);
        assert!(Number::from_str_literal("inf").into_f64().is_nan());
        assert!(Number::from_str_literal("7n").into_f64().is_nan());
    }
}
