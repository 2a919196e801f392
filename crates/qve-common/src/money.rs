//! Money primitives.
//!
//! `Currency` is a three-letter ISO 4217 code stored inline; equality and
//! hashing are byte comparisons. `UnorderedCurrencyPair` is a set of two
//! currencies where `{EUR, USD}` and `{USD, EUR}` are the same pair.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ISO 4217 currency code.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency {
    code: [u8; 3],
}

impl Currency {
    pub const USD: Currency = Currency { code: *b"USD" };
    pub const EUR: Currency = Currency { code: *b"EUR" };
    pub const GBP: Currency = Currency { code: *b"GBP" };
    pub const JPY: Currency = Currency { code: *b"JPY" };
    pub const CHF: Currency = Currency { code: *b"CHF" };

    /// Create a currency from a three-letter uppercase ASCII code.
    pub fn of(code: &str) -> Result<Self, MoneyError> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(MoneyError::BadCurrencyCode(code.to_string()));
        }
        Ok(Self {
            code: [bytes[0], bytes[1], bytes[2]],
        })
    }

    pub fn code(&self) -> &str {
        // Construction guarantees ASCII uppercase.
        std::str::from_utf8(&self.code).expect("currency code is ASCII")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.code())
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = Currency;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a three-letter ISO currency code")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Currency, E> {
                Currency::of(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CodeVisitor)
    }
}

/// An unordered pair of distinct-or-equal currencies.
///
/// The pair is normalized on construction so the lexically smaller code
/// comes first; `of(a, b)` and `of(b, a)` are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnorderedCurrencyPair {
    first: Currency,
    second: Currency,
}

impl UnorderedCurrencyPair {
    pub fn of(a: Currency, b: Currency) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Parse the concatenated six-letter form, e.g. `EURUSD`.
    pub fn parse(text: &str) -> Result<Self, MoneyError> {
        if text.len() != 6 || !text.is_ascii() {
            return Err(MoneyError::BadCurrencyPair(text.to_string()));
        }
        let a = Currency::of(&text[..3])
            .map_err(|_| MoneyError::BadCurrencyPair(text.to_string()))?;
        let b = Currency::of(&text[3..])
            .map_err(|_| MoneyError::BadCurrencyPair(text.to_string()))?;
        Ok(Self::of(a, b))
    }

    pub fn first(&self) -> Currency {
        self.first
    }

    pub fn second(&self) -> Currency {
        self.second
    }
}

impl fmt::Display for UnorderedCurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Malformed money input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoneyError {
    BadCurrencyCode(String),
    BadCurrencyPair(String),
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::BadCurrencyCode(code) => {
                write!(f, "invalid ISO currency code {code:?}")
            }
            MoneyError::BadCurrencyPair(pair) => {
                write!(f, "invalid currency pair {pair:?}")
            }
        }
    }
}

impl std::error::Error for MoneyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_of_validates() {
        assert_eq!(Currency::of("USD").unwrap(), Currency::USD);
        assert!(Currency::of("usd").is_err());
        assert!(Currency::of("US").is_err());
        assert!(Currency::of("USDX").is_err());
        assert!(Currency::of("U$D").is_err());
    }

    #[test]
    fn pair_is_unordered() {
        let a = UnorderedCurrencyPair::of(Currency::USD, Currency::EUR);
        let b = UnorderedCurrencyPair::of(Currency::EUR, Currency::USD);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "EURUSD");
    }

    #[test]
    fn pair_parse_round_trips() {
        let pair = UnorderedCurrencyPair::parse("USDEUR").unwrap();
        assert_eq!(pair, UnorderedCurrencyPair::of(Currency::EUR, Currency::USD));
        assert_eq!(UnorderedCurrencyPair::parse(&pair.to_string()).unwrap(), pair);
        assert!(UnorderedCurrencyPair::parse("USD").is_err());
        assert!(UnorderedCurrencyPair::parse("usdeur").is_err());
    }

    #[test]
    fn currency_serde_uses_code() {
        let json = serde_json::to_string(&Currency::GBP).unwrap();
        assert_eq!(json, "\"GBP\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Currency::GBP);
        assert!(serde_json::from_str::<Currency>("\"gbp\"").is_err());
    }
}
