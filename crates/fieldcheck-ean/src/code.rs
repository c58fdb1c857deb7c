use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EanFormatError;

/// Digit count of an EAN-8 code.
pub const EAN8_LENGTH: usize = 8;

/// Digit count of an EAN-13 code.
pub const EAN13_LENGTH: usize = 13;

/// Behavior shared by every fixed-length EAN code.
pub trait EanCode: Sized {
    /// Exact number of digits a valid code carries.
    const LENGTH: usize;

    /// Validate `value` and build the code.
    fn new(value: impl Into<String>) -> Result<Self, EanFormatError>;

    /// The validated digits, exactly as supplied.
    fn value(&self) -> &str;
}

/// Check that `value` is exactly `expected_length` ASCII digits.
///
/// Returns the value untouched on success; nothing is trimmed or normalized.
pub fn validate_digits(value: String, expected_length: usize) -> Result<String, EanFormatError> {
    if value.len() != expected_length || !value.bytes().all(|b| b.is_ascii_digit()) {
        let err = EanFormatError::expected_length(&value, expected_length);
        tracing::debug!(value = %value, expected_length, "rejected EAN code");
        return Err(err);
    }
    tracing::trace!(value = %value, "accepted EAN code");
    Ok(value)
}

/// Wire shape of an EAN value object: `{"value": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawEan {
    pub(crate) value: String,
}

macro_rules! ean_type {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "RawEan", into = "RawEan")]
        pub struct $name {
            value: String,
        }

        impl EanCode for $name {
            const LENGTH: usize = $len;

            fn new(value: impl Into<String>) -> Result<Self, EanFormatError> {
                let value = validate_digits(value.into(), Self::LENGTH)?;
                Ok(Self { value })
            }

            fn value(&self) -> &str {
                &self.value
            }
        }

        impl $name {
            /// Validate `value` and build the code.
            pub fn new(value: impl Into<String>) -> Result<Self, EanFormatError> {
                <Self as EanCode>::new(value)
            }

            /// The validated digits, exactly as supplied.
            pub fn value(&self) -> &str {
                &self.value
            }

            /// Consume the code and return its digits.
            pub fn into_inner(self) -> String {
                self.value
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.value
            }
        }

        impl FromStr for $name {
            type Err = EanFormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = EanFormatError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<RawEan> for $name {
            type Error = EanFormatError;

            fn try_from(raw: RawEan) -> Result<Self, Self::Error> {
                Self::new(raw.value)
            }
        }

        impl From<$name> for RawEan {
            fn from(code: $name) -> Self {
                RawEan { value: code.value }
            }
        }
    };
}

ean_type!(
    /// An 8-digit EAN code.
    Ean8,
    EAN8_LENGTH
);

ean_type!(
    /// A 13-digit EAN code.
    ///
    /// Besides the plain value, EAN-13 codes used for variable-weight goods
    /// carry a prefix, a merchant code and a price; see [`Ean13::decompose`].
    Ean13,
    EAN13_LENGTH
);

/// Variable-weight fields of an EAN-13 code.
///
/// The 13th digit (the check digit) is not part of the view and is never
/// verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariableWeight<'a> {
    /// Digits 0..2.
    pub prefix: &'a str,
    /// Digits 2..7.
    pub merchant_code: &'a str,
    /// Digits 7..12.
    pub price_cents: &'a str,
}

impl<'a> From<VariableWeight<'a>> for (&'a str, &'a str, &'a str) {
    fn from(view: VariableWeight<'a>) -> Self {
        (view.prefix, view.merchant_code, view.price_cents)
    }
}

const PREFIX: std::ops::Range<usize> = 0..2;
const MERCHANT_CODE: std::ops::Range<usize> = 2..7;
const PRICE_CENTS: std::ops::Range<usize> = 7..12;

impl Ean13 {
    /// Split the code into prefix, merchant code and price in cents.
    ///
    /// Pure slicing; the value was validated at construction.
    pub fn decompose(&self) -> VariableWeight<'_> {
        VariableWeight {
            prefix: &self.value[PREFIX],
            merchant_code: &self.value[MERCHANT_CODE],
            price_cents: &self.value[PRICE_CENTS],
        }
    }

    /// The merchant code alone (digits 2..7).
    pub fn merchant_code(&self) -> &str {
        &self.value[MERCHANT_CODE]
    }
}

/// Which EAN length to validate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EanVariant {
    Ean8,
    Ean13,
}

impl EanVariant {
    /// Digit count a code of this variant must have.
    pub fn expected_length(self) -> usize {
        match self {
            EanVariant::Ean8 => Ean8::LENGTH,
            EanVariant::Ean13 => Ean13::LENGTH,
        }
    }

    /// Short lowercase name, also used as the schema record name.
    pub fn name(self) -> &'static str {
        match self {
            EanVariant::Ean8 => "ean8",
            EanVariant::Ean13 => "ean13",
        }
    }
}

impl fmt::Display for EanVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An EAN code of either length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Ean {
    Ean8(Ean8),
    Ean13(Ean13),
}

impl Ean {
    /// Validate `value` as the given variant.
    pub fn new(value: impl Into<String>, variant: EanVariant) -> Result<Self, EanFormatError> {
        match variant {
            EanVariant::Ean8 => Ean8::new(value).map(Ean::Ean8),
            EanVariant::Ean13 => Ean13::new(value).map(Ean::Ean13),
        }
    }

    pub fn variant(&self) -> EanVariant {
        match self {
            Ean::Ean8(_) => EanVariant::Ean8,
            Ean::Ean13(_) => EanVariant::Ean13,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Ean::Ean8(code) => code.value(),
            Ean::Ean13(code) => code.value(),
        }
    }

    /// Variable-weight view, only available for EAN-13.
    pub fn decompose(&self) -> Option<VariableWeight<'_>> {
        match self {
            Ean::Ean8(_) => None,
            Ean::Ean13(code) => Some(code.decompose()),
        }
    }
}

impl fmt::Display for Ean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl From<Ean8> for Ean {
    fn from(code: Ean8) -> Self {
        Ean::Ean8(code)
    }
}

impl From<Ean13> for Ean {
    fn from(code: Ean13) -> Self {
        Ean::Ean13(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit_strings(len: usize) -> Vec<String> {
        (0..10u32)
            .map(|seed| {
                (0..len)
                    .map(|i| char::from_digit((seed * 7 + i as u32 * 3) % 10, 10).unwrap())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn ean8_accepts_eight_digits() {
        let code = Ean8::new("12345678").unwrap();
        assert_eq!(code.value(), "12345678");

        for s in digit_strings(8) {
            assert_eq!(Ean8::new(s.clone()).unwrap().value(), s);
        }
    }

    #[test]
    fn ean8_keeps_leading_zeros() {
        let code = Ean8::new("00000000").unwrap();
        assert_eq!(code.value(), "00000000");
        assert_eq!(code.to_string(), "00000000");
    }

    #[test]
    fn ean8_rejects_wrong_length() {
        for bad in ["", "1234567", "123456789", "9780201379624"] {
            let err = Ean8::new(bad).unwrap_err();
            assert_eq!(err.value, bad);
            assert_eq!(err.message, "EAN code should be exactly 8 digits.");
        }
    }

    #[test]
    fn ean8_rejects_non_digits_with_same_message() {
        for bad in ["1234567X", " 1234567", "1234567 ", "12-45678", "1234567\u{0663}"] {
            let err = Ean8::new(bad).unwrap_err();
            assert_eq!(err.value, bad);
            assert_eq!(err.to_string(), "EAN code should be exactly 8 digits.");
        }
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        // Arabic-Indic and fullwidth digits are numeric but not barcode digits.
        for bad in ["١٢٣٤٥٦٧٨", "１２３４５６７８"] {
            assert_eq!(bad.chars().count(), 8);
            let err = Ean8::new(bad).unwrap_err();
            assert_eq!(err.value, bad);
            assert_eq!(err.message, "EAN code should be exactly 8 digits.");
        }
        assert!(Ean13::new("٩٧٨٠٢٠١٣٧٩٦٢٤").is_err());
    }

    #[test]
    fn ean13_accepts_thirteen_digits() {
        let code = Ean13::new("9780201379624").unwrap();
        assert_eq!(code.value(), "9780201379624");

        for s in digit_strings(13) {
            assert_eq!(Ean13::new(s.clone()).unwrap().value(), s);
        }
    }

    #[test]
    fn ean13_rejects_invalid_input() {
        for bad in ["97802013796XX", "978020137962", "97802013796245", "12345678"] {
            let err = Ean13::new(bad).unwrap_err();
            assert_eq!(err.value, bad);
            assert_eq!(err.message, "EAN code should be exactly 13 digits.");
        }
    }

    #[test]
    fn check_digit_is_not_verified() {
        // 9780201379624 has check digit 4; any trailing digit is accepted.
        assert!(Ean13::new("9780201379620").is_ok());
        assert!(Ean8::new("12345670").is_ok());
    }

    #[test]
    fn decompose_slices_fixed_ranges() {
        let code = Ean13::new("9780201379624").unwrap();
        let parts = code.decompose();
        assert_eq!(parts.prefix, "97");
        assert_eq!(parts.merchant_code, "80201");
        assert_eq!(parts.price_cents, "37962");

        let tuple: (&str, &str, &str) = parts.into();
        assert_eq!(tuple, ("97", "80201", "37962"));
    }

    #[test]
    fn decompose_reproduces_first_twelve_digits() {
        for s in digit_strings(13) {
            let code = Ean13::new(s.clone()).unwrap();
            let parts = code.decompose();
            let joined = format!("{}{}{}", parts.prefix, parts.merchant_code, parts.price_cents);
            assert_eq!(joined, &s[..12]);
        }
    }

    #[test]
    fn merchant_code_matches_decomposition() {
        for s in digit_strings(13) {
            let code = Ean13::new(s).unwrap();
            assert_eq!(code.merchant_code(), code.decompose().merchant_code);
        }
        assert_eq!(Ean13::new("2012345012349").unwrap().merchant_code(), "12345");
    }

    #[test]
    fn ean_dispatches_on_variant() {
        let short = Ean::new("12345678", EanVariant::Ean8).unwrap();
        assert_eq!(short.variant(), EanVariant::Ean8);
        assert!(short.decompose().is_none());

        let long = Ean::new("9780201379624", EanVariant::Ean13).unwrap();
        assert_eq!(long.variant(), EanVariant::Ean13);
        assert_eq!(long.value(), "9780201379624");
        assert_eq!(long.decompose().unwrap().prefix, "97");

        let err = Ean::new("12345678", EanVariant::Ean13).unwrap_err();
        assert_eq!(err.message, "EAN code should be exactly 13 digits.");
    }

    #[test]
    fn variant_lengths_and_names() {
        assert_eq!(EanVariant::Ean8.expected_length(), 8);
        assert_eq!(EanVariant::Ean13.expected_length(), 13);
        assert_eq!(EanVariant::Ean13.to_string(), "ean13");
    }

    #[test]
    fn parses_from_str() {
        let code: Ean8 = "87654321".parse().unwrap();
        assert_eq!(code.as_ref(), "87654321");
        assert!("8765432".parse::<Ean8>().is_err());
    }

    #[test]
    fn serde_uses_value_object_shape_and_validates() {
        let code = Ean13::new("9780201379624").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, r#"{"value":"9780201379624"}"#);

        let back: Ean13 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);

        let err = serde_json::from_str::<Ean8>(r#"{"value":"1234567"}"#).unwrap_err();
        assert!(err.to_string().contains("EAN code should be exactly 8 digits."));
    }
}
