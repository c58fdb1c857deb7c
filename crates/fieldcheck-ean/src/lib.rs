//! EAN-8 and EAN-13 value objects.
//!
//! A code is validated once, when it is built: it must be exactly the
//! variant's number of ASCII digits. Check digits are not verified.
//!
//! ```
//! use fieldcheck_ean::{Ean13, Ean8};
//!
//! let code = Ean13::new("9780201379624").unwrap();
//! let parts = code.decompose();
//! assert_eq!((parts.prefix, parts.merchant_code, parts.price_cents), ("97", "80201", "37962"));
//!
//! assert!(Ean8::new("1234567").is_err());
//! ```

pub mod code;
pub mod error;
pub mod validator;

pub use code::{
    validate_digits, Ean, Ean13, Ean8, EanCode, EanVariant, VariableWeight, EAN13_LENGTH,
    EAN8_LENGTH,
};
pub use error::{EanError, EanFormatError, Result};
pub use validator::{EanValidator, EAN13_SCHEMA, EAN8_SCHEMA};
