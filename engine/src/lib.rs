//! Radix conversion engine.
//!
//! Pure functions that evaluate integer expressions typed in decimal,
//! binary or hex, and derive every other representation of the result:
//! binary, hex, base64 of the decimal text, ASCII, two's-complement
//! interpretations and fixed-width panels. [`Session`] layers the
//! field-synchronization rules of an interactive converter on top.

pub mod adapters;
pub mod base;
pub mod codec;
pub mod config;
pub mod derive;
pub mod error;
pub mod eval;
pub mod session;
pub mod twos;

// Re-export commonly used types
pub use adapters::{
    evaluate_binary_expression, evaluate_decimal_expression, evaluate_hex_expression, Evaluation,
};
pub use base::Base;
pub use codec::{decode_bytes, encode_ascii};
pub use config::ConverterConfig;
pub use derive::{derive_all, derive_from_text, Representation};
pub use error::{ConvertError, EvalError, FieldError, FieldErrorKind};
pub use eval::evaluate;
pub use session::{DerivedPanel, PanelEntry, Session, Snapshot};
pub use twos::{fixed_width_panels, twos_complement_decode, twos_complement_encode, TwosComplement, Width};
