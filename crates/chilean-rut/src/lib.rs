//! Chilean RUT (Rol Único Tributario) values.
//!
//! This crate validates, parses, formats and generates RUTs: a numeric body
//! of 1-8 digits followed by a modulo-11 check digit (`0-9` or `k`).
//!
//! # Module Organization
//!
//! - [`checksum`]: check digit computation
//! - [`rut`]: the [`Rut`] value type, construction and parsing
//! - [`format`]: output styles ([`RutFormat`])
//! - [`random`]: random valid RUTs for fixtures and test data
//! - [`error`]: [`RutError`] and the crate [`Result`] alias
//!
//! # Example
//!
//! ```
//! use chilean_rut::{Rut, RutFormat};
//!
//! let rut: Rut = "19.253.299-K".parse().unwrap();
//! assert!(rut.is_valid());
//! assert_eq!(rut.format(RutFormat::Full), "19.253.299-k");
//! assert_eq!(rut.format(RutFormat::OnlyDash), "19253299-k");
//! assert_eq!(rut.format(RutFormat::Escaped), "19253299k");
//! ```
//!
//! Well formed is not the same as valid: `Rut::new("15605286", "k")`
//! succeeds, but `is_valid()` returns false.

pub mod checksum;
pub mod error;
pub mod format;
pub mod random;
pub mod rut;

pub use checksum::{calc_check_digit, is_check_digit};
pub use error::{Result, RutError};
pub use format::RutFormat;
pub use random::{RandomOptions, RutGenerator, random, randoms, uniques};
pub use rut::{MAX_NUMBER, Rut};
