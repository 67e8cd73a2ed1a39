//! The arithmetic module implements classical arithmetic coding for the
//! entropic library.
//!
//! Arithmetic coding represents a whole message as a single real number in
//! `[0,1)`. Each symbol owns a sub-interval of the unit interval sized by
//! its probability; encoding narrows a working interval into the current
//! symbol's share, one symbol at a time, and any value inside the final
//! interval identifies the message. Decoding reverses the narrowing, which
//! requires the same model and the original message length.
//!
//! This coder keeps the plain finite-precision form: values are `f64`, and
//! there is no carry-propagating bitwise renormalization. That caps
//! reliable message length at roughly 50 symbols.

pub mod codec;
pub mod model;

pub use codec::ArithmeticCodec;
pub use model::{Interval, SymbolModel};
