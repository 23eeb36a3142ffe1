//! Transcendental and trigonometric functions.
//!
//! Every routine here follows the classic libm shape: reduce the argument
//! into a narrow range, evaluate a short minimax polynomial there, then
//! reconstruct. The difference from a regular libm is that every arithmetic
//! step runs through the crate's own softfloat operations, so the results
//! are bit-identical everywhere rather than merely accurate.

mod asin;
mod atan;
mod exp;
mod hypot;
mod log;
mod log2;
mod pow;
mod sin;
