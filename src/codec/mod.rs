//! Conversions between form input, model features and decoded results.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;
