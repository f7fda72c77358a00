//! Cross-crate tests for the address gate and the gated dialer.

pub mod util;

#[cfg(test)]
mod dialer;
#[cfg(test)]
mod gate;
