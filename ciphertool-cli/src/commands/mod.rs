//! Command handlers, one module per scheme.

pub mod gost;
pub mod morse;
pub mod rot13;
