//! Derived design tokens

mod color;

pub use color::{ColorRole, DerivedTokens};
