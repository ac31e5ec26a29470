//! Domain models for clinic patient forms.

mod contact;

pub use contact::*;
