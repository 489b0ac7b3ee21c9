//! Contact records and the rules that apply to them.
//!
//! Phone validation, search matching and display ordering live here, along
//! with the [`store::ContactStore`] trait that backends implement. No HTTP
//! or SQL code.

pub mod contact;
pub mod error;
pub mod ordering;
pub mod phone;
pub mod search;
pub mod store;

pub use error::{Error, Result};
