//! Domain layer for the contact book.
//!
//! Holds the shared id/timestamp aliases, the domain error type, input
//! validation, and the label-filter semantics used when listing contacts.
//! This crate performs no I/O so both the store and the HTTP layer can
//! depend on it.

pub mod contact;
pub mod error;
pub mod label_filter;
pub mod types;
