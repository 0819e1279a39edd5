//! # Logger Helper Sample Library
//!
//! A small module of functions and a class, used by the `logger-helper-sample`
//! binary and its integration tests to show what wrapped calls log.

pub mod basic;
pub mod error;
