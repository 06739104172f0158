//! Functional core of the ATK inventory service.
//!
//! Pure data types, validation rules and storage traits. Nothing in this crate
//! performs I/O; storage backends live in the `atk` service crate.

pub mod atk;
pub mod storage;
