//! Domain types and pure rules for the luxury asset tokenization platform.
//!
//! Nothing in this crate performs I/O: persistence lives in `luxury-db`,
//! chain access in `luxury-chain`.

pub mod asset;
pub mod bytes32;
pub mod error;
pub mod hashing;
pub mod submission;
pub mod token;
pub mod types;
