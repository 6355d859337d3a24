//! `cmpaq`: a single-file context-mixing compressor in the PAQ family.
//!
//! The public surface is deliberately small: [`compress`] and
//! [`decompress`] drive a logistic-mixed set of order-0/1/2/4 and sparse
//! bit-history models through a binary arithmetic coder, wrapped in a
//! textual header recording the level and plaintext size used to recover
//! it (see [`header::Header`]).

mod apm;
mod coder;
mod codec;
mod context_model;
mod hash_table;
pub mod header;
pub mod level;
mod mixer;
mod predictor;
mod state;
mod statemap;
mod tables;

pub mod error;

pub use codec::{compress, decompress};
pub use error::CodecError;
pub use level::{DEFAULT_LEVEL, MAX_LEVEL};
