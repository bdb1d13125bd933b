//! agtype_codec - Apache AGE graph values for Rust
//!
//! Wraps the text form of AGE's `agtype` in [`Agtype`], with typed
//! coercions to scalars, lists, vertices, edges and paths, and binds it to
//! the `postgres` driver through [`FromSql`](postgres::types::FromSql) and
//! [`ToSql`](postgres::types::ToSql).

pub mod agtype;
pub mod cli;
pub mod commands;
pub mod config;
pub mod decode;
pub mod error;
pub mod escape;
pub mod graph;
pub mod output;
pub mod value;
pub mod wire;

#[macro_use]
pub mod test_macros;

pub use agtype::Agtype;
pub use decode::{decode, reconstruct_path, DecodeOptions};
pub use error::{AgtypeError, Result};
pub use graph::{Edge, GraphId, Path, Vertex};
pub use value::{Properties, Value};
pub use wire::{AgeRow, TextCodec};
