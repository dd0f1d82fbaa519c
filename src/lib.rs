pub mod config;
pub mod error;
pub mod ir;
pub mod lower;
pub mod parse;
pub mod pipeline;
pub mod validate;
pub mod wasm;
