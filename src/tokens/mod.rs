//! Design tokens: the flat generated table, the resolved tree, and the
//! exporters that turn the tree back into stylesheet/module sources.
//!
//! The pipeline is one-way and pure:
//!
//! ```text
//! TokenTable (flat, generated)  --resolve-->  DesignTokens (nested, typed)
//!                                                  |
//!                                                  +--render--> css / scss / json / es6
//! ```

pub mod error;
pub mod export;
pub mod path;
pub mod resolver;
pub mod table;
pub mod tree;

pub use error::TokenError;
pub use export::{build_all, render, ExportFormat};
pub use path::{css_name, token_key};
pub use resolver::{resolve, unused_keys};
pub use table::TokenTable;
pub use tree::DesignTokens;
