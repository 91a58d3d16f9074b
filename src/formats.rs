//! Output formats for parsed trees
//!
//! The treeviz formatter renders a tree one node per line for quick visual
//! inspection; machine-readable output goes through the serde derives on
//! the AST types instead.

pub mod treeviz;

pub use treeviz::to_treeviz_str;
