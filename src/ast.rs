//! Document tree data model
//!
//! The node types produced by the parser, one module per element family.
//! Each family is a closed enum (`BodyElement`, `StructureElement`,
//! `InlineElement`) so consumers match exhaustively instead of downcasting.

pub mod body;
pub mod document;
pub mod error;
pub mod list;
pub mod position;
pub mod structure;
pub mod text;

pub use body::{BlockQuote, Body, BodyElement, Paragraph};
pub use document::{Document, Fragment};
pub use error::Error;
pub use list::{BulletList, EnumType, EnumeratedList, ListItem};
pub use position::Position;
pub use structure::{Section, Structure, StructureElement, Transition};
pub use text::{plain_text, InlineElement, Text};
