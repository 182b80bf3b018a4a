//! Korean name MCP tool surface.
//!
//! Request schemas, dispatch, and the plain-text document builder live in separate submodules.

pub(crate) mod catalog;
mod dispatch;
mod schemas;
mod text_doc;

pub use dispatch::NameService;
