//! Build markup trees in memory and generate XML or HTML5 from them.
//!
//! ladle provides:
//! - **Tree model**: [`Node`] and [`Element`] values with ordered attributes
//! - **Builder**: the [`Builder`] trait, shared by elements and documents,
//!   for growing a tree fluently
//! - **XML generation**: [`xml::generate`], compact or indented, never
//!   reflowing text content
//! - **HTML generation**: [`html::generate`], with inline/block aware
//!   indentation and unescaped `script`/`style` content
//!
//! # Example
//!
//! ```rust
//! use ladle::{Builder, TagTraits, html};
//!
//! let doc = html::Document::new().with_html_root("en", |root| {
//!     root.element("head").element("title").text("Hello");
//!     let body = root.element("body");
//!     body.tagged("hr", TagTraits::VOID);
//!     let p = body.element("p");
//!     p.text("Say ");
//!     p.tagged("em", TagTraits::INLINE).text("hi");
//! });
//!
//! assert_eq!(
//!     doc.to_html_pretty(),
//!     "<!DOCTYPE html>\n\
//!      <html lang=\"en\">\n\
//!      \x20 <head>\n\
//!      \x20   <title>Hello</title>\n\
//!      \x20 </head>\n\
//!      \x20 <body>\n\
//!      \x20   <hr />\n\
//!      \x20   <p>Say <em>hi</em></p>\n\
//!      \x20 </body>\n\
//!      </html>\n"
//! );
//! ```

#[macro_use]
mod tracing_macros;

pub mod builder;
pub mod escape;
pub mod html;
pub mod node;
pub mod xml;

pub use builder::Builder;
pub use escape::{escape, escape_into};
pub use node::{Element, Node, TagTraits};
