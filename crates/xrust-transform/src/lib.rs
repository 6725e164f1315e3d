//! xrust stylesheet transformer
//!
//! Supports:
//! - XSLT ~1.0 stylesheets, compiled once and applied many times
//! - `text` and `xml` output methods
//!
//! Does NOT support:
//! - `xsl:include` / `xsl:import` of remote resources
//! - stylesheet parameters

pub mod output;
pub mod transformer;

pub use output::OutputMethod;
pub use transformer::Transformer;
