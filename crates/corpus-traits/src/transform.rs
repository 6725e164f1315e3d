//! Stylesheet transformation abstraction trait

use crate::error::Result;

/// Trait for compiled stylesheets.
///
/// A transformer is built once and applied to many documents. `transform`
/// takes `&self`: applying the stylesheet must not change later results.
pub trait Transform {
    /// Transform an XML document into trimmed output text
    fn transform(&self, data: &str) -> Result<String>;

    /// Release the stylesheet. Consumes the transformer, so it cannot be
    /// used afterwards.
    fn close(self)
    where
        Self: Sized,
    {
    }
}
