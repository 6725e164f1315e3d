//! Compiled XSLT stylesheet

use std::fs;
use std::path::Path;

use corpus_traits::error::{Error, Result};
use corpus_traits::Transform;
use xrust::item::{Item as XrustItem, Node, SequenceTrait};
use xrust::parser::xml::parse as parse_xml;
use xrust::transform::context::{Context, StaticContextBuilder};
use xrust::trees::smite::RNode;
use xrust::xdmerror::{Error as XrustError, ErrorKind};
use xrust::xslt::from_document;

use crate::output::OutputMethod;

/// A stylesheet compiled once and applied to many documents.
///
/// Every call to [`Transformer::transform`] works on its own copy of the
/// compiled context, so transforming never changes later results.
pub struct Transformer {
    context: Context<RNode>,
    method: OutputMethod,
}

impl Transformer {
    /// Read and compile the stylesheet at `path`
    pub fn construct<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let xsl = fs::read_to_string(path)
            .map_err(|e| Error::stylesheet(format!("{}: {}", path.display(), e)))?;
        Self::from_source(&xsl)
    }

    /// Compile a stylesheet held in memory
    pub fn from_source(xsl: &str) -> Result<Self> {
        let style = RNode::new_document();
        parse_xml(style.clone(), xsl, None).map_err(|e| {
            Error::stylesheet(format!("could not read stylesheet as XML data: {}", e))
        })?;

        let context = from_document(
            style,
            None,
            |s: &str| {
                let doc = RNode::new_document();
                parse_xml(doc.clone(), s, None)?;
                Ok(doc)
            },
            |_| Ok(String::new()),
        )
        .map_err(|e| Error::stylesheet(e.to_string()))?;

        Ok(Self {
            context,
            method: OutputMethod::detect(xsl),
        })
    }

    /// Serialization method of the compiled stylesheet
    pub fn output_method(&self) -> OutputMethod {
        self.method
    }

    /// Apply the stylesheet to `data` and return the trimmed result
    pub fn transform(&self, data: &str) -> Result<String> {
        let doc = RNode::new_document();
        parse_xml(doc.clone(), data, None).map_err(|e| Error::transform_input(e.to_string()))?;

        let mut context = self.context.clone();
        context.context(vec![XrustItem::Node(doc)], 0);
        context.result_document(RNode::new_document());

        let mut static_context = StaticContextBuilder::new()
            .message(|_| Ok(()))
            .fetcher(|_| Err(XrustError::new(ErrorKind::NotImplemented, "not implemented")))
            .parser(|_| Err(XrustError::new(ErrorKind::NotImplemented, "not implemented")))
            .build();

        let sequence = context
            .evaluate(&mut static_context)
            .map_err(|e| Error::transform_apply(e.to_string()))?;

        let output = match self.method {
            OutputMethod::Text => sequence.to_string(),
            OutputMethod::Xml => {
                let mut result = String::new();
                for item in &sequence {
                    match item {
                        XrustItem::Node(n) => result.push_str(&n.to_xml()),
                        XrustItem::Value(v) => result.push_str(&v.to_string()),
                        _ => {}
                    }
                }
                result
            }
        };

        Ok(output.trim().to_string())
    }

    /// Release the compiled stylesheet
    pub fn close(self) {}
}

impl Transform for Transformer {
    fn transform(&self, data: &str) -> Result<String> {
        Transformer::transform(self, data)
    }

    fn close(self) {
        Transformer::close(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ECHO: &str = r#"<?xml version="1.0"?>
<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
    <xsl:output method="text"/>
    <xsl:template match="/">
        <xsl:value-of select="/xml"/>
    </xsl:template>
</xsl:stylesheet>"#;

    #[test]
    fn echoes_element_content() {
        let transformer = Transformer::from_source(ECHO).unwrap();
        assert_eq!(transformer.transform("<xml>1</xml>").unwrap(), "1");
        assert_eq!(transformer.transform("<xml>  2 \n</xml>").unwrap(), "2");
        transformer.close();
    }

    #[test]
    fn malformed_input_is_rejected() {
        let transformer = Transformer::from_source(ECHO).unwrap();
        let result = transformer.transform("<xml>1</xm");
        assert!(matches!(result, Err(Error::TransformInput(_))));
    }

    #[test]
    fn malformed_stylesheet_is_rejected() {
        let result = Transformer::from_source("<xsl:stylesheet");
        assert!(matches!(result, Err(Error::StylesheetLoad(_))));
    }

    #[test]
    fn missing_stylesheet_file_is_rejected() {
        let result = Transformer::construct("/nonexistent/bracketed-sentence.xsl");
        assert!(matches!(result, Err(Error::StylesheetLoad(_))));
    }
}
