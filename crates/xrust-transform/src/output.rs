//! Output method detection

use xot::Xot;

const XSLT_NAMESPACE: &str = "http://www.w3.org/1999/XSL/Transform";

/// Serialization method declared by `xsl:output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMethod {
    #[default]
    Xml,
    Text,
}

impl OutputMethod {
    /// Read the method from a stylesheet's `xsl:output` element.
    ///
    /// Stylesheets without `xsl:output`, or with a method other than
    /// `text`, serialize as XML.
    pub fn detect(xsl: &str) -> Self {
        let mut xot = Xot::new();
        let Ok(doc) = xot.parse(xsl) else {
            return OutputMethod::Xml;
        };

        let xsl_ns = xot.add_namespace(XSLT_NAMESPACE);
        let output_name = xot.add_name_ns("output", xsl_ns);
        let method_name = xot.add_name("method");

        let declared = xot
            .descendants(doc)
            .filter(|node| {
                xot.element(*node)
                    .is_some_and(|element| element.name() == output_name)
            })
            .find_map(|node| xot.get_attribute(node, method_name).map(str::to_string));

        match declared.as_deref().map(str::trim) {
            Some("text") => OutputMethod::Text,
            _ => OutputMethod::Xml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_text_output() {
        let xsl = r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform"><xsl:output method="text"/></xsl:stylesheet>"#;
        assert_eq!(OutputMethod::detect(xsl), OutputMethod::Text);
    }

    #[test]
    fn defaults_to_xml() {
        let xsl = r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform"/>"#;
        assert_eq!(OutputMethod::detect(xsl), OutputMethod::Xml);
        assert_eq!(OutputMethod::detect("not xml"), OutputMethod::Xml);
    }

    #[test]
    fn output_outside_xslt_namespace_is_ignored() {
        let xsl = r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform"><output method="text"/></xsl:stylesheet>"#;
        assert_eq!(OutputMethod::detect(xsl), OutputMethod::Xml);
    }
}
