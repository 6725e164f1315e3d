//! XPath compilation and evaluation with xee

use corpus_traits::error::{Error, Result};
use xee_xpath::query::SequenceQuery;
use xee_xpath::{Documents, Queries, Query};

/// Location of a matched node, as child indices from the document node.
///
/// `steps` is empty for the document node itself and for nodes that are
/// not reachable through child axes (attributes, namespaces).
///
/// Paths are independent of the tree the node was found in, so a match
/// found by xee can be located again in a separately parsed xot tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    pub steps: Vec<usize>,
    pub is_element: bool,
}

/// Compiled XPath query
#[derive(Clone)]
pub struct XPathQuery {
    source: String,
    query: SequenceQuery,
}

impl std::fmt::Debug for XPathQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XPathQuery")
            .field("source", &self.source)
            .finish()
    }
}

impl XPathQuery {
    /// Compile an XPath expression
    pub fn compile(xpath: &str) -> Result<Self> {
        let queries = Queries::default();
        let query = queries
            .sequence(xpath)
            .map_err(|e| Error::query(format!("{:?}", e)))?;

        Ok(Self {
            source: xpath.to_string(),
            query,
        })
    }

    /// The expression this query was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate against a document, with the document node as context item.
    ///
    /// Returns the paths of all nodes in the result, in result order.
    /// Atomic values are ignored. Unparsable XML yields `Error::XmlParse`.
    pub fn matching_nodes(&self, xml: &str) -> Result<Vec<NodePath>> {
        let mut documents = Documents::new();
        let doc_handle = documents
            .add_string_without_uri(xml)
            .map_err(|e| Error::xml_parse(format!("{:?}", e)))?;

        let sequence = self
            .query
            .execute(&mut documents, doc_handle)
            .map_err(|e| Error::query(format!("{}: {:?}", self.source, e)))?;

        let xot = documents.xot();
        let mut paths = Vec::new();

        for item in sequence.iter() {
            if let xee_xpath::Item::Node(node) = item {
                // Attribute and namespace nodes are not children of their
                // parent; they count as matches but have no path.
                let mut steps = Vec::new();
                let mut current = node;
                while let Some(parent) = xot.parent(current) {
                    match xot.children(parent).position(|child| child == current) {
                        Some(index) => steps.push(index),
                        None => {
                            steps.clear();
                            break;
                        }
                    }
                    current = parent;
                }
                steps.reverse();

                paths.push(NodePath {
                    steps,
                    is_element: xot.is_element(node),
                });
            }
        }

        Ok(paths)
    }

    /// Number of nodes the query selects in a document
    pub fn count_matches(&self, xml: &str) -> Result<usize> {
        Ok(self.matching_nodes(xml)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = r#"<alpino_ds><node cat="top" begin="0" end="2"><node cat="smain" begin="0" end="2"><node rel="su" pos="noun" word="Jan" begin="0" end="1"/><node rel="hd" pos="verb" word="slaapt" begin="1" end="2"/></node></node></alpino_ds>"#;

    #[test]
    fn compile_rejects_invalid_xpath() {
        let result = XPathQuery::compile("//node[@cat=");
        assert!(matches!(result, Err(Error::QueryEvaluation(_))));
    }

    #[test]
    fn paths_locate_matches() {
        let query = XPathQuery::compile(r#"//node[@rel="hd"]"#).unwrap();
        let paths = query.matching_nodes(SENTENCE).unwrap();
        assert_eq!(paths.len(), 1);
        // document -> alpino_ds -> top -> smain -> second child
        assert_eq!(paths[0].steps, vec![0, 0, 0, 1]);
        assert!(paths[0].is_element);
    }

    #[test]
    fn atomic_results_are_ignored() {
        let query = XPathQuery::compile("count(//node)").unwrap();
        assert_eq!(query.count_matches(SENTENCE).unwrap(), 0);
    }

    #[test]
    fn unparsable_documents_are_reported() {
        let query = XPathQuery::compile("//node").unwrap();
        let result = query.matching_nodes("<alpino_ds><node>");
        assert!(matches!(result, Err(Error::XmlParse(_))));
    }
}
