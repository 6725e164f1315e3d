//! Marker query application on xot trees

use corpus_traits::error::{Error, Result};
use corpus_traits::MarkerQuery;
use xot::{Node, Xot};

use crate::xpath::XPathQuery;

/// Apply marker queries to a sentence and return the annotated XML.
///
/// For each marker, in order, every element matched by its query gets the
/// marker's attribute set to the marker's value. Each query sees the
/// attributes set by the markers before it. Matches that are not elements
/// are skipped. With no markers the data is returned unchanged.
pub fn apply_markers(xml: &str, markers: &[MarkerQuery]) -> Result<String> {
    if markers.is_empty() {
        return Ok(xml.to_string());
    }

    let mut xot = Xot::new();
    let doc = xot
        .parse(xml)
        .map_err(|e| Error::xml_parse(e.to_string()))?;

    let mut current = xml.to_string();

    for (i, marker) in markers.iter().enumerate() {
        if i > 0 {
            current = serialize(&xot, doc)?;
        }

        if !is_xml_name(&marker.attr) {
            return Err(Error::marker(format!(
                "attribute name contains invalid character: '{}'",
                marker.attr
            )));
        }

        let query = XPathQuery::compile(&marker.query)?;
        let targets: Vec<Node> = query
            .matching_nodes(&current)?
            .into_iter()
            .filter(|path| path.is_element)
            .map(|path| {
                resolve(&xot, doc, &path.steps).ok_or_else(|| {
                    Error::marker("matching node could not be located while marking nodes")
                })
            })
            .collect::<Result<_>>()?;

        let name = xot.add_name(&marker.attr);
        for node in targets {
            xot.attributes_mut(node)
                .insert(name, marker.value.clone());
        }
    }

    serialize(&xot, doc)
}

fn serialize(xot: &Xot, doc: Node) -> Result<String> {
    xot.to_string(doc)
        .map_err(|e| Error::marker(format!("could not serialize marked data: {}", e)))
}

fn resolve(xot: &Xot, root: Node, steps: &[usize]) -> Option<Node> {
    steps
        .iter()
        .try_fold(root, |node, &index| xot.children(node).nth(index))
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = r#"<alpino_ds><node cat="smain" begin="0" end="2"><node rel="su" word="Jan" begin="0" end="1"/><node rel="hd" word="slaapt" begin="1" end="2"/></node></alpino_ds>"#;

    #[test]
    fn marks_matching_elements() {
        let marked = apply_markers(
            SENTENCE,
            &[MarkerQuery::active(r#"//node[@rel="hd"]"#)],
        )
        .unwrap();

        assert!(marked.contains(r#"word="slaapt""#));
        assert!(marked.contains(r#"active="1""#));
        assert_eq!(marked.matches(r#"active="1""#).count(), 1);
    }

    #[test]
    fn markers_are_applied_in_order() {
        let marked = apply_markers(
            SENTENCE,
            &[
                MarkerQuery::new("//node", "active", "1"),
                MarkerQuery::new(r#"//node[@rel="su"]"#, "active", "2"),
            ],
        )
        .unwrap();

        assert_eq!(marked.matches(r#"active="1""#).count(), 2);
        assert_eq!(marked.matches(r#"active="2""#).count(), 1);
    }

    #[test]
    fn later_markers_see_earlier_attributes() {
        let marked = apply_markers(
            SENTENCE,
            &[
                MarkerQuery::active(r#"//node[@rel="su"]"#),
                MarkerQuery::new(r#"//node[@active="1"]"#, "hit", "yes"),
            ],
        )
        .unwrap();

        assert_eq!(marked.matches(r#"hit="yes""#).count(), 1);
        let subject = marked
            .split("<node")
            .find(|element| element.contains(r#"rel="su""#))
            .unwrap();
        assert!(subject.contains(r#"hit="yes""#));
    }

    #[test]
    fn non_element_matches_are_skipped() {
        let marked =
            apply_markers(SENTENCE, &[MarkerQuery::active("//node/@word")]).unwrap();
        assert!(!marked.contains("active"));
    }

    #[test]
    fn no_markers_returns_input() {
        assert_eq!(apply_markers(SENTENCE, &[]).unwrap(), SENTENCE);
    }

    #[test]
    fn invalid_attribute_names_are_rejected() {
        let result = apply_markers(SENTENCE, &[MarkerQuery::new("//node", "1st", "x")]);
        assert!(matches!(result, Err(Error::Marker(_))));
    }

    #[test]
    fn malformed_data_is_a_parse_error() {
        let result = apply_markers("<alpino_ds>", &[MarkerQuery::active("//node")]);
        assert!(matches!(result, Err(Error::XmlParse(_))));
    }
}
