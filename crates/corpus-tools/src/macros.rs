//! Query macros
//!
//! Macro files define named query fragments that queries refer to as
//! `%name%`. A definition may use macros defined before it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use corpus_traits::error::{Error, Result};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "macros.pest"]
struct MacroParser;

const MARKER: char = '%';

/// Parsed macro definitions, fully expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Macros {
    definitions: HashMap<String, String>,
}

impl Macros {
    /// Load a macro file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            Error::macro_error(format!("Could not read macro file: {}: {}", path.display(), e))
        })?;
        Self::parse(&data)
    }

    /// Parse macro definitions
    pub fn parse(data: &str) -> Result<Self> {
        let file = MacroParser::parse(Rule::file, data)
            .map_err(|e| Error::macro_error(e.to_string()))?
            .next()
            .ok_or_else(|| Error::macro_error("empty parse"))?;

        let mut definitions = HashMap::new();

        for definition in file.into_inner() {
            if definition.as_rule() != Rule::definition {
                continue;
            }

            let mut parts = definition.into_inner();
            let (Some(name), Some(body)) = (parts.next(), parts.next()) else {
                continue;
            };
            let name = name.as_str().to_string();

            if definitions.contains_key(&name) {
                return Err(Error::macro_error(format!("Duplicate macro: {}", name)));
            }

            let expanded = substitute(body.as_str().trim(), &definitions)?;
            definitions.insert(name, expanded);
        }

        Ok(Self { definitions })
    }

    /// Replace every `%name%` of a known macro in `query`.
    ///
    /// Unknown references are left alone.
    pub fn expand(&self, query: &str) -> String {
        replace_references(query, &self.definitions).0
    }

    /// Body of a macro
    pub fn get(&self, name: &str) -> Option<&str> {
        self.definitions.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Expand references inside a definition body; unknown macros are errors.
fn substitute(body: &str, definitions: &HashMap<String, String>) -> Result<String> {
    match replace_references(body, definitions) {
        (expanded, None) => Ok(expanded),
        (_, Some(name)) => Err(Error::macro_error(format!("Unknown macro: {}", name))),
    }
}

/// Replace `%name%` references in a single left-to-right pass.
///
/// Unknown references are kept as written; the first one is returned
/// alongside the result.
fn replace_references<'a>(
    text: &'a str,
    definitions: &HashMap<String, String>,
) -> (String, Option<&'a str>) {
    let mut result = String::with_capacity(text.len());
    let mut unknown = None;
    let mut rest = text;

    while let Some(start) = rest.find(MARKER) {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let reference = after
            .find(MARKER)
            .map(|end| (&after[..end], &after[end + 1..]))
            .filter(|(name, _)| is_macro_name(name));

        match reference {
            Some((name, tail)) => match definitions.get(name) {
                Some(value) => {
                    result.push_str(value);
                    rest = tail;
                }
                None => {
                    unknown.get_or_insert(name);
                    result.push(MARKER);
                    rest = after;
                }
            },
            None => {
                result.push(MARKER);
                rest = after;
            }
        }
    }

    result.push_str(rest);
    (result, unknown)
}

fn is_macro_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const MACROS: &str = r#"
# Noun phrases
np = """ node[@cat="np"] """

subject_np = """
    %np%[@rel="su"]
"""
"#;

    #[test]
    fn parses_definitions() {
        let macros = Macros::parse(MACROS).unwrap();
        assert_eq!(macros.len(), 2);
        assert_eq!(macros.get("np"), Some(r#"node[@cat="np"]"#));
    }

    #[test]
    fn nested_definitions_are_expanded() {
        let macros = Macros::parse(MACROS).unwrap();
        assert_eq!(
            macros.get("subject_np"),
            Some(r#"node[@cat="np"][@rel="su"]"#)
        );
    }

    #[test]
    fn expands_queries() {
        let macros = Macros::parse(MACROS).unwrap();
        assert_eq!(
            macros.expand("//%subject_np% | //%np%"),
            r#"//node[@cat="np"][@rel="su"] | //node[@cat="np"]"#
        );
        assert_eq!(macros.expand("//%other%"), "//%other%");
    }

    #[test]
    fn adjacent_references_expand_left_to_right() {
        let data = "a = \"\"\"X\"\"\"\nb = \"\"\"Y\"\"\"\nc = \"\"\"Z\"\"\"\nd = \"\"\"W\"\"\"\n";
        let expected = Macros::parse(data).unwrap().expand("%a%b%c%d%");
        assert_eq!(expected, "XbZd%");

        for _ in 0..20 {
            let macros = Macros::parse(data).unwrap();
            assert_eq!(macros.expand("%a%b%c%d%"), expected);
        }
    }

    #[test]
    fn unknown_macro_in_definition() {
        let result = Macros::parse(r#"a = """ %b%[@rel="su"] """"#);
        assert!(matches!(result, Err(Error::Macro(_))));
    }

    #[test]
    fn duplicate_definitions() {
        let result = Macros::parse("a = \"\"\"x\"\"\"\na = \"\"\"y\"\"\"\n");
        assert!(matches!(result, Err(Error::Macro(_))));
    }

    #[test]
    fn lone_percent_signs_are_kept() {
        let macros = Macros::parse(r#"pct = """ node[contains(@word, '%')] """"#).unwrap();
        assert_eq!(macros.get("pct"), Some("node[contains(@word, '%')]"));
    }

    #[test]
    fn malformed_file() {
        assert!(Macros::parse(r#"np = "node""#).is_err());
    }

    #[test]
    fn empty_file() {
        assert!(Macros::parse("# nothing here\n").unwrap().is_empty());
    }
}
