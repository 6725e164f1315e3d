//! Integration tests for the xrust transformer

use std::fs;

use corpus_traits::Transform;
use xrust_transform::{OutputMethod, Transformer};

const WORDS: &str = r#"<?xml version="1.0"?>
<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
    <xsl:output method="text"/>
    <xsl:template match="/">
        <xsl:for-each select="//node[@word]">
            <xsl:value-of select="@word"/>
            <xsl:text> </xsl:text>
        </xsl:for-each>
    </xsl:template>
</xsl:stylesheet>"#;

const SENTENCE: &str = r#"<alpino_ds>
  <node cat="smain" begin="0" end="2">
    <node rel="su" word="Jan" begin="0" end="1"/>
    <node rel="hd" word="slaapt" begin="1" end="2"/>
  </node>
</alpino_ds>"#;

fn write_stylesheet(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("words.xsl");
    fs::write(&path, WORDS).unwrap();
    path
}

#[test]
fn construct_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let transformer = Transformer::construct(write_stylesheet(&dir)).unwrap();
    assert_eq!(transformer.output_method(), OutputMethod::Text);
    assert_eq!(transformer.transform(SENTENCE).unwrap(), "Jan slaapt");
}

#[test]
fn output_has_no_surrounding_whitespace() {
    let transformer = Transformer::from_source(WORDS).unwrap();
    let output = transformer.transform(SENTENCE).unwrap();
    assert_eq!(output, output.trim());
}

#[test]
fn transformers_are_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_stylesheet(&dir);

    let first = Transformer::construct(&path).unwrap();
    let second = Transformer::construct(&path).unwrap();

    let a = first.transform(SENTENCE).unwrap();
    let b = second.transform(SENTENCE).unwrap();
    assert_eq!(a, b);

    // Reuse does not leak state between calls.
    assert_eq!(first.transform(SENTENCE).unwrap(), a);
}

#[test]
fn usable_through_the_transform_trait() {
    fn apply<T: Transform>(transformer: T, data: &str) -> String {
        let output = transformer.transform(data).unwrap();
        transformer.close();
        output
    }

    let transformer = Transformer::from_source(WORDS).unwrap();
    assert_eq!(apply(transformer, SENTENCE), "Jan slaapt");
}
