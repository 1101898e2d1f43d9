use std::path::Path;
use log::debug;
use roxmltree::{Document, Node};

use crate::error::MetricsError;
use crate::metrics::types::{ElementKind, SourceElement};
use crate::utils::file_utils;

/// Parser that extracts constructor and method signatures from XML documents
#[derive(Debug)]
pub struct SignatureParser {
    /// Whether to log each extracted element
    pub verbose: bool,
}

impl SignatureParser {
    /// Create a new signature parser
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Parse a file and extract its constructor and method elements
    pub fn parse_file(&self, file_path: impl AsRef<Path>) -> Result<Vec<SourceElement>, MetricsError> {
        let file_path = file_path.as_ref();
        debug!("Parsing file: {}", file_path.display());

        let content = file_utils::read_file_to_string(file_path)?;

        self.parse_content(&content, file_path)
    }

    /// Parse document content and extract constructor and method elements.
    ///
    /// Elements are matched anywhere in the tree, not just at the top level.
    /// All constructors come first in document order, then all methods in
    /// document order; the aggregation semantics depend on that sequence.
    pub fn parse_content(&self, content: &str, file_path: &Path) -> Result<Vec<SourceElement>, MetricsError> {
        let doc = Document::parse(content).map_err(|source| MetricsError::Parse {
            path: file_path.to_path_buf(),
            source,
        })?;

        let mut elements = Vec::new();
        self.extract_elements(&doc, "constructor", ElementKind::Constructor, &mut elements, file_path);
        self.extract_elements(&doc, "method", ElementKind::Method, &mut elements, file_path);

        debug!("Found {} elements in {}", elements.len(), file_path.display());
        Ok(elements)
    }

    /// Collect every element with the given tag name, in document order
    fn extract_elements(
        &self,
        doc: &Document,
        tag: &str,
        kind: ElementKind,
        elements: &mut Vec<SourceElement>,
        file_path: &Path,
    ) {
        for node in doc.descendants().filter(|n| n.has_tag_name(tag)) {
            let param_count = count_parameters(node);

            if self.verbose {
                debug!("Found {:?} with {} parameters in {}", kind, param_count, file_path.display());
            }

            elements.push(SourceElement { kind, param_count });
        }
    }
}

/// Count the `parameter` elements anywhere beneath a node
fn count_parameters(node: Node) -> usize {
    node.descendants()
        .filter(|n| n.has_tag_name("parameter"))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use pretty_assertions::assert_eq;

    fn parse(content: &str) -> Vec<SourceElement> {
        SignatureParser::new(false)
            .parse_content(content, &PathBuf::from("test.xml"))
            .expect("content should parse")
    }

    #[test]
    fn extracts_constructors_before_methods() {
        let elements = parse(
            r#"<root>
                <class name="A">
                    <method name="run">
                        <parameter name="arg"/>
                    </method>
                    <constructor name="A"/>
                </class>
            </root>"#,
        );

        assert_eq!(
            elements,
            vec![
                SourceElement { kind: ElementKind::Constructor, param_count: 0 },
                SourceElement { kind: ElementKind::Method, param_count: 1 },
            ]
        );
    }

    #[test]
    fn counts_parameters_at_any_depth() {
        let elements = parse(
            r#"<root>
                <package name="p">
                    <class name="A">
                        <constructor name="A">
                            <signature>
                                <parameter name="a"/>
                                <parameter name="b"/>
                            </signature>
                            <parameter name="c"/>
                        </constructor>
                    </class>
                </package>
            </root>"#,
        );

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].param_count, 3);
    }

    #[test]
    fn finds_elements_at_any_depth() {
        let elements = parse(
            r#"<root>
                <package name="outer">
                    <package name="inner">
                        <class name="A">
                            <method name="m1"/>
                        </class>
                    </package>
                </package>
                <method name="m2">
                    <parameter name="x"/>
                    <parameter name="y"/>
                </method>
            </root>"#,
        );

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].param_count, 0);
        assert_eq!(elements[1].param_count, 2);
    }

    #[test]
    fn document_with_no_elements_yields_empty_list() {
        let elements = parse("<root><field name=\"x\"/></root>");
        assert!(elements.is_empty());
    }

    #[test]
    fn malformed_document_names_the_file() {
        let parser = SignatureParser::new(false);
        let result = parser.parse_content("<root><unclosed>", &PathBuf::from("broken.xml"));

        match result {
            Err(MetricsError::Parse { path, .. }) => {
                assert_eq!(path, PathBuf::from("broken.xml"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
