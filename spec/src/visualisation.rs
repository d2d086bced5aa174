//! Line filter producing the visualisation variant of a rendered document.
//!
//! The skill root class adds an edge from every skill to a single node,
//! which clutters graph views without adding information. [`filter`] removes
//! the root's class block and every line linking a class to it as a direct
//! parent.
//!
//! The filter works on text, not on an XML tree. It expects the layout of
//! [`crate::serializer::owl`]: one element per line and a root block of
//! exactly [`ROOT_BLOCK_TRAILING_LINES`] lines after its opening tag. When the
//! layout does not match, the output is still produced and the mismatch is
//! reported as a [`FilterWarning`]. To build the variant from an
//! [`Ontology`](crate::Ontology) instead, render with
//! [`RenderOptions::for_visualisation`](crate::serializer::owl::RenderOptions::for_visualisation).

use std::fmt;

/// Lines following the root's opening tag that belong to its block: the
/// entity type, label, comment, url and the closing tag.
pub const ROOT_BLOCK_TRAILING_LINES: usize = 5;

/// A layout mismatch found while filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterWarning {
    /// No line opens the root class; nothing but parent links was removed.
    RootClassNotFound {
        /// The IRI searched for.
        root_iri: String,
    },
    /// The last line of the removed window is not a closing `</owl:Class>`.
    UnexpectedBlockShape {
        /// 1-based line number of the root's opening tag.
        line: usize,
    },
}

impl fmt::Display for FilterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterWarning::RootClassNotFound { root_iri } => {
                write!(f, "root class `{root_iri}` not found; filtered output is unreliable")
            }
            FilterWarning::UnexpectedBlockShape { line } => write!(
                f,
                "class block opened at line {line} does not close after {ROOT_BLOCK_TRAILING_LINES} lines; filtered output is unreliable"
            ),
        }
    }
}

/// Result of [`filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// The filtered document.
    pub text: String,
    /// Number of lines dropped.
    pub removed_lines: usize,
    /// Layout mismatches; empty when the document had the expected shape.
    pub warnings: Vec<FilterWarning>,
}

impl FilterOutcome {
    /// Returns true if the document matched the expected layout.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Removes the `root_iri` class block and every `rdfs:subClassOf` line
/// pointing at it, keeping all other lines in order.
#[must_use]
pub fn filter(document: &str, root_iri: &str) -> FilterOutcome {
    let class_open = format!("<owl:Class rdf:about=\"{root_iri}\">");
    let parent_link = format!("<rdfs:subClassOf rdf:resource=\"{root_iri}\"/>");

    let mut text = String::with_capacity(document.len());
    let mut removed_lines = 0;
    let mut warnings = Vec::new();
    let mut found = false;
    let mut skip_until: Option<usize> = None;

    for (index, line) in document.split_inclusive('\n').enumerate() {
        if line.contains(&class_open) {
            found = true;
            let end = index + ROOT_BLOCK_TRAILING_LINES;
            let closes = document
                .lines()
                .nth(end)
                .is_some_and(|l| l.trim() == "</owl:Class>");
            if !closes {
                warnings.push(FilterWarning::UnexpectedBlockShape { line: index + 1 });
            }
            skip_until = Some(end);
            removed_lines += 1;
            continue;
        }
        if skip_until.is_some_and(|end| index <= end) {
            removed_lines += 1;
            continue;
        }
        if line.contains(&parent_link) {
            removed_lines += 1;
            continue;
        }
        text.push_str(line);
    }

    if !found {
        warnings.push(FilterWarning::RootClassNotFound {
            root_iri: root_iri.to_owned(),
        });
    }

    FilterOutcome {
        text,
        removed_lines,
        warnings,
    }
}
