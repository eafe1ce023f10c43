use std::path::PathBuf;

/// Separator between two entries in the written `.bib` file
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// One entry of a `.bib` file, borrowed verbatim from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'s> {
    /// entry type, e.g. “article”
    pub kind: &'s str,
    /// the full entry from `@` to its closing `}`, unmodified
    pub text: &'s str,
    /// zero-based line number of the `@`
    pub lineno: usize,
}

/// The first entries of a document, plus how many entries it holds in total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'s> {
    pub selected: Vec<Entry<'s>>,
    pub total_found: usize,
}

impl<'s> Extraction<'s> {
    /// Join the selected entries with one blank line between each pair.
    /// No separator is added before the first or after the last entry.
    pub fn to_bib_string(&self) -> String {
        self.selected
            .iter()
            .map(|entry| entry.text)
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    }
}

/// What happened during one file run, for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    pub selected: usize,
    pub total_found: usize,
    pub output: PathBuf,
}
