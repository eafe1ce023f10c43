use std::convert::Infallible;
use std::fs;
use std::io;
use std::io::Read;
use std::path;
use std::str;

use tracing::debug;

use crate::scanner::EntryScanner;
use crate::types::Extraction;

/// Number of entries kept when the caller does not say otherwise
pub const DEFAULT_LIMIT: usize = 500;

/// Holds an entire `.bib` document in memory and hands out its entries
pub struct Extractor {
    src: String,
}

impl Extractor {
    /// Read the whole file at some filepath as source.
    pub fn from_file<P: AsRef<path::Path>>(path: P) -> Result<Extractor, io::Error> {
        let mut fd = fs::File::open(path)?;
        let mut buf = String::new();
        fd.read_to_string(&mut buf)?;
        Ok(Extractor { src: buf })
    }

    /// Use a string as source.
    pub fn from_string(data: String) -> Extractor {
        Extractor { src: data }
    }

    pub fn source(&self) -> &str {
        &self.src
    }

    /// Iterate over all entries in order of appearance
    pub fn iter(&self) -> EntryScanner<'_> {
        EntryScanner::new(&self.src)
    }

    /// Select the first `limit` entries of the source.
    pub fn extract(&self, limit: usize) -> Extraction<'_> {
        extract(&self.src, limit)
    }
}

impl str::FromStr for Extractor {
    type Err = Infallible;

    /// Use a string as source.
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        Ok(Extractor::from_string(data.to_string()))
    }
}

/// Scan `document` for all entries and keep the first `limit` of them.
///
/// The selected entries are always a prefix of all entries found, in their
/// original order and with their original text. A `limit` of zero selects
/// nothing; a `limit` beyond the number of entries selects all of them.
pub fn extract(document: &str, limit: usize) -> Extraction<'_> {
    let mut selected: Vec<_> = EntryScanner::new(document).collect();
    let total_found = selected.len();
    selected.truncate(limit);
    debug!(
        selected = selected.len(),
        total_found, limit, "scanned document"
    );
    Extraction {
        selected,
        total_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error;
    use std::str::FromStr;

    const THREE: &str = "@book{first,\n  title = {One}\n}\n\n@ARTICLE{second,\n  title = {Two}\n}\n\n@InProceedings{third,\n  title = {Three}\n}\n";

    #[test]
    fn test_empty_document() {
        let extraction = extract("", DEFAULT_LIMIT);
        assert_eq!(extraction.total_found, 0);
        assert!(extraction.selected.is_empty());
        assert_eq!(extraction.to_bib_string(), "");
    }

    #[test]
    fn test_no_entries_is_not_an_error() {
        let extraction = extract("just some notes\n}\n", 10);
        assert_eq!(extraction.total_found, 0);
        assert!(extraction.selected.is_empty());
    }

    #[test]
    fn test_single_entry() -> Result<(), Box<dyn error::Error>> {
        let src = "@ARTICLE{key1,\n title={T}\n}";
        let e = Extractor::from_str(src)?;
        let extraction = e.extract(DEFAULT_LIMIT);
        assert_eq!(extraction.total_found, 1);
        assert_eq!(extraction.selected.len(), 1);
        assert_eq!(extraction.selected[0].text, src);
        Ok(())
    }

    #[test]
    fn test_limit_smaller_than_available() {
        let extraction = extract(THREE, 2);
        assert_eq!(extraction.total_found, 3);
        let kinds: Vec<_> = extraction.selected.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec!["book", "ARTICLE"]);
        assert_eq!(
            extraction.to_bib_string(),
            "@book{first,\n  title = {One}\n}\n\n@ARTICLE{second,\n  title = {Two}\n}"
        );
    }

    #[test]
    fn test_limit_zero() {
        let extraction = extract(THREE, 0);
        assert_eq!(extraction.total_found, 3);
        assert!(extraction.selected.is_empty());
    }

    #[test]
    fn test_limit_above_total_selects_all() {
        let e = Extractor::from_string(THREE.to_string());
        let all: Vec<_> = e.iter().collect();
        for limit in [3, 4, DEFAULT_LIMIT, usize::MAX] {
            let extraction = e.extract(limit);
            assert_eq!(extraction.total_found, 3);
            assert_eq!(extraction.selected, all);
        }
    }

    #[test]
    fn test_selection_is_prefix() {
        let e = Extractor::from_string(THREE.to_string());
        let all: Vec<_> = e.iter().collect();
        for limit in 0..=5 {
            let extraction = e.extract(limit);
            assert_eq!(extraction.selected.len(), limit.min(all.len()));
            assert_eq!(extraction.selected[..], all[..extraction.selected.len()]);
        }
    }

    #[test]
    fn test_extraction_is_repeatable() {
        assert_eq!(extract(THREE, 2), extract(THREE, 2));
    }

    #[test]
    fn test_rejoin_reproduces_entries() {
        let entries = [
            "@book{a,\n  author = {J. R. R. Tolkien},\n  year = {1937}\n}",
            "@misc{b,\n  note = {{nested} braces on one line}\n}",
            "@article{c,\n}",
        ];
        let src = entries.join("\n\n\n% comment\n");
        let extraction = extract(&src, DEFAULT_LIMIT);
        assert_eq!(extraction.total_found, 3);
        assert_eq!(extraction.to_bib_string(), entries.join("\n\n"));
    }
}
