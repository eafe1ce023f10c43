//! This crate copies the first entries of a `.bib` file into a new file.
//!
//! Large bibliographies exported from reference databases easily hold
//! thousands of entries. For review, a smaller file with the first N
//! entries is often enough. An entry looks like this:
//!
//! ```tex
//! @book{DBLP:books/aw/Knuth73a,
//!     author    = {Donald E. Knuth},
//!     title     = {The Art of Computer Programming, Volume {I:} Fundamental Algorithms,
//!                  2nd Edition},
//!     publisher = {Addison-Wesley},
//!     year      = {1973}
//! }
//! ```
//!
//! Entries are recognized textually: an `@`, the entry type (like `book`),
//! optional whitespace, `{`, and everything up to the first `}` that starts
//! a line. Nothing inside the braces is interpreted, and the selected entries
//! are written exactly as they appear in the source. Since braces are not
//! balanced, field data with a line starting with `}` ends the entry early,
//! and entries whose closing brace is indented are skipped.
//!
//! ```rust
//! use bibhead::extract;
//!
//! let src = "@book{tolkien1937,\n  author = {J. R. R. Tolkien}\n}\n\n@book{lewis1950,\n}\n";
//! let extraction = extract(src, 1);
//! assert_eq!(extraction.total_found, 2);
//! assert_eq!(extraction.to_bib_string(), "@book{tolkien1937,\n  author = {J. R. R. Tolkien}\n}");
//! ```
//!
//! The entire source is kept in memory and scanned at once.

mod config;
mod errors;
mod extractor;
mod scanner;
mod types;

use std::fs;

use tracing::{debug, info};

pub use crate::config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT, INPUT_ENV, LIMIT_ENV, OUTPUT_ENV};
pub use crate::errors::ExtractError;
pub use crate::extractor::{extract, Extractor, DEFAULT_LIMIT};
pub use crate::scanner::EntryScanner;
pub use crate::types::{Entry, Extraction, Summary, ENTRY_SEPARATOR};

/// Read `config.input`, select its first `config.limit` entries and write
/// them to `config.output`, replacing any previous content.
///
/// The input is read completely before the output is touched, so a missing
/// or unreadable input never creates or truncates the output file.
pub fn run(config: &Config) -> Result<Summary, ExtractError> {
    let extractor = Extractor::from_file(&config.input)
        .map_err(|source| ExtractError::reading(config.input.clone(), source))?;
    debug!(
        input = %config.input.display(),
        bytes = extractor.source().len(),
        "read input"
    );

    let extraction = extractor.extract(config.limit);
    fs::write(&config.output, extraction.to_bib_string()).map_err(|source| {
        ExtractError::WriteOutput {
            path: config.output.clone(),
            source,
        }
    })?;
    info!(
        output = %config.output.display(),
        selected = extraction.selected.len(),
        total_found = extraction.total_found,
        "wrote entries"
    );

    Ok(Summary {
        selected: extraction.selected.len(),
        total_found: extraction.total_found,
        output: config.output.clone(),
    })
}
