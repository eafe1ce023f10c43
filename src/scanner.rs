use std::fmt;
use std::str;

use tracing::trace;

use crate::types::Entry;

/// The scanner only knows where entries begin and end. An entry like
///
/// ```tex
/// @Book{works:4,
///   author     = {Shakespeare, William},
///   title      = {Sonnets},
/// }
/// ```
///
/// starts at `@`, continues with the entry type (`Book`), optional whitespace
/// and `{`, and ends with the first `}` found at the start of a line.
/// Lines end with `\n`, `\r\n` or a lone `\r`; the line endings are kept
/// as they are in the entry text.
/// Everything in between is opaque. An `@` inside this span abandons the
/// current candidate and starts a new one.
///
/// Braces inside field data are not balanced. A field whose data has a line
/// starting with `}` terminates the entry at that line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScanningState {
    Default,
    ReadingType,
    WaitForOpen,
    ReadingBody,
    LineStart,
}

impl fmt::Display for ScanningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Default => "waiting for next entry",
                Self::ReadingType => "reading entry type",
                Self::WaitForOpen => "expecting '{' for entry data",
                Self::ReadingBody => "reading entry data",
                Self::LineStart => "expecting '}' or more entry data at line start",
            }
        )
    }
}

/// Letters, digits and `_`. Combining marks without the alphabetic
/// property do not count.
fn is_word_char(chr: char) -> bool {
    chr.is_alphanumeric() || chr == '_'
}

/// Unicode whitespace plus the ASCII separators U+001C to U+001F
fn is_space_char(chr: char) -> bool {
    chr.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&chr)
}

fn is_line_break(chr: char) -> bool {
    chr == '\n' || chr == '\r'
}

/// Iterator yielding the entries of a borrowed document in order of appearance
pub struct EntryScanner<'s> {
    src: &'s str,
    chars: str::CharIndices<'s>,
    state: ScanningState,
    start: usize,    // byte offset of the '@' opening the current candidate
    kind_end: usize, // byte offset right after the last char of the entry type
    lineno: usize,
    entry_lineno: usize,
    after_cr: bool,
}

impl<'s> EntryScanner<'s> {
    pub fn new(src: &'s str) -> EntryScanner<'s> {
        EntryScanner {
            src,
            chars: src.char_indices(),
            state: ScanningState::Default,
            start: 0,
            kind_end: 0,
            lineno: 0,
            entry_lineno: 0,
            after_cr: false,
        }
    }

    fn begin(&mut self, pos: usize) {
        self.start = pos;
        self.kind_end = pos + '@'.len_utf8();
        self.entry_lineno = self.lineno;
        self.state = ScanningState::ReadingType;
    }

    /// Drop the current candidate. An '@' immediately opens the next one.
    fn abandon(&mut self, pos: usize, chr: char) {
        trace!(
            line = self.entry_lineno + 1,
            state = %self.state,
            "dropping candidate entry at unexpected {:?}",
            chr
        );
        if chr == '@' {
            self.begin(pos);
        } else {
            self.state = ScanningState::Default;
        }
    }
}

impl<'s> Iterator for EntryScanner<'s> {
    type Item = Entry<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((pos, chr)) = self.chars.next() {
            let mut found = None;

            match self.state {
                // expecting '@'
                ScanningState::Default => {
                    if chr == '@' {
                        self.begin(pos);
                    }
                }
                // expecting entry type, e.g. “article”
                ScanningState::ReadingType => {
                    let has_kind = self.kind_end > self.start + '@'.len_utf8();
                    if is_word_char(chr) {
                        self.kind_end = pos + chr.len_utf8();
                    } else if has_kind && is_space_char(chr) {
                        self.state = ScanningState::WaitForOpen;
                    } else if has_kind && chr == '{' {
                        self.state = ScanningState::ReadingBody;
                    } else {
                        self.abandon(pos, chr);
                    }
                }
                // expecting “{”
                ScanningState::WaitForOpen => {
                    if chr == '{' {
                        self.state = ScanningState::ReadingBody;
                    } else if !is_space_char(chr) {
                        self.abandon(pos, chr);
                    }
                }
                ScanningState::ReadingBody => {
                    if is_line_break(chr) {
                        self.state = ScanningState::LineStart;
                    } else if chr == '@' {
                        self.abandon(pos, chr);
                    }
                }
                ScanningState::LineStart => {
                    if chr == '}' {
                        let src = self.src;
                        let end = pos + chr.len_utf8();
                        found = Some(Entry {
                            kind: &src[self.start + '@'.len_utf8()..self.kind_end],
                            text: &src[self.start..end],
                            lineno: self.entry_lineno,
                        });
                        self.state = ScanningState::Default;
                    } else if chr == '@' {
                        self.abandon(pos, chr);
                    } else if !is_line_break(chr) {
                        self.state = ScanningState::ReadingBody;
                    }
                }
            }

            // “\r\n” counts once
            if chr == '\r' || (chr == '\n' && !self.after_cr) {
                self.lineno += 1;
            }
            self.after_cr = chr == '\r';
            if found.is_some() {
                return found;
            }
        }

        if self.state != ScanningState::Default {
            trace!(
                line = self.entry_lineno + 1,
                state = %self.state,
                "dropping unterminated entry at end of input"
            );
            self.state = ScanningState::Default;
        }
        None
    }
}
