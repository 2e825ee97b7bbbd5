//! Localized caption text from `.strings` files.
//!
//! Each locale folder may carry a `title.strings` and/or `keyword.strings`
//! in the Apple strings format:
//!
//! ```text
//! /* Home screen */
//! "01-Home" = "Plan your next trip";
//! "02-Search" = "Find anything, \"fast\"";
//! ```
//!
//! A screenshot takes the value of the first entry (in file order) whose key
//! appears anywhere in its path. Without a match the Framefile's inline
//! `text` is used. Files may be UTF-8 or UTF-16 with a byte-order mark, as
//! exported by Xcode.

use crate::config::CaptionConfig;
use crate::screenshot::Screenshot;
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StringsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path}: not valid UTF-8 or UTF-16 text")]
    Encoding { path: String },
    #[error("{path}:{line}: {message}")]
    Syntax {
        path: String,
        line: usize,
        message: String,
    },
}

/// Which caption a text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionKind {
    Keyword,
    Title,
}

impl CaptionKind {
    pub fn name(self) -> &'static str {
        match self {
            CaptionKind::Keyword => "keyword",
            CaptionKind::Title => "title",
        }
    }

    /// Strings file consulted for this caption.
    pub fn strings_file(self) -> String {
        format!("{}.strings", self.name())
    }
}

impl fmt::Display for CaptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode raw file bytes, honoring a UTF-8 or UTF-16 byte-order mark.
fn decode(bytes: &[u8]) -> Option<String> {
    let utf16 = |rest: &[u8], from: fn([u8; 2]) -> u16| {
        if rest.len() % 2 != 0 {
            return None;
        }
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| from([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).ok()
    };

    match bytes {
        [0xFF, 0xFE, rest @ ..] => utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8(rest.to_vec()).ok(),
        _ => String::from_utf8(bytes.to_vec()).ok(),
    }
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> Parser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
            line: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Skip whitespace and both comment styles.
    fn skip_trivia(&mut self) -> Result<(), String> {
        loop {
            match self.chars.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    self.bump();
                    match self.bump() {
                        Some('/') => {
                            while let Some(c) = self.bump() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => {
                            let mut prev = '\0';
                            loop {
                                match self.bump() {
                                    Some('/') if prev == '*' => break,
                                    Some(c) => prev = c,
                                    None => return Err("unterminated comment".into()),
                                }
                            }
                        }
                        _ => return Err("unexpected '/'".into()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn expect(&mut self, want: char) -> Result<(), String> {
        self.skip_trivia()?;
        match self.bump() {
            Some(c) if c == want => Ok(()),
            Some(c) => Err(format!("expected '{want}', found '{c}'")),
            None => Err(format!("expected '{want}', found end of file")),
        }
    }

    fn quoted(&mut self) -> Result<String, String> {
        self.expect('"')?;
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(c) => out.push(c),
                    None => return Err("unterminated string".into()),
                },
                Some(c) => out.push(c),
                None => return Err("unterminated string".into()),
            }
        }
    }

    fn entries(mut self) -> Result<Vec<(String, String)>, (usize, String)> {
        let mut entries = Vec::new();
        loop {
            self.skip_trivia().map_err(|e| (self.line, e))?;
            if self.chars.peek().is_none() {
                return Ok(entries);
            }
            let entry = (|| {
                let key = self.quoted()?;
                self.expect('=')?;
                let value = self.quoted()?;
                self.expect(';')?;
                Ok::<_, String>((key, value))
            })()
            .map_err(|e| (self.line, e))?;
            entries.push(entry);
        }
    }
}

/// Parse strings-file content into `(key, value)` pairs in file order.
pub fn parse(content: &str) -> Result<Vec<(String, String)>, (usize, String)> {
    Parser::new(content).entries()
}

/// Read and parse a strings file.
pub fn load(path: &Path) -> Result<Vec<(String, String)>, StringsError> {
    let bytes = std::fs::read(path)?;
    let content = decode(&bytes).ok_or_else(|| StringsError::Encoding {
        path: path.display().to_string(),
    })?;
    parse(&content).map_err(|(line, message)| StringsError::Syntax {
        path: path.display().to_string(),
        line,
        message,
    })
}

/// First value whose key appears in `haystack`.
pub fn lookup<'a>(entries: &'a [(String, String)], haystack: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|(key, _)| haystack.contains(key.as_str()))
        .map(|(_, value)| value.as_str())
}

/// Caption text for a screenshot: the matching `.strings` entry, else the
/// caption's inline text.
pub fn fetch_text(
    kind: CaptionKind,
    screenshot: &Screenshot,
    caption: Option<&CaptionConfig>,
) -> Result<Option<String>, StringsError> {
    let strings_path = screenshot.dir().join(kind.strings_file());
    if strings_path.is_file() {
        let entries = load(&strings_path)?;
        if let Some(text) = lookup(&entries, &screenshot.path.to_string_lossy()) {
            return Ok(Some(text.to_string()));
        }
    }

    let inline = caption.and_then(|c| c.text.clone());
    if inline.is_some() {
        tracing::debug!(
            screenshot = %screenshot.path.display(),
            caption = %kind,
            "no .strings entry, using Framefile text"
        );
    }
    Ok(inline)
}
