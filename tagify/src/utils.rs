// src/utils.rs
use std::borrow::Cow;
use std::cmp::Ordering;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Compares two strings the way a human reads them: digit runs by value,
/// everything else case-insensitively, so `tag2 < tag10` and `A == a`.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = NaturalTokens::new(a);
    let mut right = NaturalTokens::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = match (l, r) {
                    (Token::Number(l), Token::Number(r)) => compare_digits(l, r),
                    (Token::Text(l), Token::Text(r)) => compare_folded(l, r),
                    // Both sides alternate from a leading text token.
                    (Token::Text(_), Token::Number(_)) => Ordering::Less,
                    (Token::Number(_), Token::Text(_)) => Ordering::Greater,
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Number(&'a str),
}

/// Alternating text/number runs, always starting with a (possibly empty)
/// text run and ending with one.
struct NaturalTokens<'a> {
    rest: &'a str,
    expect_text: bool,
    done: bool,
}

impl<'a> NaturalTokens<'a> {
    const fn new(s: &'a str) -> Self {
        Self {
            rest: s,
            expect_text: true,
            done: false,
        }
    }
}

impl<'a> Iterator for NaturalTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.expect_text {
            let end = self
                .rest
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(self.rest.len());
            let (text, rest) = self.rest.split_at(end);
            self.rest = rest;
            self.expect_text = false;
            if rest.is_empty() {
                self.done = true;
            }
            Some(Token::Text(text))
        } else {
            let end = self
                .rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(self.rest.len());
            let (digits, rest) = self.rest.split_at(end);
            self.rest = rest;
            self.expect_text = true;
            Some(Token::Number(digits))
        }
    }
}

/// Compares two ASCII digit runs by numeric value, whatever their length.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Decodes file contents as UTF-8, replacing every invalid sequence with
/// U+FFFD instead of failing.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Joins relative paths onto the current directory and drops `.` components.
/// Symlinks and `..` are left alone.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    Ok(joined.components().collect())
}

/// `<path relative to root>:<line>`. Paths outside `root` keep their full form.
#[must_use]
pub fn relative_label(path: &Path, root: &Path, line: usize) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    format!("{}:{line}", relative.display())
}
