//! Reading postings from JSON or from the line-oriented text form.
//!
//! Text form, one posting per line:
//!
//! ```text
//! # comment
//! @world -> @users:alice USD/2 10000
//! users:alice -> fees USD/2 250
//! ```

use std::str::FromStr;

use serde::Deserialize;

use super::types::{Posting, strip_sigil};
use crate::error::{FlowError, Result};

// ─── Format selection ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Text,
}

impl InputFormat {
    /// Guess the format from the first non-blank character.
    pub fn detect(src: &str) -> Self {
        match src.trim_start().chars().next() {
            Some('[') | Some('{') => InputFormat::Json,
            _ => InputFormat::Text,
        }
    }
}

impl FromStr for InputFormat {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "text" | "txt" => Ok(InputFormat::Text),
            other => Err(FlowError::UnknownFormat(other.to_string())),
        }
    }
}

/// Parse postings in the given format, or the detected one when `None`.
pub fn parse(src: &str, format: Option<InputFormat>) -> Result<Vec<Posting>> {
    match format.unwrap_or_else(|| InputFormat::detect(src)) {
        InputFormat::Json => parse_json(src),
        InputFormat::Text => parse_text(src),
    }
}

// ─── JSON ────────────────────────────────────────────────────────────────────

/// Either a bare posting list or a transaction carrying one.
#[derive(Deserialize)]
#[serde(untagged)]
enum PostingsDocument {
    List(Vec<Posting>),
    Transaction { postings: Vec<Posting> },
}

/// Parse a JSON array of postings, or an object with a `postings` array.
pub fn parse_json(src: &str) -> Result<Vec<Posting>> {
    let doc: PostingsDocument = serde_json::from_str(src)?;
    let postings = match doc {
        PostingsDocument::List(p) => p,
        PostingsDocument::Transaction { postings } => postings,
    };
    Ok(postings
        .into_iter()
        .map(|p| Posting {
            amount: p.amount,
            source: strip_sigil(p.source),
            destination: strip_sigil(p.destination),
        })
        .collect())
}

// ─── Text ────────────────────────────────────────────────────────────────────

/// Cursor over a single line of the text form.
pub struct Cursor {
    pub src: Vec<char>,
    pub pos: usize,
}

impl Cursor {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.chars().collect(),
            pos: 0,
        }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self, s: &str) -> bool {
        let chars: Vec<char> = s.chars().collect();
        if self.pos + chars.len() > self.src.len() {
            return false;
        }
        self.src[self.pos..self.pos + chars.len()] == chars[..]
    }

    /// Consume `s` if it matches; returns true if consumed.
    pub fn consume(&mut self, s: &str) -> bool {
        if self.peek(s) {
            self.pos += s.chars().count();
            true
        } else {
            false
        }
    }

    pub fn skip_ws(&mut self) {
        while self.pos < self.src.len() && self.src[self.pos].is_whitespace() {
            self.pos += 1;
        }
    }

    /// Match a run of non-whitespace characters that does not start an arrow.
    pub fn match_account(&mut self) -> Option<String> {
        let start = self.pos;
        while self.pos < self.src.len() && !self.src[self.pos].is_whitespace() {
            if self.peek("->") {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        let raw: String = self.src[start..self.pos].iter().collect();
        let account = strip_sigil(raw);
        if account.is_empty() { None } else { Some(account) }
    }

    /// Everything left on the line, trimmed.
    pub fn rest(&mut self) -> String {
        let rest: String = self.src[self.pos..].iter().collect();
        self.pos = self.src.len();
        rest.trim().to_string()
    }
}

/// Parse the text form. Blank lines and `#` comments are skipped.
pub fn parse_text(src: &str) -> Result<Vec<Posting>> {
    let mut postings = Vec::new();
    for (idx, line) in src.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        postings.push(parse_line(content, idx + 1)?);
    }
    Ok(postings)
}

fn parse_line(line: &str, line_no: usize) -> Result<Posting> {
    let err = |message: &str| FlowError::Parse {
        line: line_no,
        message: message.to_string(),
    };

    let mut c = Cursor::new(line);
    c.skip_ws();
    let source = c.match_account().ok_or_else(|| err("expected source account"))?;
    c.skip_ws();
    if !c.consume("->") {
        return Err(err("expected '->' after source account"));
    }
    c.skip_ws();
    let destination = c
        .match_account()
        .ok_or_else(|| err("expected destination account"))?;
    c.skip_ws();
    let amount = c.rest();
    if amount.is_empty() {
        return Err(err("expected amount after destination account"));
    }
    Ok(Posting {
        amount,
        source,
        destination,
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_postings_parser.rs"]
mod tests;
