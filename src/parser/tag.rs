//! Extraction of tag names, attributes and inline text from a single chunk

use indexmap::IndexMap;

const COMMENT_OPEN: &str = "!--";
const CDATA_OPEN: &str = "![CDATA";

/// Opening tag pulled out of a chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    /// Trimmed text between `>` and the next `<`, if any
    pub text: Option<String>,
    /// Tag ends in `/>`
    pub self_closing: bool,
}

pub fn is_comment(chunk: &str) -> bool {
    chunk.starts_with(COMMENT_OPEN)
}

pub fn is_cdata(chunk: &str) -> bool {
    chunk.starts_with(CDATA_OPEN)
}

pub fn is_closing(chunk: &str) -> bool {
    chunk.starts_with('/')
}

/// `?xml ...` and `!DOCTYPE ...` style chunks
pub fn is_declaration(chunk: &str) -> bool {
    chunk.starts_with(['?', '!'])
}

/// Payload of `!-- data -->`, markers and surrounding spaces stripped.
/// Anything after the first `-->` is dropped.
pub fn comment_body(chunk: &str) -> &str {
    let body = chunk.strip_prefix(COMMENT_OPEN).unwrap_or(chunk);
    let body = match body.split_once("-->") {
        Some((data, _)) => data,
        None => {
            let body = body.trim_end();
            body.strip_suffix("--").unwrap_or(body)
        }
    };
    body.trim()
}

/// Payload of `![CDATA[data]]>`, kept verbatim
pub fn cdata_body(chunk: &str) -> &str {
    chunk.split_once("CDATA[").map_or("", |(_, rest)| {
        rest.split_once("]]")
            .map_or_else(|| rest.trim_end(), |(data, _)| data)
    })
}

pub fn parse_tag(chunk: &str) -> Tag {
    let end = tag_end(chunk);
    let head = end.and_then(|end| chunk.get(..end)).unwrap_or(chunk);

    let name = tag_name(head);
    let attributes = head
        .get(name.len()..)
        .map(parse_attributes)
        .unwrap_or_default();

    let text = end
        .and_then(|end| chunk.get(end + 1..))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    Tag {
        name: name.to_string(),
        attributes,
        text,
        self_closing: end.is_some() && head.trim_end().ends_with('/'),
    }
}

/// Leading run of name characters. A `?` only counts in first position so
/// that `?pi?>` yields `?pi`.
fn tag_name(head: &str) -> &str {
    let len = head
        .char_indices()
        .find(|&(i, c)| {
            c.is_whitespace() || matches!(c, '>' | '/' | '"') || (c == '?' && i > 0)
        })
        .map_or(head.len(), |(i, _)| i);
    head.get(..len).unwrap_or(head)
}

/// Position of the first `>` outside double quotes
fn tag_end(chunk: &str) -> Option<usize> {
    let mut quoted = false;
    chunk.char_indices().find_map(|(i, c)| match c {
        '"' => {
            quoted = !quoted;
            None
        }
        '>' if !quoted => Some(i),
        _ => None,
    })
}

fn parse_attributes(source: &str) -> IndexMap<String, String> {
    split_tokens(source)
        .into_iter()
        .filter_map(parse_attribute)
        .collect()
}

/// `key="value"`; anything else is skipped
fn parse_attribute(token: &str) -> Option<(String, String)> {
    let (key, rest) = token.split_once('=')?;
    let key = key.trim();
    if key.is_empty() || key.contains('"') {
        return None;
    }
    let (_, quoted) = rest.split_once('"')?;
    let (value, _) = quoted.split_once('"')?;
    Some((key.to_string(), value.to_string()))
}

/// Whitespace-separated tokens; whitespace inside double quotes does not split
fn split_tokens(source: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;
    let mut quoted = false;

    for (i, c) in source.char_indices() {
        if c == '"' {
            quoted = !quoted;
        }
        if c.is_whitespace() && !quoted {
            if let Some(s) = start.take() {
                tokens.extend(source.get(s..i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.extend(source.get(s..));
    }
    tokens
}
