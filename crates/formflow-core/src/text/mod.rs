//! Free-text reference tokens: scanning, interpolation, and the durable
//! codec.
//!
//! One scanner finds token boundaries for every consumer. Interpolation,
//! encoding, and any live highlighter walk the same spans, so they can
//! never disagree about where a reference ends.

pub mod codec;
pub mod interpolate;

// re-exports
pub use codec::{decode_references, encode_references};
pub use interpolate::{display_value, interpolate};

use crate::eval::{FieldCatalog, FieldRef};

///
/// ReferenceSpan
///
/// One resolved `@name` token: the byte range of the whole token (marker
/// included) and the canonical field it binds to. Field names are ASCII,
/// so the spelled segment and the canonical name are the same length.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReferenceSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub field: FieldRef<'a>,
}

/// Every resolved reference token in `text`, left to right.
///
/// At each `@`, the scanner takes the candidate region up to the next hard
/// delimiter and binds the longest known field name that prefixes it,
/// case-insensitively. An `@` that resolves to nothing is plain text; the
/// scan resumes right after it.
#[must_use]
pub fn reference_spans<'c, C: FieldCatalog>(text: &str, catalog: &'c C) -> Vec<ReferenceSpan<'c>> {
    let mut spans = Vec::new();
    let mut at = 0;

    while let Some(offset) = text[at..].find('@') {
        let marker = at + offset;
        let after = marker + 1;
        let region = candidate_region(text, after);

        if let Some(field) = longest_name_match(catalog, region) {
            let end = after + field.name.len();
            spans.push(ReferenceSpan {
                start: marker,
                end,
                field,
            });
            at = end;
        } else {
            at = after;
        }
    }

    spans
}

/// Candidate region for a token starting at byte `start` (just past the
/// `@`): everything up to a newline, another `@`, a double space, or the
/// end of text. Delimiters are all ASCII, so byte scanning stays on char
/// boundaries.
fn candidate_region(text: &str, start: usize) -> &str {
    let bytes = text.as_bytes();
    let mut end = start;

    while end < bytes.len() {
        match bytes[end] {
            b'\n' | b'\r' | b'@' => break,
            b' ' if bytes.get(end + 1) == Some(&b' ') => break,
            _ => end += 1,
        }
    }

    &text[start..end]
}

/// Longest known field name that is a case-insensitive prefix of `region`.
fn longest_name_match<'c, C: FieldCatalog>(catalog: &'c C, region: &str) -> Option<FieldRef<'c>> {
    let mut best: Option<&str> = None;

    for name in catalog.field_names() {
        let len = name.len();
        if len == 0 || len > region.len() || !region.is_char_boundary(len) {
            continue;
        }
        if region[..len].eq_ignore_ascii_case(name) && best.is_none_or(|held| len > held.len()) {
            best = Some(name);
        }
    }

    best.and_then(|name| catalog.resolve_name(name))
}
