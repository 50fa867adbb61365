//! Root `<svg>` tag inspection and attribute rewriting.
//!
//! The rendering engine hands back a full SVG document as a string. Only the
//! root element's attributes matter here (style hints, intrinsic size, view
//! box), so this is a small tag scanner rather than an XML parser.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use std::ops::Range;

/// Byte range of the root `<svg ...>` start tag, `<` through `>` inclusive.
#[must_use]
pub fn root_svg_tag(markup: &str) -> Option<Range<usize>> {
    let bytes = markup.as_bytes();
    let mut search_from = 0;
    while let Some(found) = markup[search_from..].find("<svg") {
        let start = search_from + found;
        let after = start + "<svg".len();
        match bytes.get(after) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {
                let end = tag_end(markup, after)?;
                return Some(start..end + 1);
            }
            _ => search_from = after,
        }
    }
    None
}

/// Index of the `>` closing a tag whose attributes start at `from`,
/// skipping over quoted attribute values.
fn tag_end(markup: &str, from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (offset, b) in markup.as_bytes()[from..].iter().enumerate() {
        match (quote, *b) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(*b),
            (None, b'>') => return Some(from + offset),
            (None, _) => {}
        }
    }
    None
}

/// Value of attribute `name` on a start tag, without quotes.
#[must_use]
pub fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    attribute_span(tag, name).map(|span| &tag[span.value])
}

struct AttributeSpan {
    /// Whole `name="value"` text including the leading whitespace.
    whole: Range<usize>,
    value: Range<usize>,
}

fn attribute_span(tag: &str, name: &str) -> Option<AttributeSpan> {
    let bytes = tag.as_bytes();
    let mut i = 0;
    while let Some(found) = tag[i..].find(name) {
        let start = i + found;
        let preceded_by_space = start > 0 && bytes[start - 1].is_ascii_whitespace();
        let mut cursor = start + name.len();
        while bytes.get(cursor).is_some_and(u8::is_ascii_whitespace) {
            cursor += 1;
        }
        if preceded_by_space && bytes.get(cursor) == Some(&b'=') {
            cursor += 1;
            while bytes.get(cursor).is_some_and(u8::is_ascii_whitespace) {
                cursor += 1;
            }
            let quote = *bytes.get(cursor)?;
            if quote == b'"' || quote == b'\'' {
                let value_start = cursor + 1;
                let value_len = tag[value_start..].find(char::from(quote))?;
                let value_end = value_start + value_len;
                return Some(AttributeSpan { whole: start - 1..value_end + 1, value: value_start..value_end });
            }
        }
        i = start + name.len();
    }
    None
}

/// Insertion point for new attributes: before `>` or a self-closing `/>`.
fn attribute_insert_at(tag: &str) -> usize {
    let trimmed = tag.trim_end_matches('>');
    let trimmed = trimmed.trim_end();
    if trimmed.ends_with('/') {
        trimmed.len() - 1
    } else {
        trimmed.len()
    }
}

/// Rewrite the root tag with `edit`, returning the full document.
fn rewrite_root(markup: &str, edit: impl FnOnce(&str) -> String) -> Option<String> {
    let range = root_svg_tag(markup)?;
    let tag = &markup[range.clone()];
    let mut out = String::with_capacity(markup.len() + 64);
    out.push_str(&markup[..range.start]);
    out.push_str(&edit(tag));
    out.push_str(&markup[range.end..]);
    Some(out)
}

/// Set `name="value"` on a start tag, replacing any existing value.
fn set_attribute(tag: &str, name: &str, value: &str) -> String {
    if let Some(span) = attribute_span(tag, name) {
        format!("{} {name}=\"{value}\"{}", &tag[..span.whole.start], &tag[span.whole.end..])
    } else {
        let at = attribute_insert_at(tag);
        format!("{} {name}=\"{value}\"{}", &tag[..at], &tag[at..])
    }
}

/// Append CSS `declarations` to the root element's `style` attribute,
/// creating it when absent. Declarations already present are not repeated.
#[must_use]
pub fn append_root_style(markup: &str, declarations: &str) -> String {
    rewrite_root(markup, |tag| match attribute(tag, "style") {
        Some(existing) if existing.contains(declarations.trim()) => tag.to_owned(),
        Some(existing) => {
            let existing = existing.trim().trim_end_matches(';');
            let merged =
                if existing.is_empty() { declarations.to_owned() } else { format!("{existing}; {declarations}") };
            set_attribute(tag, "style", &merged)
        }
        None => set_attribute(tag, "style", declarations),
    })
    .unwrap_or_else(|| markup.to_owned())
}

/// A parsed `viewBox` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// The root element's `viewBox`, if present and well formed.
#[must_use]
pub fn root_view_box(markup: &str) -> Option<ViewBox> {
    let range = root_svg_tag(markup)?;
    let raw = attribute(&markup[range], "viewBox")?;
    let Ok(nums) = raw
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse::<f64>)
        .collect::<Result<Vec<f64>, _>>()
    else {
        return None;
    };
    match nums.as_slice() {
        [min_x, min_y, width, height] => Some(ViewBox { min_x: *min_x, min_y: *min_y, width: *width, height: *height }),
        _ => None,
    }
}

/// Whether a length attribute is an absolute size (`640`, `640px`) rather
/// than a relative one (`100%`, `auto`).
fn is_absolute_length(value: &str) -> bool {
    let number = value.trim().trim_end_matches("px");
    number.parse::<f64>().is_ok_and(|n| n.is_finite() && n > 0.0)
}

/// Give the root element absolute `width` and `height` so an image decoder
/// sizes it predictably. Existing absolute sizes are left alone; missing or
/// relative ones are replaced.
#[must_use]
pub fn ensure_root_dimensions(markup: &str, width: f64, height: f64) -> String {
    rewrite_root(markup, |tag| {
        let mut tag = tag.to_owned();
        if !attribute(&tag, "width").is_some_and(is_absolute_length) {
            tag = set_attribute(&tag, "width", &format_length(width));
        }
        if !attribute(&tag, "height").is_some_and(is_absolute_length) {
            tag = set_attribute(&tag, "height", &format_length(height));
        }
        tag
    })
    .unwrap_or_else(|| markup.to_owned())
}

/// Format a pixel length without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_length(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.3}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
