//! Visible-text extraction from HTML
//!
//! The extraction patterns run against what a reader of the page would see,
//! so markup, attributes, scripts, and styles must not leak into the search
//! text. A full HTML parser is more than this needs: tags are stripped with
//! tolerant, case-insensitive scanning, the common entities are decoded, and
//! whitespace is collapsed.

/// Elements whose raw text content is never visible
const RAW_TEXT_ELEMENTS: &[(&str, &str)] = &[("<script", "</script"), ("<style", "</style")];

/// Reduce an HTML document to its visible text content.
pub fn visible_text(html: &str) -> String {
    let mut stripped = strip_comments(html);
    for &(open, close) in RAW_TEXT_ELEMENTS {
        stripped = strip_raw_text_element(&stripped, open, close);
    }
    let text = strip_tags(&stripped);
    let decoded = decode_entities(&text);
    collapse_whitespace(&decoded)
}

/// Case-insensitive byte search. Tag names are ASCII, so byte offsets from a
/// match are valid char boundaries in the original string.
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() || from > h.len() - n.len() {
        return None;
    }
    (from..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

fn strip_comments(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(start) = find_ci(html, "<!--", pos) {
        out.push_str(&html[pos..start]);
        out.push(' ');
        match find_ci(html, "-->", start + 4) {
            Some(end) => pos = end + 3,
            // unterminated comment swallows the rest of the document
            None => pos = html.len(),
        }
    }
    out.push_str(&html[pos..]);
    out
}

fn strip_raw_text_element(html: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(start) = find_ci(html, open, pos) {
        // require a real tag boundary so "<scripted>" is left alone
        let at_boundary = match html.as_bytes().get(start + open.len()) {
            Some(&c) => c == b'>' || c == b'/' || c.is_ascii_whitespace(),
            None => true,
        };
        if !at_boundary {
            out.push_str(&html[pos..start + open.len()]);
            pos = start + open.len();
            continue;
        }
        out.push_str(&html[pos..start]);
        out.push(' ');
        match find_ci(html, close, start + open.len()) {
            Some(end) => {
                pos = match html[end..].find('>') {
                    Some(gt) => end + gt + 1,
                    None => html.len(),
                };
            }
            None => pos = html.len(),
        }
    }
    out.push_str(&html[pos..]);
    out
}

/// Replace every tag with a space so adjacent text nodes do not fuse into
/// spurious tokens.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' if !in_tag => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';').filter(|&semi| semi <= 10) {
            Some(semi) => {
                let entity = &tail[1..semi];
                match decode_entity(entity) {
                    Some(decoded) => out.push(decoded),
                    None => out.push_str(&tail[..=semi]),
                }
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse().ok()?
            } else {
                return None;
            };
            char::from_u32(code)
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
