//! Selective percent-decoding of URLs
//!
//! Decoded URLs read better in Markdown source (`https://…/中文` instead of
//! `https://…/%E4%B8%AD%E6%96%87`), but a bare space or `)` would terminate
//! the link target early. So decoding keeps exactly those characters
//! percent-encoded.

use percent_encoding::percent_decode_str;

/// Percent-decode `url`, re-encoding space and both parentheses.
///
/// Decoding is all or nothing: any malformed escape (a `%` not followed by
/// two hex digits, e.g. `%ZZ`) or a sequence that decodes to invalid UTF-8
/// returns the original URL unchanged, even when other escapes in it are
/// valid.
pub fn selectively_decode_url(url: &str) -> String {
    if has_malformed_escape(url) {
        return url.to_string();
    }

    let decoded = match percent_decode_str(url).decode_utf8() {
        Ok(text) => text,
        Err(_) => return url.to_string(),
    };

    let mut encoded = String::with_capacity(decoded.len());
    for ch in decoded.chars() {
        match ch {
            ' ' => encoded.push_str("%20"),
            '(' => encoded.push_str("%28"),
            ')' => encoded.push_str("%29"),
            _ => encoded.push(ch),
        }
    }

    encoded
}

fn has_malformed_escape(url: &str) -> bool {
    let bytes = url.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let valid = idx + 2 < bytes.len()
                && bytes[idx + 1].is_ascii_hexdigit()
                && bytes[idx + 2].is_ascii_hexdigit();
            if !valid {
                return true;
            }
            idx += 3;
        } else {
            idx += 1;
        }
    }
    false
}
