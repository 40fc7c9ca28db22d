//! SVG escaping for `data:image/svg+xml,` URIs.
//!
//! The encoded form keeps the markup readable (no base64) while making it
//! safe to embed as a URI: attribute quotes are switched to single quotes and
//! the characters that are significant in URIs or CSS are percent-escaped.
//!
//! Escape table, applied in this order over the whole string:
//! - `"` -> `'`
//! - `%` -> `%25` (first, so later escapes are not re-escaped)
//! - `#` -> `%23`
//! - `{` -> `%7B`
//! - `}` -> `%7D`
//! - `<` -> `%3C`
//! - `>` -> `%3E`
//!
//! Finally every run of whitespace collapses to one space.

/// Namespace declared on the root element when the markup lacks one.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const ESCAPES: [(char, &str); 7] = [
    ('"', "'"),
    ('%', "%25"),
    ('#', "%23"),
    ('{', "%7B"),
    ('}', "%7D"),
    ('<', "%3C"),
    ('>', "%3E"),
];

/// Encode SVG markup for embedding after `data:image/svg+xml,`.
///
/// Total and deterministic; malformed markup is passed through best-effort.
pub fn encode_svg(svg: &str) -> String {
    let mut out = ensure_svg_namespace(svg);
    for (from, to) in ESCAPES {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    collapse_whitespace(&out)
}

/// Insert `xmlns="http://www.w3.org/2000/svg"` right after the first `<svg`
/// token, unless the markup already mentions `xmlns` anywhere.
pub fn ensure_svg_namespace(svg: &str) -> String {
    if svg.contains("xmlns") {
        return svg.to_string();
    }
    svg.replacen("<svg", &format!("<svg xmlns=\"{SVG_NAMESPACE}\""), 1)
}

/// Collapse each run of whitespace characters into a single ASCII space.
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn escapes_each_character_per_table() {
        let svg = r##"<svg xmlns="x"><text fill="#fff">100% {a}</text></svg>"##;
        let enc = encode_svg(svg);
        assert_eq!(
            enc,
            "%3Csvg xmlns='x'%3E%3Ctext fill='%23fff'%3E100%25 %7Ba%7D%3C/text%3E%3C/svg%3E"
        );
    }

    #[test]
    fn percent_is_escaped_before_other_sequences() {
        assert_eq!(encode_svg("#"), "%23");
        assert_eq!(encode_svg("%23"), "%2523");
    }

    #[test]
    fn injects_namespace_once_after_svg_token() {
        let injected = ensure_svg_namespace("<svg width=\"1\"><svg></svg></svg>");
        assert_eq!(
            injected,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1\"><svg></svg></svg>"
        );
        assert_eq!(injected.matches("xmlns").count(), 1);

        let enc = encode_svg("<svg></svg>");
        assert!(enc.starts_with("%3Csvg xmlns='http://www.w3.org/2000/svg'%3E"));
    }

    #[test]
    fn existing_namespace_is_not_duplicated() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"></svg>"#;
        assert_eq!(encode_svg(svg).matches("xmlns").count(), 1);
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(collapse_whitespace("a \n\t  b\r\nc"), "a b c");
        assert_eq!(encode_svg("<g>\n    <g/>\n</g>"), "%3Cg%3E %3Cg/%3E %3C/g%3E");
    }

    #[test]
    fn non_svg_input_passes_through() {
        assert_eq!(encode_svg("plain"), "plain");
    }

    proptest! {
        #[test]
        fn output_has_no_raw_reserved_characters(s in "\\PC{0,64}") {
            let enc = encode_svg(&s);
            for c in ['"', '#', '{', '}', '<', '>'] {
                prop_assert!(!enc.contains(c));
            }
            prop_assert!(!enc.contains("  "));
            prop_assert!(enc.chars().all(|c| c == ' ' || !c.is_whitespace()));
        }
    }
}
