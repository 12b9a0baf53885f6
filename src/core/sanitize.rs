// src/core/sanitize.rs

/// Marker the ranking site appends to every institute name cell
/// ("More Details" link text plus the hidden detail table behind it).
pub const ANNOTATION_MARKER: &str = "More Details";

/// Collapse whitespace runs (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Cut everything from the first `ANNOTATION_MARKER` onwards, then trim.
///
/// Case-sensitive and position-independent: a name that legitimately contains the
/// marker is truncated at it too. Names without the marker only get trimmed.
pub fn strip_annotation(name: &str) -> String {
    let cut = match name.find(ANNOTATION_MARKER) {
        Some(i) => &name[..i],
        None => name,
    };
    cut.trim().to_string()
}

/// Filesystem-friendly stem: lowercase ASCII alphanumerics, runs of anything else → `_`.
pub fn file_stem(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last_us = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() {
        s!("category")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_is_stripped() {
        assert_eq!(strip_annotation("IIT Madras More Details..."), "IIT Madras");
        assert_eq!(strip_annotation("IIT MadrasMore Details Close"), "IIT Madras");
    }

    #[test]
    fn clean_and_empty_names_pass_through() {
        assert_eq!(strip_annotation("  Jamia Millia Islamia "), "Jamia Millia Islamia");
        assert_eq!(strip_annotation(""), "");
        assert_eq!(strip_annotation("More Details"), "");
    }

    #[test]
    fn marker_is_case_sensitive() {
        assert_eq!(strip_annotation("Institute of more details"), "Institute of more details");
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  Indian\u{a0}Institute \n of\tScience "), "Indian Institute of Science");
    }

    #[test]
    fn stems_are_lowercase_snake() {
        assert_eq!(file_stem("State Public University"), "state_public_university");
        assert_eq!(file_stem("Overall"), "overall");
        assert_eq!(file_stem("--"), "category");
    }
}
