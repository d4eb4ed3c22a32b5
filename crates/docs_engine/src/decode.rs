use encoding_rs::UTF_8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub had_errors: bool,
}

/// Decode raw bytes as UTF-8 whatever the server declared.
///
/// A UTF-8 BOM is stripped and malformed sequences become U+FFFD, so the
/// resulting text is always parseable.
pub fn decode_utf8(bytes: &[u8]) -> DecodedHtml {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    DecodedHtml {
        html: text.into_owned(),
        had_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::decode_utf8;

    #[test]
    fn strips_utf8_bom() {
        let decoded = decode_utf8(b"\xEF\xBB\xBFhello");
        assert_eq!(decoded.html, "hello");
        assert!(!decoded.had_errors);
    }

    #[test]
    fn latin1_bytes_are_replaced_not_reinterpreted() {
        let decoded = decode_utf8(b"caf\xe9");
        assert_eq!(decoded.html, "caf\u{FFFD}");
        assert!(decoded.had_errors);
    }

    #[test]
    fn multibyte_text_survives() {
        let decoded = decode_utf8("What’s New ¶".as_bytes());
        assert_eq!(decoded.html, "What’s New ¶");
    }
}
