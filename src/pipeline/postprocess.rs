//! Post-processing of extracted text.
//!
//! Backends disagree on line endings: some pass through whatever the PDF's
//! content stream used, some emit `\r\n` on every platform. The output file
//! always uses `\n`.

/// Replace every `\r\n` and every remaining bare `\r` with `\n`.
///
/// `\r\n` is replaced first so a CRLF pair becomes one newline, not two.
pub fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_becomes_single_lf() {
        assert_eq!(normalise_line_endings("a\r\nb\r\n"), "a\nb\n");
    }

    #[test]
    fn bare_cr_becomes_lf() {
        assert_eq!(normalise_line_endings("a\rb\r"), "a\nb\n");
    }

    #[test]
    fn mixed_endings() {
        assert_eq!(
            normalise_line_endings("one\r\ntwo\rthree\nfour\r\r\n"),
            "one\ntwo\nthree\nfour\n\n"
        );
    }

    #[test]
    fn lf_only_is_untouched() {
        let s = "already\nclean\n";
        assert_eq!(normalise_line_endings(s), s);
        assert_eq!(normalise_line_endings(""), "");
    }

    #[test]
    fn lf_cr_is_two_newlines() {
        assert_eq!(normalise_line_endings("a\n\rb"), "a\n\nb");
    }
}
