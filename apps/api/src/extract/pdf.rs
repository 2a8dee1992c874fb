//! Best-effort PDF text recovery without a PDF parser.
//!
//! Text inside `stream` … `endstream` blocks is often stored as literal
//! strings, so printable bytes from those regions are collected and filtered
//! down to plausible words. No xref parsing, no FlateDecode, no CMaps:
//! compressed or non-Latin PDFs come back as the low-confidence fallback.

/// Returned when too few plausible words were recovered to trust the output.
pub const LOW_CONFIDENCE_FALLBACK: &str =
    "Please paste your resume content in the text area below.";

const STREAM_START: &[u8] = b"stream";
const STREAM_END: &[u8] = b"endstream";

/// Extraction is trusted only when strictly more tokens than this survive.
const MIN_TOKEN_THRESHOLD: usize = 5;

/// Tokens recovered from a byte sequence, before the confidence decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfExtraction {
    pub tokens: Vec<String>,
}

impl PdfExtraction {
    pub fn is_confident(&self) -> bool {
        self.tokens.len() > MIN_TOKEN_THRESHOLD
    }

    /// Space-joined tokens, or `LOW_CONFIDENCE_FALLBACK` when not confident.
    pub fn into_text(self) -> String {
        if self.is_confident() {
            self.tokens.join(" ")
        } else {
            LOW_CONFIDENCE_FALLBACK.to_string()
        }
    }
}

/// Recovers plain-text tokens from `bytes`. Never fails; `into_text` turns a
/// weak result into `LOW_CONFIDENCE_FALLBACK`.
pub fn analyze_pdf(bytes: &[u8]) -> PdfExtraction {
    let raw = collect_stream_text(bytes);
    PdfExtraction {
        tokens: plausible_words(&raw),
    }
}

/// Linear scan that keeps printable ASCII found between stream markers.
///
/// `endstream` is matched before `stream` because it ends with `stream`;
/// checking the shorter token first would re-open the block it closes.
fn collect_stream_text(bytes: &[u8]) -> String {
    let mut text = String::new();
    let mut in_stream = false;
    let mut i = 0;

    while i < bytes.len() {
        let rest = &bytes[i..];

        if rest.starts_with(STREAM_END) {
            in_stream = false;
            i += STREAM_END.len();
            continue;
        }

        if rest.starts_with(STREAM_START) {
            in_stream = true;
            i += STREAM_START.len();
            continue;
        }

        if in_stream {
            match bytes[i] {
                // String-literal delimiters separate text runs; they never reach the output.
                b'(' | b')' => text.push(' '),
                b'\r' | b'\n' => text.push(' '),
                b @ 0x20..=0x7E => text.push(b as char),
                _ => {}
            }
        }

        i += 1;
    }

    text
}

/// Scrubs punctuation and keeps tokens that look like words.
fn plausible_words(raw: &str) -> Vec<String> {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '+' | '-') || c.is_whitespace()
            {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 1 && word.chars().any(|c| c.is_ascii_alphabetic()))
        .map(String::from)
        .collect()
}
