//! Optional hex-pair decoding pre-pass
//!
//! Replaces runs of whitespace-delimited tokens such as `61 62` with the
//! printable ASCII characters they encode before normalization runs. The stage is disabled by
//! default; with it off, digits are rejected like any other symbol.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Maximal runs of non-whitespace
static TOKEN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN.get_or_init(|| Regex::new(r"\S+").expect("token pattern is valid"))
}

/// Shortest run of consecutive hex-pair tokens that gets decoded
pub const MIN_RUN: usize = 2;

/// Decoder for two-digit hexadecimal byte tokens
#[derive(Clone, Copy, Debug, Default)]
pub struct HexPairDecoder;

impl HexPairDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode a single token if it is exactly two hex digits naming a
    /// printable ASCII byte (`0x20..=0x7E`)
    pub fn decode_token(&self, token: &str) -> Option<char> {
        if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u8::from_str_radix(token, 16)
            .ok()
            .filter(|byte| (0x20..=0x7E).contains(byte))
            .map(char::from)
    }

    /// Decode every run of hex-pair tokens in `text`, leaving everything
    /// else as is
    ///
    /// A run is at least [`MIN_RUN`] consecutive decodable tokens separated
    /// only by whitespace; an isolated pair such as the `66` in
    /// `Route 66` stays as written.
    pub fn decode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let tokens: Vec<_> = token_pattern()
            .find_iter(text)
            .map(|token| (token, self.decode_token(token.as_str())))
            .collect();

        let mut decoded: Option<String> = None;
        let mut last = 0;
        let mut index = 0;

        while index < tokens.len() {
            let run_end = tokens[index..]
                .iter()
                .position(|(_, ch)| ch.is_none())
                .map_or(tokens.len(), |offset| index + offset);

            if run_end - index >= MIN_RUN {
                let out = decoded.get_or_insert_with(|| String::with_capacity(text.len()));
                for (token, ch) in &tokens[index..run_end] {
                    out.push_str(&text[last..token.start()]);
                    out.extend(*ch);
                    last = token.end();
                }
            }
            index = run_end.max(index + 1);
        }

        match decoded {
            Some(mut out) => {
                out.push_str(&text[last..]);
                log::trace!("hex-pair decoding rewrote {:?} to {:?}", text, out);
                Cow::Owned(out)
            }
            None => Cow::Borrowed(text),
        }
    }
}
