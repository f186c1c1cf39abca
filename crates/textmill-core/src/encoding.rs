//! Byte-to-text normalization
//!
//! Decodes raw document bytes before any parsing happens. A declared
//! encoding is honored strictly: bytes that are not valid under it fail the
//! call with the offending byte position. Without a declaration the
//! byte-order mark is sniffed and decoding degrades to permissive UTF-8.

use encoding_rs::{DecoderResult, Encoding, UTF_8};

use crate::error::{Error, Result};

/// Decode raw bytes to text
///
/// Pure function of `(bytes, declared)`; no side effects.
pub fn decode_text(bytes: &[u8], declared: Option<&str>) -> Result<String> {
    match declared {
        Some(label) => {
            let encoding = Encoding::for_label(label.as_bytes())
                .ok_or_else(|| Error::invalid_input(format!("unknown encoding label '{label}'")))?;
            decode_strict(bytes, encoding)
        }
        None => {
            // BOM sniffing is built into the permissive decode; failures
            // degrade to replacement characters instead of raising.
            let (text, encoding, had_errors) = UTF_8.decode(bytes);
            if had_errors {
                tracing::debug!(encoding = encoding.name(), "permissive decode replaced malformed bytes");
            }
            Ok(text.into_owned())
        }
    }
}

/// Strict decode under one encoding; a BOM matching that encoding is
/// stripped but never switches the encoding
fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let mut decoder = encoding.new_decoder_with_bom_removal();
    let mut out = String::new();
    let mut consumed = 0usize;

    loop {
        let needed = decoder
            .max_utf8_buffer_length_without_replacement(bytes.len() - consumed)
            .unwrap_or(8192);
        out.reserve(needed);

        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[consumed..], &mut out, true);
        consumed += read;

        match result {
            DecoderResult::InputEmpty => return Ok(out),
            DecoderResult::Malformed(bad, extra) => {
                let offset = consumed - extra as usize - bad as usize;
                return Err(Error::decode(encoding.name(), offset));
            }
            DecoderResult::OutputFull => continue,
        }
    }
}
