//! Text ciphers used by the API.
//!
//! None of these are cryptographic; they are fixed obfuscations the
//! server expects bit-for-bit:
//!
//! - `gjp`: password XOR `37526`, URL-safe base64 (padded).
//! - message bodies: URL-safe base64, then XOR `14251`.
//! - subjects and level descriptions: plain URL-safe base64.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::CipherError;
use crate::wire_types::{GJP_XOR_KEY, MESSAGE_XOR_KEY};

/// URL-safe decoder that accepts both padded and unpadded input.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// XOR `data` with `key`, repeating the key as needed.
pub fn xor_cycle(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(b, k)| b ^ k)
        .collect()
}

/// Derive the `gjp` authentication token from an account password.
pub fn gjp(password: &str) -> String {
    URL_SAFE.encode(xor_cycle(password.as_bytes(), GJP_XOR_KEY))
}

/// Decode a URL-safe base64 text field.
pub fn decode_base64_text(encoded: &str) -> Result<String, CipherError> {
    let bytes = URL_SAFE_LENIENT.decode(encoded.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Decode a private message body.
pub fn decode_message_body(encoded: &str) -> Result<String, CipherError> {
    let bytes = URL_SAFE_LENIENT.decode(encoded.as_bytes())?;
    Ok(String::from_utf8(xor_cycle(&bytes, MESSAGE_XOR_KEY))?)
}

/// Encode a private message body (the inverse of [`decode_message_body`]).
pub fn encode_message_body(body: &str) -> String {
    URL_SAFE.encode(xor_cycle(body.as_bytes(), MESSAGE_XOR_KEY))
}
