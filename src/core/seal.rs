//! Secret sealing.
//!
//! GitHub expects secret values encrypted with the repository's public key
//! using libsodium sealed boxes (X25519 + XSalsa20-Poly1305). Every call
//! uses a fresh ephemeral keypair, so sealing the same value twice yields
//! different ciphertexts.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::PublicKey;
use tracing::trace;

use crate::error::SealError;

/// Length of an X25519 public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Decode a standard base64 X25519 public key.
pub fn parse_public_key(public_key: &str) -> Result<PublicKey, SealError> {
    let bytes = BASE64
        .decode(public_key.trim())
        .map_err(|e| SealError::InvalidKey(format!("not valid base64: {}", e)))?;

    let key: [u8; PUBLIC_KEY_LEN] = bytes.as_slice().try_into().map_err(|_| {
        SealError::InvalidKey(format!(
            "expected {} bytes, got {}",
            PUBLIC_KEY_LEN,
            bytes.len()
        ))
    })?;

    Ok(PublicKey::from(key))
}

/// Seal `plaintext` for the holder of `public_key`.
///
/// # Arguments
///
/// * `plaintext` - Secret bytes (UTF-8 text or raw file contents)
/// * `public_key` - Repository public key, standard base64
///
/// # Returns
///
/// The sealed box ciphertext, standard base64.
///
/// # Errors
///
/// Returns `SealError::InvalidKey` if the key is not 32 bytes of base64.
pub fn seal_secret(plaintext: &[u8], public_key: &str) -> Result<String, SealError> {
    let key = parse_public_key(public_key)?;

    trace!(plaintext_len = plaintext.len(), "sealing");

    let sealed = key
        .seal(&mut OsRng, plaintext)
        .map_err(|_| SealError::SealFailed)?;

    Ok(BASE64.encode(sealed))
}
