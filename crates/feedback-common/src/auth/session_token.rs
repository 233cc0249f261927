//! Session token generation
//!
//! Sessions are identified by opaque random tokens. The token itself
//! carries no claims; all session state lives in the session store.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes in a session token before encoding
const TOKEN_BYTES: usize = 32;

/// Generate a new opaque session token
///
/// Produces 32 bytes from the OS CSPRNG, encoded as unpadded
/// URL-safe base64 (43 characters).
#[must_use]
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
