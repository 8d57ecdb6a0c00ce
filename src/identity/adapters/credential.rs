//! PBKDF2-based credential hasher.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

use crate::identity::domain::CredentialHash;
use crate::identity::ports::{CredentialHasher, CredentialHasherError};

/// Scheme tag embedded in every encoded digest.
const SCHEME: &str = "pbkdf2-sha256";

/// Default PBKDF2 iteration count for newly hashed credentials.
const DEFAULT_ITERATIONS: u32 = 200_000;

/// Salt length in bytes.
const SALT_LENGTH: usize = 16;

/// Derived key length in bytes.
const KEY_LENGTH: usize = 32;

/// PBKDF2-HMAC-SHA256 credential hasher.
///
/// Digests are stored in a self-describing form,
/// `pbkdf2-sha256$<iterations>$<salt-b64>$<key-b64>`, so verification picks
/// up the iteration count from the digest itself. Raising the configured
/// count therefore only affects newly hashed credentials.
#[derive(Debug, Clone)]
pub struct Pbkdf2CredentialHasher {
    iterations: u32,
}

impl Pbkdf2CredentialHasher {
    /// Creates a hasher with the default iteration count.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Creates a hasher with an explicit iteration count.
    ///
    /// A zero count is raised to one so derivation always runs.
    #[must_use]
    pub const fn with_iterations(iterations: u32) -> Self {
        let effective = if iterations == 0 { 1 } else { iterations };
        Self {
            iterations: effective,
        }
    }
}

impl Default for Pbkdf2CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for Pbkdf2CredentialHasher {
    fn hash(&self, plain: &str) -> Result<CredentialHash, CredentialHasherError> {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);

        let mut key = [0u8; KEY_LENGTH];
        pbkdf2_hmac::<Sha256>(plain.as_bytes(), &salt, self.iterations, &mut key);

        let encoded = format!(
            "{SCHEME}${}${}${}",
            self.iterations,
            BASE64.encode(salt),
            BASE64.encode(key)
        );
        CredentialHash::new(encoded)
            .map_err(|err| CredentialHasherError::Hashing(err.to_string()))
    }

    fn verify(
        &self,
        plain: &str,
        encoded: &CredentialHash,
    ) -> Result<bool, CredentialHasherError> {
        let parts = parse_encoded(encoded.as_str())?;

        let mut derived = vec![0u8; parts.key.len()];
        pbkdf2_hmac::<Sha256>(plain.as_bytes(), &parts.salt, parts.iterations, &mut derived);

        Ok(derived == parts.key)
    }
}

/// Decoded components of a stored digest.
struct EncodedParts {
    iterations: u32,
    salt: Vec<u8>,
    key: Vec<u8>,
}

fn parse_encoded(encoded: &str) -> Result<EncodedParts, CredentialHasherError> {
    let malformed = || CredentialHasherError::MalformedHash(encoded.to_owned());

    let mut sections = encoded.split('$');
    let scheme = sections.next().unwrap_or_default();
    let (Some(iterations_field), Some(salt_field), Some(key_field), None) = (
        sections.next(),
        sections.next(),
        sections.next(),
        sections.next(),
    ) else {
        return Err(malformed());
    };

    if scheme != SCHEME {
        return Err(CredentialHasherError::UnsupportedScheme(scheme.to_owned()));
    }

    let iterations: u32 = iterations_field.parse().map_err(|_| malformed())?;
    let salt = BASE64.decode(salt_field).map_err(|_| malformed())?;
    let key = BASE64.decode(key_field).map_err(|_| malformed())?;

    if salt.is_empty() || key.is_empty() {
        return Err(malformed());
    }

    Ok(EncodedParts {
        iterations,
        salt,
        key,
    })
}
