use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use constant_time_eq::constant_time_eq;
use zeroize::Zeroizing;

use super::errors::PasswordError;

/// Random salt size in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Derived hash size in bytes (256 bits).
pub const HASH_LEN: usize = 32;

/// Argon2 lanes.
pub const PARALLELISM: u32 = 2;

/// Argon2 memory cost in KiB (64 MiB).
pub const MEMORY_COST_KIB: u32 = 64 * 1024;

/// Argon2 passes over memory.
pub const ITERATIONS: u32 = 3;

/// Memory transiently held by a single hash or verify call.
///
/// Callers bounding concurrent authentication work should size their limit
/// against this value.
pub const MEMORY_PER_CALL_BYTES: usize = MEMORY_COST_KIB as usize * 1024;

/// Smallest salt Argon2 accepts.
pub const MIN_SALT_LEN: usize = 8;

const SEPARATOR: char = '.';

/// Salt derived against when the stored hash is unusable.
const UNUSABLE_HASH_SALT: [u8; SALT_LEN] = [0u8; SALT_LEN];

/// Password hashing implementation.
///
/// Stored hashes have the form `<base64(salt)>.<base64(hash)>`, standard
/// alphabet with padding. The Argon2id cost parameters are fixed constants,
/// so a stored hash carries everything verification needs.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// The password is expected to be validated by the caller already.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Stored hash string, `<salt>.<hash>`
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input (e.g. a password longer than 2^32 - 1 bytes)
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);

        let derived = derive(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(format!(
            "{}{}{}",
            STANDARD.encode(salt),
            SEPARATOR,
            STANDARD.encode(&derived[..])
        ))
    }

    /// Verify a password against a stored hash.
    ///
    /// A stored hash that cannot be parsed is treated as a mismatch, after
    /// the same Argon2 derivation a well-formed hash costs. The recomputed
    /// hash is compared in constant time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Hash previously returned by [`PasswordHasher::hash`]
    ///
    /// # Returns
    /// True iff the password reproduces the stored hash
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let parsed = split_stored_hash(stored_hash);
        let salt = parsed
            .as_ref()
            .map_or(&UNUSABLE_HASH_SALT[..], |(salt, _)| salt.as_slice());

        let computed = derive(password.as_bytes(), salt);

        match (parsed, computed) {
            (Some((_, expected)), Ok(computed)) => constant_time_eq(&computed[..], &expected),
            _ => false,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn kdf() -> Result<Argon2<'static>, argon2::Error> {
    let params = Params::new(MEMORY_COST_KIB, ITERATIONS, PARALLELISM, Some(HASH_LEN))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn derive(password: &[u8], salt: &[u8]) -> Result<Zeroizing<[u8; HASH_LEN]>, argon2::Error> {
    let mut output = Zeroizing::new([0u8; HASH_LEN]);
    kdf()?.hash_password_into(password, salt, &mut *output)?;
    Ok(output)
}

fn split_stored_hash(stored_hash: &str) -> Option<(Vec<u8>, Vec<u8>)> {
    let mut parts = stored_hash.split(SEPARATOR);
    let (Some(salt), Some(hash), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    let salt = STANDARD.decode(salt).ok()?;
    let hash = STANDARD.decode(hash).ok()?;
    if salt.len() < MIN_SALT_LEN {
        return None;
    }
    Some((salt, hash))
}
