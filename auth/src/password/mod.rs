pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use argon2::HASH_LEN;
pub use argon2::ITERATIONS;
pub use argon2::MEMORY_COST_KIB;
pub use argon2::MEMORY_PER_CALL_BYTES;
pub use argon2::MIN_SALT_LEN;
pub use argon2::PARALLELISM;
pub use argon2::SALT_LEN;
pub use errors::PasswordError;
