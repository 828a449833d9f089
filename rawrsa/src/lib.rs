//! "Raw" or "textbook" RSA signing and verification.
//!
//! The primitives here exponentiate an integer representative directly,
//! without padding or hashing. On its own that is an insecure signature
//! scheme; it is the building block an enclosing protocol (such as blind
//! RSA signatures) wraps with its own padding/blinding.
//!
//! Encrypt: $c = m ^ e \mod n$;
//!
//! Decrypt: $m = c ^ d \mod n$, through the two-prime CRT reconstruction
//! when the factorization of $n$ is carried by the key;
//!
//! The modular exponentiation is `num_bigint::BigUint::modpow`, which is
//! not constant time. Embedders that need resistance against timing attacks
//! must substitute a constant time big-integer backend.

mod error;
pub use error::RawRsaError;

mod key;
pub use key::{PrivateKey, PublicKey};
