use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawRsaError {
    /// the key's modulus is zero
    InvalidModulus,

    /// the integer input of decryption/signing is not a residue modulo `n`
    CiphertextTooLarge,
}

impl Display for RawRsaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidModulus => f.write_str("rsa: the modulus must be positive"),
            Self::CiphertextTooLarge => {
                f.write_str("rsa: the ciphertext need less than the modulus")
            }
        }
    }
}

impl Error for RawRsaError {}
