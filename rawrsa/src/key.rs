use crate::RawRsaError;
use num_bigint::{BigInt, BigUint};
use num_traits::{Euclid, One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use utils::{BigIntExt, BigUintExt};

#[derive(Clone, Debug, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    // n = p * q
    n: BigUint,
    // public exponent, gcd(e, (p-1)(q-1)) = 1
    e: BigUint,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrivateKey {
    pk: PublicKey,
    // d * e = 1 % (p-1)(q-1)
    d: BigUint,
    // the factorization of n, present when the key carries the CRT cache
    factor: Option<PrimeFactor>,
}

// n = p * q
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PrimeFactor {
    p: BigInt,
    q: BigInt,
    pre: PrecomputedValues,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PrecomputedValues {
    // $e \cdot d_p \equiv 1 \mod (p-1)$
    // d % (p - 1)
    d_p: BigInt,
    // $e \cdot d_q \equiv 1 \mod (q-1)$
    // d % (q - 1)
    d_q: BigInt,
    // $q \cdot q_inv \equiv 1 \mod p$
    // q^{-1} % p
    q_inv: BigInt,
}

impl PublicKey {
    /// n: RSA modulus
    /// e: public key exponent
    /// note: not to check the `n` and `exp` are right RSA parameters
    pub fn new_uncheck(n: BigUint, exp: BigUint) -> Self {
        Self { e: exp, n }
    }

    /// n
    pub fn modules(&self) -> &BigUint {
        &self.n
    }

    /// e
    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// RSAEP: RSA encrypt primitive, $m^e \mod n$
    ///
    /// The operation is total over non-negative integers: a message that is
    /// not less than `n` is reduced modulo `n` by the exponentiation and
    /// cannot be recovered by the decrypt primitive.
    pub fn rsaep(&self, m: &BigUint) -> Result<BigUint, RawRsaError> {
        if self.n.is_zero() {
            return Err(RawRsaError::InvalidModulus);
        }

        Ok(m.modpow(&self.e, &self.n))
    }

    /// verify that `sig` is a valid textbook RSA signature for `msg`,
    /// $sig^e \equiv msg \mod n$
    ///
    /// Malformed inputs never raise an error here, they compare unequal.
    pub fn verify(&self, msg: &BigUint, sig: &BigUint) -> bool {
        self.rsaep(sig).map(|m| &m == msg).unwrap_or(false)
    }
}

impl PrivateKey {
    /// note: not to check the parameters are right RSA parameters
    pub fn new_uncheck(modulus: BigUint, public_exp: BigUint, private_exp: BigUint) -> Self {
        Self {
            pk: PublicKey::new_uncheck(modulus, public_exp),
            d: private_exp,
            factor: None,
        }
    }

    /// build the key from its two prime factors, precomputing the CRT
    /// values `d % (p-1)`, `d % (q-1)` and `q^{-1} % p`
    pub fn new_uncheck_with_factor(d: BigUint, p: BigUint, q: BigUint) -> Self {
        let (n, totient) = (&p * &q, (&p - 1u32) * (&q - 1u32));
        let d = BigInt::from(d);
        let e = BigIntExt(&d)
            .modinv(&BigInt::from(totient))
            .unwrap()
            .to_biguint()
            .unwrap();
        let d = d.to_biguint().unwrap();
        let pk = PublicKey::new_uncheck(n, e);

        let pre = PrecomputedValues::new(&p, &q, &d);
        let factor = PrimeFactor {
            p: BigInt::from(p),
            q: BigInt::from(q),
            pre,
        };

        Self {
            pk,
            d,
            factor: Some(factor),
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    /// RSADP: RSA decrypt primitive, $c^d \mod n, c \lt n$
    pub fn rsadp(&self, c: &BigUint) -> Result<BigUint, RawRsaError> {
        if self.pk.n.is_zero() {
            return Err(RawRsaError::InvalidModulus);
        }

        if c >= &self.pk.n {
            return Err(RawRsaError::CiphertextTooLarge);
        }

        Ok(self.rsadp_uncheck(c))
    }

    // m1 = c^{dp} % p, m2 = c^{dq} % q
    // h = (m1 - m2) * qinv % p
    // m = m2 + q * h
    fn rsadp_uncheck(&self, c: &BigUint) -> BigUint {
        match self.factor.as_ref() {
            Some(factor) => {
                let c = BigInt::from(c.clone());
                let (mut m1, m2) = (
                    c.modpow(&factor.pre.d_p, &factor.p),
                    c.modpow(&factor.pre.d_q, &factor.q),
                );
                // h * q, rem_euclid keeps the difference canonical
                m1 -= &m2;
                m1 *= &factor.pre.q_inv;
                let (mut h, mut m) = (m1.rem_euclid(&factor.p), m2);
                h *= &factor.q;
                m += h;

                m.to_biguint()
                    .expect("this always can be converted to biguint")
            }
            None => c.modpow(&self.d, &self.pk.n),
        }
    }

    /// sign `msg` with the textbook RSA signature scheme
    ///
    /// The message representative must already carry whatever
    /// blinding/padding the enclosing protocol requires.
    pub fn sign(&self, msg: &BigUint) -> Result<BigUint, RawRsaError> {
        self.rsadp(msg)
    }
}

impl PrecomputedValues {
    fn new(p: &BigUint, q: &BigUint, d: &BigUint) -> Self {
        let one = BigUint::one();
        let (d_p, d_q, q_inv) = (
            d % (p - &one),
            d % (q - &one),
            BigUintExt(q)
                .modinv(p)
                .expect("this will never happened due to p and q is coprime"),
        );

        Self {
            d_p: BigInt::from(d_p),
            d_q: BigInt::from(d_q),
            q_inv: BigInt::from(q_inv),
        }
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{n={:#x}, e={:#x}}}", self.n, self.e)
    }
}

impl Display for PrimeFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{p:{:#x}, q:{:#x}}}", self.p, self.q)
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.factor.as_ref() {
            Some(factor) => {
                write!(
                    f,
                    "{{pk: {}, d: {:#x}, factor: {}}}",
                    self.pk, self.d, factor
                )
            }
            None => {
                write!(f, "{{pk: {}, d: {:#x}, factor: []}}", self.pk, self.d)
            }
        }
    }
}
