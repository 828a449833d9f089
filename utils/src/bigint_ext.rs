use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Euclid, One};
use std::borrow::Borrow;
use std::ops::Deref;

pub struct BigIntExt<T: Borrow<BigInt>>(pub T);

impl<T: Borrow<BigInt>> Deref for BigIntExt<T> {
    type Target = BigInt;
    fn deref(&self) -> &Self::Target {
        self.0.borrow()
    }
}

impl<T: Borrow<BigInt>> BigIntExt<T> {
    /// self * inv = 1 \mod modulus, the inverse is in [0, modulus)
    pub fn modinv(&self, modulus: &BigInt) -> Option<BigInt> {
        let a = self.deref().rem_euclid(modulus);
        let g = a.extended_gcd(modulus);
        g.gcd.is_one().then_some(g.x.rem_euclid(modulus))
    }
}
