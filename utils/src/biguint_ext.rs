use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Euclid, One};
use std::borrow::Borrow;
use std::ops::{Deref, Rem};

pub struct BigUintExt<T: Borrow<BigUint>>(pub T);

impl<T: Borrow<BigUint>> Deref for BigUintExt<T> {
    type Target = BigUint;
    fn deref(&self) -> &Self::Target {
        self.0.borrow()
    }
}

impl<T: Borrow<BigUint>> Rem<&BigUint> for BigUintExt<T> {
    type Output = BigUint;

    fn rem(self, rhs: &BigUint) -> Self::Output {
        self.deref() % rhs
    }
}

impl<T: Borrow<BigUint>> Rem<&BigUint> for &BigUintExt<T> {
    type Output = BigUint;

    fn rem(self, rhs: &BigUint) -> Self::Output {
        self.deref() % rhs
    }
}

impl<T: Borrow<BigUint>> BigUintExt<T> {
    /// self * inv = 1 \mod modulus
    pub fn modinv(&self, modulus: &BigUint) -> Option<BigUint> {
        let (a, n) = (BigInt::from(self % modulus), BigInt::from(modulus.clone()));
        let g = a.extended_gcd(&n);
        g.gcd.is_one().then_some(
            g.x.rem_euclid(&n)
                .to_biguint()
                .expect("this will always big uint"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::BigUintExt;
    use num_bigint::BigUint;

    #[test]
    fn modinv() {
        let cases = [
            (53u32, 61u32, 38u32),
            (17, 3120, 2753),
            (3, 7, 5),
            (10, 17, 12),
        ];

        for (a, n, inv) in cases {
            let (a, n) = (BigUint::from(a), BigUint::from(n));
            assert_eq!(
                BigUintExt(&a).modinv(&n),
                Some(BigUint::from(inv)),
                "modinv({a}, {n})"
            );
            let got = BigUintExt(&a).modinv(&n).unwrap();
            assert_eq!((a * got) % &n, BigUint::from(1u32));
        }
    }

    #[test]
    fn modinv_not_coprime() {
        let (a, n) = (BigUint::from(6u32), BigUint::from(9u32));
        assert_eq!(BigUintExt(&a).modinv(&n), None);
    }
}
