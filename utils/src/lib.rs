mod biguint_ext;
pub use biguint_ext::BigUintExt;

mod bigint_ext;
pub use bigint_ext::BigIntExt;
