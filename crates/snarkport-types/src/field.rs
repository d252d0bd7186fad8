// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Minimal prime-field and quadratic-extension arithmetic over `BigUint`.
//!
//! Only what point validation needs: reduction, add, mul, square and the
//! `u^2 = -1` extension shared by BN254 and BLS12-381. Values are expected
//! reduced; callers range-check before using these.

use num_bigint::BigUint;

/// Reduce `e` modulo `p`.
pub fn reduce(e: &BigUint, p: &BigUint) -> BigUint {
    if e < p {
        e.clone()
    } else {
        e % p
    }
}

pub fn fp_add(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

pub fn fp_sub(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let a = reduce(a, p);
    let b = reduce(b, p);
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

pub fn fp_mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// Element of `Fp[u] / (u^2 + 1)`, stored as `c0 + c1 * u`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Fp2 {
    pub c0: BigUint,
    pub c1: BigUint,
}

impl Fp2 {
    pub fn new(c0: BigUint, c1: BigUint) -> Self {
        Self { c0, c1 }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::new(BigUint::from(1u8), BigUint::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.c0 == BigUint::ZERO && self.c1 == BigUint::ZERO
    }

    pub fn add(&self, other: &Fp2, p: &BigUint) -> Fp2 {
        Fp2::new(fp_add(&self.c0, &other.c0, p), fp_add(&self.c1, &other.c1, p))
    }

    pub fn mul(&self, other: &Fp2, p: &BigUint) -> Fp2 {
        let a0b0 = fp_mul(&self.c0, &other.c0, p);
        let a1b1 = fp_mul(&self.c1, &other.c1, p);
        let a0b1 = fp_mul(&self.c0, &other.c1, p);
        let a1b0 = fp_mul(&self.c1, &other.c0, p);
        Fp2::new(fp_sub(&a0b0, &a1b1, p), fp_add(&a0b1, &a1b0, p))
    }

    pub fn square(&self, p: &BigUint) -> Fp2 {
        self.mul(self, p)
    }
}

/// Element of the degree-12 target field, in the `Fp2 -> Fp6 -> Fp12`
/// tower: `c0, c1` are Fp6 elements, each three Fp2 coefficients.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Fp12 {
    pub c0: [Fp2; 3],
    pub c1: [Fp2; 3],
}

impl Fp12 {
    /// Build from the twelve base-field coefficients in tower order
    /// (`c0.c0.c0, c0.c0.c1, c0.c1.c0, ..., c1.c2.c1`).
    pub fn from_coefficients(coeffs: [BigUint; 12]) -> Self {
        let mut it = coeffs.into_iter();
        let mut next_fp2 = || {
            let c0 = it.next().unwrap_or_default();
            let c1 = it.next().unwrap_or_default();
            Fp2::new(c0, c1)
        };
        let c0 = [next_fp2(), next_fp2(), next_fp2()];
        let c1 = [next_fp2(), next_fp2(), next_fp2()];
        Self { c0, c1 }
    }

    pub fn coefficients(&self) -> impl Iterator<Item = &BigUint> {
        self.c0
            .iter()
            .chain(self.c1.iter())
            .flat_map(|fp2| [&fp2.c0, &fp2.c1])
    }
}
