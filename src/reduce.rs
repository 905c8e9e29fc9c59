use num_bigint::BigUint;
use num_traits::Zero;

// All four helpers take little-endian limb slices. The power-of-base
// coefficient is reduced before it multiplies the limbs, so the raw sums stay
// congruent to the full product/sum while their magnitude is bounded by the
// reduction modulus rather than by base^(i+j).

pub fn product_reduced(base: &BigUint, modulus: &BigUint, x: &[BigUint], y: &[BigUint]) -> BigUint {
    let mut acc = BigUint::zero();
    for (i, x_i) in x.iter().enumerate() {
        for (j, y_j) in y.iter().enumerate() {
            let coeff = base.modpow(&BigUint::from(i + j), modulus);
            acc += coeff * x_i * y_j;
        }
    }
    acc
}

pub fn product_reduced_mod_q(
    base: &BigUint,
    q: &BigUint,
    modulus: &BigUint,
    x: &[BigUint],
    y: &[BigUint],
) -> BigUint {
    let mut acc = BigUint::zero();
    for (i, x_i) in x.iter().enumerate() {
        for (j, y_j) in y.iter().enumerate() {
            let coeff = base.modpow(&BigUint::from(i + j), q) % modulus;
            acc += coeff * x_i * y_j;
        }
    }
    acc
}

pub fn sum_reduced(base: &BigUint, modulus: &BigUint, x: &[BigUint]) -> BigUint {
    let mut acc = BigUint::zero();
    for (i, x_i) in x.iter().enumerate() {
        let coeff = base.modpow(&BigUint::from(i), modulus);
        acc += coeff * x_i;
    }
    acc
}

pub fn sum_reduced_mod_q(base: &BigUint, q: &BigUint, modulus: &BigUint, x: &[BigUint]) -> BigUint {
    let mut acc = BigUint::zero();
    for (i, x_i) in x.iter().enumerate() {
        let coeff = base.modpow(&BigUint::from(i), q) % modulus;
        acc += coeff * x_i;
    }
    acc
}
