use num_bigint::BigUint;
use num_traits::Zero;

pub fn to_limbs(value: &BigUint, base: &BigUint) -> Vec<BigUint> {
    let mut rest = value.clone();
    let mut limbs = Vec::new();
    while &rest >= base {
        limbs.push(&rest % base);
        rest /= base;
    }
    limbs.push(rest);
    limbs
}

pub fn from_limbs(limbs: &[BigUint], base: &BigUint) -> BigUint {
    let mut acc = BigUint::zero();
    for limb in limbs.iter().rev() {
        acc = acc * base + limb;
    }
    acc
}

pub fn pad_limbs(limbs: &[BigUint], len: usize) -> Vec<BigUint> {
    assert!(
        len >= limbs.len(),
        "pad target {len} is below the natural limb length {}",
        limbs.len()
    );
    let mut padded = limbs.to_vec();
    padded.resize(len, BigUint::zero());
    padded
}
