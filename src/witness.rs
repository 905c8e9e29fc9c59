use crate::limbs::to_limbs;
use crate::reduce::{product_reduced, product_reduced_mod_q, sum_reduced, sum_reduced_mod_q};
use bincode::Options;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_WITNESS_BYTES: usize = 4 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulModWitnessSettings {
    pub base: BigUint,
    pub num_limbs: usize,
    pub use_native_as_modulus: bool,
}

impl Default for MulModWitnessSettings {
    fn default() -> Self {
        Self {
            base: BigUint::one() << 32,
            num_limbs: 16,
            use_native_as_modulus: false,
        }
    }
}

// All limb sequences are little-endian under settings.base. r and s may be
// negative; both divisions producing them are checked exact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulModWitness {
    pub x_limbs: Vec<BigUint>,
    pub y_limbs: Vec<BigUint>,
    pub q_limbs: Vec<BigUint>,
    pub z_mod_q_limbs: Vec<BigUint>,
    pub r: BigInt,
    pub s: Vec<BigInt>,
    pub q_mod_m: Vec<BigUint>,
    pub base_exponentiations: Vec<Vec<BigUint>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MulModWitnessError {
    ZeroModulus,
    ZeroLimbCount,
    ExactDivisionViolated { divisor: BigInt, remainder: BigInt },
}

impl Display for MulModWitnessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroModulus => write!(f, "multiplication modulus q must be non-zero"),
            Self::ZeroLimbCount => write!(f, "limb count must be non-zero"),
            Self::ExactDivisionViolated { divisor, remainder } => write!(
                f,
                "correction value division by {divisor} left remainder {remainder}"
            ),
        }
    }
}

impl Error for MulModWitnessError {}

pub fn compute_mul_mod_witness(
    x: &BigUint,
    y: &BigUint,
    q: &BigUint,
    moduli: &[BigUint],
    settings: &MulModWitnessSettings,
) -> Result<MulModWitness, MulModWitnessError> {
    if q.is_zero() {
        return Err(MulModWitnessError::ZeroModulus);
    }
    if settings.num_limbs == 0 {
        return Err(MulModWitnessError::ZeroLimbCount);
    }
    let base = &settings.base;
    let z_mod_q = (x * y) % q;
    let x_limbs = to_limbs(x, base);
    let y_limbs = to_limbs(y, base);
    let q_limbs = to_limbs(q, base);
    let z_mod_q_limbs = to_limbs(&z_mod_q, base);

    let product_q = product_reduced(base, q, &x_limbs, &y_limbs);
    let sum_q = sum_reduced(base, q, &z_mod_q_limbs);
    let r = exact_div(
        BigInt::from(product_q) - BigInt::from(sum_q),
        &BigInt::from(q.clone()),
    )?;

    let exponent_count = 2 * (settings.num_limbs - 1) + 1;
    let mut s = Vec::with_capacity(moduli.len());
    let mut q_mod_m = Vec::with_capacity(moduli.len());
    let mut base_exponentiations = Vec::with_capacity(moduli.len());
    for m_i in moduli {
        let mut table = Vec::with_capacity(exponent_count);
        for k in 0..exponent_count {
            table.push(base.modpow(&BigUint::from(k), q) % m_i);
        }
        let q_mod_m_i = q % m_i;

        let product_q_m = product_reduced_mod_q(base, q, m_i, &x_limbs, &y_limbs);
        let sum_q_m = sum_reduced_mod_q(base, q, m_i, &z_mod_q_limbs);
        let s_i = exact_div(
            BigInt::from(product_q_m)
                - BigInt::from(sum_q_m)
                - &r * BigInt::from(q_mod_m_i.clone()),
            &BigInt::from(m_i.clone()),
        )?;

        s.push(s_i);
        q_mod_m.push(q_mod_m_i);
        base_exponentiations.push(table);
    }

    Ok(MulModWitness {
        x_limbs,
        y_limbs,
        q_limbs,
        z_mod_q_limbs,
        r,
        s,
        q_mod_m,
        base_exponentiations,
    })
}

fn exact_div(numerator: BigInt, divisor: &BigInt) -> Result<BigInt, MulModWitnessError> {
    let remainder = &numerator % divisor;
    if !remainder.is_zero() {
        return Err(MulModWitnessError::ExactDivisionViolated {
            divisor: divisor.clone(),
            remainder,
        });
    }
    Ok(numerator / divisor)
}

pub fn serialize_mul_mod_witness(witness: &MulModWitness) -> Result<Vec<u8>, String> {
    let opts = bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
        .with_limit(MAX_WITNESS_BYTES as u64);
    opts.serialize(witness).map_err(|e| e.to_string())
}

pub fn deserialize_mul_mod_witness(bytes: &[u8]) -> Result<MulModWitness, String> {
    let opts = bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
        .with_limit(MAX_WITNESS_BYTES as u64);
    opts.deserialize(bytes).map_err(|e| e.to_string())
}
