use num_bigint::BigUint;
use num_traits::One;
use std::error::Error;
use std::fmt::{Display, Formatter};

// ~166-bit primes, primality verified offline. Callers supplying their own
// pool must uphold the same precondition: distinct primes, in priority order.
const CANDIDATE_PRIMES: [&str; 10] = [
    "74684543326020202269309830312831319757532706564253",
    "33691779876666245027903078753942696838547278695717",
    "20598741005597686126931828390945874928273828922699",
    "94853440291242852401182618564733101294907538620699",
    "40835068024229774243647547425594128160481750366071",
    "70452110497633128172916554766885687618496820260271",
    "14936141114781610764017981716380571117082719917853",
    "41511757973927508900846697623173071685243017785227",
    "16916887828722141846501982182026707187947653247991",
    "58723683284513808772674981369925821477489704790317",
];

pub fn candidate_prime_pool() -> Vec<BigUint> {
    CANDIDATE_PRIMES
        .iter()
        .map(|s| BigUint::parse_bytes(s.as_bytes(), 10).expect("prime pool literal"))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectModuliError {
    InsufficientModuli { required: BigUint, reached: BigUint },
    WrapAroundViolation { modulus: BigUint, bound: BigUint },
}

impl Display for SelectModuliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientModuli { required, reached } => write!(
                f,
                "candidate prime pool exhausted: product reached {reached}, required {required}"
            ),
            Self::WrapAroundViolation { modulus, bound } => write!(
                f,
                "modulus {modulus} exceeds the wrap-around bound {bound}"
            ),
        }
    }
}

impl Error for SelectModuliError {}

pub fn select_crt_moduli(
    use_native_as_modulus: bool,
    native_modulus: &BigUint,
    non_native_modulus: &BigUint,
    num_limbs: usize,
    base: &BigUint,
    pool: &[BigUint],
) -> Result<Vec<BigUint>, SelectModuliError> {
    let limbs_sq = BigUint::from(num_limbs) * BigUint::from(num_limbs);
    let base_sq = base * base;
    let required = BigUint::from(2_u32) * &limbs_sq * non_native_modulus * &base_sq;

    let mut product = BigUint::one();
    let mut moduli = Vec::new();
    if use_native_as_modulus {
        product *= native_modulus;
        moduli.push(native_modulus.clone());
    }

    let mut candidates = pool.iter();
    while product < required {
        let Some(prime) = candidates.next() else {
            return Err(SelectModuliError::InsufficientModuli {
                required,
                reached: product,
            });
        };
        moduli.push(prime.clone());
        product *= prime;
    }

    // Each m_i except the native modulus itself must satisfy
    // m_i <= native / (4 * num_limbs^2 * base^2), or partially-reduced sums
    // downstream can wrap around the native field.
    let bound = native_modulus / (BigUint::from(4_u32) * &limbs_sq * &base_sq);
    for m_i in &moduli {
        if m_i != native_modulus && m_i > &bound {
            return Err(SelectModuliError::WrapAroundViolation {
                modulus: m_i.clone(),
                bound,
            });
        }
    }

    Ok(moduli)
}
