#![forbid(unsafe_code)]

pub mod fields;
pub mod limbs;
pub mod moduli;
pub mod reduce;
pub mod render;
pub mod witness;

pub use fields::{
    bn254_scalar_modulus, curve25519_prime, reference_non_native_modulus, reference_q_modulus,
};
pub use limbs::{from_limbs, pad_limbs, to_limbs};
pub use moduli::{SelectModuliError, candidate_prime_pool, select_crt_moduli};
pub use reduce::{product_reduced, product_reduced_mod_q, sum_reduced, sum_reduced_mod_q};
pub use render::{render_params_struct, render_prover_toml};
pub use witness::{
    MulModWitness, MulModWitnessError, MulModWitnessSettings, compute_mul_mod_witness,
    deserialize_mul_mod_witness, serialize_mul_mod_witness,
};
