use mulmod_witness::{
    MulModWitnessSettings, bn254_scalar_modulus, candidate_prime_pool, compute_mul_mod_witness,
    reference_non_native_modulus, reference_q_modulus, render_params_struct, render_prover_toml,
    select_crt_moduli,
};
use num_bigint::BigUint;
use std::time::Instant;

fn main() {
    let settings = MulModWitnessSettings::default();
    let x = BigUint::from(10_u32).pow(37);
    let y = BigUint::from(2_u32) * BigUint::from(10_u32).pow(24);
    let q = reference_q_modulus();

    let t0 = Instant::now();
    let moduli = select_crt_moduli(
        settings.use_native_as_modulus,
        &bn254_scalar_modulus(),
        &reference_non_native_modulus(),
        settings.num_limbs,
        &settings.base,
        &candidate_prime_pool(),
    )
    .expect("failed to select CRT moduli");
    let select_elapsed = t0.elapsed();

    let t1 = Instant::now();
    let witness =
        compute_mul_mod_witness(&x, &y, &q, &moduli, &settings).expect("failed to compute witness");
    let compute_elapsed = t1.elapsed();

    println!("moduli selected: {}", moduli.len());
    println!("select time: {:?}", select_elapsed);
    println!("compute time: {:?}", compute_elapsed);
    println!();
    println!("{}", render_prover_toml(settings.num_limbs, &witness));
    println!();
    println!(
        "{}",
        render_params_struct(settings.num_limbs, &settings.base, &witness, &moduli)
    );
}
