use crate::limbs::pad_limbs;
use crate::witness::MulModWitness;
use num_bigint::{BigInt, BigUint};

// Both renderings are an external-tool contract: a key/value assignment file
// for the prover and a struct literal of compiled circuit parameters. The
// array syntax is `[a, b, c]` in both.

fn unsigned_array(values: &[BigUint]) -> String {
    let parts: Vec<String> = values.iter().map(BigUint::to_string).collect();
    format!("[{}]", parts.join(", "))
}

fn signed_array(values: &[BigInt]) -> String {
    let parts: Vec<String> = values.iter().map(BigInt::to_string).collect();
    format!("[{}]", parts.join(", "))
}

pub fn render_prover_toml(num_limbs: usize, witness: &MulModWitness) -> String {
    let mut out = String::from("# Prover.toml");
    out.push_str(&format!(
        "\nx={}",
        unsigned_array(&pad_limbs(&witness.x_limbs, num_limbs))
    ));
    out.push_str(&format!(
        "\ny={}",
        unsigned_array(&pad_limbs(&witness.y_limbs, num_limbs))
    ));
    out.push_str(&format!(
        "\nz_mod_q={}",
        unsigned_array(&pad_limbs(&witness.z_mod_q_limbs, num_limbs))
    ));
    out.push_str(&format!("\nr={}", witness.r));
    out.push_str(&format!("\ns={}", signed_array(&witness.s)));
    out
}

pub fn render_params_struct(
    num_limbs: usize,
    base: &BigUint,
    witness: &MulModWitness,
    moduli: &[BigUint],
) -> String {
    let flattened: Vec<BigUint> = witness
        .base_exponentiations
        .iter()
        .flatten()
        .cloned()
        .collect();
    let mut out = String::from("MulModNonDetermParams {");
    out.push_str(&format!("\nbase: {base},"));
    out.push_str(&format!(
        "\nq: {},",
        unsigned_array(&pad_limbs(&witness.q_limbs, num_limbs))
    ));
    out.push_str(&format!("\nm: {},", unsigned_array(moduli)));
    out.push_str(&format!("\nq_mod_m: {},", unsigned_array(&witness.q_mod_m)));
    out.push_str(&format!(
        "\nbase_exponentiations: {},",
        unsigned_array(&flattened)
    ));
    out.push_str("\n}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::witness::{MulModWitnessSettings, compute_mul_mod_witness};

    fn small_witness() -> (MulModWitness, MulModWitnessSettings, BigUint, Vec<BigUint>) {
        let settings = MulModWitnessSettings {
            base: BigUint::from(10_u32),
            num_limbs: 4,
            use_native_as_modulus: false,
        };
        let q = BigUint::from(89_u32);
        let moduli = vec![BigUint::from(97_u32), BigUint::from(101_u32)];
        let witness = compute_mul_mod_witness(
            &BigUint::from(123_u32),
            &BigUint::from(45_u32),
            &q,
            &moduli,
            &settings,
        )
        .expect("witness");
        (witness, settings, q, moduli)
    }

    #[test]
    fn prover_toml_lines_are_padded_key_value_pairs() {
        let (witness, settings, _, _) = small_witness();
        let rendered = render_prover_toml(settings.num_limbs, &witness);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "# Prover.toml");
        // 123 * 45 = 5535, 5535 mod 89 = 17
        assert_eq!(lines[1], "x=[3, 2, 1, 0]");
        assert_eq!(lines[2], "y=[5, 4, 0, 0]");
        assert_eq!(lines[3], "z_mod_q=[7, 1, 0, 0]");
        assert!(lines[4].starts_with("r="));
        assert!(lines[5].starts_with("s=["));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn params_struct_lists_compiled_parameters() {
        let (witness, settings, _q, moduli) = small_witness();
        let rendered = render_params_struct(settings.num_limbs, &settings.base, &witness, &moduli);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "MulModNonDetermParams {");
        assert_eq!(lines[1], "base: 10,");
        assert_eq!(lines[2], "q: [9, 8, 0, 0],");
        assert_eq!(lines[3], "m: [97, 101],");
        assert_eq!(lines[4], "q_mod_m: [89, 89],");
        assert!(lines[5].starts_with("base_exponentiations: ["));
        assert_eq!(lines.last(), Some(&"}"));
    }

    #[test]
    fn flattened_exponent_tables_keep_modulus_order() {
        let (witness, settings, _, moduli) = small_witness();
        let rendered = render_params_struct(settings.num_limbs, &settings.base, &witness, &moduli);
        let per_table = 2 * (settings.num_limbs - 1) + 1;
        let exps_line = rendered
            .lines()
            .find(|l| l.starts_with("base_exponentiations: "))
            .unwrap();
        let inner = exps_line
            .trim_start_matches("base_exponentiations: [")
            .trim_end_matches("],");
        let entries: Vec<&str> = inner.split(", ").collect();
        assert_eq!(entries.len(), per_table * moduli.len());
        // First entry of each table is base^0 = 1.
        assert_eq!(entries[0], "1");
        assert_eq!(entries[per_table], "1");
    }
}
