use num_bigint::BigUint;
use num_traits::One;

pub fn bn254_scalar_modulus() -> BigUint {
    BigUint::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10,
    )
    .expect("bn254 scalar modulus literal")
}

pub fn curve25519_prime() -> BigUint {
    // p = 2^255 - 19
    (BigUint::one() << 255) - BigUint::from(19_u32)
}

// 512-bit prime bounding the family the reference q is drawn from.
pub fn reference_non_native_modulus() -> BigUint {
    BigUint::parse_bytes(
        b"9949599596347937514759676162951696763606409586138110515321513215962748617538766726657044390691573709021009246340083902867062520099469280056178304467241551",
        10,
    )
    .expect("reference non-native modulus literal")
}

// 512-bit prime used as the reference multiplication modulus q.
pub fn reference_q_modulus() -> BigUint {
    BigUint::parse_bytes(
        b"7119287143249333354889128798179350518180399418416332829217664645868799761194181510624307827552671999981622353090775540065012971162867986538013940058153311",
        10,
    )
    .expect("reference q modulus literal")
}
