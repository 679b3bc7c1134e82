//! Testes de direção de arredondamento (saída floor, entrada floor + 1)

use num_bigint::BigInt;
use num_rational::BigRational;

use swap_quote_core::amm::pricing::{max_in_with_tolerance, min_out_with_tolerance, spot_input, spot_output};
use swap_quote_core::amm::ref_golden::{continuous_input, continuous_output};
use swap_quote_core::amm::swap::{compute_input, compute_output};
use swap_quote_core::amm::types::{Amount, FeeMultiplier};

fn amt(v: u64) -> Amount {
    Amount::from(v)
}

fn q(v: &Amount) -> BigRational {
    BigRational::from_integer(BigInt::from(v.clone()))
}

#[test]
fn r1_amount_out_is_floor_of_continuous_value() {
    let fee = FeeMultiplier::default();
    let (x, y, dx) = (amt(1_000_000), amt(3_000_000), amt(12_345));
    let out = compute_output(&dx, &x, &y, fee).unwrap();
    let exact = continuous_output(&dx, &x, &y, fee).unwrap();
    assert!(q(&out) <= exact);
    assert!(q(&(&out + 1u32)) > exact);
}

#[test]
fn r2_amount_in_is_strictly_above_continuous_value() {
    let fee = FeeMultiplier::default();
    let (x, y, dy) = (amt(1_000_000), amt(1_000_000), amt(9_870));
    let dx = compute_input(&dy, &x, &y, fee).unwrap().available().unwrap();
    let exact = continuous_input(&dy, &x, &y, fee).unwrap().available().unwrap();
    assert!(q(&dx) > exact);
    assert!(q(&(&dx - 1u32)) <= exact);
    // o chamador nunca recebe menos que o pedido
    assert!(compute_output(&dx, &x, &y, fee).unwrap() >= dy);
}

#[test]
fn r3_exact_rational_input_still_adds_one() {
    // sem taxa: 100*10*10000 / (10*10000) = 100 exato -> 101
    let no_fee = FeeMultiplier::new(10_000).unwrap();
    let dx = compute_input(&amt(10), &amt(100), &amt(20), no_fee).unwrap().available().unwrap();
    assert_eq!(dx, amt(101));
}

#[test]
fn r4_spot_amounts_are_floor() {
    // 7 * 2 / 3 = 4.66 -> 4
    assert_eq!(spot_output(&amt(7), &amt(3), &amt(2)).unwrap(), amt(4));
    assert_eq!(spot_input(&amt(7), &amt(2), &amt(3)).unwrap(), amt(4));
}

#[test]
fn r5_tolerance_bounds_round_against_the_taker() {
    // min_out desce, max_in sobe
    assert_eq!(min_out_with_tolerance(&amt(1_001), 5_000), amt(995));
    assert_eq!(max_in_with_tolerance(&amt(1_001), 5_000), amt(1_007));
}
