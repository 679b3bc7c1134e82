//! Utilitários para UI/roteadores: valor à vista (sem slippage), slippage
//! percentual e limites com tolerância. Complementa as funções puras de `swap.rs`.

use core::fmt;

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use rust_decimal::Decimal;

use crate::amm_err;

use super::errors::{AmmErrorCode, Result};
use super::guardrails::{ceil_div, ensure_reserves, ratio_to_decimal};
use super::types::{Amount, Ppm, PPM_SCALE};

/// Casas decimais usadas no `Display` de [`SlippagePercent`].
pub const DISPLAY_PLACES: u32 = 4;

// --------- Valor à vista ---------
/// Saída à vista para `input_amount`, sem curva e sem taxa: `floor(in·R_out / R_in)`.
pub fn spot_output(input_amount: &Amount, input_reserve: &Amount, output_reserve: &Amount) -> Result<Amount> {
    ensure_reserves(input_reserve, output_reserve)?;
    Ok(input_amount * output_reserve / input_reserve)
}

/// Entrada à vista para receber `output_amount`: `floor(out·R_in / R_out)`.
pub fn spot_input(output_amount: &Amount, input_reserve: &Amount, output_reserve: &Amount) -> Result<Amount> {
    ensure_reserves(input_reserve, output_reserve)?;
    Ok(output_amount * input_reserve / output_reserve)
}

// --------- Slippage ---------
/// Slippage em pontos percentuais, racional exato. Negativo = favorável.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlippagePercent(BigRational);

impl SlippagePercent {
    pub fn from_ratio(value: BigRational) -> Self {
        Self(value)
    }

    pub fn as_ratio(&self) -> &BigRational {
        &self.0
    }

    pub fn into_ratio(self) -> BigRational {
        self.0
    }

    pub fn is_favorable(&self) -> bool {
        self.0.is_negative()
    }

    /// Valor arredondado (nearest-even) para exibição.
    pub fn to_decimal(&self, places: u32) -> Result<Decimal> {
        ratio_to_decimal(&self.0, places)
    }
}

impl fmt::Display for SlippagePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal(DISPLAY_PLACES) {
            Ok(d) => write!(f, "{}%", d),
            Err(_) => write!(f, "{}%", self.0),
        }
    }
}

#[inline]
fn to_signed(v: &BigUint) -> BigInt {
    BigInt::from(v.clone())
}

/// Exact-input: `(ε_out - out)·100 / ε_out - fee_offset`.
/// `ε_out == 0` torna o percentual indefinido → `DegenerateQuote`.
pub fn slippage_from_output(
    spot_output: &Amount,
    expected_output: &Amount,
    fee_offset_percent: &BigRational,
) -> Result<SlippagePercent> {
    if spot_output.is_zero() {
        return Err(amm_err!(AmmErrorCode::DegenerateQuote,
            spot_output => spot_output,
            expected_output => expected_output,
        ));
    }
    let gap = to_signed(spot_output) - to_signed(expected_output);
    let pct = BigRational::new(gap * 100, to_signed(spot_output));
    Ok(SlippagePercent(pct - fee_offset_percent))
}

/// Exact-output: `(in - ε_in)·100 / in - fee_offset`.
pub fn slippage_from_input(
    expected_input: &Amount,
    spot_input: &Amount,
    fee_offset_percent: &BigRational,
) -> Result<SlippagePercent> {
    if expected_input.is_zero() {
        return Err(amm_err!(AmmErrorCode::DegenerateQuote,
            expected_input => expected_input,
            spot_input => spot_input,
        ));
    }
    let gap = to_signed(expected_input) - to_signed(spot_input);
    let pct = BigRational::new(gap * 100, to_signed(expected_input));
    Ok(SlippagePercent(pct - fee_offset_percent))
}

// --------- Limites com tolerância ---------
#[inline]
fn clamp_tolerance(tolerance_ppm: Ppm) -> Ppm {
    tolerance_ppm.min(PPM_SCALE)
}

/// **min_out** aceito para exact-input: `floor(out · (1 - tol))`.
pub fn min_out_with_tolerance(expected_output: &Amount, tolerance_ppm: Ppm) -> Amount {
    let factor = BigUint::from(PPM_SCALE - clamp_tolerance(tolerance_ppm));
    expected_output * factor / BigUint::from(PPM_SCALE)
}

/// **max_in** aceito para exact-output: `ceil(in · (1 + tol))`.
pub fn max_in_with_tolerance(expected_input: &Amount, tolerance_ppm: Ppm) -> Amount {
    let factor = BigUint::from(PPM_SCALE + clamp_tolerance(tolerance_ppm));
    ceil_div(&(expected_input * factor), &BigUint::from(PPM_SCALE))
}

// -------------------------
// TESTES
// -------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amt(v: u64) -> Amount {
        Amount::from(v)
    }

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into())
    }

    #[test]
    fn t_spot_amounts_basic() {
        assert_eq!(spot_output(&amt(1_000), &amt(1_000_000), &amt(2_000_000)).unwrap(), amt(2_000));
        assert_eq!(spot_input(&amt(1_000), &amt(1_000_000), &amt(2_000_000)).unwrap(), amt(500));
        // floor
        assert_eq!(spot_output(&amt(1), &amt(3), &amt(2)).unwrap(), amt(0));
    }

    #[test]
    fn t_spot_zero_reserve_rejected() {
        let err = spot_output(&amt(1), &amt(0), &amt(2)).unwrap_err();
        assert_eq!(err.code, AmmErrorCode::EmptyReserve);
    }

    #[test]
    fn t_slippage_from_output_backs_out_fee() {
        // ε=1000, out=996 -> 0.4% - 0.3% = 0.1%
        let s = slippage_from_output(&amt(1_000), &amt(996), &ratio(3, 10)).unwrap();
        assert_eq!(*s.as_ratio(), ratio(1, 10));
        assert!(!s.is_favorable());
        assert_eq!(s.to_string(), "0.1000%");
    }

    #[test]
    fn t_slippage_can_be_negative() {
        let s = slippage_from_output(&amt(10), &amt(10), &ratio(3, 10)).unwrap();
        assert!(s.is_favorable());
        assert_eq!(s.to_decimal(2).unwrap(), Decimal::from_str("-0.30").unwrap());
    }

    #[test]
    fn t_slippage_zero_spot_is_degenerate() {
        let err = slippage_from_output(&amt(0), &amt(0), &ratio(3, 10)).unwrap_err();
        assert_eq!(err.code, AmmErrorCode::DegenerateQuote);
    }

    #[test]
    fn t_slippage_from_input() {
        // in=810, ε=800 -> 1000/810 - 0.3 = 757/810
        let s = slippage_from_input(&amt(810), &amt(800), &ratio(3, 10)).unwrap();
        assert_eq!(*s.as_ratio(), ratio(757, 810));
        assert_eq!(
            slippage_from_input(&amt(0), &amt(0), &ratio(3, 10)).unwrap_err().code,
            AmmErrorCode::DegenerateQuote
        );
    }

    #[test]
    fn t_min_out_with_tolerance() {
        // 0.5%
        assert_eq!(min_out_with_tolerance(&amt(996), 5_000), amt(991));
        assert_eq!(min_out_with_tolerance(&amt(996), 0), amt(996));
        // tolerância acima de 100% é limitada
        assert_eq!(min_out_with_tolerance(&amt(996), 2_000_000), amt(0));
    }

    #[test]
    fn t_max_in_with_tolerance() {
        // 1000 * 1.005 = 1005 exato; 1001 * 1.005 = 1006.005 -> 1007
        assert_eq!(max_in_with_tolerance(&amt(1_000), 5_000), amt(1_005));
        assert_eq!(max_in_with_tolerance(&amt(1_001), 5_000), amt(1_007));
    }
}
