//! Validações e helpers numéricos exatos para o AMM.
//! Objetivo: entradas seguras e arredondamento com direção explícita.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use rust_decimal::Decimal;

use crate::amm_err;

use super::errors::{from_fee_multiplier, from_pool_reserves, AmmErrorCode, Result};
use super::types::Amount;

/// Escala máxima aceita por `rust_decimal`.
pub const MAX_DISPLAY_PLACES: u32 = 28;

#[inline]
pub fn ensure_reserves(input_reserve: &Amount, output_reserve: &Amount) -> Result<()> {
    match from_pool_reserves(input_reserve, output_reserve) {
        Some(code) => Err(amm_err!(code,
            input_reserve => input_reserve,
            output_reserve => output_reserve,
        )),
        None => Ok(()),
    }
}

#[inline]
pub fn ensure_fee_multiplier(value: u32) -> Result<()> {
    match from_fee_multiplier(value) {
        Some(code) => Err(amm_err!(code, fee_multiplier => value)),
        None => Ok(()),
    }
}

/// `ceil(n / d)` assumindo `d > 0`.
#[inline]
pub fn ceil_div(n: &BigUint, d: &BigUint) -> BigUint {
    let (q, r) = n.div_rem(d);
    if r.is_zero() { q } else { q + BigUint::one() }
}

/// Divisão com arredondamento *nearest (ties-to-even)* em inteiros com sinal.
/// O arredondamento é feito sobre a magnitude e o sinal é reaplicado.
pub fn div_nearest_even_signed(n: &BigInt, d: &BigInt) -> Result<BigInt> {
    if d.is_zero() {
        return Err(amm_err!(AmmErrorCode::OverflowNumeric, reason => "divisão por zero"));
    }
    let (q, r) = n.magnitude().div_rem(d.magnitude());
    let two_r = &r << 1usize;
    let abs = match two_r.cmp(d.magnitude()) {
        core::cmp::Ordering::Less => q,
        core::cmp::Ordering::Greater => q + BigUint::one(),
        // empate: arredonda para o par
        core::cmp::Ordering::Equal => if q.is_odd() { q + BigUint::one() } else { q },
    };
    let negative = (n.sign() == Sign::Minus) != (d.sign() == Sign::Minus);
    let sign = if abs.is_zero() {
        Sign::NoSign
    } else if negative {
        Sign::Minus
    } else {
        Sign::Plus
    };
    Ok(BigInt::from_biguint(sign, abs))
}

/// Converte um racional exato para `Decimal` com `places` casas (nearest-even).
pub fn ratio_to_decimal(value: &BigRational, places: u32) -> Result<Decimal> {
    if places > MAX_DISPLAY_PLACES {
        return Err(amm_err!(AmmErrorCode::OverflowNumeric, places => places));
    }
    let scale = BigInt::from(10u32).pow(places);
    let scaled = div_nearest_even_signed(&(value.numer() * &scale), value.denom())?;
    let mantissa = scaled
        .to_i128()
        .ok_or_else(|| amm_err!(AmmErrorCode::OverflowNumeric, value => value))?;
    Decimal::try_from_i128_with_scale(mantissa, places)
        .map_err(|e| amm_err!(AmmErrorCode::OverflowNumeric, value => value, reason => e))
}

/// Racional exato equivalente a um `Decimal` (mantissa / 10^escala).
pub fn ratio_from_decimal(value: Decimal) -> BigRational {
    let denom = BigInt::from(10u32).pow(value.scale());
    BigRational::new(BigInt::from(value.mantissa()), denom)
}
