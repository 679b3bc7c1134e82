//! Funções puras do pool de produto constante com taxa sobre o input.
//! - compute_output: quanto sai dado o que entra (floor)
//! - compute_input: quanto precisa entrar para sair ao menos `output_amount` (floor + 1)
//!
//! Toda a aritmética é inteira e exata (`BigUint`); não há overflow.

use num_bigint::BigUint;
use num_traits::One;

use super::errors::Result;
use super::guardrails::ensure_reserves;
use super::types::{Amount, Availability, FeeMultiplier, FEE_SCALE};

/// Saída de uma troca de `input_amount` contra o pool.
///
/// `floor(in·m·R_out / (R_in·10000 + in·m))`, onde `m` é o multiplicador de taxa.
/// Nunca drena o pool: para entrada finita o resultado é `< output_reserve`.
pub fn compute_output(
    input_amount: &Amount,
    input_reserve: &Amount,
    output_reserve: &Amount,
    fee: FeeMultiplier,
) -> Result<Amount> {
    ensure_reserves(input_reserve, output_reserve)?;

    let amount_after_fee = input_amount * BigUint::from(fee.get());
    let numerator = &amount_after_fee * output_reserve;
    let denominator = input_reserve * BigUint::from(FEE_SCALE) + &amount_after_fee;
    Ok(numerator / denominator)
}

/// Entrada necessária para receber `output_amount`.
///
/// `floor(R_in·out·10000 / ((R_out - out)·m)) + 1`. O `+1` garante que
/// `compute_output(resultado) >= output_amount`.
/// Pedir `output_amount >= output_reserve` esvaziaria o pool: retorna
/// [`Availability::InsufficientLiquidity`].
pub fn compute_input(
    output_amount: &Amount,
    input_reserve: &Amount,
    output_reserve: &Amount,
    fee: FeeMultiplier,
) -> Result<Availability<Amount>> {
    ensure_reserves(input_reserve, output_reserve)?;

    if output_amount >= output_reserve {
        return Ok(Availability::InsufficientLiquidity);
    }

    let numerator = input_reserve * output_amount * BigUint::from(FEE_SCALE);
    let denominator = (output_reserve - output_amount) * BigUint::from(fee.get());
    Ok(Availability::Available(numerator / denominator + BigUint::one()))
}
