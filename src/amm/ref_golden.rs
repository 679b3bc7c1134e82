//! Referência de alta precisão ("goldens") baseada em **BigRational** para o
//! pool de produto constante com taxa sobre o **input**.
//!
//! Objetivos desta referência:
//! 1. Calcular os resultados **contínuos/exatos** (sem quantização) de
//!    `compute_output` e `compute_input`.
//! 2. Reproduzir a **política de arredondamento** (saída floor, entrada
//!    floor + 1) a partir do racional, como oráculo independente do core.
//! 3. Medir a variação do invariante, `Δk/k`, do **core discreto**.
//!
//! Não entra no caminho de produção; serve a testes e geração de goldens.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive};

use super::errors::Result;
use super::guardrails::ensure_reserves;
use super::swap;
use super::types::{Amount, Availability, FeeMultiplier, FEE_SCALE};

#[inline]
fn q(v: &Amount) -> BigRational {
    BigRational::from_integer(BigInt::from(v.clone()))
}

#[inline]
fn q_u32(v: u32) -> BigRational {
    BigRational::from_integer(BigInt::from(v))
}

#[inline]
fn floor_to_amount(r: &BigRational) -> Amount {
    // domínio não-negativo
    r.floor().to_integer().to_biguint().unwrap_or_default()
}

#[inline]
fn k(input_reserve: &Amount, output_reserve: &Amount) -> BigRational {
    q(input_reserve) * q(output_reserve)
}

// -------------------------
// Contínuo/exato
// -------------------------
/// Saída racional exata: `in·m·R_out / (R_in·10000 + in·m)`.
pub fn continuous_output(
    input_amount: &Amount,
    input_reserve: &Amount,
    output_reserve: &Amount,
    fee: FeeMultiplier,
) -> Result<BigRational> {
    ensure_reserves(input_reserve, output_reserve)?;
    let after_fee = q(input_amount) * q_u32(fee.get());
    let denominator = q(input_reserve) * q_u32(FEE_SCALE) + &after_fee;
    Ok(after_fee * q(output_reserve) / denominator)
}

/// Entrada racional exata para `output_amount`: `R_in·out·10000 / ((R_out - out)·m)`.
pub fn continuous_input(
    output_amount: &Amount,
    input_reserve: &Amount,
    output_reserve: &Amount,
    fee: FeeMultiplier,
) -> Result<Availability<BigRational>> {
    ensure_reserves(input_reserve, output_reserve)?;
    if output_amount >= output_reserve {
        return Ok(Availability::InsufficientLiquidity);
    }
    let numerator = q(input_reserve) * q(output_amount) * q_u32(FEE_SCALE);
    let denominator = (q(output_reserve) - q(output_amount)) * q_u32(fee.get());
    Ok(Availability::Available(numerator / denominator))
}

// -------------------------
// Política (replica o core a partir do racional)
// -------------------------
/// Saída com a política do core: **floor** do valor contínuo.
pub fn policy_output(
    input_amount: &Amount,
    input_reserve: &Amount,
    output_reserve: &Amount,
    fee: FeeMultiplier,
) -> Result<Amount> {
    let exact = continuous_output(input_amount, input_reserve, output_reserve, fee)?;
    Ok(floor_to_amount(&exact))
}

/// Entrada com a política do core: **floor + 1** do valor contínuo
/// (estritamente acima, mesmo quando o racional é inteiro).
pub fn policy_input(
    output_amount: &Amount,
    input_reserve: &Amount,
    output_reserve: &Amount,
    fee: FeeMultiplier,
) -> Result<Availability<Amount>> {
    let exact = continuous_input(output_amount, input_reserve, output_reserve, fee)?;
    Ok(exact.map(|r| floor_to_amount(&r) + Amount::one()))
}

// -------------------------
// Estruturas de comparação (goldens)
// -------------------------
#[derive(Debug, Clone)]
pub struct RefOut {
    pub out_core: Amount,
    pub out_policy: Amount,
    pub out_cont: BigRational,
    pub dk_over_k_core: BigRational,
}

#[derive(Debug, Clone)]
pub struct RefIn {
    pub in_core: Amount,
    pub in_policy: Amount,
    pub in_cont: BigRational,
    /// Saída obtida ao reenviar `in_core` pelo solver.
    pub out_replayed: Amount,
}

/// `(k1 - k0) / k0` após trocar `input` por `output` (sem retirar a taxa do pool).
pub fn dk_over_k(input_reserve: &Amount, output_reserve: &Amount, input: &Amount, output: &Amount) -> BigRational {
    let k0 = k(input_reserve, output_reserve);
    let k1 = (q(input_reserve) + q(input)) * (q(output_reserve) - q(output));
    (k1 - &k0) / k0
}

/// Compara o **core** com a referência (exact-input).
pub fn golden_output(
    input_amount: &Amount,
    input_reserve: &Amount,
    output_reserve: &Amount,
    fee: FeeMultiplier,
) -> Result<RefOut> {
    let out_core = swap::compute_output(input_amount, input_reserve, output_reserve, fee)?;
    let out_policy = policy_output(input_amount, input_reserve, output_reserve, fee)?;
    let out_cont = continuous_output(input_amount, input_reserve, output_reserve, fee)?;
    let dk_over_k_core = dk_over_k(input_reserve, output_reserve, input_amount, &out_core);
    Ok(RefOut { out_core, out_policy, out_cont, dk_over_k_core })
}

/// Compara o **core** com a referência (exact-output).
pub fn golden_input(
    output_amount: &Amount,
    input_reserve: &Amount,
    output_reserve: &Amount,
    fee: FeeMultiplier,
) -> Result<Availability<RefIn>> {
    let core = swap::compute_input(output_amount, input_reserve, output_reserve, fee)?;
    let policy = policy_input(output_amount, input_reserve, output_reserve, fee)?;
    let cont = continuous_input(output_amount, input_reserve, output_reserve, fee)?;
    let (in_core, in_policy, in_cont) = match (core, policy, cont) {
        (Availability::Available(c), Availability::Available(p), Availability::Available(r)) => (c, p, r),
        _ => return Ok(Availability::InsufficientLiquidity),
    };
    let out_replayed = swap::compute_output(&in_core, input_reserve, output_reserve, fee)?;
    Ok(Availability::Available(RefIn { in_core, in_policy, in_cont, out_replayed }))
}

/// Valor aproximado para logs e mensagens de teste.
pub fn approx(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}
