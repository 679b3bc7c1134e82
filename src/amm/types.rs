//! Tipos básicos do motor de cotação: quantidades exatas (BigUint), taxa e
//! snapshots de reserva fornecidos pelo chamador.

use num_bigint::BigUint;
use num_rational::BigRational;

use super::errors::Result;
use super::guardrails::ensure_fee_multiplier;

/// Quantidade inteira de precisão arbitrária (unidades on-chain).
pub type Amount = BigUint;
pub type Ppm = u32; // 0..=1_000_000

pub const FEE_SCALE: u32 = 10_000;
pub const DEFAULT_FEE_MULTIPLIER: u32 = 9_970; // 0,30%
pub const PPM_SCALE: Ppm = 1_000_000;

/// Fração da entrada que sobra após a taxa: `value / FEE_SCALE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeeMultiplier(u32);

impl FeeMultiplier {
    pub fn new(value: u32) -> Result<Self> {
        ensure_fee_multiplier(value)?;
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Taxa nominal em pontos percentuais: `(10000 - m) / 100` (9970 → 0.3).
    pub fn fee_percent(self) -> BigRational {
        BigRational::new(
            i64::from(FEE_SCALE - self.0).into(),
            100i64.into(),
        )
    }
}

impl Default for FeeMultiplier {
    fn default() -> Self {
        Self(DEFAULT_FEE_MULTIPLIER)
    }
}

/// Snapshot imutável de um pool token↔base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenReserve {
    pub base_reserve: Amount,
    pub token_reserve: Amount,
}

impl TokenReserve {
    pub fn new(base_reserve: impl Into<Amount>, token_reserve: impl Into<Amount>) -> Self {
        Self { base_reserve: base_reserve.into(), token_reserve: token_reserve.into() }
    }
}

/// Token informado pelo chamador junto com o pool contra o ativo base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenWithReserves {
    pub is_base_asset: bool,
    pub reserve: TokenReserve,
}

impl TokenWithReserves {
    /// O ativo nativo da rede. Não tem pool próprio.
    pub fn base_asset() -> Self {
        Self { is_base_asset: true, reserve: TokenReserve::default() }
    }

    pub fn pooled(base_reserve: impl Into<Amount>, token_reserve: impl Into<Amount>) -> Self {
        Self { is_base_asset: false, reserve: TokenReserve::new(base_reserve, token_reserve) }
    }

    #[inline]
    pub fn base_reserve(&self) -> &Amount {
        &self.reserve.base_reserve
    }

    #[inline]
    pub fn token_reserve(&self) -> &Amount {
        &self.reserve.token_reserve
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    ExactInput,
    ExactOutput,
}

impl Direction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExactInput => "exact_input",
            Self::ExactOutput => "exact_output",
        }
    }
}

/// Resultado que pode não existir por falta de liquidez no pool.
/// Caminho normal de retorno, não é erro.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Availability<T> {
    Available(T),
    InsufficientLiquidity,
}

impl<T> Availability<T> {
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn available(self) -> Option<T> {
        match self {
            Self::Available(v) => Some(v),
            Self::InsufficientLiquidity => None,
        }
    }

    pub fn as_ref(&self) -> Availability<&T> {
        match self {
            Self::Available(v) => Availability::Available(v),
            Self::InsufficientLiquidity => Availability::InsufficientLiquidity,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Availability<U> {
        match self {
            Self::Available(v) => Availability::Available(f(v)),
            Self::InsufficientLiquidity => Availability::InsufficientLiquidity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fee_is_thirty_bps() {
        let fee = FeeMultiplier::default();
        assert_eq!(fee.get(), 9_970);
        assert_eq!(fee.fee_percent(), BigRational::new(3.into(), 10.into()));
    }

    #[test]
    fn fee_multiplier_bounds() {
        assert!(FeeMultiplier::new(0).is_err());
        assert!(FeeMultiplier::new(FEE_SCALE + 1).is_err());
        assert!(FeeMultiplier::new(FEE_SCALE).is_ok());
        assert!(FeeMultiplier::new(1).is_ok());
    }

    #[test]
    fn availability_helpers() {
        let a: Availability<u32> = Availability::Available(3);
        assert_eq!(a.clone().map(|v| v * 2), Availability::Available(6));
        assert_eq!(a.available(), Some(3));
        let none: Availability<u32> = Availability::InsufficientLiquidity;
        assert!(!none.is_available());
        assert_eq!(none.available(), None);
    }
}
