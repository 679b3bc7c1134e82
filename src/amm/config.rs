//! Configuração do motor de cotação: taxa do pool e desconto de taxa no slippage.
//! Lida do ambiente por `QuoteConfig::from_env`.

use std::str::FromStr;

use num_rational::BigRational;
use rust_decimal::Decimal;

use crate::amm_err;

use super::errors::{AmmErrorCode, Result};
use super::guardrails::ratio_from_decimal;
use super::types::FeeMultiplier;

pub const ENV_FEE_MULTIPLIER: &str = "AMM_FEE_MULTIPLIER";
pub const ENV_SLIPPAGE_FEE_OFFSET: &str = "AMM_SLIPPAGE_FEE_OFFSET";

/// Quanto descontar do slippage bruto para isolar o impacto de preço.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FeeOffset {
    /// `(10000 - fee_multiplier) / 100` pontos percentuais.
    #[default]
    Derived,
    /// Constante fixa, independente da taxa (ex.: `0.3`).
    Fixed(BigRational),
}

impl FromStr for FeeOffset {
    type Err = super::errors::AmmError;

    fn from_str(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("derived") {
            return Ok(FeeOffset::Derived);
        }
        Decimal::from_str(raw)
            .map(|d| FeeOffset::Fixed(ratio_from_decimal(d)))
            .map_err(|e| amm_err!(AmmErrorCode::InvalidConfig, {
                ENV_SLIPPAGE_FEE_OFFSET => raw,
                "reason" => e,
            }))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct QuoteConfig {
    pub fee_multiplier: FeeMultiplier,
    pub fee_offset: FeeOffset,
}

impl QuoteConfig {
    pub fn new(fee_multiplier: FeeMultiplier, fee_offset: FeeOffset) -> Self {
        Self { fee_multiplier, fee_offset }
    }

    /// Lê `AMM_FEE_MULTIPLIER` e `AMM_SLIPPAGE_FEE_OFFSET`; ausentes usam o default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual a `from_env`, com a origem das variáveis injetada.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fee_multiplier = match lookup(ENV_FEE_MULTIPLIER) {
            Some(raw) => {
                let value = raw.trim().parse::<u32>().map_err(|e| {
                    amm_err!(AmmErrorCode::InvalidConfig, {
                        ENV_FEE_MULTIPLIER => raw.as_str(),
                        "reason" => e,
                    })
                })?;
                FeeMultiplier::new(value)?
            }
            None => FeeMultiplier::default(),
        };
        let fee_offset = match lookup(ENV_SLIPPAGE_FEE_OFFSET) {
            Some(raw) => raw.parse()?,
            None => FeeOffset::Derived,
        };
        Ok(Self { fee_multiplier, fee_offset })
    }

    /// Pontos percentuais subtraídos do slippage bruto.
    pub fn fee_offset_percent(&self) -> BigRational {
        match &self.fee_offset {
            FeeOffset::Derived => self.fee_multiplier.fee_percent(),
            FeeOffset::Fixed(value) => value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into())
    }

    #[test]
    fn defaults_match_thirty_bps_pool() {
        let cfg = QuoteConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, QuoteConfig::default());
        assert_eq!(cfg.fee_offset_percent(), ratio(3, 10));
    }

    #[test]
    fn derived_offset_follows_fee() {
        let cfg = QuoteConfig::from_lookup(lookup_from(&[(ENV_FEE_MULTIPLIER, "9975")])).unwrap();
        assert_eq!(cfg.fee_offset_percent(), ratio(1, 4));
    }

    #[test]
    fn fixed_offset_ignores_fee() {
        let cfg = QuoteConfig::from_lookup(lookup_from(&[
            (ENV_FEE_MULTIPLIER, "9900"),
            (ENV_SLIPPAGE_FEE_OFFSET, "0.3"),
        ]))
        .unwrap();
        assert_eq!(cfg.fee_multiplier.get(), 9_900);
        assert_eq!(cfg.fee_offset_percent(), ratio(3, 10));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = QuoteConfig::from_lookup(lookup_from(&[(ENV_FEE_MULTIPLIER, "abc")])).unwrap_err();
        assert_eq!(err.code, AmmErrorCode::InvalidConfig);
        assert_eq!(err.context.get(ENV_FEE_MULTIPLIER).unwrap(), "abc");

        let err = QuoteConfig::from_lookup(lookup_from(&[(ENV_FEE_MULTIPLIER, "20000")])).unwrap_err();
        assert_eq!(err.code, AmmErrorCode::InvalidFee);

        let err = QuoteConfig::from_lookup(lookup_from(&[(ENV_SLIPPAGE_FEE_OFFSET, "x.y")])).unwrap_err();
        assert_eq!(err.code, AmmErrorCode::InvalidConfig);
    }

    #[test]
    fn offset_parse_is_case_insensitive() {
        assert_eq!(" Derived ".parse::<FeeOffset>().unwrap(), FeeOffset::Derived);
    }
}
