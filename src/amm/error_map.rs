//! Mapeamento entre condições de domínio e códigos de erro do AMM.
use num_traits::Zero;

use crate::amm::error::AmmError;
use crate::amm::error_catalog::AmmErrorCode;
use crate::amm::types::{Amount, FEE_SCALE};

/// Determina o código de erro para um pool a partir das reservas brutas.
pub fn from_pool_reserves(input_reserve: &Amount, output_reserve: &Amount) -> Option<AmmErrorCode> {
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Some(AmmErrorCode::EmptyReserve);
    }
    None
}

/// Determina o código de erro para um multiplicador de taxa bruto.
pub fn from_fee_multiplier(value: u32) -> Option<AmmErrorCode> {
    if value == 0 || value > FEE_SCALE {
        return Some(AmmErrorCode::InvalidFee);
    }
    None
}

/// Constrói um [`AmmError`] diretamente de um código.
pub fn to_error(code: AmmErrorCode) -> AmmError {
    AmmError::new(code)
}
