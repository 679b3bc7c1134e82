//! Compat: reexporta o módulo de erros unificado.

pub use super::error::{AmmError, Result};
pub use super::error_catalog::{default_locale_message, AmmErrorCode};
pub use super::error_map::{from_fee_multiplier, from_pool_reserves, to_error};
