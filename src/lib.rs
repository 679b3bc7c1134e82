//! Motor de cotação de swaps para pools de produto constante: troca direta
//! contra o ativo base ou em duas pernas passando por ele.

pub mod amm;
pub mod telemetry;

pub use amm::config::{FeeOffset, QuoteConfig};
pub use amm::error::{AmmError, Result};
pub use amm::quote::{quote, Quote, QuoteEngine};
pub use amm::types::{Amount, Availability, Direction, FeeMultiplier, TokenReserve, TokenWithReserves};
