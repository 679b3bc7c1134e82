//! Seleção dos pools de uma troca a partir da identidade do ativo base.
//!
//! Três casos mutuamente exclusivos, testados nesta ordem:
//! 1. base → outro: pool do `token_out` (base entra, token sai)
//! 2. outro → base: pool do `token_in` (token entra, base sai)
//! 3. outro → outro: duas pernas encadeadas pelo ativo base

use core::fmt;

use super::types::{Amount, TokenWithReserves};

/// Reservas de um pool orientadas para o solver (entrada, saída).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservePair {
    pub input_reserve: Amount,
    pub output_reserve: Amount,
}

impl ReservePair {
    pub fn new(input_reserve: Amount, output_reserve: Amount) -> Self {
        Self { input_reserve, output_reserve }
    }

    /// Pool token↔base com o token entrando.
    fn token_to_base(token: &TokenWithReserves) -> Self {
        Self::new(token.token_reserve().clone(), token.base_reserve().clone())
    }

    /// Pool token↔base com o base entrando.
    fn base_to_token(token: &TokenWithReserves) -> Self {
        Self::new(token.base_reserve().clone(), token.token_reserve().clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteKind {
    DirectBaseIn,
    DirectBaseOut,
    Routed,
}

impl RouteKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DirectBaseIn => "direct_base_in",
            Self::DirectBaseOut => "direct_base_out",
            Self::Routed => "routed",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rota escolhida uma única vez por chamada.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    DirectBaseIn(ReservePair),
    DirectBaseOut(ReservePair),
    /// `first`: pool do token_in (token_in → base);
    /// `second`: pool do token_out (base → token_out).
    Routed { first: ReservePair, second: ReservePair },
}

impl Route {
    pub fn select(token_in: &TokenWithReserves, token_out: &TokenWithReserves) -> Self {
        if token_in.is_base_asset {
            Route::DirectBaseIn(ReservePair::base_to_token(token_out))
        } else if token_out.is_base_asset {
            Route::DirectBaseOut(ReservePair::token_to_base(token_in))
        } else {
            Route::Routed {
                first: ReservePair::token_to_base(token_in),
                second: ReservePair::base_to_token(token_out),
            }
        }
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::DirectBaseIn(_) => RouteKind::DirectBaseIn,
            Route::DirectBaseOut(_) => RouteKind::DirectBaseOut,
            Route::Routed { .. } => RouteKind::Routed,
        }
    }

    /// Pernas na ordem do fluxo de exact-input (token_in primeiro).
    /// Para exact-output, percorra em ordem reversa.
    pub fn legs(&self) -> Vec<&ReservePair> {
        match self {
            Route::DirectBaseIn(pair) | Route::DirectBaseOut(pair) => vec![pair],
            Route::Routed { first, second } => vec![first, second],
        }
    }

    pub fn hop_count(&self) -> usize {
        match self {
            Route::Routed { .. } => 2,
            _ => 1,
        }
    }
}
