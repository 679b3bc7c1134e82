//! Catálogo imutável de erros do motor de cotação.
use core::fmt;

/// Código de erro do AMM.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum AmmErrorCode {
    /// Alguma reserva de um pool usado na rota é zero.
    EmptyReserve,
    /// Valor de referência sem slippage é zero; percentual indefinido.
    DegenerateQuote,
    /// Multiplicador de taxa fora de 1..=10000.
    InvalidFee,
    /// Valor de configuração ilegível.
    InvalidConfig,
    /// Valor não cabe na representação de exibição.
    OverflowNumeric,
}

impl AmmErrorCode {
    /// Código textual estável do erro.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyReserve => "AMM-0001",
            Self::DegenerateQuote => "AMM-0002",
            Self::InvalidFee => "AMM-0003",
            Self::InvalidConfig => "AMM-0004",
            Self::OverflowNumeric => "AMM-0005",
        }
    }

    /// Título curto em português.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::EmptyReserve => "Reserva vazia",
            Self::DegenerateQuote => "Cotação degenerada",
            Self::InvalidFee => "Taxa inválida",
            Self::InvalidConfig => "Configuração inválida",
            Self::OverflowNumeric => "Overflow numérico",
        }
    }

    /// Mensagem base em português.
    pub const fn message_pt(&self) -> &'static str {
        match self {
            Self::EmptyReserve => "reservas do pool devem ser > 0",
            Self::DegenerateQuote => "valor de referência sem slippage é 0",
            Self::InvalidFee => "fee_multiplier deve estar em 1..=10000",
            Self::InvalidConfig => "valor de configuração inválido",
            Self::OverflowNumeric => "valor excede a precisão de exibição",
        }
    }

    /// Indica se o chamador pode tentar de novo com reservas atualizadas.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::EmptyReserve | Self::DegenerateQuote)
    }

    /// Retorna todas as variantes em ordem estável.
    pub fn all() -> &'static [AmmErrorCode] {
        const ALL: &[AmmErrorCode] = &[
            AmmErrorCode::EmptyReserve,
            AmmErrorCode::DegenerateQuote,
            AmmErrorCode::InvalidFee,
            AmmErrorCode::InvalidConfig,
            AmmErrorCode::OverflowNumeric,
        ];
        ALL
    }
}

impl fmt::Display for AmmErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Mensagem padrão na localidade ativa (pt-BR).
pub fn default_locale_message(code: AmmErrorCode) -> &'static str {
    code.message_pt()
}
