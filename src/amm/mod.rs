pub mod types;
pub mod errors;        // Shim de compat: reexports da API unificada
pub mod guardrails;
pub mod swap;          // solver de produto constante
pub mod router;        // escolha de pool(s) pelo ativo base
pub mod pricing;       // valor à vista, slippage, tolerâncias
pub mod config;
pub mod quote;

// módulos unificados de erro
pub mod error_catalog;
pub mod error;
pub mod error_map;

// referência racional exata (oráculo de testes)
pub mod ref_golden;
