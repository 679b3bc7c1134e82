//! Tipo de erro unificado do AMM com formatação estável.
use core::fmt;
use std::collections::BTreeMap;

use serde_json::json;

use crate::amm::error_catalog::{default_locale_message, AmmErrorCode};

const CONTEXT_VALUE_MAX: usize = 256;

fn sanitize_value(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|ch| if matches!(ch, '\n' | '\r' | '\t') { ' ' } else { ch })
        .collect();
    if cleaned.chars().count() > CONTEXT_VALUE_MAX {
        let mut truncated: String = cleaned.chars().take(CONTEXT_VALUE_MAX - 1).collect();
        truncated.push('…');
        truncated
    } else {
        cleaned
    }
}

fn render_template(template: &str, context: &BTreeMap<String, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match context.get(key) {
                    Some(value) if !key.is_empty() => rendered.push_str(value),
                    // placeholder desconhecido fica como está
                    _ => {
                        rendered.push('{');
                        rendered.push_str(key);
                        rendered.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                rendered.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    rendered.push_str(rest);
    rendered
}

/// Erro do AMM com contexto estruturado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmmError {
    pub code: AmmErrorCode,
    pub context: BTreeMap<String, String>,
}

impl AmmError {
    /// Cria um novo erro sem contexto adicional.
    pub fn new(code: AmmErrorCode) -> Self {
        Self { code, context: BTreeMap::new() }
    }

    /// Adiciona um par chave/valor ao contexto.
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let key = key.into();
        if !key.is_empty() {
            self.context.insert(key, sanitize_value(&value.to_string()));
        }
        self
    }

    fn resolved_message(&self) -> String {
        render_template(default_locale_message(self.code), &self.context)
    }

    /// Mensagem curta para UI.
    pub fn to_user_string(&self) -> String {
        format!("[{}] {}", self.code.code(), self.resolved_message())
    }

    /// Renderiza um template arbitrário usando o contexto atual.
    pub fn render_with_template(&self, template: &str) -> String {
        render_template(template, &self.context)
    }

    /// Serialização estável em JSON para logs (chaves ordenadas).
    pub fn to_log_json(&self) -> String {
        json!({
            "code": self.code.code(),
            "title": self.code.title(),
            "message": self.resolved_message(),
            "context": self.context,
        })
        .to_string()
    }
}

impl fmt::Display for AmmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_user_string())
    }
}

impl std::error::Error for AmmError {}

impl From<AmmErrorCode> for AmmError {
    fn from(code: AmmErrorCode) -> Self {
        AmmError::new(code)
    }
}

/// Resultado padrão para operações do AMM.
pub type Result<T> = std::result::Result<T, AmmError>;

#[macro_export]
macro_rules! amm_err {
  ($code:expr) => {{
    $crate::amm::error::AmmError::new($code)
  }};
  ($code:expr, $($key:ident => $value:expr),+ $(,)?) => {{
    let mut err = $crate::amm::error::AmmError::new($code);
    $(
      err = err.with_context(stringify!($key), $value);
    )+
    err
  }};
  ($code:expr, { $($key:expr => $value:expr),+ $(,)? }) => {{
    let mut err = $crate::amm::error::AmmError::new($code);
    $(
      err = err.with_context($key, $value);
    )+
    err
  }};
}

#[macro_export]
macro_rules! amm_bail {
  ($($tt:tt)*) => {
    return Err($crate::amm_err!($($tt)*))
  };
}
