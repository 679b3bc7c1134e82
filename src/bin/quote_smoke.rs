use anyhow::Result;
use tracing::{info, span, warn, Level};

use swap_quote_core::amm::types::{Availability, Direction, TokenWithReserves};
use swap_quote_core::{telemetry, Amount, QuoteConfig, QuoteEngine};

fn main() -> Result<()> {
    // OTLP só quando houver coletor configurado
    let handle = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(_) => Some(telemetry::init("swap-quote-core")?),
        Err(_) => {
            telemetry::init_fmt()?;
            None
        }
    };

    let config = QuoteConfig::from_env()?;
    let engine = QuoteEngine::new(config);

    let span = span!(Level::INFO, "smoke_span", otel.name = "quote_smoke");
    let _e = span.enter();

    let base = TokenWithReserves::base_asset();
    let token_a = TokenWithReserves::pooled(500_000u64, 1_000_000u64);
    let token_b = TokenWithReserves::pooled(200_000u64, 50_000u64);

    let cases: [(&str, &TokenWithReserves, &TokenWithReserves, u64, Direction); 5] = [
        ("base->a", &base, &token_a, 1_000, Direction::ExactInput),
        ("a->base", &token_a, &base, 1_000, Direction::ExactInput),
        ("a->b", &token_a, &token_b, 1_000, Direction::ExactInput),
        ("a->b out", &token_a, &token_b, 100, Direction::ExactOutput),
        ("a->b drain", &token_a, &token_b, 50_000, Direction::ExactOutput),
    ];

    for (label, token_in, token_out, amount, direction) in cases {
        match engine.quote(token_in, token_out, &Amount::from(amount), direction) {
            Ok(Availability::Available(q)) => info!(
                case = label,
                route = %q.route,
                expected = %q.expected_amount,
                spot = %q.spot_amount,
                slippage = %q.expected_slippage_percent,
                "cotação"
            ),
            Ok(Availability::InsufficientLiquidity) => info!(case = label, "liquidez insuficiente"),
            Err(err) => warn!(case = label, error = %err.to_log_json(), "falha na cotação"),
        }
    }

    if let Some(handle) = handle {
        handle.shutdown();
    }
    Ok(())
}
