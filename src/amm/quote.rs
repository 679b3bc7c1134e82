//! Motor de cotação: combina roteador, solver e valor à vista numa cotação
//! para o chamador (UI/serviço). Sem estado; mesma entrada, mesma saída.

use std::time::Instant;

use num_traits::ToPrimitive;
use tracing::debug;

use crate::telemetry;

use super::config::QuoteConfig;
use super::errors::Result;
use super::guardrails::ensure_reserves;
use super::pricing::{
    max_in_with_tolerance, min_out_with_tolerance, slippage_from_input, slippage_from_output, spot_input,
    spot_output, SlippagePercent,
};
use super::router::{Route, RouteKind};
use super::swap::{compute_input, compute_output};
use super::types::{Amount, Availability, Direction, Ppm, TokenWithReserves};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub direction: Direction,
    pub route: RouteKind,
    /// Exact-input: saída esperada. Exact-output: entrada necessária.
    pub expected_amount: Amount,
    /// Mesmo lado de `expected_amount`, sem curva e sem taxa.
    pub spot_amount: Amount,
    pub expected_slippage_percent: SlippagePercent,
}

impl Quote {
    /// Limite a enviar junto da transação: `min_out` em exact-input,
    /// `max_in` em exact-output.
    pub fn limit_amount(&self, tolerance_ppm: Ppm) -> Amount {
        match self.direction {
            Direction::ExactInput => min_out_with_tolerance(&self.expected_amount, tolerance_ppm),
            Direction::ExactOutput => max_in_with_tolerance(&self.expected_amount, tolerance_ppm),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct QuoteEngine {
    config: QuoteConfig,
}

impl QuoteEngine {
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    pub fn quote(
        &self,
        token_in: &TokenWithReserves,
        token_out: &TokenWithReserves,
        amount: &Amount,
        direction: Direction,
    ) -> Result<Availability<Quote>> {
        match direction {
            Direction::ExactInput => self.quote_from_input(token_in, token_out, amount).map(Availability::Available),
            Direction::ExactOutput => self.quote_from_output(token_in, token_out, amount),
        }
    }

    /// Cotação com entrada fixa. Sempre existe (a curva nunca drena o pool).
    pub fn quote_from_input(
        &self,
        token_in: &TokenWithReserves,
        token_out: &TokenWithReserves,
        input_amount: &Amount,
    ) -> Result<Quote> {
        let route = Route::select(token_in, token_out);
        let span = telemetry::quote_span(Direction::ExactInput.as_str(), route.kind().as_str());
        let _guard = span.enter();
        let started = Instant::now();

        let legs = route.legs();
        for leg in &legs {
            ensure_reserves(&leg.input_reserve, &leg.output_reserve)?;
        }

        let fee = self.config.fee_multiplier;
        let mut expected = input_amount.clone();
        let mut spot = input_amount.clone();
        for leg in &legs {
            expected = compute_output(&expected, &leg.input_reserve, &leg.output_reserve, fee)?;
            spot = spot_output(&spot, &leg.input_reserve, &leg.output_reserve)?;
        }

        let slippage = slippage_from_output(&spot, &expected, &self.config.fee_offset_percent())?;
        debug!(
            route = %route.kind(),
            input = %input_amount,
            expected_output = %expected,
            spot_output = %spot,
            slippage = %slippage,
            "quote from input"
        );
        self.record(Direction::ExactInput, route.kind(), started, Some(&slippage));

        Ok(Quote {
            direction: Direction::ExactInput,
            route: route.kind(),
            expected_amount: expected,
            spot_amount: spot,
            expected_slippage_percent: slippage,
        })
    }

    /// Cotação com saída fixa. Pernas percorridas de trás para frente; se
    /// alguma exigir drenar o pool, retorna `InsufficientLiquidity`.
    pub fn quote_from_output(
        &self,
        token_in: &TokenWithReserves,
        token_out: &TokenWithReserves,
        output_amount: &Amount,
    ) -> Result<Availability<Quote>> {
        let route = Route::select(token_in, token_out);
        let span = telemetry::quote_span(Direction::ExactOutput.as_str(), route.kind().as_str());
        let _guard = span.enter();
        let started = Instant::now();

        let legs = route.legs();
        for leg in &legs {
            ensure_reserves(&leg.input_reserve, &leg.output_reserve)?;
        }

        let fee = self.config.fee_multiplier;
        let mut expected = output_amount.clone();
        let mut spot = output_amount.clone();
        for leg in legs.iter().rev() {
            expected = match compute_input(&expected, &leg.input_reserve, &leg.output_reserve, fee)? {
                Availability::Available(required) => required,
                Availability::InsufficientLiquidity => {
                    debug!(
                        route = %route.kind(),
                        output = %output_amount,
                        leg_output = %expected,
                        leg_reserve = %leg.output_reserve,
                        "insufficient liquidity"
                    );
                    self.record(Direction::ExactOutput, route.kind(), started, None);
                    return Ok(Availability::InsufficientLiquidity);
                }
            };
            spot = spot_input(&spot, &leg.input_reserve, &leg.output_reserve)?;
        }

        let slippage = slippage_from_input(&expected, &spot, &self.config.fee_offset_percent())?;
        debug!(
            route = %route.kind(),
            output = %output_amount,
            expected_input = %expected,
            spot_input = %spot,
            slippage = %slippage,
            "quote from output"
        );
        self.record(Direction::ExactOutput, route.kind(), started, Some(&slippage));

        Ok(Availability::Available(Quote {
            direction: Direction::ExactOutput,
            route: route.kind(),
            expected_amount: expected,
            spot_amount: spot,
            expected_slippage_percent: slippage,
        }))
    }

    fn record(&self, direction: Direction, route: RouteKind, started: Instant, slippage: Option<&SlippagePercent>) {
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
        let pct = slippage.and_then(|s| s.as_ratio().to_f64());
        telemetry::record_quote(direction.as_str(), route.as_str(), latency_ms, pct);
    }
}

/// Cotação com a configuração padrão (taxa 0,30%).
pub fn quote(
    token_in: &TokenWithReserves,
    token_out: &TokenWithReserves,
    amount: &Amount,
    direction: Direction,
) -> Result<Availability<Quote>> {
    QuoteEngine::default().quote(token_in, token_out, amount, direction)
}
