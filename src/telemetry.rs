use anyhow::Result;
use once_cell::sync::OnceCell;
use std::time::Duration;

use opentelemetry::{
    global,
    metrics::{Counter, Histogram, MeterProvider},
    trace::TracerProvider as _,
    KeyValue,
};
use opentelemetry_otlp::{MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    metrics::{PeriodicReader, SdkMeterProvider},
    resource::Resource,
    trace::SdkTracerProvider,
};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

const SCOPE: &str = "swap_quote_core";

/// Instrumentos registrados pelo motor de cotação.
pub struct QuoteInstruments {
    pub quote_latency_ms: Histogram<f64>,
    pub slippage_percent: Histogram<f64>,
    pub insufficient_liquidity: Counter<u64>,
}

static INSTRUMENTS: OnceCell<QuoteInstruments> = OnceCell::new();

pub struct Telemetry {
    pub tracer_provider: SdkTracerProvider,
    pub meter_provider: SdkMeterProvider,
}

impl Telemetry {
    pub fn shutdown(&self) {
        let _ = self.meter_provider.force_flush();
        let _ = self.meter_provider.shutdown();
        let _ = self.tracer_provider.shutdown();
    }
}

pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn commit_sha() -> String {
    std::env::var("CE_COMMIT_SHA").unwrap_or_else(|_| "unknown".into())
}

/// Só logs em stdout, sem exportação OTLP.
pub fn init_fmt() -> Result<()> {
    let subscriber = Registry::default()
        .with(filter_from_env())
        .with(tracing_subscriber::fmt::layer().with_target(false));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

pub fn init(service_name: &str) -> Result<Telemetry> {
    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4318".to_string());

    let resource = Resource::builder()
        .with_attributes([
            KeyValue::new("service.name", service_name.to_string()),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            KeyValue::new("git.commit.sha", commit_sha()),
        ])
        .build();

    // ---- Traces (OTLP/HTTP) ----
    let span_exporter = SpanExporter::builder()
        .with_http()
        .with_endpoint(format!("{}/v1/traces", endpoint))
        .build()?;

    let tracer_provider = SdkTracerProvider::builder()
        .with_resource(resource.clone())
        .with_batch_exporter(span_exporter)
        .build();

    let tracer = tracer_provider.tracer(SCOPE);

    // ---- Métricas (OTLP/HTTP) ----
    let metric_exporter = MetricExporter::builder()
        .with_http()
        .with_endpoint(format!("{}/v1/metrics", endpoint))
        .build()?;

    let reader = PeriodicReader::builder(metric_exporter)
        .with_interval(Duration::from_secs(10))
        .build();

    let meter_provider = SdkMeterProvider::builder()
        .with_resource(resource)
        .with_reader(reader)
        .build();

    global::set_tracer_provider(tracer_provider.clone());
    global::set_meter_provider(meter_provider.clone());

    // tracing -> OTel
    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let subscriber = Registry::default()
        .with(filter_from_env())
        .with(fmt_layer)
        .with(otel_layer);
    let _ = tracing::subscriber::set_global_default(subscriber);

    let meter = meter_provider.meter(SCOPE);
    let instruments = QuoteInstruments {
        quote_latency_ms: meter
            .f64_histogram("quote_latency_ms")
            .with_unit("ms")
            .with_description("Latency of quote computations in ms")
            .build(),
        slippage_percent: meter
            .f64_histogram("quote_slippage_percent")
            .with_unit("%")
            .with_description("Displayed slippage per priced quote")
            .build(),
        insufficient_liquidity: meter
            .u64_counter("quote_insufficient_liquidity")
            .with_description("Exact-output quotes the pool could not fill")
            .build(),
    };
    let _ = INSTRUMENTS.set(instruments);

    Ok(Telemetry { tracer_provider, meter_provider })
}

/// Span INFO com nome **estático** (exigência do tracing); direção e rota
/// vão como campos. Inclui `git_commit_sha`.
pub fn quote_span(direction: &str, route: &str) -> tracing::Span {
    tracing::span!(
        target: "swap_quote_core",
        Level::INFO,
        "quote",
        git_commit_sha = %commit_sha(),
        direction = direction,
        route = route,
    )
}

/// Registra uma cotação. No-op se `init` não foi chamado.
pub fn record_quote(direction: &'static str, route: &'static str, latency_ms: f64, slippage_percent: Option<f64>) {
    let Some(instruments) = INSTRUMENTS.get() else { return };
    let attrs = [KeyValue::new("direction", direction), KeyValue::new("route", route)];
    instruments.quote_latency_ms.record(latency_ms, &attrs);
    match slippage_percent {
        Some(pct) => instruments.slippage_percent.record(pct, &attrs),
        None => instruments.insufficient_liquidity.add(1, &attrs),
    }
}
