use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: availability lookups served. Labels: none.
pub const AVAILABILITY_QUERIES_TOTAL: &str = "roomrack_availability_queries_total";

/// Counter: fully-occupied-date scans served.
pub const OCCUPANCY_QUERIES_TOTAL: &str = "roomrack_occupancy_queries_total";

/// Counter: bookings created and persisted.
pub const BOOKINGS_CREATED_TOTAL: &str = "roomrack_bookings_created_total";

/// Counter: booking requests turned away for lack of vacancy.
pub const BOOKINGS_REJECTED_TOTAL: &str = "roomrack_bookings_rejected_total";

/// Histogram: engine operation latency in seconds.
pub const QUERY_DURATION_SECONDS: &str = "roomrack_query_duration_seconds";

/// Install the fmt log subscriber and, when a port is given, the Prometheus
/// metrics exporter. Call once from the embedding process.
pub fn init(metrics_port: Option<u16>) {
    tracing_subscriber::fmt::init();

    let Some(port) = metrics_port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
