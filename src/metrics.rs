//! OpenTelemetry metrics for schema provisioning.

use opentelemetry::metrics::{Counter, Histogram, Meter};

/// Metrics recorded while applying the schema.
pub struct ProvisionMetrics {
    /// Collections created (collections already present are not counted)
    pub collections_created: Counter<u64>,

    /// Indexes ensured across all collections
    pub indexes_ensured: Counter<u64>,

    /// Failed provisioning runs
    pub provision_errors: Counter<u64>,

    /// Wall-clock duration of a provisioning run (seconds)
    pub provision_latency: Histogram<f64>,
}

impl ProvisionMetrics {
    /// Register metrics with the global meter provider.
    pub fn register() -> Self {
        let meter = opentelemetry::global::meter("crimedb.provision");
        Self::register_with_meter(&meter)
    }

    /// Register metrics with a specific meter (useful for testing).
    pub fn register_with_meter(meter: &Meter) -> Self {
        Self {
            collections_created: meter
                .u64_counter("crimedb_collections_created")
                .with_description("Collections created by the provisioner")
                .build(),
            indexes_ensured: meter
                .u64_counter("crimedb_indexes_ensured")
                .with_description("Indexes ensured by the provisioner")
                .build(),
            provision_errors: meter
                .u64_counter("crimedb_provision_errors")
                .with_description("Failed provisioning runs")
                .build(),
            provision_latency: meter
                .f64_histogram("crimedb_provision_latency_seconds")
                .with_description("Provisioning run duration in seconds")
                .build(),
        }
    }
}
