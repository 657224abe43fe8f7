use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static INQUIRIES_SUBMITTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "site_inquiries_submitted_total",
        "Total contact-form inquiries recorded"
    )
    .expect("register inquiries_submitted_total")
});

pub static INQUIRIES_REJECTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "site_inquiries_rejected_total",
        "Total inquiry submissions rejected by validation"
    )
    .expect("register inquiries_rejected_total")
});

pub static CONTENT_UPSERTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "site_content_upserts_total",
        "Total content section upserts"
    )
    .expect("register content_upserts_total")
});

pub static CONTENT_NOT_FOUND_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "site_content_not_found_total",
        "Total lookups of unknown content sections"
    )
    .expect("register content_not_found_total")
});

/// Touch every counter so they show up in `/metrics` before first use.
pub fn init() {
    Lazy::force(&INQUIRIES_SUBMITTED_TOTAL);
    Lazy::force(&INQUIRIES_REJECTED_TOTAL);
    Lazy::force(&CONTENT_UPSERTS_TOTAL);
    Lazy::force(&CONTENT_NOT_FOUND_TOTAL);
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_output_names_site_counters() {
        init();
        CONTENT_UPSERTS_TOTAL.inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("site_content_upserts_total"));
        assert!(body.contains("site_inquiries_submitted_total"));
    }
}
