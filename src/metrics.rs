use metrics::{counter, describe_counter};

/// Register metric descriptions (can be called multiple times safely).
///
/// The library never installs a recorder; these are no-ops until the host
/// application installs one.
pub fn init_metric_descriptions() {
    describe_counter!(
        "gallery_fetch_total",
        "Total number of gallery listing fetches"
    );
    describe_counter!(
        "gallery_cache_reads_total",
        "Total number of photo cache reads"
    );
    describe_counter!(
        "quotes_total",
        "Total number of package quotes produced"
    );
    describe_counter!(
        "inquiries_total",
        "Total number of booking inquiries submitted"
    );
}

/// Record a listing fetch
pub fn record_fetch(kind: &str, outcome: &str) {
    counter!(
        "gallery_fetch_total",
        "kind" => kind.to_string(),
        "outcome" => outcome.to_string(),
    )
    .increment(1);
}

/// Record a cache read
pub fn record_cache_read(hit: bool) {
    counter!(
        "gallery_cache_reads_total",
        "hit" => if hit { "true" } else { "false" },
    )
    .increment(1);
}

/// Record a produced quote
pub fn record_quote(event: &str) {
    counter!("quotes_total", "event" => event.to_string()).increment(1);
}

/// Record an inquiry submission
pub fn record_inquiry(outcome: &str) {
    counter!("inquiries_total", "outcome" => outcome.to_string()).increment(1);
}
