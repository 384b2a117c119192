use chrono::{DateTime, Utc};

fn main() {
    // Reproducible builds pin the timestamp through SOURCE_DATE_EPOCH
    let build_time = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    // Read by build_info for the footer copyright
    println!("cargo:rustc-env=BUILD_TIME={}", build_time.to_rfc3339());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
}
