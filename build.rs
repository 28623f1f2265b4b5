use chrono::{DateTime, Utc};

fn main() {
    // Reproducible builds pin the stamp through SOURCE_DATE_EPOCH
    let stamp = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    // Read back by `content::build_year` for the footer
    println!("cargo:rustc-env=BUILD_TIME={}", stamp.to_rfc3339());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
}
