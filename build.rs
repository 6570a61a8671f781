use chrono::Datelike;

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now();

    // Also set as environment variables for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", build_time.year());

    // Rerun if build.rs or the embedded posts change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=blog");
}
