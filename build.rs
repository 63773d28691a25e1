use chrono::Utc;

fn main() {
    // read back with env!("BUILD_TIME") for the footer's copyright year
    println!("cargo:rustc-env=BUILD_TIME={}", Utc::now().to_rfc3339());
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
