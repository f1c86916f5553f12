// Stamps the faqctl version into the binary for `faqctl --version`.

fn main() {
    // FAQCTL_VERSION in the build environment overrides the crate version
    let version = match std::env::var("FAQCTL_VERSION") {
        Ok(v) if !v.trim().is_empty() => v,
        _ => env!("CARGO_PKG_VERSION").to_string(),
    };
    println!("cargo:rustc-env=FAQCTL_VERSION={}", version.trim());
    println!("cargo:rerun-if-env-changed=FAQCTL_VERSION");
}
