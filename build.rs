fn main() {
    // Stamp the build time; the footer reads its year so server render and
    // hydration agree
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
}
