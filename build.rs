//! Build script for the reflex game firmware
//!
//! Handles:
//! - Linker scripts for the Cortex-M binary (memory layout comes from
//!   embassy-stm32's `memory-x` feature)

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only the firmware binary links for the target
    if std::env::var("CARGO_FEATURE_EMBEDDED").is_ok() {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
