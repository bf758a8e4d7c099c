// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font/ICU code needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (font manager lookups)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
