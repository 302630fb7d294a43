// build.rs

fn main() {
    // Only the X11 window backend links against system libraries.
    if std::env::var_os("CARGO_FEATURE_X11").is_none() {
        return;
    }

    // --- Link against X11 ---
    // Try pkg-config first, which is the standard way to find library linking
    // information on Unix-like systems. If it fails, fall back to plain linker
    // flags and hope the library is in a standard path.
    match pkg_config::probe_library("x11") {
        Ok(_) => {
            eprintln!("pkg-config found x11. Linking configured automatically.");
        }
        Err(e) => {
            eprintln!(
                "pkg-config failed for library 'x11' ({}). Falling back to manual linking.",
                e
            );
            println!("cargo:rustc-link-lib=X11");
            println!("cargo:rustc-link-search=/usr/lib");
        }
    }
}
