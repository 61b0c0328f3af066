use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FFRUN_FFMPEG_LIB_DIR");
    println!("cargo::rustc-check-cfg=cfg(ffmpeg_linked)");

    // Check for a pre-built static FFmpeg first (FFRUN_FFMPEG_LIB_DIR points at
    // a vcpkg-style lib directory), then fall back to the in-repo location.
    let lib_dir = match env::var_os("FFRUN_FFMPEG_LIB_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from("native/lib"),
    };

    let archive = lib_dir.join("libffmpeg_entry.a");
    let archive_msvc = lib_dir.join("ffmpeg_entry.lib");
    if !archive.exists() && !archive_msvc.exists() {
        // Without the archive the crate still builds; invoking the entry
        // point then fails at runtime with an FFI error.
        println!(
            "cargo:warning=no ffmpeg_entry archive in {}; building without the embedded FFmpeg",
            lib_dir.display()
        );
        return;
    }

    println!("cargo:rustc-cfg=ffmpeg_linked");

    // Tell Rust where to find the libraries
    println!("cargo:rustc-link-search=native={}", lib_dir.display());
    println!("cargo:rustc-link-lib=static=ffmpeg_entry");

    // FFmpeg component libraries, dependents before their dependencies
    for lib in [
        "avfilter",
        "avformat",
        "avcodec",
        "swresample",
        "swscale",
        "avutil",
        "x264",
    ] {
        println!("cargo:rustc-link-lib=static={lib}");
    }

    // Link system libraries that the static FFmpeg build needs
    let target = env::var("TARGET")
        .unwrap_or_else(|_| env::var("HOST").expect("Neither TARGET nor HOST set by cargo"));

    if target.contains("windows") {
        // Windows-specific libraries
        println!("cargo:rustc-link-lib=ws2_32");
        println!("cargo:rustc-link-lib=bcrypt");
        println!("cargo:rustc-link-lib=secur32");
        println!("cargo:rustc-link-lib=mfuuid");
        println!("cargo:rustc-link-lib=strmiids");
    } else {
        // Unix-like systems
        println!("cargo:rustc-link-lib=pthread");
        println!("cargo:rustc-link-lib=m");
        println!("cargo:rustc-link-lib=dl");
        println!("cargo:rustc-link-lib=z");

        if target.contains("apple") || target.contains("darwin") {
            // macOS hardware codecs and their supporting frameworks
            println!("cargo:rustc-link-lib=framework=CoreFoundation");
            println!("cargo:rustc-link-lib=framework=CoreMedia");
            println!("cargo:rustc-link-lib=framework=CoreVideo");
            println!("cargo:rustc-link-lib=framework=VideoToolbox");
            println!("cargo:rustc-link-lib=framework=AudioToolbox");
            println!("cargo:rustc-link-lib=framework=Security");
        }
    }
}
