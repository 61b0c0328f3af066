//! FFmpeg-Rust FFI bridge for in-process media processing.
//!
//! This crate provides a safe Rust interface to a statically linked FFmpeg
//! command-line tool. It handles all FFI operations, memory management, and
//! error handling for calling the C entry point from Rust: arguments are
//! marshaled into an owned `argc`/`argv` pair, the entry point runs
//! synchronously in-process, and its exit status comes back verbatim.
//!
//! # Availability
//!
//! The build script looks for an `ffmpeg_entry` archive in the directory
//! named by `FFRUN_FFMPEG_LIB_DIR`, falling back to the crate-local
//! `native/lib`. When neither holds one the crate still builds, and every
//! invocation returns [`Error::Ffi`] instead of linking against a symbol
//! that is not there.
//!
//! # Thread safety
//!
//! The embedded tool keeps process-global state, so invocations are
//! serialized internally; concurrent callers queue up rather than run in
//! parallel. Stock fftools builds terminate the process through `exit()`
//! for informational options such as `-version` and `-h`, which no bridge
//! code can intercept. Builds intended for embedding patch that path out.
//!
//! # Usage
//!
//! ```no_run
//! fn main() -> ffrun_libffmpeg_ffi_bridge::Result<()> {
//!     let status = ffrun_libffmpeg_ffi_bridge::run(&[
//!         "-i",
//!         "input.mp4",
//!         "-vf",
//!         "scale=1280:720",
//!         "output.mp4",
//!     ])?;
//!     println!("ffmpeg exited with status {status}");
//!     Ok(())
//! }
//! ```

mod argv;
mod entry;

pub use argv::OwnedArgv;
pub use ffrun_core::{Error, Result};

use ffrun_core::ENTRY_SYMBOL_NAME;

/// Runs the embedded FFmpeg tool with `args` as its command line.
///
/// `args` hold exactly what would follow `ffmpeg` on a shell command line;
/// the program-name slot is added internally. The call blocks until the
/// tool finishes and returns its exit status without interpretation, so a
/// nonzero status is an `Ok` carrying the tool's own verdict, not an error.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if an argument contains an interior NUL
/// byte, `Error::ArgumentCount` if the list is too long to describe with a
/// native `argc`, and `Error::Ffi` if the entry point is not linked into
/// this build.
pub fn run<S: AsRef<str>>(args: &[S]) -> Result<i32> {
    let mut argv = OwnedArgv::new(args)?;
    entry::invoke(&mut argv)
}

/// Runs the embedded FFmpeg tool on a blocking worker thread.
///
/// Same contract as [`run`], offloaded through `spawn_blocking` so async
/// callers do not stall their runtime. Dropping the returned future does
/// not cancel the native run.
pub async fn run_async<S: AsRef<str>>(args: &[S]) -> Result<i32> {
    let args: Vec<String> = args.iter().map(|arg| arg.as_ref().to_owned()).collect();
    match tokio::task::spawn_blocking(move || run(&args)).await {
        Ok(result) => result,
        Err(e) => Err(Error::ffi(
            ENTRY_SYMBOL_NAME,
            format!("blocking invocation task failed: {e}"),
        )),
    }
}

/// Prints the embedded tool's version and build configuration (`-version`).
pub fn version() -> Result<i32> {
    run(&["-version"])
}

/// Prints the muxers and demuxers compiled into the embedded tool (`-formats`).
pub fn formats() -> Result<i32> {
    run(&["-formats"])
}

/// Prints the codecs compiled into the embedded tool (`-codecs`).
pub fn codecs() -> Result<i32> {
    run(&["-codecs"])
}

/// Prints the embedded tool's usage summary (`-h`).
pub fn help() -> Result<i32> {
    run(&["-h"])
}
