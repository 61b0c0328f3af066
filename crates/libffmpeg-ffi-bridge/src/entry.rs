//! Invocation of the embedded FFmpeg entry point.
//!
//! The entry point is the FFmpeg command-line tool's `main`, renamed for
//! static embedding. It mutates process-global state (option tables, signal
//! handlers, logging), so invocations are serialized behind a module-level
//! lock. Stock fftools builds also terminate the whole process through
//! `exit()` for informational options such as `-version`; builds intended
//! for embedding patch that path out.

use crate::argv::OwnedArgv;
use ffrun_core::{Result, ENTRY_SYMBOL_NAME};
use std::sync::{Mutex, PoisonError};

/// Serializes native invocations; the embedded tool is not reentrant.
static ENTRY_LOCK: Mutex<()> = Mutex::new(());

#[cfg(ffmpeg_linked)]
extern "C" {
    /// The renamed `main` of the statically linked FFmpeg tool.
    fn ffmpeg_entry(argc: libc::c_int, argv: *mut *mut libc::c_char) -> libc::c_int;
}

/// Hands a fully built vector to the entry point and returns its exit
/// status verbatim.
///
/// Blocks the calling thread for the whole native run; there is no timeout
/// and no cancellation.
#[cfg(ffmpeg_linked)]
pub(crate) fn invoke(argv: &mut OwnedArgv) -> Result<i32> {
    let argc = argv.argc();
    let _guard = ENTRY_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    tracing::debug!(argc, "invoking {}", ENTRY_SYMBOL_NAME);
    // SAFETY: the vector holds `argc` valid NUL-terminated buffers followed
    // by a terminating null pointer, all exclusively owned by `argv` and
    // borrowed for the duration of the call.
    let status = unsafe { ffmpeg_entry(argc, argv.as_mut_ptr()) };
    tracing::debug!(argc, status, "{} returned", ENTRY_SYMBOL_NAME);

    Ok(status)
}

/// Fallback for builds where no entry point archive was found; reports the
/// boundary as unavailable instead of failing to link.
#[cfg(not(ffmpeg_linked))]
pub(crate) fn invoke(argv: &mut OwnedArgv) -> Result<i32> {
    let _guard = ENTRY_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    tracing::warn!(
        argc = argv.argc(),
        "{} is not linked into this build; set {} and rebuild",
        ENTRY_SYMBOL_NAME,
        ffrun_core::FFMPEG_LIB_DIR_VAR
    );
    Err(ffrun_core::Error::ffi(
        ENTRY_SYMBOL_NAME,
        "entry point not linked into this build",
    ))
}
