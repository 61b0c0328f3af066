//! Owned construction of the native `argc`/`argv` argument vector.
//!
//! The embedded entry point is the FFmpeg tool's `main` in disguise, so it
//! expects its arguments the way a C runtime hands them over: a count plus
//! a null-terminated vector of pointers to NUL-terminated strings, program
//! name in slot 0. [`OwnedArgv`] builds that layout from Rust strings and
//! owns every byte of it until it is dropped.

use ffrun_core::{Error, Result, NATIVE_PROGRAM_NAME};
use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::ptr;

/// An owned, null-terminated native argument vector.
///
/// Slot 0 always holds the fixed program-name token and the following slots
/// hold byte-exact copies of the caller's arguments in their original
/// order. The final slot is the null pointer required by the C `argv`
/// convention. Every populated slot is an independently allocated buffer
/// owned by this value, so dropping it releases whatever was built, whether
/// construction completed or failed partway. Buffer lengths are tracked on
/// the Rust side, which keeps the release correct even if the callee
/// overwrites a terminator in place.
#[derive(Debug)]
pub struct OwnedArgv {
    /// One independently allocated, NUL-terminated buffer per populated slot.
    buffers: Vec<Box<[u8]>>,
    /// `[program name, arguments.., NULL]`, pointing into `buffers`.
    slots: Vec<*mut c_char>,
}

impl OwnedArgv {
    /// Builds the native vector for `args`, which hold exactly what would
    /// follow the program name on a command line.
    ///
    /// # Errors
    ///
    /// Returns `Error::ArgumentCount` if the list is too long to describe
    /// with a native `argc` (checked before anything is allocated), and
    /// `Error::InvalidArgument` if an element contains an interior NUL byte
    /// and therefore cannot become a C string.
    pub fn new<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let argc = native_argc(args.len())?;
        let slot_count = argc as usize;

        let mut buffers = Vec::with_capacity(slot_count);
        buffers.push(program_name_buffer());
        for (index, arg) in args.iter().enumerate() {
            buffers.push(argument_buffer(index, arg.as_ref())?);
        }

        // Slot pointers are taken only once every buffer sits at its final
        // address; the buffers themselves never move after this point.
        let mut slots = Vec::with_capacity(slot_count + 1);
        for buffer in &mut buffers {
            slots.push(buffer.as_mut_ptr().cast());
        }
        slots.push(ptr::null_mut());

        Ok(Self { buffers, slots })
    }

    /// Count of populated slots, program name included. This is the value
    /// the entry point receives as `argc`; the terminating null pointer is
    /// not counted.
    pub fn argc(&self) -> c_int {
        (self.slots.len() - 1) as c_int
    }

    /// Borrows the populated slot at `index` (slot 0 is the program name).
    /// Returns `None` past the last populated slot.
    pub fn slot(&self, index: usize) -> Option<&CStr> {
        let buffer = self.buffers.get(index)?;
        CStr::from_bytes_until_nul(buffer).ok()
    }

    /// Returns the `argv` pointer for the native call.
    ///
    /// The entry after the last populated slot is a null pointer. The
    /// returned pointer and everything it leads to stay valid until this
    /// value is dropped; dereferencing is the caller's unsafe contract.
    pub fn as_mut_ptr(&mut self) -> *mut *mut c_char {
        self.slots.as_mut_ptr()
    }
}

fn program_name_buffer() -> Box<[u8]> {
    NATIVE_PROGRAM_NAME
        .to_owned()
        .into_bytes_with_nul()
        .into_boxed_slice()
}

fn argument_buffer(index: usize, arg: &str) -> Result<Box<[u8]>> {
    let text = CString::new(arg).map_err(|e| {
        Error::invalid_argument(
            index,
            format!("interior NUL byte at offset {}", e.nul_position()),
        )
    })?;
    Ok(text.into_bytes_with_nul().into_boxed_slice())
}

/// Computes the native `argc` for an argument list of `len` elements.
///
/// The program-name slot makes the native count `len + 1`. This runs before
/// any buffer is allocated so oversized lists fail without partial work.
fn native_argc(len: usize) -> Result<c_int> {
    c_int::try_from(len + 1).map_err(|_| Error::argument_count(len, c_int::MAX as usize - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_occupies_slot_zero() {
        let argv = OwnedArgv::new(&["-version"]).unwrap();
        assert_eq!(argv.slot(0), Some(NATIVE_PROGRAM_NAME));
    }

    #[test]
    fn test_arguments_keep_their_order() {
        let args = ["-i", "input.mp4", "-c:v", "libx264", "output.mp4"];
        let argv = OwnedArgv::new(&args).unwrap();
        for (i, arg) in args.iter().enumerate() {
            assert_eq!(argv.slot(i + 1).unwrap().to_bytes(), arg.as_bytes());
        }
    }

    #[test]
    fn test_empty_list_is_program_name_only() {
        let args: [&str; 0] = [];
        let argv = OwnedArgv::new(&args).unwrap();
        assert_eq!(argv.argc(), 1);
        assert!(argv.slot(0).is_some());
        assert!(argv.slot(1).is_none());
    }

    #[test]
    fn test_empty_argument_is_preserved() {
        let argv = OwnedArgv::new(&["", "x"]).unwrap();
        assert_eq!(argv.slot(1).unwrap().to_bytes(), b"");
        assert_eq!(argv.slot(2).unwrap().to_bytes(), b"x");
    }

    #[test]
    fn test_vector_ends_with_null_pointer() {
        let mut argv = OwnedArgv::new(&["-i", "in.mp4"]).unwrap();
        let argc = argv.argc() as usize;
        let raw = argv.as_mut_ptr();
        // SAFETY: `raw` points at argc + 1 entries, so reading index argc is
        // in bounds.
        let last = unsafe { *raw.add(argc) };
        assert!(last.is_null());
    }

    #[test]
    fn test_interior_nul_reports_index_and_offset() {
        let err = OwnedArgv::new(&["-i", "bad\0arg"]).unwrap_err();
        match err {
            Error::InvalidArgument { index, message } => {
                assert_eq!(index, 1);
                assert!(message.contains("offset 3"), "got: {message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_native_argc_counts_the_program_name() {
        assert_eq!(native_argc(0).unwrap(), 1);
        assert_eq!(native_argc(4).unwrap(), 5);
    }

    #[test]
    fn test_native_argc_rejects_unrepresentable_lists() {
        let max_args = c_int::MAX as usize - 1;
        assert_eq!(native_argc(max_args).unwrap(), c_int::MAX);
        match native_argc(max_args + 1).unwrap_err() {
            Error::ArgumentCount { count, max } => {
                assert_eq!(count, max_args + 1);
                assert_eq!(max, max_args);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
