//! Constants used throughout the ffrun codebase

use std::ffi::CStr;

// Native entry point constants
pub const NATIVE_PROGRAM_NAME: &CStr = c"ffmpeg";
pub const ENTRY_SYMBOL_NAME: &str = "ffmpeg_entry";

// Environment variable names
pub const FFMPEG_LIB_DIR_VAR: &str = "FFRUN_FFMPEG_LIB_DIR";
