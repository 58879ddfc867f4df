// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0
use kstatus_core::{Error, ErrorCode};

/// Errno values and their mapping
pub mod errno;

/// `std::io` error classification
pub mod io;

pub mod prelude {
    pub use super::errno::{from_errno, lookup, to_errno};
    pub use super::io::{code_of, from_io, IoResultExt};
    pub use super::Os;
}

/// Operating system error class
type Result<T> = std::result::Result<T, Error>;

/// Operating System Abstraction functions
/// The OS cannot be instantiated and is only accesses through static methods
pub struct Os {}

impl Os {
    pub fn name() -> String {
        std::env::consts::OS.to_string()
    }

    /// The last OS error of the calling thread as code
    pub fn last_error() -> ErrorCode {
        io::code_of(&std::io::Error::last_os_error())
    }

    /// Run an OS call returning a raw status word and convert failures.
    ///
    /// Negative words are taken as `-errno`.
    pub fn check(word: i32) -> Result<u32> {
        if word >= 0 {
            return Ok(word as u32);
        }
        let code = errno::from_errno(word);
        Err(Error::new(code, format!("os call failed with errno {}", -(word as i64))))
    }
}
