// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0
use super::errno;
use super::{Error, Result};

use kstatus_core::ErrorCode;
use std::io;

/// Classify an I/O error.
///
/// A raw OS error with a counterpart in the errno table takes precedence,
/// otherwise the error kind decides.
/// Kinds without a counterpart are reported as `ERR_FS_IO`.
pub fn code_of(err: &io::Error) -> ErrorCode {
    if cfg!(target_os = "linux") {
        if let Some(code) = err.raw_os_error().and_then(errno::lookup) {
            return code;
        }
    }

    match err.kind() {
        io::ErrorKind::NotFound => ErrorCode::FsNoEntry,
        io::ErrorKind::PermissionDenied => ErrorCode::FsAccess,
        io::ErrorKind::AlreadyExists => ErrorCode::FsExists,
        io::ErrorKind::WouldBlock => ErrorCode::IpcAgain,
        io::ErrorKind::BrokenPipe => ErrorCode::IpcPipe,
        io::ErrorKind::Interrupted => ErrorCode::SysInterrupted,
        io::ErrorKind::TimedOut => ErrorCode::GenTimeout,
        io::ErrorKind::InvalidInput => ErrorCode::GenInvalidParam,
        io::ErrorKind::Unsupported => ErrorCode::SysNotSupported,
        io::ErrorKind::OutOfMemory => ErrorCode::MemOutOfMemory,
        _ => ErrorCode::FsIo,
    }
}

/// Convert an I/O error, keeping its message as error text
pub fn from_io(err: io::Error) -> Error {
    Error::new(code_of(&err), err.to_string())
}

/// Lift `std::io` results into the shared error type
pub trait IoResultExt<T> {
    fn status(self) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn status(self) -> Result<T> {
        self.map_err(from_io)
    }
}
