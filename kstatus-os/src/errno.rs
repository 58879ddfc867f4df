// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0

//! Linux errno values and their mapping onto the shared code table
//!
//! Only the errno values that have a counterpart in [`ErrorCode`] are listed.

use kstatus_core::ErrorCode;

pub const EPERM: i32 = 1;
pub const ENOENT: i32 = 2;
pub const EINTR: i32 = 4;
pub const EIO: i32 = 5;
pub const ENXIO: i32 = 6;
pub const EAGAIN: i32 = 11;
pub const ENOMEM: i32 = 12;
pub const EACCES: i32 = 13;
pub const EFAULT: i32 = 14;
pub const EBUSY: i32 = 16;
pub const EEXIST: i32 = 17;
pub const ENODEV: i32 = 19;
pub const ENOTDIR: i32 = 20;
pub const EISDIR: i32 = 21;
pub const EINVAL: i32 = 22;
pub const EPIPE: i32 = 32;
pub const ENAMETOOLONG: i32 = 36;
pub const ENOSYS: i32 = 38;
pub const ENOTEMPTY: i32 = 39;
pub const EOPNOTSUPP: i32 = 95;
pub const ETIMEDOUT: i32 = 110;

/// Map an errno value onto a code.
///
/// Kernel style negative values (`-errno`) are accepted as well. `0` maps to
/// `SUCCESS`, values without a counterpart map to `ERR_SYS_INVALID_OP`.
pub fn from_errno(errno: i32) -> ErrorCode {
    if errno == 0 {
        return ErrorCode::Success;
    }
    lookup(errno).unwrap_or(ErrorCode::SysInvalidOp)
}

/// The code with a counterpart for `errno` (or `-errno`), `None` if there is none.
pub fn lookup(errno: i32) -> Option<ErrorCode> {
    let code = match errno.checked_abs()? {
        0 => ErrorCode::Success,
        EPERM => ErrorCode::SysInvalidOp,
        ENOENT => ErrorCode::FsNoEntry,
        EINTR => ErrorCode::SysInterrupted,
        EIO => ErrorCode::FsIo,
        ENXIO | ENODEV => ErrorCode::DeviceNoDevice,
        EAGAIN => ErrorCode::IpcAgain,
        ENOMEM => ErrorCode::MemOutOfMemory,
        EACCES => ErrorCode::FsAccess,
        EFAULT => ErrorCode::MemInvalidAddr,
        EBUSY => ErrorCode::DeviceBusy,
        EEXIST => ErrorCode::FsExists,
        ENOTDIR => ErrorCode::FsNotDir,
        EISDIR => ErrorCode::FsIsDir,
        EINVAL => ErrorCode::GenInvalidParam,
        EPIPE => ErrorCode::IpcPipe,
        ENAMETOOLONG => ErrorCode::FsNameTooLong,
        ENOSYS | EOPNOTSUPP => ErrorCode::SysNotSupported,
        ENOTEMPTY => ErrorCode::FsNotEmpty,
        ETIMEDOUT => ErrorCode::GenTimeout,
        _ => return None,
    };
    Some(code)
}

/// Map a code onto the closest errno value, `0` for `SUCCESS`.
pub fn to_errno(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::Success => 0,
        ErrorCode::GenInvalidParam => EINVAL,
        ErrorCode::GenNoMemory => ENOMEM,
        ErrorCode::GenTimeout => ETIMEDOUT,
        ErrorCode::FsNoEntry => ENOENT,
        ErrorCode::FsIo => EIO,
        ErrorCode::FsAccess => EACCES,
        ErrorCode::FsExists => EEXIST,
        ErrorCode::FsNotDir => ENOTDIR,
        ErrorCode::FsIsDir => EISDIR,
        ErrorCode::FsNotEmpty => ENOTEMPTY,
        ErrorCode::FsNameTooLong => ENAMETOOLONG,
        ErrorCode::DeviceNoDevice => ENODEV,
        ErrorCode::DeviceBusy => EBUSY,
        ErrorCode::DeviceNoResponse => EIO,
        ErrorCode::MemOutOfMemory => ENOMEM,
        ErrorCode::MemInvalidAddr => EFAULT,
        ErrorCode::IpcPipe => EPIPE,
        ErrorCode::IpcAgain => EAGAIN,
        ErrorCode::SysInterrupted => EINTR,
        ErrorCode::SysNotSupported => ENOSYS,
        ErrorCode::SysInvalidOp => EPERM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kstatus_core::codes::*;

    #[test]
    fn known_values() {
        assert_eq!(from_errno(0), SUCCESS);
        assert_eq!(from_errno(ENOENT), ERR_FS_NO_ENTRY);
        assert_eq!(from_errno(-ENOENT), ERR_FS_NO_ENTRY);
        assert_eq!(from_errno(EOPNOTSUPP), ERR_SYS_NOT_SUPPORTED);
        assert_eq!(from_errno(ENXIO), ERR_DEVICE_NO_DEVICE);
        assert_eq!(from_errno(4095), ERR_SYS_INVALID_OP);
        assert_eq!(from_errno(i32::MIN), ERR_SYS_INVALID_OP);
    }

    #[test]
    fn lookup_only_knows_table_values() {
        assert_eq!(lookup(EPIPE), Some(ERR_IPC_PIPE));
        assert_eq!(lookup(-EISDIR), Some(ERR_FS_IS_DIR));
        assert_eq!(lookup(EPERM), Some(ERR_SYS_INVALID_OP));
        assert_eq!(lookup(0), Some(SUCCESS));
        // ENOSPC, ECONNRESET
        assert_eq!(lookup(28), None);
        assert_eq!(lookup(104), None);
        assert_eq!(lookup(i32::MIN), None);
    }

    #[test]
    fn round_trip() {
        // these two share their errno with a more specific code
        let lossy = [ERR_GEN_NO_MEMORY, ERR_DEVICE_NO_RESPONSE];

        for &code in ErrorCode::ALL {
            let back = from_errno(to_errno(code));
            if lossy.contains(&code) {
                assert_ne!(back, code);
                assert!(back.is_error());
            } else {
                assert_eq!(back, code, "{code}");
            }
        }
    }
}
