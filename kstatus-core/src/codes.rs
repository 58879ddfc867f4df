// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0

use super::Error;

use std::fmt;
use std::str::FromStr;

/// Subsystem a failure code originates from.
///
/// The category is also encoded in the symbolic name of every code as the
/// token following `ERR_`, e.g. `ERR_FS_IO` belongs to [`Category::Filesystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Generic,
    Filesystem,
    Device,
    Memory,
    Ipc,
    System,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Generic,
        Category::Filesystem,
        Category::Device,
        Category::Memory,
        Category::Ipc,
        Category::System,
    ];

    /// The name prefix of the category as used in the symbolic code names
    pub const fn prefix(self) -> &'static str {
        match self {
            Category::Generic => "GEN",
            Category::Filesystem => "FS",
            Category::Device => "DEVICE",
            Category::Memory => "MEM",
            Category::Ipc => "IPC",
            Category::System => "SYS",
        }
    }

    /// Recover the category from a symbolic code name like `ERR_DEVICE_BUSY`.
    ///
    /// Returns `None` for `SUCCESS` and for names not following the `ERR_<PREFIX>_` scheme.
    pub fn of_name(name: &str) -> Option<Category> {
        let prefix = name.strip_prefix("ERR_")?.split('_').next()?;
        Category::ALL.into_iter().find(|c| c.prefix() == prefix)
    }

    /// All codes of this category in table order
    pub fn codes(self) -> impl Iterator<Item = ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .filter(move |code| code.category() == Some(self))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.prefix().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::new(
                    ErrorCode::GenInvalidParam,
                    format!("unknown error category '{s}'"),
                )
            })
    }
}

macro_rules! error_codes {
    ($($(#[$attr:meta])* $konst:ident => $variant:ident = $value:literal, $category:expr, $desc:literal;)*) => {
        /// Error code
        ///
        /// Closed set of outcomes shared by all subsystems. `SUCCESS` is the only
        /// non-error value, every failure is negative. The numeric values are
        /// part of the ABI and are never renumbered.
        ///
        /// | Range      | Category   |
        /// | ---------- | ---------- |
        /// | 0          | Success    |
        /// | -1 .. -3   | Generic    |
        /// | -4 .. -11  | Filesystem |
        /// | -12 .. -14 | Device     |
        /// | -15 .. -16 | Memory     |
        /// | -17 .. -18 | IPC        |
        /// | -19 .. -21 | System     |
        ///
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum ErrorCode {
            $(
                #[doc = $desc]
                $(#[$attr])*
                $variant = $value,
            )*
        }

        $(
            #[doc = $desc]
            pub const $konst: ErrorCode = ErrorCode::$variant;
        )*

        impl ErrorCode {
            /// All codes in table order
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$variant,)*];

            /// Look up a code by its numeric value
            pub const fn from_raw(value: i32) -> Option<ErrorCode> {
                match value {
                    $($value => Some(ErrorCode::$variant),)*
                    _ => None,
                }
            }

            /// The published symbolic name, e.g. `ERR_FS_IO`
            pub const fn name(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => stringify!($konst),)*
                }
            }

            /// Human readable description of the outcome
            pub const fn description(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $desc,)*
                }
            }

            /// Originating subsystem, `None` for `SUCCESS`
            pub const fn category(self) -> Option<Category> {
                match self {
                    $(ErrorCode::$variant => $category,)*
                }
            }
        }

        impl FromStr for ErrorCode {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($konst) => Ok(ErrorCode::$variant),)*
                    _ => Err(Error::new(
                        ErrorCode::GenInvalidParam,
                        format!("unknown error code name '{s}'"),
                    )),
                }
            }
        }
    };
}

error_codes! {
    #[default]
    SUCCESS => Success = 0, None, "Success";

    ERR_GEN_INVALID_PARAM => GenInvalidParam = -1, Some(Category::Generic), "Invalid parameter passed";
    ERR_GEN_NO_MEMORY => GenNoMemory = -2, Some(Category::Generic), "Memory allocation failed";
    ERR_GEN_TIMEOUT => GenTimeout = -3, Some(Category::Generic), "Operation timed out";

    ERR_FS_NO_ENTRY => FsNoEntry = -4, Some(Category::Filesystem), "No such file or directory";
    ERR_FS_IO => FsIo = -5, Some(Category::Filesystem), "I/O error";
    ERR_FS_ACCESS => FsAccess = -6, Some(Category::Filesystem), "Permission denied";
    ERR_FS_EXISTS => FsExists = -7, Some(Category::Filesystem), "File exists";
    ERR_FS_NOT_DIR => FsNotDir = -8, Some(Category::Filesystem), "Not a directory";
    ERR_FS_IS_DIR => FsIsDir = -9, Some(Category::Filesystem), "Is a directory";
    ERR_FS_NOT_EMPTY => FsNotEmpty = -10, Some(Category::Filesystem), "Directory not empty";
    ERR_FS_NAME_TOO_LONG => FsNameTooLong = -11, Some(Category::Filesystem), "Filename too long";

    ERR_DEVICE_NO_DEVICE => DeviceNoDevice = -12, Some(Category::Device), "No such device";
    ERR_DEVICE_BUSY => DeviceBusy = -13, Some(Category::Device), "Device or resource busy";
    ERR_DEVICE_NO_RESPONSE => DeviceNoResponse = -14, Some(Category::Device), "Device not responding";

    ERR_MEM_OUT_OF_MEMORY => MemOutOfMemory = -15, Some(Category::Memory), "Out of memory";
    ERR_MEM_INVALID_ADDR => MemInvalidAddr = -16, Some(Category::Memory), "Invalid address";

    ERR_IPC_PIPE => IpcPipe = -17, Some(Category::Ipc), "Broken pipe";
    ERR_IPC_AGAIN => IpcAgain = -18, Some(Category::Ipc), "Resource temporarily unavailable";

    ERR_SYS_INTERRUPTED => SysInterrupted = -19, Some(Category::System), "System call interrupted";
    ERR_SYS_NOT_SUPPORTED => SysNotSupported = -20, Some(Category::System), "Operation not supported";
    ERR_SYS_INVALID_OP => SysInvalidOp = -21, Some(Category::System), "Invalid operation";
}

impl ErrorCode {
    /// Numeric value of the code
    pub const fn raw(self) -> i32 {
        self as i32
    }

    pub const fn is_success(self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Check if the code denotes a failure
    pub const fn is_error(self) -> bool {
        !self.is_success()
    }

    /// Turn the code into a `Result` so it can be propagated with `?`
    pub const fn check(self) -> Result<(), ErrorCode> {
        if self.is_error() {
            Err(self)
        } else {
            Ok(())
        }
    }

    /// Like [`ErrorCode::check`] but carries a value on success
    pub fn into_result<T>(self, value: T) -> Result<T, ErrorCode> {
        self.check().map(|_| value)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.raw(), self.description())
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.raw()
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        ErrorCode::from_raw(value).ok_or_else(|| {
            Error::new(
                ErrorCode::GenInvalidParam,
                format!("{value} is not a known error code"),
            )
        })
    }
}

/// Classify a code as failure. `SUCCESS` is the only code for which this is false.
pub const fn is_error(code: ErrorCode) -> bool {
    code.is_error()
}
