// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared status and error code vocabulary
//!
//! Every fallible operation of any subsystem reports one [`ErrorCode`].
//! Callers classify the outcome with [`is_error`] and forward failures with
//! [`return_if_error!`] or, in `Result` based code, with `code.check()?`.
//!
//! # Examples
//!
//! ```rust
//! use kstatus_core::prelude::*;
//!
//! fn open(name: &str) -> ErrorCode {
//!     if name.is_empty() {
//!         return ERR_GEN_INVALID_PARAM;
//!     }
//!     SUCCESS
//! }
//!
//! fn open_both(a: &str, b: &str) -> ErrorCode {
//!     return_if_error!(open(a));
//!     return_if_error!(open(b));
//!     SUCCESS
//! }
//!
//! assert_eq!(open_both("a", "b"), SUCCESS);
//! assert_eq!(open_both("a", ""), ERR_GEN_INVALID_PARAM);
//! ```

use std::fmt::Display;

pub mod abi;
pub mod codes;
pub mod config;
pub mod json;
pub mod status;

pub use codes::{is_error, Category, ErrorCode};
pub use status::Status;

/// The core preample publicly re-exports the most common symbols
pub mod prelude {
    pub use super::codes::*;
    pub use super::config::Config;
    pub use super::return_if_error;
    pub use super::status::Status;
    pub use super::{CoreResult, Error};
}

/// Helper for storing static and dynamic error texts
#[derive(Debug, Clone, PartialEq)]
enum ErrorText {
    None,
    Static(&'static str),
    Dynamic(String),
}

/// Error with a code from the shared table and an optional text
///
/// The text gives details for humans, the code is what callers branch on.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    text: ErrorText,
}

impl Error {
    /// Create a new error from a dynamic string
    pub fn new(code: ErrorCode, text: String) -> Self {
        Error {
            code,
            text: ErrorText::Dynamic(text),
        }
    }

    /// Create a new error from a `&'static str`
    pub const fn const_new(code: ErrorCode, text: &'static str) -> Self {
        Error {
            code,
            text: ErrorText::Static(text),
        }
    }

    /// Create a new error without an error text
    pub const fn from_code(code: ErrorCode) -> Self {
        Error {
            code,
            text: ErrorText::None,
        }
    }

    /// Get the code of an error
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the category of the error code
    pub fn category(&self) -> Option<Category> {
        self.code.category()
    }

    /// Get the error text, empty if none was given
    pub fn text(&self) -> &str {
        match &self.text {
            ErrorText::None => "",
            ErrorText::Static(s) => s,
            ErrorText::Dynamic(s) => s.as_str(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text {
            ErrorText::None => write!(f, "{}: {}", self.code.name(), self.code.description()),
            _ => write!(f, "{}: {}", self.code.name(), self.text()),
        }
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code)
    }
}

impl PartialEq<ErrorCode> for Error {
    fn eq(&self, other: &ErrorCode) -> bool {
        self.code == *other
    }
}

impl std::error::Error for Error {}

pub type CoreResult<T> = std::result::Result<T, Error>;
