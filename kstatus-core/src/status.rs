// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0
use super::{Error, ErrorCode};

/// A value that reports success or failure of an operation
pub trait Status {
    /// What is handed to the caller when the value is a failure
    type Failure;

    /// True if the value denotes a failure
    fn is_error(&self) -> bool;

    fn is_success(&self) -> bool {
        !self.is_error()
    }

    /// The failure carried by the value, `None` on success
    fn into_failure(self) -> Option<Self::Failure>;
}

impl Status for ErrorCode {
    type Failure = ErrorCode;

    fn is_error(&self) -> bool {
        ErrorCode::is_error(*self)
    }

    fn into_failure(self) -> Option<ErrorCode> {
        self.is_error().then_some(self)
    }
}

/// Raw status words: any negative value is a failure.
impl Status for i32 {
    type Failure = i32;

    fn is_error(&self) -> bool {
        *self < 0
    }

    fn into_failure(self) -> Option<i32> {
        (self < 0).then_some(self)
    }
}

/// An `Error` always carries a failure unless it was built from `SUCCESS`.
impl Status for Error {
    type Failure = Error;

    fn is_error(&self) -> bool {
        self.code().is_error()
    }

    fn into_failure(self) -> Option<Error> {
        self.code().is_error().then_some(self)
    }
}

/// A `Result` is a failure iff it is `Err`; the failure is the `Err` payload.
impl<T, E> Status for Result<T, E> {
    type Failure = E;

    fn is_error(&self) -> bool {
        self.is_err()
    }

    fn into_failure(self) -> Option<E> {
        self.err()
    }
}

/// Return early from the enclosing function if the status is a failure.
///
/// The expression is evaluated exactly once. On failure the status (the
/// `Err` payload for a `Result`) is converted with `Into` into the return
/// type of the enclosing function and returned; on success execution
/// continues after the macro and an `Ok` value is dropped.
///
/// ```rust
/// use kstatus_core::prelude::*;
///
/// fn step(fail: bool) -> ErrorCode {
///     if fail { ERR_DEVICE_NO_RESPONSE } else { SUCCESS }
/// }
///
/// fn probe() -> Error {
///     return_if_error!(step(false));
///     return_if_error!(step(true));
///     Error::from_code(SUCCESS)
/// }
///
/// assert_eq!(probe().code(), ERR_DEVICE_NO_RESPONSE);
/// ```
#[macro_export]
macro_rules! return_if_error {
    ($status:expr) => {{
        if let ::core::option::Option::Some(failure) = $crate::Status::into_failure($status) {
            return ::core::convert::Into::into(failure);
        }
    }};
}
