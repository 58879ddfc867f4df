// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0

//! Return word encoding for system calls
//!
//! A system call hands back a single machine word. Non-negative words are
//! successful results, negative words carry the raw value of an [`ErrorCode`].

use super::ErrorCode;

/// Encode the outcome of a system call into its return word.
///
/// Results above `isize::MAX` cannot be told apart from failures and are
/// encoded as `ERR_GEN_INVALID_PARAM`. `Err(SUCCESS)` is not a failure and is
/// encoded as `ERR_SYS_INVALID_OP`.
pub fn encode(result: Result<usize, ErrorCode>) -> isize {
    match result {
        Ok(value) => isize::try_from(value).unwrap_or(ErrorCode::GenInvalidParam.raw() as isize),
        Err(ErrorCode::Success) => ErrorCode::SysInvalidOp.raw() as isize,
        Err(code) => code.raw() as isize,
    }
}

/// Decode a system call return word.
///
/// Negative words that are not in the code table decode to `ERR_SYS_INVALID_OP`.
pub fn decode(word: isize) -> Result<usize, ErrorCode> {
    if word >= 0 {
        return Ok(word as usize);
    }

    let code = i32::try_from(word)
        .ok()
        .and_then(ErrorCode::from_raw)
        .unwrap_or(ErrorCode::SysInvalidOp);
    Err(code)
}
