// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0
use crate::ReportPolicy;

use kstatus_core::{CoreResult, Error, ErrorCode};
use tracing::Level;

// `tracing` needs the level as a constant per call site.
macro_rules! emit {
    ($level:expr, $($fields:tt)*) => {
        let level = $level;
        if level == Level::ERROR {
            tracing::error!($($fields)*)
        } else if level == Level::WARN {
            tracing::warn!($($fields)*)
        } else if level == Level::INFO {
            tracing::info!($($fields)*)
        } else if level == Level::DEBUG {
            tracing::debug!($($fields)*)
        } else {
            tracing::trace!($($fields)*)
        }
    };
}

fn emit_event(policy: &ReportPolicy, code: ErrorCode, text: &str, context: &str) -> bool {
    let Some(level) = policy.level_for(code) else {
        return false;
    };

    let category = code.category().map(|c| c.prefix()).unwrap_or("-");
    emit!(
        level,
        code = %code.name(),
        value = code.raw(),
        category = %category,
        context = %context,
        "{}",
        text
    );
    true
}

/// Report a failure code.
///
/// Returns whether an event was emitted. Success and muted codes are not reported.
pub fn report(policy: &ReportPolicy, code: ErrorCode, context: &str) -> bool {
    emit_event(policy, code, code.description(), context)
}

/// Report an error including its text
pub fn report_error(policy: &ReportPolicy, error: &Error, context: &str) -> bool {
    let text = match error.text() {
        "" => error.code().description(),
        text => text,
    };
    emit_event(policy, error.code(), text, context)
}

/// Report failures while passing results through unchanged
pub trait ReportExt {
    fn report(self, policy: &ReportPolicy, context: &str) -> Self;
}

impl<T> ReportExt for Result<T, ErrorCode> {
    fn report(self, policy: &ReportPolicy, context: &str) -> Self {
        if let Err(code) = &self {
            report(policy, *code, context);
        }
        self
    }
}

impl<T> ReportExt for CoreResult<T> {
    fn report(self, policy: &ReportPolicy, context: &str) -> Self {
        if let Err(error) = &self {
            report_error(policy, error, context);
        }
        self
    }
}
