// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0
//

use kstatus_core::prelude::*;
use kstatus_log::prelude::*;

const CONFIG: &str = r#"
{
    "logging": { "level": "debug" },
    "report": {
        "level": "warn",
        "categories": { "DEVICE": "error" },
        "mute": ["ERR_IPC_AGAIN"]
    }
}
"#;

/// Pretend to talk to a device that never answers
#[instrument]
fn probe(port: u32) -> ErrorCode {
    debug!("probing port {port}");
    if port > 1 {
        return ERR_DEVICE_NO_RESPONSE;
    }
    SUCCESS
}

fn bring_up() -> ErrorCode {
    for port in 0..4 {
        return_if_error!(probe(port));
    }
    SUCCESS
}

fn main() -> CoreResult<()> {
    let config = Config::parse(CONFIG)?;

    let mut logging = LoggingBuilder::from_config(&config.section("logging").unwrap_or_default())?.build();
    logging.init()?;
    let _span = logging.create_span().entered();

    let policy = ReportPolicy::from_config(&config.section("report").unwrap_or_default())?;

    report(&policy, bring_up(), "bring up");
    report(&policy, ERR_IPC_AGAIN, "mailbox poll");

    let read: Result<usize, ErrorCode> = Err(ERR_FS_NO_ENTRY);
    let size = read.report(&policy, "/boot/config.txt").unwrap_or(0);
    info!("config size {size}");

    info!("done");
    Ok(())
}
