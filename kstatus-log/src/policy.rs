// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0
use kstatus_core::config::Config;
use kstatus_core::json::JsonValue;
use kstatus_core::{Category, CoreResult, Error, ErrorCode};

use std::collections::{HashMap, HashSet};
use tracing::Level;

/// Decides at which level a failure code is reported
///
/// The configuration document looks like
///
/// ```json
/// {
///     "level": "warn",
///     "categories": { "FS": "error", "IPC": "debug" },
///     "mute": ["ERR_IPC_AGAIN"]
/// }
/// ```
///
/// All keys are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPolicy {
    level: Level,
    categories: HashMap<Category, Level>,
    mute: HashSet<ErrorCode>,
}

impl Default for ReportPolicy {
    fn default() -> Self {
        ReportPolicy::new(Level::WARN)
    }
}

impl ReportPolicy {
    /// Create a policy reporting every failure at the given level
    pub fn new(level: Level) -> Self {
        ReportPolicy {
            level,
            categories: HashMap::new(),
            mute: HashSet::new(),
        }
    }

    /// Override the level for one category
    pub fn with_category(mut self, category: Category, level: Level) -> Self {
        self.categories.insert(category, level);
        self
    }

    /// Never report the given code
    pub fn with_muted(mut self, code: ErrorCode) -> Self {
        self.mute.insert(code);
        self
    }

    /// Build a policy from its configuration document
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let mut policy = ReportPolicy::default();
        if config.is_empty() {
            return Ok(policy);
        }

        let map: &HashMap<String, JsonValue> = config
            .get()
            .get()
            .ok_or(Error::const_new(ErrorCode::GenInvalidParam, "report policy must be an object"))?;

        if let Some(level) = map.get("level") {
            policy.level = parse_level(level)?;
        }

        if let Some(categories) = map.get("categories") {
            let categories: &HashMap<String, JsonValue> = categories
                .get()
                .ok_or(Error::const_new(ErrorCode::GenInvalidParam, "'categories' must be an object"))?;
            for (name, level) in categories {
                policy.categories.insert(name.parse::<Category>()?, parse_level(level)?);
            }
        }

        if let Some(mute) = map.get("mute") {
            let mute: &Vec<JsonValue> = mute
                .get()
                .ok_or(Error::const_new(ErrorCode::GenInvalidParam, "'mute' must be an array"))?;
            for name in mute {
                let name: &String = name
                    .get()
                    .ok_or(Error::const_new(ErrorCode::GenInvalidParam, "'mute' entries must be code names"))?;
                policy.mute.insert(name.parse::<ErrorCode>()?);
            }
        }

        Ok(policy)
    }

    pub fn default_level(&self) -> Level {
        self.level
    }

    /// The level to report the code at, `None` if it must not be reported
    pub fn level_for(&self, code: ErrorCode) -> Option<Level> {
        if code.is_success() || self.mute.contains(&code) {
            return None;
        }

        let level = code
            .category()
            .and_then(|c| self.categories.get(&c).copied())
            .unwrap_or(self.level);
        Some(level)
    }
}

fn parse_level(value: &JsonValue) -> CoreResult<Level> {
    let name: &String = value
        .get()
        .ok_or(Error::const_new(ErrorCode::GenInvalidParam, "log level must be a string"))?;
    name.parse::<Level>()
        .map_err(|_| Error::new(ErrorCode::GenInvalidParam, format!("unknown log level '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kstatus_core::codes::*;

    #[test]
    fn levels() {
        let policy = ReportPolicy::new(Level::INFO)
            .with_category(Category::Filesystem, Level::ERROR)
            .with_muted(ERR_IPC_AGAIN);

        assert_eq!(policy.level_for(SUCCESS), None);
        assert_eq!(policy.level_for(ERR_IPC_AGAIN), None);
        assert_eq!(policy.level_for(ERR_IPC_PIPE), Some(Level::INFO));
        assert_eq!(policy.level_for(ERR_FS_NOT_EMPTY), Some(Level::ERROR));
        assert_eq!(ReportPolicy::default().level_for(ERR_GEN_TIMEOUT), Some(Level::WARN));
    }

    #[test]
    fn from_config() {
        let config = Config::parse(
            r#"{
                "level": "debug",
                "categories": { "fs": "error", "DEVICE": "warn" },
                "mute": ["ERR_SYS_INTERRUPTED"]
            }"#,
        )
        .unwrap();

        let policy = ReportPolicy::from_config(&config).unwrap();
        let expected = ReportPolicy::new(Level::DEBUG)
            .with_category(Category::Filesystem, Level::ERROR)
            .with_category(Category::Device, Level::WARN)
            .with_muted(ERR_SYS_INTERRUPTED);
        assert_eq!(policy, expected);
        assert_eq!(policy.default_level(), Level::DEBUG);

        assert_eq!(ReportPolicy::from_config(&Config::new()).unwrap(), ReportPolicy::default());
    }

    #[test]
    fn bad_config() {
        for doc in [
            r#"[1, 2]"#,
            r#"{ "level": 3 }"#,
            r#"{ "level": "chatty" }"#,
            r#"{ "categories": { "NET": "warn" } }"#,
            r#"{ "categories": [] }"#,
            r#"{ "mute": ["ERR_FS_GONE"] }"#,
            r#"{ "mute": "ERR_FS_IO" }"#,
        ] {
            let config = Config::parse(doc).unwrap();
            let err = ReportPolicy::from_config(&config).unwrap_err();
            assert_eq!(err.code(), ERR_GEN_INVALID_PARAM, "{doc}");
        }
    }
}
