// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0
use crate::codes::ErrorCode;
use crate::json::{JsonParseError, JsonValue};
use crate::{CoreResult, Error};

use std::collections::HashMap;

/// Configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    value: JsonValue,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    pub fn new() -> Config {
        Config {
            value: JsonValue::Null,
        }
    }

    /// Parse a configuration from a JSON document
    pub fn parse(text: &str) -> CoreResult<Config> {
        text.parse::<JsonValue>()
            .map(Config::from)
            .map_err(|e: JsonParseError| Error::new(ErrorCode::GenInvalidParam, e.to_string()))
    }

    pub fn get(&self) -> &JsonValue {
        &self.value
    }

    /// Check if the configuration holds no value
    pub fn is_empty(&self) -> bool {
        self.value.is_null()
    }

    /// Get a sub configuration by key, `None` if absent or not an object
    pub fn section(&self, key: &str) -> Option<Config> {
        let map: &HashMap<String, JsonValue> = self.value.get()?;
        map.get(key).cloned().map(Config::from)
    }

    /// Get a string entry by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        let map: &HashMap<String, JsonValue> = self.value.get()?;
        let s: &String = map.get(key)?.get()?;
        Some(s.as_str())
    }
}

impl From<JsonValue> for Config {
    fn from(value: JsonValue) -> Self {
        Config { value }
    }
}

impl core::ops::Index<&str> for Config {
    type Output = JsonValue;
    fn index(&self, index: &str) -> &Self::Output {
        &self.value[index]
    }
}

impl core::ops::Index<usize> for Config {
    type Output = JsonValue;
    fn index(&self, index: usize) -> &Self::Output {
        &self.value[index]
    }
}
