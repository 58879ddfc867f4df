// Copyright (c) 2025 Qorix GmbH
//
// This program and the accompanying materials are made available under the
// terms of the Apache License, Version 2.0 which is available at
// https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: Apache-2.0
//

#[cfg(test)]
mod tests {
    use kstatus_core::prelude::*;
    use kstatus_os::prelude::*;

    use std::fs;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kstatus-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn make_dir(path: &PathBuf) -> CoreResult<()> {
        fs::create_dir(path).status()
    }

    #[test]
    fn missing_entry() {
        let dir = scratch("missing");
        let err = fs::read(dir.join("nothing.bin")).status().unwrap_err();
        assert_eq!(err.code(), ERR_FS_NO_ENTRY);
        assert_eq!(err.category(), Some(Category::Filesystem));
        assert!(!err.text().is_empty());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn entry_exists() {
        let dir = scratch("exists");
        let sub = dir.join("sub");
        assert!(make_dir(&sub).is_ok());
        assert_eq!(make_dir(&sub).unwrap_err(), ERR_FS_EXISTS);
        fs::remove_dir_all(dir).unwrap();
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn directory_errors() {
        let dir = scratch("dirs");
        let file = dir.join("file.txt");
        fs::write(&file, b"kstatus").unwrap();

        let err = fs::read_dir(&file).status().unwrap_err();
        assert_eq!(err.code(), ERR_FS_NOT_DIR);

        let err = fs::read(&dir).status().unwrap_err();
        assert_eq!(err.code(), ERR_FS_IS_DIR);

        let err = fs::remove_dir(&dir).status().unwrap_err();
        assert_eq!(err.code(), ERR_FS_NOT_EMPTY);

        let long = dir.join("x".repeat(300));
        let err = fs::write(long, b"").status().unwrap_err();
        assert_eq!(err.code(), ERR_FS_NAME_TOO_LONG);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn propagates_through_codes() {
        fn open_config(path: &str) -> ErrorCode {
            if let Err(e) = fs::metadata(path) {
                return_if_error!(code_of(&e));
            }
            SUCCESS
        }

        assert_eq!(open_config("/definitely/not/here"), ERR_FS_NO_ENTRY);
        assert_eq!(open_config(std::env::temp_dir().to_str().unwrap()), SUCCESS);
        assert_eq!(from_errno(to_errno(ERR_FS_NOT_DIR)), ERR_FS_NOT_DIR);
    }
}
