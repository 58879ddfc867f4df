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
    use kstatus_core::abi;
    use kstatus_core::prelude::*;

    struct Pool {
        free_pages: usize,
        log: Vec<&'static str>,
    }

    impl Pool {
        fn init(&mut self, size: usize) -> ErrorCode {
            if size < 4096 {
                return ERR_GEN_INVALID_PARAM;
            }
            self.log.push("init");
            SUCCESS
        }

        fn split(&mut self, order: u32) -> ErrorCode {
            if order > 10 {
                return ERR_GEN_INVALID_PARAM;
            }
            if self.free_pages == 0 {
                return ERR_MEM_OUT_OF_MEMORY;
            }
            self.free_pages -= 1;
            self.log.push("split");
            SUCCESS
        }

        fn setup(&mut self, size: usize, order: u32) -> ErrorCode {
            return_if_error!(self.init(size));
            return_if_error!(self.split(order));
            self.log.push("ready");
            SUCCESS
        }

        fn alloc(&mut self, order: u32) -> CoreResult<usize> {
            self.split(order).check()?;
            Ok(self.free_pages)
        }
    }

    fn pool(free_pages: usize) -> Pool {
        Pool {
            free_pages,
            log: Vec::new(),
        }
    }

    #[test]
    fn setup_runs_all_steps_on_success() {
        let mut p = pool(2);
        assert_eq!(p.setup(8192, 3), SUCCESS);
        assert_eq!(p.log, ["init", "split", "ready"]);
    }

    #[test]
    fn setup_stops_at_first_failure() {
        let mut p = pool(2);
        assert_eq!(p.setup(16, 3), ERR_GEN_INVALID_PARAM);
        assert!(p.log.is_empty());

        let mut p = pool(0);
        assert_eq!(p.setup(8192, 3), ERR_MEM_OUT_OF_MEMORY);
        assert_eq!(p.log, ["init"]);
    }

    #[test]
    fn result_based_callers() {
        let mut p = pool(1);
        assert_eq!(p.alloc(0), Ok(0));

        let err = p.alloc(0).unwrap_err();
        assert_eq!(err, ERR_MEM_OUT_OF_MEMORY);
        assert_eq!(err.category(), Some(Category::Memory));
        assert_eq!(err.to_string(), "ERR_MEM_OUT_OF_MEMORY: Out of memory");
    }

    #[test]
    fn syscall_boundary() {
        let mut p = pool(1);
        let word = abi::encode(p.alloc(0).map_err(|e| e.code()));
        assert_eq!(abi::decode(word), Ok(0));

        let word = abi::encode(p.alloc(0).map_err(|e| e.code()));
        assert_eq!(word, -15);
        assert_eq!(abi::decode(word), Err(ERR_MEM_OUT_OF_MEMORY));
    }

    #[test]
    fn stored_codes_keep_identity() {
        let stored: Vec<i32> = ErrorCode::ALL.iter().map(|&c| i32::from(c)).collect();
        for (raw, &code) in stored.iter().zip(ErrorCode::ALL) {
            let restored = ErrorCode::try_from(*raw).unwrap();
            assert_eq!(restored, code);
            assert_eq!(Category::of_name(restored.name()), code.category());
        }
    }
}
