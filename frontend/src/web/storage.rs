//! 会话持久化
//!
//! 基于 `gloo-storage` 的 localStorage，值以 JSON 字符串保存。
//! 隐私模式等环境下 localStorage 不可用，此时读到空、写入失败并记录日志。

use campusdesk::KeyValueStore;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    available: bool,
}

impl BrowserStorage {
    /// 探测 localStorage；`gloo-storage` 在不可用时会直接 panic，只能先检查
    pub fn detect() -> Self {
        let available = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some();
        if !available {
            log::warn!("[Storage] localStorage unavailable, session will not persist");
        }
        Self { available }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        match LocalStorage::get::<String>(key) {
            Ok(value) => Some(value),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                log::warn!("[Storage] unreadable entry {}: {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> bool {
        if !self.available {
            return false;
        }
        LocalStorage::set(key, value)
            .map_err(|e| log::error!("[Storage] write {} failed: {}", key, e))
            .is_ok()
    }

    fn remove(&self, key: &str) -> bool {
        if !self.available {
            return false;
        }
        LocalStorage::delete(key);
        true
    }
}
