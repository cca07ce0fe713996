mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::AppResult;

/// Key-value persistence for named preference slots.
///
/// Values are JSON text. Slots are independently keyed: losing or
/// corrupting one entry must never prevent the others from loading,
/// which is why readers treat each key in isolation.
pub trait PreferenceStore: Send + Sync {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    fn set_raw(&self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&self, key: &str) -> AppResult<()>;

    fn keys(&self) -> AppResult<Vec<String>>;
}
