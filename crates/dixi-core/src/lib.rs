pub mod codec;
pub mod error;
pub mod preference;
pub mod recent;
pub mod storage;
pub mod theme;

pub use codec::{Codec, JsonCodec, TextCodec};
pub use error::{CodecError, PreferenceError, StorageError};
pub use preference::PreferenceStore;
pub use recent::RecentSearches;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use theme::{ColorSchemeSignal, DarkModeFlag, EnvColorScheme, Theme, ThemeStore, ThemeTarget};
