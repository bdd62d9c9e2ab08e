use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sweeper_core::{ScoreBook, ScoreError, ScoreStore};

pub trait StorageKey {
    const KEY: &'static str;
}

/// Values kept in `localStorage` under their [`StorageKey`].
pub trait LocalOrDefault: Sized {
    /// The stored value, or the default when it is missing or unreadable.
    fn local_or_default() -> Self;

    fn local_save(&self) -> Result<(), StorageError>;
}

impl<T> LocalOrDefault for T
where
    T: StorageKey + Default + Serialize + DeserializeOwned,
{
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).unwrap_or_else(|err| {
            match err {
                StorageError::KeyNotFound(_) => log::debug!("nothing stored under {}", T::KEY),
                err => log::warn!("ignoring stored {}: {}", T::KEY, err),
            }
            Default::default()
        })
    }

    fn local_save(&self) -> Result<(), StorageError> {
        LocalStorage::set(T::KEY, self)
    }
}

impl StorageKey for ScoreBook {
    const KEY: &'static str = "sweeper:scores";
}

/// Score list kept in the browser's `localStorage`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalScoreStore;

impl ScoreStore for LocalScoreStore {
    fn load(&self) -> ScoreBook {
        ScoreBook::local_or_default()
    }

    fn save(&mut self, book: &ScoreBook) -> Result<(), ScoreError> {
        book.local_save()
            .map_err(|err| ScoreError::Write(err.to_string()))
    }
}
