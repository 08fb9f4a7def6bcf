//! Song policy

use std::sync::Arc;

use stagekit_store::{BundleStore, SongStore, UserStore};
use stagekit_types::{Clearance, Error, Principal, Song};

use crate::validate::validate_chord_sheet;

/// Guards every mutation of songs.
///
/// Creation is open to members; editing and deleting take editor
/// clearance, with a fallback for the song's creator.
pub struct SongService<S: SongStore, U: UserStore, B: BundleStore> {
    songs: Arc<S>,
    users: Arc<U>,
    bundles: Arc<B>,
}

impl<S: SongStore, U: UserStore, B: BundleStore> SongService<S, U, B> {
    pub fn new(songs: Arc<S>, users: Arc<U>, bundles: Arc<B>) -> Self {
        Self {
            songs,
            users,
            bundles,
        }
    }

    pub async fn fetch_by_id(&self, id: i64) -> Result<Song, Error> {
        Ok(self.songs.get_by_id(id).await?)
    }

    pub async fn fetch_all(&self) -> Result<Vec<Song>, Error> {
        Ok(self.songs.get_all().await?)
    }

    pub async fn store(&self, song: &Song, principal: &Principal) -> Result<Song, Error> {
        if !principal.has_clearance(Clearance::Member) {
            return Err(Error::not_authorized("not authorized to create songs"));
        }

        if song.creator_id != principal.id {
            return Err(Error::bad_request("cannot create a song with a different creator"));
        }

        if !song.is_valid_key() {
            return Err(Error::bad_request("invalid key"));
        }

        validate_chord_sheet(&song.chord_sheet)?;

        self.bundles.get_by_id(song.bundle_id).await?;

        Ok(self.songs.create(song).await?)
    }

    pub async fn update(&self, song: &Song, principal: &Principal) -> Result<(), Error> {
        if !principal.has_clearance(Clearance::Editor) {
            let current = self.songs.get_by_id(song.id).await?;
            if current.creator_id != principal.id {
                return Err(Error::not_authorized(
                    "user is neither an editor nor the creator of the song",
                ));
            }
        }

        if !song.is_valid_key() {
            return Err(Error::bad_request("invalid key"));
        }

        validate_chord_sheet(&song.chord_sheet)?;

        self.bundles.get_by_id(song.bundle_id).await?;
        self.users.get_by_id(song.creator_id).await?;

        Ok(self.songs.update(song).await?)
    }

    pub async fn remove(&self, id: i64, principal: &Principal) -> Result<(), Error> {
        if !principal.has_clearance(Clearance::Editor) {
            let current = self.songs.get_by_id(id).await?;
            if current.creator_id != principal.id {
                return Err(Error::not_authorized(
                    "user is neither an editor nor the creator of the song",
                ));
            }
        }

        Ok(self.songs.delete(id).await?)
    }
}
