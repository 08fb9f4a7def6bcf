//! Setlist entry policy

use std::sync::Arc;

use stagekit_store::{SetlistEntryStore, SetlistStore, SongStore};
use stagekit_types::{
    is_valid_transpose, Clearance, Error, Principal, Setlist, SetlistEntry, TRANSPOSE_MAX,
    TRANSPOSE_MIN,
};

/// Guards batch mutations of setlist entries.
///
/// Writing entries takes editor clearance; removing them takes admin
/// clearance with a fallback for the setlist's creator. An empty batch
/// is a trivially successful no-op, never an error.
pub struct SetlistEntryService<SE: SetlistEntryStore, SL: SetlistStore, S: SongStore> {
    entries: Arc<SE>,
    setlists: Arc<SL>,
    songs: Arc<S>,
}

impl<SE: SetlistEntryStore, SL: SetlistStore, S: SongStore> SetlistEntryService<SE, SL, S> {
    pub fn new(entries: Arc<SE>, setlists: Arc<SL>, songs: Arc<S>) -> Self {
        Self {
            entries,
            setlists,
            songs,
        }
    }

    pub async fn fetch_by_id(&self, id: i64) -> Result<SetlistEntry, Error> {
        Ok(self.entries.get_by_id(id).await?)
    }

    pub async fn fetch_all(&self) -> Result<Vec<SetlistEntry>, Error> {
        let entries = self.entries.get_all().await?;
        ensure_rank_order(&entries)?;

        Ok(entries)
    }

    pub async fn fetch_by_setlists(
        &self,
        setlists: &[Setlist],
    ) -> Result<Vec<SetlistEntry>, Error> {
        if setlists.is_empty() {
            return Err(Error::bad_request("no setlists given"));
        }

        let ids: Vec<i64> = setlists.iter().map(|s| s.id).collect();
        let entries = self.entries.get_by_setlists(&ids).await?;
        ensure_rank_order(&entries)?;

        Ok(entries)
    }

    pub async fn store_batch(
        &self,
        entries: &[SetlistEntry],
        principal: &Principal,
    ) -> Result<Vec<SetlistEntry>, Error> {
        if !principal.has_clearance(Clearance::Editor) {
            return Err(Error::not_authorized("not authorized to modify setlist entries"));
        }

        if entries.is_empty() {
            return Ok(Vec::new());
        }

        self.check_batch(entries, false).await?;

        Ok(self.entries.create_batch(entries).await?)
    }

    pub async fn update_batch(
        &self,
        entries: &[SetlistEntry],
        principal: &Principal,
    ) -> Result<(), Error> {
        if !principal.has_clearance(Clearance::Editor) {
            return Err(Error::not_authorized("not authorized to modify setlist entries"));
        }

        if entries.is_empty() {
            return Ok(());
        }

        self.check_batch(entries, true).await?;

        Ok(self.entries.update_batch(entries).await?)
    }

    pub async fn remove_batch(
        &self,
        setlist: &Setlist,
        ids: &[i64],
        principal: &Principal,
    ) -> Result<(), Error> {
        ensure_admin_or_creator(setlist, principal)?;

        if ids.is_empty() {
            return Ok(());
        }

        for id in ids {
            self.entries.get_by_id(*id).await?;
        }

        Ok(self.entries.delete_batch(ids).await?)
    }

    pub async fn remove_by_setlist(
        &self,
        setlist: &Setlist,
        principal: &Principal,
    ) -> Result<(), Error> {
        ensure_admin_or_creator(setlist, principal)?;

        let entries = self.entries.get_by_setlists(&[setlist.id]).await?;
        if entries.is_empty() {
            return Ok(());
        }

        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();

        Ok(self.entries.delete_batch(&ids).await?)
    }

    /// Shared field checks for write batches: transpose in range, songs
    /// exist, one setlist across the batch, and that setlist exists.
    async fn check_batch(&self, entries: &[SetlistEntry], must_exist: bool) -> Result<(), Error> {
        let setlist_id = entries[0].setlist_id;

        for entry in entries {
            if !is_valid_transpose(entry.transpose) {
                return Err(Error::bad_request(format!(
                    "transpose must be between {TRANSPOSE_MIN} and {TRANSPOSE_MAX}"
                )));
            }

            self.songs.get_by_id(entry.song_id).await?;

            if must_exist {
                self.entries.get_by_id(entry.id).await?;
            }

            if entry.setlist_id != setlist_id {
                return Err(Error::bad_request("setlist id must be the same across entries"));
            }
        }

        self.setlists.get_by_id(setlist_id).await?;

        Ok(())
    }
}

fn ensure_admin_or_creator(setlist: &Setlist, principal: &Principal) -> Result<(), Error> {
    if !principal.has_clearance(Clearance::Admin) && setlist.creator_id != principal.id {
        return Err(Error::not_authorized(
            "user is neither an admin nor the creator of the setlist",
        ));
    }

    Ok(())
}

fn ensure_rank_order(entries: &[SetlistEntry]) -> Result<(), Error> {
    let mut previous = i64::MIN;
    for entry in entries {
        if entry.rank < previous {
            tracing::error!("setlist entries came back out of rank order");
            return Err(Error::Internal);
        }
        previous = entry.rank;
    }

    Ok(())
}
