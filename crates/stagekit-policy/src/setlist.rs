//! Setlist policy

use std::sync::Arc;

use chrono::{DateTime, Utc};

use stagekit_store::{SetlistStore, UserStore};
use stagekit_types::{Clearance, Error, Principal, Setlist};

/// Guards every mutation of setlists.
///
/// Members create setlists; changing or deleting one takes admin
/// clearance, with a fallback for its creator.
pub struct SetlistService<SL: SetlistStore, U: UserStore> {
    setlists: Arc<SL>,
    users: Arc<U>,
}

impl<SL: SetlistStore, U: UserStore> SetlistService<SL, U> {
    pub fn new(setlists: Arc<SL>, users: Arc<U>) -> Self {
        Self { setlists, users }
    }

    pub async fn fetch_by_id(&self, id: i64) -> Result<Setlist, Error> {
        Ok(self.setlists.get_by_id(id).await?)
    }

    pub async fn fetch_all(&self) -> Result<Vec<Setlist>, Error> {
        Ok(self.setlists.get_all().await?)
    }

    pub async fn fetch_by_timeframe(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Setlist>, Error> {
        Ok(self.setlists.get_by_timeframe(from, to).await?)
    }

    pub async fn store(&self, setlist: &Setlist, principal: &Principal) -> Result<Setlist, Error> {
        if !principal.has_clearance(Clearance::Member) {
            return Err(Error::not_authorized("not authorized to create setlists"));
        }

        ensure_future_deadline(setlist)?;

        self.users.get_by_id(setlist.creator_id).await?;

        Ok(self.setlists.create(setlist).await?)
    }

    pub async fn update(&self, setlist: &Setlist, principal: &Principal) -> Result<Setlist, Error> {
        let current = self.setlists.get_by_id(setlist.id).await?;

        if !principal.has_clearance(Clearance::Admin) && current.creator_id != principal.id {
            return Err(Error::not_authorized("not authorized to update this setlist"));
        }

        ensure_future_deadline(setlist)?;

        self.users.get_by_id(setlist.creator_id).await?;

        Ok(self.setlists.update(setlist).await?)
    }

    pub async fn remove(&self, id: i64, principal: &Principal) -> Result<(), Error> {
        if !principal.has_clearance(Clearance::Admin) {
            let current = self.setlists.get_by_id(id).await?;
            if current.creator_id != principal.id {
                return Err(Error::not_authorized(
                    "user is neither an admin nor the creator of the setlist",
                ));
            }
        }

        Ok(self.setlists.delete(id).await?)
    }
}

fn ensure_future_deadline(setlist: &Setlist) -> Result<(), Error> {
    let now = Utc::now();
    if setlist.deadline < now {
        return Err(Error::bad_request(format!(
            "deadline {} must be later than {}",
            setlist.deadline, now
        )));
    }

    Ok(())
}
