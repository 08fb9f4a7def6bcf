//! Bundle policy
//!
//! Bundles form a hierarchy: `parent_id == 0` is a root, a positive
//! parent must exist, a negative one is malformed regardless of who
//! asks. Only leaf bundles may be removed.

use std::sync::Arc;

use stagekit_store::BundleStore;
use stagekit_types::{Bundle, Clearance, Error, Principal};

pub struct BundleService<B: BundleStore> {
    bundles: Arc<B>,
}

impl<B: BundleStore> BundleService<B> {
    pub fn new(bundles: Arc<B>) -> Self {
        Self { bundles }
    }

    pub async fn fetch_by_id(&self, id: i64) -> Result<Bundle, Error> {
        Ok(self.bundles.get_by_id(id).await?)
    }

    pub async fn fetch_all(&self) -> Result<Vec<Bundle>, Error> {
        Ok(self.bundles.get_all().await?)
    }

    pub async fn store(&self, bundle: &Bundle, principal: &Principal) -> Result<Bundle, Error> {
        if !principal.has_clearance(Clearance::Member) {
            return Err(Error::not_authorized("not authorized to create bundles"));
        }

        // parent checks run independently of the clearance gate
        if bundle.parent_id < 0 {
            return Err(Error::bad_request("parent_id is invalid"));
        }

        if bundle.parent_id > 0 {
            self.bundles.get_by_id(bundle.parent_id).await?;
        }

        Ok(self.bundles.create(bundle).await?)
    }

    pub async fn update(&self, bundle: &Bundle, principal: &Principal) -> Result<(), Error> {
        if !principal.has_clearance(Clearance::Member) {
            return Err(Error::not_authorized("not authorized to update bundles"));
        }

        self.bundles.get_by_id(bundle.id).await?;

        Ok(self.bundles.update(bundle).await?)
    }

    pub async fn remove(&self, id: i64, principal: &Principal) -> Result<(), Error> {
        if !principal.has_clearance(Clearance::Member) {
            return Err(Error::not_authorized("not authorized to remove bundles"));
        }

        self.bundles.get_by_id(id).await?;

        let leaves = self.bundles.get_leaves().await?;
        if !leaves.iter().any(|b| b.id == id) {
            return Err(Error::bad_request("given id is not a leaf bundle"));
        }

        Ok(self.bundles.delete(id).await?)
    }
}
