use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::prediction::model::FeatureRecord;
use crate::modules::user_data::model::UserSnapshot;
use crate::services::classifier::Label;

pub type UserDataSlot = Arc<RwLock<Option<UserSnapshot>>>;

pub struct UserDataCrud<'a> {
    slot: &'a UserDataSlot,
}

impl<'a> UserDataCrud<'a> {
    pub fn new(slot: &'a UserDataSlot) -> Self {
        Self { slot }
    }

    pub async fn save(&self, record: FeatureRecord, label: Label) {
        *self.slot.write().await = Some(UserSnapshot::new(record, label));
    }

    pub async fn latest(&self) -> Option<UserSnapshot> {
        self.slot.read().await.clone()
    }
}
