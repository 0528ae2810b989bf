//! Record directory
//!
//! CRUD over student records. Every entry point authorizes the caller first,
//! then validates input, then loads, mutates and saves the whole collection.
//! Student ids are compared and stored without surrounding whitespace.

use log::{info, warn};
use std::sync::Arc;

use super::model::{
    BulkDeleteOutcome, Confirmation, DeleteOutcome, NewRecord, Record, RecordUpdate, now,
};
use crate::auth::Identity;
use crate::auth::permissions::{Operation, authorize};
use crate::auth::validator::require_field;
use crate::error::RecordError;
use crate::storage::{CollectionStore, RECORDS, load_typed, save_typed};

#[derive(Clone)]
pub struct RecordDirectory {
    store: Arc<dyn CollectionStore>,
}

impl RecordDirectory {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<Record> {
        load_typed(&*self.store, RECORDS)
    }

    fn save(&self, records: &[Record]) -> Result<(), RecordError> {
        save_typed(&*self.store, RECORDS, records)?;
        Ok(())
    }

    pub fn create(&self, identity: &Identity, mut new: NewRecord) -> Result<Record, RecordError> {
        authorize(identity, Operation::CreateRecord)?;
        new.id = new.id.trim().to_string();

        require_field("Student ID", &new.id)?;
        require_field("Name", &new.name)?;
        require_field("Course", &new.course)?;
        require_field("Grade", &new.grade)?;

        let mut records = self.load();
        if records.iter().any(|record| record.id == new.id) {
            warn!("Refused to create record '{}': id exists", new.id);
            return Err(RecordError::DuplicateId(new.id));
        }

        let record = Record {
            id: new.id,
            name: new.name,
            course: new.course,
            grade: new.grade,
            created_at: now(),
            created_by: identity.username().to_string(),
        };
        records.push(record.clone());
        self.save(&records)?;

        info!("{} created record '{}'", identity, record.id);
        Ok(record)
    }

    /// Every record in insertion order. Open to all roles.
    pub fn list_all(&self, identity: &Identity) -> Result<Vec<Record>, RecordError> {
        authorize(identity, Operation::ListRecords)?;
        Ok(self.load())
    }

    pub fn find(&self, identity: &Identity, id: &str) -> Result<Record, RecordError> {
        authorize(identity, Operation::FindRecord)?;
        let id = id.trim();

        self.load()
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| RecordError::NotFound(id.to_string()))
    }

    pub fn update(
        &self,
        identity: &Identity,
        id: &str,
        update: &RecordUpdate,
    ) -> Result<Record, RecordError> {
        authorize(identity, Operation::UpdateRecord)?;
        let id = id.trim();

        let mut records = self.load();
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| RecordError::NotFound(id.to_string()))?;

        if !record.apply(update) {
            info!("{} left record '{}' unchanged", identity, id);
            return Ok(record.clone());
        }

        let updated = record.clone();
        self.save(&records)?;

        info!("{} updated record '{}'", identity, id);
        Ok(updated)
    }

    /// Removes a record outright; its id may be reused afterwards.
    pub fn delete(
        &self,
        identity: &Identity,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, RecordError> {
        authorize(identity, Operation::DeleteRecord)?;
        let id = id.trim();

        let mut records = self.load();
        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| RecordError::NotFound(id.to_string()))?;

        if confirmation == Confirmation::Cancelled {
            info!("{} cancelled deletion of record '{}'", identity, id);
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = records.remove(index);
        self.save(&records)?;

        info!("{} deleted record '{}'", identity, id);
        Ok(DeleteOutcome::Deleted(removed))
    }

    pub fn delete_all(
        &self,
        identity: &Identity,
        confirmation: Confirmation,
    ) -> Result<BulkDeleteOutcome, RecordError> {
        authorize(identity, Operation::DeleteAllRecords)?;

        if confirmation == Confirmation::Cancelled {
            info!("{} cancelled deletion of all records", identity);
            return Ok(BulkDeleteOutcome::Cancelled);
        }

        let count = self.load().len();
        self.save(&[])?;

        info!("{} deleted all {} records", identity, count);
        Ok(BulkDeleteOutcome::Deleted(count))
    }
}
