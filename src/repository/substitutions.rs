//! Substitution history repository (append-only)

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::SubstitutionRecord;

#[derive(Clone, Default)]
pub struct SubstitutionsRepository {
    records: Arc<RwLock<Vec<SubstitutionRecord>>>,
}

impl SubstitutionsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, record: SubstitutionRecord) -> SubstitutionRecord {
        self.records.write().await.push(record.clone());
        record
    }

    /// Move every record of `from` to the employee ID `to`; returns how many moved
    pub async fn rekey_employee(&self, from: &str, to: &str) -> usize {
        let mut records = self.records.write().await;
        let mut moved = 0;
        for record in records.iter_mut().filter(|record| record.employee_id == from) {
            record.employee_id = to.to_string();
            moved += 1;
        }
        moved
    }

    /// Records of one employee, oldest first
    pub async fn list_for_employee(&self, employee_id: &str) -> Vec<SubstitutionRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| record.employee_id == employee_id)
            .cloned()
            .collect()
    }
}
