//! Student record types

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

/// Layout of `created_at` in storage and on screen.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored student record. `id`, `created_at` and `created_by` never change
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub course: String,
    pub grade: String,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    /// Empty for records written before creators were tracked.
    #[serde(default)]
    pub created_by: String,
}

impl Record {
    pub fn created_at_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Applies the non-empty fields of an update. Returns whether anything
    /// changed.
    pub fn apply(&mut self, update: &RecordUpdate) -> bool {
        let mut changed = false;
        for (field, value) in [
            (&mut self.name, &update.name),
            (&mut self.course, &update.course),
            (&mut self.grade, &update.grade),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                if *field != value {
                    *field = value.to_string();
                    changed = true;
                }
            }
        }
        changed
    }
}

/// Current local time at storage precision.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Fields supplied when creating a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    pub id: String,
    pub name: String,
    pub course: String,
    pub grade: String,
}

impl NewRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        course: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            course: course.into(),
            grade: grade.into(),
        }
    }
}

/// Partial update. `None` and empty strings both leave the field unchanged;
/// a field cannot be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub course: Option<String>,
    pub grade: Option<String>,
}

impl RecordUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }
}

/// Caller's answer to a destructive-operation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    /// `y` or `yes` in any case confirms; anything else cancels.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Confirmation::Confirmed,
            _ => Confirmation::Cancelled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Record),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkDeleteOutcome {
    Deleted(usize),
    Cancelled,
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Record {
        Record {
            id: "S1".into(),
            name: "Ann".into(),
            course: "Math".into(),
            grade: "A".into(),
            created_at: NaiveDateTime::parse_from_str("2024-03-01 09:30:00", TIMESTAMP_FORMAT)
                .unwrap(),
            created_by: "root".into(),
        }
    }

    #[test]
    fn test_record_wire_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "S1",
                "name": "Ann",
                "course": "Math",
                "grade": "A",
                "created_at": "2024-03-01 09:30:00",
                "created_by": "root",
            })
        );
    }

    #[test]
    fn test_legacy_record_without_creator() {
        let record: Record = serde_json::from_value(json!({
            "id": "S9",
            "name": "Bo",
            "course": "Art",
            "grade": "C",
            "created_at": "2023-12-31 23:59:59",
        }))
        .unwrap();
        assert_eq!(record.created_by, "");
        assert_eq!(record.created_at_display(), "2023-12-31 23:59:59");
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let result = serde_json::from_value::<Record>(json!({
            "id": "S9",
            "name": "Bo",
            "course": "Art",
            "grade": "C",
            "created_at": "yesterday",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_skips_empty_fields() {
        let mut record = sample();
        let changed = record.apply(&RecordUpdate::default().name("").grade("B"));

        assert!(changed);
        assert_eq!(record.name, "Ann");
        assert_eq!(record.grade, "B");

        let before = record.clone();
        assert!(!record.apply(&RecordUpdate::default()));
        assert_eq!(record, before);
    }

    #[test]
    fn test_confirmation_answers() {
        assert_eq!(Confirmation::from_answer("y"), Confirmation::Confirmed);
        assert_eq!(Confirmation::from_answer(" YES "), Confirmation::Confirmed);
        assert_eq!(Confirmation::from_answer("n"), Confirmation::Cancelled);
        assert_eq!(Confirmation::from_answer(""), Confirmation::Cancelled);
    }

    #[test]
    fn test_now_has_no_subseconds() {
        use chrono::Timelike;
        assert_eq!(now().nanosecond(), 0);
    }
}
