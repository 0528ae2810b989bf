//! Text rendering for records and users

use std::fmt::Write;

use crate::records::Record;
use crate::users::UserSummary;

/// Renders records as a fixed-width table.
pub fn record_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<20} {:<15} {:<10} {:<20}",
        "ID", "Name", "Course", "Grade", "Created"
    );
    let _ = writeln!(out, "{}", "-".repeat(75));
    for record in records {
        let _ = writeln!(
            out,
            "{:<10} {:<20} {:<15} {:<10} {:<20}",
            record.id,
            record.name,
            record.course,
            record.grade,
            record.created_at_display()
        );
    }
    out
}

/// Renders one record as labelled lines.
pub fn record_detail(record: &Record) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID: {}", record.id);
    let _ = writeln!(out, "Name: {}", record.name);
    let _ = writeln!(out, "Course: {}", record.course);
    let _ = writeln!(out, "Grade: {}", record.grade);
    let _ = writeln!(out, "Created: {}", record.created_at_display());
    if !record.created_by.is_empty() {
        let _ = writeln!(out, "Created by: {}", record.created_by);
    }
    out
}

pub fn user_table(users: &[UserSummary]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<20} {:<10}", "Username", "Role");
    let _ = writeln!(out, "{}", "-".repeat(31));
    for user in users {
        let _ = writeln!(out, "{:<20} {:<10}", user.username, user.role.as_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::records::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;

    fn record() -> Record {
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
    fn test_empty_table() {
        assert_eq!(record_table(&[]), "No records found.\n");
        assert_eq!(user_table(&[]), "No users found.\n");
    }

    #[test]
    fn test_record_table_layout() {
        let table = record_table(&[record()]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID         Name                 Course"));
        assert_eq!(lines[1], "-".repeat(75));
        assert!(lines[2].starts_with("S1         Ann                  Math            A          2024-03-01 09:30:00"));
    }

    #[test]
    fn test_record_detail() {
        let detail = record_detail(&record());
        assert!(detail.contains("Name: Ann\n"));
        assert!(detail.contains("Created: 2024-03-01 09:30:00\n"));
        assert!(detail.contains("Created by: root\n"));

        let mut legacy = record();
        legacy.created_by.clear();
        assert!(!record_detail(&legacy).contains("Created by"));
    }

    #[test]
    fn test_user_table() {
        let table = user_table(&[UserSummary {
            username: "root".into(),
            role: Role::Admin,
        }]);
        assert!(table.contains("root"));
        assert!(table.contains("admin"));
    }
}
