//! Menu choices
//!
//! Parses a line typed at a menu prompt into a choice. Both the item number
//! and a short keyword are accepted.

/// Choices offered before anyone is logged in.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthChoice {
    Login,
    SignupAdmin,
    SignupStaff,
    Guest,
    Exit,
    Unknown(String),
}

/// Choices offered to a logged-in (or guest) session.
#[derive(Debug, PartialEq, Eq)]
pub enum MainChoice {
    AddRecord,
    ViewAll,
    Search,
    Update,
    Delete,
    DeleteAll,
    ListUsers,
    DeleteUser,
    Logout,
    Exit,
    Unknown(String),
}

pub const AUTH_MENU: &[&str] = &[
    "1. Login",
    "2. Sign up as admin",
    "3. Sign up as staff",
    "4. Continue as guest",
    "5. Exit",
];

pub const MAIN_MENU: &[&str] = &[
    "1. Add New Record",
    "2. View All Records",
    "3. Search Record",
    "4. Update Record",
    "5. Delete Record",
    "6. Delete All Records",
    "7. List Users",
    "8. Delete User",
    "9. Logout",
    "10. Exit",
];

pub fn parse_auth_choice(raw: &str) -> AuthChoice {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "1" | "login" => AuthChoice::Login,
        "2" | "admin" => AuthChoice::SignupAdmin,
        "3" | "staff" | "signup" => AuthChoice::SignupStaff,
        "4" | "guest" => AuthChoice::Guest,
        "5" | "exit" | "quit" | "q" => AuthChoice::Exit,
        _ => AuthChoice::Unknown(trimmed.to_string()),
    }
}

pub fn parse_main_choice(raw: &str) -> MainChoice {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "1" | "add" => MainChoice::AddRecord,
        "2" | "list" | "view" => MainChoice::ViewAll,
        "3" | "search" | "find" => MainChoice::Search,
        "4" | "update" => MainChoice::Update,
        "5" | "delete" => MainChoice::Delete,
        "6" | "delete-all" => MainChoice::DeleteAll,
        "7" | "users" => MainChoice::ListUsers,
        "8" | "delete-user" => MainChoice::DeleteUser,
        "9" | "logout" => MainChoice::Logout,
        "10" | "exit" | "quit" | "q" => MainChoice::Exit,
        _ => MainChoice::Unknown(trimmed.to_string()),
    }
}
