//! Menu handlers
//!
//! One function per menu choice. Each collects its input, calls into the core
//! and prints the outcome. Domain errors are reported and the loop continues;
//! only console I/O errors propagate.

use log::info;
use std::io::{self, BufRead, Write};

use super::console::Console;
use super::render;
use super::session::Session;
use crate::app::App;
use crate::auth::{Identity, Operation, authorize};
use crate::error::{AppError, UserError, handle_error};
use crate::records::{BulkDeleteOutcome, Confirmation, DeleteOutcome, NewRecord, RecordUpdate};

/// What the shell loop does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Reads a line or leaves the handler with `Flow::Exit` at end of input.
macro_rules! ask {
    ($console:expr, $label:expr) => {
        match $console.prompt($label)? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
    ($console:expr, $label:expr, password) => {
        match $console.prompt_password($label)? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: impl Into<AppError>,
) -> io::Result<Flow> {
    let err = err.into();
    handle_error(&err);
    console.say(&format!("Error: {}", err))?;
    Ok(Flow::Continue)
}

/// Fails early, before any prompting, when the role cannot use a menu item.
fn precheck<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    identity: &Identity,
    operation: Operation,
) -> io::Result<bool> {
    match authorize(identity, operation) {
        Ok(()) => Ok(true),
        Err(denied) => {
            console.say(&format!("Error: {}", denied))?;
            Ok(false)
        }
    }
}

fn confirm<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
) -> io::Result<Option<Confirmation>> {
    Ok(console
        .prompt(&format!("{} (y/n): ", question))?
        .map(|answer| Confirmation::from_answer(&answer)))
}

// --------------------
// Logged-out menu
// --------------------

pub fn handle_login<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    session: &mut Session,
) -> io::Result<Flow> {
    let username = ask!(console, "Username: ");
    let password = ask!(console, "Password: ", password);

    match app.gate.login(&username, &password) {
        Ok(identity) => {
            console.say(&format!("Welcome, {}!", identity))?;
            session.login(identity);
            Ok(Flow::Continue)
        }
        Err(e) => report(console, e),
    }
}

pub fn handle_signup<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    session: &mut Session,
    admin: bool,
) -> io::Result<Flow> {
    if admin && app.users().admin_exists() {
        return report(console, UserError::DuplicateAdmin);
    }

    let username = ask!(console, "Choose a username: ");
    let password = ask!(console, "Choose a password: ", password);
    let confirmation = ask!(console, "Confirm password: ", password);

    let result = if admin {
        app.gate.signup_admin(&username, &password, &confirmation)
    } else {
        app.gate.signup_staff(&username, &password, &confirmation)
    };

    match result {
        Ok(identity) => {
            console.say(&format!("Account created. Welcome, {}!", identity))?;
            session.login(identity);
            Ok(Flow::Continue)
        }
        Err(e) => report(console, e),
    }
}

pub fn handle_guest<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    session: &mut Session,
) -> io::Result<Flow> {
    let identity = app.gate.guest_login();
    console.say("Continuing as guest (read-only access).")?;
    session.login(identity);
    Ok(Flow::Continue)
}

// --------------------
// Logged-in menu
// --------------------

pub fn handle_add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    identity: &Identity,
) -> io::Result<Flow> {
    if !precheck(console, identity, Operation::CreateRecord)? {
        return Ok(Flow::Continue);
    }

    console.say("\n   Add New Record")?;
    let id = ask!(console, "Enter Student ID: ");
    let name = ask!(console, "Enter Name: ");
    let course = ask!(console, "Enter Course: ");
    let grade = ask!(console, "Enter Grade: ");

    match app.records.create(identity, NewRecord::new(id, name, course, grade)) {
        Ok(record) => {
            console.say(&format!("Record added successfully for {}", record.name))?;
            Ok(Flow::Continue)
        }
        Err(e) => report(console, e),
    }
}

pub fn handle_view_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    identity: &Identity,
) -> io::Result<Flow> {
    match app.records.list_all(identity) {
        Ok(records) => {
            console.say("")?;
            console.say(&render::record_table(&records))?;
            Ok(Flow::Continue)
        }
        Err(e) => report(console, e),
    }
}

pub fn handle_search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    identity: &Identity,
) -> io::Result<Flow> {
    if !precheck(console, identity, Operation::FindRecord)? {
        return Ok(Flow::Continue);
    }

    let id = ask!(console, "Enter Student ID to search: ");
    match app.records.find(identity, &id) {
        Ok(record) => {
            console.say(&render::record_detail(&record))?;
            Ok(Flow::Continue)
        }
        Err(e) => report(console, e),
    }
}

pub fn handle_update<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    identity: &Identity,
) -> io::Result<Flow> {
    if !precheck(console, identity, Operation::UpdateRecord)? {
        return Ok(Flow::Continue);
    }

    let id = ask!(console, "Enter Student ID to update: ");
    match app.records.find(identity, &id) {
        Ok(record) => console.say(&render::record_detail(&record))?,
        Err(e) => return report(console, e),
    }

    let update = RecordUpdate {
        name: Some(ask!(console, "Enter new Name (or press Enter to skip): ")),
        course: Some(ask!(console, "Enter new Course (or press Enter to skip): ")),
        grade: Some(ask!(console, "Enter new Grade (or press Enter to skip): ")),
    };

    match app.records.update(identity, &id, &update) {
        Ok(_) => {
            console.say(&format!("Record updated successfully for ID: {}", id))?;
            Ok(Flow::Continue)
        }
        Err(e) => report(console, e),
    }
}

pub fn handle_delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    identity: &Identity,
) -> io::Result<Flow> {
    if !precheck(console, identity, Operation::DeleteRecord)? {
        return Ok(Flow::Continue);
    }

    let id = ask!(console, "Enter Student ID to delete: ");
    let Some(confirmation) = confirm(
        console,
        &format!("Are you sure you want to delete record '{}'?", id),
    )?
    else {
        return Ok(Flow::Exit);
    };

    match app.records.delete(identity, &id, confirmation) {
        Ok(DeleteOutcome::Deleted(record)) => {
            console.say(&format!("Record deleted successfully for {}", record.name))?;
            Ok(Flow::Continue)
        }
        Ok(DeleteOutcome::Cancelled) => {
            console.say("Deletion cancelled.")?;
            Ok(Flow::Continue)
        }
        Err(e) => report(console, e),
    }
}

pub fn handle_delete_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    identity: &Identity,
) -> io::Result<Flow> {
    if !precheck(console, identity, Operation::DeleteAllRecords)? {
        return Ok(Flow::Continue);
    }

    let Some(confirmation) = confirm(console, "Are you sure you want to delete all records?")?
    else {
        return Ok(Flow::Exit);
    };

    match app.records.delete_all(identity, confirmation) {
        Ok(BulkDeleteOutcome::Deleted(count)) => {
            console.say(&format!("All records deleted successfully ({} removed).", count))?;
            Ok(Flow::Continue)
        }
        Ok(BulkDeleteOutcome::Cancelled) => {
            console.say("Deletion cancelled.")?;
            Ok(Flow::Continue)
        }
        Err(e) => report(console, e),
    }
}

pub fn handle_list_users<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    identity: &Identity,
) -> io::Result<Flow> {
    match app.users().list_users(identity) {
        Ok(users) => {
            console.say(&render::user_table(&users))?;
            Ok(Flow::Continue)
        }
        Err(e) => report(console, e),
    }
}

pub fn handle_delete_user<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &App,
    identity: &Identity,
) -> io::Result<Flow> {
    if !precheck(console, identity, Operation::DeleteUser)? {
        return Ok(Flow::Continue);
    }

    let username = ask!(console, "Enter username to delete: ");
    match app.users().delete_user(identity, &username) {
        Ok(user) => {
            console.say(&format!("User '{}' deleted.", user.username))?;
            Ok(Flow::Continue)
        }
        Err(e) => report(console, e),
    }
}

pub fn handle_logout<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> io::Result<Flow> {
    if let Some(identity) = session.logout() {
        info!("{} logged out", identity);
        console.say(&format!("Goodbye, {}.", identity.username()))?;
    }
    Ok(Flow::Continue)
}
