//! Interactive shell
//!
//! Menu loop over a line-oriented console. The shell only collects input and
//! renders output; every rule lives in the auth gate and the directories.

pub mod console;
pub mod handlers;
pub mod menu;
pub mod render;
pub mod session;

use log::info;
use std::io::{self, BufRead, Write};

use crate::app::App;
pub use console::Console;
use handlers::Flow;
use menu::{AUTH_MENU, AuthChoice, MAIN_MENU, MainChoice, parse_auth_choice, parse_main_choice};
pub use session::Session;

pub struct Shell<'a, R, W> {
    app: &'a App,
    console: Console<R, W>,
    session: Session,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(app: &'a App, input: R, output: W) -> Self {
        Self {
            app,
            console: Console::new(input, output),
            session: Session::new(),
        }
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Shell started");

        loop {
            let flow = if self.session.is_logged_in() {
                self.main_menu()?
            } else {
                self.auth_menu()?
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.console.say("\nThank you for using SRMS!")?;
        info!("Shell exited");
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn auth_menu(&mut self) -> io::Result<Flow> {
        self.console.say("\n  STUDENT RECORD MANAGEMENT SYSTEM")?;
        for item in AUTH_MENU {
            self.console.say(item)?;
        }

        let Some(line) = self
            .console
            .prompt(&format!("\nEnter your choice (1-{}): ", AUTH_MENU.len()))?
        else {
            return Ok(Flow::Exit);
        };

        let console = &mut self.console;
        let session = &mut self.session;
        match parse_auth_choice(&line) {
            AuthChoice::Login => handlers::handle_login(console, self.app, session),
            AuthChoice::SignupAdmin => handlers::handle_signup(console, self.app, session, true),
            AuthChoice::SignupStaff => handlers::handle_signup(console, self.app, session, false),
            AuthChoice::Guest => handlers::handle_guest(console, self.app, session),
            AuthChoice::Exit => Ok(Flow::Exit),
            AuthChoice::Unknown(_) => {
                console.say(&format!(
                    "Invalid choice. Please select 1-{}.",
                    AUTH_MENU.len()
                ))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn main_menu(&mut self) -> io::Result<Flow> {
        let Some(identity) = self.session.identity().cloned() else {
            return Ok(Flow::Continue);
        };

        self.console.say(&format!(
            "\n  STUDENT RECORD MANAGEMENT SYSTEM [{}]",
            identity
        ))?;
        for item in MAIN_MENU {
            self.console.say(item)?;
        }

        let Some(line) = self
            .console
            .prompt(&format!("\nEnter your choice (1-{}): ", MAIN_MENU.len()))?
        else {
            return Ok(Flow::Exit);
        };

        let console = &mut self.console;
        let app = self.app;
        match parse_main_choice(&line) {
            MainChoice::AddRecord => handlers::handle_add(console, app, &identity),
            MainChoice::ViewAll => handlers::handle_view_all(console, app, &identity),
            MainChoice::Search => handlers::handle_search(console, app, &identity),
            MainChoice::Update => handlers::handle_update(console, app, &identity),
            MainChoice::Delete => handlers::handle_delete(console, app, &identity),
            MainChoice::DeleteAll => handlers::handle_delete_all(console, app, &identity),
            MainChoice::ListUsers => handlers::handle_list_users(console, app, &identity),
            MainChoice::DeleteUser => handlers::handle_delete_user(console, app, &identity),
            MainChoice::Logout => handlers::handle_logout(console, &mut self.session),
            MainChoice::Exit => Ok(Flow::Exit),
            MainChoice::Unknown(_) => {
                console.say(&format!(
                    "Invalid choice. Please select 1-{}.",
                    MAIN_MENU.len()
                ))?;
                Ok(Flow::Continue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::PasswordHasher;
    use crate::auth::credentials::MIN_COST;
    use crate::storage::{FailingStore, MemoryStore, RECORDS};
    use std::io::Cursor;
    use std::sync::Arc;

    fn app() -> App {
        App::new(Arc::new(MemoryStore::new()), PasswordHasher::new(MIN_COST))
    }

    fn run(app: &App, script: &[&str]) -> String {
        let input = script.join("\n") + "\n";
        let mut shell = Shell::new(app, Cursor::new(input), Vec::new());
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let output = run(&app(), &["5"]);
        assert!(output.contains("1. Login"));
        assert!(output.ends_with("Thank you for using SRMS!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let output = run(&app(), &[]);
        assert!(output.contains("Thank you for using SRMS!"));
    }

    #[test]
    fn test_admin_signup_add_and_search() {
        let app = app();
        let output = run(
            &app,
            &[
                "2", "root", "pw", "pw", // sign up as admin
                "1", "S1", "Ann", "Math", "A", // add
                "3", "S1", // search
                "10",
            ],
        );

        assert!(output.contains("Account created. Welcome, root (admin)!"));
        assert!(output.contains("Record added successfully for Ann"));
        assert!(output.contains("Created by: root"));
    }

    #[test]
    fn test_guest_can_list_but_not_search() {
        let app = app();
        let output = run(&app, &["4", "2", "3", "10"]);

        assert!(output.contains("Continuing as guest"));
        assert!(output.contains("No records found."));
        assert!(output.contains("Error: Access denied: guest users may not search records"));
        assert!(!output.contains("Enter Student ID to search"));
    }

    #[test]
    fn test_failed_login_continues_loop() {
        let output = run(&app(), &["1", "nobody", "pw", "5"]);
        assert!(output.contains("Error: Invalid username or password"));
        assert!(output.contains("Thank you for using SRMS!"));
    }

    #[test]
    fn test_delete_cancel_then_confirm() {
        let app = app();
        let output = run(
            &app,
            &[
                "2", "root", "pw", "pw",
                "1", "S1", "Ann", "Math", "A",
                "5", "S1", "n",
                "5", "S1", "y",
                "3", "S1",
                "10",
            ],
        );

        assert!(output.contains("Deletion cancelled."));
        assert!(output.contains("Record deleted successfully for Ann"));
        assert!(output.contains("Error: Record with ID 'S1' not found"));
    }

    #[test]
    fn test_update_with_skipped_fields() {
        let app = app();
        run(
            &app,
            &[
                "2", "root", "pw", "pw",
                "1", "S1", "Ann", "Math", "A",
                "4", "S1", "", "", "B",
                "10",
            ],
        );

        let root = crate::auth::Identity::new("root", crate::auth::Role::Admin);
        let record = app.records.find(&root, "S1").unwrap();
        assert_eq!(record.name, "Ann");
        assert_eq!(record.grade, "B");
    }

    #[test]
    fn test_logout_returns_to_auth_menu() {
        let output = run(&app(), &["4", "9", "5"]);
        assert!(output.contains("Goodbye, guest."));
        assert_eq!(output.matches("1. Login").count(), 2);
    }

    #[test]
    fn test_failed_save_is_reported_and_loop_continues() {
        let store = Arc::new(FailingStore::new());
        store.fail_saves(RECORDS);
        let app = App::new(store, PasswordHasher::new(MIN_COST));

        let output = run(
            &app,
            &[
                "2", "root", "pw", "pw",
                "1", "S1", "Ann", "Math", "A",
                "2",
                "10",
            ],
        );

        assert!(output.contains("Account created. Welcome, root (admin)!"));
        assert!(output.contains("Error: Storage error: IO error: disk full"));
        assert!(!output.contains("Record added successfully"));
        assert!(output.contains("No records found."));
        assert!(output.ends_with("Thank you for using SRMS!\n"));
    }

    #[test]
    fn test_password_spaces_are_significant() {
        let app = app();
        let output = run(
            &app,
            &[
                "3", "ann", " pw ", " pw ",
                "9",
                "1", "ann", "pw",
                "1", "ann", " pw ",
                "10",
            ],
        );

        assert_eq!(output.matches("Error: Invalid username or password").count(), 1);
        assert_eq!(output.matches("Welcome, ann (staff)!").count(), 2);
    }
}
