//! SRMS - Student Record Management System
//!
//! A single-session command-line record manager with role-based access
//! control over two JSON-backed collections: user accounts and student records.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod records;
pub mod shell;
pub mod storage;
pub mod users;

pub use app::App;
pub use shell::Shell;
