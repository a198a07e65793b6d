//! authgate - Entry Point
//!
//! A small console driver around the login dispatch flow: reads commands
//! from stdin, dispatches login attempts, and prints the outcome.

use std::io::{self, BufRead};
use std::sync::Arc;

use log::{info, warn};

use authgate::{
    AppConfig, LoginDispatcher, LoginService, MemoryStore, Session, SharedSession, UserForm,
};

enum Command {
    Login(UserForm),
    Logout,
    Whoami,
    Quit,
    Empty,
    Unknown(String),
}

// Parse a raw console line into a Command
fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();

    match cmd.as_str() {
        "" => Command::Empty,
        "QUIT" | "Q" => Command::Quit,
        "LOGOUT" => Command::Logout,
        "WHOAMI" => Command::Whoami,
        "LOGIN" => {
            let username = parts.next().unwrap_or("");
            let password = parts.next().unwrap_or("");
            Command::Login(UserForm::new(username, password))
        }
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    };

    let store = if config.users.is_empty() {
        MemoryStore::with_defaults()
    } else {
        MemoryStore::new(config.users.clone())
    };

    let session: SharedSession = Session::shared();
    let service = LoginService::new(store, Arc::clone(&session), config.max_username_length);
    let dispatcher = LoginDispatcher::new(service);

    info!("authgate console ready");
    println!("Commands: LOGIN <user> <pass> | WHOAMI | LOGOUT | QUIT");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        match parse_command(&line) {
            Command::Login(form) => {
                let outcome = dispatcher.dispatch(Some(&form));
                println!("{}", outcome);
            }
            Command::Whoami => {
                let session = session.read().expect("session lock poisoned");
                match session.current_user() {
                    Some(user) => println!("{}", user),
                    None => println!("Not logged in"),
                }
            }
            Command::Logout => {
                let mut session = session.write().expect("session lock poisoned");
                if session.is_logged_in() {
                    session.clear();
                    println!("Logout successful");
                } else {
                    println!("Not logged in");
                }
            }
            Command::Quit => {
                println!("Goodbye");
                break;
            }
            Command::Empty => {}
            Command::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_command() {
        match parse_command("login alice alice123") {
            Command::Login(form) => {
                assert_eq!(form.username(), "alice");
                assert_eq!(form.password(), "alice123");
            }
            _ => panic!("expected Login"),
        }
    }

    #[test]
    fn test_parse_login_without_args_yields_empty_form() {
        match parse_command("LOGIN") {
            Command::Login(form) => {
                assert_eq!(form.username(), "");
                assert_eq!(form.password(), "");
            }
            _ => panic!("expected Login"),
        }
    }

    #[test]
    fn test_parse_basic_commands() {
        assert!(matches!(parse_command("QUIT"), Command::Quit));
        assert!(matches!(parse_command("q"), Command::Quit));
        assert!(matches!(parse_command("  logout  "), Command::Logout));
        assert!(matches!(parse_command("whoami"), Command::Whoami));
        assert!(matches!(parse_command(""), Command::Empty));
        assert!(matches!(parse_command("FOO bar"), Command::Unknown(_)));
    }
}
