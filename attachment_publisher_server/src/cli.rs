use std::{env, env::VarError};

const README: &str = include_str!("./cli-help.txt");

/// Every variable the server reads, except `RAP_MONDO_ACCESS_TOKEN`, which must never be echoed.
const DISPLAY_ENVS: [&str; 11] = [
    "RUST_LOG",
    "RAP_HOST",
    "RAP_PORT",
    "RAP_VENDORS",
    "RAP_MONDO_API_URL",
    "RAP_MONDO_ACCOUNT_ID",
    "RAP_PUBLIC_URL",
    "RAP_HTML2PNG_POST_URI",
    "RAP_FEED_ITEMS",
    "RAP_PENDING_TTL_MINUTES",
    "RAP_EXPIRY_INTERVAL_SECS",
];

/// The server has no command line interface. Any argument at all prints the help text and the current configuration,
/// and returns true so that `main` can exit instead of starting the server.
pub fn handle_command_line_args() -> bool {
    if env::args().len() <= 1 {
        return false;
    }
    println!("\n{README}\n");
    println!("Current environment values (EXCLUDING variables that contain secrets):");
    for name in DISPLAY_ENVS {
        println!("  {name:<35} {:<15}", env_value(name));
    }
    true
}

fn env_value(name: &str) -> String {
    match env::var(name) {
        Ok(s) => s,
        Err(VarError::NotPresent) => "Not set".into(),
        Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
    }
}
