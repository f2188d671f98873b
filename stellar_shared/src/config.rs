use std::{env, str::FromStr};

#[derive(Debug, Clone, Default)]
pub struct ToolConfig {
    pub debug_mode: bool,
    // set when launched next to a hyperwarp session
    pub session_id: Option<String>,
}

pub fn try_get<T: FromStr>(key: &str) -> Option<T> {
    match env::var(key) {
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

pub fn booleanify(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => parse_bool(&value).unwrap_or(default),
        Err(_) => default,
    }
}

impl ToolConfig {
    pub fn from_env() -> ToolConfig {
        ToolConfig {
            debug_mode: booleanify("DEBUG_HW", false),
            session_id: try_get::<String>("HW_SESSION_ID").filter(|sid| !sid.is_empty()),
        }
    }
}
