//! Instance identity
//!
//! Every response carries the hostname of the instance that produced it, so
//! clients behind a load balancer can see which replica answered.

const UNKNOWN_HOST: &str = "unknown";

/// Resolve the identity of this instance.
///
/// Precedence: explicit override, then the OS hostname, then the `HOSTNAME`
/// environment variable, then `"unknown"`.
pub fn resolve_instance_name(override_name: Option<&str>) -> String {
    if let Some(name) = override_name.map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_string();
    }

    system_hostname()
        .or_else(|| non_empty_env("HOSTNAME"))
        .unwrap_or_else(|| UNKNOWN_HOST.to_string())
}

#[cfg(unix)]
fn system_hostname() -> Option<String> {
    match nix::unistd::gethostname() {
        Ok(name) => Some(name.to_string_lossy().into_owned()).filter(|n| !n.is_empty()),
        Err(e) => {
            tracing::warn!("Failed to read system hostname: {}", e);
            None
        },
    }
}

#[cfg(windows)]
fn system_hostname() -> Option<String> {
    non_empty_env("COMPUTERNAME")
}

#[cfg(not(any(unix, windows)))]
fn system_hostname() -> Option<String> {
    None
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
