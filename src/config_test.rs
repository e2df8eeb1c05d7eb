use super::*;

// =============================================================================
// ApiConfig::from_env — env manipulation requires unsafe in edition 2024.
// Tests touching the env must run serially (single test thread).
// =============================================================================

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_api_env() {
    unsafe {
        std::env::remove_var("API_BASE_URL");
        std::env::remove_var("API_TIMEOUT_SECS");
        std::env::remove_var("API_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn defaults_match_from_env_with_nothing_set() {
    unsafe { clear_api_env() };
    let config = ApiConfig::from_env();
    assert_eq!(config.base_url, "http://localhost:5000/");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.connect_timeout_secs, 10);
}

#[test]
fn env_overrides_are_picked_up() {
    unsafe {
        clear_api_env();
        std::env::set_var("API_BASE_URL", "https://api.example.com");
        std::env::set_var("API_TIMEOUT_SECS", "5");
    }
    let config = ApiConfig::from_env();
    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.connect_timeout_secs, 10);
    unsafe { clear_api_env() };
}

#[test]
fn unparsable_timeout_falls_back_to_default() {
    unsafe {
        clear_api_env();
        std::env::set_var("API_TIMEOUT_SECS", "not-a-number");
    }
    let config = ApiConfig::from_env();
    assert_eq!(config.timeout_secs, 30);
    unsafe { clear_api_env() };
}
