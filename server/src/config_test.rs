use super::*;

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: usize = env_parse("__TEST_HAZARD_MISSING_KEY__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__TEST_HAZARD_EP_VALID__", " 9 ") };
    let val: u32 = env_parse("__TEST_HAZARD_EP_VALID__", 0);
    assert_eq!(val, 9);
    unsafe { std::env::remove_var("__TEST_HAZARD_EP_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__TEST_HAZARD_EP_INVALID__", "lots") };
    let val: u16 = env_parse("__TEST_HAZARD_EP_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__TEST_HAZARD_EP_INVALID__") };
}

// =============================================================================
// HazardConfig
// =============================================================================

#[test]
fn hazard_config_defaults_match_constants() {
    let config = HazardConfig::default();
    assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
    assert_eq!(config.avoid_threshold, DEFAULT_AVOID_THRESHOLD);
}

#[test]
fn hazard_config_default_values() {
    let config = HazardConfig::default();
    assert_eq!(config.recent_limit, 5);
    assert_eq!(config.avoid_threshold, 3);
}
