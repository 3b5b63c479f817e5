use super::*;

// =============================================================
// ApiConfig
// =============================================================

#[test]
fn default_points_at_local_backend() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, "http://localhost:4000");
    assert_eq!(cfg.profile_path, PATIENT_ME_PATH);
    assert!(cfg.with_credentials);
}

#[test]
fn profile_url_joins_base_and_path() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.profile_url(), "http://localhost:4000/api/v1/user/patient/me");
}

#[test]
fn with_base_url_trims_trailing_slashes() {
    let cfg = ApiConfig::with_base_url("https://portal.example.test//");
    assert_eq!(cfg.profile_url(), "https://portal.example.test/api/v1/user/patient/me");
}

#[test]
fn with_base_url_blank_falls_back_to_default() {
    assert_eq!(ApiConfig::with_base_url("   "), ApiConfig::default());
}

#[test]
fn from_build_env_always_includes_credentials() {
    let cfg = ApiConfig::from_build_env();
    assert!(cfg.with_credentials);
    assert!(!cfg.base_url.ends_with('/'));
}
