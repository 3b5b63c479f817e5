use super::*;

#[test]
fn credentials_are_included_by_default() {
    assert_eq!(credentials_mode(&ApiConfig::default()), CredentialsMode::Include);
}

#[test]
fn credentials_fall_back_to_same_origin_when_disabled() {
    let cfg = ApiConfig { with_credentials: false, ..ApiConfig::default() };
    assert_eq!(credentials_mode(&cfg), CredentialsMode::SameOrigin);
}

#[test]
fn http_source_keeps_config() {
    let cfg = ApiConfig::with_base_url("https://api.example.test");
    let source = HttpProfileSource::new(cfg.clone());
    assert_eq!(source.config(), &cfg);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_outside_browser_is_unavailable() {
    let result = futures::executor::block_on(fetch_current_patient(&ApiConfig::default()));
    assert_eq!(result, Err(FetchError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_source_outside_browser_is_unavailable() {
    let source = HttpProfileSource::default();
    let result = futures::executor::block_on(source.fetch_profile());
    assert_eq!(result, Err(FetchError::Unavailable));
}
