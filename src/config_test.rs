use super::*;

#[test]
fn default_api_base_is_api() {
    assert_eq!(ClientConfig::default().api_base, "/api");
}

#[test]
fn with_api_base_trims_trailing_slashes() {
    let cfg = ClientConfig::with_api_base("https://gate.example.test/api//");
    assert_eq!(cfg.api_base, "https://gate.example.test/api");
}

#[test]
fn endpoint_joins_base_and_path() {
    let cfg = ClientConfig::with_api_base("/api/");
    assert_eq!(cfg.endpoint("/auth/login"), "/api/auth/login");
}

#[test]
fn empty_base_yields_root_relative_endpoints() {
    let cfg = ClientConfig::with_api_base("");
    assert_eq!(cfg.endpoint("/auth/register"), "/auth/register");
}

#[test]
fn from_env_reads_runtime_override() {
    unsafe { std::env::set_var(API_BASE_ENV, "http://127.0.0.1:9000/v1/") };
    let cfg = ClientConfig::from_env();
    unsafe { std::env::remove_var(API_BASE_ENV) };
    assert_eq!(cfg.api_base, "http://127.0.0.1:9000/v1");
}

// =============================================================
// Legacy redirects
// =============================================================

#[test]
fn legacy_scan_path_redirects_to_parent() {
    assert_eq!(legacy_redirect("/gatekeeper/scan"), Some("/gatekeeper"));
    assert_eq!(legacy_redirect("/gatekeeper/scan/"), Some("/gatekeeper"));
}

#[test]
fn unknown_paths_have_no_legacy_redirect() {
    assert_eq!(legacy_redirect("/gatekeeper"), None);
    assert_eq!(legacy_redirect("/"), None);
    assert_eq!(legacy_redirect("/gatekeeper/scanner"), None);
}

// =============================================================
// Image allow-list
// =============================================================

#[test]
fn allow_list_has_three_hosts() {
    assert_eq!(ALLOWED_IMAGE_HOSTS.len(), 3);
}

#[test]
fn allowed_hosts_pass_over_https() {
    for host in ALLOWED_IMAGE_HOSTS {
        assert!(is_allowed_image_url(&format!("https://{host}/a/b.png?w=200")), "{host}");
    }
}

#[test]
fn port_and_case_do_not_defeat_host_match() {
    assert!(is_allowed_image_url("https://RES.Cloudinary.com:443/x.jpg"));
}

#[test]
fn non_https_and_foreign_hosts_are_rejected() {
    assert!(!is_allowed_image_url("http://images.unsplash.com/x.png"));
    assert!(!is_allowed_image_url("https://evil.example.com/x.png"));
    assert!(!is_allowed_image_url("https://images.unsplash.com.evil.test/x.png"));
    assert!(!is_allowed_image_url("https://images.unsplash.com@evil.test/x.png"));
    assert!(!is_allowed_image_url("/local/x.png"));
}
