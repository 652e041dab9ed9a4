use super::*;

#[test]
fn rejected_error_formats_status_and_body() {
    let err = AuthError::Rejected { status: 401, body: "bad credentials".to_owned() };
    assert_eq!(err.to_string(), "auth request rejected (401): bad credentials");
    assert_eq!(err.status(), Some(401));
}

#[test]
fn unreachable_error_has_no_status() {
    let err = AuthError::Unreachable("connection refused".to_owned());
    assert_eq!(err.to_string(), "auth backend unreachable: connection refused");
    assert_eq!(err.status(), None);
}

#[test]
fn decode_error_has_no_status() {
    assert_eq!(AuthError::Decode("eof".to_owned()).status(), None);
}

#[test]
fn endpoint_paths_are_fixed() {
    assert_eq!(LOGIN_PATH, "/auth/login");
    assert_eq!(REGISTER_PATH, "/auth/register");
}
