use ww_session::AuthErrorKind;

/// Maps a provider error code to a session error kind.
///
/// Codes may carry a trailing description (`"WEAK_PASSWORD : ..."`); only the
/// leading token is matched.
pub fn classify_error_code(code: &str) -> AuthErrorKind {
    let code = code.split([' ', ':']).next().unwrap_or_default();

    match code {
        "INVALID_PASSWORD"
        | "INVALID_LOGIN_CREDENTIALS"
        | "INVALID_EMAIL"
        | "MISSING_PASSWORD"
        | "WEAK_PASSWORD"
        | "USER_DISABLED" => AuthErrorKind::InvalidCredential,
        "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => AuthErrorKind::PrincipalNotFound,
        "EMAIL_EXISTS" => AuthErrorKind::PrincipalAlreadyExists,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthErrorKind::RateLimited,
        _ => AuthErrorKind::Unknown,
    }
}
