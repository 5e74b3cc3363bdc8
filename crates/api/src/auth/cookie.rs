//! Session cookie serialization and parsing.
//!
//! The session token travels in an `HttpOnly` cookie named `token`. Flag
//! selection follows the deployment mode: production serves the frontend
//! from another origin and needs `Secure; SameSite=None`, while local
//! development uses `SameSite=Strict` over plain HTTP.

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Serialize the `Set-Cookie` value that establishes a session.
pub fn session_cookie(token: &str, production: bool, max_age_secs: i64) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Max-Age={max_age_secs}; Path=/; HttpOnly{}",
        flags(production)
    )
}

/// Serialize the `Set-Cookie` value that clears the session.
///
/// The flags must match the ones used at issue time or browsers will keep
/// the original cookie.
pub fn clear_session_cookie(production: bool) -> String {
    format!(
        "{SESSION_COOKIE}=; Max-Age=0; Path=/; HttpOnly{}",
        flags(production)
    )
}

fn flags(production: bool) -> &'static str {
    if production {
        "; Secure; SameSite=None"
    } else {
        "; SameSite=Strict"
    }
}

/// Extract the session token from a `Cookie` request header value.
///
/// Handles multiple `name=value` pairs separated by `;`.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}
