use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha512};
use tower_cookies::{Cookie, Cookies, Key, cookie::SameSite};

const CSRF_COOKIE_NAME: &str = "_csrf";
const TOKEN_LEN: usize = 32;

pub const CSRF_FIELD: &str = "csrf_token";
pub const CSRF_ERROR: &str = "The CSRF token is missing or invalid.";

/// Return this browser's CSRF token, minting and storing a new one if needed.
pub fn issue_token(cookies: &Cookies, key: &Key) -> String {
    let signed = cookies.signed(key);
    if let Some(cookie) = signed.get(CSRF_COOKIE_NAME) {
        if cookie.value().len() == TOKEN_LEN {
            return cookie.value().to_string();
        }
    }

    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect();

    let mut cookie = Cookie::new(CSRF_COOKIE_NAME, token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    signed.add(cookie);

    token
}

/// Check a submitted token against the signed cookie.
pub fn verify_token(cookies: &Cookies, key: &Key, submitted: &str) -> bool {
    if submitted.is_empty() {
        return false;
    }
    cookies
        .signed(key)
        .get(CSRF_COOKIE_NAME)
        .is_some_and(|cookie| tokens_match(cookie.value(), submitted))
}

/// Compare digests rather than the tokens so the time taken says nothing
/// about how much of the submitted token is right.
pub fn tokens_match(expected: &str, submitted: &str) -> bool {
    Sha512::digest(expected.as_bytes()) == Sha512::digest(submitted.as_bytes())
}
