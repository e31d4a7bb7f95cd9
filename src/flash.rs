use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies, Key};

use crate::error::{AppError, Result};

const FLASH_COOKIE_NAME: &str = "_flash";

/// A one-shot notice shown on the next rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashData {
    pub kind: String,
    pub message: String,
}

impl FlashData {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success".to_owned(),
            message: message.into(),
        }
    }
}

/// Store a notice for the next request.
pub fn set_flash(cookies: &Cookies, key: &Key, data: &FlashData) -> Result<()> {
    let value = serde_json::to_string(data).map_err(|e| AppError::Internal(e.to_string()))?;

    let mut cookie = Cookie::new(FLASH_COOKIE_NAME, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookies.signed(key).add(cookie);

    Ok(())
}

/// Read the pending notice, if any, and clear it.
pub fn take_flash(cookies: &Cookies, key: &Key) -> Option<FlashData> {
    let signed = cookies.signed(key);
    let cookie = signed.get(FLASH_COOKIE_NAME)?;

    let mut removal = Cookie::new(FLASH_COOKIE_NAME, "");
    removal.set_path("/");
    cookies.remove(removal);

    serde_json::from_str(cookie.value()).ok()
}
