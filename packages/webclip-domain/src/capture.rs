use url::Url;

use crate::{Error, Result};

/// Browser-internal schemes the extension legitimately reports. These never
/// parse as regular web URLs but rejecting them would drop valid captures.
pub const BROWSER_URL_PREFIXES: [&str; 4] =
	["chrome://", "chrome-extension://", "edge://", "about:"];

/// Substituted when the extension could not determine a URL at all.
pub const FALLBACK_URL: &str = "unknown";

pub const DEFAULT_TITLE: &str = "Untitled";

pub fn is_browser_internal(url: &str) -> bool {
	BROWSER_URL_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

/// Applies the browser-URL tolerance rule: browser-internal URLs pass
/// verbatim, an empty URL becomes [`FALLBACK_URL`], and anything else must
/// parse as an absolute URL.
pub fn resolve_url(raw: &str) -> Result<String> {
	if raw.is_empty() {
		return Ok(FALLBACK_URL.to_string());
	}
	if is_browser_internal(raw) {
		return Ok(raw.to_string());
	}

	Url::parse(raw).map_err(|_| Error::InvalidUrl { url: raw.to_string() })?;

	Ok(raw.to_string())
}

pub fn default_title(title: String) -> String {
	if title.is_empty() { DEFAULT_TITLE.to_string() } else { title }
}

/// Plain absolute-URL check, without the capture tolerance.
pub fn is_absolute_url(raw: &str) -> bool {
	Url::parse(raw).is_ok()
}
