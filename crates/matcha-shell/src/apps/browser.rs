//! Simulated browser app.
//!
//! The shell's contract with the page-viewing collaborator is tiny: hand
//! it a URL, get a load-complete signal back to clear the loading bar.
//! Everything here is address-bar bookkeeping -- normalization of
//! non-URL input into a search, a loading flag, and navigation history.

use matcha_types::config::BrowserConfig;

/// Runtime state of the browser chrome.
#[derive(Debug)]
pub struct BrowserState {
    /// Address bar contents (editable).
    address: String,
    /// URL currently handed to the page viewer.
    current: String,
    history: Vec<String>,
    loading: bool,
    search_prefix: String,
}

impl BrowserState {
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            address: config.home_url.clone(),
            current: config.home_url.clone(),
            history: vec![config.home_url.clone()],
            loading: false,
            search_prefix: config.search_prefix.clone(),
        }
    }

    pub fn set_address(&mut self, text: &str) {
        self.address = text.to_string();
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn current_url(&self) -> &str {
        &self.current
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Navigate to the address bar contents.
    ///
    /// Anything that does not look like a URL becomes a search query.
    /// Blank input is declined without a state change.
    pub fn navigate(&mut self) -> bool {
        let entry = self.address.trim();
        if entry.is_empty() {
            return false;
        }
        let target = if entry.starts_with("http") {
            entry.to_string()
        } else {
            format!("{}{}", self.search_prefix, percent_encode(entry))
        };
        self.address = target.clone();
        self.current = target.clone();
        self.history.push(target);
        self.loading = true;
        true
    }

    /// Re-request the current page.
    pub fn reload(&mut self) {
        self.loading = true;
    }

    /// Step back in history, if there is anywhere to go.
    pub fn back(&mut self) -> bool {
        if self.history.len() < 2 {
            return false;
        }
        self.history.pop();
        let target = self.history.last().cloned().unwrap_or_default();
        self.address = target.clone();
        self.current = target;
        self.loading = true;
        true
    }

    /// The page viewer finished loading.
    pub fn load_complete(&mut self) {
        self.loading = false;
    }
}

/// Percent-encode a search query for use in a URL query string.
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            },
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser() -> BrowserState {
        BrowserState::new(&BrowserConfig::default())
    }

    #[test]
    fn starts_at_home_not_loading() {
        let b = browser();
        assert_eq!(b.current_url(), "https://www.bing.com");
        assert!(!b.is_loading());
        assert_eq!(b.history().len(), 1);
    }

    #[test]
    fn url_input_navigates_directly() {
        let mut b = browser();
        b.set_address("https://example.com/page");
        assert!(b.navigate());
        assert_eq!(b.current_url(), "https://example.com/page");
        assert!(b.is_loading());
        b.load_complete();
        assert!(!b.is_loading());
    }

    #[test]
    fn plain_text_becomes_a_search() {
        let mut b = browser();
        b.set_address("rust borrow checker");
        b.navigate();
        assert_eq!(
            b.current_url(),
            "https://www.google.com/search?q=rust%20borrow%20checker"
        );
    }

    #[test]
    fn blank_input_is_declined() {
        let mut b = browser();
        b.set_address("   ");
        assert!(!b.navigate());
        assert!(!b.is_loading());
        assert_eq!(b.history().len(), 1);
    }

    #[test]
    fn back_steps_through_history() {
        let mut b = browser();
        b.set_address("https://example.com/a");
        b.navigate();
        b.set_address("https://example.com/b");
        b.navigate();
        assert!(b.back());
        assert_eq!(b.current_url(), "https://example.com/a");
        assert!(b.back());
        assert_eq!(b.current_url(), "https://www.bing.com");
        // Nowhere further back.
        assert!(!b.back());
    }

    #[test]
    fn percent_encoding_covers_reserved_bytes() {
        assert_eq!(percent_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(percent_encode("safe-._~09"), "safe-._~09");
    }
}
