//! Platform capability queries for the home-screen install prompt

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};

/// Header a client sets when running from the home screen
pub const DISPLAY_MODE_HEADER: &str = "x-display-mode";

const TOUCH_MARKERS: [&str; 5] = ["Mobi", "Android", "iPhone", "iPad", "iPod"];
const IOS_MARKERS: [&str; 3] = ["iPhone", "iPad", "iPod"];
const IOS_OTHER_BROWSERS: [&str; 3] = ["CriOS", "FxiOS", "EdgiOS"];

/// What the install prompt needs to know about the client environment
pub trait PlatformCapabilities {
    /// Already running as an installed app
    fn is_standalone(&self) -> bool;
    fn is_touch_device(&self) -> bool;
    fn is_ios_safari(&self) -> bool;
}

/// Capabilities inferred from request headers
#[derive(Debug, Clone, Default)]
pub struct HeaderCapabilities {
    user_agent: String,
    display_mode: Option<String>,
    referer: Option<String>,
}

impl HeaderCapabilities {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let text = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string())
        };

        Self {
            user_agent: text(header::USER_AGENT.as_str()).unwrap_or_default(),
            display_mode: text(DISPLAY_MODE_HEADER),
            referer: text(header::REFERER.as_str()),
        }
    }

    fn ua_contains_any(&self, markers: &[&str]) -> bool {
        markers.iter().any(|m| self.user_agent.contains(m))
    }
}

impl PlatformCapabilities for HeaderCapabilities {
    fn is_standalone(&self) -> bool {
        let display_standalone = self
            .display_mode
            .as_deref()
            .is_some_and(|mode| mode.eq_ignore_ascii_case("standalone"));
        let trusted_web_activity = self
            .referer
            .as_deref()
            .is_some_and(|r| r.starts_with("android-app://"));
        display_standalone || trusted_web_activity
    }

    fn is_touch_device(&self) -> bool {
        self.ua_contains_any(&TOUCH_MARKERS)
    }

    fn is_ios_safari(&self) -> bool {
        self.ua_contains_any(&IOS_MARKERS)
            && self.user_agent.contains("Safari")
            && !self.ua_contains_any(&IOS_OTHER_BROWSERS)
    }
}

/// Which install affordance, if any, the page should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallHint {
    None,
    /// "Share, then Add to Home Screen" banner
    IosSafariTip,
    /// Browser-provided install prompt
    NativePrompt,
}

pub fn install_hint(caps: &dyn PlatformCapabilities) -> InstallHint {
    if caps.is_standalone() || !caps.is_touch_device() {
        InstallHint::None
    } else if caps.is_ios_safari() {
        InstallHint::IosSafariTip
    } else {
        InstallHint::NativePrompt
    }
}
