use crate::models::MeetingLink;
use regex::Regex;

pub mod logging;

/// Identifies the video platform behind a meeting URL.
///
/// Any non-blank URL yields a link; unknown hosts are labelled "Meeting".
pub fn meeting_link(url: &str) -> Option<MeetingLink> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let patterns = vec![
        (r"(?i)^(https?://)?([\w-]+\.)*zoom\.us/", "Zoom"),
        (r"(?i)^(https?://)?meet\.google\.com/", "Google Meet"),
        (r"(?i)^(https?://)?teams\.(microsoft|live)\.com/", "Teams"),
        (r"(?i)^(https?://)?([\w-]+\.)*webex\.com/", "Webex"),
        (r"(?i)^(https?://)?meet\.jit\.si/", "Jitsi"),
        (r"(?i)^(https?://)?([\w-]+\.)*whereby\.com/", "Whereby"),
    ];

    for (pattern, platform) in patterns {
        if let Ok(regex) = Regex::new(pattern) {
            if regex.is_match(url) {
                return Some(MeetingLink::new(platform.to_string(), url.to_string()));
            }
        }
    }

    Some(MeetingLink::new("Meeting".to_string(), url.to_string()))
}

/// Sums the amounts that parse as numbers; anything else counts as zero.
pub fn total_amount<'a>(amounts: impl IntoIterator<Item = &'a str>) -> f64 {
    amounts
        .into_iter()
        .filter_map(|amount| amount.trim().replace(',', "").parse::<f64>().ok())
        .sum()
}
