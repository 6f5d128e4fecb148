/// Outbound link that always opens in a new tab with opener and referrer isolation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub url: &'static str,
    pub label: &'static str,
}

pub const GITHUB_URL: &str = "https://github.com/ysong2023/TASK-APP";

pub const GITHUB_LINK: ExternalLink = ExternalLink {
    url: GITHUB_URL,
    label: "GitHub",
};

impl ExternalLink {
    pub fn target(&self) -> &'static str {
        "_blank"
    }

    pub fn rel(&self) -> &'static str {
        "noopener noreferrer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_url_is_well_formed() {
        assert!(GITHUB_LINK.url.starts_with("https://"));
        assert!(!GITHUB_LINK.url.ends_with('/'));
        assert_eq!(GITHUB_LINK.url, "https://github.com/ysong2023/TASK-APP");
        assert_eq!(GITHUB_LINK.label, "GitHub");
    }

    #[test]
    fn isolates_opener_and_referrer() {
        let rel: Vec<&str> = GITHUB_LINK.rel().split_whitespace().collect();
        assert!(rel.contains(&"noopener"));
        assert!(rel.contains(&"noreferrer"));
        assert_eq!(GITHUB_LINK.target(), "_blank");
    }
}
