use anyhow::Context;
use askama::Template;

use crate::web::{ExternalLink, GITHUB_LINK};

pub const FOOTER_TEXT: &str = "Task App by Heyitsyi 🚀 View on";

#[derive(Clone, Debug, askama::Template)]
#[template(path = "footer.html")]
pub struct Footer {
    text: &'static str,
    link: ExternalLink,
}

impl Footer {
    pub fn new() -> Self {
        Self {
            text: FOOTER_TEXT,
            link: GITHUB_LINK,
        }
    }

    pub fn to_html(&self) -> anyhow::Result<String> {
        let html = self.render().context("rendering footer")?;
        log::debug!("Rendered footer ({} bytes)", html.len());
        Ok(html)
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
