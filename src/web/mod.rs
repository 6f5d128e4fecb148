mod footer;
mod link;

// Exports
pub use footer::{Footer, FOOTER_TEXT};
pub use link::{ExternalLink, GITHUB_LINK, GITHUB_URL};
