//! Page sessions built from rendered report pages

use crate::common::{index_page, usage_page};
use report_charts::session::{EscapeAction, NavKey, PageKind, PageSession};

#[test]
fn test_usage_page_navigation() {
    let session = PageSession::from_page(&usage_page(&[]), PageKind::Usage);
    assert_eq!(session.fragments(), &["top", "daily", "hourly", "country"]);
    assert_eq!(session.navigate(NavKey::Down, "usage_202011.html#country"), Some("top"));
    assert_eq!(session.navigate(NavKey::Up, "usage_202011.html#daily"), Some("top"));
    assert_eq!(session.navigate(NavKey::End, "usage_202011.html"), Some("country"));
}

#[test]
fn test_usage_page_help() {
    let mut session = PageSession::from_page(&usage_page(&[]), PageKind::Usage);
    assert_eq!(session.help_topics().len(), 2);
    assert_eq!(session.show_help("xfer"), "Amount of data sent to clients.");
    assert_eq!(session.escape(), EscapeAction::HelpHidden);
    assert!(!session.is_help_shown());
}

#[test]
fn test_index_page_session() {
    let session = PageSession::from_page(&index_page(""), PageKind::Index);
    assert!(session.fragments().is_empty());
    assert!(session.help_topics().is_empty());
    assert_eq!(session.find_help_topic("hits"), "Unknown topic (hits)");
}

#[test]
fn test_sessions_are_independent() {
    let doc = usage_page(&[]);
    let mut first = PageSession::from_page(&doc, PageKind::Usage);
    let second = PageSession::from_page(&doc, PageKind::Usage);

    first.show_all("all_urls", "Top 10 of 40 Total URLs", 10, 40);
    assert!(first.expanded().is_some());
    assert!(second.expanded().is_none());
}
