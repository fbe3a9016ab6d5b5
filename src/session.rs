//! Per-page viewing session
//!
//! Holds the state a rendered report page needs while it is being viewed:
//! the fragment list used for keyboard navigation, the one "view all"
//! section that may be expanded, and the help topics with the currently
//! shown one. A session is created from the page markup and owned by
//! whoever drives the page, so two pages never share state.

use serde::Serialize;

use crate::html::decode_entities;
use crate::html::scan::{element_inner, normalize_ws, Token, Tokenizer};

/// Element holding the main menu links
pub const MAIN_MENU_ID: &str = "main_menu";

/// Element holding the hidden help topics
pub const HELP_TEXT_ID: &str = "helptext";

/// Fragment of the page top, always the first navigation stop
pub const TOP_FRAGMENT: &str = "top";

/// Kind of report page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Monthly usage page with a main menu
    Usage,
    /// Index page listing the months
    Index,
}

/// Keyboard navigation requests (Ctrl+Alt with Home, End, Up, Down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Home,
    End,
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpTopic {
    pub topic: String,
    pub text: String,
}

/// The expanded "view all" section and the title it had before expanding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedSection {
    /// Anchor name of the report the section belongs to
    pub report: String,
    pub original_title: String,
    pub title: String,
}

/// Outcome of the escape key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeAction {
    HelpHidden,
    /// A section was collapsed; its title is restored to `original_title`
    Collapsed(ExpandedSection),
    Nothing,
}

#[derive(Debug, Clone, Default)]
pub struct PageSession {
    fragments: Vec<String>,
    help: Vec<HelpTopic>,
    expanded: Option<ExpandedSection>,
    help_shown: Option<String>,
}

/// Fragment identifier of a link, empty when there is none
///
/// # Examples
/// ```
/// use report_charts::session::fragment_id;
///
/// assert_eq!(fragment_id("usage_202011.html#daily"), "daily");
/// assert_eq!(fragment_id("usage_202011.html"), "");
/// ```
pub fn fragment_id(href: &str) -> &str {
    href.rfind('#').map(|i| &href[i + 1..]).unwrap_or("")
}

impl PageSession {
    /// Build the session for a page
    ///
    /// Usage pages navigate over `top` followed by the fragments of every
    /// main menu link; index pages have no navigation.
    pub fn from_page(doc: &str, kind: PageKind) -> Self {
        let fragments = match kind {
            PageKind::Usage => {
                let mut fragments = vec![TOP_FRAGMENT.to_string()];
                if let Some(menu) = element_inner(doc, MAIN_MENU_ID) {
                    fragments.extend(menu_links(menu).map(|href| fragment_id(&href).to_string()));
                }
                fragments
            }
            PageKind::Index => Vec::new(),
        };

        let help = element_inner(doc, HELP_TEXT_ID)
            .map(help_topics)
            .unwrap_or_default();

        Self {
            fragments,
            help,
            expanded: None,
            help_shown: None,
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn help_topics(&self) -> &[HelpTopic] {
        &self.help
    }

    /// Fragment before `current`; the last one when `current` is unknown or first
    pub fn prev_fragment(&self, current: &str) -> Option<&str> {
        if !current.is_empty() {
            if let Some(i) = self.fragments.iter().skip(1).position(|f| f == current) {
                return Some(&self.fragments[i]);
            }
        }
        self.fragments.last().map(String::as_str)
    }

    /// Fragment after `current`; the first one when `current` is unknown or last
    pub fn next_fragment(&self, current: &str) -> Option<&str> {
        if !current.is_empty() {
            let len = self.fragments.len();
            if let Some(i) = self.fragments[..len.saturating_sub(1)]
                .iter()
                .position(|f| f == current)
            {
                return Some(&self.fragments[i + 1]);
            }
        }
        self.fragments.first().map(String::as_str)
    }

    /// Target fragment for a navigation key, given the current location
    pub fn navigate(&self, key: NavKey, location: &str) -> Option<&str> {
        let current = fragment_id(location);
        match key {
            NavKey::Home => self.fragments.first().map(String::as_str),
            NavKey::End => self.fragments.last().map(String::as_str),
            NavKey::Up => self.prev_fragment(current),
            NavKey::Down => self.next_fragment(current),
        }
    }

    /// Expand a report's "view all" section, collapsing any other first
    ///
    /// The title's item count ` top ` becomes ` count `. Returns the section
    /// that was collapsed, if any.
    pub fn show_all(
        &mut self,
        report: &str,
        title: &str,
        top: usize,
        count: usize,
    ) -> Option<ExpandedSection> {
        let collapsed = self.hide_all();
        let expanded_title = title.replacen(&format!(" {} ", top), &format!(" {} ", count), 1);
        self.expanded = Some(ExpandedSection {
            report: report.to_string(),
            original_title: title.to_string(),
            title: expanded_title,
        });
        collapsed
    }

    /// Collapse the expanded section; its original title is to be restored
    pub fn hide_all(&mut self) -> Option<ExpandedSection> {
        self.expanded.take()
    }

    pub fn expanded(&self) -> Option<&ExpandedSection> {
        self.expanded.as_ref()
    }

    /// Text of a help topic, or a placeholder naming the unknown topic
    pub fn find_help_topic(&self, topic: &str) -> String {
        self.help
            .iter()
            .find(|h| h.topic == topic)
            .map(|h| h.text.clone())
            .unwrap_or_else(|| format!("Unknown topic ({})", topic))
    }

    pub fn show_help(&mut self, topic: &str) -> String {
        self.help_shown = Some(topic.to_string());
        self.find_help_topic(topic)
    }

    pub fn hide_help(&mut self) {
        self.help_shown = None;
    }

    pub fn is_help_shown(&self) -> bool {
        self.help_shown.is_some()
    }

    /// Escape hides the help box if shown, otherwise collapses a section
    pub fn escape(&mut self) -> EscapeAction {
        if self.is_help_shown() {
            self.hide_help();
            return EscapeAction::HelpHidden;
        }
        match self.hide_all() {
            Some(section) => EscapeAction::Collapsed(section),
            None => EscapeAction::Nothing,
        }
    }
}

/// Targets of every `<a href>` in the markup, in order
fn menu_links(markup: &str) -> impl Iterator<Item = String> + '_ {
    Tokenizer::new(markup).filter_map(|token| match token {
        Token::Open(tag) if tag.name == "a" => tag.attr("href").map(str::to_string),
        _ => None,
    })
}

/// Top-level children of the help container that carry a `title`
fn help_topics(markup: &str) -> Vec<HelpTopic> {
    let mut topics = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<(String, String)> = None;

    for token in Tokenizer::new(markup) {
        match token {
            Token::Open(tag) => {
                if tag.self_closing || is_void(&tag.name) {
                    if tag.name == "br" {
                        if let Some((_, buf)) = current.as_mut() {
                            buf.push(' ');
                        }
                    }
                    continue;
                }
                if depth == 0 {
                    current = tag.attr("title").map(|t| (t.to_string(), String::new()));
                }
                depth += 1;
            }
            Token::Close(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some((topic, text)) = current.take() {
                        topics.push(HelpTopic {
                            topic,
                            text: normalize_ws(&decode_entities(&text)),
                        });
                    }
                }
            }
            Token::Text(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(text);
                }
            }
        }
    }
    topics
}

fn is_void(name: &str) -> bool {
    matches!(name, "br" | "img" | "hr" | "input" | "meta" | "link")
}
