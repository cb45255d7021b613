// src/job_scraper/selectors.rs
//! Closed sets of element kinds and selectors used by the extraction layers.

use scraper::node::Element;

/// Structural tags that never carry job description text.
pub const NOISE_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "noscript",
];

/// Class names marking ads, cross-links and page chrome.
pub const NOISE_CLASSES: &[&str] = &[
    "ads",
    "ad",
    "advertisement",
    "related-jobs",
    "suggested-jobs",
    "share-buttons",
    "apply-buttons",
    "breadcrumbs",
    "pagination",
    "sidebar",
    "newsletter",
];

/// Lowercased keywords that mark a heading as introducing the description.
pub const HEADING_KEYWORDS: &[&str] = &[
    "job description",
    "about the job",
    "role description",
    "responsibilities",
    "what you'll do",
    "what you will do",
    "requirements",
    "skills required",
    "what we expect",
];

/// What an element is to the extractor, decided by tag name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    /// p, li, span, strong, b, em
    TextBearing,
    /// h1 to h4
    Heading,
    /// div, section
    Block,
    Other,
}

impl ElementRole {
    pub fn of(element: &Element) -> Self {
        match element.name() {
            "p" | "li" | "span" | "strong" | "b" | "em" => Self::TextBearing,
            "h1" | "h2" | "h3" | "h4" => Self::Heading,
            "div" | "section" => Self::Block,
            _ => Self::Other,
        }
    }
}

/// Predicate deciding whether an element belongs to the noise denylist.
pub fn is_noise(element: &Element) -> bool {
    NOISE_TAGS.contains(&element.name())
        || element
            .classes()
            .any(|class| NOISE_CLASSES.contains(&class))
}

/// A candidate container for the description, checked against class or id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSelector {
    /// Element carries exactly this class token.
    Class(&'static str),
    /// Element id equals this value.
    Id(&'static str),
    /// Raw class attribute contains this substring.
    ClassContains(&'static str),
    /// Raw id attribute contains this substring.
    IdContains(&'static str),
}

impl RegionSelector {
    pub fn matches(&self, element: &Element) -> bool {
        match *self {
            Self::Class(name) => element.classes().any(|class| class == name),
            Self::Id(id) => element.id() == Some(id),
            Self::ClassContains(part) => element
                .attr("class")
                .is_some_and(|class| class.contains(part)),
            Self::IdContains(part) => element.attr("id").is_some_and(|id| id.contains(part)),
        }
    }
}

/// Ordered from exact semantic names down to loose substring matches.
/// The first selector whose region clears the threshold wins.
pub const DESCRIPTION_SELECTORS: &[RegionSelector] = &[
    RegionSelector::Class("job-description"),
    RegionSelector::Id("job-description"),
    RegionSelector::Class("jd"),
    RegionSelector::Class("jobDesc"),
    RegionSelector::Class("job-desc"),
    RegionSelector::Class("description"),
    RegionSelector::Class("desc"),
    RegionSelector::Class("job_details"),
    RegionSelector::Class("job-details"),
    RegionSelector::Class("job-content"),
    RegionSelector::Class("posting"),
    RegionSelector::Class("postings"),
    RegionSelector::Class("specification"),
    RegionSelector::Class("content"),
    RegionSelector::Class("role-description"),
    RegionSelector::ClassContains("description"),
    RegionSelector::IdContains("description"),
    RegionSelector::ClassContains("job"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{ElementRef, Html};

    fn parse(html: &str) -> Html {
        Html::parse_fragment(html)
    }

    fn find<'a>(html: &'a Html, tag: &str) -> ElementRef<'a> {
        html.root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == tag)
            .expect("element present")
    }

    #[test]
    fn test_element_roles() {
        let html = parse("<div><p>a</p><h3>b</h3><em>c</em><table></table></div>");
        assert_eq!(ElementRole::of(find(&html, "p").value()), ElementRole::TextBearing);
        assert_eq!(ElementRole::of(find(&html, "em").value()), ElementRole::TextBearing);
        assert_eq!(ElementRole::of(find(&html, "h3").value()), ElementRole::Heading);
        assert_eq!(ElementRole::of(find(&html, "div").value()), ElementRole::Block);
        assert_eq!(ElementRole::of(find(&html, "table").value()), ElementRole::Other);
    }

    #[test]
    fn test_noise_by_tag_and_class() {
        let html = parse(r#"<div><nav>menu</nav><div class="card sidebar">x</div><div class="adventure">y</div></div>"#);
        assert!(is_noise(find(&html, "nav").value()));

        let divs: Vec<_> = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "div")
            .collect();
        assert!(!is_noise(divs[0].value()));
        assert!(is_noise(divs[1].value()));
        // class tokens are matched whole, "adventure" is not "ad"
        assert!(!is_noise(divs[2].value()));
    }

    #[test]
    fn test_region_selector_predicates() {
        let html = parse(r#"<section id="main-description" class="posting job-box"></section>"#);
        let section = find(&html, "section");
        let el = section.value();

        assert!(RegionSelector::Class("posting").matches(el));
        assert!(!RegionSelector::Class("job").matches(el));
        assert!(RegionSelector::ClassContains("job").matches(el));
        assert!(!RegionSelector::Id("description").matches(el));
        assert!(RegionSelector::IdContains("description").matches(el));
        assert!(!RegionSelector::ClassContains("description").matches(el));
    }

    #[test]
    fn test_selector_priority_starts_exact_ends_loose() {
        assert_eq!(
            DESCRIPTION_SELECTORS.first(),
            Some(&RegionSelector::Class("job-description"))
        );
        assert_eq!(
            DESCRIPTION_SELECTORS.last(),
            Some(&RegionSelector::ClassContains("job"))
        );
    }
}
