// src/job_scraper/noise.rs
//! Noise-filtered view over a parsed page.
//!
//! The parse tree is never mutated. An element is hidden when it, or any of
//! its ancestors, is on the noise denylist, and hidden subtrees contribute no
//! elements and no text to the extraction layers.
//!
//! Every walk here uses an explicit stack, so nesting depth is bounded by the
//! heap rather than the thread stack.

use scraper::node::Element;
use scraper::{ElementRef, Html, Node};

use super::selectors::is_noise;

pub struct FilteredDocument<'a> {
    visible: Vec<ElementRef<'a>>,
}

impl<'a> FilteredDocument<'a> {
    /// Walks the page once; the layers then share the visible element list.
    pub fn new(html: &'a Html) -> Self {
        let root = html.root_element();
        let mut visible = Vec::new();
        if !is_noise(root.value()) {
            visible.push(root);
            visible.extend(visible_descendants(root));
        }
        Self { visible }
    }

    /// Visible elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'a>> + '_ {
        self.visible.iter().copied()
    }

    /// Next visible element sibling, skipping text nodes and noise.
    pub fn next_sibling(&self, element: ElementRef<'a>) -> Option<ElementRef<'a>> {
        element
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| !is_noise(sibling.value()))
    }
}

/// Elements below `element` in document order, with noise subtrees pruned.
pub fn visible_descendants(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut out = Vec::new();
    let mut stack: Vec<ElementRef<'_>> = element
        .children()
        .rev()
        .filter_map(ElementRef::wrap)
        .collect();

    while let Some(next) = stack.pop() {
        if is_noise(next.value()) {
            continue;
        }
        out.push(next);
        stack.extend(next.children().rev().filter_map(ElementRef::wrap));
    }
    out
}

/// Text content of an element with noise subtrees left out.
pub fn visible_text(element: ElementRef<'_>) -> String {
    text_pruned(element, is_noise)
}

/// Concatenated text nodes under `element`, in document order, leaving out
/// every subtree whose root element satisfies `prune`.
pub fn text_pruned(element: ElementRef<'_>, prune: impl Fn(&Element) -> bool) -> String {
    let mut out = String::new();
    let mut stack: Vec<_> = element.children().rev().collect();

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(child) if !prune(child) => stack.extend(node.children().rev()),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(doc: &FilteredDocument<'_>) -> Vec<String> {
        doc.elements()
            .map(|el| el.value().name().to_string())
            .collect()
    }

    #[test]
    fn test_noise_subtrees_are_hidden() {
        let html = Html::parse_document(
            r#"<body>
                <nav><ul><li>Home</li></ul></nav>
                <div class="sidebar"><p>Related</p></div>
                <main><p>Body</p></main>
                <footer><span>(c)</span></footer>
            </body>"#,
        );
        let doc = FilteredDocument::new(&html);
        let names = names(&doc);

        assert!(names.contains(&"main".to_string()));
        assert!(names.contains(&"p".to_string()));
        assert!(!names.contains(&"nav".to_string()));
        assert!(!names.contains(&"li".to_string()));
        assert!(!names.contains(&"span".to_string()));
        assert_eq!(names.iter().filter(|n| n.as_str() == "p").count(), 1);
    }

    #[test]
    fn test_view_leaves_parse_tree_intact() {
        let html = Html::parse_document("<body><script>var x;</script><p>Hi</p></body>");
        let before = html.root_element().descendants().count();
        let _ = FilteredDocument::new(&html).elements().count();
        assert_eq!(html.root_element().descendants().count(), before);
    }

    #[test]
    fn test_visible_text_skips_nested_noise() {
        let html = Html::parse_document(
            r#"<div id="x">Apply <script>track()</script>now<div class="ads">BUY</div></div>"#,
        );
        let div = FilteredDocument::new(&html)
            .elements()
            .find(|el| el.value().id() == Some("x"))
            .expect("div present");
        assert_eq!(visible_text(div), "Apply now");
    }

    #[test]
    fn test_next_sibling_skips_text_and_noise() {
        let html = Html::parse_document(
            r#"<body><h2>Requirements</h2> text <aside>ad</aside><ul><li>Rust</li></ul></body>"#,
        );
        let doc = FilteredDocument::new(&html);
        let heading = doc
            .elements()
            .find(|el| el.value().name() == "h2")
            .expect("heading present");
        let next = doc.next_sibling(heading).expect("sibling present");
        assert_eq!(next.value().name(), "ul");
    }

    #[test]
    fn test_visible_elements_are_shared_across_scans() {
        let html = Html::parse_document(
            r#"<body><div class="cookie"><p>Accept</p></div><main><p>Body</p></main></body>"#,
        );
        let doc = FilteredDocument::new(&html);
        let first: Vec<_> = doc.elements().collect();
        let second: Vec<_> = doc.elements().collect();
        assert_eq!(first, second);

        let expected: Vec<_> = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| {
                !is_noise(el.value())
                    && el
                        .ancestors()
                        .filter_map(ElementRef::wrap)
                        .all(|a| !is_noise(a.value()))
            })
            .collect();
        assert_eq!(first, expected);
    }

    #[test]
    fn test_visible_text_of_deep_nesting() {
        let depth = 20_000;
        let markup = format!(
            "<div id=\"x\">{}Ship it<script>noise()</script>{}</div>",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        );
        let html = Html::parse_document(&markup);
        let doc = FilteredDocument::new(&html);
        let outer = doc
            .elements()
            .find(|el| el.value().id() == Some("x"))
            .expect("div present");
        assert_eq!(visible_text(outer), "Ship it");
        assert!(doc.elements().count() > depth);
    }
}
