// src/job_scraper/collector.rs
use scraper::ElementRef;

use super::noise::{text_pruned, visible_descendants, visible_text};
use super::selectors::{is_noise, ElementRole};

/// Fragments from text-bearing elements must be longer than this.
const MIN_FRAGMENT_CHARS: usize = 3;
/// Loose text sitting directly in the region must be longer than this.
const MIN_DIRECT_TEXT_CHARS: usize = 20;

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Gather the body copy of a region.
///
/// Every text-bearing descendant contributes its trimmed text as one line, in
/// document order. Nested text-bearing elements each contribute, so
/// `<p><strong>Rust</strong> expert</p>` yields both lines. Text that is not
/// inside any text-bearing descendant is gathered separately and, when long
/// enough, placed first.
pub fn collect_text(region: ElementRef<'_>) -> String {
    let mut parts: Vec<String> = visible_descendants(region)
        .into_iter()
        .filter(|element| ElementRole::of(element.value()) == ElementRole::TextBearing)
        .map(|element| visible_text(element).trim().to_string())
        .filter(|text| char_len(text) > MIN_FRAGMENT_CHARS)
        .collect();

    let direct = direct_text(region);
    let direct = direct.trim();
    if char_len(direct) > MIN_DIRECT_TEXT_CHARS {
        parts.insert(0, direct.to_string());
    }

    parts.join("\n")
}

/// Text of the region not covered by a text-bearing descendant.
fn direct_text(region: ElementRef<'_>) -> String {
    text_pruned(region, |element| {
        is_noise(element) || ElementRole::of(element) == ElementRole::TextBearing
    })
}
