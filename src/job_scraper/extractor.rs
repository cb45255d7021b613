// src/job_scraper/extractor.rs
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use super::collector::{char_len, collect_text};
use super::noise::{visible_text, FilteredDocument};
use super::selectors::{ElementRole, DESCRIPTION_SELECTORS, HEADING_KEYWORDS};
use crate::utils::normalize_text;

/// Text must be longer than this for the selector and heading layers.
pub const MIN_DESCRIPTION_CHARS: usize = 120;
/// Floor for the largest-block fallback.
pub const MIN_FALLBACK_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionLayer {
    Selector,
    Heading,
    LargestBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Normalized description, possibly empty.
    pub text: String,
    /// Layer that produced `text`, `None` when nothing qualified.
    pub layer: Option<ExtractionLayer>,
}

/// Extract the job description from an arbitrary page.
pub fn extract_job_description(html: &str) -> String {
    JobScraper::extract(html).text
}

pub struct JobScraper;

impl JobScraper {
    pub fn extract(html: &str) -> Extraction {
        let document = Html::parse_document(html);
        Self::extract_from_document(&document)
    }

    pub fn extract_from_document(document: &Html) -> Extraction {
        let view = FilteredDocument::new(document);

        let mut text = Self::extract_by_selectors(&view);
        let mut layer = (!text.is_empty()).then_some(ExtractionLayer::Selector);

        if char_len(&text) < MIN_DESCRIPTION_CHARS {
            let semantic = Self::extract_by_headings(&view);
            if char_len(&semantic) > char_len(&text) {
                text = semantic;
                layer = Some(ExtractionLayer::Heading);
            }
        }

        if char_len(&text) < MIN_DESCRIPTION_CHARS {
            warn!("Falling back to largest content block");
            text = Self::extract_largest_block(&view);
            layer = (!text.is_empty()).then_some(ExtractionLayer::LargestBlock);
        }

        let text = normalize_text(&text);
        debug!(
            "Extracted job description: {} chars via {:?}",
            char_len(&text),
            layer
        );

        Extraction { text, layer }
    }

    fn extract_by_selectors(view: &FilteredDocument<'_>) -> String {
        for selector in DESCRIPTION_SELECTORS {
            let Some(region) = view
                .elements()
                .find(|element| selector.matches(element.value()))
            else {
                continue;
            };

            let text = collect_text(region);
            if char_len(&text) > MIN_DESCRIPTION_CHARS {
                debug!("Selector {:?} matched description block", selector);
                return text;
            }
        }
        String::new()
    }

    fn extract_by_headings(view: &FilteredDocument<'_>) -> String {
        let mut result = String::new();

        for heading in view
            .elements()
            .filter(|element| ElementRole::of(element.value()) == ElementRole::Heading)
        {
            if !Self::is_description_heading(heading) {
                continue;
            }
            if let Some(next) = view.next_sibling(heading) {
                let extracted = collect_text(next);
                if char_len(&extracted) > char_len(&result) {
                    result = extracted;
                }
            }
        }

        result
    }

    fn is_description_heading(heading: ElementRef<'_>) -> bool {
        let title = visible_text(heading).to_lowercase();
        HEADING_KEYWORDS
            .iter()
            .any(|keyword| title.contains(keyword))
    }

    fn extract_largest_block(view: &FilteredDocument<'_>) -> String {
        let mut largest = String::new();

        for block in view
            .elements()
            .filter(|element| ElementRole::of(element.value()) == ElementRole::Block)
        {
            let text = collect_text(block);
            let len = char_len(&text);
            if len > char_len(&largest) && len > MIN_FALLBACK_CHARS {
                largest = text;
            }
        }

        largest
    }
}
