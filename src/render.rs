//! The review board component: builds sanitized review cards from fetched
//! records and swaps them into the hosting page's container.

use derive_builder::Builder;
use tracing::{error, info, warn};

use crate::data::{self, ReviewRecord};
use crate::dom::{Element, Node};
use crate::fetch::DataSource;

/// Reviews past this index are ignored.
pub const REVIEW_CAP: usize = 50;

/// How a load cycle ended. Every outcome is terminal; nothing is retried.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No container element in the page; nothing was touched.
    MissingContainer,
    /// Cards rendered, with the count.
    Rendered(usize),
    /// Valid fetch but no usable review data; the informational note is shown.
    NoData,
    /// Fetch or parse failed; the failure note is shown.
    Failed,
}

#[derive(Builder)]
pub struct ReviewRenderer {
    #[builder(setter(into), default = "String::from(\"reviews\")")]
    container_id: String,
    #[builder(setter(into))]
    resource_url: String,
}

impl ReviewRenderer {
    /// Run the single load cycle against `page`.
    ///
    /// Locates the container, fetches and validates the review document,
    /// and replaces the container's content in one swap. All failures are
    /// absorbed here; none propagate to the caller.
    pub async fn run(&self, page: &mut Element) -> Outcome {
        if page.find_by_id(&self.container_id).is_none() {
            warn!("no #{} container found", self.container_id);
            return Outcome::MissingContainer;
        }

        let source = DataSource::new(self.resource_url.clone());
        let (children, outcome) = match source.fetch_document().await {
            Ok(payload) => match data::validate(payload) {
                Ok(records) => {
                    let cards = render_cards(&records);
                    let count = cards.len();
                    info!(count, "rendering review cards");
                    (cards, Outcome::Rendered(count))
                }
                Err(reason) => {
                    info!("no renderable reviews: {reason}");
                    (vec![Node::Element(no_data_note())], Outcome::NoData)
                }
            },
            Err(err) => {
                error!("fail to load reviews: {err}");
                (vec![Node::Element(failure_note())], Outcome::Failed)
            }
        };

        // Checked above; the tree has not changed since.
        if let Some(container) = page.find_by_id(&self.container_id) {
            container.replace_children(children);
        }
        outcome
    }
}

fn render_cards(records: &[ReviewRecord]) -> Vec<Node> {
    records
        .iter()
        .take(REVIEW_CAP)
        .map(|record| Node::Element(review_card(record)))
        .collect()
}

fn review_card(record: &ReviewRecord) -> Element {
    let stars = "★".repeat(record.stars());

    let head = Element::new("div")
        .class("head")
        .child(Element::new("div").class("name").text(record.display_name()))
        .child(
            Element::new("div")
                .class("stars")
                .attr("aria-label", "rating")
                .text(format!("{stars} "))
                .child(
                    Element::new("span")
                        .class("muted")
                        .text(format!("({})", record.rating_label())),
                ),
        );

    let mut meta = Element::new("p").class("meta").text(record.business());
    if !record.city().is_empty() {
        meta = meta.text(format!(" • {}", record.city()));
    }
    if !record.price().is_empty() {
        meta = meta.text(format!(" • {}", record.price()));
    }

    Element::new("article")
        .class("review")
        .child(head)
        .child(Element::new("div").class("date").text(record.date()))
        .child(Element::new("p").class("text").text(record.body()))
        .child(meta)
}

fn no_data_note() -> Element {
    Element::new("p")
        .class("note")
        .text("No reviews found in data.json (expected an array at data.reviews).")
}

fn failure_note() -> Element {
    Element::new("p")
        .class("note")
        .text("Failed to load ")
        .child(Element::new("code").text("data.json"))
        .text(". Ensure the file is present next to ")
        .child(Element::new("code").text("index.html"))
        .text(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ReviewRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn card_carries_every_field() {
        let html = review_card(&record(json!({
            "name": "Rosa",
            "rating": 4,
            "date": "2024-03-09",
            "text": "Great toasted ravioli.",
            "business": "The Hill Trattoria",
            "city": "St. Louis",
            "price": "$$",
        })))
        .to_html();

        assert!(html.starts_with("<article class=\"review\">"));
        assert!(html.contains("<div class=\"name\">Rosa</div>"));
        assert!(html.contains("★★★★ "));
        assert!(html.contains("<span class=\"muted\">(4)</span>"));
        assert!(html.contains("<div class=\"date\">2024-03-09</div>"));
        assert!(html.contains("<p class=\"text\">Great toasted ravioli.</p>"));
        assert!(html.contains("The Hill Trattoria • St. Louis • $$"));
    }

    #[test]
    fn card_escapes_every_record_field() {
        let html = review_card(&record(json!({
            "name": "<script>alert('x')</script>",
            "rating": "\"5\"",
            "date": "<b>now</b>",
            "text": "a & b < c",
            "business": "Joe's \"Diner\"",
            "city": "<i>STL</i>",
            "price": "<$>",
        })))
        .to_html();

        for raw in ["<script>", "<b>", "<i>", "<$>", "\"Diner\"", "'x'"] {
            assert!(!html.contains(raw), "raw {raw:?} leaked into {html}");
        }
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Joe&#39;s &quot;Diner&quot;"));
        assert!(html.contains("a &amp; b &lt; c"));
        // the raw rating label is escaped like everything else
        assert!(html.contains("(&quot;5&quot;)"));
    }

    #[test]
    fn negative_rating_renders_no_stars() {
        let html = review_card(&record(json!({ "rating": -3 }))).to_html();
        assert!(!html.contains('★'));
        assert!(html.contains("<span class=\"muted\">(-3)</span>"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let html = review_card(&ReviewRecord::default()).to_html();
        assert!(html.contains("<div class=\"name\">Anonymous</div>"));
        assert!(html.contains("<span class=\"muted\">(?)</span>"));
        assert!(html.contains("<div class=\"date\"></div>"));
        assert!(html.contains("<p class=\"text\"></p>"));
        assert!(!html.contains('•'));
    }

    #[test]
    fn separator_only_before_nonempty_city_and_price() {
        let html = review_card(&record(json!({ "business": "Pho Long" }))).to_html();
        assert!(html.contains("<p class=\"meta\">Pho Long</p>"));

        let html = review_card(&record(json!({ "city": "St. Louis" }))).to_html();
        assert!(html.contains("<p class=\"meta\"> • St. Louis</p>"));
    }

    #[test]
    fn cards_are_capped_and_ordered() {
        let records: Vec<ReviewRecord> = (0..60)
            .map(|i| record(json!({ "name": format!("reviewer-{i}") })))
            .collect();
        let cards = render_cards(&records);
        assert_eq!(cards.len(), REVIEW_CAP);

        let html: String = cards
            .iter()
            .map(|node| match node {
                Node::Element(el) => el.to_html(),
                Node::Text(text) => text.clone(),
            })
            .collect();
        assert!(html.contains("reviewer-0<"));
        assert!(html.contains("reviewer-49<"));
        assert!(!html.contains("reviewer-50<"));
        assert!(html.find("reviewer-0<").unwrap() < html.find("reviewer-49<").unwrap());
    }

    #[test]
    fn notes_are_distinct() {
        let no_data = no_data_note().to_html();
        let failure = failure_note().to_html();
        assert!(no_data.contains("No reviews found"));
        assert!(failure.contains("Failed to load <code>data.json</code>"));
        assert_ne!(no_data, failure);
    }
}
