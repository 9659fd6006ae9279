use sluview::dom::Element;

/// The hosting page: a static column layout with an empty `#reviews`
/// container for the renderer to fill.
pub fn host_page() -> Element {
    Element::new("html")
        .attr("lang", "en")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(
                    Element::new("meta")
                        .attr("name", "viewport")
                        .attr("content", "width=device-width, initial-scale=1"),
                )
                .child(Element::new("title").text("SLUview — Local Reviews"))
                .child(
                    Element::new("link")
                        .attr("rel", "stylesheet")
                        .attr("href", "styles.css"),
                ),
        )
        .child(
            Element::new("body")
                .child(
                    Element::new("header").child(Element::new("h1").text("SLUview")),
                )
                .child(
                    Element::new("main").class("columns").child(
                        Element::new("section")
                            .class("column")
                            .child(Element::new("h2").text("Reviews"))
                            .child(Element::new("div").id("reviews").class("review-list")),
                    ),
                ),
        )
}
