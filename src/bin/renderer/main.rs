use sluview::render::ReviewRendererBuilder;

mod page;

/// The review document lives next to the page on the local static host.
const DATA_URL: &str = "http://127.0.0.1:8080/data.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("fail to setup logging");

    let renderer = ReviewRendererBuilder::default()
        .container_id("reviews")
        .resource_url(DATA_URL)
        .build()
        .expect("fail to build renderer");

    let mut page = page::host_page();
    renderer.run(&mut page).await;

    println!("<!DOCTYPE html>");
    println!("{}", page.to_html());
    Ok(())
}
