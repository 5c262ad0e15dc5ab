
use fixture::{people, static_router};
use termpage::{FeedLister, FeedRequest, FeedService, PageRequest, PageService};

async fn render<S: PageService>(service: &S, name: &str) -> String {
    service
        .get_page(PageRequest::new(name, 80, 24))
        .await
        .map(|page| page.name)
        .unwrap_or_else(|error| error.to_string())
}

fn catalog<F: FeedService>(service: &F) -> Vec<String> {
    service
        .get_feed(&FeedRequest::default())
        .pages
        .into_iter()
        .map(|listing| listing.name)
        .collect()
}

#[tokio::test]
async fn router_serves_pages_through_the_trait() {
    let router = static_router(people(&[("Rubeus", "Hagrid")]));
    assert_eq!(render(&router, "home").await, "home");
    assert_eq!(render(&router, "formSubmit").await, "formResponse");
    assert_eq!(render(&router, "wizards").await, "wizards");
}

#[test]
fn feed_lists_pages_in_fixed_order() {
    let lister = FeedLister::default();
    let first = catalog(&lister);
    assert_eq!(
        first,
        vec!["directory", "home", "form", "one", "two", "three", "four"]
    );
    assert_eq!(catalog(&lister), first);
}
