use super::*;

// =============================================================
// classify_link
// =============================================================

#[test]
fn internal_link_navigates_to_normalized_path() {
    assert_eq!(classify_link(Some("about.html"), false), LinkAction::Navigate("about.html".into()));
    assert_eq!(classify_link(Some("about"), false), LinkAction::Navigate("about.html".into()));
    assert_eq!(classify_link(Some("/about/"), false), LinkAction::Navigate("/about.html".into()));
}

#[test]
fn fragment_and_external_links_stay_native() {
    assert_eq!(classify_link(Some("#contact"), false), LinkAction::Native);
    assert_eq!(classify_link(Some("https://example.com/about.html"), false), LinkAction::Native);
    assert_eq!(classify_link(Some("http://example.com"), false), LinkAction::Native);
    assert_eq!(classify_link(Some("mailto:me@example.com"), false), LinkAction::Native);
    assert_eq!(classify_link(Some("//cdn.example.com/x.html"), false), LinkAction::Native);
}

#[test]
fn missing_or_empty_href_stays_native() {
    assert_eq!(classify_link(None, false), LinkAction::Native);
    assert_eq!(classify_link(Some("  "), false), LinkAction::Native);
}

#[test]
fn internal_link_is_dropped_while_navigating() {
    assert_eq!(classify_link(Some("about.html"), true), LinkAction::Drop);
}

#[test]
fn fragment_link_is_native_even_while_navigating() {
    assert_eq!(classify_link(Some("#top"), true), LinkAction::Native);
}

#[test]
fn page_names_starting_with_http_are_internal() {
    assert!(!is_external("httpdocs.html"));
    assert!(!is_external("about.html"));
    assert!(is_external("tel:+15555550100"));
}

// =============================================================
// normalize_path / clean_url / page_id
// =============================================================

#[test]
fn normalize_path_handles_root_and_queries() {
    assert_eq!(normalize_path(""), "index.html");
    assert_eq!(normalize_path("/"), "index.html");
    assert_eq!(normalize_path("services.html?ref=nav"), "services.html");
    assert_eq!(normalize_path("portfolio#grid"), "portfolio.html");
}

#[test]
fn clean_url_strips_suffix_and_maps_index_to_root() {
    assert_eq!(clean_url("about.html"), "/about");
    assert_eq!(clean_url("/about.html"), "/about");
    assert_eq!(clean_url("index.html"), "/");
    assert_eq!(clean_url("index"), "/");
    assert_eq!(clean_url("blog/index.html"), "/blog/");
}

#[test]
fn page_id_uses_final_segment() {
    assert_eq!(page_id("about.html"), "about");
    assert_eq!(page_id("/work/portfolio.html"), "portfolio");
    assert_eq!(page_id("/contact"), "contact");
    assert_eq!(page_id("/"), "index");
    assert_eq!(page_id(""), "index");
}

#[test]
fn path_from_location_reads_last_segment() {
    assert_eq!(path_from_location("/about"), "about.html");
    assert_eq!(path_from_location("/about.html"), "about.html");
    assert_eq!(path_from_location("/"), "index.html");
    assert_eq!(path_from_location(""), "index.html");
}

#[test]
fn directory_url_replays_its_index_page() {
    assert_eq!(path_from_location("/blog/"), "/blog/index.html");
    assert_eq!(path_from_location("/blog//"), "/blog/index.html");
    assert_eq!(path_from_location("/docs/guide/"), "/docs/guide/index.html");
    assert_eq!(page_id(&path_from_location("/blog/")), "index");
}

#[test]
fn pushed_url_replays_the_page_that_pushed_it() {
    let cases = [
        ("index.html", "index.html"),
        ("about.html", "about.html"),
        ("blog/index.html", "/blog/index.html"),
        ("/blog/index.html", "/blog/index.html"),
    ];
    for (pushed, replayed) in cases {
        assert_eq!(path_from_location(&clean_url(pushed)), replayed, "{pushed}");
    }
}

// =============================================================
// Active nav / routes
// =============================================================

#[test]
fn link_matches_page_compares_stripped_segments() {
    assert!(link_matches_page(Some("about.html"), "about"));
    assert!(link_matches_page(Some("/about"), "about"));
    assert!(link_matches_page(Some("index.html"), "index"));
    assert!(!link_matches_page(Some("about-me.html"), "about"));
    assert!(!link_matches_page(None, "about"));
}

#[test]
fn route_name_finds_known_pages() {
    assert_eq!(route_name("about.html"), Some("About"));
    assert_eq!(route_name("/"), Some("Home"));
    assert_eq!(route_name("blog.html"), None);
}

#[test]
fn network_protocols_allow_spa_navigation() {
    assert!(is_network_protocol("https:"));
    assert!(is_network_protocol("http:"));
    assert!(!is_network_protocol("file:"));
}

#[test]
fn history_state_serializes_clean_path() {
    let state = HistoryState { path: clean_url("about.html") };
    let json = serde_json::to_value(&state).expect("serialize");
    assert_eq!(json, serde_json::json!({ "path": "/about" }));
}
