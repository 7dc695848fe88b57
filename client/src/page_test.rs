use super::*;

const ABOUT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>About</title>
</head>
<body>
    <nav><a class="nav-link" href="about.html" data-link>About</a></nav>
    <main class="pt-20">
        <section class="fade-in"><h1>About me</h1></section>
    </main>
    <footer>footer</footer>
</body>
</html>"#;

#[test]
fn extract_returns_main_inner_html_and_title() {
    let parts = PageParts::extract(ABOUT_PAGE).expect("page has main");
    assert_eq!(parts.title.as_deref(), Some("About"));
    assert!(parts.main_html.contains(r#"<section class="fade-in"><h1>About me</h1></section>"#));
    assert!(!parts.main_html.contains("<main"));
    assert!(!parts.main_html.contains("footer"));
}

#[test]
fn extract_fails_without_main() {
    let html = "<html><head><title>Oops</title></head><body><div>no main</div></body></html>";
    assert_eq!(PageParts::extract(html), Err(NavError::MissingMain));
}

#[test]
fn unclosed_main_is_closed_at_end_of_document() {
    let html = "<html><body><main><p>truncated";
    let parts = PageParts::extract(html).expect("parser closes main");
    assert_eq!(parts.main_html, "<p>truncated</p>");
}

#[test]
fn extract_is_case_insensitive() {
    let html = "<HTML><TITLE>Services</TITLE><MAIN id=\"x\"><p>Hi</p></MAIN></HTML>";
    let parts = PageParts::extract(html).expect("page has main");
    assert_eq!(parts.main_html, "<p>Hi</p>");
    assert_eq!(parts.title.as_deref(), Some("Services"));
}

#[test]
fn extract_skips_lookalike_tags() {
    let html = "<maintenance>x</maintenance><main><p>real</p></main>";
    let parts = PageParts::extract(html).expect("page has main");
    assert_eq!(parts.main_html, "<p>real</p>");
}

#[test]
fn missing_title_is_none() {
    let parts = PageParts::extract("<main></main>").expect("page has main");
    assert_eq!(parts.main_html, "");
    assert_eq!(parts.title, None);
}

#[test]
fn title_entities_are_decoded() {
    let html = "<title> Reviews &amp; Testimonials &#8212; A &lt;3 </title><main></main>";
    let parts = PageParts::extract(html).expect("page has main");
    assert_eq!(parts.title.as_deref(), Some("Reviews & Testimonials \u{2014} A <3"));
}

#[test]
fn stray_ampersand_in_title_is_kept() {
    let html = "<title>Tom & Jerry; Co</title><main></main>";
    let parts = PageParts::extract(html).expect("page has main");
    assert_eq!(parts.title.as_deref(), Some("Tom & Jerry; Co"));
}

#[test]
fn svg_title_inside_main_does_not_replace_document_title() {
    let html = r#"<html><head><title>About</title></head><body><main><p>Hi</p><a href="https://github.com"><svg><title>GitHub</title></svg></a></main></body></html>"#;
    let parts = PageParts::extract(html).expect("page has main");
    assert_eq!(parts.title.as_deref(), Some("About"));
    assert!(parts.main_html.starts_with("<p>Hi</p>"));
}

#[test]
fn svg_title_alone_is_not_a_document_title() {
    let html = "<main><svg><title>Icon</title></svg></main>";
    let parts = PageParts::extract(html).expect("page has main");
    assert_eq!(parts.title, None);
}

#[test]
fn closing_tag_text_in_script_stays_out_of_main() {
    let html = "<main><p>Hi</p></main><script>const s = '</main>';</script>";
    let parts = PageParts::extract(html).expect("page has main");
    assert_eq!(parts.main_html, "<p>Hi</p>");
}

#[test]
fn commented_out_main_is_ignored() {
    let html = "<body><!-- <main> legacy --><main><p>Hi</p></main></body>";
    let parts = PageParts::extract(html).expect("page has main");
    assert_eq!(parts.main_html, "<p>Hi</p>");
}

#[test]
fn first_of_several_mains_wins() {
    let html = "<main><p>one</p></main><main><p>two</p></main>";
    let parts = PageParts::extract(html).expect("page has main");
    assert_eq!(parts.main_html, "<p>one</p>");
}
