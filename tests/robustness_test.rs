use listing_audit::{analyze, analyze_bytes, extract_html, ProductContent};

const URL: &str = "https://www.amazon.com/dp/B0ROBUST";

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let html = r#"<span id="productTitle">Folding Chair<div id="feature-bullets"><ul><li>Steel frame"#;
    let content = extract_html(html, URL);
    assert!(content.title.starts_with("Folding Chair"));
}

#[test]
fn extract_does_not_panic_on_malformed_html_invalid_nesting() {
    let html = r#"<p><div id="productDescription"></p>Sturdy</div>"#;
    let _ = extract_html(html, URL);
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    let html = r#"<img id="landingImage" src="https://m.media-amazon.com/images/I/1.jpg data-old-hires=>"#;
    let content = extract_html(html, URL);
    assert!(content.image_urls.len() <= 1);
}

#[test]
fn extract_handles_empty_input() {
    assert_eq!(extract_html("", URL), ProductContent::new(URL));
}

#[test]
fn extract_handles_plain_text() {
    let content = extract_html("just some text about a video", URL);
    assert!(content.has_video);
    assert!(content.title.is_empty());
}

#[test]
fn extract_ignores_relative_and_data_urls() {
    let html = r#"<html><body>
        <img id="landingImage" src="/images/main.jpg">
        <div id="altImages"><ul>
            <li><img src="data:image/gif;base64,R0lGODlh"></li>
            <li><img src="//m.media-amazon.com/images/I/2.jpg"></li>
            <li><img></li>
        </ul></div>
    </body></html>"#;

    assert!(extract_html(html, URL).image_urls.is_empty());
}

#[test]
fn analyze_bytes_survives_invalid_utf8() {
    let html = b"<span id=\"productTitle\">Mug \xFF\xFE Set</span>";
    let report = analyze_bytes(html, URL).expect("analyze");
    assert!(report.content.title.starts_with("Mug"));
}

#[test]
fn deeply_nested_markup_is_handled() {
    let html = format!(
        r#"{}<span id="productTitle">Nested Lamp</span>{}"#,
        "<div>".repeat(500),
        "</div>".repeat(500)
    );

    let report = analyze(&html, URL).expect("analyze");
    assert_eq!(report.content.title, "Nested Lamp");
}

#[test]
fn huge_bullet_lists_are_accepted() {
    let items: String = (0..2_000)
        .map(|i| format!("<li>Feature number {i}</li>"))
        .collect();
    let html = format!(r#"<div id="feature-bullets"><ul>{items}</ul></div>"#);

    let content = extract_html(&html, URL);
    assert_eq!(content.bullet_points.len(), 2_000);
}
