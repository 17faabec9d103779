//! Test utilities and fixture builders for the serp-scan test suite

use mockito::{Mock, Server};

/// Builds a complete snapshot page holding the given result elements.
#[allow(dead_code)]
pub fn snapshot_page(items: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Search results snapshot</title>
</head>
<body>
    {}
</body>
</html>"#,
        items.join("\n    ")
    )
}

/// A Google-shaped organic result element.
#[allow(dead_code)]
pub fn google_result(content: &str) -> String {
    format!(r#"<div class="rc"><h3>Result</h3><div>{content}</div></div>"#)
}

/// A Google-shaped inline ad element; counts toward ordinal position.
#[allow(dead_code)]
pub fn google_ad(content: &str) -> String {
    format!(r#"<li class="ads-fr">{content}</li>"#)
}

/// A Bing-shaped organic result element.
#[allow(dead_code)]
pub fn bing_result(content: &str) -> String {
    format!(r#"<li class="b_algo"><h2>Result</h2><p>{content}</p></li>"#)
}

/// A Bing-shaped trailing ad element; counts toward ordinal position.
#[allow(dead_code)]
pub fn bing_trailing_ad(content: &str) -> String {
    format!(r#"<li class="b_adLastChild">{content}</li>"#)
}

/// Mounts one snapshot page on the mock server under the fixed
/// `PageNN.html` naming convention.
#[allow(dead_code)]
pub async fn mock_page(server: &mut Server, page_index: u32, html: &str) -> Mock {
    server
        .mock("GET", format!("/Page{page_index:02}.html").as_str())
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Mounts a failing snapshot page.
#[allow(dead_code)]
pub async fn mock_failing_page(server: &mut Server, page_index: u32, status: usize) -> Mock {
    server
        .mock("GET", format!("/Page{page_index:02}.html").as_str())
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// A Google-shaped page of `count` results where the 1-based positions in
/// `needle_positions` contain `needle` and every other position does not.
#[allow(dead_code)]
pub fn google_page_with(count: usize, needle_positions: &[usize], needle: &str) -> String {
    let items: Vec<String> = (1..=count)
        .map(|position| {
            if needle_positions.contains(&position) {
                google_result(&format!(r#"<a href="{needle}/about">InfoTrack</a>"#))
            } else {
                google_result(&format!("result number {position} about conveyancing"))
            }
        })
        .collect();
    snapshot_page(&items)
}

/// A Bing-shaped page of `count` results, the last of which is a trailing
/// ad. Positions in `needle_positions` contain `needle`.
#[allow(dead_code)]
pub fn bing_page_with(count: usize, needle_positions: &[usize], needle: &str) -> String {
    let items: Vec<String> = (1..=count)
        .map(|position| {
            let content = if needle_positions.contains(&position) {
                format!(r#"<a href="{needle}/about">InfoTrack</a>"#)
            } else {
                format!("result number {position} about title searches")
            };
            if position == count {
                bing_trailing_ad(&content)
            } else {
                bing_result(&content)
            }
        })
        .collect();
    snapshot_page(&items)
}
