//! HTML version of the report: a per-domain summary followed by every user.
//!
//! Layout uses Bootstrap 5 from the jsDelivr CDN, so the file is a single
//! self-contained page. All remote text is escaped here; the avatar cells are
//! already final HTML built during normalization.

use crate::core::endpoint::ApiEndpoint;
use crate::core::{DomainCount, UserRecord};
use crate::utils::text::{escape_html, is_web_url};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css">
    <title>WP Users Report</title>
</head>
<body>
    <div class="container mt-4">
        <h1 class="mb-4 text-center"><i class="bi-people-fill"></i> WP Users Report</h1>
"#;

const SUMMARY_OPEN: &str = r#"        <div class="panel mb-4">
            <table class="table table-hover table-bordered">
                <thead class="table-dark text-center">
                    <tr>
                        <th class="text-center"><i class="bi-globe-americas"></i> Domains</th>
                        <th class="text-center"><i class="bi-person-fill"></i> Total Users</th>
                    </tr>
                </thead>
                <tbody>
"#;

const SUMMARY_CLOSE: &str = r#"                </tbody>
            </table>
        </div>
"#;

const DETAIL_OPEN: &str = r#"        <table class="table table-hover table-bordered">
            <thead class="table-dark">
                <tr>
                    <th class="text-center">Domain</th>
                    <th class="text-center">Name</th>
                    <th class="text-center">URL</th>
                    <th class="text-center">Description</th>
                    <th class="text-center">User</th>
                    <th class="text-center">24x24</th>
                    <th class="text-center">48x48</th>
                    <th class="text-center">96x96</th>
                </tr>
            </thead>
            <tbody>
"#;

const DETAIL_CLOSE: &str = r#"            </tbody>
        </table>
"#;

const TAIL: &str = r#"    </div>
</body>
</html>
"#;

pub fn render_document(
    records: &[UserRecord],
    counts: &[DomainCount],
    endpoint: &ApiEndpoint,
    generated_at: &str,
) -> String {
    let mut html = String::with_capacity(4096 + records.len() * 512);
    html.push_str(HEAD);

    html.push_str(SUMMARY_OPEN);
    for count in counts {
        html.push_str(&summary_row(count, endpoint));
    }
    html.push_str(SUMMARY_CLOSE);

    html.push_str(DETAIL_OPEN);
    for record in records {
        html.push_str(&detail_row(record));
    }
    html.push_str(DETAIL_CLOSE);

    html.push_str(&format!(
        "        <footer class=\"text-bg-dark text-center py-3\">Generated {}</footer>\n",
        escape_html(generated_at)
    ));
    html.push_str(TAIL);
    html
}

fn summary_row(count: &DomainCount, endpoint: &ApiEndpoint) -> String {
    format!(
        concat!(
            "                    <tr>\n",
            "                        <td class=\"text-center\"><a href=\"{link}\" target=\"_blank\">{domain}</a></td>\n",
            "                        <td class=\"text-center\">{count}</td>\n",
            "                    </tr>\n",
        ),
        link = escape_html(&endpoint.link_for(&count.domain)),
        domain = escape_html(&count.domain),
        count = count.count,
    )
}

fn detail_row(record: &UserRecord) -> String {
    format!(
        concat!(
            "                <tr class=\"align-middle\">\n",
            "                    <td class=\"text-center text-primary\">{domain}</td>\n",
            "                    <td class=\"text-center\">{name}</td>\n",
            "                    <td class=\"text-center\">{url}</td>\n",
            "                    <td>{description}</td>\n",
            "                    <td class=\"text-center\">{author}</td>\n",
            "                    <td class=\"text-center\">{x24}</td>\n",
            "                    <td class=\"text-center\">{x48}</td>\n",
            "                    <td class=\"text-center\">{x96}</td>\n",
            "                </tr>\n",
        ),
        domain = escape_html(&record.domain),
        name = escape_html(&record.name),
        url = escape_html(&record.url),
        description = escape_html(&record.description),
        author = author_cell(record),
        x24 = record.avatar_cells.x24,
        x48 = record.avatar_cells.x48,
        x96 = record.avatar_cells.x96,
    )
}

/// Author button for the user's profile; plain slug text when the link is not
/// an http(s) URL.
fn author_cell(record: &UserRecord) -> String {
    if is_web_url(&record.slug_link) {
        format!(
            r#"<a class="btn btn-outline-primary btn-sm" role="button" href="{}" target="_blank">{}</a>"#,
            escape_html(&record.slug_link),
            escape_html(&record.slug)
        )
    } else {
        escape_html(&record.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::normalize_user;
    use serde_json::json;

    fn sample() -> Vec<UserRecord> {
        vec![normalize_user(
            "example.com",
            &json!({
                "id": 1,
                "name": "Ann <admin>",
                "slug": "ann",
                "link": "https://example.com/author/ann/",
                "avatar_urls": {"24": "https://img/ann-24", "96": "https://img/ann-96"}
            }),
        )
        .unwrap()]
    }

    #[test]
    fn test_summary_links_each_domain_to_its_endpoint() {
        let counts = vec![
            DomainCount::new("example.com", 1),
            DomainCount::new("badhost.invalid", 0),
        ];

        let html = render_document(&sample(), &counts, &ApiEndpoint::https(), "2026-01-01 00:00");

        assert!(html.contains(
            r#"<a href="https://example.com/wp-json/wp/v2/users/" target="_blank">example.com</a>"#
        ));
        assert!(html.contains(
            r#"<a href="https://badhost.invalid/wp-json/wp/v2/users/" target="_blank">badhost.invalid</a>"#
        ));
        assert!(html.contains("<td class=\"text-center\">0</td>"));
    }

    #[test]
    fn test_avatars_render_as_images_or_dash() {
        let html = render_document(&sample(), &[], &ApiEndpoint::https(), "now");

        assert!(html.contains(r#"<td class="text-center"><img src="https://img/ann-24" alt="Avatar"></td>"#));
        assert!(html.contains(r#"<td class="text-center">-</td>"#));
        assert!(html.contains(r#"<img src="https://img/ann-96" alt="Avatar">"#));
    }

    #[test]
    fn test_remote_text_is_escaped() {
        let html = render_document(&sample(), &[], &ApiEndpoint::https(), "now");

        assert!(html.contains("Ann &lt;admin&gt;"));
        assert!(!html.contains("Ann <admin>"));
        assert!(html.contains(r#"href="https://example.com/author/ann/" target="_blank">ann</a>"#));
    }

    #[test]
    fn test_script_profile_link_is_not_clickable() {
        let record = normalize_user(
            "evil.test",
            &json!({
                "id": 1,
                "name": "x",
                "slug": "click",
                "link": "javascript:alert(document.domain)"
            }),
        )
        .unwrap();

        let html = render_document(&[record], &[], &ApiEndpoint::https(), "now");

        assert!(!html.contains("href=\"javascript:"));
        assert!(!html.contains("javascript:alert"));
        assert!(html.contains("<td class=\"text-center\">click</td>"));
    }

    #[test]
    fn test_missing_profile_link_renders_plain_slug() {
        let record =
            normalize_user("example.com", &json!({"id": 2, "name": "y", "slug": "nolink"})).unwrap();

        let html = render_document(&[record], &[], &ApiEndpoint::https(), "now");

        assert!(html.contains("<td class=\"text-center\">nolink</td>"));
        assert!(!html.contains("href=\"\""));
    }

    #[test]
    fn test_empty_report_is_still_a_full_page() {
        let html = render_document(&[], &[], &ApiEndpoint::https(), "now");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<title>WP Users Report</title>"));
    }
}
