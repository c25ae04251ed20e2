use pulldown_cmark::{html, Options, Parser};

const PAGE_TEMPLATE: &str = r#"<html><head><meta charset="UTF8"><link rel="stylesheet" type="text/css" href="../style.css"/></head><body><section id="tldr"><div id="page">%content%</div></section></body></html>"#;

/// Render one markdown page into a complete HTML document.
pub fn render_page(markdown: &str) -> String {
    let body = replace_placeholders(&render_markdown(markdown));
    PAGE_TEMPLATE.replace("%content%", &body)
}

fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Rewrite every `{{...}}` placeholder span as `<em>...</em>`, shortest
/// match first. An unclosed `{{` is left as-is.
fn replace_placeholders(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str("<em>");
        out.push_str(&after[..end]);
        out.push_str("</em>");
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}
