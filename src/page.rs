/// Static document wrapper around whatever the caller renders into `<body>`.
/// Title and description are fixed; there is no conditional rendering.
pub const PAGE_TITLE: &str = "eShaman App";
pub const PAGE_DESCRIPTION: &str = "eShaman GraphQL API";

pub fn render_page(children: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{}</title>
    <meta name="description" content="{}">
  </head>
  <body>{}</body>
</html>
"#,
        PAGE_TITLE, PAGE_DESCRIPTION, children
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_children_in_fixed_shell() {
        let html = render_page("<p>hello</p>");
        assert!(html.contains("<title>eShaman App</title>"));
        assert!(html.contains(r#"<meta name="description" content="eShaman GraphQL API">"#));
        assert!(html.contains("<body><p>hello</p></body>"));
    }
}
