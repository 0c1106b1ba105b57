use std::fmt::Write;

use anyhow::Result;
use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const STYLE: &str = r"        body {
            font-family: sans-serif;
            max-width: 600px;
            margin: 50px auto;
            padding: 20px;
            background: #f5f5f5;
        }
        .card {
            background: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h1 { color: #333; }
        .info { color: #666; margin: 10px 0; }
        form { margin-top: 20px; }
        input { padding: 10px; margin-right: 10px; border: 1px solid #ddd; border-radius: 5px; }
        button { padding: 10px 20px; background: #4facfe; color: white; border: none; border-radius: 5px; cursor: pointer; }
";

/// Everything the greeting page shows for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub name: String,
    pub method: String,
    pub timestamp: String,
    pub path: String,
}

#[must_use]
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders the greeting page. Context values are inserted as-is.
pub fn render_page(ctx: &PageContext, title: &str) -> Result<String> {
    let mut html_output = String::new();
    html_output.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    writeln!(html_output, "    <title>{title}</title>")?;
    html_output.push_str("    <style>\n");
    html_output.push_str(STYLE);
    html_output.push_str("    </style>\n</head>\n<body>\n    <div class=\"card\">\n");
    writeln!(html_output, "        <h1>Hello, {}!</h1>", ctx.name)?;
    writeln!(html_output, r#"        <p class="info">Method: {}</p>"#, ctx.method)?;
    writeln!(html_output, r#"        <p class="info">Time: {}</p>"#, ctx.timestamp)?;
    writeln!(html_output, r#"        <p class="info">Path: {}</p>"#, ctx.path)?;
    html_output.push_str(
        r#"
        <form method="get">
            <input type="text" name="name" placeholder="Enter your name">
            <button type="submit">Say Hello</button>
        </form>
    </div>
</body>
</html>
"#,
    );
    Ok(html_output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kuchikiki::traits::TendrilSink;

    fn context(name: &str) -> PageContext {
        PageContext {
            name: name.to_string(),
            method: "GET".to_string(),
            timestamp: "2024-03-05 07:08:09".to_string(),
            path: "/hello".to_string(),
        }
    }

    #[test]
    fn timestamp_format() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        assert_eq!(format_timestamp(&time), "2024-03-05 07:08:09");
    }

    #[test]
    fn page_structure() -> Result<()> {
        let page = render_page(&context("Alice"), "CGI Hello")?;
        assert!(page.starts_with("<!DOCTYPE html>\n"));
        assert!(page.ends_with("</html>\n"));

        let d = kuchikiki::parse_html().one(page);
        assert_eq!(d.select_first("title").unwrap().text_contents(), "CGI Hello");
        assert_eq!(d.select_first(".card h1").unwrap().text_contents(), "Hello, Alice!");

        let info: Vec<String> = d
            .select("p.info")
            .unwrap()
            .map(|p| p.text_contents())
            .collect();
        assert_eq!(
            info,
            vec!["Method: GET", "Time: 2024-03-05 07:08:09", "Path: /hello"]
        );
        Ok(())
    }

    #[test]
    fn name_form() -> Result<()> {
        let d = kuchikiki::parse_html().one(render_page(&context("World"), "CGI Hello")?);
        let form = d.select_first("form").unwrap();
        assert_eq!(form.attributes.borrow().get("method"), Some("get"));

        let input = d.select_first("form input").unwrap();
        let attrs = input.attributes.borrow();
        assert_eq!(attrs.get("type"), Some("text"));
        assert_eq!(attrs.get("name"), Some("name"));
        assert_eq!(attrs.get("placeholder"), Some("Enter your name"));

        let button = d.select_first("form button").unwrap();
        assert_eq!(button.text_contents(), "Say Hello");
        Ok(())
    }

    #[test]
    fn custom_title() -> Result<()> {
        let page = render_page(&context("Alice"), "Greeter")?;
        assert!(page.contains("<title>Greeter</title>"));
        Ok(())
    }

    #[test]
    fn values_inserted_verbatim() -> Result<()> {
        let page = render_page(&context("<b>Bob</b>"), "CGI Hello")?;
        assert!(page.contains("<h1>Hello, <b>Bob</b>!</h1>"));
        let page = render_page(&context("J%C3%B6rg+B"), "CGI Hello")?;
        assert!(page.contains("<h1>Hello, J%C3%B6rg+B!</h1>"));
        Ok(())
    }
}
