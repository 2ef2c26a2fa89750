use curly_conf::OutputFormat;
use curly_presenter::Value;

/// Append `value` to `out` as text for the given output format.
///
/// In HTML mode, plain values are escaped and [`Value::Safe`] markup is
/// written as-is. Safe markup nested inside a list stays unescaped too.
pub fn write_value(out: &mut String, value: &Value, format: OutputFormat) {
    match (value, format) {
        (Value::List(items), _) => {
            for item in items {
                write_value(out, item, format);
            }
        }
        (Value::Safe(markup), _) => out.push_str(markup),
        (value, OutputFormat::Text) => out.push_str(&value.to_string()),
        (value, OutputFormat::Html) => escape_html(out, &value.to_string()),
    }
}

fn escape_html(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: &Value, format: OutputFormat) -> String {
        let mut out = String::new();
        write_value(&mut out, value, format);
        out
    }

    #[test]
    fn html_escapes_plain_values() {
        assert_eq!(
            render(&Value::from(r#"<a href="x">Tom & 'Jerry'</a>"#), OutputFormat::Html),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn safe_markup_is_not_escaped() {
        assert_eq!(
            render(&Value::safe("<b>bold</b>"), OutputFormat::Html),
            "<b>bold</b>"
        );
    }

    #[test]
    fn lists_escape_per_item() {
        let value = Value::List(vec![Value::safe("<br>"), Value::from("a<b")]);
        assert_eq!(render(&value, OutputFormat::Html), "<br>a&lt;b");
    }

    #[test]
    fn text_format_is_verbatim() {
        assert_eq!(render(&Value::from("a < b"), OutputFormat::Text), "a < b");
        assert_eq!(render(&Value::Null, OutputFormat::Text), "");
        assert_eq!(render(&Value::from(6), OutputFormat::Text), "6");
    }
}
