const INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Mind Score Advice</title>
</head>
<body>
  <h1>Mind Score Advice</h1>
  <form method="post" action="/">
    <label for="message">Your question</label>
    <input id="message" name="message" type="text" autocomplete="off" required>
    <button type="submit">Ask</button>
  </form>
  <div id="reply">{{reply}}</div>
</body>
</html>
"#;

pub fn render(reply: &str) -> String {
    INDEX.replace("{{reply}}", &escape_html(reply))
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_is_escaped() {
        let html = render("<script>alert('x')</script> & more");
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt; &amp; more"));
        assert!(!html.contains("{{reply}}"));
    }

    #[test]
    fn empty_reply_renders_form() {
        let html = render("");
        assert!(html.contains(r#"<div id="reply"></div>"#));
        assert!(html.contains(r#"name="message""#));
    }
}
