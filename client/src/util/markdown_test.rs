use super::*;

#[test]
fn renders_basic_markdown() {
    let out = render_html("**Reset** your password from `Settings`.");
    assert!(out.contains("<strong>Reset</strong>"));
    assert!(out.contains("<code>Settings</code>"));
}

#[test]
fn renders_lists_and_tables() {
    let out = render_html("- one\n- two\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(out.contains("<li>one</li>"));
    assert!(out.contains("<table>"));
}

#[test]
fn drops_inline_and_block_html() {
    let out = render_html("hi <script>alert(1)</script>\n\n<div onclick=\"x()\">block</div>\n");
    assert!(!out.contains("<script>"));
    assert!(!out.contains("onclick"));
    assert!(out.contains("hi"));
}

#[test]
fn escapes_text_content() {
    let out = render_html("1 < 2 & 3 > 2");
    assert!(out.contains("1 &lt; 2 &amp; 3 &gt; 2"));
}
