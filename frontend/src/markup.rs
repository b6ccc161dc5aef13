//! String form of rendered views, for asserting on what a view produces.
//!
//! Text nodes and attribute values are written through [`escape_html`], the
//! same encoding the browser applies when it serializes the DOM.

use std::fmt::Write;
use yew::virtual_dom::VNode;
use yew::Html;

const VOID_ELEMENTS: [&str; 4] = ["br", "hr", "img", "input"];

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_to_string(html: &Html) -> String {
    let mut out = String::new();
    write_node(html, &mut out);
    out
}

// Listeners, components and portals have no markup of their own
fn write_node(node: &VNode, out: &mut String) {
    match node {
        VNode::VTag(tag) => {
            let _ = write!(out, "<{}", tag.tag());
            for (name, value) in tag.attributes.iter() {
                let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&tag.tag()) {
                return;
            }
            if let Some(children) = tag.children() {
                write_node(children, out);
            }
            let _ = write!(out, "</{}>", tag.tag());
        }
        VNode::VText(text) => out.push_str(&escape_html(&text.text)),
        VNode::VList(list) => {
            for child in list.iter() {
                write_node(child, out);
            }
        }
        VNode::VRaw(raw) => out.push_str(&raw.html),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::html;

    fn decode_entities(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn script_tags_become_text() {
        let escaped = escape_html("<script>alert('x')</script>");
        assert_eq!(escaped, "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
        assert!(!escaped.contains('<'));

        let html = html! { <p>{ "<script>alert(1)</script>" }</p> };
        assert_eq!(
            render_to_string(&html),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn escaped_text_reads_back_unchanged() {
        for input in [
            "a & b",
            "\"quoted\" <b>it's</b>",
            "&amp; already escaped",
            "&lt;",
            "plain",
            "",
        ] {
            assert_eq!(decode_entities(&escape_html(input)), input);
        }
    }

    #[test]
    fn text_nodes_keep_their_raw_text() {
        let input = "<img src=x onerror=alert(1)> & \"q\"";
        let html = html! { <p>{ input }</p> };
        let VNode::VTag(tag) = &html else {
            panic!("expected an element");
        };
        let text = match tag.children() {
            Some(VNode::VText(text)) => text,
            Some(VNode::VList(list)) => match list.first() {
                Some(VNode::VText(text)) => text,
                other => panic!("expected a text node, got {other:?}"),
            },
            other => panic!("expected a text node, got {other:?}"),
        };
        assert_eq!(text.text.as_str(), input);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let src = "x\" onerror=\"alert(1)".to_string();
        let html = html! { <img src={src} /> };
        assert_eq!(
            render_to_string(&html),
            "<img src=\"x&quot; onerror=&quot;alert(1)\">"
        );
    }

    #[test]
    fn elements_nest_with_class_last() {
        let html = html! {
            <div class="card" id="c1">
                <span class="title">{ "A < B" }</span>
            </div>
        };
        assert_eq!(
            render_to_string(&html),
            "<div id=\"c1\" class=\"card\"><span class=\"title\">A &lt; B</span></div>"
        );
    }
}
