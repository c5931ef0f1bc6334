// Markup builder - escaped HTML fragments without string concatenation
use std::fmt::Write;

/// Escape text for use in element content or a quoted attribute value.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone)]
enum Node {
    Text(String),
    Raw(String),
    Element(Element),
}

#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    classes: Vec<String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn class_if(self, condition: bool, class: &str) -> Self {
        if condition { self.class(class) } else { self }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append pre-rendered markup verbatim.
    pub fn raw(mut self, html: impl Into<String>) -> Self {
        self.children.push(Node::Raw(html.into()));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn children(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(elements.into_iter().map(Node::Element));
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');

        if is_void(self.tag) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Raw(html) => out.push_str(html),
                Node::Element(element) => element.write_to(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "meta" | "link" | "br" | "hr" | "img" | "input")
}

/// Render a sequence of sibling elements.
pub fn render_all(elements: impl IntoIterator<Item = Element>) -> String {
    let mut out = String::new();
    for element in elements {
        element.write_to(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_nested_render() {
        let html = Element::new("li")
            .child(Element::new("strong").text("Q3 <launch>"))
            .child(Element::new("p").text("Shipped"))
            .render();
        assert_eq!(html, "<li><strong>Q3 &lt;launch&gt;</strong><p>Shipped</p></li>");
    }

    #[test]
    fn test_attributes_and_classes() {
        let html = Element::new("span")
            .class("pill")
            .class_if(true, "status-ok")
            .class_if(false, "status-degraded")
            .attr("data-tab", "a\"b")
            .text("ok")
            .render();
        assert_eq!(
            html,
            r#"<span class="pill status-ok" data-tab="a&quot;b">ok</span>"#
        );
    }

    #[test]
    fn test_raw_and_void() {
        let html = Element::new("div")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .raw("<em>kept</em>")
            .render();
        assert_eq!(html, r#"<div><meta charset="utf-8"><em>kept</em></div>"#);
    }

    #[test]
    fn test_render_all() {
        let html = render_all(vec![Element::new("li").text("a"), Element::new("li").text("b")]);
        assert_eq!(html, "<li>a</li><li>b</li>");
    }
}
