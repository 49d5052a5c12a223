use std::fmt::Write;

use indexmap::IndexMap;

#[derive(Debug)]
pub enum HtmlNode {
    Element(HtmlElement),
    Text(String),
}

#[derive(Debug)]
pub struct HtmlElement {
    pub tag_name: String,
    pub children: Vec<HtmlNode>,
    pub attrs: IndexMap<String, String>,
}

/// Tags rendered without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "link", "meta"];

impl HtmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag_name: tag.into(),
            children: Vec::new(),
            attrs: IndexMap::new(),
        }
    }

    pub fn attr<V>(mut self, name: impl Into<String>, value: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        let name = name.into();
        match value.into() {
            Some(value) => {
                *self.attrs.entry(name).or_default() = value.into();
            }
            None => {
                self.attrs.remove(&name);
            }
        }

        self
    }

    pub fn child(mut self, child: HtmlElement) -> Self {
        self.children.push(HtmlNode::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = HtmlElement>) -> Self {
        self.children
            .extend(children.into_iter().map(HtmlNode::Element));
        self
    }

    /// Appends a raw text child. The text is emitted verbatim, so it must be
    /// trusted content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(HtmlNode::Text(text.into()));
        self
    }

    pub fn render_to_string(&self) -> Result<String, std::fmt::Error> {
        let mut html = String::new();

        write!(&mut html, "<{}", self.tag_name)?;

        for (name, value) in &self.attrs {
            write!(&mut html, " ")?;
            write!(&mut html, r#"{name}="{value}""#)?;
        }

        write!(&mut html, ">")?;

        if VOID_TAGS.contains(&self.tag_name.as_str()) {
            return Ok(html);
        }

        for child in &self.children {
            match child {
                HtmlNode::Element(element) => {
                    write!(&mut html, "{}", element.render_to_string()?)?;
                }
                HtmlNode::Text(text) => {
                    write!(&mut html, "{text}")?;
                }
            }
        }

        write!(&mut html, "</{}>", self.tag_name)?;

        Ok(html)
    }
}

impl HtmlElement {
    pub fn id<V>(self, id: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("id", id)
    }

    pub fn class<V>(self, class: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("class", class)
    }

    pub fn lang<V>(self, lang: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("lang", lang)
    }

    pub fn href<V>(self, href: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("href", href)
    }
}

pub fn html() -> HtmlElement {
    HtmlElement::new("html")
}

pub fn head() -> HtmlElement {
    HtmlElement::new("head")
}

pub fn meta() -> HtmlElement {
    HtmlElement::new("meta")
}

pub fn title() -> HtmlElement {
    HtmlElement::new("title")
}

pub fn style() -> HtmlElement {
    HtmlElement::new("style")
}

pub fn body() -> HtmlElement {
    HtmlElement::new("body")
}

pub fn header() -> HtmlElement {
    HtmlElement::new("header")
}

pub fn div() -> HtmlElement {
    HtmlElement::new("div")
}

pub fn h1() -> HtmlElement {
    HtmlElement::new("h1")
}

pub fn h2() -> HtmlElement {
    HtmlElement::new("h2")
}

pub fn h3() -> HtmlElement {
    HtmlElement::new("h3")
}

pub fn ul() -> HtmlElement {
    HtmlElement::new("ul")
}

pub fn li() -> HtmlElement {
    HtmlElement::new("li")
}

pub fn a() -> HtmlElement {
    HtmlElement::new("a")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_nested() {
        let element = div()
            .class("outer")
            .child(div().class("inner").child(h1().text("heading")));

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<div class="outer"><div class="inner"><h1>heading</h1></div></div>"#
        );
    }

    #[test]
    fn test_render_void_tag() {
        let element = meta().attr("charset", "utf-8");

        assert_eq!(element.render_to_string().unwrap(), r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn test_attrs_keep_insertion_order() {
        let element = a().href("a.html").id("link").class("muted");

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<a href="a.html" id="link" class="muted"></a>"#
        );
    }

    #[test]
    fn test_children_from_iterator() {
        let element = ul().children(["one", "two"].map(|text| li().text(text)));

        assert_eq!(
            element.render_to_string().unwrap(),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }
}
