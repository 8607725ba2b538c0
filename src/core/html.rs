// src/core/html.rs
// Thin helpers over `scraper` so the page specs read as "find X under Y".
// Everything works on `ElementRef`; use `doc.root_element()` for a whole page.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Compile a selector literal.
///
/// Only ever called with the constant selectors in `specs`, which the unit
/// tests exercise, so a parse failure is a programming error.
pub fn sel(css: &str) -> Selector {
    match Selector::parse(css) {
        Ok(s) => s,
        Err(e) => panic!("invalid selector {css:?}: {e}"),
    }
}

pub fn parse(body: &str) -> Html {
    Html::parse_document(body)
}

/// First match of `selector` below `scope`.
pub fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// All text below `el`, whitespace-collapsed.
pub fn text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of the first `selector` match below `scope`, or `default` if there is none.
pub fn text_or(scope: ElementRef<'_>, selector: &Selector, default: &str) -> String {
    first(scope, selector).map(text).unwrap_or_else(|| s!(default))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <div class="card">
          <span class="name">  Sea   <b>The</b> Stars </span>
          <a href="/x" data-id="7">link</a>
        </div>
    "#;

    #[test]
    fn text_is_flattened_and_normalized() {
        let doc = parse(DOC);
        let root = doc.root_element();
        assert_eq!(text_or(root, &sel("span.name"), ""), "Sea The Stars");
    }

    #[test]
    fn text_or_falls_back() {
        let doc = parse(DOC);
        assert_eq!(text_or(doc.root_element(), &sel("span.jockey"), "-"), "-");
    }

    #[test]
    fn attr_lookup() {
        let doc = parse(DOC);
        let a = first(doc.root_element(), &sel("a")).unwrap();
        assert_eq!(attr(a, "data-id"), Some("7"));
        assert_eq!(attr(a, "data-missing"), None);
    }
}
