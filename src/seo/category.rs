//! Per-category rendering.
//!
//! Each SEOmatic container maps to its own render method on [`Renderer`].
//! Methods take the raw serialized string (or `None`) and return the tags
//! for that category; absent input and shape mismatches return no tags.
//!
//! | Container             | Output                                          |
//! |-----------------------|-------------------------------------------------|
//! | `metaJsonLdContainer` | `<script type="application/ld+json">`           |
//! | `metaLinkContainer`   | one `<link>` per normalized record              |
//! | `metaScriptContainer` | inline `<script>` (head), hidden `<div>` (body) |
//! | `metaTagContainer`    | one `<meta>` per normalized record              |
//! | `metaTitleContainer`  | `<title>`                                       |

use super::container::{Container, ContainerKind, SeomaticData};
use super::error::{Result, SeoError};
use super::normalize::normalize;
use super::placement::{HeadPlacement, Hoist, Inline};
use super::value::{is_truthy, present_str};
use crate::debug;
use crate::markup::{Tag, element, push_raw};

/// Inline style of the hidden wrapper around body scripts.
pub const DEFAULT_BODY_SCRIPT_STYLE: &str = "display:none !important";

/// Element key of the JSON-LD script.
pub const JSON_LD_KEY: &str = "metaJsonLdContainer.mainEntityOfPage";

/// Rendered head and body tags for one page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub head: Vec<Tag>,
    pub body: Vec<Tag>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.body.is_empty()
    }
}

/// Renders SEOmatic containers into markup tags.
///
/// The placement parameter controls how head elements are signaled;
/// see [`HeadPlacement`].
#[derive(Debug, Clone)]
pub struct Renderer<P = Inline> {
    placement: P,
    body_script_style: String,
}

impl Default for Renderer<Inline> {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<Inline> {
    /// Renderer for output that already sits inside `<head>`.
    pub fn new() -> Self {
        Self {
            placement: Inline,
            body_script_style: DEFAULT_BODY_SCRIPT_STYLE.to_string(),
        }
    }
}

impl Renderer<Hoist> {
    /// Renderer whose head elements are tagged for the host to hoist.
    pub fn native() -> Self {
        Renderer::new().with_placement(Hoist)
    }
}

impl<P: HeadPlacement> Renderer<P> {
    /// Replace the head placement.
    pub fn with_placement<Q: HeadPlacement>(self, placement: Q) -> Renderer<Q> {
        Renderer {
            placement,
            body_script_style: self.body_script_style,
        }
    }

    pub fn with_body_script_style(mut self, style: impl Into<String>) -> Self {
        self.body_script_style = style.into();
        self
    }

    fn place(&self, tag: Tag) -> Tag {
        self.placement.place(tag)
    }

    // ========================================================================
    // categories
    // ========================================================================

    /// `metaJsonLdContainer`: the `mainEntityOfPage` graph as one JSON-LD script.
    pub fn json_ld(&self, raw: Option<&str>) -> Result<Vec<Tag>> {
        let Some(container) = parse(ContainerKind::JsonLd, raw)? else {
            return Ok(Vec::new());
        };

        let Some(entity) = container.get("mainEntityOfPage").filter(|v| is_truthy(v)) else {
            debug!("seo"; "{}: no mainEntityOfPage", ContainerKind::JsonLd);
            return Ok(Vec::new());
        };

        let json = serde_json::to_string(entity).map_err(SeoError::json(ContainerKind::JsonLd))?;
        let mut script = element("script");
        script.set_attr("type", "application/ld+json");
        push_raw(&mut script, &json);

        Ok(vec![self.place(Tag::new(script).with_key(JSON_LD_KEY))])
    }

    /// `metaLinkContainer`: one `<link>` per normalized record.
    pub fn links(&self, raw: Option<&str>) -> Result<Vec<Tag>> {
        self.tag_list(ContainerKind::Link, raw)
    }

    /// `metaTagContainer`: one `<meta>` per normalized record.
    pub fn tags(&self, raw: Option<&str>) -> Result<Vec<Tag>> {
        self.tag_list(ContainerKind::Tag, raw)
    }

    fn tag_list(&self, kind: ContainerKind, raw: Option<&str>) -> Result<Vec<Tag>> {
        let Some(container) = parse(kind, raw)? else {
            return Ok(Vec::new());
        };
        let Some(tag) = kind.tag_name() else {
            return Ok(Vec::new());
        };

        Ok(normalize(&container)
            .iter()
            .map(|record| self.place(record.to_tag(tag)))
            .collect())
    }

    /// `metaScriptContainer`, head half: inline `script` bodies.
    pub fn scripts(&self, raw: Option<&str>) -> Result<Vec<Tag>> {
        let Some(container) = parse(ContainerKind::Script, raw)? else {
            return Ok(Vec::new());
        };

        Ok(script_entries(&container, "script")
            .map(|(key, content)| {
                let mut script = element("script");
                push_raw(&mut script, content);
                self.place(Tag::new(script).with_key(key))
            })
            .collect())
    }

    /// `metaScriptContainer`, body half: `bodyScript` markup in hidden divs.
    ///
    /// Body tags are never head-placed.
    pub fn body_scripts(&self, raw: Option<&str>) -> Result<Vec<Tag>> {
        let Some(container) = parse(ContainerKind::Script, raw)? else {
            return Ok(Vec::new());
        };

        Ok(script_entries(&container, "bodyScript")
            .map(|(key, markup)| {
                let mut div = element("div");
                div.set_attr("style", self.body_script_style.as_str());
                push_raw(&mut div, markup);
                Tag::new(div).with_key(key)
            })
            .collect())
    }

    /// `metaTitleContainer`: `<title>` from `title.title`.
    pub fn title(&self, raw: Option<&str>) -> Result<Vec<Tag>> {
        let Some(container) = parse(ContainerKind::Title, raw)? else {
            return Ok(Vec::new());
        };

        let Some(text) = present_str(container.get("title").and_then(|t| t.get("title"))) else {
            debug!("seo"; "{}: no title.title", ContainerKind::Title);
            return Ok(Vec::new());
        };

        let mut title = element("title");
        title.push_text(text);
        Ok(vec![self.place(Tag::new(title).with_key("title"))])
    }

    // ========================================================================
    // aggregates
    // ========================================================================

    /// All head tags: JSON-LD, links, scripts, tags, title.
    ///
    /// The first malformed container aborts the whole render.
    pub fn head(&self, data: &SeomaticData) -> Result<Vec<Tag>> {
        let mut tags = self.json_ld(data.raw(ContainerKind::JsonLd))?;
        tags.extend(self.links(data.raw(ContainerKind::Link))?);
        tags.extend(self.scripts(data.raw(ContainerKind::Script))?);
        tags.extend(self.tags(data.raw(ContainerKind::Tag))?);
        tags.extend(self.title(data.raw(ContainerKind::Title))?);
        Ok(tags)
    }

    /// All body tags.
    pub fn body(&self, data: &SeomaticData) -> Result<Vec<Tag>> {
        self.body_scripts(data.raw(ContainerKind::Script))
    }

    /// Head and body tags for a page.
    pub fn page(&self, data: &SeomaticData) -> Result<Page> {
        Ok(Page {
            head: self.head(data)?,
            body: self.body(data)?,
        })
    }
}

/// Parse a raw container, `None` when there is nothing to parse.
fn parse(kind: ContainerKind, raw: Option<&str>) -> Result<Option<Container>> {
    match raw.filter(|s| !s.is_empty()) {
        Some(raw) => Container::parse(kind, raw).map(Some),
        None => Ok(None),
    }
}

/// `(key, field)` pairs of script entries carrying a non-empty `field`.
fn script_entries<'a>(
    container: &'a Container,
    field: &'a str,
) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    container
        .iter()
        .filter(|(key, entry)| !key.is_empty() && is_truthy(entry))
        .filter_map(move |(key, entry)| present_str(entry.get(field)).map(|s| (key, s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::to_html;

    fn attr(tag: &Tag, name: &str) -> Option<String> {
        tag.element.get_attr(name).map(|v| v.to_string())
    }

    fn tag_names(tags: &[Tag]) -> Vec<String> {
        tags.iter().map(|t| t.element.tag.to_string()).collect()
    }

    fn keys(tags: &[Tag]) -> Vec<&str> {
        tags.iter().filter_map(|t| t.key.as_deref()).collect()
    }

    #[test]
    fn test_absent_input_renders_nothing() {
        let r = Renderer::new();
        for raw in [None, Some("")] {
            assert!(r.json_ld(raw).unwrap().is_empty());
            assert!(r.links(raw).unwrap().is_empty());
            assert!(r.scripts(raw).unwrap().is_empty());
            assert!(r.body_scripts(raw).unwrap().is_empty());
            assert!(r.tags(raw).unwrap().is_empty());
            assert!(r.title(raw).unwrap().is_empty());
        }
    }

    #[test]
    fn test_json_ld() {
        let raw = r#"{"mainEntityOfPage": {"@context": "http://schema.org", "@type": "WebPage"}}"#;
        let tags = Renderer::new().json_ld(Some(raw)).unwrap();

        assert_eq!(keys(&tags), [JSON_LD_KEY]);
        assert_eq!(attr(&tags[0], "type").as_deref(), Some("application/ld+json"));
        assert!(to_html(&tags).contains(r#"{"@context":"http://schema.org","@type":"WebPage"}"#));
    }

    #[test]
    fn test_json_ld_requires_main_entity() {
        let r = Renderer::new();
        assert!(r.json_ld(Some(r#"{"mainEntityOfPage": null}"#)).unwrap().is_empty());
        assert!(r.json_ld(Some(r#"{"mainEntityOfPage": ""}"#)).unwrap().is_empty());
        assert!(r.json_ld(Some(r#"{"other": {}}"#)).unwrap().is_empty());
        assert!(r.json_ld(Some("null")).unwrap().is_empty());
    }

    #[test]
    fn test_links() {
        let raw = r#"{"canonical": {"rel": "canonical", "href": "https://example.com/"},
                      "alternate": [{"rel": "alternate", "hreflang": "en"}, {"rel": "alternate", "hreflang": "de"}]}"#;
        let tags = Renderer::new().links(Some(raw)).unwrap();

        assert_eq!(tag_names(&tags), ["link", "link", "link"]);
        assert_eq!(keys(&tags), ["canonical", "alternate0", "alternate1"]);
        assert_eq!(attr(&tags[0], "href").as_deref(), Some("https://example.com/"));
        assert_eq!(attr(&tags[2], "hreflang").as_deref(), Some("de"));
    }

    #[test]
    fn test_links_drop_invalid_attribute_names() {
        let raw = r#"{"a": {"href\" onload=\"alert(1)": "/x", "rel": "home"}}"#;
        let tags = Renderer::new().links(Some(raw)).unwrap();

        let html = to_html(&tags);
        assert!(!html.contains("onload"));
        assert_eq!(attr(&tags[0], "rel").as_deref(), Some("home"));
    }

    #[test]
    fn test_tags() {
        let raw = r#"{"description": {"name": "description", "content": "A site"}}"#;
        let tags = Renderer::new().tags(Some(raw)).unwrap();

        assert_eq!(tag_names(&tags), ["meta"]);
        assert_eq!(attr(&tags[0], "name").as_deref(), Some("description"));
        assert_eq!(attr(&tags[0], "content").as_deref(), Some("A site"));
    }

    #[test]
    fn test_title() {
        let tags = Renderer::new()
            .title(Some(r#"{"title":{"title":"Home"}}"#))
            .unwrap();
        assert_eq!(keys(&tags), ["title"]);
        assert_eq!(to_html(&tags), "<title>Home</title>");
    }

    #[test]
    fn test_title_shape_mismatch() {
        let r = Renderer::new();
        assert!(r.title(Some(r#"{"title":{"title":""}}"#)).unwrap().is_empty());
        assert!(r.title(Some(r#"{"title":"Home"}"#)).unwrap().is_empty());
        assert!(r.title(Some(r#"{"title":null}"#)).unwrap().is_empty());
        assert!(r.title(Some(r#"{}"#)).unwrap().is_empty());
    }

    #[test]
    fn test_script_head_only() {
        let raw = r#"{"ga":{"script":"console.log(1)"}}"#;
        let r = Renderer::new();

        let head = r.scripts(Some(raw)).unwrap();
        assert_eq!(to_html(&head), "<script>console.log(1)</script>");
        assert_eq!(keys(&head), ["ga"]);
        assert!(r.body_scripts(Some(raw)).unwrap().is_empty());
    }

    #[test]
    fn test_script_body_only() {
        let raw = r#"{"gtm":{"script":"","bodyScript":"<noscript>gtm</noscript>"}}"#;
        let r = Renderer::new();

        assert!(r.scripts(Some(raw)).unwrap().is_empty());
        let body = r.body_scripts(Some(raw)).unwrap();
        assert_eq!(tag_names(&body), ["div"]);
        assert_eq!(attr(&body[0], "style").as_deref(), Some(DEFAULT_BODY_SCRIPT_STYLE));
        assert!(to_html(&body).contains("<noscript>gtm</noscript>"));
    }

    #[test]
    fn test_script_skips_empty_entries() {
        let raw = r#"{"a": null, "": {"script": "x"}, "b": {"script": "y"}}"#;
        let tags = Renderer::new().scripts(Some(raw)).unwrap();
        assert_eq!(to_html(&tags), "<script>y</script>");
    }

    #[test]
    fn test_body_script_style_override() {
        let raw = r#"{"gtm":{"bodyScript":"x"}}"#;
        let tags = Renderer::new()
            .with_body_script_style("display:none")
            .body_scripts(Some(raw))
            .unwrap();
        assert_eq!(attr(&tags[0], "style").as_deref(), Some("display:none"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Renderer::new().tags(Some("{not json")).unwrap_err();
        assert!(matches!(err, SeoError::Json { container: ContainerKind::Tag, .. }));
    }

    fn sample_data() -> SeomaticData {
        let mut data = SeomaticData::default();
        data.set(ContainerKind::JsonLd, r#"{"mainEntityOfPage":{"@type":"WebSite"}}"#);
        data.set(ContainerKind::Link, r#"{"canonical":{"rel":"canonical","href":"/"}}"#);
        data.set(
            ContainerKind::Script,
            r#"{"ga":{"script":"ga()","bodyScript":"<img src=\"/p\"/>"}}"#,
        );
        data.set(ContainerKind::Tag, r#"{"robots":{"name":"robots","content":"all"}}"#);
        data.set(ContainerKind::Title, r#"{"title":{"title":"Home"}}"#);
        data
    }

    #[test]
    fn test_head_order() {
        let head = Renderer::new().head(&sample_data()).unwrap();
        assert_eq!(tag_names(&head), ["script", "link", "script", "meta", "title"]);
    }

    #[test]
    fn test_page_body() {
        let page = Renderer::new().page(&sample_data()).unwrap();
        assert_eq!(tag_names(&page.body), ["div"]);
        assert_eq!(keys(&page.body), ["ga"]);
    }

    #[test]
    fn test_head_aborts_on_first_malformed_container() {
        let mut data = sample_data();
        data.set(ContainerKind::Tag, "{");

        let err = Renderer::new().head(&data).unwrap_err();
        assert!(matches!(err, SeoError::Json { container: ContainerKind::Tag, .. }));
    }

    #[test]
    fn test_native_and_generic_produce_same_elements() {
        let data = sample_data();
        let generic = Renderer::new().page(&data).unwrap();
        let native = Renderer::native().page(&data).unwrap();

        assert!(native.head.iter().all(Tag::is_head_placed));
        assert!(!generic.head.iter().any(Tag::is_head_placed));
        assert!(!native.body.iter().any(Tag::is_head_placed));
        assert_eq!(keys(&generic.head), keys(&native.head));
        assert_eq!(to_html(&generic.head), to_html(&native.head));
        assert_eq!(to_html(&generic.body), to_html(&native.body));
    }

    #[test]
    fn test_custom_wrapper_placement() {
        let r = Renderer::new().with_placement(|tag: Tag| {
            tag.map(|el| {
                let mut outer = element("noscript");
                outer.push_elem(el);
                outer
            })
        });
        let tags = r.title(Some(r#"{"title":{"title":"Home"}}"#)).unwrap();

        assert_eq!(tag_names(&tags), ["noscript"]);
        assert_eq!(to_html(&tags), "<noscript><title>Home</title></noscript>");
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = sample_data();
        let r = Renderer::new();
        let first = r.page(&data).unwrap();
        let second = r.page(&data).unwrap();

        assert_eq!(to_html(&first.head), to_html(&second.head));
        assert_eq!(to_html(&first.body), to_html(&second.body));
    }
}
