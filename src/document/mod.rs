//! HTML document generation.
//!
//! This module turns the current section list into one self-contained
//! document for the embedded surface:
//! - Resolved inline styles per section, title, image and text
//! - Sanitized titles and text
//! - Lazy image loading driven by an intersection observer
//! - Height reporting and click messages sent through a [`Bridge`]
//!
//! Generation is a pure function of its inputs. Any change to sections,
//! direction or theme means rendering a new document and replacing the
//! surface content wholesale.

mod template;

use crate::sanitize::{escape_attribute, sanitize};
use crate::section::Section;
use crate::style::{
    Direction, StyleContext, Theme, resolve_image, resolve_section, resolve_text,
    resolve_title,
};

use template::{BASE_STYLES, CLICK_HANDLER, HEAD_SCRIPT, OBSERVE_SCRIPT, SETTLE_DELAY_MS};

/// How the embedded document delivers messages to its host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bridge {
    /// `window.ReactNativeWebView.postMessage(payload)`
    #[default]
    NativeWebView,
    /// `window.parent.postMessage(payload, '*')` for iframe hosts
    ParentFrame,
}

impl Bridge {
    const fn post_statement(self) -> &'static str {
        match self {
            Self::NativeWebView => "window.ReactNativeWebView.postMessage(p);",
            Self::ParentFrame => "window.parent.postMessage(p,'*');",
        }
    }
}

/// Everything besides the sections that affects the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub direction: Direction,
    pub theme: Theme,
    pub bridge: Bridge,
}

impl RenderOptions {
    pub const fn style_context(&self) -> StyleContext {
        StyleContext::new(self.direction, self.theme)
    }
}

/// Render `sections` into a complete HTML document.
///
/// # Example
///
/// ```
/// use wrapview::document::{RenderOptions, render_document};
/// use wrapview::section::Section;
///
/// let html = render_document(&[Section::new("cat.png", "Meow")], &RenderOptions::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains(r#"data-src="cat.png""#));
/// ```
pub fn render_document(sections: &[Section], options: &RenderOptions) -> String {
    let ctx = options.style_context();
    let script = HEAD_SCRIPT
        .replace("{post}", options.bridge.post_statement())
        .replace("{delay}", &SETTLE_DELAY_MS.to_string());

    let mut html = String::with_capacity(2048 + sections.len() * 768);
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html dir=\"{}\">\n<head>\n\
<meta charset=\"UTF-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<style>{}</style>\n<script>\n{}\n</script>\n</head>\n<body>\n",
        options.direction.as_html(),
        BASE_STYLES,
        script
    ));

    for (index, section) in sections.iter().enumerate() {
        push_section(&mut html, section, index, ctx);
    }

    html.push_str(&format!("<script>{OBSERVE_SCRIPT}</script>\n</body>\n</html>\n"));
    html
}

fn push_section(out: &mut String, section: &Section, index: usize, ctx: StyleContext) {
    out.push_str(&format!(
        "<div class=\"section\" style=\"{}\">\n",
        escape_attribute(&resolve_section(section).to_css())
    ));

    if let Some(title) = section.visible_title() {
        let css = format!("{}clear:both;", resolve_title(section, ctx).to_css());
        out.push_str(&format!(
            "<h2 style=\"{}\">{}</h2>\n",
            escape_attribute(&css),
            sanitize(title)
        ));
    }

    let image = resolve_image(section);
    out.push_str(&format!(
        "<img data-src=\"{}\" class=\"{}\" width=\"{}\" height=\"{}\" style=\"{}\" alt=\"\"/>\n",
        escape_attribute(&section.image),
        image.class_list(),
        image.width,
        image.height,
        escape_attribute(&image.to_css())
    ));

    out.push_str(&format!(
        "<p data-id=\"{}\" onclick=\"{}\" style=\"{}\">{}</p>\n</div>\n",
        escape_attribute(&section.correlation_id(index)),
        CLICK_HANDLER,
        escape_attribute(&resolve_text(section, ctx).to_css()),
        sanitize(&section.text)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{FloatSide, TextAlign};

    fn options(rtl: bool, theme: Theme) -> RenderOptions {
        RenderOptions {
            direction: Direction::from_rtl(rtl),
            theme,
            bridge: Bridge::NativeWebView,
        }
    }

    #[test]
    fn test_empty_sections_render_complete_document() {
        let html = render_document(&[], &RenderOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>\n<html dir=\"ltr\">"));
        assert!(html.contains("<body>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(!html.contains("<div class=\"section\""));
        assert!(!html.contains("<img "));
        assert!(html.contains("lazyImages.observe"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let sections = vec![Section::new("a.png", "x").with_title("T")];
        let opts = options(true, Theme::Dark);
        assert_eq!(render_document(&sections, &opts), render_document(&sections, &opts));
    }

    #[test]
    fn test_section_order_and_structure() {
        let sections = vec![
            Section::new("one.png", "first").with_title("One"),
            Section::new("two.png", "second"),
        ];
        let html = render_document(&sections, &RenderOptions::default());
        let one = html.find("one.png").unwrap();
        let two = html.find("two.png").unwrap();
        assert!(one < two);
        assert_eq!(html.matches("<div class=\"section\"").count(), 2);
        assert_eq!(html.matches("<h2 ").count(), 1);

        let title = html.find("<h2 ").unwrap();
        let image = html.find("data-src=\"one.png\"").unwrap();
        let text = html.find(">first</p>").unwrap();
        assert!(title < image && image < text);
    }

    #[test]
    fn test_empty_title_is_not_rendered() {
        let sections = vec![Section::new("a.png", "t").with_title("")];
        let html = render_document(&sections, &RenderOptions::default());
        assert!(!html.contains("<h2"));
    }

    #[test]
    fn test_images_use_deferred_source() {
        let html = render_document(&[Section::new("https://x/y.png", "t")], &RenderOptions::default());
        assert!(html.contains("data-src=\"https://x/y.png\""));
        assert!(!html.contains(" src=\"https://x/y.png\""));
        assert!(html.contains("class=\"left lazy\""));
        assert!(html.contains("width=\"220\" height=\"220\""));
    }

    #[test]
    fn test_title_and_text_are_sanitized() {
        let sections = vec![Section::new("a.png", "line1\n<b>bold</b>").with_title("<i>T</i>")];
        let html = render_document(&sections, &RenderOptions::default());
        assert!(html.contains(">&lt;i&gt;T&lt;/i&gt;</h2>"));
        assert!(html.contains(">line1<br/>&lt;b&gt;bold&lt;/b&gt;</p>"));
    }

    #[test]
    fn test_click_ids_explicit_and_positional() {
        let sections = vec![
            Section::new("a.png", "a"),
            Section::new("b.png", "b").with_id("x"),
            Section::new("c.png", "c"),
        ];
        let html = render_document(&sections, &RenderOptions::default());
        assert!(html.contains("<p data-id=\"0\""));
        assert!(html.contains("<p data-id=\"x\""));
        assert!(html.contains("<p data-id=\"2\""));
        assert_eq!(html.matches(CLICK_HANDLER).count(), 3);
    }

    #[test]
    fn test_hostile_id_and_uri_stay_inside_attributes() {
        let sections = vec![Section::new("a.png\" onerror=\"x", "t").with_id("'\"><script>")];
        let html = render_document(&sections, &RenderOptions::default());
        assert!(html.contains("data-src=\"a.png&quot; onerror=&quot;x\""));
        assert!(html.contains("data-id=\"'&quot;&gt;&lt;script&gt;\""));
    }

    #[test]
    fn test_dark_theme_colors() {
        let sections = vec![Section::new("a.png", "t").with_title("T")];
        let dark = render_document(&sections, &options(false, Theme::Dark));
        assert_eq!(dark.matches("color:#fff;").count(), 2);
        assert!(!dark.contains("color:#000;"));

        let light = render_document(&sections, &options(false, Theme::Light));
        assert_eq!(light.matches("color:#000;").count(), 2);
    }

    #[test]
    fn test_rtl_sets_dir_and_alignment() {
        let sections = vec![Section::new("a.png", "t").with_title("T")];
        let html = render_document(&sections, &options(true, Theme::Light));
        assert!(html.contains("<html dir=\"rtl\">"));
        assert_eq!(html.matches("text-align:right;").count(), 2);
        // Float default does not follow direction.
        assert!(html.contains("class=\"left lazy\""));
    }

    #[test]
    fn test_explicit_alignment_survives_rtl() {
        let mut section = Section::new("a.png", "t");
        section.text_style.text_align = Some(TextAlign::Center);
        let html = render_document(&[section], &options(true, Theme::Light));
        assert!(html.contains("text-align:center;"));
    }

    #[test]
    fn test_circle_right_float() {
        let mut section = Section::new("a.png", "t");
        section.is_circle = true;
        section.float_side = Some(FloatSide::Right);
        let html = render_document(&[section], &RenderOptions::default());
        assert!(html.contains("class=\"right circle lazy\""));
        assert!(html.contains("border-radius:999px;"));
    }

    #[test]
    fn test_title_clears_floats() {
        let html = render_document(
            &[Section::new("a.png", "t").with_title("T")],
            &RenderOptions::default(),
        );
        assert!(html.contains("font-weight:bold;clear:both;"));
    }

    #[test]
    fn test_script_reports_height_three_ways() {
        let html = render_document(&[], &RenderOptions::default());
        assert!(html.contains("window.addEventListener(\"load\",sendHeight)"));
        assert!(html.contains("window.addEventListener(\"resize\",sendHeight)"));
        assert!(html.contains("setTimeout(sendHeight,500)"));
        assert!(html.contains("send(\"HEIGHT\",{height:document.body.scrollHeight})"));
    }

    #[test]
    fn test_bridge_selection() {
        let native = render_document(&[], &RenderOptions::default());
        assert!(native.contains("window.ReactNativeWebView.postMessage(p);"));

        let parent = render_document(
            &[],
            &RenderOptions {
                bridge: Bridge::ParentFrame,
                ..RenderOptions::default()
            },
        );
        assert!(parent.contains("window.parent.postMessage(p,'*');"));
        assert!(!parent.contains("ReactNativeWebView"));
        assert!(!parent.contains("{post}"));
    }

    #[test]
    fn test_observer_registration_follows_sections() {
        let html = render_document(&[Section::new("a.png", "t")], &RenderOptions::default());
        let last_section = html.rfind("</div>").unwrap();
        let observe = html.find("lazyImages.observe").unwrap();
        assert!(observe > last_section);
    }
}
