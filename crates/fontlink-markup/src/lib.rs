//! Font loading markup generation for fontlink.
//!
//! Produces the `<head>` snippet for loading Google Fonts with minimal
//! render blocking, using the technique from Harry Roberts' post
//! "The Fastest Google Fonts"
//! (<https://csswizardry.com/2020/05/the-fastest-google-fonts/>):
//!
//! 1. Preconnect to the font asset origin so DNS/TLS setup overlaps with
//!    page parsing.
//! 2. Preload the stylesheet as a high-priority asynchronous fetch,
//!    without applying it yet.
//! 3. Fetch the stylesheet again at low priority via `media="print"`,
//!    switching to `media="all"` once it arrives.
//! 4. A `<noscript>` fallback with a conventional render-blocking link
//!    for clients that never run the inline `onload` handler.

use std::fmt::Write;

/// Origin serving the font files themselves, as opposed to the stylesheet.
///
/// Always the preconnect target, independent of the stylesheet URL.
pub const FONT_ASSET_ORIGIN: &str = "https://fonts.gstatic.com";

/// Query suffix selecting the `swap` font-display strategy.
pub const DISPLAY_PARAM: &str = "&display=swap";

/// Render the `<head>` markup for a base font stylesheet URL.
///
/// `url` is a Google Fonts v1/v2 stylesheet URL without a `display`
/// query parameter. It is interpolated verbatim; no validation or
/// escaping is performed, so a malformed URL yields malformed markup
/// rather than an error. The result is raw HTML and must not be
/// escaped again by the consumer.
pub fn head_links(url: &str) -> String {
    let mut html = String::with_capacity(256 + 3 * url.len());
    let _ = writeln!(
        html,
        r#"<link rel="preconnect" crossorigin href="{FONT_ASSET_ORIGIN}">"#
    );
    let _ = writeln!(
        html,
        r#"<link rel="preload" as="style" href="{url}{DISPLAY_PARAM}">"#
    );
    let _ = writeln!(
        html,
        r#"<link rel="stylesheet" media="print" onload="this.media='all'" href="{url}{DISPLAY_PARAM}">"#
    );
    html.push_str("<noscript>\n");
    let _ = writeln!(html, r#"  <link rel="stylesheet" href="{url}{DISPLAY_PARAM}">"#);
    html.push_str("</noscript>");
    html
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ROBOTO: &str = "https://fonts.googleapis.com/css2?family=Roboto";

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(head_links(ROBOTO), head_links(ROBOTO));
    }

    #[test]
    fn contains_each_fragment_once() {
        let html = head_links(ROBOTO);
        assert_eq!(html.matches(r#"rel="preconnect""#).count(), 1);
        assert_eq!(html.matches(r#"rel="preload""#).count(), 1);
        assert_eq!(html.matches(r#"media="print""#).count(), 1);
        assert_eq!(html.matches("<noscript>").count(), 1);
        // Deferred-apply link plus the noscript fallback link.
        assert_eq!(html.matches(r#"rel="stylesheet""#).count(), 2);
    }

    #[test]
    fn stylesheet_sites_carry_display_param() {
        let html = head_links(ROBOTO);
        let href = format!(r#"href="{ROBOTO}{DISPLAY_PARAM}""#);
        assert_eq!(html.matches(href.as_str()).count(), 3);
    }

    #[test]
    fn preconnect_targets_fixed_origin() {
        let html = head_links("https://fonts.example.net/css");
        let preconnect = html.lines().next().unwrap();
        assert_eq!(
            preconnect,
            r#"<link rel="preconnect" crossorigin href="https://fonts.gstatic.com">"#
        );
        assert!(!preconnect.contains("fonts.example.net"));
    }

    #[test]
    fn no_placeholder_survives_formatting() {
        assert!(!head_links(ROBOTO).contains("{url}"));
    }

    #[test]
    fn roboto_url_renders_expected_markup() {
        let expected = concat!(
            "<link rel=\"preconnect\" crossorigin href=\"https://fonts.gstatic.com\">\n",
            "<link rel=\"preload\" as=\"style\" href=\"https://fonts.googleapis.com/css2?family=Roboto&display=swap\">\n",
            "<link rel=\"stylesheet\" media=\"print\" onload=\"this.media='all'\" href=\"https://fonts.googleapis.com/css2?family=Roboto&display=swap\">\n",
            "<noscript>\n",
            "  <link rel=\"stylesheet\" href=\"https://fonts.googleapis.com/css2?family=Roboto&display=swap\">\n",
            "</noscript>",
        );
        assert_eq!(head_links(ROBOTO), expected);
    }

    #[test]
    fn empty_url_keeps_the_skeleton() {
        let html = head_links("");
        assert_eq!(html.matches(r#"href="&display=swap""#).count(), 3);
        assert!(html.contains(r#"href="https://fonts.gstatic.com""#));
        assert!(html.contains("<noscript>"));
    }
}
