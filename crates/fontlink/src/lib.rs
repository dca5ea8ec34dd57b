//! Fast-loading Google Fonts markup for minijinja-templated sites.
//!
//! Registers a template helper that emits the four-stage font loading
//! snippet from [`fontlink_markup`]: preconnect, preload, deferred
//! apply, and a `<noscript>` fallback. The helper's output is marked
//! safe, so it survives auto-escaping templates intact.
//!
//! # Quick Start
//!
//! ```
//! use fontlink::GoogleFonts;
//! use minijinja::{Environment, context};
//!
//! let mut env = Environment::new();
//! GoogleFonts::new().attach(Some(&mut env)).unwrap();
//!
//! env.add_template("head", "{{ google_fonts(url) }}").unwrap();
//! let html = env
//!     .get_template("head")
//!     .unwrap()
//!     .render(context! { url => "https://fonts.googleapis.com/css2?family=Roboto" })
//!     .unwrap();
//! assert!(html.contains("rel=\"preconnect\""));
//! ```

mod error;
mod extension;

pub use error::AttachError;
pub use extension::GoogleFonts;
pub use fontlink_markup::{DISPLAY_PARAM, FONT_ASSET_ORIGIN, head_links};
