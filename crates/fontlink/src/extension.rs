//! Template host registration.
//!
//! [`GoogleFonts`] follows a two-phase initialization: construct an inert
//! value, then [`attach`](GoogleFonts::attach) it to each
//! [`minijinja::Environment`] that should expose the helper.

use fontlink_markup::head_links;
use minijinja::Environment;
use minijinja::value::Value;

use crate::error::AttachError;

/// Name templates use to call the helper unless overridden.
const DEFAULT_HELPER_NAME: &str = "google_fonts";

/// Google Fonts markup helper for minijinja environments.
///
/// Once attached, templates render the fast-loading `<head>` markup for
/// a base Google Fonts URL with:
///
/// ```jinja
/// {{ google_fonts("https://fonts.googleapis.com/css2?family=Roboto") }}
/// ```
#[derive(Clone, Debug)]
pub struct GoogleFonts {
    helper_name: String,
}

impl Default for GoogleFonts {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleFonts {
    /// Create an unattached helper with the default template name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            helper_name: DEFAULT_HELPER_NAME.to_owned(),
        }
    }

    /// Override the name under which templates reach the helper.
    ///
    /// Use this when the host already binds `google_fonts` to something
    /// else; keeping registered names unique is the host's responsibility.
    #[must_use]
    pub fn with_helper_name(mut self, name: impl Into<String>) -> Self {
        self.helper_name = name.into();
        self
    }

    /// Name under which the helper is (or will be) registered.
    #[must_use]
    pub fn helper_name(&self) -> &str {
        &self.helper_name
    }

    /// Register the helper with a template environment.
    ///
    /// Fails with [`AttachError::MissingEnvironment`] when `env` is
    /// `None`: a missing host is a configuration mistake that must
    /// surface at startup, not at first render. Attaching stores no
    /// state on the helper, so one value may be attached to any number
    /// of environments.
    ///
    /// The registered function returns markup wrapped in
    /// [`Value::from_safe_string`], keeping it intact in auto-escaping
    /// templates.
    pub fn attach(&self, env: Option<&mut Environment<'_>>) -> Result<(), AttachError> {
        let env = env.ok_or(AttachError::MissingEnvironment)?;
        env.add_function(self.helper_name.clone(), |url: String| {
            Value::from_safe_string(head_links(&url))
        });
        tracing::debug!(helper = %self.helper_name, "Registered Google Fonts template helper");
        Ok(())
    }
}
