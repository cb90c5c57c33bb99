//! Process-wide renderer settings and their one-time initialisation.

use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

static SETTINGS: OnceLock<ExportSettings> = OnceLock::new();

/// Paper size for rendered itineraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// ISO A4, 595 x 842 points.
    #[default]
    A4,
    /// US Letter, 612 x 792 points.
    Letter,
}

impl PageSize {
    /// Width and height in PDF points.
    #[must_use]
    pub const fn dimensions(self) -> (u16, u16) {
        match self {
            Self::A4 => (595, 842),
            Self::Letter => (612, 792),
        }
    }
}

/// Error returned when a page size name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page size {0:?} (expected \"a4\" or \"letter\")")]
pub struct PageSizeParseError(pub String);

impl FromStr for PageSize {
    type Err = PageSizeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("a4") {
            Ok(Self::A4)
        } else if value.eq_ignore_ascii_case("letter") {
            Ok(Self::Letter)
        } else {
            Err(PageSizeParseError(value.to_owned()))
        }
    }
}

/// Document-level settings shared by every renderer in the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Heading printed at the top of the first page and in the footer.
    pub title: String,
    /// Value of the document's `Producer` metadata entry.
    pub producer: String,
    /// Paper size for every page.
    pub page_size: PageSize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            title: "GeoRoute Optimizer".to_owned(),
            producer: concat!("georoute-export ", env!("CARGO_PKG_VERSION")).to_owned(),
            page_size: PageSize::A4,
        }
    }
}

/// Errors returned by [`init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExportInitError {
    /// Settings were already fixed, either by an earlier `init` call or by
    /// a render that fell back to the defaults.
    #[error("export settings are already initialised")]
    AlreadyInitialised,
}

/// Fix the process-wide export settings.
///
/// Call once during start-up, before the first render. Renderers created
/// without an explicit configuration read these settings; if nothing was
/// initialised they fall back to [`ExportSettings::default`].
///
/// # Errors
///
/// Returns [`ExportInitError::AlreadyInitialised`] on every call after the
/// settings have been fixed.
///
/// # Examples
/// ```
/// use georoute_export::{ExportInitError, ExportSettings, init};
///
/// init(ExportSettings::default())?;
/// assert_eq!(
///     init(ExportSettings::default()),
///     Err(ExportInitError::AlreadyInitialised)
/// );
/// # Ok::<(), ExportInitError>(())
/// ```
pub fn init(settings: ExportSettings) -> Result<(), ExportInitError> {
    SETTINGS
        .set(settings)
        .map_err(|_| ExportInitError::AlreadyInitialised)?;
    log::debug!("export settings initialised");
    Ok(())
}

/// Settings fixed by [`init`], or the defaults when `init` was never called.
pub(crate) fn global() -> &'static ExportSettings {
    SETTINGS.get_or_init(ExportSettings::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A4", PageSize::A4)]
    #[case("a4", PageSize::A4)]
    #[case("Letter", PageSize::Letter)]
    #[case("LETTER", PageSize::Letter)]
    fn page_sizes_parse_case_insensitively(#[case] name: &str, #[case] expected: PageSize) {
        assert_eq!(name.parse::<PageSize>(), Ok(expected));
    }

    #[rstest]
    fn unknown_page_size_is_rejected() {
        assert_eq!(
            "tabloid".parse::<PageSize>(),
            Err(PageSizeParseError("tabloid".into()))
        );
    }
}
