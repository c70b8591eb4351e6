//! Outcome of resolving a single matched link.

/// How the final URL of a resolution was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedVia {
    /// The link was not a short link; no request was made.
    Direct,
    /// Redirects were followed to the marketplace URL.
    Redirect,
    /// Following redirects failed and the input URL was used instead.
    Fallback,
}

impl ResolvedVia {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedVia::Direct => "direct",
            ResolvedVia::Redirect => "redirect",
            ResolvedVia::Fallback => "fallback",
        }
    }
}

/// A canonical, tracking-stripped URL together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub url: String,
    pub via: ResolvedVia,
}

impl ResolvedUrl {
    pub fn new(url: String, via: ResolvedVia) -> Self {
        Self { url, via }
    }

    /// Returns true if the redirect could not be followed.
    pub fn is_fallback(&self) -> bool {
        self.via == ResolvedVia::Fallback
    }
}
