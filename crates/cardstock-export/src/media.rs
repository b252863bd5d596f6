//! Media reference discovery, fetching, and rewriting.
//!
//! Card HTML references media by bare filename in `src` attributes; those
//! files live in the host application's media store, not next to the
//! exported page. The resolver pulls each referenced file out of the
//! store, persists it under the bundle's `media/` folder, and hands back
//! the relative path the HTML should use instead.
//!
//! Rewriting is a literal string substitution, kept behind
//! [`rewrite_media_refs`] so a structured HTML edit could replace it
//! without touching callers.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use regex_lite::Regex;
use tracing::debug;

use crate::error::Result;
use crate::store::CardStore;

/// Extract media references from an HTML fragment.
///
/// Returns every `src="..."` or `src='...'` attribute value, one entry
/// per occurrence, in document order. External URLs are included;
/// classify them with [`is_external`].
pub fn extract_media_refs(html: &str) -> Vec<String> {
    let pattern = Regex::new(r#"src="([^"]+)"|src='([^']+)'"#).unwrap();
    let mut refs = Vec::new();
    for cap in pattern.captures_iter(html) {
        if let Some(m) = cap.get(1).or_else(|| cap.get(2)) {
            refs.push(m.as_str().to_string());
        }
    }
    refs
}

/// Whether a reference points outside the media store.
///
/// External references are never fetched or rewritten.
pub fn is_external(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// The result of rewriting one HTML fragment.
#[derive(Debug, Clone)]
pub struct Rewritten {
    /// The fragment with resolved references replaced by local paths.
    pub html: String,
    /// External URLs encountered, in document order, left in place.
    pub external: Vec<String>,
}

/// Fetches internal media references and persists them into the bundle.
#[derive(Debug)]
pub struct MediaResolver<'a, S: CardStore> {
    store: &'a S,
    media_dir: PathBuf,
}

impl<'a, S: CardStore> MediaResolver<'a, S> {
    /// Create a resolver writing into the given `media/` directory.
    pub fn new(store: &'a S, media_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            media_dir: media_dir.into(),
        }
    }

    /// Resolve one internal reference to a bundle-relative path.
    ///
    /// Returns `Ok(None)` when the reference cannot be resolved: it is an
    /// external URL, the store does not have the file, the bytes do not
    /// sniff as a recognized image format, or the name is not a plain
    /// filename. The caller leaves the original reference in place - a
    /// broken link is an accepted degraded outcome. Filesystem failures
    /// while persisting are run-level errors and do propagate.
    pub async fn resolve(&self, reference: &str) -> Result<Option<String>> {
        if is_external(reference) || !is_plain_filename(reference) {
            return Ok(None);
        }
        let Some(bytes) = self.store.fetch_media(reference).await else {
            return Ok(None);
        };
        if image::guess_format(&bytes).is_err() {
            debug!(filename = %reference, "unrecognized media format, leaving reference as-is");
            return Ok(None);
        }
        fs::create_dir_all(&self.media_dir)?;
        // Same-named files from different sources are not deduplicated:
        // last write wins.
        fs::write(self.media_dir.join(reference), &bytes)?;
        Ok(Some(format!("media/{}", reference)))
    }
}

/// Rewrite every resolvable internal reference in `html` to its local
/// path, collecting external URLs on the way.
///
/// Bytes are fetched once per reference occurrence (no dedup cache), but
/// each distinct reference is substituted only once - the substitution
/// already covers all of its occurrences.
pub async fn rewrite_media_refs<S: CardStore>(
    html: &str,
    resolver: &MediaResolver<'_, S>,
) -> Result<Rewritten> {
    let mut out = html.to_string();
    let mut external = Vec::new();
    let mut substituted: HashSet<String> = HashSet::new();

    for reference in extract_media_refs(html) {
        if is_external(&reference) {
            external.push(reference);
            continue;
        }
        if let Some(local) = resolver.resolve(&reference).await? {
            if substituted.insert(reference.clone()) {
                out = out.replace(&reference, &local);
            }
        }
    }

    Ok(Rewritten {
        html: out,
        external,
    })
}

/// A bare filename: no path separators, no parent components.
///
/// Anything else could land a store-controlled write outside `media/`,
/// so it is refused and the reference stays unresolved.
fn is_plain_filename(reference: &str) -> bool {
    !reference.is_empty()
        && reference != "."
        && reference != ".."
        && !reference.contains('/')
        && !reference.contains('\\')
}
