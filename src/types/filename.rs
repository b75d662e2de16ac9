//! Icon filename grammar.
//!
//! Asset filenames encode everything the reports need. Two shapes exist:
//!
//! ```text
//! PDF/<namespace>_<subspace>_<token>..._<weight>.pdf
//! SVG/<prefix>_<icon_key>_<size>_<style>.svg
//! ```
//!
//! The PDF tokens after the two namespace tokens become a camel-cased
//! identifier (`ic_fluent_airplane_24_filled.pdf` is `airplane24Filled`).
//! The SVG stem is used as-is and its final token is the weight.

use crate::error::{IconError, Result};

use super::variant::Style;

/// Token separator shared by both platforms.
pub const SEPARATOR: char = '_';

/// Default leading tokens of generated SVG filenames.
pub const DEFAULT_PREFIX: &str = "ic_fluent";

/// A parsed PDF asset filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfName {
    pub namespace: String,
    pub subspace: String,
    /// Remaining tokens, weight last. Never empty.
    pub tokens: Vec<String>,
}

impl PdfName {
    pub fn parse(filename: &str) -> Result<Self> {
        let stem = filename.strip_suffix(".pdf").unwrap_or(filename);
        let mut parts = stem.split(SEPARATOR).map(str::to_string);

        match (parts.next(), parts.next()) {
            (Some(namespace), Some(subspace)) => {
                let tokens: Vec<String> = parts.collect();
                if tokens.is_empty() {
                    return Err(malformed_pdf(filename));
                }
                Ok(Self {
                    namespace,
                    subspace,
                    tokens,
                })
            }
            _ => Err(malformed_pdf(filename)),
        }
    }

    pub fn weight(&self) -> &str {
        // parse() guarantees at least one token
        self.tokens.last().map(String::as_str).unwrap_or_default()
    }

    /// Camel-cased identifier built from the tokens after the namespace.
    pub fn identifier(&self) -> String {
        let mut tokens = self.tokens.iter();
        let mut out = tokens.next().cloned().unwrap_or_default();
        for token in tokens {
            out.push_str(&title_case(token));
        }
        out
    }
}

fn malformed_pdf(filename: &str) -> IconError {
    IconError::MalformedFilename {
        filename: filename.to_string(),
        expected: "PDF names need at least three tokens: <namespace>_<subspace>_<name..>_<weight>.pdf"
            .to_string(),
    }
}

/// A parsed SVG asset filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgName {
    /// Filename without the `.svg` extension.
    pub stem: String,
    pub weight: String,
}

impl SvgName {
    pub fn parse(filename: &str) -> Result<Self> {
        let stem = filename.strip_suffix(".svg").unwrap_or(filename);
        let (_, weight) = stem
            .rsplit_once(SEPARATOR)
            .ok_or_else(|| IconError::MalformedFilename {
                filename: filename.to_string(),
                expected: "SVG names end with _<weight>.svg".to_string(),
            })?;

        Ok(Self {
            stem: stem.to_string(),
            weight: weight.to_string(),
        })
    }

    pub fn identifier(&self) -> &str {
        &self.stem
    }

    /// Numeric size token directly before the weight, if any.
    pub fn size(&self) -> Option<u32> {
        let mut parts = self.stem.rsplit(SEPARATOR);
        parts.next()?;
        parts.next()?.parse().ok()
    }
}

/// The expected SVG filename for one icon variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluentName<'a> {
    pub prefix: &'a str,
    pub icon_key: &'a str,
    pub size: u32,
    pub style: Style,
}

impl FluentName<'_> {
    pub fn to_filename(&self) -> String {
        format!(
            "{}_{}_{}_{}.svg",
            self.prefix, self.icon_key, self.size, self.style
        )
    }
}

/// Normalize an icon group name into its filename key.
pub fn icon_key_for(group: &str) -> String {
    group.to_lowercase().replace(' ', "_")
}

/// Uppercase each letter that follows a non-letter, lowercase the rest.
fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut prev_letter = false;
    for c in token.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}
