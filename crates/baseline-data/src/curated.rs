//! Curated token-to-feature-id mappings.
//!
//! Raw scanned tokens do not always match a dataset id (`dialog` is stored
//! as `html-elements.dialog`). This table maps a token, qualified by the
//! syntactic class it was found in, to its canonical dataset id.

/// The syntactic class a token was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureClass {
    /// A CSS property name.
    CssProperty,
    /// A CSS function name.
    CssFunction,
    /// An HTML element name.
    HtmlElement,
    /// A JavaScript global identifier.
    JsGlobal,
}

impl FeatureClass {
    /// Returns the class as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureClass::CssProperty => "css-property",
            FeatureClass::CssFunction => "css-function",
            FeatureClass::HtmlElement => "html-element",
            FeatureClass::JsGlobal => "js-global",
        }
    }
}

impl std::fmt::Display for FeatureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Curated `(class, token) -> canonical id` entries. Token names are stored
/// lowercase; `curated_feature_id` folds its argument before matching.
pub static CURATED_FEATURE_IDS: &[(FeatureClass, &str, &str)] = &[
    (
        FeatureClass::CssProperty,
        "backdrop-filter",
        "css-properties.backdrop-filter",
    ),
    (
        FeatureClass::CssProperty,
        "contain-intrinsic-size",
        "css-properties.contain-intrinsic-size",
    ),
    (
        FeatureClass::CssFunction,
        "image-set",
        "css-functions.image-set",
    ),
    (FeatureClass::CssFunction, "env", "css-functions.env"),
    (FeatureClass::HtmlElement, "dialog", "html-elements.dialog"),
    (FeatureClass::HtmlElement, "picture", "html-elements.picture"),
    (FeatureClass::JsGlobal, "fetch", "api.fetch"),
    (
        FeatureClass::JsGlobal,
        "abortcontroller",
        "api.AbortController",
    ),
];

/// Maps a token to its curated canonical feature id, if one is listed for
/// the given class. Matching ignores ASCII case.
pub fn curated_feature_id(class: FeatureClass, name: &str) -> Option<&'static str> {
    let name = name.to_ascii_lowercase();
    CURATED_FEATURE_IDS
        .iter()
        .find(|(entry_class, entry_name, _)| *entry_class == class && *entry_name == name)
        .map(|(_, _, id)| *id)
}
