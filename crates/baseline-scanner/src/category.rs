//! Token categories and their reporting policies.

use baseline_data::FeatureClass;

/// The syntax categories the line scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// A numeric length with a `px` unit, e.g. `16px`.
    LengthUnit,
    /// A function call name, e.g. `image-set` in `image-set(`.
    FunctionCall,
    /// An opening tag name, e.g. `dialog` in `<dialog`.
    TagName,
    /// An allow-listed global identifier, e.g. `fetch`.
    GlobalIdent,
}

/// The fixed order categories are scanned in within a line.
pub const SCAN_ORDER: [TokenCategory; 4] = [
    TokenCategory::LengthUnit,
    TokenCategory::FunctionCall,
    TokenCategory::TagName,
    TokenCategory::GlobalIdent,
];

/// Decides whether a token's finding is reported, given its lookup outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionPolicy {
    /// Report regardless of whether the registry knows the token.
    Always,
    /// Report only when the token resolved to a feature record.
    RequireRecord,
    /// Report only when the token resolved to a record whose status is
    /// classified.
    RequireKnownStatus,
}

impl TokenCategory {
    /// Returns the category as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::LengthUnit => "length-unit",
            TokenCategory::FunctionCall => "function-call",
            TokenCategory::TagName => "tag-name",
            TokenCategory::GlobalIdent => "global-identifier",
        }
    }

    /// Returns the reporting policy for this category.
    pub fn inclusion_policy(&self) -> InclusionPolicy {
        match self {
            TokenCategory::LengthUnit => InclusionPolicy::Always,
            TokenCategory::FunctionCall | TokenCategory::TagName => InclusionPolicy::RequireRecord,
            TokenCategory::GlobalIdent => InclusionPolicy::RequireKnownStatus,
        }
    }

    /// Returns the curated-mapping class tokens of this category resolve
    /// under, if the category participates in curated resolution.
    pub fn feature_class(&self) -> Option<FeatureClass> {
        match self {
            TokenCategory::LengthUnit => None,
            TokenCategory::FunctionCall => Some(FeatureClass::CssFunction),
            TokenCategory::TagName => Some(FeatureClass::HtmlElement),
            TokenCategory::GlobalIdent => Some(FeatureClass::JsGlobal),
        }
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
