//! Design Tokens
//!
//! Key/value pairs that drive the CSS variables in the page head. Pages
//! render the hard-coded defaults; the `design_tokens` table will feed
//! these once the admin tooling exists.

/// Design tokens rendered into the `:root` CSS block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignTokens {
    pub bg: String,
    pub fg: String,
    pub link: String,
    pub muted: String,
    pub maxw: String,
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self {
            bg: "#fff".to_string(),
            fg: "#000".to_string(),
            link: "#000".to_string(),
            muted: "#444".to_string(),
            maxw: "1200px".to_string(),
        }
    }
}

impl DesignTokens {
    /// Builds tokens from stored key/value pairs.
    ///
    /// Missing or unknown keys keep their defaults.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut tokens = Self::default();
        for (key, value) in pairs {
            match key {
                "bg" => tokens.bg = value.to_string(),
                "fg" => tokens.fg = value.to_string(),
                "link" => tokens.link = value.to_string(),
                "muted" => tokens.muted = value.to_string(),
                "maxw" => tokens.maxw = value.to_string(),
                _ => {}
            }
        }
        tokens
    }

    /// Renders the tokens as a `:root` CSS variable block.
    pub fn to_css(&self) -> String {
        format!(
            ":root{{--bg:{};--fg:{};--link:{};--muted:{};--maxw:{}}}",
            self.bg, self.fg, self.link, self.muted, self.maxw
        )
    }
}
