//! Design tokens shared with `tailwind.config.js`. The same values are
//! emitted as global CSS so `text-brand` and `shadow-soft-glow` resolve even
//! when the Tailwind build is not in the pipeline.

use stylist::yew::Global;
use yew::prelude::*;

pub const BRAND: &str = "#00f5a0";
pub const BRAND_DARK: &str = "#00c37a";
pub const SOFT_GLOW: &str = "0 0 60px rgba(0, 245, 160, 0.35)";
pub const FONT_STACK: &str = "system-ui, ui-sans-serif, sans-serif";

pub fn global_css() -> String {
    format!(
        r#"
        html, body {{
            margin: 0;
            font-family: {font};
            background: #000;
        }}
        .text-brand {{ color: {brand}; }}
        .text-brand-dark {{ color: {brand_dark}; }}
        .shadow-soft-glow {{ box-shadow: {glow}; }}
        .pin-sticky {{
            position: sticky;
            top: 0;
        }}
        .motion-target {{
            will-change: transform, opacity;
        }}
        "#,
        font = FONT_STACK,
        brand = BRAND,
        brand_dark = BRAND_DARK,
        glow = SOFT_GLOW,
    )
}

#[function_component(DesignTokens)]
pub fn design_tokens() -> Html {
    html! {
        <Global css={global_css()} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_css_carries_tokens() {
        let css = global_css();
        assert!(css.contains(".text-brand { color: #00f5a0; }"));
        assert!(css.contains(".shadow-soft-glow { box-shadow: 0 0 60px rgba(0, 245, 160, 0.35); }"));
        assert!(css.contains("position: sticky;"));
    }
}
