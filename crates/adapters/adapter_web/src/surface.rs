//! DOM theme surface: root attribute plus inline `display` of the icons.

use themeswitch_app::config::ThemeConfig;
use themeswitch_app::ports::ThemeSurface;
use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::icon::{Icon, IconDisplay};
use themeswitch_domain::theme::Theme;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, SvgElement};

use crate::error::{JsError, WebError};

/// An icon marker; inline SVG icons are as common as HTML ones.
enum IconElement {
    Html(HtmlElement),
    Svg(SvgElement),
}

impl IconElement {
    fn from_element(el: Element) -> Option<Self> {
        match el.dyn_into::<HtmlElement>() {
            Ok(html) => Some(Self::Html(html)),
            Err(el) => el.dyn_into::<SvgElement>().ok().map(Self::Svg),
        }
    }

    fn style(&self) -> CssStyleDeclaration {
        match self {
            Self::Html(el) => el.style(),
            Self::Svg(el) => el.style(),
        }
    }
}

/// The page side of the toggle.
///
/// A missing or unstylable icon is logged once at construction and skipped
/// afterwards, so the marker keeps working on partial markup.
pub struct DomThemeSurface {
    root: Element,
    attribute: String,
    sun: Option<IconElement>,
    moon: Option<IconElement>,
}

impl DomThemeSurface {
    /// Bind to the document root and the icons found inside `toggle`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Js`] when an icon selector is rejected by the
    /// browser.
    pub fn locate(
        root: Element,
        toggle: &Element,
        config: &ThemeConfig,
    ) -> Result<Self, WebError> {
        Ok(Self {
            root,
            attribute: config.marker_attribute.clone(),
            sun: find_icon(toggle, &config.sun_selector, Icon::Sun)?,
            moon: find_icon(toggle, &config.moon_selector, Icon::Moon)?,
        })
    }

    fn icon(&self, icon: Icon) -> Option<&IconElement> {
        match icon {
            Icon::Sun => self.sun.as_ref(),
            Icon::Moon => self.moon.as_ref(),
        }
    }
}

fn find_icon(
    toggle: &Element,
    selector: &str,
    icon: Icon,
) -> Result<Option<IconElement>, WebError> {
    let Some(el) = toggle.query_selector(selector).map_err(JsError::from)? else {
        tracing::warn!(%icon, selector, "icon not found inside toggle");
        return Ok(None);
    };
    let found = IconElement::from_element(el);
    if found.is_none() {
        tracing::warn!(%icon, selector, "icon element cannot be styled");
    }
    Ok(found)
}

impl ThemeSurface for DomThemeSurface {
    fn marker(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn set_marker(&self, theme: Theme) -> Result<(), ThemeSwitchError> {
        self.root
            .set_attribute(&self.attribute, theme.as_str())
            .map_err(|err| JsError::from(err).into_dom())
    }

    fn set_icon(&self, icon: Icon, display: IconDisplay) -> Result<(), ThemeSwitchError> {
        let Some(el) = self.icon(icon) else {
            return Ok(());
        };
        el.style()
            .set_property("display", display.as_css())
            .map_err(|err| JsError::from(err).into_dom())
    }
}
