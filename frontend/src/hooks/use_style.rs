use web_sys::window;
use yew::prelude::*;

/// Injects a `<style>` element into the document head for the lifetime of
/// the calling component.
#[hook]
pub fn use_style(css: &'static str) {
    use_effect_with(css, move |css| {
        let style_element = window()
            .and_then(|w| w.document())
            .and_then(|document| {
                let head = document.head()?;
                let style = document.create_element("style").ok()?;
                style.set_text_content(Some(*css));
                head.append_child(&style).ok()?;
                Some(style)
            });

        if style_element.is_none() {
            log::warn!("Could not attach wheel styles");
        }

        // Return cleanup function
        move || {
            if let Some(style) = style_element {
                style.remove();
            }
        }
    });
}
