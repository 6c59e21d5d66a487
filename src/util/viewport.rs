//! Viewport helpers for the narrow (mobile) layout.
//!
//! On narrow screens the quote output sits below the form, so a freshly
//! generated quote is scrolled into view. Requires a browser environment;
//! both helpers are no-ops without the `csr` feature.

/// Whether the window is narrower than `breakpoint_px`.
pub fn is_narrow(breakpoint_px: f64) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map_or(false, |width| width < breakpoint_px)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = breakpoint_px;
        false
    }
}

/// Smoothly scroll the element with `id` to the top of the viewport.
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
