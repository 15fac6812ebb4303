use crate::constants::*;
use galaxy_core::GuideMessage;
use web_sys as web;

/// DOM handles for the guide speech bubble. Missing elements are skipped.
pub struct GuideView {
    bubble: Option<web::Element>,
    title: Option<web::Element>,
    body: Option<web::Element>,
    tip: Option<web::Element>,
    shown: Option<(GuideMessage, bool)>,
}

impl GuideView {
    pub fn find(document: &web::Document) -> Self {
        let get = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("[guide] missing #{id}");
            }
            el
        };
        Self {
            bubble: get(GUIDE_BUBBLE_ID),
            title: get(GUIDE_TITLE_ID),
            body: get(GUIDE_BODY_ID),
            tip: get(GUIDE_TIP_ID),
            shown: None,
        }
    }

    /// Push message text and visibility to the page; no-op when nothing changed.
    pub fn render(&mut self, message: GuideMessage, visible: bool) {
        if self.shown == Some((message, visible)) {
            return;
        }
        if let Some(el) = &self.title {
            el.set_text_content(Some(message.title));
        }
        if let Some(el) = &self.body {
            el.set_text_content(Some(message.body));
        }
        if let Some(el) = &self.tip {
            el.set_text_content(Some(message.tip));
        }
        if let Some(el) = &self.bubble {
            let cl = el.class_list();
            if visible {
                _ = cl.remove_1(GUIDE_HIDDEN_CLASS);
            } else {
                _ = cl.add_1(GUIDE_HIDDEN_CLASS);
            }
        }
        self.shown = Some((message, visible));
    }
}
