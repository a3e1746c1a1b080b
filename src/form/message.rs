//! The single inline message shown above the form pages.

use crate::surface::FormSurface;

pub const STEP_MSG_ID: &str = "step-msg";
pub const STEP_MSG_CLASS: &str = "msg";
/// Inserted as the container's second child, right after the title.
pub const STEP_MSG_INDEX: usize = 1;

/// Show `text` in the step message, creating the element on first use.
/// Later calls reuse the same element.
pub fn show_step_msg(surface: &dyn FormSurface, text: &str) {
    if !surface.has_element(STEP_MSG_ID) {
        surface.insert_container_child(STEP_MSG_ID, STEP_MSG_CLASS, STEP_MSG_INDEX);
    }
    surface.set_text(STEP_MSG_ID, text);
}

/// Clear the step message text. The element stays in place.
pub fn hide_step_msg(surface: &dyn FormSurface) {
    if surface.has_element(STEP_MSG_ID) {
        surface.set_text(STEP_MSG_ID, "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessPage;

    fn msg_count(page: &HeadlessPage) -> usize {
        page.container_children()
            .iter()
            .filter(|id| *id == STEP_MSG_ID)
            .count()
    }

    #[test]
    fn first_show_inserts_second_child() {
        let page = HeadlessPage::intake_form();
        show_step_msg(&page, "请填写完整第2页所有必填项");
        assert_eq!(page.container_children()[1], STEP_MSG_ID);
        assert_eq!(page.class_of(STEP_MSG_ID).as_deref(), Some(STEP_MSG_CLASS));
        assert_eq!(page.text(STEP_MSG_ID).as_deref(), Some("请填写完整第2页所有必填项"));
    }

    #[test]
    fn second_show_reuses_element() {
        let page = HeadlessPage::intake_form();
        show_step_msg(&page, "联系方式必须为11位数字");
        show_step_msg(&page, "年龄必须在10-120之间");
        assert_eq!(msg_count(&page), 1);
        assert_eq!(page.text(STEP_MSG_ID).as_deref(), Some("年龄必须在10-120之间"));
    }

    #[test]
    fn hide_clears_without_removing() {
        let page = HeadlessPage::intake_form();
        show_step_msg(&page, "网络错误，请重试");
        hide_step_msg(&page);
        assert_eq!(msg_count(&page), 1);
        assert_eq!(page.text(STEP_MSG_ID).as_deref(), Some(""));
    }

    #[test]
    fn hide_before_show_creates_nothing() {
        let page = HeadlessPage::intake_form();
        hide_step_msg(&page);
        assert_eq!(msg_count(&page), 0);
        assert!(!page.has_element(STEP_MSG_ID));
    }
}
