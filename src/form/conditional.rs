//! Preference-type driven show/hide of the investment and incubation groups.

use crate::surface::FormSurface;

use super::model::{PreferenceType, field_ids};

/// The elements one toggle instance drives.
///
/// Two layouts exist in the page templates (`*_group` ids and `*_fields`
/// ids); both use the same rule, only the ids differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalTargets {
    /// Id of the selector whose value decides the groups.
    pub selector: String,
    pub investment_group: String,
    pub incubation_group: String,
    /// Name of the text field inside the investment group.
    pub investment_field: String,
    /// Name of the text field inside the incubation group.
    pub incubation_field: String,
}

impl ConditionalTargets {
    pub fn new(investment_group: &str, incubation_group: &str) -> Self {
        Self {
            selector: field_ids::PREFERENCE_TYPE.to_string(),
            investment_group: investment_group.to_string(),
            incubation_group: incubation_group.to_string(),
            investment_field: field_ids::INVESTMENT_PREFERENCE.to_string(),
            incubation_field: field_ids::INCUBATION_INFO.to_string(),
        }
    }

    /// `investment_preference_group` / `incubation_info_group`.
    pub fn preference_groups() -> Self {
        Self::new("investment_preference_group", "incubation_info_group")
    }

    /// `investment_fields` / `incubation_fields`.
    pub fn field_sets() -> Self {
        Self::new("investment_fields", "incubation_fields")
    }
}

impl Default for ConditionalTargets {
    fn default() -> Self {
        Self::preference_groups()
    }
}

/// Visibility (and required-ness) of the two groups for a preference type.
/// At most one is active.
pub fn active_groups(kind: PreferenceType) -> (bool, bool) {
    match kind {
        PreferenceType::Investment => (true, false),
        PreferenceType::Incubation => (false, true),
        PreferenceType::Unselected => (false, false),
    }
}

/// Apply the current selector value to the groups. Idempotent.
pub fn toggle_conditional_fields(surface: &dyn FormSurface, targets: &ConditionalTargets) -> PreferenceType {
    let kind = PreferenceType::from_value(&surface.field_value(&targets.selector));
    let (investment, incubation) = active_groups(kind);

    surface.set_visible(&targets.investment_group, investment);
    surface.set_visible(&targets.incubation_group, incubation);
    surface.set_required(&targets.investment_field, investment);
    surface.set_required(&targets.incubation_field, incubation);

    kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessPage;

    fn toggled(value: &str, targets: &ConditionalTargets) -> HeadlessPage {
        let page = HeadlessPage::intake_form();
        page.set_field(field_ids::PREFERENCE_TYPE, value);
        toggle_conditional_fields(&page, targets);
        page
    }

    #[test]
    fn investment_shows_only_investment_group() {
        let t = ConditionalTargets::preference_groups();
        let page = toggled("RWA投资", &t);
        assert!(page.is_visible(&t.investment_group));
        assert!(!page.is_visible(&t.incubation_group));
        assert!(page.is_required("investment_preference"));
        assert!(!page.is_required("incubation_info"));
    }

    #[test]
    fn incubation_shows_only_incubation_group() {
        let t = ConditionalTargets::preference_groups();
        let page = toggled("RWA孵化", &t);
        assert!(!page.is_visible(&t.investment_group));
        assert!(page.is_visible(&t.incubation_group));
        assert!(!page.is_required("investment_preference"));
        assert!(page.is_required("incubation_info"));
    }

    #[test]
    fn anything_else_hides_both() {
        let t = ConditionalTargets::preference_groups();
        for value in ["", "其他", "rwa投资"] {
            let page = toggled(value, &t);
            assert!(!page.is_visible(&t.investment_group), "{value:?}");
            assert!(!page.is_visible(&t.incubation_group), "{value:?}");
            assert!(!page.is_required("investment_preference"));
            assert!(!page.is_required("incubation_info"));
        }
    }

    #[test]
    fn alternate_layout_uses_its_own_ids() {
        let t = ConditionalTargets::field_sets();
        let page = toggled("RWA孵化", &t);
        assert!(page.is_visible("incubation_fields"));
        assert!(!page.is_visible("investment_fields"));
        // The other layout is left alone.
        assert!(page.is_visible("investment_preference_group"));
    }

    #[test]
    fn repeated_toggle_is_idempotent() {
        let t = ConditionalTargets::default();
        let page = toggled("RWA投资", &t);
        let before = (
            page.is_visible(&t.investment_group),
            page.is_visible(&t.incubation_group),
            page.is_required("investment_preference"),
            page.is_required("incubation_info"),
        );
        for _ in 0..3 {
            toggle_conditional_fields(&page, &t);
        }
        let after = (
            page.is_visible(&t.investment_group),
            page.is_visible(&t.incubation_group),
            page.is_required("investment_preference"),
            page.is_required("incubation_info"),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn switching_value_flips_groups() {
        let t = ConditionalTargets::default();
        let page = toggled("RWA投资", &t);
        page.set_field(field_ids::PREFERENCE_TYPE, "RWA孵化");
        assert_eq!(toggle_conditional_fields(&page, &t), PreferenceType::Incubation);
        assert!(!page.is_visible(&t.investment_group));
        assert!(page.is_visible(&t.incubation_group));
    }
}
