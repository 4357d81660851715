/// One user-visible shortcut entry that can be rendered in the page hint line
/// and in the help popup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HelpAction {
    pub(crate) footer_label: &'static str,
    pub(crate) key: &'static str,
    pub(crate) popup_label: &'static str,
}

impl HelpAction {
    /// Creates one help action descriptor.
    pub(crate) const fn new(
        footer_label: &'static str,
        key: &'static str,
        popup_label: &'static str,
    ) -> Self {
        Self {
            footer_label,
            key,
            popup_label,
        }
    }
}

/// Action availability snapshot for listing pages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ListingHelpState {
    pub(crate) can_go_back: bool,
    pub(crate) can_open_selected: bool,
    pub(crate) has_breadcrumb_links: bool,
}

/// Returns help actions for Home, Bot Detail and Version Detail.
/// These entries are used by the help overlay and include all available
/// actions.
pub(crate) fn listing_actions(state: ListingHelpState) -> Vec<HelpAction> {
    let mut actions = vec![HelpAction::new("quit", "q", "Quit")];

    if state.can_open_selected {
        actions.push(HelpAction::new("open", "Enter", "Open selected entry"));
    }

    actions.push(HelpAction::new("nav", "j/k", "Navigate entries"));
    push_navigation_actions(
        &mut actions,
        state.can_go_back,
        state.has_breadcrumb_links,
    );
    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Returns compact listing footer actions for the page-level hint line.
pub(crate) fn listing_footer_actions(state: ListingHelpState) -> Vec<HelpAction> {
    let mut actions = vec![HelpAction::new("quit", "q", "Quit")];

    if state.can_open_selected {
        actions.push(HelpAction::new("open", "Enter", "Open selected entry"));
    }
    if state.can_go_back {
        actions.push(HelpAction::new("back", "Esc", "Go back"));
    }

    actions.push(HelpAction::new("nav", "j/k", "Navigate entries"));
    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Returns help actions for the Report Frame.
pub(crate) fn report_actions(can_go_back: bool) -> Vec<HelpAction> {
    let mut actions = vec![
        HelpAction::new("quit", "q", "Quit"),
        HelpAction::new("open direct", "o", "Open raw report externally"),
        HelpAction::new("scroll", "j/k", "Scroll report"),
        HelpAction::new("top", "g", "Scroll to top"),
    ];
    push_navigation_actions(&mut actions, can_go_back, true);
    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Returns compact Report Frame footer actions for the page-level hint line.
pub(crate) fn report_footer_actions(can_go_back: bool) -> Vec<HelpAction> {
    let mut actions = vec![
        HelpAction::new("quit", "q", "Quit"),
        HelpAction::new("open direct", "o", "Open raw report externally"),
    ];

    if can_go_back {
        actions.push(HelpAction::new("back", "Esc", "Go back"));
    }

    actions.push(HelpAction::new("scroll", "j/k", "Scroll report"));
    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Renders one-line footer help text from projected actions.
pub(crate) fn footer_text(actions: &[HelpAction]) -> String {
    let mut help_text = String::new();

    for (index, action) in actions.iter().enumerate() {
        if index > 0 {
            help_text.push_str(" | ");
        }

        help_text.push_str(action.key);
        help_text.push_str(": ");
        help_text.push_str(action.footer_label);
    }

    help_text
}

fn push_navigation_actions(
    actions: &mut Vec<HelpAction>,
    can_go_back: bool,
    has_breadcrumb_links: bool,
) {
    if can_go_back {
        actions.push(HelpAction::new("back", "Esc/h", "Go back"));
    }

    if has_breadcrumb_links {
        actions.push(HelpAction::new("crumb", "0-9", "Follow breadcrumb link"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_actions_hide_enter_without_selectable_entry() {
        // Arrange
        let state = ListingHelpState {
            can_go_back: false,
            can_open_selected: false,
            has_breadcrumb_links: false,
        };

        // Act
        let actions = listing_actions(state);

        // Assert
        assert!(!actions.iter().any(|action| action.key == "Enter"));
        assert!(!actions.iter().any(|action| action.key == "Esc/h"));
        assert!(actions.iter().any(|action| action.key == "j/k"));
    }

    #[test]
    fn test_listing_actions_show_back_and_breadcrumbs_when_available() {
        // Arrange
        let state = ListingHelpState {
            can_go_back: true,
            can_open_selected: true,
            has_breadcrumb_links: true,
        };

        // Act
        let actions = listing_actions(state);

        // Assert
        assert!(actions.iter().any(|action| action.key == "Enter"));
        assert!(actions.iter().any(|action| action.key == "Esc/h"));
        assert!(actions.iter().any(|action| action.key == "0-9"));
    }

    #[test]
    fn test_report_footer_actions_always_offer_open_direct() {
        // Arrange & Act
        let actions = report_footer_actions(false);

        // Assert
        assert!(actions.iter().any(|action| action.key == "o"));
        assert!(!actions.iter().any(|action| action.key == "Esc"));
    }

    #[test]
    fn test_footer_text_joins_key_and_label() {
        // Arrange
        let actions = [
            HelpAction::new("quit", "q", "Quit"),
            HelpAction::new("help", "?", "Help"),
        ];

        // Act
        let text = footer_text(&actions);

        // Assert
        assert_eq!(text, "q: quit | ?: help");
    }
}
