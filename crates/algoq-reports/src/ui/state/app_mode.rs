/// Interaction mode layered over the current view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppMode {
    /// Keys drive the current page.
    Browse,
    /// The keybinding popup is open on top of the current page.
    Help { scroll_offset: u16 },
}
