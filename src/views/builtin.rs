/// The fixed set of built-in smart views shown above the user's lists.
///
/// These are named placeholders only: none of them is backed by tasks in this
/// scope, so they always resolve to an empty task sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinView {
    Inbox,
    Today,
    Upcoming,
    Anytime,
    Someday,
    Logbook,
}

impl BuiltinView {
    /// All built-in views in enumeration (display) order
    pub const ALL: [BuiltinView; 6] = [
        BuiltinView::Inbox,
        BuiltinView::Today,
        BuiltinView::Upcoming,
        BuiltinView::Anytime,
        BuiltinView::Someday,
        BuiltinView::Logbook,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinView::Inbox => "Inbox",
            BuiltinView::Today => "Today",
            BuiltinView::Upcoming => "Upcoming",
            BuiltinView::Anytime => "Anytime",
            BuiltinView::Someday => "Someday",
            BuiltinView::Logbook => "Logbook",
        }
    }
}

impl std::fmt::Display for BuiltinView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
