/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Create,
    Practice,
}

impl Screen {
    /// Title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Create => "Create Flashcards",
            Screen::Practice => "Practice Mode",
        }
    }

    /// One-line description under the title
    pub fn description(&self) -> &'static str {
        match self {
            Screen::Home => {
                "Create, edit, and practice your own flashcards. All data is saved on this machine."
            }
            Screen::Create => "Write a question and its answer, then add it to your deck.",
            Screen::Practice => "Flip each card to check your answer.",
        }
    }
}
