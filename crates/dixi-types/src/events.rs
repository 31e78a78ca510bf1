use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Interaction with the search input
    Input(InputEvent),
    Command(Command),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// New contents of the input field
    Text(String),
    MoveUp,
    MoveDown,
    Submit,
    Escape,
    Focus,
    Blur,
    /// Pointer selection of a suggestion row (zero based)
    Pick(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    Word(Uuid),
    RandomWord,
    Letters,
    /// One page of entries for a first letter, pages are 1-based
    Letter { letter: String, page: u32 },
    Stats,
    Recent,
    ToggleTheme,
    Help,
}
