use super::{Menu, MenuEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerAction {
    Browse,
    Purchase,
    Back,
    Exit,
}

pub fn menu() -> Menu<CustomerAction> {
    Menu::new(
        "Customer menu",
        vec![
            MenuEntry::new("Browse items", CustomerAction::Browse),
            MenuEntry::new("Purchase", CustomerAction::Purchase),
            MenuEntry::new("Back", CustomerAction::Back),
            MenuEntry::new("Exit", CustomerAction::Exit),
        ],
    )
}
