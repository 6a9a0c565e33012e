use super::{Menu, MenuEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerAction {
    AddItem,
    ListItems,
    UpdateItem,
    DeleteItem,
    SalesReport,
    Back,
    Exit,
}

pub fn menu() -> Menu<OwnerAction> {
    Menu::new(
        "Owner menu",
        vec![
            MenuEntry::new("Add item", OwnerAction::AddItem),
            MenuEntry::new("List items", OwnerAction::ListItems),
            MenuEntry::new("Update item", OwnerAction::UpdateItem),
            MenuEntry::new("Delete item", OwnerAction::DeleteItem),
            MenuEntry::new("Sales report", OwnerAction::SalesReport),
            MenuEntry::new("Back", OwnerAction::Back),
            MenuEntry::new("Exit", OwnerAction::Exit),
        ],
    )
}
