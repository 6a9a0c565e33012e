use super::{Menu, MenuEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Customer,
    Exit,
}

pub fn menu() -> Menu<Role> {
    Menu::new(
        "Who is using the counter?",
        vec![
            MenuEntry::new("Owner", Role::Owner),
            MenuEntry::new("Customer", Role::Customer),
            MenuEntry::new("Exit", Role::Exit),
        ],
    )
}
