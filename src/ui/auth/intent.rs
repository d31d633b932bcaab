use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AuthIntent {
    /// Blank fields are replaced by placeholder values.
    Login { name: String, email: String },
    Logout,
}

impl Intent for AuthIntent {}
