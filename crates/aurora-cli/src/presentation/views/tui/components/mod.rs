pub mod add_user_drawer;
pub mod confirm;
pub mod form;
pub mod goto_prompt;
pub mod not_found;
pub mod profile;
pub mod sections;
pub mod text_input;
pub mod users_list;

use crossterm::event::{KeyEvent, KeyModifiers};

pub use add_user_drawer::{AddUserDrawer, DrawerAction};
pub use confirm::{ConfirmDialog, PendingAction};
pub use form::{FieldId, FormComponent};
pub use goto_prompt::{GoToPrompt, PromptAction};
pub use not_found::NotFoundComponent;
pub use profile::{ProfileAction, ProfileComponent};
pub use sections::SectionForm;
pub use text_input::TextInput;
pub use users_list::{UsersListAction, UsersListComponent};

/// `Ctrl` held without `Alt`.
///
/// AltGr arrives as `Ctrl+Alt` on some platforms and types ordinary
/// characters (`@` on a German layout), so it is not a chord.
pub fn is_ctrl_chord(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

/// `Alt` held without `Ctrl`.
pub fn is_alt_chord(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) && !key.modifiers.contains(KeyModifiers::CONTROL)
}
