pub mod chat;
pub mod login;
pub mod panels;
pub mod settings;

pub use chat::ChatView;
pub use login::LoginView;
pub use panels::{JobsPanel, ProductsPanel};
pub use settings::SettingsPanel;
