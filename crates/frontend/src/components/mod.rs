//! The page regions ("slots") the shell composes.

mod chat_panel;
mod install_prompt;
mod member_area;
mod static_region;

pub use chat_panel::ChatPanel;
pub use install_prompt::InstallPrompt;
pub use member_area::MemberArea;
pub use static_region::StaticRegion;
