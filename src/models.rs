pub mod draft_state;
pub mod hero;
