mod adapter;
mod layout;
mod text;

pub use adapter::{DrawImage, RenderAdapter, Renderer};
pub use layout::BoardLayout;
pub use text::render_board_to_string;
