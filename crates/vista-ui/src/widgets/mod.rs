pub mod button;
pub mod fill;
pub mod image;
pub mod text;
pub mod text_edit;
pub mod textbox;

pub use button::{
    AnimationFrames, Button, ButtonBuilder, ButtonFrame, ButtonLook, ButtonStyle, ColourStyle,
};
pub use fill::{Fade, Fill};
pub use image::Image;
pub use text::Text;
pub use text_edit::TextEditState;
pub use textbox::{Blink, Focus, TextBox};
