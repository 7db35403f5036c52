//! Turns a row layout into drawing primitives.

pub mod colors;
pub mod info;
pub mod primitives;
pub mod scene;

pub use colors::{lighten, ColorAssigner};
pub use info::info_text;
pub use primitives::{EventRef, LabelStyle, LineStyle, PrimitiveId, RenderModel, RenderPrimitive};
pub use scene::build_scene;
