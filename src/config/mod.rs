pub mod model;
pub use model::{load_render_config, RenderConfig};
