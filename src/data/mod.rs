pub mod frame_view;
pub mod parser;
pub mod path;
pub mod record;
pub mod scale;
pub mod sequence;
pub mod window;
