mod args;
mod reflect;

pub use args::Args;
pub use reflect::Reflect;
