/// Email composition
pub mod composer;

pub use composer::EmailComposer;
