pub mod diagnostics;
pub mod localization;

pub use diagnostics::{Diagnostic, Resolved};
pub use localization::Localization;
