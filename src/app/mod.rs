mod actions;
mod command;
mod copied;
mod core;
mod editor;
mod file;
mod flash;
mod navigation;
mod section;
mod toc;

pub use copied::{CopiedSet, RowId};
pub use self::core::*;
pub use editor::{EditorField, ReplacementEditor};
pub use flash::{CopyFlash, FLASH_DURATION};
pub use navigation::{Cursor, SectionLayout};
pub use section::Section;
pub use toc::{IntersectionEvent, ScrollSpy, SmoothScroll, ACTIVATION_BAND_PERCENT, HEADER_CLEARANCE};

// Re-export config for use within app module
use crate::config;
pub(crate) use config::{ColorScheme, RcConfig};
