pub mod scale;
pub mod scanner;
pub mod selection;
pub mod session;
pub mod zoom;

pub use scale::{Magnifier, DEFAULT_ZOOM_FACTOR};
pub use scanner::{scan_folder, SUPPORTED_IMAGE_EXTENSIONS};
pub use selection::Selection;
pub use session::ViewerSession;
pub use zoom::ZoomController;
