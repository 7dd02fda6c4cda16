mod progress;
mod style;

pub use progress::JobProgressBar;
pub use style::Style;
