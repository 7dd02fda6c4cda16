mod controller;

pub use controller::{Outcome, SelectedFile, SessionController, SessionState};
