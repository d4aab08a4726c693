use log::{debug, error};
use poi_map_logic::UiUpdateSender;

/// Errors meant for the user go to the log, there is no dialog to show them in
pub struct ConsoleUi;

impl UiUpdateSender for ConsoleUi {
    fn send_update(&self) {
        debug!("Widget state updated");
    }

    fn show_error(&self, message: &str) {
        error!("{message}");
    }
}
