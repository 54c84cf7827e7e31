use tracing::{debug, warn};
use webshell_common::{Notification, ToastLength};

use crate::events::{EventOutcome, FileChoiceCallback, FileChooserParams, Incident, PickerResult};

use super::Supervisor;

const ANY_MIME: &str = "*/*";
const PICKER_MISSING_MESSAGE: &str = "File chooser is not available";

impl Supervisor {
    /// Open the document picker for a page file input.
    ///
    /// Returns whether the picker was launched. A callback still waiting from
    /// an earlier request is resolved empty first.
    pub(super) fn file_chooser_requested(
        &mut self,
        callback: FileChoiceCallback,
        params: &FileChooserParams,
    ) -> bool {
        if let Some(previous) = self.pending_file_choice.take() {
            debug!("superseding pending file choice");
            previous.cancel();
        }
        debug!(
            accept = ?params.accept_types,
            multiple = params.allow_multiple,
            "file chooser requested"
        );
        self.pending_file_choice = Some(callback);

        match self.host.picker.open_document(ANY_MIME) {
            Ok(()) => true,
            Err(e) => {
                self.record(Incident::PickerMissing);
                warn!(
                    incident = %Incident::PickerMissing,
                    error = %e,
                    "document picker launch failed"
                );
                self.host.ui.notify(
                    Notification::error(PICKER_MISSING_MESSAGE).with_length(ToastLength::Long),
                );
                if let Some(callback) = self.pending_file_choice.take() {
                    callback.cancel();
                }
                false
            }
        }
    }

    pub(super) fn file_chooser_result(
        &mut self,
        result: PickerResult,
        data: Option<String>,
    ) -> EventOutcome {
        let Some(callback) = self.pending_file_choice.take() else {
            debug!("picker result without a pending file choice ignored");
            return EventOutcome::Ignored;
        };
        match (result, data) {
            (PickerResult::Ok, Some(uri)) if !uri.is_empty() => {
                debug!(uri = %uri, "file chosen");
                callback.resolve(vec![uri]);
            }
            _ => {
                debug!(?result, "file choice cancelled");
                callback.cancel();
            }
        }
        EventOutcome::Done
    }
}
