//! Permission-gated media picking

use crate::error::{CoreError, PickerError, Result};
use crate::traits::{FilePicker, PermissionGate};
use crate::types::{MediaKind, PickedFile};
use tracing::{debug, info, warn};

/// Pick one file of `kind`
///
/// Audio needs a granted permission first; posters go through the image
/// library which needs none.
///
/// Returns `Ok(None)` when the user denied access or dismissed the picker.
pub async fn pick_media(
    permissions: &dyn PermissionGate,
    picker: &dyn FilePicker,
    kind: MediaKind,
) -> Result<Option<PickedFile>> {
    if kind == MediaKind::Audio && !permissions.request(kind).await? {
        info!(?kind, "Media permission denied");
        return Ok(None);
    }

    match picker.pick(kind).await {
        Ok(file) => {
            let file = file.normalized(kind);
            debug!(uri = %file.uri, name = ?file.name, "Picked file");
            Ok(Some(file))
        }
        Err(PickerError::Cancelled) => {
            debug!(?kind, "Picker cancelled");
            Ok(None)
        }
        Err(e) => {
            warn!(?kind, error = %e, "Picker failed");
            Err(CoreError::Picker(e))
        }
    }
}
