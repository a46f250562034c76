//! Page binding: forwards changes on rendered form controls.

use formdom::DomElement;
use log::{debug, warn};

use crate::dispatcher::{Dispatcher, NotifyReport};
use crate::error::DispatchError;

/// Class carried by every control that reports changes.
pub const FORM_CONTROL: &str = "form-control";

/// Report a change of the element `id` inside a rendered tree.
///
/// Only elements carrying the `form-control` class are forwarded; anything
/// else yields an empty report.
pub fn notify_change(
    dispatcher: &Dispatcher<DomElement>,
    root: &DomElement,
    id: &str,
) -> Result<NotifyReport, DispatchError> {
    let Some(element) = root.find_by_id(id) else {
        warn!("Change reported for unknown element {id}");
        return Ok(NotifyReport::default());
    };

    if !element.has_class(FORM_CONTROL) {
        debug!("Element {id} is not a form control, change not forwarded");
        return Ok(NotifyReport::default());
    }

    dispatcher.notify(element)
}
