use tracker_hub_core::types::RowAction;

use crate::message::{Command, ModalMessage};
use crate::model::{App, Modal};

use super::content::start_row_action;

pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }

        ModalMessage::ToggleDeleteFocus => {
            if let Some(Modal::ConfirmDelete { focus, .. }) = &mut app.modal.active {
                *focus = 1 - *focus;
            }
            None
        }

        ModalMessage::Confirm => {
            match app.modal.active.take()? {
                Modal::ConfirmDelete {
                    index, focus: 1, ..
                } => start_row_action(app, RowAction::Delete(index)),
                // Cancel, or acknowledging a notice / help
                _ => None,
            }
        }
    }
}
