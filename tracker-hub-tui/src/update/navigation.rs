use crate::message::NavigationMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::Next => app.navigation.select_next(),
        NavigationMessage::Previous => app.navigation.select_previous(),
        NavigationMessage::Go(page) => app.navigation.select_page(page),
    }
}
