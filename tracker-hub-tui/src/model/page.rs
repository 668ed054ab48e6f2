use tracker_hub_core::i18n::t;

/// Pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Saved connections and the credential form
    #[default]
    Connections,
    /// Project, workflow and status queries
    Data,
}

impl Page {
    pub fn title(self) -> &'static str {
        let texts = t();
        match self {
            Page::Connections => texts.nav.connections,
            Page::Data => texts.nav.data,
        }
    }
}
