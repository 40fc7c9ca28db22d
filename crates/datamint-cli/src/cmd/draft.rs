use anyhow::Result;
use datamint_core::metadata::form::PublishType;
use datamint_publish::drafts::DraftStore;
use serde::Serialize;

use crate::args::DraftAction;
use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct DraftOut {
    pub key: String,
    pub action: &'static str,
}

pub fn run(store: &DraftStore, action: DraftAction) -> Result<()> {
    match action {
        DraftAction::Show { kind } => {
            let form = store.load(PublishType::parse(&kind)?)?;
            output::print(&form)
        }
        DraftAction::Save { form, kind } => {
            let form = input::read_form_file(&form, input::parse_kind(kind.as_deref())?)?;
            store.save(&form)?;
            output::print(&DraftOut {
                key: store.key(form.publish_type()),
                action: "saved",
            })
        }
        DraftAction::Reset { kind } => {
            let kind = PublishType::parse(&kind)?;
            store.reset(kind)?;
            output::print(&DraftOut {
                key: store.key(kind),
                action: "reset",
            })
        }
    }
}
