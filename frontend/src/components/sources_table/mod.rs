//! Sources table: one row per record plus the edit modal for the selected row.
//!
//! The table tracks which record is being edited and whether its save is in
//! flight. The save itself is forwarded to the page through `on_update`, which
//! answers on the request's `done` callback.

mod messages;
mod props;
mod session;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use props::{SourcesTableProps, UpdateRequest};
use session::EditSession;

pub struct SourcesTable {
    session: EditSession,
}

impl Component for SourcesTable {
    type Message = Msg;
    type Properties = SourcesTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: EditSession::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(source) => self.session.open(source, ctx.props().disabled),
            Msg::Save(update) => {
                let Some(source_id) = self.session.begin_save() else {
                    return false;
                };
                ctx.props().on_update.emit(UpdateRequest {
                    source_id,
                    update,
                    done: ctx.link().callback(Msg::SaveFinished),
                });
                true
            }
            Msg::SaveFinished(stored) => {
                self.session.finish_save(stored);
                true
            }
            Msg::Close => self.session.close(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
