use common::model::source::{Source, SourceUpdate};

pub enum Msg {
    Edit(Source),
    Save(SourceUpdate),
    SaveFinished(bool),
    Close,
}
