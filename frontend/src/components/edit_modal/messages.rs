use super::form::FormField;

pub enum Msg {
    Input(FormField, String),
    Submit,
    Cancel,
}
