mod render;

pub(crate) use render::{print_config, print_full_note, print_messages, print_notes};
