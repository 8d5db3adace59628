//! Immediate-mode widgets drawn through [`crate::Ui`].

mod slider;
mod text_field;
