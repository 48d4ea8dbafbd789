pub mod dispatch;
pub mod form;
