pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod error;
pub mod form;
pub mod icons;
pub mod modal;
pub mod notification;
pub mod page_frame;
pub mod request_seq;
pub mod theme;
