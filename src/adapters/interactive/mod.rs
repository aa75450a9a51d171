pub mod console_user_info;
pub mod null_user_info;
