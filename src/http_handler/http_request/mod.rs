pub mod request_common;
pub mod unit_type_list_get;
pub mod vessel_list_get;
pub mod voyage_create_post;
pub mod voyage_delete_delete;
pub mod voyage_list_get;
