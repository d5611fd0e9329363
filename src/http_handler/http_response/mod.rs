pub(crate) mod response_common;
pub mod unit_type_list;
pub mod vessel_list;
pub mod voyage_create;
pub mod voyage_delete;
pub mod voyage_list;
