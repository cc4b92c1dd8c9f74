pub(crate) mod create;
pub(crate) mod index;
pub(crate) mod owner_index;
pub(crate) mod update_status;
