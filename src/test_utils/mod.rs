#![allow(missing_docs)]

pub(crate) mod fixtures;
pub(crate) mod http;

pub(crate) use fixtures::{
    contractor, contractor_json, make_token, transaction_detail, transaction_detail_json,
    transaction_list_item, transaction_list_item_json,
};
pub(crate) use http::{get_client, spawn_backend};
