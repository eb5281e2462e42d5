//! Tencent Cloud API endpoint implementations.

mod id_card;

pub use id_card::{
    ACTION, CONTENT_TYPE, DEFAULT_ENDPOINT, HOST, SERVICE, VERSION, IdCardOcrCall, id_card_ocr,
};
