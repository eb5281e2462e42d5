//! Credentials baked in at build time from the workspace `.env`.
//!
//! Provides `TENCENT_SECRET_ID`, `TENCENT_SECRET_KEY` and `TENCENT_REGION`.

include!(concat!(env!("OUT_DIR"), "/build_constants.rs"));
