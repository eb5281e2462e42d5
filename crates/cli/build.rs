//! Bakes the workspace `.env` credentials into the binary.
//!
//! Writes `TENCENT_SECRET_ID`, `TENCENT_SECRET_KEY` and `TENCENT_REGION` to
//! `$OUT_DIR/build_constants.rs`. A missing or unreadable `.env` yields the
//! defaults (empty secrets, region `ap-guangzhou`) and never fails the build.

use std::env;
use std::path::PathBuf;

use scanidcard_config::build_constants::{BuildConstants, cargo_warning, rerun_if_changed};
use scanidcard_config::constants::DOTENV_FILE_NAME;
use scanidcard_config::{EnvMap, resolve_credentials, try_load};

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    // crates/cli -> workspace root
    let dotenv_path = manifest_dir.join("../..").join(DOTENV_FILE_NAME);

    println!("cargo:rerun-if-changed=build.rs");
    println!("{}", rerun_if_changed(&dotenv_path));

    // No subscriber runs here, so read failures are reported as cargo warnings.
    let env = try_load(&dotenv_path).unwrap_or_else(|e| {
        println!("{}", cargo_warning(&e));
        EnvMap::new()
    });

    let credentials = resolve_credentials(&env);
    if credentials.ensure_present().is_err() {
        println!(
            "{}",
            cargo_warning(format!(
                "No complete Tencent Cloud credentials in {}; recognize will need --env-file",
                dotenv_path.display()
            ))
        );
    }

    BuildConstants::from_credentials(&credentials)
        .write_to(&out_dir)
        .expect("failed to write build constants");
}
