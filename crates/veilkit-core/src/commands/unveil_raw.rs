use std::path::Path;

use crate::media::CodecOptions;
use crate::result::Result;

/// unveil all raw data, no content format interpretation is happening.
/// Just a raw binary dump of the bits gathered by the engine.
pub fn unveil_raw(secret_media: &Path, destination_file: &Path, options: CodecOptions) -> Result<()> {
    crate::api::unveil_raw::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}
