use std::path::Path;

use crate::media::CodecOptions;
use crate::result::Result;

/// Returns the unveiled data, and writes it to `output_file` when one is given
pub fn unveil(
    secret_media: &Path,
    output_file: Option<&Path>,
    key: Option<String>,
    options: CodecOptions,
) -> Result<Vec<u8>> {
    let api = crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .use_key(key);

    match output_file {
        Some(output_file) => api.into_output_file(output_file).execute(),
        None => api.execute(),
    }
}
