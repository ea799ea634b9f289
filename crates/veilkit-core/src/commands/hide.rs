use std::path::{Path, PathBuf};

use crate::media::CodecOptions;
use crate::result::Result;

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    data_file: Option<PathBuf>,
    message: Option<String>,
    key: Option<String>,
    options: CodecOptions,
) -> Result<()> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_media(media)
        .with_output(write_to_file)
        .use_key(key)
        .use_file(data_file)
        .use_message(message)
        .execute()
}
