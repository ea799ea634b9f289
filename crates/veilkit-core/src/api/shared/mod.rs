mod key_material;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::error;

pub use key_material::*;

use crate::error::VeilError;
use crate::result::Result;

/// Writes unveiled data to `target`, replacing it
pub(crate) fn write_output(target: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(target).map_err(|source| {
        error!("Error creating file {target:?}: {source}");
        VeilError::WriteError { source }
    })?;

    file.write_all(data)
        .map_err(|source| VeilError::WriteError { source })
}
